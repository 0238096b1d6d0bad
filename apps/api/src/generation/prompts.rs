// All prompt constants for the Generation module.
// The section labels here must stay in sync with generation::parser.

/// System prompt for resume and cover letter generation.
pub const GENERATION_SYSTEM: &str = "You are an expert ATS resume writer specializing in \
    creating highly optimized resumes that achieve maximum ATS scores. You understand both \
    ATS algorithms and human readability requirements.";

/// Generation prompt template.
/// Replace: {job_description}, {experience}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Create a highly optimized ATS-friendly resume and cover letter based on the following job description and candidate experience.
Format the response in clear sections:

=== RESUME ===
Create a professional, ATS-optimized resume that:
1. Matches the job requirements
2. Uses relevant keywords from the job description
3. Includes quantifiable achievements
4. Follows standard ATS-friendly formatting
5. Highlights the most relevant skills and experience
6. Uses the candidate experience as the factual reference

=== COVER LETTER ===
Create a compelling cover letter that:
1. Addresses key job requirements
2. Demonstrates understanding of the role
3. Highlights relevant achievements
4. Shows enthusiasm and cultural fit
5. Uses the candidate experience as the factual reference

=== METRICS ===
SCORE: [expected ATS match score 0-100 for the documents you generated]
CHANCE: [estimated interview chance 0-100 for the documents you generated]

=== OPTIMIZATION TIPS ===
Provide 3-5 specific suggestions for further optimization, one per line, each starting with "- "

Job Description:
{job_description}

Candidate Experience:
{experience}

Note: keep the four section headers exactly as written above. Format the resume and cover letter with proper spacing and ATS-friendly formatting."#;
