// All prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for document analysis; enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str = "You are an expert ATS resume analyzer. \
    You analyze resumes and cover letters against job descriptions and return the analysis \
    in JSON format. You must return ONLY valid JSON with no additional text or explanation.";

/// Analysis prompt template.
/// Replace: {job_description}, {resume_text}, {cover_letter_text},
///          {json_only_instruction}, {score_range_instruction}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the provided resume and cover letter against the job description. Return a JSON object in the following format:

{
  "resume_analysis": {
    "missing_keywords": ["keyword1", "keyword2"],
    "suggestions": ["suggestion1", "suggestion2"],
    "metrics": {
      "interview_chance": 75,
      "ats_score": 80
    }
  },
  "cover_letter_analysis": {
    "missing_keywords": ["keyword1", "keyword2"],
    "suggestions": ["suggestion1", "suggestion2"],
    "metrics": {
      "interview_chance": 75,
      "ats_score": 80
    }
  },
  "overall_feedback": {
    "summary": "A brief summary of the overall analysis",
    "improvement_areas": ["area1", "area2"],
    "strengths": ["strength1", "strength2"]
  }
}

Job Description:
{job_description}

Resume:
{resume_text}

Cover Letter:
{cover_letter_text}

Remember: {json_only_instruction} {score_range_instruction}"#;
