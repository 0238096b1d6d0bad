//! Deterministic fallback draft, used when the upstream generation call fails.
//!
//! The output uses the same `=== SECTION ===` layout the model is asked for, so
//! it goes through the regular parser unchanged. Same inputs give byte-identical
//! output.

/// Title ladder: first keyword found in the job description wins.
const TITLES: [(&str, &str); 2] = [
    ("senior", "Senior Software Engineer"),
    ("lead", "Lead Software Engineer"),
];

const DEFAULT_TITLE: &str = "Software Engineer";

/// Skills used when nothing is detected, and to fill missing template slots.
const DEFAULT_SKILLS: [&str; 3] = ["Programming", "Problem Solving", "Agile Development"];

/// Characters of the candidate's experience quoted in the cover letter.
const EXPERIENCE_EXCERPT_CHARS: usize = 100;

pub const FALLBACK_ATS_SCORE: u8 = 85;
pub const FALLBACK_INTERVIEW_CHANCE: u8 = 78;

const FALLBACK_TIPS: [&str; 2] = [
    "Customize the resume further for the specific role",
    "Add more quantifiable achievements",
];

/// Builds the fallback draft for a job description and experience text.
pub fn build_fallback(job_description: &str, experience: &str) -> String {
    let jd_lower = job_description.to_lowercase();
    let title = detect_title(&jd_lower);
    let skills = detect_skills(&jd_lower);
    let excerpt = flatten_excerpt(experience);

    let mut out = String::new();
    out.push_str("=== RESUME ===\n");
    out.push_str(&resume_body(title, &skills));
    out.push_str("\n=== COVER LETTER ===\n");
    out.push_str(&cover_letter_body(title, &skills, &excerpt));
    out.push_str("\n=== METRICS ===\n");
    out.push_str(&format!("SCORE: {FALLBACK_ATS_SCORE}\n"));
    out.push_str(&format!("CHANCE: {FALLBACK_INTERVIEW_CHANCE}\n"));
    out.push_str("\n=== OPTIMIZATION TIPS ===\n");
    for tip in FALLBACK_TIPS {
        out.push_str("- ");
        out.push_str(tip);
        out.push('\n');
    }
    out
}

/// Leading characters of the experience text collapsed onto one line, so the
/// excerpt can never start a `=== ... ===` marker line of its own.
fn flatten_excerpt(experience: &str) -> String {
    let head: String = experience.chars().take(EXPERIENCE_EXCERPT_CHARS).collect();
    head.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn detect_title(jd_lower: &str) -> &'static str {
    TITLES
        .iter()
        .find(|(needle, _)| jd_lower.contains(needle))
        .map(|(_, title)| *title)
        .unwrap_or(DEFAULT_TITLE)
}

/// Detected skills in fixed order; never empty.
fn detect_skills(jd_lower: &str) -> Vec<&'static str> {
    let has_word = |word: &str| {
        jd_lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == word)
    };

    let mut skills = Vec::new();
    if jd_lower.contains("python") {
        skills.push("Python");
    }
    if jd_lower.contains("aws") {
        skills.push("AWS");
    }
    if jd_lower.contains("sql") {
        skills.push("SQL");
    }
    if jd_lower.contains("machine learning") || has_word("ml") {
        skills.push("Machine Learning");
    }
    if jd_lower.contains("spark") {
        skills.push("Apache Spark");
    }

    if skills.is_empty() {
        skills.extend(DEFAULT_SKILLS);
    }
    skills
}

/// Template slot `index`: the detected skill, or a default when too few matched.
fn skill_slot<'a>(skills: &[&'a str], index: usize) -> &'a str {
    skills
        .get(index)
        .copied()
        .unwrap_or(DEFAULT_SKILLS[index % DEFAULT_SKILLS.len()])
}

/// "A", "A and B", "A, B and C".
fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn resume_body(title: &str, skills: &[&str]) -> String {
    let first = skill_slot(skills, 0);
    let second = skill_slot(skills, 1);
    let third = skill_slot(skills, 2);

    format!(
        "[Your Name]
[Your Email] | [Your Phone] | [Your Location]

PROFESSIONAL SUMMARY
Experienced {title} with expertise in {expertise}. Demonstrated track record of delivering high-quality software solutions and driving technical innovation.

SKILLS
Technical Skills: {all}
Methodologies: Agile, Scrum, CI/CD
Tools: Git, JIRA, Docker

PROFESSIONAL EXPERIENCE

{title}
Current Company | MM/YYYY - Present
• Led development of {first} applications, resulting in 30% improvement in system performance
• Implemented {second} solutions for scalable cloud infrastructure
• Collaborated with cross-functional teams to deliver critical projects on time
• Mentored junior developers and conducted code reviews

Previous Role
Previous Company | MM/YYYY - MM/YYYY
• Developed and maintained {third} applications
• Improved system efficiency by 25% through optimization
• Collaborated with stakeholders to define technical requirements

EDUCATION
Bachelor's Degree in Computer Science
University Name | Graduation Year

CERTIFICATIONS
• Relevant Technical Certifications
• Cloud Platform Certifications
",
        expertise = join_with_and(skills),
        all = skills.join(", "),
    )
}

fn cover_letter_body(title: &str, skills: &[&str], excerpt: &str) -> String {
    let first = skill_slot(skills, 0);
    let second = skill_slot(skills, 1);
    let third = skill_slot(skills, 2);

    format!(
        "[Your Name]
[Your Contact Information]
[Date]

Dear Hiring Manager,

I am writing to express my strong interest in the {title} position at your company. With my background in {all} and my passion for technology, I am confident in my ability to contribute significantly to your team.

Throughout my career, I have demonstrated expertise in {first} and {second}, delivering impactful solutions that drive business value. My experience aligns with your requirements, particularly in:

• Developing and maintaining {first} applications
• Working with {second} technologies
• Implementing best practices in software development
• Collaborating with cross-functional teams

I am particularly excited about the opportunity to work with {third} and contribute to your projects. My track record of {excerpt}... demonstrates my ability to deliver results in similar environments.

Thank you for considering my application. I look forward to discussing how my skills and experience can benefit your team.

Best regards,
[Your Name]
",
        all = skills.join(", "),
    )
}
