// Document analysis: resume + optional cover letter scored against a job description.
// The model is asked for JSON; validator.rs turns whatever comes back into a fixed shape.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod validator;
