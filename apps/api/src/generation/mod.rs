// Document generation: prompt, upstream call, section parsing, and the
// template draft used when the upstream call fails.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
