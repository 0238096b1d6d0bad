// Text utilities shared by the analysis and generation paths:
// input bounding, keyword overlap, and document-to-text extraction.
// Everything except the upload handler is pure; nothing touches the network.

pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
