//! Building blocks for text-generation extraction adapters.
//!
//! A network adapter renders the prompt with [`render_extraction_prompt`],
//! sends it to its service, and hands the raw answer to
//! [`parse_extraction_response`]. [`CannedTaskExtractor`] replays a fixed
//! answer through the same parser.

mod canned;
mod prompt;
mod response;

pub use canned::CannedTaskExtractor;
pub use prompt::render_extraction_prompt;
pub use response::parse_extraction_response;
