//! Resume analysis pipeline: PDF text extraction, skill extraction,
//! job matching, and report assembly.

pub mod handlers;
pub mod matching;
pub mod pdf;
pub mod report;
pub mod skills;
