// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod model;
pub mod parser;
pub mod source;
pub mod storage;

pub use model::{Appearance, Event};
pub use parser::{DateContext, ParseOptions, load_schedule, parse_schedule};
pub use source::{FileSource, LineSource, MemorySource, SourceFailure, SourceLines};
