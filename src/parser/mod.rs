// File: ./src/parser/mod.rs
// Turns one line of command arguments into structured requests.
pub mod edit;
pub mod marker;
pub mod syntax;
pub mod tokenizer;

pub use edit::EditCommandParser;
pub use marker::substitute_markers;
pub use syntax::{CliSyntax, DateFlag};
pub use tokenizer::{ArgumentMap, tokenize};
