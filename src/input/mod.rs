//! Grammar input: rule syntax, grammar files and interactive entry

pub mod file;
pub mod interactive;
pub mod parser;

pub use file::GrammarFile;
pub use interactive::Session;
pub use parser::{parse_rule, parse_symbols};
