mod parser;

pub use parser::{RawPreference, parse_preferences};
