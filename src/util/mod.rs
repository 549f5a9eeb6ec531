pub mod error;
pub mod parse;

pub use error::ParseError;
pub use parse::{Notation, parse_coordinate};
