//! Reading instances and writing packings in the plain text formats of the command line tool.
//!
//! An instance lists the plate width, the number of rectangles and then one `w h` line per
//! rectangle:
//!
//! ```text
//! 8
//! 4
//! 3 3
//! 5 3
//! 3 5
//! 5 5
//! ```
//!
//! A packing starts with `W H`, followed by the number of rectangles and one `w h x y` line per
//! rectangle in input order, where `w h` are the placed dimensions and a trailing `R` marks a
//! turned rectangle. Blank lines are ignored by both parsers.
mod parse_error;
mod parser;
mod writer;

pub use parse_error::ParseError;
pub use parser::parse_instance;
pub use parser::parse_solution;
pub use writer::write_solution;
