use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read the input")]
    Io(#[from] std::io::Error),

    #[error("the input ended while expecting {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} values but found {found}")]
    WrongNumberOfValues {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{token}' is not a rotation marker, expected 'R'")]
    InvalidMarker { line: usize, token: String },

    #[error("line {line}: the rectangle count says {expected} but more rectangles follow")]
    TooManyRectangles { line: usize, expected: usize },
}
