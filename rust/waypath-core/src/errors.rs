use thiserror::Error;

use crate::location::Location;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("location {0} is outside the map")]
    OutOfBounds(Location),
    #[error("invalid cell value {value} at {at}")]
    InvalidCellValue { at: Location, value: i32 },
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, GridError>;
