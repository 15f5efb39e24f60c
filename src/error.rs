use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("x and y must be 1-D arrays of equal length >= 2: got {x_len} and {y_len} samples")]
    Shape { x_len: usize, y_len: usize },
    #[error("{array} contains a non-finite value at index {index}")]
    InvalidValue { array: &'static str, index: usize },
    #[error("{0:?} is not a supported device type; expected \"N\" or \"P\"")]
    InvalidDeviceType(String),
    #[error("too few samples to differentiate: got {got}, need {min}")]
    InsufficientData { got: usize, min: usize },
    #[error("cannot resolve an extremum over the empty {segment} segment")]
    EmptySegment { segment: &'static str },
}
