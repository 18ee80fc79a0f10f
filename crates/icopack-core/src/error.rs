use std::fmt;

/// Error type for container assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcoError {
    EmptyInput,
    TooManyImages { count: usize },
    DecodeFailed { index: usize, reason: String },
    UnsupportedDimension { index: usize, width: u32, height: u32 },
    PayloadTooLarge { index: usize },
}

impl fmt::Display for IcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IcoError::EmptyInput => {
                write!(f, "no images supplied")
            }
            IcoError::TooManyImages { count } => {
                write!(f, "got {} images, an icon directory holds at most 65535", count)
            }
            IcoError::DecodeFailed { index, reason } => {
                write!(f, "failed to decode image {}: {}", index, reason)
            }
            IcoError::UnsupportedDimension { index, width, height } => {
                write!(
                    f,
                    "image {} is {}x{} pixels, a directory entry describes at most 256x256",
                    index, width, height
                )
            }
            IcoError::PayloadTooLarge { index } => {
                write!(
                    f,
                    "image {} does not fit in the container's 32-bit offset range",
                    index
                )
            }
        }
    }
}

impl std::error::Error for IcoError {}
