use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidArguments(String),
    UnableToOpenImageFile(String, std::io::Error),
    FailedToReadImageFile(std::io::Error),
    FailedToWriteImageFile(std::io::Error),
    PPMFileDoesNotContainRequiredToken(&'static str),
    ParsingOfTokenFailed(&'static str),
    UnsupportedEncoding(String),
    UnsupportedMaxValue(String),
    IncompletePixelParsed(usize),
    MismatchOfSizeBetweenHeaderAndValues,
    AllocationFailed(usize, usize),
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    InvalidSeed {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArguments(reason) => {
                write!(f, "Invalid command line arguments: {}", reason)
            }
            Self::UnableToOpenImageFile(path, error) => {
                write!(
                    f,
                    "Unable to open image file '{}' for reading and writing: {}",
                    path, error
                )
            }
            Self::FailedToReadImageFile(error) => {
                write!(f, "Failed to read image file: {}", error)
            }
            Self::FailedToWriteImageFile(error) => {
                write!(f, "Failed to write image file: {}", error)
            }
            Self::PPMFileDoesNotContainRequiredToken(token_name) => {
                write!(f, "Expected token '{}' not found in PPM file", token_name)
            }
            Self::ParsingOfTokenFailed(token_name) => {
                write!(f, "Parsing of token '{}' failed", token_name)
            }
            Self::UnsupportedEncoding(tag) => {
                write!(
                    f,
                    "Unsupported PPM encoding '{}'. Expected 'P3' or 'P6'.",
                    tag
                )
            }
            Self::UnsupportedMaxValue(max_value) => {
                write!(
                    f,
                    "Unsupported max value '{}'. Expected a value between 1 and 255.",
                    max_value
                )
            }
            Self::IncompletePixelParsed(number_of_tokens_parsed) => {
                write!(
                    f,
                    "Incomplete pixel parsed. Expected 3 components, but got {}.",
                    number_of_tokens_parsed
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndValues => {
                write!(
                    f,
                    "Number of pixels does not match the size provided in header"
                )
            }
            Self::AllocationFailed(rows, cols) => {
                write!(
                    f,
                    "Unable to allocate pixel grid of {} rows and {} columns",
                    rows, cols
                )
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Pixel ({}, {}) is outside of the {}x{} pixel grid",
                    row, col, rows, cols
                )
            }
            Self::InvalidSeed {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Seed ({}, {}) is outside of the {}x{} image",
                    row, col, rows, cols
                )
            }
        }
    }
}

impl std::error::Error for Error {}
