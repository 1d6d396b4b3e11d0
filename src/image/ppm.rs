use std::fmt::Display;

use super::PixelGrid;
use crate::error::Error;

pub const P3_TAG: &str = "P3";
pub const P6_TAG: &str = "P6";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PPMEncoding {
    /// decimal samples separated by whitespace
    Ascii,
    /// one raw byte per sample
    Binary,
}

impl PPMEncoding {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ascii => P3_TAG,
            Self::Binary => P6_TAG,
        }
    }
}

impl TryFrom<&str> for PPMEncoding {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            P3_TAG => Ok(Self::Ascii),
            P6_TAG => Ok(Self::Binary),
            _ => Err(Error::UnsupportedEncoding(value.to_owned())),
        }
    }
}

impl Display for PPMEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Header fields carried through a fill unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PPMHeader {
    pub encoding: PPMEncoding,
    /// comment lines including their leading '#'
    pub comments: Vec<String>,
    pub cols: usize,
    pub rows: usize,
    /// max value exactly as it appeared in the source file
    pub max_value: String,
}

pub struct PPMImage {
    pub header: PPMHeader,
    pub grid: PixelGrid,
}
