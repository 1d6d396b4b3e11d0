use std::{
    fs::{File, OpenOptions},
    io::{BufReader, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use color::RGBColor;
pub use error::Error;
pub use flood_fill::{FillReport, FillRequest};
use image::{reader::ppm::PPMImageReader, writer::ppm::PPMImageWriter, ImageReader, ImageWriter};

mod cli;
mod color;
mod error;
pub mod flood_fill;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    image_file: PathBuf,
    seed_row: i64,
    seed_col: i64,
    target_color: RGBColor,
}

impl Arguments {
    pub fn image_file(&self) -> &Path {
        &self.image_file
    }
}

impl From<&Arguments> for FillRequest {
    fn from(value: &Arguments) -> Self {
        Self {
            seed_row: value.seed_row,
            seed_col: value.seed_col,
            target_color: value.target_color,
        }
    }
}

fn open_image_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenImageFile(file_path.display().to_string(), e))
}

fn overwrite_image_file(file: &mut File, content: &[u8]) -> Result<()> {
    file.seek(SeekFrom::Start(0)).map_err(Error::FailedToWriteImageFile)?;
    file.set_len(0).map_err(Error::FailedToWriteImageFile)?;
    file.write_all(content).map_err(Error::FailedToWriteImageFile)?;
    file.flush().map_err(Error::FailedToWriteImageFile)
}

/// Flood fills the image file named in `arguments` and writes the result
/// back over it in its original encoding.
///
/// The filled image is encoded into memory first, the file is only
/// truncated once decoding, filling and encoding all succeeded.
pub fn flood_fill_ppm_file(arguments: &Arguments) -> Result<FillReport> {
    let mut image_file = open_image_file(&arguments.image_file)?;
    let mut image = PPMImageReader::new(BufReader::new(&image_file)).read_image()?;
    log::info!(
        "Read {} image '{}'",
        image.header.encoding,
        arguments.image_file.display()
    );
    let report = flood_fill::fill(&mut image.grid, &FillRequest::from(arguments))?;
    let mut output = Vec::new();
    PPMImageWriter::new(&mut output, &image).write_image()?;
    overwrite_image_file(&mut image_file, &output)?;
    log::info!(
        "Replaced {} pixels of color {} with {}",
        report.filled_pixels,
        report.original_color,
        report.target_color
    );
    Ok(report)
}
