use std::io::{self, Write};

use crate::{
    image::{ImageWriter, PPMEncoding, PPMHeader, PPMImage, PixelGrid},
    Error,
};

pub struct PPMImageWriter<'a, T: Write> {
    writer: T,
    image: &'a PPMImage,
}

impl<'a, T: Write> PPMImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a PPMImage) -> Self {
        Self { writer, image }
    }

    fn write_header(&mut self, header: &PPMHeader) -> io::Result<()> {
        writeln!(self.writer, "{}", header.encoding)?;
        for comment in header.comments.iter() {
            writeln!(self.writer, "{}", comment)?;
        }
        writeln!(self.writer, "{} {}", header.cols, header.rows)?;
        writeln!(self.writer, "{}", header.max_value)
    }

    /// one image row per line, samples separated by single spaces
    fn write_ascii_dots(&mut self, grid: &PixelGrid) -> io::Result<()> {
        let (rows, _) = grid.dimensions();
        for row in 0..rows {
            let mut separator = "";
            for color in grid.row(row) {
                for component in color.components() {
                    write!(self.writer, "{}{}", separator, component)?;
                    separator = " ";
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_binary_dots(&mut self, grid: &PixelGrid) -> io::Result<()> {
        for color in grid.pixels() {
            self.writer.write_all(&color.components())?;
        }
        Ok(())
    }

    fn write_ppm(&mut self) -> io::Result<()> {
        let image = self.image;
        self.write_header(&image.header)?;
        match image.header.encoding {
            PPMEncoding::Ascii => self.write_ascii_dots(&image.grid)?,
            PPMEncoding::Binary => self.write_binary_dots(&image.grid)?,
        }
        self.writer.flush()
    }
}

impl<T: Write> ImageWriter for PPMImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.write_ppm().map_err(Error::FailedToWriteImageFile)
    }
}

#[cfg(test)]
mod test {
    use super::PPMImageWriter;
    use crate::{
        color::RGBColor,
        image::{
            reader::ppm::PPMImageReader, ImageReader, ImageWriter, PPMEncoding, PPMHeader,
            PPMImage, PixelGrid,
        },
    };

    fn create_test_image(encoding: PPMEncoding, comments: Vec<String>) -> PPMImage {
        let mut grid = PixelGrid::allocate(2, 2).unwrap();
        grid.set(0, 1, RGBColor::RED).unwrap();
        grid.set(1, 0, RGBColor::new(1, 2, 3)).unwrap();
        PPMImage {
            header: PPMHeader {
                encoding,
                comments,
                cols: 2,
                rows: 2,
                max_value: "255".to_owned(),
            },
            grid,
        }
    }

    fn write_to_bytes(image: &PPMImage) -> Vec<u8> {
        let mut output = Vec::new();
        PPMImageWriter::new(&mut output, image).write_image().unwrap();
        output
    }

    #[test]
    fn write_ascii() {
        let image = create_test_image(PPMEncoding::Ascii, vec!["# made by hand".to_owned()]);
        let output = String::from_utf8(write_to_bytes(&image)).unwrap();
        assert_eq!(
            output,
            "P3\n# made by hand\n2 2\n255\n0 0 0 255 0 0\n1 2 3 0 0 0\n"
        );
    }

    #[test]
    fn write_binary_without_comments() {
        let image = create_test_image(PPMEncoding::Binary, Vec::new());
        let output = write_to_bytes(&image);
        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend([0, 0, 0, 255, 0, 0, 1, 2, 3, 0, 0, 0]);
        assert_eq!(output, expected);
    }

    #[test]
    fn reread_written_binary_image() {
        let comments = vec!["#a".to_owned(), "#b".to_owned()];
        let image = create_test_image(PPMEncoding::Binary, comments);
        let output = write_to_bytes(&image);
        let reread = PPMImageReader::new(output.as_slice()).read_image().unwrap();
        assert_eq!(reread.header, image.header);
        assert!(reread.grid.pixels().eq(image.grid.pixels()));
        assert_eq!(write_to_bytes(&reread), output);
    }
}
