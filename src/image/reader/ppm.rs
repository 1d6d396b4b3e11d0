use std::io::{BufRead, ErrorKind, Read};

use super::super::ImageReader;
use super::super::{PPMEncoding, PPMHeader, PPMImage, PixelGrid};
use crate::color::RGBColor;
use crate::Error;

pub struct PPMImageReader<T: BufRead> {
    reader: T,
}

impl<T: BufRead> PPMImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: BufRead> ImageReader for PPMImageReader<T> {
    fn read_image(&mut self) -> crate::Result<PPMImage> {
        let mut tokenizer = PPMTokenizer::new(&mut self.reader);
        let mut parser = PPMParser::new(&mut tokenizer);
        parser.parse_image()
    }
}

/// Splits the textual parts of a PPM stream into whitespace separated tokens.
///
/// Comments run from '#' to the end of the line and are collected instead of
/// being returned as tokens. The whitespace byte terminating a token is
/// consumed, so after the max value token the reader sits on the first
/// byte of binary pixel data.
struct PPMTokenizer<'a, R: BufRead> {
    reader: &'a mut R,
    buffer: Vec<u8>,
    comments: Vec<String>,
}

impl<'a, R: BufRead> PPMTokenizer<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        PPMTokenizer {
            reader,
            buffer: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn next_token(&mut self) -> crate::Result<Option<String>> {
        self.buffer.clear();
        while let Some(byte) = self.peek_byte()? {
            if byte == b'#' {
                if !self.buffer.is_empty() {
                    break;
                }
                self.read_comment()?;
                continue;
            }
            self.reader.consume(1);
            if byte.is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte);
            }
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }

    fn peek_byte(&mut self) -> crate::Result<Option<u8>> {
        let available = self
            .reader
            .fill_buf()
            .map_err(Error::FailedToReadImageFile)?;
        Ok(available.first().copied())
    }

    fn read_comment(&mut self) -> crate::Result<()> {
        let mut line = Vec::new();
        self.reader
            .read_until(b'\n', &mut line)
            .map_err(Error::FailedToReadImageFile)?;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        self.comments.push(String::from_utf8_lossy(&line).into_owned());
        Ok(())
    }

    fn take_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.comments)
    }

    fn has_remaining_bytes(&mut self) -> crate::Result<bool> {
        Ok(self.peek_byte()?.is_some())
    }
}

impl<R: BufRead> Iterator for PPMTokenizer<'_, R> {
    type Item = crate::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

const ENCODING_HEADER_TOKEN_NAME: &str = "Encoding Header";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";
const COLOR_COMPONENT_VALUE_TOKEN_NAME: &str = "Color Component Value";

const LARGEST_SUPPORTED_MAX_VALUE: u16 = u8::MAX as u16;

#[derive(Clone, Copy)]
struct Dot {
    buffer: [u8; 3],
    index: usize,
}

impl Dot {
    fn new() -> Self {
        Self {
            buffer: [u8::default(); 3],
            index: 0,
        }
    }

    fn color(&self) -> RGBColor {
        RGBColor::from(self.buffer)
    }

    fn push_color_component(&mut self, component: u8) {
        if self.is_complete() {
            return;
        }
        self.buffer[self.index] = component;
        self.index += 1;
    }

    fn is_complete(&self) -> bool {
        self.index == 3
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn is_empty(&self) -> bool {
        self.index == 0
    }
}

struct PPMParser<'a, 'b, R: BufRead> {
    tokenizer: &'a mut PPMTokenizer<'b, R>,
}

impl<'a, 'b, R: BufRead> PPMParser<'a, 'b, R> {
    fn new(tokenizer: &'a mut PPMTokenizer<'b, R>) -> Self {
        Self { tokenizer }
    }

    fn parse_image(&mut self) -> crate::Result<PPMImage> {
        let header = self.parse_header()?;
        log::debug!(
            "Parsed {} header of {} columns and {} rows",
            header.encoding,
            header.cols,
            header.rows
        );
        let mut grid = PixelGrid::allocate(header.rows, header.cols)?;
        match header.encoding {
            PPMEncoding::Ascii => self.parse_all_ascii_dots(&mut grid)?,
            PPMEncoding::Binary => self.read_all_binary_dots(&mut grid)?,
        }
        let skipped_comments = self.tokenizer.take_comments();
        if !skipped_comments.is_empty() {
            log::debug!("Skipped {} comments inside pixel data", skipped_comments.len());
        }
        Ok(PPMImage { header, grid })
    }

    fn parse_header(&mut self) -> crate::Result<PPMHeader> {
        let encoding = self.parse_encoding()?;
        let cols = self.parse_dimension(WIDTH_HEADER_TOKEN_NAME)?;
        let rows = self.parse_dimension(HEIGHT_HEADER_TOKEN_NAME)?;
        let max_value = self.parse_max_value()?;
        Ok(PPMHeader {
            encoding,
            comments: self.tokenizer.take_comments(),
            cols,
            rows,
            max_value,
        })
    }

    fn next_required_token(&mut self, token_name: &'static str) -> crate::Result<String> {
        self.tokenizer
            .next_token()?
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(token_name))
    }

    fn parse_encoding(&mut self) -> crate::Result<PPMEncoding> {
        let tag = self.next_required_token(ENCODING_HEADER_TOKEN_NAME)?;
        PPMEncoding::try_from(tag.as_str())
    }

    fn parse_dimension(&mut self, token_name: &'static str) -> crate::Result<usize> {
        self.next_required_token(token_name)?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(token_name))
    }

    fn parse_max_value(&mut self) -> crate::Result<String> {
        let token = self.next_required_token(MAX_VALUE_HEADER_TOKEN_NAME)?;
        let max_value: u16 = token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(MAX_VALUE_HEADER_TOKEN_NAME))?;
        if max_value == 0 || max_value > LARGEST_SUPPORTED_MAX_VALUE {
            return Err(Error::UnsupportedMaxValue(token));
        }
        Ok(token)
    }

    fn parse_all_ascii_dots(&mut self, grid: &mut PixelGrid) -> crate::Result<()> {
        let (rows, cols) = grid.dimensions();
        let expected_number_of_dots = rows * cols;
        let mut number_of_dots = 0;
        let mut current_dot = Dot::new();
        while let Some(token) = self.tokenizer.next() {
            let component = Self::parse_color_value(&token?)?;
            current_dot.push_color_component(component);
            if current_dot.is_complete() {
                if number_of_dots == expected_number_of_dots {
                    return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
                }
                grid.set(
                    number_of_dots / cols,
                    number_of_dots % cols,
                    current_dot.color(),
                )?;
                number_of_dots += 1;
                current_dot.reset();
            }
        }
        Self::check_pixel_was_complete(&current_dot)?;
        if number_of_dots != expected_number_of_dots {
            return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
        }
        Ok(())
    }

    fn read_all_binary_dots(&mut self, grid: &mut PixelGrid) -> crate::Result<()> {
        let (rows, cols) = grid.dimensions();
        if rows == 0 {
            return Ok(());
        }
        let row_length = cols
            .checked_mul(3)
            .ok_or(Error::AllocationFailed(rows, cols))?;
        let mut row_buffer = Vec::new();
        row_buffer
            .try_reserve_exact(row_length)
            .map_err(|_| Error::AllocationFailed(rows, cols))?;
        row_buffer.resize(row_length, 0_u8);
        for row in 0..rows {
            self.tokenizer
                .reader
                .read_exact(&mut row_buffer)
                .map_err(|e| match e.kind() {
                    ErrorKind::UnexpectedEof => Error::MismatchOfSizeBetweenHeaderAndValues,
                    _ => Error::FailedToReadImageFile(e),
                })?;
            for (col, samples) in row_buffer.chunks_exact(3).enumerate() {
                grid.set(row, col, RGBColor::new(samples[0], samples[1], samples[2]))?;
            }
        }
        if self.tokenizer.has_remaining_bytes()? {
            log::warn!("Ignoring trailing bytes after binary pixel data");
        }
        Ok(())
    }

    fn check_pixel_was_complete(dot: &Dot) -> crate::Result<()> {
        if !dot.is_empty() {
            return Err(Error::IncompletePixelParsed(dot.index));
        }
        Ok(())
    }

    fn parse_color_value(token: &str) -> crate::Result<u8> {
        token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(COLOR_COMPONENT_VALUE_TOKEN_NAME))
    }
}
