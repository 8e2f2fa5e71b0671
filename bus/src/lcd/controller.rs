use crate::lcd::command;
use crate::{BusError, BusTransport};
use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum DisplayError {
    #[error("value {value} is out of range, must be in 0 to 255")]
    OutOfRange { value: i64 },
    #[error("invalid display size {width}x{height}")]
    InvalidGeometry { width: usize, height: usize },
    #[error(transparent)]
    Bus(#[from] BusError),
}

pub type DisplayResult<T> = Result<T, DisplayError>;

/// Drives a character display of `width` × `height` cells over a [BusTransport].
///
/// The controller keeps track of the logical cursor position, since the display itself can't be
/// read back. Characters written past the end of a row continue on the next row, and writing past
/// the last row wraps around to the first one.
#[derive(Debug)]
pub struct DisplayController<'a> {
    bus: &'a mut dyn BusTransport,
    width: usize,
    height: usize,
    x: usize,
    y: usize,
}

impl<'a> DisplayController<'a> {
    /// Creates a controller for a display with the given size, with the cursor at (0, 0).
    ///
    /// # Errors
    /// - `DisplayError::InvalidGeometry` if either dimension is zero.
    pub fn new(bus: &'a mut dyn BusTransport, width: usize, height: usize) -> DisplayResult<Self> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidGeometry { width, height });
        }

        debug!("Display {}x{} on {:?}", width, height, bus);

        Ok(DisplayController {
            bus,
            width,
            height,
            x: 0,
            y: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the logical cursor position as `(column, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Writes a string to the display.
    ///
    /// A string containing line separators is written with [Self::write_lines], so every line,
    /// including the last one, is followed by a [Self::newline].
    pub fn write(&mut self, text: &str) -> DisplayResult<()> {
        if text.contains('\n') {
            return self.write_lines(text.split('\n'));
        }

        let payload: Vec<u8> = text.chars().map(encode_char).collect();
        self.write_payload(&payload)
    }

    /// Writes each line followed by a newline.
    ///
    /// Every line is a separate bus transaction, so a failure leaves the earlier lines written.
    pub fn write_lines<I, S>(&mut self, lines: I) -> DisplayResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write(line.as_ref())?;
            self.newline()?;
        }
        Ok(())
    }

    /// Pads the rest of the current row with spaces, moving the cursor to the start of the next row.
    pub fn newline(&mut self) -> DisplayResult<()> {
        let padding = vec![command::SPACE; self.width - self.x];
        self.write_payload(&padding)
    }

    /// Clears the display.
    ///
    /// The logical cursor is left where it was.
    pub fn clear(&mut self) -> DisplayResult<()> {
        self.bus.write_raw(&command::CLEAR)?;
        Ok(())
    }

    /// Shows or hides the cursor.
    pub fn cursor_visibility(&mut self, on: bool) -> DisplayResult<()> {
        self.bus.write_raw(&command::cursor(on))?;
        Ok(())
    }

    /// Sets the backlight brightness.
    ///
    /// # Errors
    /// - `DisplayError::OutOfRange` if `value` is not in 0 to 255. Nothing is sent in that case.
    pub fn set_backlight(&mut self, value: i64) -> DisplayResult<()> {
        let level = u8::try_from(value).map_err(|_| DisplayError::OutOfRange { value })?;
        self.bus.write_raw(&command::backlight(level))?;
        Ok(())
    }

    fn write_payload(&mut self, payload: &[u8]) -> DisplayResult<()> {
        self.bus.write_raw(payload)?;
        self.advance(payload.len());
        Ok(())
    }

    fn advance(&mut self, n: usize) {
        let column = self.x + n;
        let rows = column / self.width;
        self.x = column % self.width;
        self.y = (self.y + rows % self.height) % self.height;
        trace!("Advanced cursor by {} to ({}, {})", n, self.x, self.y);
    }
}

/// Encodes a character as its single-byte code. Characters beyond U+00FF become `?`.
fn encode_char(c: char) -> u8 {
    match u8::try_from(c) {
        Ok(byte) => byte,
        Err(_) => {
            warn!("Character {:?} can't be displayed", c);
            b'?'
        }
    }
}
