//! Command sequences understood by the display's I2C backpack.
//!
//! Every command is three bytes. The first byte (`0x80`) is sent as the I2C command byte and marks
//! the block as a control sequence rather than character data. The second byte selects the
//! function, and the third carries its argument.

/// Prefix of every control sequence.
pub const CONTROL: u8 = 0x80;

/// Function selector for display control commands.
pub const FN_DISPLAY: u8 = 0x05;

/// Function selector for the backlight level.
pub const FN_BACKLIGHT: u8 = 0x01;

/// Byte sent as padding by a newline.
pub const SPACE: u8 = 0x20;

/// Clears the display.
///
/// Command: `80 05 01`.
pub const CLEAR: [u8; 3] = [CONTROL, FN_DISPLAY, 0x01];

/// Shows the cursor.
///
/// Command: `80 05 0e`.
pub const CURSOR_ON: [u8; 3] = [CONTROL, FN_DISPLAY, 0x0e];

/// Hides the cursor.
///
/// Command: `80 05 0c`.
pub const CURSOR_OFF: [u8; 3] = [CONTROL, FN_DISPLAY, 0x0c];

/// Sets the backlight brightness, `0` being off and `255` the brightest.
///
/// Command: `80 01 VV`.
pub fn backlight(value: u8) -> [u8; 3] {
    [CONTROL, FN_BACKLIGHT, value]
}

/// Selects [CURSOR_ON] or [CURSOR_OFF].
pub fn cursor(on: bool) -> [u8; 3] {
    if on { CURSOR_ON } else { CURSOR_OFF }
}
