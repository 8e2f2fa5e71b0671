pub mod i2c;
pub mod lcd;
pub mod mock;

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum BusError {
    #[error("invalid argument")]
    InvalidArgument,
    #[error("I2C error: {0:?}")]
    I2c(embedded_hal::i2c::ErrorKind),
    #[error("error: {0}")]
    Other(String),
}

pub type BusResult<T> = Result<T, BusError>;

/// A bus that can perform addressed block writes to a single chip.
///
/// The bus number and chip address are bound when the transport is created, so each write only
/// carries the command byte and the block body.
pub trait BusTransport: Debug {
    /// Writes `command` followed by `data` as one bus transaction.
    fn write_block(&mut self, command: u8, data: &[u8]) -> BusResult<()>;

    /// Writes a raw byte sequence, using the first byte as the command byte.
    ///
    /// An empty sequence is not sent at all.
    fn write_raw(&mut self, bytes: &[u8]) -> BusResult<()> {
        match bytes.split_first() {
            Some((&command, data)) => self.write_block(command, data),
            None => Ok(()),
        }
    }
}
