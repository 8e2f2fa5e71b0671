//! [BusTransport] on top of any [embedded_hal::i2c::I2c] bus, like `linux_embedded_hal::I2cdev`.
use crate::{BusError, BusResult, BusTransport};
use embedded_hal::i2c::{Error, I2c, SevenBitAddress};
use log::trace;
use std::fmt::{Debug, Formatter};

/// An I2C bus bound to the chip at one 7-bit address.
pub struct I2cBus<I: I2c> {
    i2c: I,
    address: SevenBitAddress,
}

impl<I: I2c> I2cBus<I> {
    /// Highest 7-bit chip address.
    pub const MAX_ADDRESS: u16 = 0x7f;

    /// Binds all further writes on `i2c` to the chip at `address`.
    ///
    /// # Errors
    /// - `BusError::InvalidArgument` if the address does not fit in 7 bits.
    pub fn new(i2c: I, address: u16) -> BusResult<Self> {
        if address > Self::MAX_ADDRESS {
            return Err(BusError::InvalidArgument);
        }
        Ok(I2cBus {
            i2c,
            address: address as SevenBitAddress,
        })
    }
}

impl<I: I2c> Debug for I2cBus<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "I2cBus({:#04x})", self.address)
    }
}

impl<I: I2c> BusTransport for I2cBus<I> {
    fn write_block(&mut self, command: u8, data: &[u8]) -> BusResult<()> {
        trace!("Writing block: cmd={:#04x} data={:02x?}", command, data);

        let mut buf = Vec::with_capacity(data.len() + 1);
        buf.push(command);
        buf.extend_from_slice(data);

        self.i2c
            .write(self.address, &buf)
            .map_err(|err| BusError::I2c(err.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug, Default)]
    struct FakeI2c {
        writes: Vec<(u8, Vec<u8>)>,
        absent: bool,
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.absent {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for operation in operations {
                if let Operation::Write(bytes) = operation {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn rejects_addresses_wider_than_7_bits() {
        assert_eq!(
            I2cBus::new(FakeI2c::default(), 0x80).unwrap_err(),
            BusError::InvalidArgument
        );
    }

    #[test]
    fn block_is_one_write_to_the_chip() {
        let mut bus = I2cBus::new(FakeI2c::default(), 0x3e).unwrap();
        bus.write_block(0x80, &[0x05, 0x01]).unwrap();
        bus.write_raw(b"hi").unwrap();

        assert_eq!(
            bus.i2c.writes,
            vec![(0x3e, vec![0x80, 0x05, 0x01]), (0x3e, b"hi".to_vec())]
        );
    }

    #[test]
    fn missing_chip_reports_no_acknowledge() {
        let i2c = FakeI2c {
            absent: true,
            ..FakeI2c::default()
        };
        let mut bus = I2cBus::new(i2c, 0x3e).unwrap();
        assert_eq!(
            bus.write_block(0x80, &[0x05, 0x01]).unwrap_err(),
            BusError::I2c(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
    }
}
