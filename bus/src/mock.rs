//! In-memory [BusTransport] for running the display logic without hardware.
//!
//! Every block write is recorded as a [Transaction]. A failure can be injected after a given
//! number of transactions to exercise error propagation.
use crate::{BusError, BusResult, BusTransport};
use log::trace;

/// One recorded block write.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    pub command: u8,
    pub data: Vec<u8>,
}

impl Transaction {
    /// The transaction as it appears on the wire: the command byte followed by the data.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() + 1);
        bytes.push(self.command);
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

#[derive(Debug, Default)]
pub struct RecordingBus {
    transactions: Vec<Transaction>,
    fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every transaction after the first `count` successful ones fail.
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All recorded bytes, in wire order.
    pub fn bytes(&self) -> Vec<u8> {
        self.transactions.iter().flat_map(Transaction::bytes).collect()
    }
}

impl BusTransport for RecordingBus {
    fn write_block(&mut self, command: u8, data: &[u8]) -> BusResult<()> {
        if self.fail_after.is_some_and(|count| self.transactions.len() >= count) {
            return Err(BusError::Other("injected bus failure".to_string()));
        }

        trace!("Recording block: cmd={:#04x} data={:02x?}", command, data);
        self.transactions.push(Transaction {
            command,
            data: data.to_vec(),
        });
        Ok(())
    }
}
