//! Character LCD module.
//!
//! See [DisplayController] for the text and cursor handling, and [command] for the raw control
//! sequences it sends.
pub mod command;
mod controller;

pub use controller::*;
