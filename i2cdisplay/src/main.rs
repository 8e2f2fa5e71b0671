mod cli;
mod config;

use std::process::ExitCode;
use dotenv::dotenv;
use eyre::WrapErr;
use log::{debug, info};
use linux_embedded_hal::I2cdev;
use i2cdisplay_bus::i2c::I2cBus;
use i2cdisplay_bus::lcd::{DisplayController, DisplayResult};
use crate::cli::{Action, CliError, USAGE};
use crate::config::Config;

fn main() -> eyre::Result<ExitCode> {
    dotenv().ok();
    pretty_env_logger::init();

    let config = Config::from_env()?;
    debug!("Defaults: {:?}", config);

    let invocation = match cli::parse(std::env::args().skip(1), &config) {
        Ok(invocation) => invocation,
        Err(err) => return Ok(ExitCode::from(report(&err))),
    };

    info!(
        "Display {}x{} @ bus {}, address {:#04x}",
        invocation.width, invocation.height, invocation.bus, invocation.address
    );

    let path = format!("/dev/i2c-{}", invocation.bus);
    let i2c = I2cdev::new(&path).wrap_err_with(|| format!("Failed to open {}", path))?;
    let mut bus = I2cBus::new(i2c, invocation.address)?;
    info!("{} opened as {:?}.", path, bus);
    let mut display = DisplayController::new(&mut bus, invocation.width, invocation.height)?;

    info!("Running {:?}", invocation.action);
    run(&mut display, invocation.action)?;

    Ok(ExitCode::SUCCESS)
}

/// Prints the outcome of a failed parse and returns the process exit status.
///
/// Help goes to stdout and succeeds. Anything else is a usage error.
fn report(err: &CliError) -> u8 {
    match err {
        CliError::Help => {
            println!("{}", USAGE);
            0
        }
        err => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            2
        }
    }
}

fn run(display: &mut DisplayController, action: Action) -> DisplayResult<()> {
    match action {
        Action::Write(texts) => match texts.as_slice() {
            [text] => display.write(text),
            _ => display.write_lines(&texts),
        },
        Action::Clear => display.clear(),
        Action::Cursor(on) => display.cursor_visibility(on),
        Action::Backlight(value) => display.set_backlight(value),
    }
}
