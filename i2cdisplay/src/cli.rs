use crate::config::Config;
use thiserror::Error;

pub const USAGE: &str = "\
usage: i2cdisplay [-W WIDTH] [-H HEIGHT] <bus> <address> <command> [args...]

arguments:
  bus                    an integer port number of i2c bus.
  address                an integer chip address (decimal, or hex with 0x).

options:
  -W, --width WIDTH      width of the display. (default: 16)
  -H, --height HEIGHT    height of the display. (default: 2)
  -h, --help             show this help message.

commands:
  write <text...>        show texts, one line per argument.
  clear                  clear display.
  cursor <true|false>    on/off a cursor.
  backlight <0-255>      change brightness.";

/// Largest width or height accepted for a display.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// What to do with the display once it's opened.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    /// A single text is written as is, several texts are written as separate lines.
    Write(Vec<String>),
    Clear,
    Cursor(bool),
    Backlight(i64),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Invocation {
    pub bus: u32,
    pub address: u16,
    pub width: usize,
    pub height: usize,
    pub action: Action,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CliError {
    #[error("help requested")]
    Help,
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be in 1 to {max}, got {value}", max = MAX_DIMENSION)]
    InvalidDimension { name: &'static str, value: usize },
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parses the command line, without the program name.
///
/// Options and the two positional arguments come first, in any order. Everything after the
/// command name belongs to the command.
pub fn parse<I, S>(args: I, config: &Config) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut width = config.width;
    let mut height = config.height;
    let mut positionals: Vec<String> = Vec::with_capacity(3);

    while positionals.len() < 3 {
        let Some(arg) = args.next() else { break };
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Help),
            "-W" | "--width" => {
                let value = args.next().ok_or(CliError::MissingArgument("width"))?;
                width = parse_number("width", &value)?;
            }
            "-H" | "--height" => {
                let value = args.next().ok_or(CliError::MissingArgument("height"))?;
                height = parse_number("height", &value)?;
            }
            s if s.starts_with("--width=") => width = parse_number("width", &s[8..])?,
            s if s.starts_with("--height=") => height = parse_number("height", &s[9..])?,
            s if s.starts_with("-W") => width = parse_number("width", &s[2..])?,
            s if s.starts_with("-H") => height = parse_number("height", &s[2..])?,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(CliError::UnknownOption(s.to_string()));
            }
            _ => positionals.push(arg),
        }
    }

    check_dimension("width", width)?;
    check_dimension("height", height)?;

    let mut positionals = positionals.into_iter();
    let bus = positionals.next().ok_or(CliError::MissingArgument("bus"))?;
    let bus = parse_number("bus", &bus)?;
    let address = positionals.next().ok_or(CliError::MissingArgument("address"))?;
    let address = parse_address(&address)?;
    let command = positionals.next().ok_or(CliError::MissingArgument("command"))?;

    let rest: Vec<String> = args.collect();
    let action = match command.as_str() {
        "write" => {
            if rest.is_empty() {
                return Err(CliError::MissingArgument("text"));
            }
            Action::Write(rest)
        }
        "clear" => {
            expect_none(rest)?;
            Action::Clear
        }
        "cursor" => Action::Cursor(parse_bool(&expect_one(rest, "on")?)),
        "backlight" => Action::Backlight(parse_number("value", &expect_one(rest, "value")?)?),
        _ => return Err(CliError::UnknownCommand(command)),
    };

    Ok(Invocation {
        bus,
        address,
        width,
        height,
        action,
    })
}

/// Anything spelled `false`, in any case, is false. Everything else is true.
pub fn parse_bool(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

fn check_dimension(name: &'static str, value: usize) -> Result<(), CliError> {
    if value == 0 || value > MAX_DIMENSION {
        return Err(CliError::InvalidDimension { name, value });
    }
    Ok(())
}

fn parse_address(value: &str) -> Result<u16, CliError> {
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).map_err(|_| CliError::InvalidNumber {
            name: "address",
            value: value.to_string(),
        }),
        None => parse_number("address", value),
    }
}

fn expect_none(rest: Vec<String>) -> Result<(), CliError> {
    match rest.into_iter().next() {
        Some(extra) => Err(CliError::UnexpectedArgument(extra)),
        None => Ok(()),
    }
}

fn expect_one(rest: Vec<String>, name: &'static str) -> Result<String, CliError> {
    let mut rest = rest.into_iter();
    let value = rest.next().ok_or(CliError::MissingArgument(name))?;
    expect_none(rest.collect())?;
    Ok(value)
}
