use dotenv::var;
use eyre::WrapErr;

/// Defaults for the display geometry, overridable from the environment or a `.env` file.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
}

impl Config {
    pub const WIDTH_VAR: &'static str = "I2CDISPLAY_WIDTH";
    pub const HEIGHT_VAR: &'static str = "I2CDISPLAY_HEIGHT";

    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Config::default();
        if let Some(width) = lookup(Self::WIDTH_VAR) {
            config.width = width
                .trim()
                .parse()
                .wrap_err_with(|| format!("Invalid {}: {:?}", Self::WIDTH_VAR, width))?;
        }
        if let Some(height) = lookup(Self::HEIGHT_VAR) {
            config.height = height
                .trim()
                .parse()
                .wrap_err_with(|| format!("Invalid {}: {:?}", Self::HEIGHT_VAR, height))?;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 16,
            height: 2,
        }
    }
}
