use clap::ValueEnum;
use std::fmt;

/// Mode the front-end runs in.
///
/// Decides the values exposed to the browser as `MODE`, `DEV`, `PROD` and the
/// default `NODE_ENV`, and which `.env.<mode>` files are read.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Mode {
    /// Local development (default for `devgate dev`)
    #[default]
    #[value(name = "development")]
    Development,

    /// Production build output (default for `devgate preview`)
    #[value(name = "production")]
    Production,

    /// Test runs
    #[value(name = "test")]
    Test,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
            Mode::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Mode::Production
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
