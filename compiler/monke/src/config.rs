//! REPL configuration, assembled from command-line flags.

use crate::DriverError;

/// Prompt printed before every line read.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Settings for one REPL session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before reading each line.
    pub prompt: String,
    /// Echo each line back as `Prompt: <line>` before its tokens.
    pub echo: bool,
    /// Print the greeting banner before the first prompt.
    pub greet: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            echo: true,
            greet: true,
        }
    }
}

impl ReplConfig {
    /// Build a config from REPL flags, starting from the defaults.
    ///
    /// Accepted flags: `--prompt=<text>`, `--no-echo`, `--quiet`/`-q`.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let mut config = Self::default();
        for arg in args {
            if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else if arg == "--no-echo" {
                config.echo = false;
            } else if arg == "--quiet" || arg == "-q" {
                config.greet = false;
            } else {
                return Err(DriverError::UnknownOption(arg.clone()));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
