//! Command-line configuration for `loxc`.
//!
//! Arguments are parsed by hand; the surface is small enough that a
//! dedicated parser would be heavier than the flags it handles.

use std::path::PathBuf;

use lox_diagnostic::emitter::ColorMode;
use lox_diagnostic::DiagnosticConfig;

use crate::DriverError;

/// One-line usage summary, printed on misuse.
pub const USAGE: &str = "Usage: loxc [script]";

/// What the driver should do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Read lines interactively until an empty line or end of input.
    #[default]
    Prompt,
    /// Scan a whole script file.
    File(PathBuf),
    Help,
    Version,
}

/// Parsed driver configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Append literal values to printed tokens.
    pub show_literals: bool,
    pub color: ColorMode,
    /// Maximum number of errors shown per run (0 = unlimited).
    pub error_limit: usize,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, DriverError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut script: Option<PathBuf> = None;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "-h" | "--help" => config.mode = Mode::Help,
                "-V" | "--version" => config.mode = Mode::Version,
                "--literals" => config.show_literals = true,
                _ => {
                    if let Some(value) = arg.strip_prefix("--color=") {
                        config.color = ColorMode::parse(value).ok_or_else(|| {
                            DriverError::Usage(format!(
                                "invalid --color value '{value}' (expected auto, always or never)"
                            ))
                        })?;
                    } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                        config.error_limit = value.parse().map_err(|_| {
                            DriverError::Usage(format!("invalid --error-limit value '{value}'"))
                        })?;
                    } else if arg.starts_with('-') && arg != "-" {
                        return Err(DriverError::Usage(format!("unknown option '{arg}'")));
                    } else if script.is_some() {
                        return Err(DriverError::Usage(
                            "expected at most one script argument".to_string(),
                        ));
                    } else {
                        script = Some(PathBuf::from(arg));
                    }
                }
            }
        }

        // Help and version win over a script argument.
        if config.mode == Mode::Prompt {
            if let Some(path) = script {
                config.mode = Mode::File(path);
            }
        }
        Ok(config)
    }

    /// Replace `ColorMode::Auto` with a concrete choice for the error stream.
    pub fn resolve_color(&mut self, is_tty: bool) {
        if self.color == ColorMode::Auto {
            self.color = if is_tty {
                ColorMode::Always
            } else {
                ColorMode::Never
            };
        }
    }

    /// Queue settings derived from the command line.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig::with_error_limit(self.error_limit)
    }
}
