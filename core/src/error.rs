use std::fmt::Display;
use std::path::PathBuf;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouletteError {
  ConfigRead(PathBuf),
  ConfigParse(String),
  InvalidConfigValue {
    key: String,
    value: String,
  },
  OutputWrite,
}

impl Context for RouletteError {}

impl Display for RouletteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use RouletteError::*;
    match self {
      ConfigRead(path) => write!(f, "unable to read config file {}", path.display()),

      ConfigParse(msg) => write!(f, "unable to parse config: {msg}"),

      InvalidConfigValue { key, value } => {
        write!(f, "invalid value for config key {key}: {value:?}")
      }

      OutputWrite => write!(f, "failed to write output"),
    }
  }
}
