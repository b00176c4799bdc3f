//! Optional INI configuration for the wheel:
//!
//! ```ini
//! [spin]
//! min_turns = 5
//! max_extra_turns = 3
//! base_duration_ms = 5000
//! ms_per_extra_turn = 1000
//! seed = 42            ; optional, makes spins reproducible
//!
//! [meetings]
//! meeting = Team Standup
//! meeting = Project Review
//! ```
//!
//! Every key is optional. Without a `[meetings]` section the default meetings are used.
//! `;` and `#` start a comment anywhere on a line.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use error_stack::{report, IntoReport, Result, ResultExt};
use ini::{Ini, Properties};
use log::debug;

use crate::error::RouletteError;
use crate::meetings::{MeetingList, DEFAULT_MEETINGS};
use crate::selection::SpinSettings;

const SPIN_SECTION: &str = "spin";
const MEETINGS_SECTION: &str = "meetings";
const MEETING_KEY: &str = "meeting";

#[derive(Debug, Clone, PartialEq)]
pub struct RouletteConfig {
  pub spin: SpinSettings,
  /// Fixes the random source, making every spin reproducible.
  pub seed: Option<u64>,
  pub meetings: Vec<String>,
}

impl Default for RouletteConfig {
  fn default() -> Self {
    RouletteConfig {
      spin: SpinSettings::default(),
      seed: None,
      meetings: DEFAULT_MEETINGS.iter().map(|s| String::from(*s)).collect(),
    }
  }
}

impl RouletteConfig {
  pub fn from_ini_str(contents: &str) -> Result<RouletteConfig, RouletteError> {
    let ini = Ini::load_from_str(contents)
      .into_report()
      .change_context_lazy(|| RouletteError::ConfigParse(String::from("malformed ini")))?;
    Self::from_ini(&ini)
  }

  pub fn from_file(path: &Path) -> Result<RouletteConfig, RouletteError> {
    debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)
      .into_report()
      .change_context_lazy(|| RouletteError::ConfigRead(path.to_path_buf()))?;
    Self::from_ini_str(&contents).attach_printable_lazy(|| format!("in {}", path.display()))
  }

  /// Loads the file at `path` if one is given, otherwise returns the defaults.
  pub fn load(path: Option<&Path>) -> Result<RouletteConfig, RouletteError> {
    match path {
      Some(path) => Self::from_file(path),
      None => Ok(RouletteConfig::default()),
    }
  }

  fn from_ini(ini: &Ini) -> Result<RouletteConfig, RouletteError> {
    let mut config = RouletteConfig::default();

    if let Some(props) = ini.section(Some(SPIN_SECTION)) {
      let spin = &mut config.spin;
      if let Some(v) = parse_value::<f64>(props, "min_turns")? {
        spin.min_turns = non_negative("min_turns", v)?;
      }
      if let Some(v) = parse_value::<f64>(props, "max_extra_turns")? {
        spin.max_extra_turns = non_negative("max_extra_turns", v)?;
      }
      if let Some(v) = parse_value(props, "base_duration_ms")? {
        spin.base_duration_ms = v;
      }
      if let Some(v) = parse_value(props, "ms_per_extra_turn")? {
        spin.ms_per_extra_turn = v;
      }
      config.seed = parse_value(props, "seed")?;
    }

    if let Some(props) = ini.section(Some(MEETINGS_SECTION)) {
      config.meetings = props
        .iter()
        .filter(|(k, _)| *k == MEETING_KEY)
        .map(|(_, v)| String::from(v))
        .collect();
    }

    Ok(config)
  }

  /// A meeting list built from the configured names. Blank names are dropped.
  pub fn meeting_list(&self) -> MeetingList {
    MeetingList::from_names(&self.meetings)
  }
}

fn parse_value<T: FromStr>(props: &Properties, key: &str) -> Result<Option<T>, RouletteError> {
  match props.get(key) {
    None => Ok(None),
    Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
      report!(RouletteError::InvalidConfigValue {
        key: String::from(key),
        value: String::from(raw),
      })
    }),
  }
}

fn non_negative(key: &str, value: f64) -> Result<f64, RouletteError> {
  if value.is_finite() && value >= 0.0 {
    Ok(value)
  } else {
    Err(report!(RouletteError::InvalidConfigValue {
      key: String::from(key),
      value: value.to_string(),
    }))
  }
}

#[cfg(test)]
mod tests {
  use crate::error::RouletteError;
  use crate::selection::{spin_source, SpinSettings};
  use crate::session::state::Session;

  use super::RouletteConfig;

  const DOCUMENTED_EXAMPLE: &str = "\
[spin]
min_turns = 5
max_extra_turns = 3
base_duration_ms = 5000
ms_per_extra_turn = 1000
seed = 42            ; optional, makes spins reproducible

[meetings]
meeting = Team Standup
meeting = Project Review
";

  #[test]
  fn documented_example_loads() {
    let config = RouletteConfig::from_ini_str(DOCUMENTED_EXAMPLE).unwrap();
    assert_eq!(config.spin, SpinSettings::default());
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.meeting_list().names(), vec!["Team Standup", "Project Review"]);
  }

  #[test]
  fn huge_extra_turns_still_spin() {
    let config = RouletteConfig::from_ini_str("[spin]\nmax_extra_turns = 1e300\n").unwrap();
    let session =
      Session::new(config.meeting_list(), config.spin).spin_with(&mut spin_source(Some(1)));

    assert!(session.spin_state().is_spinning);
    assert_eq!(session.current_spin().unwrap().duration, std::time::Duration::MAX);
  }

  #[test]
  fn empty_config_uses_defaults() {
    let config = RouletteConfig::from_ini_str("").unwrap();
    assert_eq!(config, RouletteConfig::default());
    assert_eq!(config.meeting_list().len(), 4);
  }

  #[test]
  fn reads_spin_settings_and_meetings() {
    let config = RouletteConfig::from_ini_str(
      "[spin]\n\
       min_turns = 2\n\
       max_extra_turns = 1.5\n\
       base_duration_ms = 100\n\
       ms_per_extra_turn = 10\n\
       seed = 42\n\
       \n\
       [meetings]\n\
       meeting = Retro\n\
       meeting = Demo\n\
       meeting =   \n",
    )
    .unwrap();

    assert_eq!(
      config.spin,
      SpinSettings {
        min_turns: 2.0,
        max_extra_turns: 1.5,
        base_duration_ms: 100,
        ms_per_extra_turn: 10,
      }
    );
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.meeting_list().names(), vec!["Retro", "Demo"]);
  }

  #[test]
  fn invalid_numbers_are_reported() {
    let err = RouletteConfig::from_ini_str("[spin]\nbase_duration_ms = soon\n").unwrap_err();
    assert_eq!(
      err.current_context(),
      &RouletteError::InvalidConfigValue {
        key: String::from("base_duration_ms"),
        value: String::from("soon"),
      }
    );
  }

  #[test]
  fn negative_turns_are_rejected() {
    let err = RouletteConfig::from_ini_str("[spin]\nmin_turns = -1\n").unwrap_err();
    assert!(matches!(
      err.current_context(),
      RouletteError::InvalidConfigValue { key, .. } if key == "min_turns"
    ));
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let path = std::path::Path::new("/definitely/not/here/roulette.ini");
    let err = RouletteConfig::from_file(path).unwrap_err();
    assert!(matches!(err.current_context(), RouletteError::ConfigRead(_)));
  }
}
