mod render;
mod spin;

use clap::Subcommand;
use error_stack::Result;
use roulette_core::{config::RouletteConfig, error::RouletteError, meetings::MeetingList};
use std::path::PathBuf;

use self::{render::run_render, spin::run_spin};

#[derive(Subcommand)]
pub enum CliCommand {
  /// Spins the wheel once and prints the selected meeting
  Spin {
    /// Meetings to put on the wheel. Defaults to the configured meetings.
    #[clap(value_parser)]
    names: Vec<String>,

    /// Seed for the spin rng, to make the result reproducible
    #[clap(long, value_parser)]
    seed: Option<u64>,

    /// Reveal the result right away instead of waiting out the spin
    #[clap(long, action)]
    no_wait: bool,

    /// Print the result as JSON
    #[clap(long, action)]
    json: bool,
  },

  /// Writes the wheel as an SVG document
  Render {
    /// Meetings to put on the wheel. Defaults to the configured meetings.
    #[clap(value_parser)]
    names: Vec<String>,

    /// Clockwise rotation of the wheel, in degrees
    #[clap(long, value_parser, default_value_t = 0.0, allow_hyphen_values = true)]
    rotation: f64,

    /// File to write to. Defaults to stdout.
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,
  },
}

impl CliCommand {
  pub async fn run(&self, config: &RouletteConfig) -> Result<(), RouletteError> {
    match self {
      Self::Spin {
        names,
        seed,
        no_wait,
        json,
      } => run_spin(config, names, seed.or(config.seed), !no_wait, *json).await,

      Self::Render {
        names,
        rotation,
        output,
      } => run_render(config, names, *rotation, output.as_deref()),
    }
  }
}

/// Meetings named on the command line, or the configured ones if none were given.
fn meetings_from(config: &RouletteConfig, names: &[String]) -> MeetingList {
  if names.is_empty() {
    config.meeting_list()
  } else {
    MeetingList::from_names(names)
  }
}
