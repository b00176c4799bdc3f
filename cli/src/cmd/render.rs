use std::fs;
use std::io::{self, Write};
use std::path::Path;

use error_stack::{IntoReport, Result, ResultExt};
use log::info;
use roulette_core::{
  config::RouletteConfig, error::RouletteError, geometry::wheel::WheelLayout, svg::render_wheel,
};

use super::meetings_from;

pub fn run_render(
  config: &RouletteConfig,
  names: &[String],
  rotation: f64,
  output: Option<&Path>,
) -> Result<(), RouletteError> {
  let meetings = meetings_from(config, names);
  let doc = render_wheel(&meetings, rotation, &WheelLayout::default());

  match output {
    Some(path) => {
      fs::write(path, doc)
        .into_report()
        .change_context(RouletteError::OutputWrite)
        .attach_printable_lazy(|| format!("writing {}", path.display()))?;
      info!("wrote wheel with {} meetings to {}", meetings.len(), path.display());
    }
    None => {
      io::stdout()
        .write_all(doc.as_bytes())
        .into_report()
        .change_context(RouletteError::OutputWrite)?;
    }
  }
  Ok(())
}
