use error_stack::{IntoReport, Result, ResultExt};
use log::{debug, info, warn};
use roulette_core::{
  config::RouletteConfig,
  error::RouletteError,
  meetings::MeetingEntry,
  selection::{spin_source, SpinPlan},
  session::{actions::Action, effects::Effect, state::Session},
};
use serde_json::{json, Value};
use tokio::time::sleep;

use super::meetings_from;

/// The result of one settled spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
  pub winner: MeetingEntry,
  pub plan: SpinPlan,
  pub resting_rotation: f64,
}

pub async fn run_spin(
  config: &RouletteConfig,
  names: &[String],
  seed: Option<u64>,
  wait: bool,
  json: bool,
) -> Result<(), RouletteError> {
  let outcome = match spin_once(config, names, seed, wait).await {
    Some(outcome) => outcome,
    None => {
      warn!("no meetings on the wheel, nothing to spin");
      return Ok(());
    }
  };

  if json {
    let text = serde_json::to_string_pretty(&outcome_json(&outcome))
      .into_report()
      .change_context(RouletteError::OutputWrite)?;
    println!("{text}");
  } else {
    println!("Selected meeting: {}", outcome.winner.name);
  }
  Ok(())
}

/// Spins the wheel once and runs its effects until the session settles.
/// Returns `None` when there were no meetings to spin.
pub async fn spin_once(
  config: &RouletteConfig,
  names: &[String],
  seed: Option<u64>,
  wait: bool,
) -> Option<SpinOutcome> {
  let meetings = meetings_from(config, names);
  let mut rng = spin_source(seed);

  let mut session = Session::new(meetings, config.spin).spin_with(&mut rng);
  let plan = session.current_spin().copied();

  while let Some(effect) = session.enter() {
    debug!("performing effect {effect}");
    match effect {
      Effect::StartSpinTimer {
        spin_id,
        from,
        to,
        duration,
      } => {
        info!("spinning from {from}° to {to}° over {}ms", duration.as_millis());
        if wait {
          sleep(duration).await;
        }
        session = session.next(Action::SpinFinished(spin_id));
      }
    }
  }

  let winner = session.last_result()?.clone();
  Some(SpinOutcome {
    winner,
    plan: plan?,
    resting_rotation: session.rotation(),
  })
}

/// The `--json` form of a spin's result.
pub fn outcome_json(outcome: &SpinOutcome) -> Value {
  json!({
    "selected": outcome.winner,
    "final_rotation": outcome.plan.final_rotation,
    "resting_rotation": outcome.resting_rotation,
    "duration_ms": outcome.plan.duration.as_millis() as u64,
  })
}
