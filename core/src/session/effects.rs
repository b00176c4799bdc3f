use std::fmt::Display;
use std::time::Duration;

use uuid::Uuid;

use crate::geometry::Float;

/// Identifies one spin, so a timer that fires late can't resolve a different spin.
pub type SpinId = Uuid;

/// Effects are requests from the state machine to "do something" in the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
  /// Animate the wheel from `from` to `to` degrees over `duration`, then feed
  /// [Action::SpinFinished](crate::session::actions::Action::SpinFinished) with `spin_id`
  /// back into the state machine.
  StartSpinTimer {
    spin_id: SpinId,
    from: Float,
    to: Float,
    duration: Duration,
  },
}

impl Display for Effect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Effect::*;
    match self {
      StartSpinTimer {
        spin_id,
        from,
        to,
        duration,
      } => write!(
        f,
        "StartSpinTimer({spin_id}, {from}° -> {to}° over {}ms)",
        duration.as_millis()
      ),
    }
  }
}
