use std::fmt::Display;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::geometry::Float;
use crate::meetings::{MeetingEntry, MeetingList};
use crate::selection::{plan_spin, SpinPlan, SpinSettings, SpinSource};
use crate::session::actions::Action;
use crate::session::effects::{Effect, SpinId};

/// Where the session is in the spin cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
  /// Nothing has been spun yet.
  Idle,

  /// The wheel is turning. The winner was fixed when the spin started; it's only revealed
  /// once the spin timer runs out.
  Spinning {
    spin_id: SpinId,
    plan: SpinPlan,
    winner: MeetingEntry,
    timer_started: bool,
  },

  /// The last spin has finished and its winner is on display.
  Resolved { winner: MeetingEntry },
}

impl Display for Phase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Phase::*;
    match self {
      Idle => write!(f, "Idle"),
      Spinning { winner, plan, .. } => write!(
        f,
        "Spinning(to {}°, {}, {}ms)",
        plan.final_rotation,
        winner,
        plan.duration.as_millis()
      ),
      Resolved { winner } => write!(f, "Resolved({winner})"),
    }
  }
}

/// Snapshot of the wheel's spin state.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinState {
  pub current_rotation: Float,
  pub is_spinning: bool,
  pub last_result: Option<MeetingEntry>,
}

/// All the state of one roulette session: the meetings on the wheel, how far it has turned,
/// and where it is in the spin cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
  meetings: MeetingList,
  settings: SpinSettings,
  /// Resting rotation of the wheel in `[0, 360)`, updated when a spin resolves.
  rotation: Float,
  phase: Phase,
}

impl Default for Session {
  fn default() -> Self {
    Session::new(MeetingList::with_defaults(), SpinSettings::default())
  }
}

impl Session {
  pub fn new(meetings: MeetingList, settings: SpinSettings) -> Self {
    Session {
      meetings,
      settings,
      rotation: 0.0,
      phase: Phase::Idle,
    }
  }

  /// Applies an [Action] to the current session and returns the new session.
  /// Actions that don't apply (spinning an empty wheel, a second spin while one is running,
  /// a timer for a spin that's already done) leave the session unchanged.
  pub fn next(self, action: Action) -> Session {
    use Action::*;
    use Phase::*;

    debug!("current state: {} --- action: {}", self.phase, action);

    let Session {
      mut meetings,
      settings,
      mut rotation,
      phase,
    } = self;

    let phase = match (action, phase) {
      // The list can change at any time. An in-flight spin keeps the winner it picked.
      (AddMeeting(name), phase) => {
        meetings.add(&name);
        phase
      }

      (RemoveMeeting(id), phase) => {
        meetings.remove(id);
        phase
      }

      // Only one spin at a time.
      (Spin(_), phase @ Spinning { .. }) => {
        warn!("spin requested while already spinning");
        phase
      }

      // Spinning from Idle or Resolved picks a winner now and clears the last result.
      (Spin(draw), phase) => match plan_spin(meetings.len(), rotation, &draw, &settings) {
        Some(plan) => match meetings.get(plan.selected_index) {
          Some(winner) => Spinning {
            spin_id: Uuid::new_v4(),
            plan,
            winner: winner.clone(),
            timer_started: false,
          },
          None => phase,
        },
        None => {
          debug!("no meetings on the wheel, ignoring spin");
          phase
        }
      },

      // The timer for the current spin has run out. Park the wheel at its resting angle
      // and reveal the winner.
      (
        SpinFinished(id),
        Spinning {
          spin_id,
          plan,
          winner,
          ..
        },
      ) if id == spin_id => {
        info!("selected meeting: {winner}");
        rotation = plan.resting_rotation();
        Resolved { winner }
      }

      (SpinFinished(id), phase) => {
        warn!("spin {id} finished, but it isn't the current spin");
        phase
      }
    };

    Session {
      meetings,
      settings,
      rotation,
      phase,
    }
  }

  /// Returns the [Effect] the current state needs performed, if any. A spin's timer is only
  /// requested once, no matter how many times this is called.
  pub fn enter(&mut self) -> Option<Effect> {
    match &mut self.phase {
      Phase::Spinning {
        spin_id,
        plan,
        timer_started,
        ..
      } if !*timer_started => {
        *timer_started = true;
        Some(Effect::StartSpinTimer {
          spin_id: *spin_id,
          from: plan.start_rotation,
          to: plan.final_rotation,
          duration: plan.duration,
        })
      }
      _ => None,
    }
  }

  /// Draws a spin from `source` and applies it.
  pub fn spin_with<S: SpinSource>(self, source: &mut S) -> Session {
    let draw = source.next_draw(&self.settings);
    self.next(Action::Spin(draw))
  }

  pub fn meetings(&self) -> &MeetingList {
    &self.meetings
  }

  pub fn settings(&self) -> &SpinSettings {
    &self.settings
  }

  pub fn phase(&self) -> &Phase {
    &self.phase
  }

  /// The wheel's resting rotation. While spinning this is where the spin started.
  pub fn rotation(&self) -> Float {
    self.rotation
  }

  /// The rotation the wheel should be drawn at: the spin's target while spinning, otherwise
  /// the resting rotation.
  pub fn display_rotation(&self) -> Float {
    match &self.phase {
      Phase::Spinning { plan, .. } => plan.final_rotation,
      _ => self.rotation,
    }
  }

  pub fn current_spin(&self) -> Option<&SpinPlan> {
    match &self.phase {
      Phase::Spinning { plan, .. } => Some(plan),
      _ => None,
    }
  }

  pub fn is_spinning(&self) -> bool {
    matches!(self.phase, Phase::Spinning { .. })
  }

  /// Whether a spin request would do anything right now.
  pub fn can_spin(&self) -> bool {
    !self.is_spinning() && !self.meetings.is_empty()
  }

  /// The winner of the last finished spin. Cleared as soon as a new spin starts.
  pub fn last_result(&self) -> Option<&MeetingEntry> {
    match &self.phase {
      Phase::Resolved { winner } => Some(winner),
      _ => None,
    }
  }

  pub fn spin_state(&self) -> SpinState {
    SpinState {
      current_rotation: self.rotation,
      is_spinning: self.is_spinning(),
      last_result: self.last_result().cloned(),
    }
  }
}
