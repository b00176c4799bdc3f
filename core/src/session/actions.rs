use std::fmt::Display;

use crate::meetings::MeetingId;
use crate::selection::SpinDraw;
use crate::session::effects::SpinId;

/// Actions are inputs into the session state machine.
/// Not all actions apply to every state; see [`Session::next`](crate::session::state::Session::next)
/// for what each one does where.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  /// The user wants a new meeting on the wheel.
  AddMeeting(String),

  /// The user removed a meeting from the wheel.
  RemoveMeeting(MeetingId),

  /// The user asked for a spin. The random part has already been drawn.
  Spin(SpinDraw),

  /// The spin timer for the given spin has run out and the result can be revealed.
  SpinFinished(SpinId),
}

impl Display for Action {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Action::*;
    match self {
      AddMeeting(name) => write!(f, "AddMeeting({name:?})"),
      RemoveMeeting(id) => write!(f, "RemoveMeeting({id})"),
      Spin(draw) => write!(
        f,
        "Spin(+{:.3} turns, +{}°)",
        draw.extra_turns, draw.offset_degrees
      ),
      SpinFinished(id) => write!(f, "SpinFinished({id})"),
    }
  }
}
