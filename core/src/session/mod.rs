//! The roulette session as a finite state machine.
//!
//! A [Session](state::Session) owns the meeting list, the wheel's rotation and the spin
//! phase. Front ends feed it [Action](actions::Action)s with [`Session::next`](state::Session::next),
//! then call [`Session::enter`](state::Session::enter) to find out whether there's an
//! [Effect](effects::Effect) to perform (so far, only starting the spin timer).
//!
//! ```text
//!       ┌──────┐
//!       │ Idle │
//!       └──┬───┘
//!          │ Spin (list not empty)
//!     ┌────▼─────┐
//!     │ Spinning ◄────────┐
//!     └────┬─────┘        │
//!          │ SpinFinished │ Spin
//!     ┌────▼─────┐        │
//!     │ Resolved ├────────┘
//!     └──────────┘
//! ```
//!
//! AddMeeting and RemoveMeeting apply in every state without changing the phase.

pub mod actions;
pub mod effects;
pub mod state;
