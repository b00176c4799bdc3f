//! Core logic for the meeting roulette wheel: the meeting list, the spin selection engine,
//! the wheel geometry and the session state machine that ties them together.
//!
//! Nothing in here touches a renderer or a clock. Front ends feed [session::actions::Action]s
//! into a [session::state::Session] and perform the [session::effects::Effect]s it asks for.
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod meetings;
pub mod selection;
pub mod session;
pub mod svg;
