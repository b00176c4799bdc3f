//! Turns a spin request into a target rotation, an animation duration and the index of the
//! meeting that ends up under the pointer.
//!
//! The wheel's pointer sits at the top (0°). Segment `i` of `n` covers `[i, i+1) * 360/n`
//! degrees clockwise in wheel space, and the wheel is rotated clockwise by the spin, so the
//! pointer lands at `360 - (rotation mod 360)` in wheel space.
use std::time::Duration;

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_degrees, Float};

pub use rand::rngs::StdRng;

/// Tunables for how far and how long the wheel spins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpinSettings {
  /// Full turns every spin makes before the random part kicks in.
  pub min_turns: Float,
  /// Upper bound (exclusive) of the random number of extra turns.
  pub max_extra_turns: Float,
  pub base_duration_ms: u64,
  /// Extra animation time per extra turn.
  pub ms_per_extra_turn: u64,
}

impl Default for SpinSettings {
  fn default() -> Self {
    SpinSettings {
      min_turns: 5.0,
      max_extra_turns: 3.0,
      base_duration_ms: 5000,
      ms_per_extra_turn: 1000,
    }
  }
}

impl SpinSettings {
  /// Animation duration for a spin with the given number of extra turns.
  /// Saturates at [Duration::MAX] when the settings ask for more than that.
  pub fn duration_for(&self, extra_turns: Float) -> Duration {
    let millis = self.base_duration_ms as Float + extra_turns * self.ms_per_extra_turn as Float;
    Duration::try_from_secs_f64(millis.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
  }

  /// Total degrees the wheel travels for the given draw.
  pub fn spin_angle(&self, draw: &SpinDraw) -> Float {
    (self.min_turns + draw.extra_turns) * 360.0 + draw.offset_degrees
  }
}

/// The random inputs to one spin: a real number of extra turns in `[0, max_extra_turns)` and a
/// whole number of degrees in `[0, 360)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpinDraw {
  pub extra_turns: Float,
  pub offset_degrees: Float,
}

impl SpinDraw {
  pub fn new(extra_turns: Float, offset_degrees: Float) -> Self {
    SpinDraw {
      extra_turns,
      offset_degrees,
    }
  }
}

/// Somewhere to get [SpinDraw]s from.
pub trait SpinSource {
  fn next_draw(&mut self, settings: &SpinSettings) -> SpinDraw;
}

impl SpinSource for StdRng {
  fn next_draw(&mut self, settings: &SpinSettings) -> SpinDraw {
    let extra_turns = if settings.max_extra_turns > 0.0 {
      self.gen_range(0.0..settings.max_extra_turns)
    } else {
      0.0
    };
    let offset_degrees = self.gen_range(0..360u32) as Float;
    SpinDraw::new(extra_turns, offset_degrees)
  }
}

/// Returns a seeded rng when a seed is given, otherwise one seeded from system entropy.
pub fn spin_source(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  }
}

/// Everything the caller needs to animate a spin and reveal its result.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
  pub start_rotation: Float,
  pub final_rotation: Float,
  pub duration: Duration,
  pub selected_index: usize,
}

impl SpinPlan {
  /// The rotation the wheel rests at after the spin, in `[0, 360)`.
  pub fn resting_rotation(&self) -> Float {
    normalize_degrees(self.final_rotation)
  }
}

/// Plans a spin over `count` segments starting from `current_rotation`.
/// Returns `None` when there is nothing to spin.
pub fn plan_spin(
  count: usize,
  current_rotation: Float,
  draw: &SpinDraw,
  settings: &SpinSettings,
) -> Option<SpinPlan> {
  let final_rotation = current_rotation + settings.spin_angle(draw);
  let selected_index = selected_index(final_rotation, count)?;
  Some(SpinPlan {
    start_rotation: current_rotation,
    final_rotation,
    duration: settings.duration_for(draw.extra_turns),
    selected_index,
  })
}

/// Maps a wheel rotation onto the index of the segment under the pointer.
///
/// A rotation that is an exact multiple of 360° puts the pointer on the boundary between the
/// last and first segments; the raw formula yields `count` there, which wraps to `0`.
/// Returns `None` for an empty wheel.
pub fn selected_index(rotation: Float, count: usize) -> Option<usize> {
  if count == 0 {
    return None;
  }

  let new_rotation = normalize_degrees(rotation);
  let normalized_angle = 360.0 - new_rotation;
  let segment_angle = 360.0 / count as Float;
  let raw_index = (normalized_angle / segment_angle).floor() as usize;
  Some(raw_index % count)
}
