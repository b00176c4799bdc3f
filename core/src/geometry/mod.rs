//! Types and helper functions for drawing the wheel as SVG shapes & paths.
pub mod wheel;

use serde::{Deserialize, Serialize};

/// Just a typedef for the floating point type used for coordinates, angles, etc.
pub type Float = f64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }
}

/// Normalise an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(degrees: Float) -> Float {
  let d = degrees.rem_euclid(360.0);
  // rem_euclid rounds tiny negative inputs up to exactly 360.0
  if d >= 360.0 {
    0.0
  } else {
    d
  }
}

/// Convert polar coordinates in the form of (center, radius, angle) to
/// Cartesian (x,y) coordinates. An angle of 0 points straight up, and angles grow clockwise.
pub fn polar_to_cartesian(center: Point, radius: Float, angle: Angle) -> Point {
  let a = (angle.as_degrees() - 90.0).to_radians();
  Point {
    x: center.x + (radius * a.cos()),
    y: center.y + (radius * a.sin()),
  }
}

/// Return a String describing an SVG move to the given point `p`.
pub fn move_to(p: Point) -> String {
  format!("M {} {}", p.x, p.y)
}

/// Return a String describing an SVG line from the current point to the given point `p`.
pub fn line_to(p: Point) -> String {
  format!("L {} {}", p.x, p.y)
}

/// Return a String describing an SVG arc command from the current point to `to`, following
/// a circle of the given `radius` counter-clockwise.
pub fn arc_to(radius: Float, large_arc: bool, to: Point) -> String {
  let large_arc_flag = if large_arc { "1" } else { "0" };
  format!("A {radius} {radius} 0 {large_arc_flag} 0 {} {}", to.x, to.y)
}

/// Return a String describing a closed SVG path for a pie wedge between the `start` and `end`
/// angles.
///
/// The path runs from the center to the point at `end`, then arcs back to the point at
/// `start`. A sweep of a full turn or more can't be drawn with one arc (the endpoints
/// coincide), so it's drawn as a full disc made of two half arcs instead.
pub fn wedge_svg_path(center: Point, radius: Float, start: Angle, end: Angle) -> String {
  let sweep = end.as_degrees() - start.as_degrees();

  if sweep >= 360.0 {
    let top = polar_to_cartesian(center, radius, start);
    let bottom = polar_to_cartesian(center, radius, Angle::Degrees(start.as_degrees() + 180.0));
    return vec![
      move_to(top),
      arc_to(radius, false, bottom),
      arc_to(radius, false, top),
      String::from("Z"),
    ]
    .join(" ");
  }

  let arc_start = polar_to_cartesian(center, radius, end);
  let arc_end = polar_to_cartesian(center, radius, start);
  vec![
    move_to(center),
    line_to(arc_start),
    arc_to(radius, sweep > 180.0, arc_end),
    String::from("Z"),
  ]
  .join(" ")
}

#[cfg(test)]
mod tests {
  use super::{normalize_degrees, polar_to_cartesian, wedge_svg_path, Angle, Point};

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn zero_degrees_points_up_and_angles_grow_clockwise() {
    let c = Point { x: 100.0, y: 100.0 };

    let top = polar_to_cartesian(c, 10.0, Angle::Degrees(0.0));
    assert!(close(top.x, 100.0) && close(top.y, 90.0));

    let right = polar_to_cartesian(c, 10.0, Angle::Degrees(90.0));
    assert!(close(right.x, 110.0) && close(right.y, 100.0));

    let left = polar_to_cartesian(c, 10.0, Angle::Radians(std::f64::consts::PI * 1.5));
    assert!(close(left.x, 90.0) && close(left.y, 100.0));
  }

  #[test]
  fn normalize_wraps_into_half_open_range() {
    assert_eq!(normalize_degrees(720.0), 0.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(-1e-20), 0.0);
    assert_eq!(normalize_degrees(2460.0), 300.0);
  }

  #[test]
  fn quarter_wedge_path_runs_center_end_start() {
    let c = Point { x: 0.0, y: 0.0 };
    let path = wedge_svg_path(c, 1.0, Angle::Degrees(0.0), Angle::Degrees(90.0));
    assert!(path.starts_with("M 0 0 L 1 "), "{path}");
    assert!(path.contains("A 1 1 0 0 0 "), "{path}");
    assert!(path.ends_with(" Z"), "{path}");
  }

  #[test]
  fn large_arc_flag_set_above_half_turn() {
    let c = Point { x: 0.0, y: 0.0 };
    let path = wedge_svg_path(c, 1.0, Angle::Degrees(0.0), Angle::Degrees(240.0));
    assert!(path.contains("A 1 1 0 1 0 "), "{path}");

    let half = wedge_svg_path(c, 1.0, Angle::Degrees(0.0), Angle::Degrees(180.0));
    assert!(half.contains("A 1 1 0 0 0 "), "{half}");
  }

  #[test]
  fn full_turn_is_drawn_as_two_half_arcs() {
    let c = Point { x: 100.0, y: 100.0 };
    let path = wedge_svg_path(c, 95.0, Angle::Degrees(0.0), Angle::Degrees(360.0));
    assert_eq!(path.matches('A').count(), 2);
    assert!(!path.contains('L'));
  }
}
