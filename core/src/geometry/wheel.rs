//! Computes the pieces of the roulette wheel: one wedge per meeting, the tick marks around
//! the rim, and where each label goes.
use palette::Srgb;

use crate::color::{segment_color, text_color_for_bgcolor};
use crate::geometry::{polar_to_cartesian, wedge_svg_path, Angle, Float, Point};

/// Number of decorative dots around the rim, one every 5°.
pub const TICK_COUNT: usize = 72;

/// Sizes of the wheel parts, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
  /// Width and height of the square view box.
  pub size: Float,
  pub center: Point,
  pub radius: Float,
  pub tick_radius: Float,
  pub tick_dot_radius: Float,
  /// Distance from the hub to the label baseline.
  pub label_offset: Float,
  pub label_font_size: Float,
  pub rim_radius: Float,
  pub rim_width: Float,
  pub hub_radius: Float,
}

impl Default for WheelLayout {
  fn default() -> Self {
    WheelLayout {
      size: 200.0,
      center: Point { x: 100.0, y: 100.0 },
      radius: 95.0,
      tick_radius: 98.0,
      tick_dot_radius: 1.0,
      label_offset: 75.0,
      label_font_size: 8.0,
      rim_radius: 99.0,
      rim_width: 2.0,
      hub_radius: 5.0,
    }
  }
}

impl WheelLayout {
  pub fn view_box(&self) -> String {
    format!("0 0 {} {}", self.size, self.size)
  }

  /// The triangle at the top of the wheel that marks the winning segment.
  pub fn pointer_path(&self) -> String {
    let c = self.center;
    let top = c.y - self.rim_radius;
    let base = top + 19.0;
    format!(
      "M{},{} L{},{} L{},{} Z",
      c.x,
      top,
      c.x + 5.0,
      base,
      c.x - 5.0,
      base
    )
  }

  /// SVG transform string that rotates the wheel about its center.
  pub fn rotation_transform(&self, degrees: Float) -> String {
    format!("rotate({}, {}, {})", degrees, self.center.x, self.center.y)
  }
}

/// One wedge of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
  pub index: usize,
  pub start: Angle,
  pub end: Angle,
  /// Closed SVG path for the wedge.
  pub path: String,
  pub color: Srgb<u8>,
  pub text_color: Srgb<u8>,
  /// Transform that places a label drawn at the wheel's center along the wedge's bisector.
  pub label_transform: String,
}

impl Segment {
  pub fn sweep(&self) -> Float {
    self.end.as_degrees() - self.start.as_degrees()
  }

  pub fn mid_angle(&self) -> Angle {
    Angle::Degrees((self.start.as_degrees() + self.end.as_degrees()) / 2.0)
  }
}

/// The angular range of segment `index` on a wheel with `count` segments, or `None` if the
/// index is out of range (which includes every index on an empty wheel).
pub fn segment_angles(index: usize, count: usize) -> Option<(Angle, Angle)> {
  if index >= count {
    return None;
  }
  let n = count as Float;
  let start = index as Float / n * 360.0;
  let end = (index + 1) as Float / n * 360.0;
  Some((Angle::Degrees(start), Angle::Degrees(end)))
}

pub fn segment(index: usize, count: usize, layout: &WheelLayout) -> Option<Segment> {
  let (start, end) = segment_angles(index, count)?;
  let color = segment_color(index);
  let mid = (start.as_degrees() + end.as_degrees()) / 2.0;

  Some(Segment {
    index,
    start,
    end,
    path: wedge_svg_path(layout.center, layout.radius, start, end),
    color,
    text_color: text_color_for_bgcolor(color),
    label_transform: format!(
      "rotate({}, {}, {}) translate(0, {})",
      mid, layout.center.x, layout.center.y, -layout.label_offset
    ),
  })
}

/// All the segments for a wheel with `count` meetings. Empty when `count` is 0.
pub fn segments(count: usize, layout: &WheelLayout) -> Vec<Segment> {
  (0..count)
    .filter_map(|i| segment(i, count, layout))
    .collect()
}

/// Centers of the decorative dots around the rim.
pub fn tick_marks(layout: &WheelLayout) -> Vec<Point> {
  (0..TICK_COUNT)
    .map(|i| {
      let angle = Angle::Degrees(i as Float / TICK_COUNT as Float * 360.0);
      polar_to_cartesian(layout.center, layout.tick_radius, angle)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{segment_angles, segments, tick_marks, WheelLayout, TICK_COUNT};

  #[test]
  fn empty_wheel_has_no_segments() {
    let layout = WheelLayout::default();
    assert!(segments(0, &layout).is_empty());
    assert_eq!(segment_angles(0, 0), None);
  }

  #[test]
  fn segments_cover_the_circle_without_gaps_or_overlap() {
    let layout = WheelLayout::default();
    for n in 1..=50 {
      let segs = segments(n, &layout);
      assert_eq!(segs.len(), n);
      assert_eq!(segs[0].start.as_degrees(), 0.0);
      assert_eq!(segs[n - 1].end.as_degrees(), 360.0);

      for pair in segs.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap for n = {n}");
      }

      let total: f64 = segs.iter().map(|s| s.sweep()).sum();
      assert!((total - 360.0).abs() < 1e-9, "n = {n}, total = {total}");
    }
  }

  #[test]
  fn labels_sit_on_the_segment_bisector() {
    let layout = WheelLayout::default();
    let segs = segments(4, &layout);
    assert_eq!(segs[1].mid_angle().as_degrees(), 135.0);
    assert_eq!(segs[1].label_transform, "rotate(135, 100, 100) translate(0, -75)");
  }

  #[test]
  fn colors_cycle_every_twelve_segments() {
    let layout = WheelLayout::default();
    let segs = segments(14, &layout);
    assert_eq!(segs[0].color, segs[12].color);
    assert_eq!(segs[1].color, segs[13].color);
    assert_ne!(segs[0].color, segs[1].color);
  }

  #[test]
  fn seventy_two_ticks_on_the_rim() {
    let layout = WheelLayout::default();
    let ticks = tick_marks(&layout);
    assert_eq!(ticks.len(), TICK_COUNT);

    for t in ticks {
      let dx = t.x - layout.center.x;
      let dy = t.y - layout.center.y;
      assert!(((dx * dx + dy * dy).sqrt() - layout.tick_radius).abs() < 1e-9);
    }
  }

  #[test]
  fn pointer_matches_the_classic_triangle() {
    assert_eq!(WheelLayout::default().pointer_path(), "M100,1 L105,20 L95,20 Z");
  }
}
