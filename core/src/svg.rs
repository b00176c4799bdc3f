//! Renders the wheel as a standalone SVG document, for front ends that don't have a DOM.
use std::fmt::{self, Display};

use crate::color::ToHexColorStr;
use crate::geometry::wheel::{segments, tick_marks, WheelLayout};
use crate::geometry::Float;
use crate::meetings::MeetingList;

/// Escapes text for use inside an SVG element or attribute.
pub fn escape_text(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      c => out.push(c),
    }
  }
  out
}

/// An SVG document of the wheel for `meetings`, turned clockwise by `rotation` degrees.
/// Written out through [Display].
pub struct WheelSvg<'a> {
  pub meetings: &'a MeetingList,
  pub rotation: Float,
  pub layout: &'a WheelLayout,
}

impl Display for WheelSvg<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let layout = self.layout;
    let c = layout.center;

    writeln!(
      f,
      r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}">"#,
      layout.view_box(),
      layout.size,
      layout.size
    )?;
    writeln!(f, r#"  <g transform="{}">"#, layout.rotation_transform(self.rotation))?;

    for (segment, meeting) in segments(self.meetings.len(), layout).iter().zip(self.meetings.iter()) {
      writeln!(f, "    <g>")?;
      writeln!(
        f,
        r#"      <path d="{}" fill="{}"/>"#,
        segment.path,
        segment.color.to_hex_color()
      )?;
      writeln!(
        f,
        r#"      <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" transform="{}">{}</text>"#,
        c.x,
        c.y,
        layout.label_font_size,
        segment.text_color.to_hex_color(),
        segment.label_transform,
        escape_text(&meeting.name)
      )?;
      writeln!(f, "    </g>")?;
    }

    for tick in tick_marks(layout) {
      writeln!(
        f,
        r#"    <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
        tick.x, tick.y, layout.tick_dot_radius
      )?;
    }
    writeln!(f, "  </g>")?;

    // rim, pointer and hub don't turn with the wheel
    writeln!(
      f,
      r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="black" stroke-width="{}"/>"#,
      c.x, c.y, layout.rim_radius, layout.rim_width
    )?;
    writeln!(f, r#"  <path d="{}" fill="black"/>"#, layout.pointer_path())?;
    writeln!(
      f,
      r#"  <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
      c.x, c.y, layout.hub_radius
    )?;
    writeln!(f, "</svg>")
  }
}

/// Returns an SVG document of the wheel for `meetings`, turned clockwise by `rotation` degrees.
pub fn render_wheel(meetings: &MeetingList, rotation: Float, layout: &WheelLayout) -> String {
  WheelSvg {
    meetings,
    rotation,
    layout,
  }
  .to_string()
}

#[cfg(test)]
mod tests {
  use crate::geometry::wheel::{WheelLayout, TICK_COUNT};
  use crate::meetings::MeetingList;

  use super::{escape_text, render_wheel, WheelSvg};

  #[test]
  fn renders_one_wedge_and_label_per_meeting() {
    let meetings = MeetingList::from_names(["Standup", "Retro", "Demo"]);
    let doc = render_wheel(&meetings, 45.0, &WheelLayout::default());

    assert!(doc.starts_with("<svg "));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert_eq!(doc.matches("<text ").count(), 3);
    assert!(doc.contains(">Retro</text>"));
    assert!(doc.contains(r#"transform="rotate(45, 100, 100)""#));
    // ticks, rim and hub
    assert_eq!(doc.matches("<circle ").count(), TICK_COUNT + 2);
  }

  #[test]
  fn empty_wheel_still_has_frame() {
    let doc = render_wheel(&MeetingList::new(), 0.0, &WheelLayout::default());
    assert_eq!(doc.matches("<text ").count(), 0);
    assert!(!doc.contains("NaN"));
    assert!(doc.contains(r#"d="M100,1 L105,20 L95,20 Z""#));
  }

  #[test]
  fn writes_into_any_formatter() {
    let meetings = MeetingList::from_names(["Standup", "Retro"]);
    let layout = WheelLayout::default();
    let svg = WheelSvg {
      meetings: &meetings,
      rotation: 90.0,
      layout: &layout,
    };
    let doc = format!("{svg}");
    assert_eq!(doc, render_wheel(&meetings, 90.0, &layout));
    assert_eq!(doc.lines().filter(|l| l.trim() == "<g>").count(), 2);
  }

  #[test]
  fn labels_are_escaped() {
    assert_eq!(escape_text(r#"R&D <"sync">"#), "R&amp;D &lt;&quot;sync&quot;&gt;");
    let doc = render_wheel(
      &MeetingList::from_names(["Q&A"]),
      0.0,
      &WheelLayout::default(),
    );
    assert!(doc.contains(">Q&amp;A</text>"));
  }
}
