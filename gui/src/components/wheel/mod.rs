pub mod wedge;

use dioxus::prelude::*;
use roulette_core::{
  geometry::{
    wheel::{segments, tick_marks, WheelLayout},
    Float,
  },
  meetings::MeetingEntry,
};

use crate::components::wheel::wedge::Wedge;

/// Easing for the spin, fast at first and slowing to a stop.
const SPIN_EASING: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";

#[derive(PartialEq, Props)]
pub struct WheelProps {
  pub meetings: Vec<MeetingEntry>,
  /// Rotation to draw the wheel at, in degrees clockwise.
  pub rotation: Float,
  /// Animates the wheel to `rotation` over this many milliseconds. 0 means no animation.
  pub spin_ms: u64,
}

/// A component that renders the roulette wheel as an SVG: one colored wedge per meeting,
/// in list order, with a fixed pointer at the top.
///
/// The wedges and rim ticks sit in a group that's rotated with a CSS transform, so a change
/// of `rotation` while `spin_ms` is non-zero plays out as a transition.
pub fn MeetingWheel(cx: Scope<WheelProps>) -> Element {
  let layout = WheelLayout::default();
  let c = layout.center;
  let view_box = layout.view_box();
  let pointer = layout.pointer_path();

  let rotation = cx.props.rotation;
  let transition = match cx.props.spin_ms {
    0 => String::from("none"),
    ms => format!("transform {ms}ms {SPIN_EASING}"),
  };
  let group_style =
    format!("transform-origin: center; transform: rotate({rotation}deg); transition: {transition};");

  let wedges = segments(cx.props.meetings.len(), &layout)
    .into_iter()
    .zip(cx.props.meetings.iter())
    .map(|(segment, meeting)| {
      let key = meeting.id.value();
      rsx! {
        Wedge {
          key: "{key}",
          segment: segment,
          label: meeting.name.clone(),
          layout: layout,
        }
      }
    });

  let ticks = tick_marks(&layout).into_iter().enumerate().map(|(i, p)| {
    rsx! {
      circle {
        key: "tick-{i}",
        cx: "{p.x}",
        cy: "{p.y}",
        r: "{layout.tick_dot_radius}",
        fill: "black",
      }
    }
  });

  cx.render(rsx! {
    svg {
      view_box: "{view_box}",
      width: "100%",
      height: "100%",

      g {
        style: "{group_style}",
        wedges,
        ticks
      }

      // rim, pointer and hub stay put while the wheel turns
      circle {
        cx: "{c.x}",
        cy: "{c.y}",
        r: "{layout.rim_radius}",
        fill: "none",
        stroke: "black",
        stroke_width: "{layout.rim_width}",
      }
      path {
        d: "{pointer}",
        fill: "black",
      }
      circle {
        cx: "{c.x}",
        cy: "{c.y}",
        r: "{layout.hub_radius}",
        fill: "black",
      }
    }
  })
}
