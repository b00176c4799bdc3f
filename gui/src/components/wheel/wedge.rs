use dioxus::prelude::*;
use roulette_core::{
  color::ToHexColorStr,
  geometry::wheel::{Segment, WheelLayout},
};

#[derive(PartialEq, Props)]
pub struct WedgeProps {
  segment: Segment,
  #[props(into)]
  label: String,
  layout: WheelLayout,
}

/// A component that renders one meeting's wedge of the wheel, with its label running out
/// from the hub along the middle of the wedge.
///
/// Note that this returns a `<g>` (group) element, not a full SVG, so it must be
/// embedded in an `<svg>` element to render properly.
pub fn Wedge(cx: Scope<WedgeProps>) -> Element {
  let props = cx.props;
  let color = props.segment.color.to_hex_color();
  let text_color = props.segment.text_color.to_hex_color();
  let center = props.layout.center;

  cx.render(rsx! {
    g {
      path {
        d: "{props.segment.path}",
        fill: "{color}",
      }

      text {
        x: "{center.x}",
        y: "{center.y}",
        font_size: "{props.layout.label_font_size}",
        fill: "{text_color}",
        text_anchor: "middle",
        transform: "{props.segment.label_transform}",

        "{props.label}"
      }
    }
  })
}
