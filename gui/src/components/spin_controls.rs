use dioxus::prelude::*;

#[derive(Props)]
pub struct SpinControlsProps<'a> {
  spinning: bool,
  disabled: bool,
  /// Name of the last winner, empty when there isn't one.
  result: String,
  on_spin: EventHandler<'a, ()>,
}

/// The spin button and the line announcing the last winner.
pub fn SpinControls<'a>(cx: Scope<'a, SpinControlsProps<'a>>) -> Element<'a> {
  let label = if cx.props.spinning {
    "Spinning..."
  } else {
    "Spin the Wheel"
  };
  let disabled = cx.props.disabled;

  let name = &cx.props.result;
  let result = (!name.is_empty()).then(|| {
    rsx! {
      p {
        class: "result",
        "Selected meeting: {name}"
      }
    }
  });

  cx.render(rsx! {
    button {
      class: "button spin",
      disabled: "{disabled}",
      onclick: move |_| cx.props.on_spin.call(()),
      "{label}"
    }
    result
  })
}
