use dioxus::prelude::*;
use roulette_core::meetings::{MeetingEntry, MeetingId};

#[derive(Props)]
pub struct AddMeetingProps<'a> {
  on_add: EventHandler<'a, String>,
}

/// Text input plus "Add Meeting" button. The input is cleared after a meeting is added;
/// a blank entry is left as is and nothing is added.
pub fn AddMeetingForm<'a>(cx: Scope<'a, AddMeetingProps<'a>>) -> Element<'a> {
  let draft = use_state(cx, String::new);

  cx.render(rsx! {
    div {
      class: "add-meeting",

      input {
        r#type: "text",
        value: "{draft}",
        placeholder: "Enter meeting name",
        oninput: move |evt| draft.set(evt.value.clone()),
      }

      button {
        class: "button wide",
        onclick: move |_| {
          if !draft.trim().is_empty() {
            cx.props.on_add.call(draft.get().clone());
            draft.set(String::new());
          }
        },
        "Add Meeting"
      }
    }
  })
}

#[derive(Props)]
pub struct MeetingRowsProps<'a> {
  meetings: Vec<MeetingEntry>,
  on_remove: EventHandler<'a, MeetingId>,
}

/// The meetings currently on the wheel, each with a "Remove" button.
pub fn MeetingRows<'a>(cx: Scope<'a, MeetingRowsProps<'a>>) -> Element<'a> {
  let rows = cx.props.meetings.iter().map(|m| {
    let id = m.id;
    let key = id.value();
    rsx! {
      li {
        key: "{key}",
        class: "meeting-row",

        span { "{m.name}" }
        button {
          class: "button destructive small",
          onclick: move |_| cx.props.on_remove.call(id),
          "Remove"
        }
      }
    }
  });

  cx.render(rsx! {
    ul {
      class: "meeting-list",
      rows
    }
  })
}
