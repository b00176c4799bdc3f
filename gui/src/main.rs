#![allow(non_snake_case)]
mod components;
mod hooks;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use log::error;
use roulette_core::{config::RouletteConfig, session::actions::Action};

use components::{
  meeting_list::{AddMeetingForm, MeetingRows},
  spin_controls::SpinControls,
  wheel::MeetingWheel,
};
use hooks::usesession::use_session;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
  /// INI file with spin settings and the starting meetings
  #[clap(long, value_parser)]
  config: Option<PathBuf>,

  /// Seed for the spin rng, to make spins reproducible
  #[clap(long, value_parser)]
  seed: Option<u64>,
}

struct AppProps {
  config: RouletteConfig,
}

fn main() {
  let default_log_level = "info";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  let args = Args::parse();
  let mut config = match RouletteConfig::load(args.config.as_deref()) {
    Ok(config) => config,
    Err(err) => {
      error!("{err:?}");
      process::exit(1);
    }
  };
  if args.seed.is_some() {
    config.seed = args.seed;
  }

  let window = WindowBuilder::new().with_title("Meeting Roulette");
  dioxus_desktop::launch_with_props(app, AppProps { config }, Config::new().with_window(window));
}

fn app(cx: Scope<AppProps>) -> Element {
  let session = use_session(cx, &cx.props.config);

  let (meetings, rotation, spin_ms, spinning, can_spin, result) = {
    let s = session.read();
    (
      s.meetings().as_slice().to_vec(),
      s.display_rotation(),
      s.current_spin()
        .map(|plan| plan.duration.as_millis() as u64)
        .unwrap_or(0),
      s.is_spinning(),
      s.can_spin(),
      s.last_result().map(|m| m.name.clone()).unwrap_or_default(),
    )
  };

  cx.render(rsx! {
    style { include_str!("./style.css") }

    div {
      class: "page",

      div {
        class: "card",

        h1 { class: "card-title", "Meeting Roulette" }

        div {
          class: "card-content",

          div {
            class: "wheel-column",

            div {
              class: "wheel-frame",
              MeetingWheel {
                meetings: meetings.clone(),
                rotation: rotation,
                spin_ms: spin_ms,
              }
            }

            SpinControls {
              spinning: spinning,
              disabled: !can_spin,
              result: result,
              on_spin: move |_| session.spin(),
            }
          }

          div {
            class: "list-column",

            AddMeetingForm {
              on_add: move |name: String| session.dispatch(Action::AddMeeting(name)),
            }

            MeetingRows {
              meetings: meetings,
              on_remove: move |id| session.dispatch(Action::RemoveMeeting(id)),
            }
          }
        }
      }
    }
  })
}
