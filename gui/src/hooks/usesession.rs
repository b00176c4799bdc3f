use std::cell::Ref;

use dioxus::prelude::*;
use futures::StreamExt;
use log::{debug, warn};
use roulette_core::{
  config::RouletteConfig,
  selection::{spin_source, SpinSource, StdRng},
  session::{actions::Action, effects::Effect, state::Session},
};
use tokio::time::sleep;

/// Handle returned by [use_session]. Reads the current [Session] and feeds it actions.
#[derive(Clone, Copy)]
pub struct UseSession<'a> {
  session: &'a UseRef<Session>,
  source: &'a UseRef<StdRng>,
  effects: &'a Coroutine<Effect>,
}

impl<'a> UseSession<'a> {
  pub fn read(&self) -> Ref<'_, Session> {
    self.session.read()
  }

  /// Applies `action` and hands any resulting effect to the effect coroutine.
  pub fn dispatch(&self, action: Action) {
    if let Some(effect) = step(self.session, action) {
      self.effects.send(effect);
    }
  }

  /// Draws a spin from the session's rng and applies it.
  pub fn spin(&self) {
    let settings = *self.session.read().settings();
    // drawing doesn't change anything on screen
    let draw = self.source.write_silent().next_draw(&settings);
    self.dispatch(Action::Spin(draw));
  }
}

/// A hook that owns the roulette [Session] for a component, built from `config` on first
/// render. Spin timers run in a coroutine that reports back with
/// [Action::SpinFinished] when they expire.
pub fn use_session<'a>(cx: &'a ScopeState, config: &RouletteConfig) -> UseSession<'a> {
  let session = use_ref(cx, || Session::new(config.meeting_list(), config.spin));
  let source = use_ref(cx, || spin_source(config.seed));

  let effects = use_coroutine(cx, |rx: UnboundedReceiver<Effect>| {
    to_owned![session];
    run_effects(rx, session)
  });

  UseSession {
    session,
    source,
    effects,
  }
}

fn step(session: &UseRef<Session>, action: Action) -> Option<Effect> {
  session.with_mut(|s| {
    let current = std::mem::take(s);
    *s = current.next(action);
    s.enter()
  })
}

async fn run_effects(mut rx: UnboundedReceiver<Effect>, session: UseRef<Session>) {
  while let Some(effect) = rx.next().await {
    debug!("performing effect {effect}");
    match effect {
      Effect::StartSpinTimer {
        spin_id, duration, ..
      } => {
        // the wheel animates itself via a css transition of the same length
        sleep(duration).await;
        if let Some(next) = step(&session, Action::SpinFinished(spin_id)) {
          warn!("unexpected effect after spin finished: {next}");
        }
      }
    }
  }
}
