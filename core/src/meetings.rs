//! The ordered list of meetings that make up the wheel.
use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

/// Identifies a meeting within a [MeetingList]. Ids come from a per-list counter and are never
/// reused, so removing a meeting doesn't renumber the ones that survive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetingId(u64);

impl MeetingId {
  pub fn value(&self) -> u64 {
    self.0
  }
}

impl Display for MeetingId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeetingEntry {
  pub id: MeetingId,
  pub name: String,
}

impl Display for MeetingEntry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.name, self.id)
  }
}

/// Meetings in insertion order. The order decides where each meeting's segment lands on the
/// wheel, so it's preserved across adds and removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingList {
  entries: Vec<MeetingEntry>,
  next_id: u64,
}

/// The meetings a fresh session starts with when nothing else is configured.
pub const DEFAULT_MEETINGS: [&str; 4] = [
  "Team Standup",
  "Project Review",
  "Client Meeting",
  "Planning Session",
];

impl Default for MeetingList {
  fn default() -> Self {
    MeetingList::new()
  }
}

impl MeetingList {
  pub fn new() -> Self {
    MeetingList {
      entries: Vec::new(),
      next_id: 1,
    }
  }

  /// Builds a list by adding each name in turn. Blank names are skipped, same as [MeetingList::add].
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut list = MeetingList::new();
    for name in names {
      list.add(name.as_ref());
    }
    list
  }

  pub fn with_defaults() -> Self {
    Self::from_names(DEFAULT_MEETINGS)
  }

  /// Appends a meeting with the trimmed `name` and returns the new entry.
  /// Returns `None` and leaves the list untouched if the name is blank.
  pub fn add(&mut self, name: &str) -> Option<MeetingEntry> {
    let name = name.trim();
    if name.is_empty() {
      debug!("ignoring blank meeting name");
      return None;
    }

    let entry = MeetingEntry {
      id: MeetingId(self.next_id),
      name: String::from(name),
    };
    self.next_id += 1;
    self.entries.push(entry.clone());
    Some(entry)
  }

  /// Removes the meeting with the given id, returning it if it was present.
  pub fn remove(&mut self, id: MeetingId) -> Option<MeetingEntry> {
    match self.entries.iter().position(|m| m.id == id) {
      Some(index) => Some(self.entries.remove(index)),
      None => {
        debug!("no meeting with id {id}, nothing to remove");
        None
      }
    }
  }

  pub fn get(&self, index: usize) -> Option<&MeetingEntry> {
    self.entries.get(index)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &MeetingEntry> {
    self.entries.iter()
  }

  pub fn as_slice(&self) -> &[MeetingEntry] {
    &self.entries
  }

  pub fn names(&self) -> Vec<&str> {
    self.entries.iter().map(|m| m.name.as_str()).collect()
  }
}
