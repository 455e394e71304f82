//! Keyboard input tracking
//!
//! Two input semantics live side by side:
//! - Movement keys are level-sampled: the simulation reads the held state
//!   fresh every frame via [`InputTracker::snapshot`].
//! - The start/pause key is edge-triggered: [`InputTracker::key_down`] reports
//!   [`Action::Toggle`] once per physical press, never on auto-repeat.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical key roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Toggle,
}

/// One-shot actions produced by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start or pause the simulation
    Toggle,
}

/// Raw key identifiers (DOM `KeyboardEvent.key` values) bound to each role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub toggle: Vec<String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into(), "A".into()],
            right: vec!["ArrowRight".into(), "d".into(), "D".into()],
            toggle: vec![" ".into()],
        }
    }
}

impl Keymap {
    /// Resolve a raw key to its role, if bound
    pub fn resolve(&self, raw: &str) -> Option<Key> {
        let bound = |keys: &[String]| keys.iter().any(|k| k == raw);
        if bound(&self.toggle) {
            Some(Key::Toggle)
        } else if bound(&self.left) {
            Some(Key::Left)
        } else if bound(&self.right) {
            Some(Key::Right)
        } else {
            None
        }
    }
}

/// Persistent pressed/released map, keyed by raw key
///
/// Keying by the raw identifier (not the role) means releasing `a` while
/// `ArrowLeft` is still held keeps the paddle moving.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    keymap: Keymap,
    pressed: HashMap<String, bool>,
}

impl InputTracker {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            pressed: HashMap::new(),
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Whether the host should suppress the browser default for this key
    /// (e.g. space scrolling the page)
    pub fn is_bound(&self, raw: &str) -> bool {
        self.keymap.resolve(raw).is_some()
    }

    /// Record a key-down; returns an action only on the released -> pressed edge
    pub fn key_down(&mut self, raw: &str) -> Option<Action> {
        let was_down = self.pressed.insert(raw.to_owned(), true).unwrap_or(false);
        match self.keymap.resolve(raw) {
            Some(Key::Toggle) if !was_down => Some(Action::Toggle),
            _ => None,
        }
    }

    pub fn key_up(&mut self, raw: &str) {
        self.pressed.insert(raw.to_owned(), false);
    }

    /// Forget every held key (focus lost, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Is any raw key bound to `role` currently held?
    pub fn is_held(&self, role: Key) -> bool {
        self.pressed
            .iter()
            .any(|(raw, &down)| down && self.keymap.resolve(raw) == Some(role))
    }

    /// Sample the movement keys for one frame
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve("ArrowLeft"), Some(Key::Left));
        assert_eq!(keymap.resolve("A"), Some(Key::Left));
        assert_eq!(keymap.resolve("d"), Some(Key::Right));
        assert_eq!(keymap.resolve(" "), Some(Key::Toggle));
        assert_eq!(keymap.resolve("Escape"), None);
    }

    #[test]
    fn test_toggle_is_edge_triggered() {
        let mut input = InputTracker::default();
        assert_eq!(input.key_down(" "), Some(Action::Toggle));
        // Auto-repeat while held
        assert_eq!(input.key_down(" "), None);
        assert_eq!(input.key_down(" "), None);
        input.key_up(" ");
        assert_eq!(input.key_down(" "), Some(Action::Toggle));
    }

    #[test]
    fn test_movement_is_level_sampled() {
        let mut input = InputTracker::default();
        assert_eq!(input.key_down("ArrowLeft"), None);
        assert!(input.snapshot().left);
        assert!(input.snapshot().left);
        input.key_up("ArrowLeft");
        assert!(!input.snapshot().left);
    }

    #[test]
    fn test_aliases_tracked_independently() {
        let mut input = InputTracker::default();
        input.key_down("ArrowRight");
        input.key_down("d");
        input.key_up("d");
        assert!(input.snapshot().right);
        input.key_up("ArrowRight");
        assert!(!input.snapshot().right);
    }

    #[test]
    fn test_simultaneous_left_right() {
        let mut input = InputTracker::default();
        input.key_down("a");
        input.key_down("ArrowRight");
        let snap = input.snapshot();
        assert!(snap.left && snap.right);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputTracker::default();
        input.key_down("a");
        input.key_down(" ");
        input.release_all();
        assert_eq!(input.snapshot(), TickInput::default());
        // Toggle key is fresh again after focus loss
        assert_eq!(input.key_down(" "), Some(Action::Toggle));
    }

    #[test]
    fn test_custom_keymap() {
        let keymap = Keymap {
            left: vec!["j".into()],
            right: vec!["l".into()],
            toggle: vec!["Enter".into()],
        };
        let mut input = InputTracker::new(keymap);
        assert_eq!(input.key_down(" "), None);
        assert_eq!(input.key_down("Enter"), Some(Action::Toggle));
        input.key_down("j");
        assert!(input.snapshot().left);
        assert!(!input.is_bound("ArrowLeft"));
    }
}
