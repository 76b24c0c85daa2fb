//! Keyboard-to-command mapping for the control surface.

use std::collections::HashSet;

/// Externally triggered mutation of the particle store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Add up to this many particles (truncated at capacity).
    Spawn(usize),
    /// Remove every particle.
    Reset,
}

/// Tracks held keys and turns key presses into [`ControlCommand`]s.
///
/// Like a browser key map, every key still held is re-evaluated on each
/// key-down, so holding the spawn key while pressing reset yields both
/// commands in spawn-then-reset order.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub spawn_key: char,
    pub reset_key: char,
    pressed: HashSet<char>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new('n', 'r')
    }
}

impl KeyBindings {
    pub fn new(spawn_key: char, reset_key: char) -> Self {
        Self {
            spawn_key,
            reset_key,
            pressed: HashSet::new(),
        }
    }

    /// Records a key press. `spawn_count` is the raw text of the numeric field
    /// the spawn count is read from.
    pub fn key_down(&mut self, key: char, spawn_count: &str) -> Vec<ControlCommand> {
        self.pressed.insert(key);

        let mut commands = Vec::new();
        if self.pressed.contains(&self.spawn_key) {
            // An unreadable field still spawns nothing and refreshes the readout.
            let count = parse_spawn_count(spawn_count).unwrap_or(0);
            commands.push(ControlCommand::Spawn(count));
        }
        if self.pressed.contains(&self.reset_key) {
            commands.push(ControlCommand::Reset);
        }
        commands
    }

    pub fn key_up(&mut self, key: char) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: char) -> bool {
        self.pressed.contains(&key)
    }
}

/// Reads the leading integer of a text field, ignoring whatever follows it
/// (`"3.7"` is 3, `"12abc"` is 12). Negative numbers mean zero, oversized
/// ones saturate. Returns `None` when the field does not start with digits.
pub fn parse_spawn_count(text: &str) -> Option<usize> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}
