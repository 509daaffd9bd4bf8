//! Host-independent key events.
//!
//! The editing surface translates its native keyboard events into this
//! representation before offering them to the flow machine. Only Enter,
//! Backspace, `(` and `)` ever trigger a transition; any other key comes
//! through as [`Key::Char`] and is declined.

use serde::{Deserialize, Serialize};

/// Key identity, independent of the host's keyboard event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
    Enter,
    Backspace,
    /// A printable character, `(` and `)` included.
    Char(char),
}

/// One keystroke as delivered by the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub key: Key,

    /// True while an input-method composition is in progress. The flow
    /// machine does nothing mid-composition.
    #[serde(default)]
    pub composing: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            composing: false,
        }
    }

    /// The same key, flagged as part of an IME composition.
    pub fn while_composing(key: Key) -> Self {
        Self {
            key,
            composing: true,
        }
    }
}
