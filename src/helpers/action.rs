//! Keyboard Keys
//!
//! The few keys the state layer reacts to, decoupled from any rendering
//! layer's event type.

/// A key press relevant to UI state
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Map a legacy key code (`KeyboardEvent.keyCode`)
    pub fn from_code(code: u32) -> Self {
        match code {
            13 => Key::Enter,
            27 => Key::Escape,
            _ => Key::Other,
        }
    }
}
