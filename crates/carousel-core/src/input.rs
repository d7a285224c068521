//! Decoded input events and their mapping onto carousel operations.
//!
//! Hosts translate raw platform events into [`InputEvent`] and feed them to
//! [`Carousel::handle_input`] one at a time, in arrival order.

use crate::math::pointer_to_ndc;
use crate::state::Carousel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` / `key` string.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in viewport pixels, origin top-left.
    PointerMove { x: f32, y: f32 },
    PointerDown,
    PointerUp,
    Wheel { dx: f32, dy: f32 },
    Key(Key),
    Resize { width: f32, height: f32 },
}

impl Carousel {
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                let ndc = pointer_to_ndc(x, y, self.viewport);
                self.update_pointer(ndc.x, ndc.y);
            }
            InputEvent::PointerDown => self.set_pointer_down(true),
            InputEvent::PointerUp => {
                self.set_pointer_down(false);
                self.handle_primary_action();
            }
            InputEvent::Wheel { dx, dy } => self.handle_wheel(dx, dy),
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    fn handle_wheel(&mut self, dx: f32, dy: f32) {
        if self.viewing_detail {
            self.scroll_detail(dy);
            return;
        }
        if dx > 0.0 || dy > 0.0 {
            self.select_next();
        } else if dx < 0.0 || dy < 0.0 {
            self.select_prev();
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowRight => self.select_next(),
            Key::ArrowLeft => self.select_prev(),
            Key::ArrowDown => self.scroll_detail(1.0),
            Key::ArrowUp => self.scroll_detail(-1.0),
            Key::Enter => self.toggle_detail(),
            Key::Escape => self.exit_detail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_map() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_code("NumpadEnter"), Some(Key::Enter));
        assert_eq!(Key::from_code("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_code("KeyA"), None);
        assert_eq!(Key::from_code(""), None);
    }
}
