use carousel_core::{InputEvent, Key};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as LogicalKey, NamedKey};

// Lines reported by the wheel are converted with this height
const LINE_HEIGHT_PX: f32 = 16.0;

pub fn named_key(key: &LogicalKey) -> Option<Key> {
    match key {
        LogicalKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        LogicalKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        LogicalKey::Named(NamedKey::ArrowUp) => Some(Key::ArrowUp),
        LogicalKey::Named(NamedKey::ArrowDown) => Some(Key::ArrowDown),
        LogicalKey::Named(NamedKey::Enter) => Some(Key::Enter),
        LogicalKey::Named(NamedKey::Escape) => Some(Key::Escape),
        _ => None,
    }
}

/// winit reports content motion; flip it to match DOM wheel deltas.
pub fn wheel_event(delta: MouseScrollDelta) -> InputEvent {
    let (dx, dy) = match delta {
        MouseScrollDelta::LineDelta(x, y) => (x * LINE_HEIGHT_PX, y * LINE_HEIGHT_PX),
        MouseScrollDelta::PixelDelta(p) => (p.x as f32, p.y as f32),
    };
    InputEvent::Wheel { dx: -dx, dy: -dy }
}

pub fn button_event(state: ElementState, button: MouseButton) -> Option<InputEvent> {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => Some(InputEvent::PointerDown),
        (MouseButton::Left, ElementState::Released) => Some(InputEvent::PointerUp),
        _ => None,
    }
}

/// Translate a window event; everything else the carousel ignores.
pub fn window_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMove {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => button_event(*state, *button),
        WindowEvent::MouseWheel { delta, .. } => Some(wheel_event(*delta)),
        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            named_key(&event.logical_key).map(InputEvent::Key)
        }
        WindowEvent::Resized(size) => Some(InputEvent::Resize {
            width: size.width as f32,
            height: size.height as f32,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn arrows_enter_and_escape_map() {
        assert_eq!(
            named_key(&LogicalKey::Named(NamedKey::ArrowRight)),
            Some(Key::ArrowRight)
        );
        assert_eq!(named_key(&LogicalKey::Named(NamedKey::Enter)), Some(Key::Enter));
        assert_eq!(named_key(&LogicalKey::Named(NamedKey::Tab)), None);
        assert_eq!(named_key(&LogicalKey::Character("q".into())), None);
    }

    #[test]
    fn wheel_down_is_positive() {
        // wheel toward the user: content moves up
        assert_eq!(
            wheel_event(MouseScrollDelta::LineDelta(0.0, -1.0)),
            InputEvent::Wheel {
                dx: 0.0,
                dy: LINE_HEIGHT_PX
            }
        );
        assert_eq!(
            wheel_event(MouseScrollDelta::PixelDelta(PhysicalPosition::new(4.0, 30.0))),
            InputEvent::Wheel { dx: -4.0, dy: -30.0 }
        );
    }

    #[test]
    fn only_left_button_counts() {
        assert_eq!(
            button_event(ElementState::Pressed, MouseButton::Left),
            Some(InputEvent::PointerDown)
        );
        assert_eq!(
            button_event(ElementState::Released, MouseButton::Left),
            Some(InputEvent::PointerUp)
        );
        assert_eq!(button_event(ElementState::Released, MouseButton::Right), None);
    }

    #[test]
    fn resize_uses_physical_size() {
        assert_eq!(
            window_input(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
            Some(InputEvent::Resize {
                width: 800.0,
                height: 600.0
            })
        );
        assert_eq!(window_input(&WindowEvent::Focused(true)), None);
    }
}
