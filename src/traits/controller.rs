/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    Digit0,
    Digit1,
    Digit2,
    KeyL,
    KeyO,
    KeyK,
    MouseLeft,
}

/// Controller - source of held-button state, polled once per frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
