use crate::tree::ControlId;

/// Wheel delta of one notch.
pub const WHEEL_DELTA: i32 = 120;

/// Pointer input delivered by the host, targeted at the control under the
/// cursor. Coordinates are in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    MouseDown {
        target: ControlId,
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held.
    MouseMove { target: ControlId, x: i32, y: i32 },
    MouseUp {
        target: ControlId,
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// Vertical wheel. Positive deltas scroll towards the top.
    Wheel {
        target: ControlId,
        x: i32,
        y: i32,
        delta: i32,
    },
}

impl Event {
    pub fn target(&self) -> ControlId {
        match self {
            Event::MouseDown { target, .. }
            | Event::MouseMove { target, .. }
            | Event::MouseUp { target, .. }
            | Event::Wheel { target, .. } => *target,
        }
    }

    /// Convert a crossterm mouse event aimed at `target`. Horizontal wheel
    /// events are not modeled and yield `None`.
    pub fn from_crossterm(event: crossterm::event::MouseEvent, target: ControlId) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let x = i32::from(event.column);
        let y = i32::from(event.row);
        let converted = match event.kind {
            MouseEventKind::Down(button) => Event::MouseDown {
                target,
                x,
                y,
                button: button.into(),
            },
            MouseEventKind::Up(button) => Event::MouseUp {
                target,
                x,
                y,
                button: button.into(),
            },
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Event::MouseMove { target, x, y },
            MouseEventKind::ScrollUp => Event::Wheel {
                target,
                x,
                y,
                delta: WHEEL_DELTA,
            },
            MouseEventKind::ScrollDown => Event::Wheel {
                target,
                x,
                y,
                delta: -WHEEL_DELTA,
            },
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
        };
        Some(converted)
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
