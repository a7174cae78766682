//! Binding between a scrollable surface and its scrollbar widgets.
//!
//! The surface does not own the scrollbars; it only holds which bar is
//! bound to each axis. A value change raised by a bar reaches the surface
//! only while that bar is the one bound to the axis, so replacing or
//! detaching a bar drops its relay.

use super::geometry::clamp_unit;
use crate::tree::ControlId;
use crate::types::Orientation;

/// Scrollbar widget state. Its visibility is the `visible` flag of its
/// control, set by the surface it is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBar {
    id: ControlId,
    orientation: Orientation,
    value: f32,
}

impl ScrollBar {
    pub fn new(id: ControlId, orientation: Orientation) -> Self {
        Self {
            id,
            orientation,
            value: 0.0,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps to `[0, 1]`. Returns true if the value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let value = clamp_unit(value);
        let changed = self.value != value;
        self.value = value;
        changed
    }
}

/// Where a scroll value change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncSource {
    /// The user dragged the bar of this axis.
    ScrollBar(Orientation),
    /// The value of this axis was assigned programmatically.
    Program(Orientation),
    /// The content was moved by the wheel; both values were re-derived.
    Wheel,
    /// Viewport or content extents changed; values are untouched.
    Layout,
}

impl SyncSource {
    /// Bars whose value must be pushed after a change from this source.
    /// A bar never receives the change it raised itself.
    pub fn bars_to_update(self) -> &'static [Orientation] {
        match self {
            SyncSource::ScrollBar(Orientation::Horizontal) => &[Orientation::Vertical],
            SyncSource::ScrollBar(Orientation::Vertical) => &[Orientation::Horizontal],
            SyncSource::Program(Orientation::Horizontal) => &[Orientation::Horizontal],
            SyncSource::Program(Orientation::Vertical) => &[Orientation::Vertical],
            SyncSource::Wheel => &[Orientation::Horizontal, Orientation::Vertical],
            SyncSource::Layout => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollBarSync {
    horizontal: Option<ControlId>,
    vertical: Option<ControlId>,
}

impl ScrollBarSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bar(&self, orientation: Orientation) -> Option<ControlId> {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }

    fn slot(&mut self, orientation: Orientation) -> &mut Option<ControlId> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Bind `bar` to an axis, returning the bar it replaced.
    pub fn attach(&mut self, orientation: Orientation, bar: ControlId) -> Option<ControlId> {
        let slot = self.slot(orientation);
        if *slot == Some(bar) {
            return None;
        }
        slot.replace(bar)
    }

    pub fn detach(&mut self, orientation: Orientation) -> Option<ControlId> {
        self.slot(orientation).take()
    }

    /// Forget `bar` wherever it is bound.
    pub fn forget(&mut self, bar: ControlId) {
        if self.horizontal == Some(bar) {
            self.horizontal = None;
        }
        if self.vertical == Some(bar) {
            self.vertical = None;
        }
    }

    /// The axis `bar` relays to, if it is currently bound.
    pub fn axis_of(&self, bar: ControlId) -> Option<Orientation> {
        if self.horizontal == Some(bar) {
            Some(Orientation::Horizontal)
        } else if self.vertical == Some(bar) {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}
