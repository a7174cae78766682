//! Viewport/content geometry of a scrollable surface.
//!
//! Each axis keeps a scroll value in `[0, 1]` (how much of the scrollable
//! travel is consumed) and a visible percent (viewport / content). Content
//! position is derived from the scroll values, except after a wheel move
//! where the position is moved directly and the values are derived from it.
//! Every recomputation is a pure function of the current state and may be
//! re-run any number of times.

use crate::layout::{Point, Rect, Size};
use crate::types::{Dock, Orientation, ScrollBarVisibility};

pub const DEFAULT_SCROLL_SPEED: f32 = 0.5;

/// State of one scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub scroll_value: f32,
    pub visible_percent: f32,
    pub visibility: ScrollBarVisibility,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            scroll_value: 0.0,
            visible_percent: 1.0,
            visibility: ScrollBarVisibility::OnOverflow,
        }
    }
}

impl AxisState {
    pub fn bar_visible(&self) -> bool {
        self.visibility.resolve(self.visible_percent)
    }
}

/// Bounding size of the children of a content layer, never smaller than the
/// viewport. Fill-docked children are ignored; left/right-docked children
/// only extend the height and top/bottom-docked children only the width.
pub fn content_extents<I>(viewport: Size, children: I) -> Size
where
    I: IntoIterator<Item = (Rect, Dock)>,
{
    let mut size = viewport.clamped();
    for (bounds, dock) in children {
        if dock.contributes_width() {
            size.width = size.width.max(bounds.right());
        }
        if dock.contributes_height() {
            size.height = size.height.max(bounds.bottom());
        }
    }
    size
}

/// Fraction of `content` shown by `viewport`; exactly 1.0 without overflow.
pub fn visible_percent(viewport: i32, content: i32) -> f32 {
    if content <= 0 || content <= viewport {
        return 1.0;
    }
    (viewport.max(0) as f32 / content as f32).clamp(0.0, 1.0)
}

/// Content offset on one axis for a scroll value.
pub fn position_for_value(viewport: i32, content: i32, value: f32) -> i32 {
    let travel = content.saturating_sub(viewport);
    if travel <= 0 {
        return 0;
    }
    -((travel as f32 * clamp_unit(value)).round() as i32)
}

/// Scroll value on one axis for a content offset.
pub fn value_for_position(viewport: i32, content: i32, position: i32) -> f32 {
    let travel = content.saturating_sub(viewport);
    if travel == 0 {
        return 0.0;
    }
    clamp_unit(position.saturating_abs() as f32 / travel as f32)
}

/// Clamp to `[0, 1]`; NaN becomes 0.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollGeometry {
    viewport: Size,
    content: Size,
    position: Point,
    horizontal: AxisState,
    vertical: AxisState,
    scroll_speed: f32,
}

impl Default for ScrollGeometry {
    fn default() -> Self {
        Self {
            viewport: Size::default(),
            content: Size::default(),
            position: Point::default(),
            horizontal: AxisState::default(),
            vertical: AxisState::default(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
        }
    }
}

impl ScrollGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Location of the content layer relative to the viewport; never
    /// positive.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn axis(&self, orientation: Orientation) -> &AxisState {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, orientation: Orientation) -> &mut AxisState {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    pub fn scroll_value(&self, orientation: Orientation) -> f32 {
        self.axis(orientation).scroll_value
    }

    pub fn visible_percent(&self, orientation: Orientation) -> f32 {
        self.axis(orientation).visible_percent
    }

    pub fn visibility(&self, orientation: Orientation) -> ScrollBarVisibility {
        self.axis(orientation).visibility
    }

    pub fn set_visibility(&mut self, orientation: Orientation, visibility: ScrollBarVisibility) {
        self.axis_mut(orientation).visibility = visibility;
    }

    pub fn bar_visible(&self, orientation: Orientation) -> bool {
        self.axis(orientation).bar_visible()
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Negative or NaN speeds are treated as zero.
    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = if speed.is_nan() { 0.0 } else { speed.max(0.0) };
    }

    /// Largest distance the content can travel on each axis.
    pub fn max_travel(&self) -> Size {
        Size::new(
            self.content.width.saturating_sub(self.viewport.width).max(0),
            self.content.height.saturating_sub(self.viewport.height).max(0),
        )
    }

    /// Recompute after the viewport or the content changed: content extents,
    /// then visible percents, then position from the current scroll values.
    ///
    /// Returns true if anything observable changed.
    pub fn relayout(&mut self, viewport: Size, extents: Size) -> bool {
        let before = (self.viewport, self.content, self.position, self.visible_percents());

        self.viewport = viewport.clamped();
        self.content = Size::new(
            extents.width.max(self.viewport.width),
            extents.height.max(self.viewport.height),
        );
        self.horizontal.visible_percent = visible_percent(self.viewport.width, self.content.width);
        self.vertical.visible_percent = visible_percent(self.viewport.height, self.content.height);
        self.apply_scroll_values();

        before != (self.viewport, self.content, self.position, self.visible_percents())
    }

    fn visible_percents(&self) -> (f32, f32) {
        (self.horizontal.visible_percent, self.vertical.visible_percent)
    }

    /// Assign a scroll value (clamped) and reposition the content.
    /// Returns true if the stored value changed.
    pub fn set_scroll_value(&mut self, orientation: Orientation, value: f32) -> bool {
        let value = clamp_unit(value);
        let axis = self.axis_mut(orientation);
        let changed = axis.scroll_value != value;
        axis.scroll_value = value;
        self.apply_scroll_values();
        changed
    }

    /// Derive the content position from the scroll values.
    pub fn apply_scroll_values(&mut self) -> Point {
        self.position = Point::new(
            position_for_value(self.viewport.width, self.content.width, self.horizontal.scroll_value),
            position_for_value(self.viewport.height, self.content.height, self.vertical.scroll_value),
        );
        self.position
    }

    /// Move the content vertically by a wheel `delta` scaled by the scroll
    /// speed, then derive the scroll values from the new position.
    ///
    /// Returns false without doing anything when there is nothing to scroll.
    pub fn wheel(&mut self, delta: i32) -> bool {
        if self.vertical.visible_percent >= 1.0 {
            return false;
        }

        let step = (delta as f32 * self.scroll_speed) as i32;
        let y = self.position.y.saturating_add(step);
        let lowest = self.viewport.height.saturating_sub(self.content.height);
        let y = if y > 0 {
            0
        } else if y < lowest {
            lowest
        } else {
            y
        };

        let moved = y != self.position.y;
        self.position.y = y;
        self.horizontal.scroll_value =
            value_for_position(self.viewport.width, self.content.width, self.position.x);
        self.vertical.scroll_value =
            value_for_position(self.viewport.height, self.content.height, self.position.y);
        log::debug!(
            "[scroll] wheel delta={} step={} position={:?} values=({}, {})",
            delta,
            step,
            self.position,
            self.horizontal.scroll_value,
            self.vertical.scroll_value
        );
        moved
    }
}
