/// Which borders of a surface start a resize drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ResizeEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl ResizeEdges {
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    pub const fn horizontal() -> Self {
        Self::new(false, true, false, true)
    }

    pub const fn vertical() -> Self {
        Self::new(true, false, true, false)
    }

    pub const fn top() -> Self {
        Self::new(true, false, false, false)
    }

    pub const fn right() -> Self {
        Self::new(false, true, false, false)
    }

    pub const fn bottom() -> Self {
        Self::new(false, false, true, false)
    }

    pub const fn left() -> Self {
        Self::new(false, false, false, true)
    }

    pub const fn union(self, other: Self) -> Self {
        Self {
            top: self.top || other.top,
            right: self.right || other.right,
            bottom: self.bottom || other.bottom,
            left: self.left || other.left,
        }
    }

    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}
