/// How a control is attached to its parent's edges.
///
/// Docked children are laid out by the host; the scroll engine only uses
/// the dock to decide which axes a child contributes to content extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Dock {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    Fill,
}

impl Dock {
    /// Whether a child with this dock extends the content width.
    pub const fn contributes_width(self) -> bool {
        !matches!(self, Dock::Fill | Dock::Left | Dock::Right)
    }

    /// Whether a child with this dock extends the content height.
    pub const fn contributes_height(self) -> bool {
        !matches!(self, Dock::Fill | Dock::Top | Dock::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn other(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// When the scrollbar of an axis is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ScrollBarVisibility {
    Never,
    Always,
    #[default]
    OnOverflow,
}

impl ScrollBarVisibility {
    /// Resolve the policy against the visible fraction of an axis.
    pub fn resolve(self, visible_percent: f32) -> bool {
        match self {
            ScrollBarVisibility::Never => false,
            ScrollBarVisibility::Always => true,
            ScrollBarVisibility::OnOverflow => visible_percent < 1.0,
        }
    }
}
