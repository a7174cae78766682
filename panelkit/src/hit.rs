use crate::layout::{Point, Size};
use crate::types::ResizeEdges;

/// Border region under the cursor, as reported to the host's
/// "what is under this point" probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeRegion {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Right,
    Top,
    Bottom,
}

impl ResizeRegion {
    /// The `WM_NCHITTEST` code the host uses to start a native resize drag.
    pub const fn code(self) -> isize {
        match self {
            ResizeRegion::Left => 10,
            ResizeRegion::Right => 11,
            ResizeRegion::Top => 12,
            ResizeRegion::TopLeft => 13,
            ResizeRegion::TopRight => 14,
            ResizeRegion::Bottom => 15,
            ResizeRegion::BottomLeft => 16,
            ResizeRegion::BottomRight => 17,
        }
    }

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeRegion::TopLeft
                | ResizeRegion::TopRight
                | ResizeRegion::BottomLeft
                | ResizeRegion::BottomRight
        )
    }
}

/// Answer to a probe: either a border region or the surface's default
/// handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTestResult {
    Client,
    Border(ResizeRegion),
}

impl HitTestResult {
    /// `HTCLIENT` for default handling, otherwise the region code.
    pub const fn code(self) -> isize {
        match self {
            HitTestResult::Client => 1,
            HitTestResult::Border(region) => region.code(),
        }
    }

    pub const fn region(self) -> Option<ResizeRegion> {
        match self {
            HitTestResult::Client => None,
            HitTestResult::Border(region) => Some(region),
        }
    }
}

impl From<Option<ResizeRegion>> for HitTestResult {
    fn from(region: Option<ResizeRegion>) -> Self {
        region.map_or(HitTestResult::Client, HitTestResult::Border)
    }
}

/// Edge flags plus a shared thickness, classifying client-space points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderHitTester {
    pub edges: ResizeEdges,
    thickness: i32,
}

impl BorderHitTester {
    pub fn new(edges: ResizeEdges, thickness: i32) -> Self {
        Self {
            edges,
            thickness: thickness.max(0),
        }
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Negative thickness is treated as zero.
    pub fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness.max(0);
    }

    pub fn classify(&self, pos: Point, client: Size) -> Option<ResizeRegion> {
        classify(pos, client, self.edges, self.thickness)
    }
}

/// Classify `pos` (client coordinates) against the borders of a surface of
/// `client` size. Corners win over edges; `None` defers to the surface.
pub fn classify(pos: Point, client: Size, edges: ResizeEdges, thickness: i32) -> Option<ResizeRegion> {
    let t = thickness.max(0);
    let client = client.clamped();

    let near_left = pos.x <= t;
    let near_top = pos.y <= t;
    let near_right = pos.x >= client.width.saturating_sub(t);
    let near_bottom = pos.y >= client.height.saturating_sub(t);

    let left = edges.left && near_left;
    let top = edges.top && near_top;
    let right = edges.right && near_right;
    let bottom = edges.bottom && near_bottom;

    // Order matters: corner regions overlap two edge regions.
    match (left, top, right, bottom) {
        (true, true, _, _) => Some(ResizeRegion::TopLeft),
        (_, true, true, _) => Some(ResizeRegion::TopRight),
        (true, _, _, true) => Some(ResizeRegion::BottomLeft),
        (_, _, true, true) => Some(ResizeRegion::BottomRight),
        (true, _, _, _) => Some(ResizeRegion::Left),
        (_, true, _, _) => Some(ResizeRegion::Top),
        (_, _, true, _) => Some(ResizeRegion::Right),
        (_, _, _, true) => Some(ResizeRegion::Bottom),
        _ => None,
    }
}
