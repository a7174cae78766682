use thiserror::Error;

use crate::tree::ControlId;

/// Errors raised by structural operations the host toolkit itself rejects.
///
/// Geometry and hit-testing never fail; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The control was never created or has been disposed.
    #[error("unknown control {0}")]
    UnknownControl(ControlId),

    /// The child is the parent itself or one of its ancestors.
    #[error("cannot add {child} beneath {parent}: it is an ancestor of the parent")]
    CircularReference { parent: ControlId, child: ControlId },

    /// The control is not a scrollbar widget.
    #[error("control {0} is not a scrollbar")]
    NotAScrollBar(ControlId),
}
