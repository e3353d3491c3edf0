//! Drag gesture descriptors.
//!
//! A `DragIntent` exists only for the lifetime of one completed gesture.
//! A cancelled gesture produces no intent at all. Element ids carried here
//! are resolved against the document at apply time, never cached as
//! indices; a stale id simply fails to resolve.

use formloom_types::{ElementId, FieldKind};
use serde::{Deserialize, Serialize};

/// Which half of a drop target the pointer was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropHalf {
    Top,
    Bottom,
}

impl DropHalf {
    /// Insertion index relative to a target at `target_index`: the target's
    /// own position for the top half, one past it for the bottom half.
    #[must_use]
    pub fn insertion_index(self, target_index: usize) -> usize {
        match self {
            Self::Top => target_index,
            Self::Bottom => target_index + 1,
        }
    }
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragSource {
    /// A new element of this type, dragged from the palette.
    Palette(FieldKind),
    /// An existing document element, dragged by its handle.
    Element(ElementId),
}

/// Where the gesture was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    /// The canvas itself (or its end-of-document zone), not a specific
    /// element.
    Canvas,
    /// A specific existing element, split into top and bottom drop zones.
    Element { id: ElementId, half: DropHalf },
}

/// One completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragIntent {
    pub source: DragSource,
    pub target: DropTarget,
}

impl DragIntent {
    #[must_use]
    pub fn new(source: DragSource, target: DropTarget) -> Self {
        Self { source, target }
    }
}
