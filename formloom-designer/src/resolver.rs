//! Drag-placement resolution.
//!
//! Translates one completed gesture into a single element-model operation.
//! Pure: reads the document, mutates nothing, and recomputes every index
//! from the ids at the moment the gesture completes.

use crate::intent::{DragIntent, DragSource, DropTarget};
use formloom_model::Document;
use formloom_types::{ElementId, FieldKind};

/// The element-model operation a gesture resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Construct a new element of `kind` and insert it at `index`.
    Insert { kind: FieldKind, index: usize },
    /// Remove the element `id` and re-insert it at `index`.
    ///
    /// `index` is valid for the sequence AFTER the removal; apply it with
    /// remove-then-insert and no further adjustment.
    Move { id: ElementId, index: usize },
}

/// Resolves a gesture against the current document.
///
/// Decision table, first match wins:
/// 1. palette onto the canvas — append
/// 2. palette onto an element half — insert at that half's index
/// 3. element onto a different element half — move, with the insertion
///    index adjusted for the source's removal
/// 4. anything else — `None`; the gesture is silently discarded
///
/// Stale ids (source or target no longer in the document) fall through to
/// case 4: a drag is best-effort and must never fail the session.
#[must_use]
pub fn resolve(document: &Document, intent: &DragIntent) -> Option<Placement> {
    match (&intent.source, &intent.target) {
        (DragSource::Palette(kind), DropTarget::Canvas) => Some(Placement::Insert {
            kind: kind.clone(),
            index: document.len(),
        }),

        (DragSource::Palette(kind), DropTarget::Element { id, half }) => {
            let target_index = document.index_of(*id)?;
            Some(Placement::Insert {
                kind: kind.clone(),
                index: half.insertion_index(target_index),
            })
        }

        (DragSource::Element(source_id), DropTarget::Element { id: target_id, half }) => {
            if source_id == target_id {
                return None;
            }
            let source_index = document.index_of(*source_id)?;
            let target_index = document.index_of(*target_id)?;

            // The insertion index is computed against the pre-removal
            // sequence. Removing the source shifts every later position
            // left by one, so a downward move lands one short of the raw
            // index; an upward move is unaffected.
            let mut index = half.insertion_index(target_index);
            if source_index < index {
                index -= 1;
            }
            Some(Placement::Move {
                id: *source_id,
                index,
            })
        }

        // An existing element released over the bare canvas keeps its
        // place.
        (DragSource::Element(_), DropTarget::Canvas) => None,
    }
}
