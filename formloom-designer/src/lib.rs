//! Designer session for formloom.
//!
//! The stateful core behind the form-builder surface:
//! - [`DragIntent`] — plain data describing one completed drag gesture
//! - [`resolve`] — the pure decision table turning an intent into a
//!   [`Placement`] (or nothing, for gestures with no valid placement)
//! - [`DesignerSession`] — one editing session's document, selection and
//!   synchronous change notifications
//!
//! The hosting surface owns pointer/touch events; its only jobs are to
//! build a `DragIntent` when a gesture completes and to re-render from the
//! session's current snapshot when notified. Everything here is
//! single-threaded and non-reentrant: one mutation runs to completion
//! (including notification) before the next may start.

mod ids;
mod intent;
mod resolver;
mod session;

pub use ids::{IdSource, UuidIdSource};
pub use intent::{DragIntent, DragSource, DropHalf, DropTarget};
pub use resolver::{resolve, Placement};
pub use session::{DesignerSession, SessionEvent, SessionObserver};
