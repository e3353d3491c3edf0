//! The designer session — one form's mutable, observable editing state.

use crate::ids::{IdSource, UuidIdSource};
use crate::intent::DragIntent;
use crate::resolver::{resolve, Placement};
use formloom_model::{Document, FieldInstance, ModelError, ModelResult};
use formloom_registry::{FieldTypeRegistry, RegistryResult};
use formloom_types::ElementId;
use std::sync::Arc;
use tracing::{debug, warn};

/// A completed session mutation, delivered to observers.
///
/// Fired synchronously, exactly once per mutating call, after the mutation
/// is fully applied; an observer never sees a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ElementAdded { id: ElementId, index: usize },
    ElementUpdated { id: ElementId },
    /// Covers the implied selection clear when the removed element was
    /// selected; no separate `SelectionChanged` is fired for it.
    ElementRemoved { id: ElementId },
    ElementMoved { id: ElementId, index: usize },
    SelectionChanged { id: Option<ElementId> },
    DocumentReplaced,
}

/// Subscriber to session changes.
///
/// Notifications run on the session's (single) thread of control; observers
/// must not re-enter the session from `on_change`.
pub trait SessionObserver: Send + Sync {
    fn on_change(&self, event: &SessionEvent);
}

/// One editing session: a document, a selection, and subscribers.
///
/// Owns its document exclusively; nothing else reads or writes it
/// concurrently. All operations are atomic units on the hosting surface's
/// event-dispatch path.
pub struct DesignerSession {
    registry: Arc<FieldTypeRegistry>,
    ids: Arc<dyn IdSource>,
    document: Document,
    selection: Option<ElementId>,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl DesignerSession {
    /// Creates an empty session over the given registry, minting random
    /// UUIDs for new elements.
    #[must_use]
    pub fn new(registry: Arc<FieldTypeRegistry>) -> Self {
        Self::with_id_source(registry, Arc::new(UuidIdSource))
    }

    /// Creates a session with a custom id source.
    #[must_use]
    pub fn with_id_source(registry: Arc<FieldTypeRegistry>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            registry,
            ids,
            document: Document::new(),
            selection: None,
            observers: Vec::new(),
        }
    }

    /// The registry this session constructs elements from.
    #[must_use]
    pub fn registry(&self) -> &Arc<FieldTypeRegistry> {
        &self.registry
    }

    /// The current document, for rendering.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The currently selected element id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Inserts an instance at a position (clamped to the document length).
    pub fn add_element(&mut self, index: usize, instance: FieldInstance) {
        let id = instance.id;
        let index = index.min(self.document.len());
        self.document.insert_at(index, instance);
        debug!(element = %id, index, "element added");
        self.notify(SessionEvent::ElementAdded { id, index });
    }

    /// Replaces an element's instance wholesale (the property-save path).
    ///
    /// Raised, not swallowed: the caller named an id it believes exists.
    pub fn update_element(&mut self, id: ElementId, instance: FieldInstance) -> ModelResult<()> {
        self.document.replace(id, instance)?;
        debug!(element = %id, "element updated");
        self.notify(SessionEvent::ElementUpdated { id });
        Ok(())
    }

    /// Removes an element, clearing the selection if it was selected.
    pub fn remove_element(&mut self, id: ElementId) -> ModelResult<()> {
        self.document.remove_by_id(id)?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        debug!(element = %id, "element removed");
        self.notify(SessionEvent::ElementRemoved { id });
        Ok(())
    }

    /// Sets or clears the selection. No effect on the document.
    ///
    /// Selecting an id that is not in the document is rejected, keeping the
    /// invariant that the selection always names a live element.
    pub fn select(&mut self, id: Option<ElementId>) -> ModelResult<()> {
        if let Some(id) = id {
            if !self.document.contains(id) {
                return Err(ModelError::ElementNotFound(id));
            }
        }
        self.selection = id;
        self.notify(SessionEvent::SelectionChanged { id });
        Ok(())
    }

    /// Applies one completed drag gesture.
    ///
    /// Returns `Ok(true)` if the document changed, `Ok(false)` for a
    /// gesture with no valid placement (released outside any target, stale
    /// ids, self-drop); those are silently absorbed, never errors. The
    /// only error is an unknown palette type tag, which is a configuration
    /// bug rather than a drag outcome.
    pub fn apply_drag_intent(&mut self, intent: &DragIntent) -> RegistryResult<bool> {
        let Some(placement) = resolve(&self.document, intent) else {
            debug!(?intent, "drag gesture discarded: no valid placement");
            return Ok(false);
        };

        match placement {
            Placement::Insert { kind, index } => {
                let instance = self.registry.construct(&kind, self.ids.fresh())?;
                let id = instance.id;
                self.document.insert_at(index, instance);
                debug!(element = %id, %kind, index, "palette drop applied");
                self.notify(SessionEvent::ElementAdded { id, index });
                Ok(true)
            }
            Placement::Move { id, index } => {
                // The resolver saw the id an instant ago; a miss here means
                // a stale gesture, which is a no-op by contract.
                let Ok(instance) = self.document.remove_by_id(id) else {
                    warn!(element = %id, "drag move discarded: source vanished");
                    return Ok(false);
                };
                self.document.insert_at(index, instance);
                debug!(element = %id, index, "element move applied");
                self.notify(SessionEvent::ElementMoved { id, index });
                Ok(true)
            }
        }
    }

    // ── Snapshot boundary ────────────────────────────────────────

    /// Clones the current document for handing to the persistence
    /// collaborator.
    #[must_use]
    pub fn snapshot(&self) -> Document {
        self.document.clone()
    }

    /// Installs an externally loaded document, clearing the selection.
    pub fn install_snapshot(&mut self, document: Document) {
        self.document = document;
        self.selection = None;
        debug!(elements = self.document.len(), "document snapshot installed");
        self.notify(SessionEvent::DocumentReplaced);
    }

    fn notify(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer.on_change(&event);
        }
    }
}
