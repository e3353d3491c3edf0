use formloom_types::ElementId;

/// Source of fresh element identifiers.
///
/// Registry construction is a pure function of (kind, id), so the session
/// needs something to mint ids from. Injected so tests and embedders can
/// supply deterministic sequences.
pub trait IdSource: Send + Sync {
    /// Returns a globally unique element id.
    fn fresh(&self) -> ElementId;
}

/// The default id source: random UUID v4 per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn fresh(&self) -> ElementId {
        ElementId::new()
    }
}
