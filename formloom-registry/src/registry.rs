use crate::catalog;
use crate::descriptor::FieldTypeDescriptor;
use formloom_model::FieldInstance;
use formloom_types::{ElementId, FieldKind};
use std::collections::HashMap;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur in registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A type tag has no registry entry. Signals a data or registration
    /// bug; a well-formed document never references an unknown tag.
    #[error("unknown field type: {0}")]
    UnknownType(FieldKind),

    /// A descriptor was registered under an already-taken type tag.
    #[error("field type already registered: {0}")]
    AlreadyRegistered(FieldKind),
}

/// The process-wide catalog of field types.
///
/// Assembled once at startup and shared read-only afterwards (typically
/// behind an `Arc`); there is no post-startup mutation and therefore no
/// synchronization concern.
#[derive(Debug, Clone, Default)]
pub struct FieldTypeRegistry {
    descriptors: HashMap<FieldKind, FieldTypeDescriptor>,
    /// Palette/registration order, for stable iteration.
    order: Vec<FieldKind>,
}

impl FieldTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in field catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for descriptor in catalog::builtin_descriptors() {
            registry
                .register(descriptor)
                .expect("built-in catalog has unique type tags");
        }
        registry
    }

    /// Registers a descriptor under its type tag.
    ///
    /// Intended for startup assembly only; fails if the tag is taken.
    pub fn register(&mut self, descriptor: FieldTypeDescriptor) -> RegistryResult<()> {
        let kind = descriptor.kind().clone();
        if self.descriptors.contains_key(&kind) {
            return Err(RegistryError::AlreadyRegistered(kind));
        }
        self.order.push(kind.clone());
        self.descriptors.insert(kind, descriptor);
        Ok(())
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Looks up the descriptor for a type tag.
    pub fn lookup(&self, kind: &FieldKind) -> RegistryResult<&FieldTypeDescriptor> {
        self.descriptors
            .get(kind)
            .ok_or_else(|| RegistryError::UnknownType(kind.clone()))
    }

    /// Constructs a fresh instance of the given type with the given id.
    ///
    /// Pure in its inputs: the caller supplies the (globally unique)
    /// identifier, the descriptor supplies the default attributes.
    pub fn construct(&self, kind: &FieldKind, id: ElementId) -> RegistryResult<FieldInstance> {
        Ok(self.lookup(kind)?.construct(id))
    }

    /// Validates a submitted raw value against an instance.
    pub fn validate(&self, instance: &FieldInstance, raw_value: &str) -> RegistryResult<bool> {
        Ok(self.lookup(&instance.kind)?.validate(instance, raw_value))
    }

    /// Iterates descriptors in registration (palette) order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldTypeDescriptor> {
        self.order.iter().filter_map(|kind| self.descriptors.get(kind))
    }

    /// Iterates the registered type tags in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &FieldKind> {
        self.order.iter()
    }
}
