//! Field type registry for formloom.
//!
//! Maps a [`FieldKind`](formloom_types::FieldKind) type tag to the behavior
//! bundle for that type:
//! - [`FieldTypeDescriptor`] — construction defaults, submission validator,
//!   attribute checks and palette metadata
//! - [`FieldTypeRegistry`] — the immutable lookup table, built once at
//!   startup via [`FieldTypeRegistry::builtin`] (plus any custom
//!   registrations) and shared read-only afterwards
//!
//! New field types are added by registering a descriptor; the element model
//! and the drag-placement resolver never change for a new type.

mod catalog;
mod descriptor;
mod registry;

pub use catalog::kinds;
pub use descriptor::{AttributeProblem, FieldTypeDescriptor, PaletteEntry};
pub use registry::{FieldTypeRegistry, RegistryError, RegistryResult};
