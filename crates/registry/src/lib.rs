//! Declarative marker records and the kind-keyed handler registry.
//!
//! Markers are plain data: an [`ActionDeclaration`] says what to invoke and
//! how to lay it out, a [`ConditionMarker`] gates enablement or visibility, and
//! a [`ValidatorMarker`] constrains a field. Each marker has a stable kind key
//! (see [`kind`]) that a [`HandlerRegistry`] maps to the code interpreting it.

pub mod condition;
pub mod declaration;
pub mod error;
pub mod kind;
pub mod label;
pub mod marker;
pub mod registry;
pub mod validator;

pub use condition::{ConditionKind, ConditionMarker, ConditionOperator, ConditionSpec};
pub use declaration::{ActionDeclaration, ActionDeclarationBuilder};
pub use error::RegistryError;
pub use label::LabelStyle;
pub use marker::Marker;
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};
pub use validator::ValidatorMarker;
