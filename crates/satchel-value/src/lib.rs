//! Dynamic value model with safe, best-effort typed accessors.
//!
//! The crate is built around three pieces:
//!
//! - [`Value`] — a closed classification of every storable value
//!   (null, boolean, integer, float, text, bytes, nested slice, nested map),
//! - [`Slice`] — an ordered, index-addressed heterogeneous container,
//! - [`SMap`] — a string-keyed heterogeneous container.
//!
//! Both containers expose a two-tier accessor layer: a best-effort coercion
//! per kind (`bool`, `int`, `float`, `text`, `slice`, `smap`) that reports
//! failure through [`ValueError`] instead of panicking, and a strict
//! predicate per kind (`is_bool`, `is_int`, ...) that never fails.
#![warn(clippy::all)]

pub mod collections;
pub mod core;
pub mod error;

pub use collections::{SMap, Slice};
pub use crate::core::convert::{JsonValueExt, ValueRefExt};
pub use crate::core::kind::ValueKind;
pub use crate::core::value::Value;
pub use error::{ValueError, ValueResult};

// Re-export serde_json::json! for convenience when assembling test data.
pub use serde_json::json;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{SMap, Slice, Value, ValueError, ValueKind, ValueResult};
    pub use crate::{JsonValueExt, ValueRefExt};
}
