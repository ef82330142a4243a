//! Container types of the value model.
//!
//! [`Slice`] is the ordered, index-addressed container; [`SMap`] the
//! string-keyed one. Both are persistent structures: owner-side mutation
//! returns a new instance and never disturbs existing readers.

pub mod slice;
pub mod smap;

pub use slice::Slice;
pub use smap::SMap;
