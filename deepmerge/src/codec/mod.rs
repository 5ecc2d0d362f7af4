//! Translation between host attribute values and [`DynamicValue`] trees.
//!
//! [`decode`] walks a [`HostValue`] and fails only on host kinds the merge
//! model cannot carry (capsules). [`encode`] is total: every dynamic value has
//! a host representation, with unknown placeholders re-materialised as host
//! unknowns of the recorded shape.

mod decode;
mod encode;
mod path;

pub use decode::{DecodeError, decode};
pub use encode::encode;
pub use path::{PathSegment, ValuePath};
