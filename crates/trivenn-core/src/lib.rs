#![forbid(unsafe_code)]

//! Data layer for trivenn: raw form entries, flat `(center, function)` rows,
//! and the ordered overlap maps the diagrams are built from.
//!
//! The pipeline is `RawEntry` → [`normalize_entries`] → `FlatRow` →
//! [`OverlapMap`]. Everything here is pure and order-preserving: map keys
//! appear in the order they were first seen in the row sequence, which is
//! what makes "take the first 3 sets" a stable operation.

mod error;
mod overlap;
mod table;

pub use error::{Error, Result};
pub use overlap::{NamedSet, OverlapMap, SetKind};
pub use table::{FlatRow, RawEntry, normalize_entries};
