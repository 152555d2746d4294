//! Predicate filtering layered over any vertex cursor.

pub mod cursor;
pub mod predicate;

pub use cursor::{FilterCursor, FilterExt};
pub use predicate::{And, Not, Or, Predicate, PredicateExt};
