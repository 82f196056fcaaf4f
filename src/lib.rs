//! An ordered, singly linked sequence container.
//!
//! Values are kept in a chain of uniquely owned nodes and can be appended, inserted at a
//! position, deleted by value, looked up by value or by position and swapped in place.

#[macro_use]
mod macros;

pub mod error;
pub mod iter;
pub mod llist;
#[cfg(feature = "with_serde")]
mod ser;
pub mod shared;

pub use crate::error::{ListError, Result};
pub use crate::llist::{SinglyLinkedList, SEPARATOR};
pub use crate::shared::SharedList;
