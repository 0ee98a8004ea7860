//! # catena
//!
//! A mutable singly-linked list for Rust with index-aware functional
//! combinators.
//!
//! ## Overview
//!
//! This library provides a single container, [`list::LinkedList`], built
//! around a classic head/tail/length singly-linked chain. It includes:
//!
//! - **Constant-time ends**: O(1) `append` at the tail, O(1) `pop` at the head
//! - **Positional access**: `get`, `first`, `last`, `middle`, `rest`
//! - **In-place restructuring**: `reverse`, `replace`
//! - **Index-aware combinators**: `for_each`, `find`, `filter`, `partition`,
//!   `map`, `flat_map`, `reduce`, `zip`
//! - **Iterators**: borrowing and draining iteration with exact size hints
//!
//! Absent values are always expressed as [`Option`]; no operation panics
//! on an empty list or an out-of-range index.
//!
//! ## Example
//!
//! ```rust
//! use catena::prelude::*;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! list.append(4);
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.last(), Some(&4));
//!
//! let doubled = list.map(|_, value| value * 2);
//! assert_eq!(doubled.to_string(), "[2, 4, 6, 8]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use catena::prelude::*;
/// ```
pub mod prelude {

    pub use crate::list::*;
}

pub mod list;

#[cfg(test)]
mod tests {
    use crate::list::LinkedList;

    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(LinkedList::<i32>::new().is_empty());
    }
}
