//! Mutable singly-linked list.
//!
//! This module provides [`LinkedList`], a mutable singly-linked list that
//! tracks its head, its tail, and its length, and exposes an index-aware
//! functional API on top of the classic chain operations.
//!
//! # Overview
//!
//! `LinkedList` is a plain first-in-first-out chain. It provides:
//!
//! - O(1) append at the tail
//! - O(1) pop at the head
//! - O(1) first, last, and length access
//! - O(n) index access and in-place reverse
//! - index-aware combinators: `for_each`, `find`, `filter`, `partition`,
//!   `map`, `flat_map`, `reduce`, `zip`
//!
//! Every combinator passes the zero-based position of the element alongside
//! the element itself, counted over the receiver's own traversal. Absent
//! values are always [`Option`]; no operation panics on an empty list or an
//! out-of-range index.
//!
//! # Examples
//!
//! ```rust
//! use catena::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! list.append(4);
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.pop(), Some(1));
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "[4, 3, 2]");
//!
//! let sum = list.reduce(0, |_, accumulator, element| accumulator + element);
//! assert_eq!(sum, 9);
//! ```
//!
//! # Storage
//!
//! Nodes live in a slot arena owned by the list, and `head`, `tail`, and the
//! per-node `next` links are private indices into that arena rather than
//! heap pointers. Popping a node vacates its slot and threads it onto a free
//! list; the next append reuses it. A node handle therefore never outlives
//! or escapes its owning list, and no two lists can share a node:
//!
//! ```text
//! head: 2                 tail: 0
//! slots: [ Occupied { 30, next: none }    // index 0
//!        , Vacant   { next_free: none }   // index 1, head of the free list
//!        , Occupied { 10, next: 3 }       // index 2
//!        , Occupied { 20, next: 0 }       // index 3
//!        ]
//! logical order: 10 -> 20 -> 30
//! ```
//!
//! Dropping the list drops the arena in one step; there is no recursive
//! node-by-node destruction to overflow the stack on long chains.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;

/// Handle to a slot inside the owning list's arena.
///
/// A handle is only meaningful for the arena that produced it; handles are
/// never exposed outside this module.
#[derive(Clone, Copy)]
struct NodeIndex(usize);

/// Internal node structure for the linked list.
///
/// Each node contains an element and an optional handle to the next node.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Handle to the next node (if any).
    next: Option<NodeIndex>,
}

/// A storage cell in the node arena.
enum Slot<T> {
    /// Holds a live node of the chain.
    Occupied(Node<T>),
    /// Recyclable cell, threaded onto the arena's free list.
    Vacant {
        /// Handle to the next vacant slot (if any).
        next_free: Option<NodeIndex>,
    },
}

/// A mutable singly-linked list with O(1) access to both ends.
///
/// `LinkedList` appends at the tail, pops at the head, and carries a cached
/// length, so the chain behaves as a first-in-first-out sequence. All
/// traversal-based operations visit elements from head to tail and hand the
/// caller the zero-based position of each element.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `append`   | O(1)       |
/// | `pop`      | O(1)       |
/// | `first`    | O(1)       |
/// | `last`     | O(1)       |
/// | `len`      | O(1)       |
/// | `get`      | O(n)       |
/// | `middle`   | O(n)       |
/// | `reverse`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use catena::list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append(42);
/// assert_eq!(list.first(), Some(&42));
/// ```
pub struct LinkedList<T> {
    /// Node storage; occupied and vacant slots interleave after churn.
    slots: Vec<Slot<T>>,
    /// Handle to the first node (if any).
    head: Option<NodeIndex>,
    /// Handle to the last node (if any); kept for O(1) appends.
    tail: Option<NodeIndex>,
    /// Number of live nodes; cached for O(1) access.
    length: usize,
    /// Head of the free list threaded through vacant slots.
    free: Option<NodeIndex>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            length: 0,
            free: None,
        }
    }

    /// Resolves a node handle to a shared reference to its node.
    fn node(&self, index: NodeIndex) -> &Node<T> {
        match &self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("node handle points at a vacant slot"),
        }
    }

    /// Resolves a node handle to an exclusive reference to its node.
    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("node handle points at a vacant slot"),
        }
    }

    /// Stores an unlinked node for `element`, reusing a vacant slot when one
    /// is available.
    fn allocate(&mut self, element: T) -> NodeIndex {
        let node = Node {
            element,
            next: None,
        };
        if let Some(index) = self.free {
            let next_free = match &self.slots[index.0] {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            };
            self.free = next_free;
            self.slots[index.0] = Slot::Occupied(node);
            index
        } else {
            let index = NodeIndex(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            index
        }
    }

    /// Vacates the slot behind a handle and returns the element it held.
    ///
    /// The caller is responsible for unlinking the node from the chain
    /// before releasing it.
    fn release(&mut self, index: NodeIndex) -> T {
        let next_free = self.free;
        let slot = mem::replace(&mut self.slots[index.0], Slot::Vacant { next_free });
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node.element,
            Slot::Vacant { .. } => unreachable!("released slot was already vacant"),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1), the length is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.append(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends an element at the tail of the list.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to append
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn append(&mut self, element: T) {
        let index = self.allocate(element);
        match self.tail {
            Some(tail_index) => self.node_mut(tail_index).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes the first element and returns it.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.pop(), Some(3));
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let index = self.head?;
        self.head = self.node(index).next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.length -= 1;
        Some(self.release(index))
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.first(), Some(&1));
    ///
    /// let empty: LinkedList<i32> = LinkedList::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).element)
    }

    /// Returns a reference to the last element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1), the tail handle is maintained on every mutation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.last(), Some(&3));
    ///
    /// let empty: LinkedList<i32> = LinkedList::new();
    /// assert_eq!(empty.last(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).element)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Arguments
    ///
    /// * `index` - The zero-based index of the element
    ///
    /// # Complexity
    ///
    /// O(n) where n = `index`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.length {
            return None;
        }

        let mut current = self.head;
        let mut remaining = index;
        while let Some(node_index) = current {
            let node = self.node(node_index);
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = node.next;
        }
        None
    }

    /// Returns a reference to the middle element of the list.
    ///
    /// The middle is the element at index `len() / 2`, so lists of even
    /// length resolve to the element just past the midpoint, toward the
    /// tail. Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let odd: LinkedList<i32> = (1..=5).collect();
    /// assert_eq!(odd.middle(), Some(&3));
    ///
    /// let even: LinkedList<i32> = (1..=4).collect();
    /// assert_eq!(even.middle(), Some(&3));
    ///
    /// let empty: LinkedList<i32> = LinkedList::new();
    /// assert_eq!(empty.middle(), None);
    /// ```
    #[must_use]
    pub fn middle(&self) -> Option<&T> {
        self.get(self.length / 2)
    }

    /// Reverses the list in place.
    ///
    /// Every `next` link is flipped and the head and tail handles trade
    /// places; no element is moved, copied, or reallocated. Lists with
    /// fewer than two elements are left untouched.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) additional space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=4).collect();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "[4, 3, 2, 1]");
    /// assert_eq!(list.first(), Some(&4));
    /// assert_eq!(list.last(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        if self.length < 2 {
            return;
        }

        let mut previous = None;
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node_mut(index);
            current = node.next;
            node.next = previous;
            previous = Some(index);
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from head to tail and reports an exact
    /// size hint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            list: self,
            current: self.head,
            remaining: self.length,
        }
    }

    /// Calls a function on every element, front to back.
    ///
    /// # Arguments
    ///
    /// * `function` - Called with the index and a reference to each element
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let mut seen = Vec::new();
    /// list.for_each(|index, element| seen.push((index, *element)));
    /// assert_eq!(seen, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, element) in self.iter().enumerate() {
            function(index, element);
        }
    }

    /// Returns a reference to the first element satisfying the predicate.
    ///
    /// Traversal stops at the first match. Returns `None` if no element
    /// satisfies the predicate.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Called with the index and a reference to each element
    ///
    /// # Complexity
    ///
    /// O(n) worst case, O(k) where k is the index of the first match
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=5).collect();
    /// assert_eq!(list.find(|_, element| *element > 3), Some(&4));
    /// assert_eq!(list.find(|index, _| index == 2), Some(&3));
    /// assert_eq!(list.find(|_, element| *element > 9), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|(index, element)| predicate(*index, element))
            .map(|(_, element)| element)
    }

    /// Returns a new list with the function applied to every element.
    ///
    /// The result has the same length and order as the receiver.
    ///
    /// # Arguments
    ///
    /// * `function` - Called with the index and a reference to each element
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    ///
    /// let doubled = list.map(|_, element| element * 2);
    /// assert_eq!(doubled.to_string(), "[2, 4, 6]");
    ///
    /// let labeled = list.map(|index, element| format!("{index}:{element}"));
    /// assert_eq!(labeled.to_string(), "[0:1, 1:2, 2:3]");
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> LinkedList<B>
    where
        F: FnMut(usize, &T) -> B,
    {
        self.iter()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect()
    }

    /// Maps every element to a list and concatenates the results.
    ///
    /// The sub-lists are appended in source order, so the result preserves
    /// the relative order of everything each call produced.
    ///
    /// # Arguments
    ///
    /// * `function` - Called with the index and a reference to each element
    ///
    /// # Complexity
    ///
    /// O(m) where m is the total number of produced elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let expanded = list.flat_map(|_, element| (0..*element).collect());
    /// assert_eq!(expanded.to_string(), "[0, 0, 1, 0, 1, 2]");
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> LinkedList<B>
    where
        F: FnMut(usize, &T) -> LinkedList<B>,
    {
        let mut flattened = LinkedList::new();
        for (index, element) in self.iter().enumerate() {
            flattened.extend(function(index, element));
        }
        flattened
    }

    /// Folds the list from the left into a single value.
    ///
    /// # Arguments
    ///
    /// * `initial` - The initial accumulator value
    /// * `function` - Called with the index, the accumulator, and a
    ///   reference to each element; returns the next accumulator
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    ///
    /// let sum = list.reduce(0, |_, accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    ///
    /// let trace = list.reduce(String::new(), |index, accumulator, element| {
    ///     format!("{accumulator}{index}{element}")
    /// });
    /// assert_eq!(trace, "011223");
    /// ```
    #[must_use]
    pub fn reduce<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(usize, B, &T) -> B,
    {
        self.iter()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                function(index, accumulator, element)
            })
    }
}

impl<T: Clone> LinkedList<T> {
    /// Appends copies of another list's elements at the tail.
    ///
    /// Every element of `other` is cloned into this list, in order; `other`
    /// is left untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The list whose elements are copied
    ///
    /// # Complexity
    ///
    /// O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (0..2).collect();
    /// let other: LinkedList<i32> = (0..4).collect();
    /// list.append_list(&other);
    /// assert_eq!(list.to_string(), "[0, 1, 0, 1, 2, 3]");
    /// assert_eq!(other.len(), 4);
    /// ```
    pub fn append_list(&mut self, other: &Self) {
        for element in other {
            self.append(element.clone());
        }
    }

    /// Returns a copy of the list without its first element.
    ///
    /// Returns `None` when the list is empty; a one-element list yields
    /// `Some` of an empty list.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let expected: LinkedList<i32> = (2..=3).collect();
    /// assert_eq!(list.rest(), Some(expected));
    ///
    /// let single: LinkedList<i32> = (1..=1).collect();
    /// assert_eq!(single.rest(), Some(LinkedList::new()));
    ///
    /// let empty: LinkedList<i32> = LinkedList::new();
    /// assert_eq!(empty.rest(), None);
    /// ```
    #[must_use]
    pub fn rest(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().skip(1).cloned().collect())
    }

    /// Replaces the contents of this list with a copy of another list and
    /// returns the previous contents.
    ///
    /// The previous chain is moved wholesale into the returned list, so the
    /// result is fully independent of both `self` and `other`; `other` is
    /// left untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The list whose elements are copied in
    ///
    /// # Complexity
    ///
    /// O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=3).collect();
    /// let other: LinkedList<i32> = (7..=8).collect();
    ///
    /// let previous = list.replace(&other);
    /// assert_eq!(list.to_string(), "[7, 8]");
    /// assert_eq!(previous.to_string(), "[1, 2, 3]");
    /// assert_eq!(other.to_string(), "[7, 8]");
    /// ```
    #[must_use = "if the previous contents are not needed, assign `other.clone()` instead"]
    pub fn replace(&mut self, other: &Self) -> Self {
        mem::replace(self, other.clone())
    }

    /// Returns a new list with copies of the elements satisfying the
    /// predicate.
    ///
    /// Kept elements appear in their original order; the indices passed to
    /// the predicate are positions in the receiver, not in the result.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Called with the index and a reference to each element
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=6).collect();
    /// let even = list.filter(|_, element| element % 2 == 0);
    /// assert_eq!(even.to_string(), "[2, 4, 6]");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(usize, &T) -> bool,
    {
        let mut kept = Self::new();
        for (index, element) in self.iter().enumerate() {
            if predicate(index, element) {
                kept.append(element.clone());
            }
        }
        kept
    }

    /// Splits the list into elements that satisfy the predicate and
    /// elements that do not.
    ///
    /// Both halves preserve the original order; the indices passed to the
    /// predicate are positions in the receiver.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Called with the index and a reference to each element
    ///
    /// # Returns
    ///
    /// A pair `(matching, rest)` of freshly built lists
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=6).collect();
    /// let (even, odd) = list.partition(|_, element| element % 2 == 0);
    /// assert_eq!(even.to_string(), "[2, 4, 6]");
    /// assert_eq!(odd.to_string(), "[1, 3, 5]");
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(usize, &T) -> bool,
    {
        let mut matching = Self::new();
        let mut rest = Self::new();
        for (index, element) in self.iter().enumerate() {
            if predicate(index, element) {
                matching.append(element.clone());
            } else {
                rest.append(element.clone());
            }
        }
        (matching, rest)
    }

    /// Interleaves copies of this list's elements with another list's.
    ///
    /// Elements alternate starting with this list; once one side runs out,
    /// the remainder of the other side is appended unchanged. Neither
    /// operand is modified.
    ///
    /// # Arguments
    ///
    /// * `other` - The list to interleave with
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list::LinkedList;
    ///
    /// let first: LinkedList<i32> = (1..=3).collect();
    /// let second: LinkedList<i32> = (4..=7).collect();
    /// let interleaved = first.zip(&second);
    /// assert_eq!(interleaved.to_string(), "[1, 4, 2, 5, 3, 6, 7]");
    /// ```
    #[must_use]
    pub fn zip(&self, other: &Self) -> Self {
        let mut interleaved = Self::new();
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(first), Some(second)) => {
                    interleaved.append(first.clone());
                    interleaved.append(second.clone());
                }
                (Some(first), None) => {
                    interleaved.append(first.clone());
                    interleaved.extend(left.by_ref().cloned());
                    return interleaved;
                }
                (None, Some(second)) => {
                    interleaved.append(second.clone());
                    interleaved.extend(right.by_ref().cloned());
                    return interleaved;
                }
                (None, None) => return interleaved,
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let node = self.list.node(index);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-copies the list.
///
/// Every element is cloned into freshly allocated nodes owned by the new
/// list; the copy shares no storage with the original, and the two can be
/// mutated independently afterwards.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Computes a hash value for this list.
///
/// The hash is computed by first hashing the length, then hashing each
/// element in order. This ensures that:
///
/// - Lists with different lengths have different hashes (with high probability)
/// - The order of elements affects the hash value
/// - Equal lists produce equal hash values (Hash-Eq consistency)
///
/// # Examples
///
/// ```rust
/// use catena::list::LinkedList;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<LinkedList<i32>, &str> = HashMap::new();
/// let key: LinkedList<i32> = (1..=3).collect();
/// map.insert(key.clone(), "value");
/// assert_eq!(map.get(&key), Some(&"value"));
/// ```
impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.length.hash(state);
        // Hash each element in order
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Compile-Time Assertions
// =============================================================================

// Static assertions to verify LinkedList propagates auto traits from T
static_assertions::assert_impl_all!(LinkedList<i32>: Send, Sync);
static_assertions::assert_impl_all!(LinkedList<String>: Send, Sync);
static_assertions::assert_not_impl_any!(LinkedList<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
