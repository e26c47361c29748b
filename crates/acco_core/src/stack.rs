//! Generic LIFO container.
//!
//! The backing storage is private; the only observable operations are
//! [`Stack::push`], [`Stack::pop`], [`Stack::peek`] and [`Stack::count`].

use std::fmt;

use tracing::trace;

/// A last-in-first-out stack.
///
/// Popping or peeking an empty stack yields `None` rather than failing.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Push an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
        trace!(count = self.elements.len(), "stack push");
    }

    /// Remove and return the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let top = self.elements.pop();
        trace!(count = self.elements.len(), hit = top.is_some(), "stack pop");
        top
    }

    /// Return the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Number of elements currently held.
    pub fn count(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("count", &self.count()).finish()
    }
}

/// Builds a stack from an initial sequence; the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
