//! Singly-linked list core
//!
//! The list owns its nodes through a chain of boxes: `head` owns the first
//! node and each node owns its successor, so every forward link has exactly
//! one owner. All operations are total; the only non-success outcome is the
//! delete-miss boolean.

use serde::Serialize;

/// One element of the chain: a payload and the owned forward link
#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A singly-linked list over an opaque payload type
///
/// The payload is stored, compared, and returned verbatim; the list never
/// interprets it. Only [`delete_node`] needs equality and only [`snapshot`]
/// needs cloning, so plain storage and traversal work for any `T`.
///
/// [`delete_node`]: LinkedList::delete_node
/// [`snapshot`]: LinkedList::snapshot
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

/// One node as reported by [`LinkedList::snapshot`]
///
/// `next` carries the payload of the following node and is `None` at the
/// tail. It serializes as `null` rather than being omitted, so consumers
/// always see where the chain ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord<T> {
    /// The node's payload
    pub data: T,
    /// Payload of the following node (`None` at the tail)
    pub next: Option<T>,
}

impl<T> LinkedList<T> {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Whether the list has no nodes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, counted by traversal (the list stores no size field)
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Push `value` as the new head in O(1)
    pub fn insert_at_start(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data: value, next }));
    }

    /// Append `value` as the new tail
    ///
    /// Walks the chain to the last node and attaches a fresh one there; the
    /// list keeps no tail pointer, so this is O(n). On an empty list the new
    /// node becomes the head.
    pub fn insert_at_end(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data: value, next: None }));
    }

    /// Borrowing iterator over payloads in head-to-tail order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first node whose payload equals `value`
    ///
    /// Scans head-to-tail and rewires around the first match; later
    /// duplicates stay put. Returns `false` when the list is empty or nothing
    /// matched. A miss is a normal outcome, not an error.
    pub fn delete_node(&mut self, value: &T) -> bool {
        // Head match: the head slot takes over the old head's successor.
        if matches!(&self.head, Some(node) if node.data == *value) {
            self.head = self.head.take().and_then(|removed| removed.next);
            return true;
        }

        // Pairwise scan: `node` trails one link behind the candidate, so the
        // matched box can be spliced out through `node.next`.
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.next.as_ref().is_some_and(|next| next.data == *value) {
                node.next = node.next.take().and_then(|removed| removed.next);
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }
}

impl<T: Clone> LinkedList<T> {
    /// Materialize the list as `{data, next}` records in head-to-tail order
    ///
    /// Each record exposes one step of link structure: the payload of the
    /// node that follows. Read-only; the chain is never touched.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NodeRecord<T>> {
        let mut records = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            records.push(NodeRecord {
                data: node.data.clone(),
                next: node.next.as_deref().map(|next| next.data.clone()),
            });
            cursor = node.next.as_deref();
        }
        records
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink front to back; dropping the boxes nested would recurse once
        // per node and can blow the stack on long chains.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Append every item in order (each append walks to the tail)
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing head-to-tail iterator returned by [`LinkedList::iter`]
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)] // iterators advance; implicit copies would leave stale cursors
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
