// =====================================================================
// File: index/node.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Defines the binary search tree node (`ParcelNode`) used inside each
//   hash bucket. Each node owns:
//
//   - `parcel`: The record held by this node.
//   - `left`  : Subtree of parcels strictly lighter than this one.
//   - `right` : Subtree of parcels at least as heavy (ties go right).
//
// Notes:
//   * Higher-level operations (insert, traversal, aggregates) live in
//     `tree.rs`.
//   * Dropping a node releases its whole subtree with an explicit stack,
//     so a degenerate (list-shaped) tree cannot overflow the call stack.
// =====================================================================
use crate::Parcel;

/// Basic BST node, uniquely owned by its parent (or by the bucket slot).
#[derive(Debug)]
pub struct ParcelNode {
    pub parcel: Parcel,
    /// Box keeps the recursive type sized - children live on the heap
    pub left: Option<Box<ParcelNode>>,
    pub right: Option<Box<ParcelNode>>,
}


impl ParcelNode {
    /// Creates a leaf node holding `parcel`.
    ///
    /// # Example
    /// ```
    /// use parcelindex::{Parcel, index::ParcelNode};
    /// let leaf = ParcelNode::new(Parcel::new("peru", 300.0, 40.0));
    /// assert!(leaf.left.is_none());
    /// assert!(leaf.right.is_none());
    /// ```
    pub fn new(parcel: Parcel) -> Self {
        Self {
            parcel,
            left: None,
            right: None,
        }
    }

    /// Returns true when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}


impl Drop for ParcelNode {
    fn drop(&mut self) {
        // Detach children so each box is freed with no subtree attached
        let mut pending: Vec<Box<ParcelNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
