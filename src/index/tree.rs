// =====================================================================
// File: index/tree.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Implements the per-bucket binary search tree (`BucketTree`) ordered
//   by parcel weight, plus the read-only traversals the query layer
//   needs.
//
// Features:
//   - `insert`          : Plain BST descent, strictly lighter goes left.
//   - `iter`            : In-order (ascending weight) traversal.
//   - `filter_by_weight`: In-order traversal keeping heavier/lighter parcels.
//   - `totals`          : Sum of weight and value over the whole tree.
//   - `*_extremes`      : Min/max search by value or by weight.
//
// Notes:
//   * No rebalancing. Sorted input produces a list-shaped tree, and
//     insert cost grows with depth.
//   * Insert and traversal use loops with explicit stacks, never
//     recursion, so depth is bounded only by memory.
// =====================================================================
use super::ParcelNode;
use crate::Parcel;

/// Direction of a weight threshold filter. Both directions are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightFilter {
    /// Keep parcels with `weight > threshold`.
    Heavier,
    /// Keep parcels with `weight < threshold`.
    Lighter,
}


impl WeightFilter {
    /// Whether a parcel of `weight` passes this filter at `threshold`.
    pub fn matches(self, weight: f64, threshold: f64) -> bool {
        match self {
            WeightFilter::Heavier => weight > threshold,
            WeightFilter::Lighter => weight < threshold,
        }
    }
}


/// Running sums over a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub weight: f64,
    pub value: f64,
    pub count: usize,
}


/// Lowest and highest parcel found by an extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    pub lowest: &'a Parcel,
    pub highest: &'a Parcel,
}


/// BST of parcels owned by a single hash bucket.
///
/// A `BucketTree` always holds at least one parcel; an empty bucket is
/// represented by the slot being `None` in the index.
#[derive(Debug)]
pub struct BucketTree {
    root: Box<ParcelNode>,
    len: usize,
}


impl BucketTree {
    /// Create a tree whose root holds `parcel`.
    pub fn new(parcel: Parcel) -> Self {
        Self {
            root: Box::new(ParcelNode::new(parcel)),
            len: 1,
        }
    }

    /// Insert a parcel, descending left when strictly lighter and right
    /// otherwise. Equal weights always land to the right, and identical
    /// parcels are kept as separate nodes.
    ///
    /// # Example
    /// ```
    /// use parcelindex::{Parcel, index::BucketTree};
    ///
    /// let mut tree = BucketTree::new(Parcel::new("canada", 500.0, 100.0));
    /// tree.insert(Parcel::new("canada", 200.0, 50.0));
    /// tree.insert(Parcel::new("canada", 500.0, 100.0));
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.root().left.is_some());
    /// assert!(tree.root().right.is_some());
    /// ```
    pub fn insert(&mut self, parcel: Parcel) {
        let weight = parcel.weight();

        // Walk down to the empty child slot where the parcel belongs
        let mut slot = Self::child_for(&mut self.root, weight);
        while let Some(node) = slot {
            slot = Self::child_for(node, weight);
        }

        *slot = Some(Box::new(ParcelNode::new(parcel)));
        self.len += 1;
    }

    fn child_for(node: &mut ParcelNode, weight: f64) -> &mut Option<Box<ParcelNode>> {
        if weight < node.parcel.weight() {
            &mut node.left
        } else {
            &mut node.right
        }
    }

    /// Number of parcels stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn root(&self) -> &ParcelNode {
        &self.root
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&ParcelNode, usize)> = vec![(&self.root, 1)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        deepest
    }

    /// In-order traversal: parcels in non-decreasing weight order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.root)
    }

    /// In-order traversal keeping only parcels strictly heavier or lighter
    /// than `threshold`. Parcels weighing exactly `threshold` pass neither.
    ///
    /// # Example
    /// ```
    /// use parcelindex::{Parcel, index::{BucketTree, WeightFilter}};
    ///
    /// let mut tree = BucketTree::new(Parcel::new("chile", 500.0, 10.0));
    /// tree.insert(Parcel::new("chile", 200.0, 10.0));
    /// tree.insert(Parcel::new("chile", 800.0, 10.0));
    ///
    /// let heavy: Vec<f64> = tree
    ///     .filter_by_weight(500.0, WeightFilter::Heavier)
    ///     .map(|p| p.weight())
    ///     .collect();
    /// assert_eq!(heavy, vec![800.0]);
    /// ```
    pub fn filter_by_weight(&self, threshold: f64, filter: WeightFilter) -> WeightFiltered<'_> {
        WeightFiltered {
            inner: self.iter(),
            threshold,
            filter,
        }
    }

    /// Total weight and value over every parcel, starting from zero.
    pub fn totals(&self) -> Totals {
        self.iter().fold(Totals::default(), |acc, parcel| Totals {
            weight: acc.weight + parcel.weight(),
            value: acc.value + parcel.value(),
            count: acc.count + 1,
        })
    }

    /// Cheapest and most expensive parcel.
    pub fn value_extremes(&self) -> Extremes<'_> {
        self.extremes_by(Parcel::value)
    }

    /// Lightest and heaviest parcel.
    pub fn weight_extremes(&self) -> Extremes<'_> {
        self.extremes_by(Parcel::weight)
    }

    // Single pass; strict comparisons keep the first parcel seen on ties.
    fn extremes_by(&self, key: impl Fn(&Parcel) -> f64) -> Extremes<'_> {
        let first = self.first();
        let mut lowest = first;
        let mut highest = first;

        for parcel in self.iter() {
            if key(parcel) < key(lowest) {
                lowest = parcel;
            }
            if key(parcel) > key(highest) {
                highest = parcel;
            }
        }
        Extremes { lowest, highest }
    }

    // Leftmost node, i.e. the first parcel of the in-order traversal.
    fn first(&self) -> &Parcel {
        let mut node: &ParcelNode = &self.root;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.parcel
    }
}


impl<'a> IntoIterator for &'a BucketTree {
    type Item = &'a Parcel;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// Lazy in-order iterator over a bucket tree, driven by an explicit stack.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a ParcelNode>,
}


impl<'a> InOrder<'a> {
    fn new(root: &'a ParcelNode) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(Some(root));
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ParcelNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}


impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.parcel)
    }
}


/// In-order iterator yielding only parcels that pass a [`WeightFilter`].
#[derive(Debug, Clone)]
pub struct WeightFiltered<'a> {
    inner: InOrder<'a>,
    threshold: f64,
    filter: WeightFilter,
}


impl<'a> Iterator for WeightFiltered<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        let (threshold, filter) = (self.threshold, self.filter);
        self.inner
            .find(|parcel| filter.matches(parcel.weight(), threshold))
    }
}
