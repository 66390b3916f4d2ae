//! Array-backed binary min-heap.
//!
//! The tree lives in level order inside a single `Vec`: the root sits at
//! index 0 and node `i` has its children at `2i + 1` and `2i + 2`.

use std::fmt;

use log::{debug, trace};

use crate::error::{HeapError, Result};

/// Index of the parent of `index`, or `None` for the root.
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Index of the left child of a node that is in the heap.
#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A min-heap where every node is `<=` both of its children.
///
/// The live elements always occupy the prefix `[0, len)` of the storage, so the
/// tree stays complete: inserts go to the end and the last element refills the
/// root on extraction.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the minimum without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Level-order view of the live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends `value` and sifts it up until its parent is no greater.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last);
    }

    /// Removes and returns the minimum.
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyStructure {
                operation: "extract the minimum",
            });
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            Self::sift_down(&mut self.data, 0);
        }
        trace!("extracted minimum, {} elements left", self.data.len());
        Ok(min)
    }

    /// Index of the smaller child of `index`.
    ///
    /// With only a left child, that child is returned. On equal keys the right
    /// child wins.
    pub fn min_child(&self, index: usize) -> Result<usize> {
        if index >= self.data.len() {
            return Err(HeapError::InvalidIndex {
                index,
                len: self.data.len(),
            });
        }
        Self::smaller_child(&self.data, index).ok_or(HeapError::InvalidIndex {
            index,
            len: self.data.len(),
        })
    }

    /// Inserts every element in order, one `insert` at a time.
    ///
    /// Existing contents are kept.
    pub fn build_heap<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.data.len();
        let iter = elements.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
        debug!(
            "built heap: {} elements inserted, {} total",
            self.data.len() - before,
            self.data.len()
        );
        self
    }

    /// Checks heap order over the whole tree without mutating it.
    ///
    /// Indices are scanned in increasing order, so the lowest violation is the
    /// one reported.
    pub fn validate(&self) -> Result<()>
    where
        T: fmt::Debug,
    {
        for index in 1..self.data.len() {
            let Some(p) = parent(index) else { continue };
            if self.data[index] < self.data[p] {
                debug!("heap order broken at index {}", index);
                return Err(HeapError::HeapInvariantViolation {
                    index,
                    value: format!("{:?}", self.data[index]),
                    parent: format!("{:?}", self.data[p]),
                });
            }
        }
        Ok(())
    }

    /// Drains the heap in non-decreasing order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }

    fn sift_up(data: &mut [T], start: usize) {
        let mut i = start;
        while let Some(p) = parent(i) {
            if data[i] >= data[p] {
                return;
            }
            data.swap(i, p);
            i = p;
        }
    }

    fn sift_down(data: &mut [T], start: usize) {
        let mut i = start;
        while let Some(child) = Self::smaller_child(data, i) {
            if data[i] <= data[child] {
                return;
            }
            data.swap(i, child);
            i = child;
        }
    }

    fn smaller_child(data: &[T], index: usize) -> Option<usize> {
        let left = left_child(index);
        if left >= data.len() {
            return None;
        }
        let right = right_child(index);
        if right >= data.len() || data[left] < data[right] {
            Some(left)
        } else {
            Some(right)
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.build_heap(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.build_heap(iter);
    }
}

impl<T: Ord + fmt::Debug> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
