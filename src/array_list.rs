//! ArrayList: growable, index-addressable sequence over a boxed slot array.
//!
//! Storage is a `Box<[Option<T>]>` whose prefix `[0, len)` is occupied and
//! whose suffix `[len, capacity)` is vacant. Growth, shifting and sorting
//! operate on the slots directly rather than delegating to `Vec`.

use crate::error::Error;
use core::cmp::Ordering;
use core::fmt;

/// Capacity of a list created with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Clone)]
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Create an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty list with room for `capacity` elements before the
    /// first growth. A zero capacity is raised to one so doubling makes
    /// progress.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vacant_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append `element` after the last occupied slot, doubling the
    /// backing storage first if it is full.
    pub fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Fails without touching the list when
    /// `index > len`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        self.ensure_capacity();
        let mut i = self.len;
        while i > index {
            self.slots[i] = self.slots[i - 1].take();
            i -= 1;
        }
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Element at `index`; `IndexOutOfBounds` when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        Ok(occupied(&self.slots[index]))
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot left and vacating the old last slot.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let removed = self.slots[index]
            .take()
            .expect("slot below len must be occupied");
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Drop every element and reset the length. Capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Iterate the occupied slots in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.slots[..self.len].iter(),
        }
    }

    /// Sort ascending in place with the Lomuto partition-exchange scheme.
    ///
    /// Not stable. Already-sorted and reverse-sorted inputs hit the
    /// quadratic worst case; recursion depth stays logarithmic in `len`.
    pub fn quick_sort(&mut self)
    where
        T: Ord,
    {
        self.quick_sort_by(T::cmp);
    }

    /// Like [`quick_sort`](Self::quick_sort) with a caller-supplied
    /// comparator. The comparator sees exactly the comparisons the
    /// partition step performs.
    pub fn quick_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len > 1 {
            quick_sort_range(&mut self.slots, 0, self.len - 1, &mut compare);
        }
    }

    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let mut grown: Vec<Option<T>> = Vec::with_capacity(self.slots.len() * 2);
        grown.extend(self.slots.iter_mut().map(Option::take));
        grown.resize_with(self.slots.len() * 2, || None);
        self.slots = grown.into_boxed_slice();
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    #[cfg(test)]
    pub(crate) fn slots_vacant_from_len(&self) -> bool {
        self.slots[..self.len].iter().all(Option::is_some)
            && self.slots[self.len..].iter().all(Option::is_none)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of an [`ArrayList`] in index order.
pub struct Iter<'a, T> {
    it: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(occupied)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

#[inline]
fn occupied<T>(slot: &Option<T>) -> &T {
    slot.as_ref().expect("slot below len must be occupied")
}

// Recurses into the smaller partition and loops on the larger one, so the
// stack depth stays logarithmic even when every partition is lopsided.
fn quick_sort_range<T, F>(
    slots: &mut [Option<T>],
    mut low: usize,
    mut high: usize,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    while low < high {
        let p = partition(slots, low, high, compare);
        if p - low < high - p {
            if p > low {
                quick_sort_range(slots, low, p - 1, compare);
            }
            low = p + 1;
        } else {
            quick_sort_range(slots, p + 1, high, compare);
            if p == low {
                return;
            }
            high = p - 1;
        }
    }
}

// Pivot is slots[high]; it stays put until the final swap because the
// boundary never passes the scan cursor.
fn partition<T, F>(slots: &mut [Option<T>], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut boundary = low;
    for j in low..high {
        if compare(occupied(&slots[j]), occupied(&slots[high])) == Ordering::Less {
            slots.swap(boundary, j);
            boundary += 1;
        }
    }
    slots.swap(boundary, high);
    boundary
}
