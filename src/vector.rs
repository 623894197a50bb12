//! Growable contiguous array with cursor-based positions.
//!
//! `Vector<T>` owns a manually managed buffer (`RawBuf`) and tracks the
//! initialized prefix. Positions are `VecCursor` values: plain indices that
//! are resolved against the owning vector at use and validated there, so a
//! cursor left over from before a reallocation or shift can never dangle —
//! it either still names a valid position or is rejected.
//!
//! Any operation that reallocates or shifts elements (growth, insert, erase)
//! changes which element an outstanding cursor refers to.

use crate::config::{VECTOR_GROWTH_FACTOR, VECTOR_INIT_CAPACITY};
use crate::error::ContainerError;
use crate::raw_buf::RawBuf;

const CONTAINER: &str = "Vector";

/// A position within a `Vector`, in `[begin, end]`.
///
/// Cursor arithmetic is O(1) index arithmetic; dereference goes through the
/// owning vector (`get`/`get_mut`) and is bounds-checked there.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VecCursor {
    index: usize,
}

impl VecCursor {
    /// Zero-based offset from `begin`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> VecCursor {
        self.advance(1)
    }

    pub fn prev(self) -> Option<VecCursor> {
        self.back(1)
    }

    pub fn advance(self, steps: usize) -> VecCursor {
        VecCursor {
            index: self.index + steps,
        }
    }

    /// `None` when stepping before `begin`.
    pub fn back(self, steps: usize) -> Option<VecCursor> {
        self.index.checked_sub(steps).map(|index| VecCursor { index })
    }

    /// Elements between `earlier` and `self`; `None` when `earlier` is past
    /// `self`.
    pub fn distance(self, earlier: VecCursor) -> Option<usize> {
        self.index.checked_sub(earlier.index)
    }

    /// Borrow the element at this position, or `None` when the cursor does
    /// not name a live element.
    pub fn get<'a, T>(&self, vector: &'a Vector<T>) -> Option<&'a T> {
        vector.as_slice().get(self.index)
    }

    pub fn get_mut<'a, T>(&self, vector: &'a mut Vector<T>) -> Option<&'a mut T> {
        vector.as_mut_slice().get_mut(self.index)
    }
}

pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// An empty vector with the configured initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(VECTOR_INIT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// `count` copies of `value`.
    pub fn filled(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(count);
        for _ in 0..count {
            v.push_back(value.clone());
        }
        v
    }

    /// `count` default-constructed elements.
    pub fn of_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(count);
        for _ in 0..count {
            v.push_back(T::default());
        }
        v
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(values.len());
        for value in values {
            v.push_back(value.clone());
        }
        v
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        // Safety: `[0, len)` is the initialized prefix.
        unsafe { self.buf.as_slice(self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: `[0, len)` is the initialized prefix.
        unsafe { self.buf.as_mut_slice(self.len) }
    }

    pub fn begin(&self) -> VecCursor {
        VecCursor { index: 0 }
    }

    pub fn end(&self) -> VecCursor {
        VecCursor { index: self.len }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Grow to at least `capacity` slots; no-op when already sufficient.
    /// Element order is preserved.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.buf.capacity() {
            return;
        }
        // Safety: `[0, len)` live, and len <= old capacity <= new capacity.
        unsafe { self.buf.reallocate(capacity, self.len) };
    }

    /// Reallocate to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        // Safety: `[0, len)` live and fits the new allocation exactly.
        unsafe { self.buf.reallocate(self.len, self.len) };
    }

    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            let grown = (self.buf.capacity() as f64 * VECTOR_GROWTH_FACTOR) as usize;
            self.reserve(grown.max(self.buf.capacity() + 1));
        }
        // Safety: capacity ensured above; slot `len` is unoccupied.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::out_of_range(CONTAINER));
        }
        self.len -= 1;
        // Safety: slot `len` was the last live element.
        Ok(unsafe { self.buf.take(self.len) })
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.as_slice()
            .first()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn back(&self) -> Result<&T, ContainerError> {
        self.as_slice()
            .last()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// First position holding `value`, scanning from `begin`.
    pub fn find(&self, value: &T) -> Option<VecCursor>
    where
        T: PartialEq,
    {
        self.as_slice()
            .iter()
            .position(|v| v == value)
            .map(|index| VecCursor { index })
    }

    /// Insert `value` before `pos`; returns the cursor of the new element.
    pub fn insert(&mut self, pos: VecCursor, value: T) -> Result<VecCursor, ContainerError> {
        let (at, final_len) = self.checked_gap(pos, 1)?;
        // Safety: gap `[at, at+1)` is open and within capacity.
        unsafe { self.buf.write(at, value) };
        self.len = final_len;
        Ok(pos)
    }

    /// Insert `count` copies of `value` before `pos`.
    pub fn insert_n(
        &mut self,
        pos: VecCursor,
        count: usize,
        value: &T,
    ) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        let (at, final_len) = self.checked_gap(pos, count)?;
        for i in 0..count {
            // Safety: gap `[at, at+count)` is open; `len` is parked below
            // the gap so a panicking clone cannot expose it.
            unsafe { self.buf.write(at + i, value.clone()) };
        }
        self.len = final_len;
        Ok(())
    }

    /// Insert a copy of `values` before `pos`.
    pub fn insert_slice(&mut self, pos: VecCursor, values: &[T]) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        let (at, final_len) = self.checked_gap(pos, values.len())?;
        for (i, value) in values.iter().enumerate() {
            // Safety: as in `insert_n`.
            unsafe { self.buf.write(at + i, value.clone()) };
        }
        self.len = final_len;
        Ok(())
    }

    /// Insert a copy of this vector's own `[first, last)` range before
    /// `pos`. Sources at or after `pos` have already been shifted right by
    /// the time they are read, so they are read from their post-shift index.
    pub fn insert_within(
        &mut self,
        pos: VecCursor,
        first: VecCursor,
        last: VecCursor,
    ) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        if first.index > last.index || last.index > self.len {
            return Err(ContainerError::invalid_iterator(CONTAINER));
        }
        let count = last.index - first.index;
        let (at, final_len) = self.checked_gap(pos, count)?;
        for i in 0..count {
            let src = first.index + i;
            let src = if src < at { src } else { src + count };
            // Safety: `src` names a live element (below the gap, or shifted
            // above it); the destination slot is inside the open gap.
            unsafe {
                let value = self.buf.clone_slot(src);
                self.buf.write(at + i, value);
            }
        }
        self.len = final_len;
        Ok(())
    }

    /// Remove the element at `pos`; returns the cursor now naming the
    /// element after it.
    pub fn erase(&mut self, pos: VecCursor) -> Result<VecCursor, ContainerError> {
        self.erase_range(pos, pos.advance(1))
    }

    /// Remove `[first, last)`, closing the gap. Capacity is unchanged.
    pub fn erase_range(
        &mut self,
        first: VecCursor,
        last: VecCursor,
    ) -> Result<VecCursor, ContainerError> {
        if first == last {
            return Ok(last);
        }
        if first.index > last.index || last.index > self.len {
            return Err(ContainerError::invalid_iterator(CONTAINER));
        }
        let (start, end, old_len) = (first.index, last.index, self.len);
        // Park `len` below the disturbed region: a panicking destructor
        // leaks the tail instead of exposing dropped slots.
        self.len = start;
        unsafe {
            // Safety: `[start, end)` live at entry.
            self.buf.drop_range(start, end);
            // Safety: `[end, old_len)` live; destination within capacity.
            self.buf.shift(end, start, old_len - end);
        }
        self.len = old_len - (end - start);
        Ok(VecCursor { index: start })
    }

    /// Truncate to `new_len` elements, or pad with copies of `value`.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        if new_len < self.len {
            self.erase_range(VecCursor { index: new_len }, self.end())?;
        } else if new_len > self.len {
            self.insert_n(self.end(), new_len - self.len, &value)?;
        }
        Ok(())
    }

    /// Truncate to `new_len` elements, or pad with default values.
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), ContainerError>
    where
        T: Clone + Default,
    {
        self.resize(new_len, T::default())
    }

    /// Drop all elements; capacity is unchanged.
    pub fn clear(&mut self) {
        let old_len = self.len;
        self.len = 0;
        // Safety: `[0, old_len)` was the live prefix; `len` already parked
        // at zero in case a destructor panics.
        unsafe { self.buf.drop_range(0, old_len) };
    }

    /// O(1) exchange of storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Validate `pos`, ensure capacity for `count` more elements and shift
    /// the tail right, leaving `len` parked at the gap start so a panicking
    /// clone leaks the shifted tail instead of exposing the open gap.
    /// Returns `(gap_start, final_len)`; the caller fills
    /// `[gap_start, gap_start+count)` and then sets `len` to `final_len`.
    fn checked_gap(
        &mut self,
        pos: VecCursor,
        count: usize,
    ) -> Result<(usize, usize), ContainerError> {
        if pos.index > self.len {
            return Err(ContainerError::invalid_iterator(CONTAINER));
        }
        self.reserve(self.len + count);
        let at = pos.index;
        let tail = self.len - at;
        let final_len = self.len + count;
        self.len = at;
        // Safety: `[at, at+tail)` live, destination within reserved capacity.
        unsafe { self.buf.shift(at, at + count, tail) };
        Ok((at, final_len))
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> core::ops::Index<usize> for Vector<T> {
    type Output = T;

    /// Unchecked in the contract sense: panics rather than returning an
    /// error. Use `at` for checked access.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> core::ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut v = Self::with_capacity(iter.size_hint().0.max(VECTOR_INIT_CAPACITY));
        for value in iter {
            v.push_back(value);
        }
        v
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: `len` equals the number of `push_back` calls and
    /// `Index` observes insertion order.
    #[test]
    fn push_back_preserves_order() {
        let mut v = Vector::new();
        for i in 0..100 {
            v.push_back(i);
        }
        assert_eq!(v.len(), 100);
        for i in 0..100 {
            assert_eq!(v[i], i);
        }
    }

    /// Invariant: capacity >= len at all times; growth multiplies by the
    /// configured factor starting from the configured initial capacity.
    #[test]
    fn growth_follows_configured_factor() {
        let mut v = Vector::new();
        assert_eq!(v.capacity(), VECTOR_INIT_CAPACITY);
        let mut seen = vec![v.capacity()];
        for i in 0..33 {
            v.push_back(i);
            assert!(v.capacity() >= v.len());
            if *seen.last().unwrap() != v.capacity() {
                seen.push(v.capacity());
            }
        }
        assert_eq!(seen, vec![2, 4, 8, 16, 32, 64]);
    }

    /// Invariant: after `shrink_to_fit`, capacity == len.
    #[test]
    fn shrink_to_fit_is_exact() {
        let mut v: Vector<i32> = (0..10).collect();
        assert!(v.capacity() >= 10);
        v.pop_back().unwrap();
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 9);
        assert_eq!(v.len(), 9);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    /// Invariant: insert-then-erase of the same range is an identity on the
    /// visible sequence.
    #[test]
    fn insert_erase_round_trip() {
        let mut v: Vector<i32> = (0..8).collect();
        let snapshot = v.clone();
        let pos = v.begin().advance(3);
        v.insert_slice(pos, &[100, 200, 300]).unwrap();
        assert_eq!(v.len(), 11);
        v.erase_range(pos, pos.advance(3)).unwrap();
        assert_eq!(v, snapshot);
    }

    /// Invariant: self-range insert of the full vector at `end` exactly
    /// duplicates the sequence.
    #[test]
    fn self_range_insert_duplicates() {
        let mut v: Vector<i32> = (1..=4).collect();
        v.insert_within(v.end(), v.begin(), v.end()).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }

    /// Self-range insert in the middle: sources after the insertion point
    /// must be read from their shifted location.
    #[test]
    fn self_range_insert_overlapping_middle() {
        let mut v: Vector<i32> = (1..=5).collect();
        // Insert a copy of [2, 3, 4] (indices 1..4) before index 2.
        let pos = v.begin().advance(2);
        v.insert_within(pos, v.begin().advance(1), v.begin().advance(4))
            .unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 2, 3, 4, 3, 4, 5]);
    }

    /// Self-range insert where the source lies entirely after the gap.
    #[test]
    fn self_range_insert_source_after_gap() {
        let mut v: Vector<i32> = (1..=4).collect();
        // Insert a copy of [3, 4] at the front.
        v.insert_within(v.begin(), v.begin().advance(2), v.end())
            .unwrap();
        assert_eq!(v.as_slice(), &[3, 4, 1, 2, 3, 4]);
    }

    /// Resize scenario from the contract: pad with defaults, pad with a
    /// value, truncate back.
    #[test]
    fn resize_scenario() {
        let mut v = Vector::from([1, 2, 3]);
        v.resize_default(6).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0, 0]);
        v.resize(9, 5).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0, 0, 5, 5, 5]);
        v.resize(6, 5).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0, 0]);
    }

    /// Invariant: pop/front/back on an empty vector fail with OutOfRange,
    /// and only once empty.
    #[test]
    fn empty_access_is_out_of_range() {
        let mut v: Vector<i32> = Vector::new();
        v.push_back(7);
        assert_eq!(v.pop_back(), Ok(7));
        assert_eq!(
            v.pop_back(),
            Err(ContainerError::out_of_range("Vector"))
        );
        assert!(v.front().is_err());
        assert!(v.back().is_err());
        assert!(v.front_mut().is_err());
        assert!(v.back_mut().is_err());
    }

    /// Invariant: `at` is checked, `Index` panics.
    #[test]
    fn at_is_checked() {
        let v = Vector::from([1, 2]);
        assert_eq!(v.at(1), Ok(&2));
        assert_eq!(v.at(2), Err(ContainerError::out_of_range("Vector")));
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let v = Vector::from([1]);
        let _ = v[1];
    }

    /// Invariant: cursors outside `[begin, end]` are rejected with
    /// InvalidIterator by insert and erase.
    #[test]
    fn out_of_bounds_cursor_rejected() {
        let mut v = Vector::from([1, 2, 3]);
        let past = v.end().advance(1);
        assert_eq!(
            v.insert(past, 9),
            Err(ContainerError::invalid_iterator("Vector"))
        );
        assert_eq!(
            v.erase(v.end()),
            Err(ContainerError::invalid_iterator("Vector"))
        );
        // Inverted range.
        assert_eq!(
            v.erase_range(v.end(), v.begin()),
            Err(ContainerError::invalid_iterator("Vector"))
        );
        // Insert at end() itself is valid (append).
        let c = v.insert(v.end(), 4).unwrap();
        assert_eq!(c.get(&v), Some(&4));
    }

    /// Erasing an empty range is a no-op even at `end`.
    #[test]
    fn empty_range_erase_is_noop() {
        let mut v = Vector::from([1, 2]);
        let c = v.erase_range(v.end(), v.end()).unwrap();
        assert_eq!(c, v.end());
        assert_eq!(v.len(), 2);
    }

    /// Invariant: erase shifts trailing elements left and never shrinks
    /// capacity.
    #[test]
    fn erase_closes_gap_keeps_capacity() {
        let mut v: Vector<i32> = (0..10).collect();
        let cap = v.capacity();
        let next = v
            .erase_range(v.begin().advance(2), v.begin().advance(5))
            .unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 5, 6, 7, 8, 9]);
        assert_eq!(next.get(&v), Some(&5));
        assert_eq!(v.capacity(), cap);
    }

    /// `reserve` preserves contents and is a no-op when sufficient.
    #[test]
    fn reserve_preserves_elements() {
        let mut v = Vector::from(["a".to_string(), "b".to_string()]);
        let cap = v.capacity();
        v.reserve(1);
        assert_eq!(v.capacity(), cap);
        v.reserve(100);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v.as_slice(), &["a".to_string(), "b".to_string()]);
    }

    /// Insert returns a cursor naming the new element; the shifted element
    /// follows it.
    #[test]
    fn insert_single_shifts_tail() {
        let mut v = Vector::from([1, 3]);
        let c = v.insert(v.begin().advance(1), 2).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(c.get(&v), Some(&2));
    }

    #[test]
    fn insert_n_fills_gap() {
        let mut v = Vector::from([1, 5]);
        v.insert_n(v.begin().advance(1), 3, &0).unwrap();
        assert_eq!(v.as_slice(), &[1, 0, 0, 0, 5]);
    }

    /// Drop and clear release owned elements exactly once.
    #[test]
    fn clear_drops_elements() {
        use std::rc::Rc;
        let probe = Rc::new(());
        let mut v = Vector::new();
        for _ in 0..5 {
            v.push_back(Rc::clone(&probe));
        }
        assert_eq!(Rc::strong_count(&probe), 6);
        v.clear();
        assert_eq!(Rc::strong_count(&probe), 1);
        assert!(v.is_empty());

        for _ in 0..3 {
            v.push_back(Rc::clone(&probe));
        }
        drop(v);
        assert_eq!(Rc::strong_count(&probe), 1);
    }

    /// Swap is a wholesale storage exchange.
    #[test]
    fn swap_exchanges_storage() {
        let mut a = Vector::from([1, 2]);
        let mut b = Vector::from([3, 4, 5]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[3, 4, 5]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    /// `find` returns the first matching position or `None`.
    #[test]
    fn find_scans_from_begin() {
        let v = Vector::from([4, 7, 7, 9]);
        assert_eq!(v.find(&7), Some(v.begin().advance(1)));
        assert_eq!(v.find(&5), None);
    }

    /// Clone is a deep copy: mutating the copy leaves the source alone.
    #[test]
    fn clone_is_deep() {
        let a = Vector::from([1, 2, 3]);
        let mut b = a.clone();
        b[0] = 99;
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[99, 2, 3]);
    }

    /// Cursor arithmetic is plain index arithmetic.
    #[test]
    fn cursor_arithmetic() {
        let v: Vector<i32> = (0..5).collect();
        let c = v.begin().advance(3);
        assert_eq!(c.index(), 3);
        assert_eq!(c.back(1), Some(v.begin().advance(2)));
        assert_eq!(v.begin().back(1), None);
        assert_eq!(v.end().distance(v.begin()), Some(5));
        assert_eq!(v.begin().distance(v.end()), None);
        assert_eq!(c.get(&v), Some(&3));
        assert_eq!(v.end().get(&v), None);
    }

    /// Sized constructors.
    #[test]
    fn sized_constructors() {
        let v: Vector<i32> = Vector::of_default(3);
        assert_eq!(v.as_slice(), &[0, 0, 0]);
        let v = Vector::filled(2, "x".to_string());
        assert_eq!(v.as_slice(), &["x".to_string(), "x".to_string()]);
        let v: Vector<i32> = Vector::from_slice(&[1, 2]);
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
