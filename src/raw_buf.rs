//! Owned, fixed-capacity buffer of possibly-uninitialized slots.
//!
//! `RawBuf` is the scoped-resource wrapper under `Vector`: it owns the
//! allocation and releases it on drop, but knows nothing about which slots
//! are live. `Vector` tracks the initialized prefix and is the only caller;
//! every raw-pointer operation in the crate lives here.
//!
//! Safety contract shared by all `unsafe fn`s below: the caller tracks which
//! slots hold initialized values and only reads, clones, drops or moves out
//! of those.

use core::mem::MaybeUninit;
use core::ptr;

pub(crate) struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let slots = core::iter::repeat_with(MaybeUninit::uninit)
            .take(capacity)
            .collect();
        Self { slots }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn base(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    fn base_mut(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    /// Initialize slot `index` with `value`. Any previous value in the slot
    /// is overwritten without being dropped.
    ///
    /// Safety: `index < capacity`, and the slot must not hold a live value
    /// the caller still cares about.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    /// Move the value out of slot `index`, leaving it uninitialized.
    ///
    /// Safety: `index < capacity` and the slot holds a live value.
    pub(crate) unsafe fn take(&mut self, index: usize) -> T {
        self.slots[index].assume_init_read()
    }

    /// Clone the value in slot `index` without consuming it.
    ///
    /// Safety: `index < capacity` and the slot holds a live value.
    pub(crate) unsafe fn clone_slot(&self, index: usize) -> T
    where
        T: Clone,
    {
        (*self.base().add(index)).clone()
    }

    /// View the initialized prefix as a slice.
    ///
    /// Safety: slots `[0, len)` hold live values.
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[T] {
        core::slice::from_raw_parts(self.base(), len)
    }

    /// View the initialized prefix as a mutable slice.
    ///
    /// Safety: slots `[0, len)` hold live values.
    pub(crate) unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        core::slice::from_raw_parts_mut(self.base_mut(), len)
    }

    /// Move `count` slots from `src` to `dst` within the buffer. Ranges may
    /// overlap; source slots become logically uninitialized, destination
    /// slots live.
    ///
    /// Safety: both ranges lie within `[0, capacity)` and `[src, src+count)`
    /// holds live values.
    pub(crate) unsafe fn shift(&mut self, src: usize, dst: usize, count: usize) {
        let base = self.base_mut();
        ptr::copy(base.add(src), base.add(dst), count);
    }

    /// Drop the values in `[from, to)` in place.
    ///
    /// Safety: the range lies within `[0, capacity)` and holds live values.
    pub(crate) unsafe fn drop_range(&mut self, from: usize, to: usize) {
        let slice = core::slice::from_raw_parts_mut(self.base_mut().add(from), to - from);
        ptr::drop_in_place(slice);
    }

    /// Replace the allocation with one of `new_capacity` slots, relocating
    /// the live prefix. The old allocation is released without dropping any
    /// slot contents (they were moved, not copied).
    ///
    /// Safety: slots `[0, live)` hold live values and `live <= new_capacity`.
    pub(crate) unsafe fn reallocate(&mut self, new_capacity: usize, live: usize) {
        let mut fresh = RawBuf::with_capacity(new_capacity);
        ptr::copy_nonoverlapping(self.base(), fresh.base_mut(), live);
        self.slots = fresh.slots;
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuf;

    /// Invariant: writes land where they were aimed and survive a shift and
    /// a reallocation.
    #[test]
    fn write_shift_reallocate_round_trip() {
        let mut buf: RawBuf<String> = RawBuf::with_capacity(4);
        unsafe {
            buf.write(0, "a".to_string());
            buf.write(1, "b".to_string());
            // Open a gap at index 0.
            buf.shift(0, 2, 2);
            buf.write(0, "x".to_string());
            buf.write(1, "y".to_string());
            assert_eq!(buf.as_slice(4), ["x", "y", "a", "b"]);

            buf.reallocate(8, 4);
            assert_eq!(buf.capacity(), 8);
            assert_eq!(buf.as_slice(4), ["x", "y", "a", "b"]);
            buf.drop_range(0, 4);
        }
    }

    /// Invariant: `take` moves the value out without a double drop when the
    /// remaining prefix is dropped afterwards.
    #[test]
    fn take_moves_out() {
        let mut buf: RawBuf<Box<u32>> = RawBuf::with_capacity(2);
        unsafe {
            buf.write(0, Box::new(1));
            buf.write(1, Box::new(2));
            let b = buf.take(1);
            assert_eq!(*b, 2);
            buf.drop_range(0, 1);
        }
    }
}
