//! Contains the declaration of [`Offset`] and [`OffsetsBuffer`], used by
//! variable-length arrays ([`crate::array::Utf8Array`] and [`crate::array::ListArray`]).
use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::types::NativeType;

/// Sealed trait describing the subset of [`NativeType`] (`i32` and `i64`)
/// that can be used to index variable-length slots.
pub trait Offset: NativeType + PartialOrd + TryInto<usize> + TryFrom<usize> + std::ops::AddAssign {
    /// Whether it is `i32` (false) or `i64` (true).
    const IS_LARGE: bool;

    /// converts itself to `usize`
    fn to_usize(&self) -> usize;

    /// converts from `usize`
    fn from_usize(value: usize) -> Option<Self>;
}

impl Offset for i32 {
    const IS_LARGE: bool = false;

    #[inline]
    fn to_usize(&self) -> usize {
        *self as usize
    }

    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Offset for i64 {
    const IS_LARGE: bool = true;

    #[inline]
    fn to_usize(&self) -> usize {
        *self as usize
    }

    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

/// A wrapper type of [`Buffer<O>`] that is guaranteed to:
/// * Always contain an element
/// * Every element is `>= 0`
/// * Elements are monotonically increasing
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetsBuffer<O: Offset>(Buffer<O>);

impl<O: Offset> Default for OffsetsBuffer<O> {
    #[inline]
    fn default() -> Self {
        Self(vec![O::default()].into())
    }
}

impl<O: Offset> OffsetsBuffer<O> {
    /// Returns an empty [`OffsetsBuffer`] (i.e. with a single element, the zero)
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an [`OffsetsBuffer`] of `length` zeroed offsets (i.e. `length`
    /// empty slots).
    #[inline]
    pub fn new_zeroed(length: usize) -> Self {
        Self(vec![O::default(); length + 1].into())
    }

    /// Returns a new [`OffsetsBuffer`] from a [`Buffer`].
    /// # Errors
    /// This function errors iff:
    /// * the buffer is empty
    /// * the first element is negative
    /// * any two consecutive elements are decreasing
    pub fn try_new(buffer: Buffer<O>) -> Result<Self> {
        try_check_offsets(&buffer)?;
        Ok(Self(buffer))
    }

    /// Returns a new [`OffsetsBuffer`] without checking its invariants.
    /// # Safety
    /// The caller must ensure the invariants of this struct.
    #[inline]
    pub unsafe fn new_unchecked(buffer: Buffer<O>) -> Self {
        Self(buffer)
    }

    /// Returns the length of this container, i.e. the number of slots it indexes.
    #[inline]
    pub fn len_proxy(&self) -> usize {
        self.0.len() - 1
    }

    /// Returns the number of offsets in this container.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no slots (there is always at least one offset).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len_proxy() == 0
    }

    /// Returns the byte slice stored in this buffer
    #[inline]
    pub fn buffer(&self) -> &Buffer<O> {
        &self.0
    }

    /// Returns the first offset.
    #[inline]
    pub fn first(&self) -> O {
        *self.0.first().unwrap()
    }

    /// Returns the last offset.
    #[inline]
    pub fn last(&self) -> O {
        *self.0.last().unwrap()
    }

    /// Returns the range (start, end) corresponding to the position `index`
    /// # Panics
    /// Panics iff `index >= self.len_proxy()`
    #[inline]
    pub fn start_end(&self, index: usize) -> (usize, usize) {
        assert!(index < self.len_proxy());
        unsafe { self.start_end_unchecked(index) }
    }

    /// Returns the range (start, end) corresponding to the position `index`
    /// # Safety
    /// `index` must be `< self.len_proxy()`
    #[inline]
    pub unsafe fn start_end_unchecked(&self, index: usize) -> (usize, usize) {
        let start = self.0.get_unchecked(index).to_usize();
        let end = self.0.get_unchecked(index + 1).to_usize();
        (start, end)
    }

    /// Returns the length of the slot at position `index`
    #[inline]
    pub fn length_at(&self, index: usize) -> usize {
        let (start, end) = self.start_end(index);
        end - start
    }

    /// Slices this [`OffsetsBuffer`].
    /// # Panics
    /// Panics iff `offset + length > self.len()`, i.e. the lengths are in
    /// number of offsets, not number of slots.
    #[inline]
    pub fn slice(&mut self, offset: usize, length: usize) {
        assert!(length >= 1);
        self.0.slice(offset, length);
    }

    /// Slices this [`OffsetsBuffer`].
    /// # Safety
    /// The caller must ensure `offset + length <= self.len()` and `length >= 1`.
    #[inline]
    pub unsafe fn slice_unchecked(&mut self, offset: usize, length: usize) {
        debug_assert!(length >= 1);
        self.0.slice_unchecked(offset, length);
    }

    /// Returns an iterator over the offsets.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, O> {
        self.0.iter()
    }
}

impl<O: Offset> From<OffsetsBuffer<O>> for Buffer<O> {
    fn from(offsets: OffsetsBuffer<O>) -> Self {
        offsets.0
    }
}

impl<O: Offset> TryFrom<Buffer<O>> for OffsetsBuffer<O> {
    type Error = Error;

    fn try_from(buffer: Buffer<O>) -> Result<Self> {
        Self::try_new(buffer)
    }
}

impl<O: Offset> TryFrom<Vec<O>> for OffsetsBuffer<O> {
    type Error = Error;

    fn try_from(offsets: Vec<O>) -> Result<Self> {
        Self::try_new(offsets.into())
    }
}

/// Checks that `offsets` is non-empty, starts at a non-negative value and is
/// monotonically increasing.
fn try_check_offsets<O: Offset>(offsets: &[O]) -> Result<()> {
    let first = match offsets.first() {
        Some(first) => *first,
        None => {
            return Err(Error::oos("offsets must have at least one element"));
        },
    };
    if first < O::default() {
        return Err(Error::oos("offsets must be non-negative"));
    }
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(Error::oos("offsets must be monotonically increasing"));
    }
    Ok(())
}
