use crate::buffer::Buffer;
use crate::error::{Error, Result};

use super::utils::{bytes_for, count_zeros, get_bit, get_bit_unchecked};
use super::{BitmapIter, MutableBitmap};

/// An immutable container semantically equivalent to `Arc<Vec<bool>>` but represented as `Arc<Vec<u8>>` where
/// each boolean is represented as a single bit.
///
/// # Examples
/// ```
/// use arrowlet::bitmap::{Bitmap, MutableBitmap};
///
/// let bitmap = Bitmap::from([true, false, true]);
/// assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![true, false, true]);
///
/// // creation directly from bytes
/// let bitmap = Bitmap::try_new(vec![0b00001101], 5).unwrap();
/// // note: the first bit (lowest) corresponds to the first item
/// assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![true, false, true, true, false]);
///
/// // slicing is `O(1)` (data is shared)
/// let bitmap = bitmap.sliced(1, 4);
/// assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![false, true, true, false]);
/// ```
#[derive(Clone)]
pub struct Bitmap {
    bytes: Buffer<u8>,
    // Both offset and length are measured in bits. They are used to bound the
    // bitmap to a region of Bytes.
    offset: usize,
    length: usize,

    // this is a cache: it is computed on initialization
    unset_bits: usize,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("unset_bits", &self.unset_bits)
            .finish()
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Bitmap {}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bitmap {
    /// Initializes an empty [`Bitmap`].
    #[inline]
    pub fn new() -> Self {
        Self {
            bytes: Buffer::new(),
            offset: 0,
            length: 0,
            unset_bits: 0,
        }
    }

    /// Initializes a new [`Bitmap`] from bytes and a length.
    /// # Errors
    /// This function errors iff `length > bytes.len() * 8`
    #[inline]
    pub fn try_new(bytes: Vec<u8>, length: usize) -> Result<Self> {
        if length > bytes.len().saturating_mul(8) {
            return Err(Error::OutOfSpec(format!(
                "the length of the bitmap ({}) must be <= to the number of bytes times 8 ({})",
                length,
                bytes.len().saturating_mul(8)
            )));
        }
        let unset_bits = count_zeros(&bytes, 0, length);
        Ok(Self {
            bytes: bytes.into(),
            length,
            offset: 0,
            unset_bits,
        })
    }

    /// Initializes a zeroed (all unset) [`Bitmap`] of `length` bits.
    #[inline]
    pub fn new_zeroed(length: usize) -> Self {
        Self {
            bytes: Buffer::zeroed(bytes_for(length)),
            offset: 0,
            length,
            unset_bits: length,
        }
    }

    /// Returns the length of the [`Bitmap`] in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns whether [`Bitmap`] is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of unset (i.e. null / `false`) bits on this [`Bitmap`].
    ///
    /// This is `O(1)`: the value is computed on initialization and
    /// adjusted on every slice.
    #[inline]
    pub fn unset_bits(&self) -> usize {
        self.unset_bits
    }

    /// Returns the number of set (i.e. `true`) bits on this [`Bitmap`].
    #[inline]
    pub fn set_bits(&self) -> usize {
        self.length - self.unset_bits
    }

    /// Returns whether the bit at position `i` is set.
    /// # Panics
    /// Panics iff `i >= self.len()`.
    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        assert!(i < self.length);
        get_bit(&self.bytes, self.offset + i)
    }

    /// Unsafely returns whether the bit at position `i` is set.
    ///
    /// # Safety
    /// Unsound iff `i >= self.len()`.
    #[inline]
    pub unsafe fn get_bit_unchecked(&self, i: usize) -> bool {
        debug_assert!(i < self.length);
        get_bit_unchecked(&self.bytes, self.offset + i)
    }

    /// Returns the byte slice of this [`Bitmap`].
    ///
    /// The returned tuple contains:
    /// * `.0`: The byte slice, truncated to the byte containing the last bit of the region
    /// * `.1`: The bit offset of the region within the first byte
    /// * `.2`: The length of the region, in bits
    #[inline]
    pub fn as_slice(&self) -> (&[u8], usize, usize) {
        let start = self.offset / 8;
        let len = bytes_for((self.offset % 8) + self.length);
        (
            &self.bytes[start..start + len],
            self.offset % 8,
            self.length,
        )
    }

    /// Returns an iterator over bits in bit chunks of this [`Bitmap`].
    #[inline]
    pub fn iter(&self) -> BitmapIter {
        BitmapIter::new(&self.bytes, self.offset, self.length)
    }

    /// Slices `self`, offsetting by `offset` and truncating up to `length` bits.
    /// # Panics
    /// Panics iff `offset + length > self.length`, i.e. if the offset and `length`
    /// exceeds the allocated capacity of `self`.
    #[inline]
    pub fn slice(&mut self, offset: usize, length: usize) {
        assert!(offset + length <= self.length);
        unsafe { self.slice_unchecked(offset, length) }
    }

    /// Slices `self`, offsetting by `offset` and truncating up to `length` bits.
    /// # Safety
    /// The caller must ensure that `self.offset + offset + length <= self.len()`
    #[inline]
    pub unsafe fn slice_unchecked(&mut self, offset: usize, length: usize) {
        // first guard a no-op slice so that we don't do a bitcount
        // if there isn't any data sliced
        if !(offset == 0 && length == self.length) {
            // if the new length is less than half of the previous length,
            // it is cheaper to count the zeros of the new range directly;
            // otherwise subtract the zeros of the discarded head and tail.
            if length < self.length / 2 {
                self.unset_bits = count_zeros(&self.bytes, self.offset + offset, length);
            } else {
                let head_count = count_zeros(&self.bytes, self.offset, offset);
                let tail_count = count_zeros(
                    &self.bytes,
                    self.offset + offset + length,
                    self.length - length - offset,
                );
                self.unset_bits -= head_count + tail_count;
            }
            self.offset += offset;
            self.length = length;
        }
    }

    /// Slices `self`, offsetting by `offset` and truncating up to `length` bits.
    /// # Panics
    /// Panics iff `offset + length > self.length`.
    #[inline]
    #[must_use]
    pub fn sliced(self, offset: usize, length: usize) -> Self {
        assert!(offset + length <= self.length);
        unsafe { self.sliced_unchecked(offset, length) }
    }

    /// Slices `self`, offsetting by `offset` and truncating up to `length` bits.
    /// # Safety
    /// The caller must ensure that `self.offset + offset + length <= self.len()`
    #[inline]
    #[must_use]
    pub unsafe fn sliced_unchecked(mut self, offset: usize, length: usize) -> Self {
        self.slice_unchecked(offset, length);
        self
    }

    /// Returns its internal representation
    #[must_use]
    pub fn into_inner(self) -> (Buffer<u8>, usize, usize, usize) {
        let Self {
            bytes,
            offset,
            length,
            unset_bits,
        } = self;
        (bytes, offset, length, unset_bits)
    }
}

impl<P: AsRef<[bool]>> From<P> for Bitmap {
    fn from(slice: P) -> Self {
        Self::from_trusted_len_iter(slice.as_ref().iter().copied())
    }
}

impl FromIterator<bool> for Bitmap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        MutableBitmap::from_iter(iter).into()
    }
}

impl Bitmap {
    /// Creates a new [`Bitmap`] from an iterator of booleans.
    ///
    /// The iterator must report an accurate length.
    #[inline]
    pub fn from_trusted_len_iter<I: ExactSizeIterator<Item = bool>>(iterator: I) -> Self {
        MutableBitmap::from_trusted_len_iter(iterator).into()
    }
}

impl From<MutableBitmap> for Bitmap {
    #[inline]
    fn from(buffer: MutableBitmap) -> Self {
        buffer.into_bitmap()
    }
}

impl<'a> IntoIterator for &'a Bitmap {
    type Item = bool;
    type IntoIter = BitmapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        BitmapIter::new(&self.bytes, self.offset, self.length)
    }
}
