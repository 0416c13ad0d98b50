use std::iter::FromIterator;

use crate::error::{Error, Result};

use super::utils::{bytes_for, count_zeros, get_bit, set, set_bit};
use super::{Bitmap, BitmapIter};

/// A container of booleans. [`MutableBitmap`] is semantically equivalent
/// to [`Vec<bool>`].
///
/// The two main differences against [`Vec<bool>`] is that each element stored as a single bit,
/// thereby:
/// * it uses 8x less memory
/// * it cannot be represented as `&[bool]` (i.e. no pointer arithmetics).
///
/// A [`MutableBitmap`] can be converted to a [`Bitmap`] at `O(1)`.
///
/// # Examples
/// ```
/// use arrowlet::bitmap::MutableBitmap;
///
/// let mut bitmap = MutableBitmap::new();
/// bitmap.push(true);
/// bitmap.push(false);
/// bitmap.push(true);
/// assert_eq!(bitmap.get(1), false);
/// ```
#[derive(Clone)]
pub struct MutableBitmap {
    buffer: Vec<u8>,
    // invariant: length <= buffer.len() * 8
    length: usize,
}

impl std::fmt::Debug for MutableBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutableBitmap")
            .field("length", &self.length)
            .finish()
    }
}

impl PartialEq for MutableBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl MutableBitmap {
    /// Initializes an empty [`MutableBitmap`].
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            length: 0,
        }
    }

    /// Initializes a new [`MutableBitmap`] from a [`Vec<u8>`] and a length.
    /// # Errors
    /// This function errors iff `length > bytes.len() * 8`
    #[inline]
    pub fn try_new(bytes: Vec<u8>, length: usize) -> Result<Self> {
        if length > bytes.len().saturating_mul(8) {
            return Err(Error::InvalidArgumentError(format!(
                "The length of the bitmap ({}) must be <= to the number of bytes times 8 ({})",
                length,
                bytes.len().saturating_mul(8)
            )));
        }
        Ok(Self {
            length,
            buffer: bytes,
        })
    }

    /// Initializes a pre-allocated [`MutableBitmap`] with capacity for `capacity` bits.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bytes_for(capacity)),
            length: 0,
        }
    }

    /// Pushes a new bit to the [`MutableBitmap`], re-sizing it if necessary.
    #[inline]
    pub fn push(&mut self, value: bool) {
        if self.length == self.buffer.len() * 8 {
            // `Vec` grows geometrically, keeping `push` amortized `O(1)`.
            self.buffer.push(0);
        }
        let byte = &mut self.buffer[self.length / 8];
        *byte = set(*byte, self.length % 8, value);
        self.length += 1;
    }

    /// Returns the capacity of [`MutableBitmap`] in number of bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity() * 8
    }

    /// Returns the length of the [`MutableBitmap`] in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns whether [`MutableBitmap`] is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of unset bits on this [`MutableBitmap`].
    ///
    /// This is `O(N)`: if the bitmap is immutable, prefer `Bitmap::unset_bits`,
    /// which caches the count.
    pub fn unset_bits(&self) -> usize {
        count_zeros(&self.buffer, 0, self.length)
    }

    /// Returns whether the position `index` is set.
    /// # Panics
    /// Panics iff `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length);
        get_bit(&self.buffer, index)
    }

    /// Sets the position `index` to `value`
    /// # Panics
    /// Panics iff `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.length);
        set_bit(self.buffer.as_mut_slice(), index, value)
    }

    /// Shrinks the capacity of the [`MutableBitmap`] to fit its current length.
    pub fn shrink_to_fit(&mut self) {
        self.buffer.truncate(bytes_for(self.length));
        self.buffer.shrink_to_fit();
    }

    /// Clears the [`MutableBitmap`], removing all values.
    pub fn clear(&mut self) {
        self.length = 0;
        self.buffer.clear();
    }

    /// Extends [`MutableBitmap`] by `additional` values of constant `value`.
    pub fn extend_constant(&mut self, additional: usize, value: bool) {
        if value {
            for _ in 0..additional {
                self.push(true)
            }
        } else {
            self.buffer.resize(bytes_for(self.length + additional), 0);
            self.length += additional;
        }
    }

    /// Returns an iterator over the values of the [`MutableBitmap`].
    pub fn iter(&self) -> BitmapIter {
        BitmapIter::new(&self.buffer, 0, self.length)
    }

    /// Consumes this [`MutableBitmap`] into an immutable [`Bitmap`].
    ///
    /// This is `O(1)`: the backing bytes are handed over, not copied.
    pub fn into_bitmap(mut self) -> Bitmap {
        self.buffer.truncate(bytes_for(self.length));
        let length = self.length;
        // try_new only fails when length exceeds capacity, upheld by the invariant.
        Bitmap::try_new(self.buffer, length).unwrap()
    }
}

impl Default for MutableBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<bool> for MutableBitmap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut iterator = iter.into_iter();
        let mut buffer = {
            let byte_capacity: usize = iterator.size_hint().0.saturating_add(7) / 8;
            Vec::with_capacity(byte_capacity)
        };

        let mut length = 0;

        loop {
            let mut exhausted = false;
            let mut byte_accum: u8 = 0;
            let mut mask: u8 = 1;

            // collect (up to) 8 bits into a byte
            while mask != 0 {
                if let Some(value) = iterator.next() {
                    length += 1;
                    byte_accum |= match value {
                        true => mask,
                        false => 0,
                    };
                    mask <<= 1;
                } else {
                    exhausted = true;
                    break;
                }
            }

            // break if the iterator was exhausted before it provided a bool for this byte
            if exhausted && mask == 1 {
                break;
            }

            buffer.push(byte_accum);
            if exhausted {
                break;
            }
        }
        Self { buffer, length }
    }
}

impl MutableBitmap {
    /// Creates a new [`MutableBitmap`] from an iterator of booleans.
    ///
    /// The iterator must report an accurate length.
    #[inline]
    pub fn from_trusted_len_iter<I: ExactSizeIterator<Item = bool>>(iterator: I) -> Self {
        let mut bitmap = Self::with_capacity(iterator.len());
        for value in iterator {
            bitmap.push(value)
        }
        bitmap
    }
}

impl<P: AsRef<[bool]>> From<P> for MutableBitmap {
    fn from(slice: P) -> Self {
        Self::from_trusted_len_iter(slice.as_ref().iter().copied())
    }
}
