use super::utils::get_bit_unchecked;

/// An iterator over bits according to the [LSB](https://en.wikipedia.org/wiki/Bit_numbering#Least_significant_bit),
/// i.e. the bytes `[4u8, 128u8]` correspond to `[false, false, true, false, ..., true]`.
#[derive(Debug, Clone)]
pub struct BitmapIter<'a> {
    bytes: &'a [u8],
    index: usize,
    end: usize,
}

impl<'a> BitmapIter<'a> {
    /// Creates a new [`BitmapIter`].
    /// # Panics
    /// This function panics iff `offset + len > bytes.len() * 8`.
    pub fn new(bytes: &'a [u8], offset: usize, len: usize) -> Self {
        // reduce to the relevant bytes, so that the iterator does not
        // have to carry the original offset around.
        let bytes = &bytes[offset / 8..];
        let offset = offset % 8;
        let end = len + offset;
        assert!(end <= bytes.len() * 8);
        Self {
            bytes,
            index: offset,
            end,
        }
    }
}

impl<'a> Iterator for BitmapIter<'a> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let old = self.index;
        self.index += 1;
        // SAFETY: `self.index` is always smaller than `self.end`,
        // which is checked against `bytes.len() * 8` on construction.
        Some(unsafe { get_bit_unchecked(self.bytes, old) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.end - self.index;
        (exact, Some(exact))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = std::cmp::min(self.index + n, self.end);
        self.next()
    }
}

impl<'a> DoubleEndedIterator for BitmapIter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.index == self.end {
            None
        } else {
            self.end -= 1;
            // SAFETY: `self.end` is always smaller than `bytes.len() * 8`.
            Some(unsafe { get_bit_unchecked(self.bytes, self.end) })
        }
    }
}

impl<'a> ExactSizeIterator for BitmapIter<'a> {}
