use super::BooleanArray;
use crate::array::ArrayAccessor;
use crate::bitmap::utils::ZipValidity;
use crate::bitmap::BitmapIter;

unsafe impl<'a> ArrayAccessor<'a> for BooleanArray {
    type Item = bool;

    #[inline]
    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        self.value_unchecked(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<'a> IntoIterator for &'a BooleanArray {
    type Item = Option<bool>;
    type IntoIter = ZipValidity<bool, BitmapIter<'a>, BitmapIter<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
