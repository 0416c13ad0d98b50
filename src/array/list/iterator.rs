use super::{ListArray, ListValuesIter};
use crate::array::Array;
use crate::bitmap::utils::ZipValidity;
use crate::bitmap::BitmapIter;
use crate::offset::Offset;

impl<'a, O: Offset> IntoIterator for &'a ListArray<O> {
    type Item = Option<Box<dyn Array>>;
    type IntoIter = ZipValidity<Box<dyn Array>, ListValuesIter<'a, O>, BitmapIter<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
