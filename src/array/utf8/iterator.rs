use super::{Utf8Array, Utf8ValuesIter};
use crate::bitmap::utils::ZipValidity;
use crate::bitmap::BitmapIter;
use crate::offset::Offset;

impl<'a, O: Offset> IntoIterator for &'a Utf8Array<O> {
    type Item = Option<&'a str>;
    type IntoIter = ZipValidity<&'a str, Utf8ValuesIter<'a, O>, BitmapIter<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
