use super::PrimitiveArray;
use crate::bitmap::utils::ZipValidity;
use crate::bitmap::BitmapIter;
use crate::types::NativeType;

impl<'a, T: NativeType> IntoIterator for &'a PrimitiveArray<T> {
    type Item = Option<&'a T>;
    type IntoIter = ZipValidity<&'a T, std::slice::Iter<'a, T>, BitmapIter<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
