use super::{impl_common_array, Array};
use crate::bitmap::Bitmap;
use crate::datatypes::{DataType, PhysicalType};
use crate::error::{Error, Result};

/// The concrete [`Array`] of [`DataType::Null`]: an array where all slots are
/// null and no values are allocated.
#[derive(Clone)]
pub struct NullArray {
    data_type: DataType,
    length: usize,
}

impl NullArray {
    /// Returns a new [`NullArray`].
    /// # Errors
    /// This function errors iff:
    /// * The `data_type`'s [`crate::datatypes::PhysicalType`] is not equal to [`PhysicalType::Null`].
    pub fn try_new(data_type: DataType, length: usize) -> Result<Self> {
        if data_type.to_physical_type() != PhysicalType::Null {
            return Err(Error::oos(
                "NullArray can only be initialized with a DataType whose physical type is Null",
            ));
        }
        Ok(Self { data_type, length })
    }

    /// Returns a new [`NullArray`].
    /// # Panics
    /// This function errors iff:
    /// * The `data_type`'s [`crate::datatypes::PhysicalType`] is not equal to [`PhysicalType::Null`].
    pub fn new(data_type: DataType, length: usize) -> Self {
        Self::try_new(data_type, length).unwrap()
    }

    /// Returns a new empty [`NullArray`].
    pub fn new_empty(data_type: DataType) -> Self {
        Self::new(data_type, 0)
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns whether the array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Slices the [`NullArray`].
    /// # Panics
    /// Panics iff `offset + length > self.len()`.
    pub fn slice(&mut self, offset: usize, length: usize) {
        assert!(
            offset + length <= self.len(),
            "the offset of the new array cannot exceed the arrays' length"
        );
        unsafe { self.slice_unchecked(offset, length) };
    }

    /// Slices the [`NullArray`].
    /// # Safety
    /// The caller must ensure that `offset + length <= self.len()`.
    pub unsafe fn slice_unchecked(&mut self, _offset: usize, length: usize) {
        self.length = length;
    }
}

impl Array for NullArray {
    impl_common_array!();

    #[inline]
    fn validity(&self) -> Option<&Bitmap> {
        None
    }

    #[inline]
    fn null_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_null(&self, i: usize) -> bool {
        assert!(i < self.len());
        true
    }
}

impl std::fmt::Debug for NullArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NullArray({})", self.len())
    }
}
