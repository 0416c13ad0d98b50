use super::specification::try_check_utf8;
use super::{check_validity_len, impl_common_array, Array, ArrayAccessor, ArrayValuesIter};
use crate::bitmap::utils::ZipValidity;
use crate::bitmap::Bitmap;
use crate::buffer::Buffer;
use crate::datatypes::DataType;
use crate::error::{Error, Result};
use crate::offset::{Offset, OffsetsBuffer};

mod iterator;

/// A [`Utf8Array`] is Arrow's semantically equivalent of an immutable
/// `Vec<Option<String>>`. It implements [`Array`].
///
/// The size of this struct is `O(1)`, as all data is stored behind an [`std::sync::Arc`].
/// # Example
/// ```
/// use arrowlet::array::Utf8Array;
///
/// let array = Utf8Array::<i32>::from_iter([Some("hi"), None, Some("there")]);
/// assert_eq!(array.value(0), "hi");
/// assert_eq!(array.iter().collect::<Vec<_>>(), vec![Some("hi"), None, Some("there")]);
/// assert_eq!(array.values_iter().collect::<Vec<_>>(), vec!["hi", "", "there"]);
/// ```
///
/// # Generic parameter
/// The generic parameter [`Offset`] can only be `i32` or `i64` and tracks
/// whether this corresponds to [`DataType::Utf8`] or [`DataType::LargeUtf8`].
///
/// # Safety
/// The following invariants hold:
/// * Two consecutive `offsets` cast (`as`) to `usize` are valid slices of `values`.
/// * A slice of `values` taken from two consecutive `offsets` is valid `utf8`.
/// * `len` is equal to `validity.len()`, when defined.
#[derive(Clone)]
pub struct Utf8Array<O: Offset> {
    data_type: DataType,
    offsets: OffsetsBuffer<O>,
    values: Buffer<u8>,
    validity: Option<Bitmap>,
}

impl<O: Offset> Utf8Array<O> {
    /// Returns a [`Utf8Array`] created from its internal representation.
    ///
    /// # Errors
    /// This function returns an error iff:
    /// * The last offset is larger than the values' length.
    /// * The validity is not `None` and its length is different from `offsets`'s length minus one.
    /// * The `data_type`'s [`crate::datatypes::PhysicalType`] is not equal to either `Utf8` or `LargeUtf8`.
    /// * The `values` between two consecutive `offsets` are not valid utf8
    /// # Implementation
    /// This function is `O(N)` as it iterates over every offset and checks
    /// utf8 validity of the values.
    pub fn try_new(
        data_type: DataType,
        offsets: OffsetsBuffer<O>,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Result<Self> {
        try_check_utf8(&offsets, &values)?;
        check_validity_len(validity.as_ref(), offsets.len_proxy())?;

        if data_type.to_physical_type() != Self::default_data_type().to_physical_type() {
            return Err(Error::oos(
                "Utf8Array can only be initialized with a DataType whose physical type is Utf8",
            ));
        }

        Ok(Self {
            data_type,
            offsets,
            values,
            validity,
        })
    }

    /// Creates a new [`Utf8Array`].
    /// # Panics
    /// This function panics iff [`Self::try_new`] errors.
    pub fn new(
        data_type: DataType,
        offsets: OffsetsBuffer<O>,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Self {
        Self::try_new(data_type, offsets, values, validity).unwrap()
    }

    /// Returns a new empty [`Utf8Array`].
    pub fn new_empty(data_type: DataType) -> Self {
        unsafe {
            Self::new_unchecked(data_type, OffsetsBuffer::new(), Buffer::new(), None)
        }
    }

    /// Returns a new [`Utf8Array`] from its internal representation, without checks.
    ///
    /// # Safety
    /// The caller must uphold the invariants listed on [`Utf8Array`] and that
    /// the `data_type`'s physical type equals `Utf8` or `LargeUtf8` accordingly.
    pub unsafe fn new_unchecked(
        data_type: DataType,
        offsets: OffsetsBuffer<O>,
        values: Buffer<u8>,
        validity: Option<Bitmap>,
    ) -> Self {
        Self {
            data_type,
            offsets,
            values,
            validity,
        }
    }

    /// Returns the default [`DataType`] of this container: [`DataType::Utf8`] or
    /// [`DataType::LargeUtf8`] depending on the generic [`Offset`].
    pub fn default_data_type() -> DataType {
        if O::IS_LARGE {
            DataType::LargeUtf8
        } else {
            DataType::Utf8
        }
    }

    /// Returns an iterator over the optional values of this [`Utf8Array`].
    #[inline]
    pub fn iter(&self) -> ZipValidity<&str, Utf8ValuesIter<O>, crate::bitmap::BitmapIter> {
        ZipValidity::new_with_validity(self.values_iter(), self.validity())
    }

    /// Returns an iterator of the values of this [`Utf8Array`], ignoring validity.
    #[inline]
    pub fn values_iter(&self) -> Utf8ValuesIter<O> {
        Utf8ValuesIter::new(self)
    }

    /// Returns the length of this array
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len_proxy()
    }

    /// Returns whether the array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value of the element at index `i`, ignoring the array's validity.
    /// # Panic
    /// This function panics iff `i >= self.len`.
    #[inline]
    pub fn value(&self, i: usize) -> &str {
        assert!(i < self.len());
        unsafe { self.value_unchecked(i) }
    }

    /// Returns the value of the element at index `i`, ignoring the array's validity.
    /// # Safety
    /// This function is safe iff `i < self.len`.
    #[inline]
    pub unsafe fn value_unchecked(&self, i: usize) -> &str {
        let (start, end) = self.offsets.start_end_unchecked(i);

        // soundness: the invariant of the struct
        let slice = self.values.as_slice().get_unchecked(start..end);

        // soundness: the invariant of the struct
        std::str::from_utf8_unchecked(slice)
    }

    /// Returns the element at index `i` or `None` if it is null
    /// # Panics
    /// iff `i >= self.len()`
    #[inline]
    pub fn get(&self, i: usize) -> Option<&str> {
        if !self.is_null(i) {
            // soundness: `i < self.len()` was checked by `is_null`
            Some(unsafe { self.value_unchecked(i) })
        } else {
            None
        }
    }

    /// Returns the [`DataType`] of this array.
    #[inline]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    /// Returns the values of this [`Utf8Array`].
    #[inline]
    pub fn values(&self) -> &Buffer<u8> {
        &self.values
    }

    /// Returns the offsets of this [`Utf8Array`].
    #[inline]
    pub fn offsets(&self) -> &OffsetsBuffer<O> {
        &self.offsets
    }

    /// The optional validity.
    #[inline]
    pub fn validity(&self) -> Option<&Bitmap> {
        self.validity.as_ref()
    }

    /// Slices this [`Utf8Array`].
    /// # Implementation
    /// This function is `O(1)`: all data will be shared between both arrays.
    /// # Panics
    /// iff `offset + length > self.len()`.
    pub fn slice(&mut self, offset: usize, length: usize) {
        assert!(
            offset + length <= self.len(),
            "the offset of the new array cannot exceed the arrays' length"
        );
        unsafe { self.slice_unchecked(offset, length) }
    }

    /// Slices this [`Utf8Array`].
    /// # Implementation
    /// This function is `O(1)`: all data will be shared between both arrays.
    /// # Safety
    /// The caller must ensure that `offset + length <= self.len()`.
    pub unsafe fn slice_unchecked(&mut self, offset: usize, length: usize) {
        self.validity = self
            .validity
            .take()
            .map(|bitmap| bitmap.sliced_unchecked(offset, length))
            .filter(|bitmap| bitmap.unset_bits() > 0);
        self.offsets.slice_unchecked(offset, length + 1);
    }

    /// Returns its internal representation
    #[must_use]
    pub fn into_inner(self) -> (DataType, OffsetsBuffer<O>, Buffer<u8>, Option<Bitmap>) {
        let Self {
            data_type,
            offsets,
            values,
            validity,
        } = self;
        (data_type, offsets, values, validity)
    }
}

impl<O: Offset> Array for Utf8Array<O> {
    impl_common_array!();

    #[inline]
    fn validity(&self) -> Option<&Bitmap> {
        self.validity.as_ref()
    }
}

impl<O: Offset> std::fmt::Debug for Utf8Array<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let head = if O::IS_LARGE {
            "LargeUtf8Array"
        } else {
            "Utf8Array"
        };
        f.write_str(head)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<O: Offset, P: AsRef<str>> FromIterator<Option<P>> for Utf8Array<O> {
    fn from_iter<I: IntoIterator<Item = Option<P>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut offsets = Vec::with_capacity(1 + iter.size_hint().0);
        let mut values = Vec::<u8>::new();
        let mut validity = crate::bitmap::MutableBitmap::new();
        let mut length = O::default();
        offsets.push(length);
        for item in iter {
            if let Some(s) = &item {
                let s = s.as_ref();
                values.extend_from_slice(s.as_bytes());
                length += O::from_usize(s.len()).unwrap();
            }
            validity.push(item.is_some());
            offsets.push(length);
        }
        let validity: Bitmap = validity.into();
        let validity = (validity.unset_bits() > 0).then_some(validity);
        // soundness: offsets are monotonic by construction and values are
        // concatenated utf8 strings
        unsafe {
            Self::new_unchecked(
                Self::default_data_type(),
                OffsetsBuffer::new_unchecked(offsets.into()),
                values.into(),
                validity,
            )
        }
    }
}

unsafe impl<'a, O: Offset> ArrayAccessor<'a> for Utf8Array<O> {
    type Item = &'a str;

    #[inline]
    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        self.value_unchecked(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Iterator of values of an [`Utf8Array`], ignoring validity.
pub type Utf8ValuesIter<'a, O> = ArrayValuesIter<'a, Utf8Array<O>>;
