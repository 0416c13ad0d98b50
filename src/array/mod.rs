//! Contains the [`Array`] trait object and concrete arrays (such as
//! [`Utf8Array`] and [`BooleanArray`]), immutable containers of a
//! [`DataType`] and optional validity.
//!
//! The most important trait is [`Array`], implemented by all immutable arrays.
//! Arrays are cheaply clonable and sliceable: slicing shares the underlying
//! storage and adjusts offsets and lengths.
use std::any::Any;

use crate::bitmap::Bitmap;
use crate::datatypes::DataType;
use crate::error::Result;

mod boolean;
mod equal;
mod iterator;
mod list;
mod null;
mod primitive;
pub(crate) mod specification;
mod utf8;

pub use boolean::BooleanArray;
pub use equal::equal;
pub use iterator::ArrayValuesIter;
pub use list::{ListArray, ListValuesIter};
pub use null::NullArray;
pub use primitive::{PrimitiveArray, PrimitiveValuesIter};
pub use utf8::{Utf8Array, Utf8ValuesIter};

/// A trait representing an immutable Arrow array. Arrow arrays are immutable
/// containers which store an arrow-compliant in-memory representation
/// and a [`DataType`] declaring their logical meaning.
///
/// Any array with a [validity bitmap](Array::validity) has no preferred value
/// on a null slot: reading such a slot yields an arbitrary (but initialized) value.
pub trait Array: Send + Sync {
    /// Converts itself to a reference of [`Any`], which enables downcasting to concrete types.
    fn as_any(&self) -> &dyn Any;

    /// The length of the [`Array`]. Every array has a length corresponding to the number of
    /// elements (slots).
    fn len(&self) -> usize;

    /// whether the array is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The [`DataType`] of the [`Array`]. In combination with [`Array::as_any`], this can be
    /// used to downcast trait objects (`dyn Array`) to concrete arrays.
    fn data_type(&self) -> &DataType;

    /// The validity of the [`Array`]: every array has an optional [`Bitmap`] that, when available
    /// specifies whether the array slot is valid or not (null).
    /// When the validity is [`None`], all slots are valid.
    fn validity(&self) -> Option<&Bitmap>;

    /// The number of null slots on this [`Array`].
    /// # Implementation
    /// This is `O(1)` since the number of null elements is pre-computed.
    #[inline]
    fn null_count(&self) -> usize {
        if self.data_type() == &DataType::Null {
            return self.len();
        };
        self.validity()
            .as_ref()
            .map(|x| x.unset_bits())
            .unwrap_or(0)
    }

    /// Returns whether slot `i` is null.
    /// # Panic
    /// Panics iff `i >= self.len()`.
    #[inline]
    fn is_null(&self, i: usize) -> bool {
        assert!(i < self.len());
        self.validity()
            .as_ref()
            .map(|x| !x.get_bit(i))
            .unwrap_or(false)
    }

    /// Returns whether slot `i` is valid.
    /// # Panic
    /// Panics iff `i >= self.len()`.
    #[inline]
    fn is_valid(&self, i: usize) -> bool {
        !self.is_null(i)
    }

    /// Slices the [`Array`], returning a view sharing the underlying storage.
    /// # Implementation
    /// This operation is `O(1)` over `len`.
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    fn slice(&mut self, offset: usize, length: usize);

    /// Slices the [`Array`], returning a view sharing the underlying storage.
    /// # Implementation
    /// This operation is `O(1)` over `len`.
    /// # Safety
    /// The caller must ensure that `offset + length <= self.len()`
    unsafe fn slice_unchecked(&mut self, offset: usize, length: usize);

    /// Returns a slice of this [`Array`].
    /// # Implementation
    /// This operation is `O(1)` over `len`.
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    #[must_use]
    fn sliced(&self, offset: usize, length: usize) -> Box<dyn Array> {
        let mut new = self.to_boxed();
        new.slice(offset, length);
        new
    }

    /// Clones this [`Array`] into a boxed trait object.
    fn to_boxed(&self) -> Box<dyn Array>;
}

/// A typedef of a boxed [`Array`].
pub type ArrayRef = Box<dyn Array>;

impl Clone for Box<dyn Array> {
    fn clone(&self) -> Self {
        self.as_ref().to_boxed()
    }
}

impl std::fmt::Debug for dyn Array + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}[len = {}, nulls = {}]",
            self.data_type().to_physical_type(),
            self.len(),
            self.null_count()
        )
    }
}

/// Macro to dispatch a [`crate::types::PrimitiveType`] to the corresponding native type.
macro_rules! with_match_primitive_type {(
    $key_type:expr, | $_:tt $T:ident | $($body:tt)*
) => ({
    macro_rules! __with_ty__ {( $_ $T:ident ) => ( $($body)* )}
    use $crate::types::PrimitiveType::*;
    use $crate::types::f16;
    match $key_type {
        Int8 => __with_ty__! { i8 },
        Int16 => __with_ty__! { i16 },
        Int32 => __with_ty__! { i32 },
        Int64 => __with_ty__! { i64 },
        UInt8 => __with_ty__! { u8 },
        UInt16 => __with_ty__! { u16 },
        UInt32 => __with_ty__! { u32 },
        UInt64 => __with_ty__! { u64 },
        Float16 => __with_ty__! { f16 },
        Float32 => __with_ty__! { f32 },
        Float64 => __with_ty__! { f64 },
    }
})}
pub(crate) use with_match_primitive_type;

/// Creates a new [`Array`] with a [`Array::len`] of 0.
pub fn new_empty_array(data_type: DataType) -> Box<dyn Array> {
    use crate::datatypes::PhysicalType::*;
    match data_type.to_physical_type() {
        Null => Box::new(NullArray::new_empty(data_type)),
        Boolean => Box::new(BooleanArray::new_empty(data_type)),
        Primitive(primitive) => with_match_primitive_type!(primitive, |$T| {
            Box::new(PrimitiveArray::<$T>::new_empty(data_type))
        }),
        Utf8 => Box::new(Utf8Array::<i32>::new_empty(data_type)),
        LargeUtf8 => Box::new(Utf8Array::<i64>::new_empty(data_type)),
        List => Box::new(ListArray::<i32>::new_empty(data_type)),
        LargeList => Box::new(ListArray::<i64>::new_empty(data_type)),
        Dictionary(_) => unimplemented!("dictionary arrays are not supported"),
    }
}

/// Trait providing bi-directional access to [`Array`] values.
///
/// # Safety
/// Implementers must uphold that `value_unchecked` is sound for all `index < len`.
pub unsafe trait ArrayAccessor<'a> {
    /// The item yielded per slot.
    type Item: 'a;
    /// Returns the value at `index`, ignoring validity.
    /// # Safety
    /// `index` must be smaller than `len`.
    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item;
    /// The number of slots.
    fn len(&self) -> usize;
}

macro_rules! impl_common_array {
    () => {
        #[inline]
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        #[inline]
        fn len(&self) -> usize {
            self.len()
        }

        #[inline]
        fn data_type(&self) -> &DataType {
            &self.data_type
        }

        #[inline]
        fn slice(&mut self, offset: usize, length: usize) {
            self.slice(offset, length);
        }

        #[inline]
        unsafe fn slice_unchecked(&mut self, offset: usize, length: usize) {
            self.slice_unchecked(offset, length);
        }

        #[inline]
        fn to_boxed(&self) -> Box<dyn Array> {
            Box::new(self.clone())
        }
    };
}
pub(crate) use impl_common_array;

/// Helper to validate that an optional validity has exactly `expected_len` bits.
pub(crate) fn check_validity_len(validity: Option<&Bitmap>, expected_len: usize) -> Result<()> {
    if validity.map_or(false, |validity| validity.len() != expected_len) {
        return Err(crate::error::Error::oos(
            "validity mask length must match the number of values",
        ));
    }
    Ok(())
}
