//! Logical equality of [`Array`]s, used by the `PartialEq` implementations.
use crate::datatypes::PhysicalType;

use super::{
    with_match_primitive_type, Array, BooleanArray, ListArray, NullArray, PrimitiveArray,
    Utf8Array,
};

/// Logically compares two [`Array`]s.
///
/// Two arrays are logically equal when they have equal datatypes, lengths and
/// their (optional) values are equal slot by slot.
pub fn equal(lhs: &dyn Array, rhs: &dyn Array) -> bool {
    if lhs.data_type() != rhs.data_type() || lhs.len() != rhs.len() {
        return false;
    }

    match lhs.data_type().to_physical_type() {
        PhysicalType::Null => true,
        PhysicalType::Boolean => {
            let lhs = lhs.as_any().downcast_ref::<BooleanArray>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<BooleanArray>().unwrap();
            lhs == rhs
        },
        PhysicalType::Primitive(primitive) => with_match_primitive_type!(primitive, |$T| {
            let lhs = lhs.as_any().downcast_ref::<PrimitiveArray<$T>>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<PrimitiveArray<$T>>().unwrap();
            lhs == rhs
        }),
        PhysicalType::Utf8 => {
            let lhs = lhs.as_any().downcast_ref::<Utf8Array<i32>>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<Utf8Array<i32>>().unwrap();
            lhs == rhs
        },
        PhysicalType::LargeUtf8 => {
            let lhs = lhs.as_any().downcast_ref::<Utf8Array<i64>>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<Utf8Array<i64>>().unwrap();
            lhs == rhs
        },
        PhysicalType::List => {
            let lhs = lhs.as_any().downcast_ref::<ListArray<i32>>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<ListArray<i32>>().unwrap();
            lhs == rhs
        },
        PhysicalType::LargeList => {
            let lhs = lhs.as_any().downcast_ref::<ListArray<i64>>().unwrap();
            let rhs = rhs.as_any().downcast_ref::<ListArray<i64>>().unwrap();
            lhs == rhs
        },
        PhysicalType::Dictionary(_) => unimplemented!("dictionary arrays are not supported"),
    }
}

impl PartialEq<dyn Array> for dyn Array + '_ {
    fn eq(&self, that: &dyn Array) -> bool {
        equal(self, that)
    }
}

impl PartialEq for NullArray {
    fn eq(&self, other: &Self) -> bool {
        self.data_type() == other.data_type() && self.len() == other.len()
    }
}

impl PartialEq for BooleanArray {
    fn eq(&self, other: &Self) -> bool {
        self.data_type() == other.data_type()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<T: crate::types::NativeType> PartialEq for PrimitiveArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data_type() == other.data_type()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<O: crate::offset::Offset> PartialEq for Utf8Array<O> {
    fn eq(&self, other: &Self) -> bool {
        self.data_type() == other.data_type()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<O: crate::offset::Offset> PartialEq for ListArray<O> {
    fn eq(&self, other: &Self) -> bool {
        self.data_type() == other.data_type()
            && self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(lhs, rhs)| match (lhs, rhs) {
                    (None, None) => true,
                    (Some(lhs), Some(rhs)) => equal(lhs.as_ref(), rhs.as_ref()),
                    _ => false,
                })
    }
}
