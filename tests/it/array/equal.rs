use arrowlet::array::{
    equal, Array, BooleanArray, ListArray, NullArray, PrimitiveArray, Utf8Array,
};
use arrowlet::datatypes::DataType;
use arrowlet::offset::OffsetsBuffer;

#[test]
fn primitive() {
    let lhs = PrimitiveArray::<i32>::from_iter([Some(1), None, Some(3)]);
    let rhs = PrimitiveArray::<i32>::from_iter([Some(1), None, Some(3)]);
    assert!(equal(&lhs, &rhs));
    assert_eq!(lhs, rhs);

    let rhs = PrimitiveArray::<i32>::from_iter([Some(1), None, Some(4)]);
    assert!(!equal(&lhs, &rhs));
}

#[test]
fn null_slot_masks_values() {
    // values behind a null slot do not participate in equality
    let lhs = PrimitiveArray::<i32>::try_new(
        DataType::Int32,
        vec![1, 2].into(),
        Some([true, false].into()),
    )
    .unwrap();
    let rhs = PrimitiveArray::<i32>::try_new(
        DataType::Int32,
        vec![1, 99].into(),
        Some([true, false].into()),
    )
    .unwrap();
    assert!(equal(&lhs, &rhs));
}

#[test]
fn different_data_types_are_not_equal() {
    let lhs = PrimitiveArray::<i32>::from_slice([1]);
    let rhs = PrimitiveArray::<i64>::from_slice([1]);
    assert!(!equal(&lhs, &rhs));
}

#[test]
fn different_lengths_are_not_equal() {
    let lhs = BooleanArray::from(vec![true]);
    let rhs = BooleanArray::from(vec![true, true]);
    assert!(!equal(&lhs, &rhs));
}

#[test]
fn slices_compare_positionally() {
    let lhs = PrimitiveArray::<i32>::from_slice([0, 1, 2, 3]).sliced(1, 2);
    let rhs = PrimitiveArray::<i32>::from_slice([1, 2]);
    assert!(equal(lhs.as_ref(), &rhs));
}

#[test]
fn null_arrays() {
    assert!(equal(
        &NullArray::new(DataType::Null, 2),
        &NullArray::new(DataType::Null, 2)
    ));
    assert!(!equal(
        &NullArray::new(DataType::Null, 2),
        &NullArray::new(DataType::Null, 3)
    ));
}

#[test]
fn utf8() {
    let lhs = Utf8Array::<i32>::from_iter([Some("a"), None]);
    let rhs = Utf8Array::<i32>::from_iter([Some("a"), None]);
    assert!(equal(&lhs, &rhs));

    let rhs = Utf8Array::<i32>::from_iter([Some("b"), None]);
    assert!(!equal(&lhs, &rhs));
}

#[test]
fn list() {
    let make = |last: i32| {
        let values = PrimitiveArray::<i32>::from_slice([1, 2, last]);
        let offsets = OffsetsBuffer::try_from(vec![0i32, 2, 3]).unwrap();
        ListArray::try_new(
            ListArray::<i32>::default_datatype(DataType::Int32),
            offsets,
            Box::new(values),
            None,
        )
        .unwrap()
    };
    assert!(equal(&make(3), &make(3)));
    assert!(!equal(&make(3), &make(4)));
}

#[test]
fn boxed_equality() {
    let lhs: Box<dyn Array> = Box::new(BooleanArray::from(vec![true, false]));
    let rhs: Box<dyn Array> = Box::new(BooleanArray::from(vec![true, false]));
    assert!(lhs.as_ref() == rhs.as_ref());
    let rhs: Box<dyn Array> = Box::new(BooleanArray::from(vec![false, false]));
    assert!(lhs.as_ref() != rhs.as_ref());
}
