use arrowlet::array::{Array, ListArray, PrimitiveArray};
use arrowlet::bitmap::Bitmap;
use arrowlet::datatypes::{DataType, Field};
use arrowlet::error::Error;
use arrowlet::offset::OffsetsBuffer;

fn sample() -> ListArray<i32> {
    // [[1, 2], None, [], [3]]
    let values = PrimitiveArray::<i32>::from_slice([1, 2, 3]);
    let offsets = OffsetsBuffer::try_from(vec![0i32, 2, 2, 2, 3]).unwrap();
    let validity = Some(Bitmap::from([true, false, true, true]));
    ListArray::try_new(
        ListArray::<i32>::default_datatype(DataType::Int32),
        offsets,
        Box::new(values),
        validity,
    )
    .unwrap()
}

#[test]
fn basics() {
    let array = sample();
    assert_eq!(array.len(), 4);
    assert_eq!(array.null_count(), 1);

    let first = array.value(0);
    let first = first
        .as_any()
        .downcast_ref::<PrimitiveArray<i32>>()
        .unwrap();
    assert_eq!(first.values().as_slice(), &[1, 2]);

    assert!(array.value(2).is_empty());
    assert_eq!(array.get(1), None);
    assert!(array.get(3).is_some());
}

#[test]
fn iter() {
    let array = sample();
    let lengths: Vec<Option<usize>> = array
        .iter()
        .map(|slot| slot.map(|values| values.len()))
        .collect();
    assert_eq!(lengths, vec![Some(2), None, Some(0), Some(1)]);
}

#[test]
fn slice() {
    let mut array = sample();
    array.slice(1, 3);
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 1);
    let last = array.value(2);
    let last = last
        .as_any()
        .downcast_ref::<PrimitiveArray<i32>>()
        .unwrap();
    assert_eq!(last.values().as_slice(), &[3]);
}

#[test]
fn try_new_wrong_child_type_errors() {
    let values = PrimitiveArray::<i64>::from_slice([1]);
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1]).unwrap();
    assert!(matches!(
        ListArray::<i32>::try_new(
            ListArray::<i32>::default_datatype(DataType::Int32),
            offsets,
            Box::new(values),
            None,
        ),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_offsets_exceeding_child_errors() {
    let values = PrimitiveArray::<i32>::from_slice([1]);
    let offsets = OffsetsBuffer::try_from(vec![0i32, 2]).unwrap();
    assert!(matches!(
        ListArray::<i32>::try_new(
            ListArray::<i32>::default_datatype(DataType::Int32),
            offsets,
            Box::new(values),
            None,
        ),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_validity_length_mismatch_errors() {
    let values = PrimitiveArray::<i32>::from_slice([1]);
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1]).unwrap();
    let validity = Some(Bitmap::from([true, false]));
    assert!(matches!(
        ListArray::<i32>::try_new(
            ListArray::<i32>::default_datatype(DataType::Int32),
            offsets,
            Box::new(values),
            validity,
        ),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_non_list_data_type_errors() {
    let values = PrimitiveArray::<i32>::from_slice([1]);
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1]).unwrap();
    assert!(ListArray::<i32>::try_new(DataType::Int32, offsets, Box::new(values), None).is_err());
}

#[test]
fn new_empty() {
    let data_type = ListArray::<i64>::default_datatype(DataType::Utf8);
    let array = ListArray::<i64>::new_empty(data_type.clone());
    assert!(array.is_empty());
    assert_eq!(array.data_type(), &data_type);
    assert!(array.values().is_empty());
}

#[test]
fn child_accessors() {
    let data_type = ListArray::<i32>::default_datatype(DataType::Boolean);
    let field = ListArray::<i32>::try_get_child(&data_type).unwrap();
    assert_eq!(field, &Field::new("item", DataType::Boolean, true));
    assert_eq!(
        ListArray::<i32>::get_child_type(&data_type),
        &DataType::Boolean
    );
}
