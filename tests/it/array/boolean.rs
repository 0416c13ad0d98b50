use arrowlet::array::{Array, BooleanArray};
use arrowlet::bitmap::Bitmap;
use arrowlet::datatypes::DataType;
use arrowlet::error::Error;

#[test]
fn basics() {
    let array = BooleanArray::from_iter([Some(true), None, Some(false)]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 1);
    assert_eq!(array.data_type(), &DataType::Boolean);
    assert!(array.value(0));
    assert!(!array.value(2));
    assert_eq!(array.get(0), Some(true));
    assert_eq!(array.get(1), None);
    assert!(array.is_null(1));
    assert!(array.is_valid(2));
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(true), None, Some(false)]
    );
    assert_eq!(
        array.values_iter().collect::<Vec<_>>(),
        vec![true, false, false]
    );
}

#[test]
fn from_vec() {
    let array = BooleanArray::from(vec![true, false]);
    assert_eq!(array.null_count(), 0);
    assert_eq!(array.validity(), None);
}

#[test]
fn new_null() {
    let array = BooleanArray::new_null(DataType::Boolean, 3);
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 3);
    assert_eq!(array.iter().collect::<Vec<_>>(), vec![None, None, None]);
}

#[test]
fn try_new_validity_length_mismatch_errors() {
    let values = Bitmap::from([true, false, true]);
    let validity = Some(Bitmap::from([true, false]));
    assert!(matches!(
        BooleanArray::try_new(DataType::Boolean, values, validity),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_wrong_data_type_errors() {
    let values = Bitmap::from([true]);
    assert!(matches!(
        BooleanArray::try_new(DataType::Int32, values, None),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn slice() {
    let mut array = BooleanArray::from_iter([Some(true), None, Some(false), Some(true)]);
    array.slice(1, 2);
    assert_eq!(array.len(), 2);
    assert_eq!(array.iter().collect::<Vec<_>>(), vec![None, Some(false)]);
    assert_eq!(array.null_count(), 1);
}

#[test]
fn slice_drops_fully_valid_validity() {
    let array = BooleanArray::from_iter([None, Some(true), Some(false)]);
    let sliced = array.sliced(1, 2);
    let sliced = sliced.as_any().downcast_ref::<BooleanArray>().unwrap();
    assert_eq!(sliced.null_count(), 0);
    assert_eq!(sliced.validity(), None);
}

#[test]
fn into_iter() {
    let array = BooleanArray::from_iter([Some(true), None]);
    let collected: Vec<_> = (&array).into_iter().collect();
    assert_eq!(collected, vec![Some(true), None]);
}

#[test]
fn into_inner() {
    let array = BooleanArray::from_iter([Some(true), None]);
    let (data_type, values, validity) = array.into_inner();
    assert_eq!(data_type, DataType::Boolean);
    assert_eq!(values.len(), 2);
    assert!(validity.is_some());
}
