use arrowlet::array::{Array, PrimitiveArray};
use arrowlet::bitmap::Bitmap;
use arrowlet::datatypes::DataType;
use arrowlet::error::Error;
use arrowlet::types::f16;

#[test]
fn basics() {
    let array = PrimitiveArray::<i32>::from_iter([Some(1), None, Some(3)]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 1);
    assert_eq!(array.data_type(), &DataType::Int32);
    assert_eq!(array.value(0), 1);
    assert_eq!(array.get(1), None);
    assert_eq!(array.get(2), Some(3));
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some(&1), None, Some(&3)]
    );
}

#[test]
fn from_slice() {
    let array = PrimitiveArray::<u16>::from_slice([1, 2, 3]);
    assert_eq!(array.data_type(), &DataType::UInt16);
    assert_eq!(array.values().as_slice(), &[1, 2, 3]);
    assert_eq!(array.validity(), None);
}

#[test]
fn from_vec_infers_data_type() {
    assert_eq!(
        PrimitiveArray::<i64>::from_vec(vec![1]).data_type(),
        &DataType::Int64
    );
    assert_eq!(
        PrimitiveArray::<f32>::from_vec(vec![1.0]).data_type(),
        &DataType::Float32
    );
    assert_eq!(
        PrimitiveArray::<f16>::from_vec(vec![f16::from_f32(1.0)]).data_type(),
        &DataType::Float16
    );
}

#[test]
fn new_null() {
    let array = PrimitiveArray::<f64>::new_null(DataType::Float64, 2);
    assert_eq!(array.len(), 2);
    assert_eq!(array.null_count(), 2);
    assert_eq!(array.iter().collect::<Vec<_>>(), vec![None, None]);
}

#[test]
fn try_new_validity_length_mismatch_errors() {
    let validity = Some(Bitmap::from([true]));
    assert!(matches!(
        PrimitiveArray::<i32>::try_new(DataType::Int32, vec![1, 2].into(), validity),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_wrong_data_type_errors() {
    assert!(matches!(
        PrimitiveArray::<i32>::try_new(DataType::Int64, vec![1].into(), None),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_accepts_logical_types() {
    // an extension type maps to the physical type of its inner type
    let array = PrimitiveArray::<i32>::try_new(
        DataType::Extension("custom".to_string(), Box::new(DataType::Int32), None),
        vec![1, 2].into(),
        None,
    )
    .unwrap();
    assert_eq!(array.len(), 2);
}

#[test]
fn slice() {
    let mut array = PrimitiveArray::<i32>::from_iter([Some(1), None, Some(3), Some(4)]);
    array.slice(1, 3);
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![None, Some(&3), Some(&4)]
    );
    assert_eq!(array.null_count(), 1);
}

#[test]
#[should_panic]
fn slice_out_of_bounds_panics() {
    let mut array = PrimitiveArray::<i32>::from_slice([1, 2]);
    array.slice(1, 2);
}

#[test]
fn into_inner() {
    let array = PrimitiveArray::<i32>::from_slice([1, 2, 3]);
    let (data_type, values, validity) = array.into_inner();
    assert_eq!(data_type, DataType::Int32);
    assert_eq!(values.as_slice(), &[1, 2, 3]);
    assert!(validity.is_none());
}
