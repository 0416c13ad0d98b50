mod boolean;
mod equal;
mod list;
mod primitive;
mod utf8;

use arrowlet::array::{new_empty_array, Array, BooleanArray, ListArray, PrimitiveArray, Utf8Array};
use arrowlet::datatypes::{DataType, Field};

#[test]
fn new_empty_array_covers_physical_types() {
    let cases = [
        DataType::Null,
        DataType::Boolean,
        DataType::Int8,
        DataType::UInt32,
        DataType::Float64,
        DataType::Utf8,
        DataType::LargeUtf8,
        DataType::List(Box::new(Field::new("item", DataType::Int32, true))),
        DataType::LargeList(Box::new(Field::new("item", DataType::Utf8, true))),
    ];
    for data_type in cases {
        let array = new_empty_array(data_type.clone());
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.data_type(), &data_type);
        assert_eq!(array.null_count(), 0);
    }
}

#[test]
fn new_empty_array_downcasts() {
    let array = new_empty_array(DataType::Float32);
    assert!(array.as_any().downcast_ref::<PrimitiveArray<f32>>().is_some());
    let array = new_empty_array(DataType::Boolean);
    assert!(array.as_any().downcast_ref::<BooleanArray>().is_some());
    let array = new_empty_array(DataType::LargeUtf8);
    assert!(array.as_any().downcast_ref::<Utf8Array<i64>>().is_some());
    let array = new_empty_array(DataType::LargeList(Box::new(Field::new(
        "item",
        DataType::Int64,
        true,
    ))));
    assert!(array.as_any().downcast_ref::<ListArray<i64>>().is_some());
}

#[test]
fn boxed_clone_preserves_contents() {
    let array: Box<dyn Array> =
        Box::new(PrimitiveArray::<i32>::from_iter([Some(1), None, Some(3)]));
    let cloned = array.clone();
    assert_eq!(cloned.len(), 3);
    assert_eq!(cloned.null_count(), 1);
    assert_eq!(cloned.as_ref(), array.as_ref());
}

#[test]
fn sliced_boxed() {
    let array: Box<dyn Array> = Box::new(PrimitiveArray::<i32>::from_slice([1, 2, 3, 4]));
    let sliced = array.sliced(1, 2);
    let sliced = sliced
        .as_any()
        .downcast_ref::<PrimitiveArray<i32>>()
        .unwrap();
    assert_eq!(sliced.values().as_slice(), &[2, 3]);
}

#[test]
fn debug_dyn_array() {
    let array: Box<dyn Array> = Box::new(PrimitiveArray::<i32>::from_iter([Some(1), None]));
    let repr = format!("{:?}", array.as_ref());
    assert!(repr.contains("len = 2"), "{repr}");
}
