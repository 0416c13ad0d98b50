use arrowlet::array::{Array, BooleanArray, PrimitiveArray};
use arrowlet::chunk::Chunk;
use arrowlet::error::Error;

#[test]
fn try_new() {
    let chunk = Chunk::try_new(vec![
        Box::new(PrimitiveArray::<i32>::from_slice([1, 2])) as Box<dyn Array>,
        Box::new(BooleanArray::from(vec![true, false])),
    ])
    .unwrap();
    assert_eq!(chunk.len(), 2);
    assert_eq!(chunk.arrays().len(), 2);
    assert_eq!(chunk.columns().len(), 2);
    assert!(!chunk.is_empty());
}

#[test]
fn try_new_unequal_lengths_errors() {
    let result = Chunk::try_new(vec![
        Box::new(PrimitiveArray::<i32>::from_slice([1, 2])) as Box<dyn Array>,
        Box::new(BooleanArray::from(vec![true])),
    ]);
    assert!(matches!(result, Err(Error::InvalidArgumentError(_))));
}

#[test]
fn empty_chunk() {
    let chunk = Chunk::<Box<dyn Array>>::new(vec![]);
    assert_eq!(chunk.len(), 0);
    assert!(chunk.is_empty());
}

#[test]
fn into_arrays() {
    let chunk = Chunk::new(vec![
        Box::new(PrimitiveArray::<i32>::from_slice([1])) as Box<dyn Array>
    ]);
    let arrays = chunk.into_arrays();
    assert_eq!(arrays.len(), 1);
}

#[test]
fn deref() {
    let chunk = Chunk::new(vec![
        Box::new(PrimitiveArray::<i32>::from_slice([1])) as Box<dyn Array>
    ]);
    assert_eq!(chunk.iter().count(), 1);
}
