use arrowlet::array::{Array, Utf8Array};
use arrowlet::bitmap::Bitmap;
use arrowlet::buffer::Buffer;
use arrowlet::datatypes::DataType;
use arrowlet::error::Error;
use arrowlet::offset::OffsetsBuffer;

#[test]
fn basics() {
    let array = Utf8Array::<i32>::from_iter([Some("hello"), None, Some("")]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.null_count(), 1);
    assert_eq!(array.data_type(), &DataType::Utf8);
    assert_eq!(array.value(0), "hello");
    assert_eq!(array.value(2), "");
    assert_eq!(array.get(0), Some("hello"));
    assert_eq!(array.get(1), None);
    assert_eq!(
        array.iter().collect::<Vec<_>>(),
        vec![Some("hello"), None, Some("")]
    );
    assert_eq!(
        array.values_iter().collect::<Vec<_>>(),
        vec!["hello", "", ""]
    );
}

#[test]
fn into_inner() {
    let array = Utf8Array::<i32>::from_iter([Some("ab"), None]);
    let (data_type, offsets, values, validity) = array.into_inner();
    assert_eq!(data_type, DataType::Utf8);
    assert_eq!(offsets.last(), 2);
    assert_eq!(values.as_slice(), b"ab");
    assert!(validity.is_some());
}

#[test]
fn large_utf8() {
    let array = Utf8Array::<i64>::from_iter([Some("a"), Some("bc")]);
    assert_eq!(array.data_type(), &DataType::LargeUtf8);
    assert_eq!(array.offsets().last(), 3i64);
}

#[test]
fn try_new() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 2, 2, 5]).unwrap();
    let values = Buffer::from(b"abcde".to_vec());
    let array = Utf8Array::<i32>::try_new(DataType::Utf8, offsets, values, None).unwrap();
    assert_eq!(array.value(0), "ab");
    assert_eq!(array.value(1), "");
    assert_eq!(array.value(2), "cde");
}

#[test]
fn try_new_invalid_utf8_errors() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 2]).unwrap();
    let values = Buffer::from(vec![0xf0u8, 0x28]);
    assert!(matches!(
        Utf8Array::<i32>::try_new(DataType::Utf8, offsets, values, None),
        Err(Error::External(_, _))
    ));
}

#[test]
fn try_new_offset_splitting_code_point_errors() {
    // "é" is two bytes; an offset in the middle of it is invalid
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1, 2]).unwrap();
    let values = Buffer::from("é".as_bytes().to_vec());
    assert!(matches!(
        Utf8Array::<i32>::try_new(DataType::Utf8, offsets, values, None),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_offsets_exceeding_values_errors() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 10]).unwrap();
    let values = Buffer::from(b"ab".to_vec());
    assert!(matches!(
        Utf8Array::<i32>::try_new(DataType::Utf8, offsets, values, None),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_validity_length_mismatch_errors() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1, 2]).unwrap();
    let values = Buffer::from(b"ab".to_vec());
    let validity = Some(Bitmap::from([true]));
    assert!(matches!(
        Utf8Array::<i32>::try_new(DataType::Utf8, offsets, values, validity),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn try_new_wrong_data_type_errors() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 1]).unwrap();
    let values = Buffer::from(b"a".to_vec());
    assert!(matches!(
        Utf8Array::<i32>::try_new(DataType::LargeUtf8, offsets, values, None),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn slice() {
    let mut array = Utf8Array::<i32>::from_iter([Some("a"), None, Some("bc"), Some("d")]);
    array.slice(1, 2);
    assert_eq!(array.iter().collect::<Vec<_>>(), vec![None, Some("bc")]);
    // the values buffer is untouched by slicing
    assert_eq!(array.values().as_slice(), b"abcd");
}

#[test]
fn new_empty() {
    let array = Utf8Array::<i32>::new_empty(DataType::Utf8);
    assert!(array.is_empty());
    assert_eq!(array.offsets().len(), 1);
}
