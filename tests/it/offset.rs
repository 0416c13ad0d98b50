use arrowlet::error::Error;
use arrowlet::offset::OffsetsBuffer;

#[test]
fn default_has_one_offset() {
    let offsets = OffsetsBuffer::<i32>::default();
    assert_eq!(offsets.len(), 1);
    assert_eq!(offsets.len_proxy(), 0);
    assert!(offsets.is_empty());
    assert_eq!(offsets.first(), 0);
    assert_eq!(offsets.last(), 0);
}

#[test]
fn try_from_vec() {
    let offsets = OffsetsBuffer::try_from(vec![0i32, 2, 2, 5]).unwrap();
    assert_eq!(offsets.len_proxy(), 3);
    assert_eq!(offsets.start_end(0), (0, 2));
    assert_eq!(offsets.start_end(1), (2, 2));
    assert_eq!(offsets.start_end(2), (2, 5));
    assert_eq!(offsets.length_at(1), 0);
    assert_eq!(offsets.length_at(2), 3);
}

#[test]
fn empty_vec_errors() {
    assert!(matches!(
        OffsetsBuffer::<i32>::try_from(vec![]),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn negative_first_offset_errors() {
    assert!(matches!(
        OffsetsBuffer::try_from(vec![-1i32, 2]),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn decreasing_offsets_error() {
    assert!(matches!(
        OffsetsBuffer::try_from(vec![0i32, 3, 2]),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn non_zero_first_offset_is_valid() {
    // sliced arrays have a non-zero first offset
    let offsets = OffsetsBuffer::try_from(vec![2i64, 3, 5]).unwrap();
    assert_eq!(offsets.first(), 2);
    assert_eq!(offsets.start_end(0), (2, 3));
}

#[test]
fn new_zeroed() {
    let offsets = OffsetsBuffer::<i32>::new_zeroed(3);
    assert_eq!(offsets.len_proxy(), 3);
    assert!(offsets.iter().all(|offset| *offset == 0));
}

#[test]
fn slice_keeps_an_offset() {
    let mut offsets = OffsetsBuffer::try_from(vec![0i32, 1, 3, 6]).unwrap();
    offsets.slice(1, 3);
    assert_eq!(offsets.len_proxy(), 2);
    assert_eq!(offsets.start_end(0), (1, 3));
}

#[test]
#[should_panic]
fn slice_to_zero_offsets_panics() {
    let mut offsets = OffsetsBuffer::try_from(vec![0i32, 1]).unwrap();
    offsets.slice(0, 0);
}
