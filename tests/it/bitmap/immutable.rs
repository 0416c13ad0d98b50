use arrowlet::bitmap::Bitmap;
use arrowlet::error::Error;
use proptest::prelude::*;

#[test]
fn new_is_empty() {
    let bitmap = Bitmap::new();
    assert_eq!(bitmap.len(), 0);
    assert!(bitmap.is_empty());
    assert_eq!(bitmap.unset_bits(), 0);
}

#[test]
fn try_new() {
    let bitmap = Bitmap::try_new(vec![0b00001101], 5).unwrap();
    assert_eq!(bitmap.len(), 5);
    assert_eq!(bitmap.unset_bits(), 2);
    assert_eq!(bitmap.set_bits(), 3);
    assert_eq!(
        bitmap.iter().collect::<Vec<_>>(),
        vec![true, false, true, true, false]
    );
}

#[test]
fn try_new_length_exceeding_bytes_errors() {
    assert!(matches!(
        Bitmap::try_new(vec![0b00001101], 9),
        Err(Error::OutOfSpec(_))
    ));
    // exactly 8 bits fit in one byte
    assert!(Bitmap::try_new(vec![0b00001101], 8).is_ok());
}

#[test]
fn new_zeroed() {
    let bitmap = Bitmap::new_zeroed(10);
    assert_eq!(bitmap.len(), 10);
    assert_eq!(bitmap.unset_bits(), 10);
    assert!(bitmap.iter().all(|bit| !bit));
}

#[test]
fn get_bit() {
    let bitmap = Bitmap::from([true, false, true]);
    assert!(bitmap.get_bit(0));
    assert!(!bitmap.get_bit(1));
    assert!(bitmap.get_bit(2));
}

#[test]
#[should_panic]
fn get_bit_out_of_bounds_panics() {
    let bitmap = Bitmap::from([true, false]);
    let _ = bitmap.get_bit(2);
}

#[test]
fn sliced_adjusts_unset_bits() {
    let bitmap = Bitmap::try_new(vec![0b11010101], 8).unwrap();
    assert_eq!(bitmap.unset_bits(), 3);

    // discards one unset bit at the head
    let sliced = bitmap.clone().sliced(2, 6);
    assert_eq!(sliced.len(), 6);
    assert_eq!(sliced.unset_bits(), 2);

    // a short slice triggers the direct recount path
    let sliced = bitmap.sliced(1, 2);
    assert_eq!(sliced.iter().collect::<Vec<_>>(), vec![false, true]);
    assert_eq!(sliced.unset_bits(), 1);
}

#[test]
fn sliced_across_byte_boundary() {
    let bitmap = Bitmap::try_new(vec![0b11111111, 0b00000001], 16).unwrap();
    let sliced = bitmap.sliced(6, 4);
    assert_eq!(
        sliced.iter().collect::<Vec<_>>(),
        vec![true, true, true, false]
    );
}

#[test]
fn as_slice_truncates() {
    let bitmap = Bitmap::try_new(vec![0b11111111, 0b00000001], 16).unwrap();
    let (bytes, offset, length) = bitmap.as_slice();
    assert_eq!(bytes.len(), 2);
    assert_eq!(offset, 0);
    assert_eq!(length, 16);

    let bitmap = Bitmap::try_new(vec![0b11111111, 0b00000001], 16).unwrap().sliced(2, 5);
    let (bytes, offset, length) = bitmap.as_slice();
    assert_eq!(bytes, &[0b11111111]);
    assert_eq!(offset, 2);
    assert_eq!(length, 5);
}

#[test]
fn equality_is_positional() {
    let lhs = Bitmap::try_new(vec![0b00001011], 4).unwrap();
    let rhs = Bitmap::from([true, true, false, true]);
    assert_eq!(lhs, rhs);

    let sliced = rhs.sliced(1, 2);
    assert_eq!(sliced, Bitmap::from([true, false]));
}

#[test]
fn into_inner() {
    let bitmap = Bitmap::from([true, false, true]);
    let (bytes, offset, length, unset_bits) = bitmap.into_inner();
    assert_eq!(bytes.as_slice(), &[0b00000101]);
    assert_eq!(offset, 0);
    assert_eq!(length, 3);
    assert_eq!(unset_bits, 1);
}

#[test]
fn from_iter() {
    let bitmap = (0..10).map(|i| i % 3 == 0).collect::<Bitmap>();
    assert_eq!(bitmap.len(), 10);
    assert_eq!(bitmap.set_bits(), 4);
}

proptest! {
    /// the cached `unset_bits` always agrees with a bit-by-bit recount,
    /// through arbitrary slicing
    #[test]
    #[cfg_attr(miri, ignore)] // miri and proptest do not work well :(
    fn sliced_unset_bits_agrees_with_recount(
        bytes in proptest::collection::vec(any::<u8>(), 1..20),
        start in 0usize..50,
        len in 0usize..100,
    ) {
        let length = bytes.len() * 8;
        let bitmap = Bitmap::try_new(bytes, length).unwrap();
        let start = start.min(length);
        let len = len.min(length - start);

        let sliced = bitmap.sliced(start, len);
        let expected = sliced.iter().filter(|bit| !bit).count();
        prop_assert_eq!(sliced.unset_bits(), expected);
    }
}
