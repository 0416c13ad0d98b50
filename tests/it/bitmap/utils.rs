use arrowlet::bitmap::utils::{bytes_for, count_zeros, get_bit, set_bit, ZipValidity};
use arrowlet::bitmap::Bitmap;
use proptest::prelude::*;

#[test]
fn bytes_for_rounds_up() {
    assert_eq!(bytes_for(0), 0);
    assert_eq!(bytes_for(1), 1);
    assert_eq!(bytes_for(8), 1);
    assert_eq!(bytes_for(9), 2);
    assert_eq!(bytes_for(64), 8);
}

#[test]
fn get_bit_is_lsb_first() {
    let bytes = [0b00000001u8, 0b10000000];
    assert!(get_bit(&bytes, 0));
    assert!(!get_bit(&bytes, 1));
    assert!(!get_bit(&bytes, 8));
    assert!(get_bit(&bytes, 15));
}

#[test]
fn set_bit_round_trips() {
    let mut bytes = [0u8; 2];
    set_bit(&mut bytes, 3, true);
    set_bit(&mut bytes, 12, true);
    assert_eq!(bytes, [0b00001000, 0b00010000]);
    set_bit(&mut bytes, 3, false);
    assert_eq!(bytes, [0b00000000, 0b00010000]);
}

#[test]
fn count_zeros_basics() {
    assert_eq!(count_zeros(&[], 0, 0), 0);
    assert_eq!(count_zeros(&[0b11111111], 0, 8), 0);
    assert_eq!(count_zeros(&[0b00000000], 0, 8), 8);
    assert_eq!(count_zeros(&[0b00001101], 0, 5), 2);
    // offset within a byte: bits {0, 1, 1, 0}
    assert_eq!(count_zeros(&[0b00001101], 1, 4), 2);
    // offset across bytes
    assert_eq!(count_zeros(&[0b11111111, 0b00000000], 4, 8), 4);
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)] // miri and proptest do not work well :(
    fn count_zeros_agrees_with_naive(
        bytes in proptest::collection::vec(any::<u8>(), 0..20),
        offset in 0usize..40,
        len in 0usize..120,
    ) {
        let total = bytes.len() * 8;
        let offset = offset.min(total);
        let len = len.min(total - offset);

        let naive = (offset..offset + len)
            .filter(|i| !get_bit(&bytes, *i))
            .count();
        prop_assert_eq!(count_zeros(&bytes, offset, len), naive);
    }
}

#[test]
fn zip_validity_with_nulls() {
    let validity = Bitmap::from([true, false, true]);
    let iter = ZipValidity::new_with_validity([1, 2, 3].into_iter(), Some(&validity));
    assert_eq!(iter.collect::<Vec<_>>(), vec![Some(1), None, Some(3)]);

    let iter = ZipValidity::new_with_validity([1, 2, 3].into_iter(), Some(&validity));
    let zipped = iter.unwrap_optional();
    assert_eq!(zipped.collect::<Vec<_>>(), vec![Some(1), None, Some(3)]);
}

#[test]
fn zip_validity_without_nulls() {
    let iter =
        ZipValidity::<i32, _, arrowlet::bitmap::BitmapIter>::new_with_validity([1, 2].into_iter(), None);
    assert_eq!(iter.collect::<Vec<_>>(), vec![Some(1), Some(2)]);
}

#[test]
fn zip_validity_all_set_skips_validity() {
    // a fully-set validity is equivalent to no validity
    let validity = Bitmap::from([true, true]);
    let iter = ZipValidity::new_with_validity([1, 2].into_iter(), Some(&validity));
    assert_eq!(iter.unwrap_required().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn zip_validity_is_double_ended() {
    let validity = Bitmap::from([true, false, true, false]);
    let mut iter = ZipValidity::new_with_validity([1, 2, 3, 4].into_iter(), Some(&validity));
    assert_eq!(iter.next_back(), Some(None));
    assert_eq!(iter.next(), Some(Some(1)));
    assert_eq!(iter.next_back(), Some(Some(3)));
    assert_eq!(iter.next(), Some(None));
    assert_eq!(iter.next(), None);
}
