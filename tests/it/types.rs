use arrowlet::types::{f16, NativeType};

#[test]
fn f16_round_trips_f32() {
    for value in [0.0f32, 1.0, -1.0, 0.5, 2.0, 65504.0, -65504.0] {
        assert_eq!(f16::from_f32(value).to_f32(), value);
    }
}

#[test]
fn f16_specials() {
    assert_eq!(f16::from_f32(f32::INFINITY).to_f32(), f32::INFINITY);
    assert_eq!(f16::from_f32(f32::NEG_INFINITY).to_f32(), f32::NEG_INFINITY);
    assert!(f16::from_f32(f32::NAN).is_nan());
    assert!(!f16::from_f32(1.0).is_nan());
}

#[test]
fn f16_overflow_saturates_to_infinity() {
    assert_eq!(f16::from_f32(1e10).to_f32(), f32::INFINITY);
    assert_eq!(f16::from_f32(-1e10).to_f32(), f32::NEG_INFINITY);
}

#[test]
fn f16_subnormals() {
    // the smallest positive subnormal f16
    let smallest = f16::from_f32(5.96e-8);
    assert!(smallest.to_f32() > 0.0);
    // anything below half of it flushes to zero
    assert_eq!(f16::from_f32(1e-9).to_f32(), 0.0);
}

#[test]
fn native_byte_round_trips() {
    assert_eq!(u32::from_le_bytes(0xdeadbeefu32.to_le_bytes()), 0xdeadbeef);
    assert_eq!(i64::from_be_bytes((-42i64).to_be_bytes()), -42);
    let value = f16::from_f32(1.5);
    assert_eq!(f16::from_le_bytes(value.to_le_bytes()), value);
    assert_eq!(f16::from_be_bytes(value.to_be_bytes()), value);
}
