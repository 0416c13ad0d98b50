use crate::error::{Error, Result};
use crate::offset::{Offset, OffsetsBuffer};

/// Checks that the last offset is no larger than `values_len`.
pub(crate) fn try_check_offsets_bounds<O: Offset>(
    offsets: &OffsetsBuffer<O>,
    values_len: usize,
) -> Result<()> {
    if offsets.last().to_usize() > values_len {
        Err(Error::oos("offsets must not exceed the values length"))
    } else {
        Ok(())
    }
}

/// Checks that `values` is a valid utf8 sequence and that every offset
/// lands on a character boundary.
pub(crate) fn try_check_utf8<O: Offset>(offsets: &OffsetsBuffer<O>, values: &[u8]) -> Result<()> {
    if offsets.len_proxy() == 0 {
        return Ok(());
    }
    try_check_offsets_bounds(offsets, values.len())?;

    if values.is_ascii() {
        return Ok(());
    }
    simdutf8::basic::from_utf8(values)?;

    // offsets slicing the values on a non-boundary would expose invalid substrings
    let last = offsets.last().to_usize();
    let any_invalid = offsets.buffer().iter().any(|offset| {
        let offset = offset.to_usize();
        if offset == last {
            false
        } else {
            // a continuation byte starts with 0b10
            (values[offset] & 0xC0) == 0x80
        }
    });
    if any_invalid {
        return Err(Error::oos("non-utf8 character found on a string boundary"));
    }
    Ok(())
}
