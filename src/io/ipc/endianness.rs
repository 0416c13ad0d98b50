/// Whether the host is little endian.
#[inline]
pub fn is_native_little_endian() -> bool {
    cfg!(target_endian = "little")
}
