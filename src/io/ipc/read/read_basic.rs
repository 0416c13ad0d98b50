use std::collections::VecDeque;
use std::io::{Read, Seek, SeekFrom};

use super::super::endianness::is_native_little_endian;
use super::{Compression, IpcBuffer, Node};
use crate::bitmap::Bitmap;
use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::types::NativeType;

fn read_swapped<T: NativeType, R: Read + Seek>(
    reader: &mut R,
    length: usize,
    buffer: &mut Vec<T>,
    is_little_endian: bool,
) -> Result<()> {
    // slow case where we must reverse bits
    let mut slice = vec![0u8; length * std::mem::size_of::<T>()];
    reader.read_exact(&mut slice)?;

    let chunks = slice.chunks_exact(std::mem::size_of::<T>());
    if !is_little_endian {
        // machine is little endian, file is big endian
        buffer
            .as_mut_slice()
            .iter_mut()
            .zip(chunks)
            .for_each(|(slot, chunk)| {
                let a: T::Bytes = match chunk.try_into() {
                    Ok(a) => a,
                    Err(_) => unreachable!(),
                };
                *slot = T::from_be_bytes(a);
            });
    } else {
        // machine is big endian, file is little endian
        return Err(Error::nyi(
            "reading little endian files from big endian machines",
        ));
    }
    Ok(())
}

fn read_uncompressed_buffer<T: NativeType, R: Read + Seek>(
    reader: &mut R,
    buffer_length: usize,
    length: usize,
    is_little_endian: bool,
) -> Result<Vec<T>> {
    let required_number_of_bytes = length.saturating_mul(std::mem::size_of::<T>());
    if required_number_of_bytes > buffer_length {
        return Err(Error::oos(format!(
            "a buffer declares {buffer_length} bytes, smaller than the {required_number_of_bytes} bytes required by {length} slots of {}",
            std::any::type_name::<T>()
        )));
    }

    // it is undefined behavior to call read_exact on un-initialized, https://doc.rust-lang.org/std/io/trait.Read.html#tymethod.read
    let mut buffer = vec![T::default(); length];

    if is_native_little_endian() == is_little_endian {
        // fast case where we can just copy the contents
        let slice = bytemuck::cast_slice_mut(&mut buffer);
        reader.read_exact(slice)?;
    } else {
        read_swapped(reader, length, &mut buffer, is_little_endian)?;
    }
    Ok(buffer)
}

/// Reads the next [`IpcBuffer`] of the queue as a [`Buffer`] of `length` slots
/// of `T`.
pub fn read_buffer<T: NativeType, R: Read + Seek>(
    buf: &mut VecDeque<IpcBuffer>,
    length: usize, // in slots
    reader: &mut R,
    block_offset: u64,
    is_little_endian: bool,
    compression: Option<Compression>,
) -> Result<Buffer<T>> {
    let buf = buf
        .pop_front()
        .ok_or_else(|| Error::oos("IPC: unable to fetch a buffer. The file is corrupted."))?;

    let offset: u64 = buf
        .offset
        .try_into()
        .map_err(|_| Error::oos("each buffer's offset must be a positive integer"))?;

    let buffer_length: usize = buf
        .length
        .try_into()
        .map_err(|_| Error::oos("each buffer's length must be a positive integer"))?;

    reader.seek(SeekFrom::Start(block_offset + offset))?;

    if compression.is_some() {
        Err(Error::nyi("decompressing a compressed IPC file"))
    } else {
        Ok(read_uncompressed_buffer(reader, buffer_length, length, is_little_endian)?.into())
    }
}

fn read_uncompressed_bitmap<R: Read + Seek>(
    length: usize,
    bytes: usize,
    reader: &mut R,
) -> Result<Vec<u8>> {
    if length > bytes * 8 {
        return Err(Error::oos(format!(
            "a bitmap's length ({length}) exceeds the number of bits in its buffer ({})",
            bytes * 8
        )));
    }

    let mut buffer = Vec::with_capacity(bytes);
    reader.by_ref().take(bytes as u64).read_to_end(&mut buffer)?;

    Ok(buffer)
}

/// Reads the next [`IpcBuffer`] of the queue as a [`Bitmap`] of `length` bits.
pub fn read_bitmap<R: Read + Seek>(
    buf: &mut VecDeque<IpcBuffer>,
    length: usize,
    reader: &mut R,
    block_offset: u64,
    _: bool,
    compression: Option<Compression>,
) -> Result<Bitmap> {
    let buf = buf
        .pop_front()
        .ok_or_else(|| Error::oos("IPC: unable to fetch a buffer. The file is corrupted."))?;

    let offset: u64 = buf
        .offset
        .try_into()
        .map_err(|_| Error::oos("each buffer's offset must be a positive integer"))?;

    let bytes: usize = buf
        .length
        .try_into()
        .map_err(|_| Error::oos("each buffer's length must be a positive integer"))?;

    reader.seek(SeekFrom::Start(block_offset + offset))?;

    let buffer = if compression.is_some() {
        return Err(Error::nyi("decompressing a compressed IPC file"));
    } else {
        read_uncompressed_bitmap(length, bytes, reader)?
    };

    Bitmap::try_new(buffer, length)
}

/// Reads the validity of a field node: `None` when the node declares no nulls,
/// otherwise the next [`IpcBuffer`] of the queue as a [`Bitmap`].
///
/// The buffer descriptor is consumed either way, as the format always writes one.
pub fn read_validity<R: Read + Seek>(
    buffers: &mut VecDeque<IpcBuffer>,
    field_node: Node,
    reader: &mut R,
    block_offset: u64,
    is_little_endian: bool,
    compression: Option<Compression>,
) -> Result<Option<Bitmap>> {
    let length: usize = field_node
        .length
        .try_into()
        .map_err(|_| Error::oos("the length of a field node must be a positive integer"))?;

    Ok(if field_node.null_count > 0 {
        Some(read_bitmap(
            buffers,
            length,
            reader,
            block_offset,
            is_little_endian,
            compression,
        )?)
    } else {
        let _ = buffers
            .pop_front()
            .ok_or_else(|| Error::oos("IPC: unable to fetch a buffer. The file is corrupted."))?;
        None
    })
}
