use std::collections::VecDeque;
use std::io::{Read, Seek};

use super::array::*;
use super::{Compression, IpcBuffer, Node, Version};
use crate::array::Array;
use crate::datatypes::{DataType, PhysicalType};
use crate::array::with_match_primitive_type;
use crate::error::{Error, Result};

/// Reads one [`Array`] of `data_type`, consuming its field nodes and buffer
/// descriptors from the queues in pre-order.
#[allow(clippy::too_many_arguments)]
pub fn read<R: Read + Seek>(
    field_nodes: &mut VecDeque<Node>,
    data_type: DataType,
    buffers: &mut VecDeque<IpcBuffer>,
    reader: &mut R,
    block_offset: u64,
    is_little_endian: bool,
    compression: Option<Compression>,
    version: Version,
) -> Result<Box<dyn Array>> {
    use PhysicalType::*;
    match data_type.to_physical_type() {
        Null => read_null(field_nodes, data_type).map(|array| Box::new(array) as Box<dyn Array>),
        Boolean => read_boolean(
            field_nodes,
            data_type,
            buffers,
            reader,
            block_offset,
            is_little_endian,
            compression,
        )
        .map(|array| Box::new(array) as Box<dyn Array>),
        Primitive(primitive) => with_match_primitive_type!(primitive, |$T| {
            read_primitive::<$T, _>(
                field_nodes,
                data_type,
                buffers,
                reader,
                block_offset,
                is_little_endian,
                compression,
            )
            .map(|array| Box::new(array) as Box<dyn Array>)
        }),
        Utf8 => read_utf8::<i32, _>(
            field_nodes,
            data_type,
            buffers,
            reader,
            block_offset,
            is_little_endian,
            compression,
        )
        .map(|array| Box::new(array) as Box<dyn Array>),
        LargeUtf8 => read_utf8::<i64, _>(
            field_nodes,
            data_type,
            buffers,
            reader,
            block_offset,
            is_little_endian,
            compression,
        )
        .map(|array| Box::new(array) as Box<dyn Array>),
        List => read_list::<i32, _>(
            field_nodes,
            data_type,
            buffers,
            reader,
            block_offset,
            is_little_endian,
            compression,
            version,
        )
        .map(|array| Box::new(array) as Box<dyn Array>),
        LargeList => read_list::<i64, _>(
            field_nodes,
            data_type,
            buffers,
            reader,
            block_offset,
            is_little_endian,
            compression,
            version,
        )
        .map(|array| Box::new(array) as Box<dyn Array>),
        Dictionary(_) => Err(Error::nyi(format!(
            "reading dictionary-encoded arrays of type {data_type:?}"
        ))),
    }
}
