use std::collections::VecDeque;
use std::io::{Read, Seek};

use super::super::deserialize::read;
use super::super::read_basic::*;
use super::super::{
    try_get_array_length, try_get_field_node, Compression, IpcBuffer, Node, Version,
};
use crate::array::ListArray;
use crate::buffer::Buffer;
use crate::datatypes::DataType;
use crate::error::Result;
use crate::offset::Offset;

#[allow(clippy::too_many_arguments)]
pub fn read_list<O: Offset, R: Read + Seek>(
    field_nodes: &mut VecDeque<Node>,
    data_type: DataType,
    buffers: &mut VecDeque<IpcBuffer>,
    reader: &mut R,
    block_offset: u64,
    is_little_endian: bool,
    compression: Option<Compression>,
    version: Version,
) -> Result<ListArray<O>> {
    let field_node = try_get_field_node(field_nodes, &data_type)?;

    let validity = read_validity(
        buffers,
        field_node,
        reader,
        block_offset,
        is_little_endian,
        compression,
    )?;

    let length = try_get_array_length(field_node)?;

    let offsets: Buffer<O> = read_buffer(
        buffers,
        1 + length,
        reader,
        block_offset,
        is_little_endian,
        compression,
    )?;

    let field = ListArray::<O>::try_get_child(&data_type)?;

    let values = read(
        field_nodes,
        field.data_type().clone(),
        buffers,
        reader,
        block_offset,
        is_little_endian,
        compression,
        version,
    )?;
    ListArray::try_new(data_type, offsets.try_into()?, values, validity)
}
