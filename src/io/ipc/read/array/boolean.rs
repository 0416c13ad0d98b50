use std::collections::VecDeque;
use std::io::{Read, Seek};

use super::super::read_basic::*;
use super::super::{try_get_array_length, try_get_field_node, Compression, IpcBuffer, Node};
use crate::array::BooleanArray;
use crate::datatypes::DataType;
use crate::error::Result;

#[allow(clippy::too_many_arguments)]
pub fn read_boolean<R: Read + Seek>(
    field_nodes: &mut VecDeque<Node>,
    data_type: DataType,
    buffers: &mut VecDeque<IpcBuffer>,
    reader: &mut R,
    block_offset: u64,
    is_little_endian: bool,
    compression: Option<Compression>,
) -> Result<BooleanArray> {
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

    let values = read_bitmap(
        buffers,
        length,
        reader,
        block_offset,
        is_little_endian,
        compression,
    )?;
    BooleanArray::try_new(data_type, values, validity)
}
