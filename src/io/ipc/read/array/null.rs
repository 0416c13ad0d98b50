use std::collections::VecDeque;

use super::super::{try_get_array_length, try_get_field_node, Node};
use crate::array::NullArray;
use crate::datatypes::DataType;
use crate::error::Result;

pub fn read_null(field_nodes: &mut VecDeque<Node>, data_type: DataType) -> Result<NullArray> {
    let field_node = try_get_field_node(field_nodes, &data_type)?;

    let length = try_get_array_length(field_node)?;

    NullArray::try_new(data_type, length)
}
