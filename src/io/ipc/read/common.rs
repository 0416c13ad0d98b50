use std::collections::VecDeque;
use std::io::{Read, Seek};

use super::deserialize::read;
use super::{Compression, Dictionaries, IpcBuffer, Node, Version};
use crate::array::Array;
use crate::chunk::Chunk;
use crate::datatypes::Field;
use crate::error::{Error, Result};
use crate::io::ipc::IpcSchema;

/// Reads a record batch message into a [`Chunk`].
///
/// The field nodes and buffer descriptors of the message are drained into
/// queues and consumed in pre-order, one array at a time.
#[allow(clippy::too_many_arguments)]
pub fn read_record_batch<R: Read + Seek>(
    batch: arrow_format::ipc::RecordBatchRef,
    fields: &[Field],
    ipc_schema: &IpcSchema,
    projection: Option<&[usize]>,
    dictionaries: &Dictionaries,
    version: Version,
    reader: &mut R,
    block_offset: u64,
) -> Result<Chunk<Box<dyn Array>>> {
    if fields.len() != ipc_schema.fields.len() {
        return Err(Error::oos(
            "the number of fields of the schema does not match the number of IPC fields",
        ));
    }
    if projection.is_some() {
        return Err(Error::nyi("reading a projected subset of columns"));
    }
    if !dictionaries.is_empty() {
        return Err(Error::nyi("reading dictionary-encoded record batches"));
    }

    let buffers = batch
        .buffers()
        .map_err(|err| Error::oos(format!("the record batch's buffers are invalid: {err:?}")))?
        .ok_or_else(|| Error::oos("the record batch must contain buffers"))?;
    let mut buffers: VecDeque<IpcBuffer> = buffers.iter().map(IpcBuffer::from).collect();

    if buffers.iter().any(|buffer| buffer.length < 0) {
        return Err(Error::oos("a buffer's length must be a positive integer"));
    }

    let field_nodes = batch
        .nodes()
        .map_err(|err| Error::oos(format!("the record batch's nodes are invalid: {err:?}")))?
        .ok_or_else(|| Error::oos("the record batch must contain field nodes"))?;
    let mut field_nodes: VecDeque<Node> = field_nodes.iter().map(Node::from).collect();

    let compression = batch
        .compression()
        .map_err(|err| Error::oos(format!("the record batch's compression is invalid: {err:?}")))?
        .map(Compression::try_from)
        .transpose()?;

    read_chunk(
        &mut field_nodes,
        &mut buffers,
        fields,
        ipc_schema.is_little_endian,
        compression,
        version,
        reader,
        block_offset,
    )
}

/// Reads one [`Array`] per field out of already-populated queues.
#[allow(clippy::too_many_arguments)]
pub(crate) fn read_chunk<R: Read + Seek>(
    field_nodes: &mut VecDeque<Node>,
    buffers: &mut VecDeque<IpcBuffer>,
    fields: &[Field],
    is_little_endian: bool,
    compression: Option<Compression>,
    version: Version,
    reader: &mut R,
    block_offset: u64,
) -> Result<Chunk<Box<dyn Array>>> {
    let columns = fields
        .iter()
        .map(|field| {
            read(
                field_nodes,
                field.data_type().clone(),
                buffers,
                reader,
                block_offset,
                is_little_endian,
                compression,
                version,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Chunk::try_new(columns)
}
