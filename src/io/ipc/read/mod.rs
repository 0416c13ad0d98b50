//! APIs to read Arrow's IPC file format.
//!
//! The two important structs here are [`FileMetadata`], the deserialized
//! footer of a file, and [`FileReader`], an iterator of [`Chunk`]s.
use std::collections::{BTreeMap, VecDeque};

use crate::array::Array;
use crate::error::{Error, Result};

mod array;
mod common;
mod deserialize;
mod file;
mod read_basic;
mod reader;
mod schema;

pub use common::read_record_batch;
pub use deserialize::read;
pub use file::{read_batch, read_file_metadata, FileMetadata};
pub use reader::FileReader;
pub use schema::deserialize_schema;

/// how dictionaries are tracked in this crate
pub type Dictionaries = BTreeMap<i64, Box<dyn Array>>;

/// the metadata version of an IPC message
pub type Version = arrow_format::ipc::MetadataVersion;

/// A field node of a record batch message: the length and null count of
/// one array in the batch, in pre-order.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    /// The number of slots of the array.
    pub length: i64,
    /// The number of null slots of the array.
    pub null_count: i64,
}

impl From<arrow_format::ipc::FieldNodeRef<'_>> for Node {
    fn from(node: arrow_format::ipc::FieldNodeRef<'_>) -> Self {
        Self {
            length: node.length(),
            null_count: node.null_count(),
        }
    }
}

/// A buffer descriptor of a record batch message: the region of the message
/// body holding one buffer of one array.
#[derive(Debug, Clone, Copy)]
pub struct IpcBuffer {
    /// The offset of the buffer in the message body, in bytes.
    pub offset: i64,
    /// The length of the buffer, in bytes.
    pub length: i64,
}

impl From<arrow_format::ipc::BufferRef<'_>> for IpcBuffer {
    fn from(buffer: arrow_format::ipc::BufferRef<'_>) -> Self {
        Self {
            offset: buffer.offset(),
            length: buffer.length(),
        }
    }
}

/// The location of a message in the file: an offset from the start of the
/// file, the length of its metadata and the length of its body.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    /// The offset of the message from the start of the file, in bytes.
    pub offset: i64,
    /// The length of the message metadata (header, length prefix and padding), in bytes.
    pub meta_data_length: i32,
    /// The length of the message body, in bytes.
    pub body_length: i64,
}

impl From<arrow_format::ipc::BlockRef<'_>> for Block {
    fn from(block: arrow_format::ipc::BlockRef<'_>) -> Self {
        Self {
            offset: block.offset(),
            meta_data_length: block.meta_data_length(),
            body_length: block.body_length(),
        }
    }
}

/// The compression of the message body, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// LZ4 (framed)
    Lz4,
    /// ZSTD
    Zstd,
}

impl TryFrom<arrow_format::ipc::BodyCompressionRef<'_>> for Compression {
    type Error = Error;

    fn try_from(compression: arrow_format::ipc::BodyCompressionRef<'_>) -> Result<Self> {
        let codec = compression
            .codec()
            .map_err(|err| Error::oos(format!("the compression codec is invalid: {err:?}")))?;
        match codec {
            arrow_format::ipc::CompressionType::Lz4Frame => Ok(Self::Lz4),
            arrow_format::ipc::CompressionType::Zstd => Ok(Self::Zstd),
        }
    }
}

fn try_get_field_node(
    field_nodes: &mut VecDeque<Node>,
    data_type: &crate::datatypes::DataType,
) -> Result<Node> {
    field_nodes.pop_front().ok_or_else(|| {
        Error::oos(format!(
            "IPC: unable to fetch the field for {data_type:?}. The file or stream is corrupted."
        ))
    })
}

fn try_get_array_length(field_node: Node) -> Result<usize> {
    field_node
        .length
        .try_into()
        .map_err(|_| Error::oos("the length of a field node must be a positive integer"))
}
