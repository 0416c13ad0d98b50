use std::io::{Read, Seek, SeekFrom};

use arrow_format::ipc::planus::ReadAsRoot;

use super::super::{IpcSchema, ARROW_MAGIC, CONTINUATION_MARKER};
use super::common::read_record_batch;
use super::schema::fb_to_schema;
use super::{Block, Dictionaries};
use crate::array::Array;
use crate::chunk::Chunk;
use crate::datatypes::Schema;
use crate::error::{Error, Result};

/// Metadata of an Arrow IPC file, written in the footer of the file.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// The schema that is read from the file footer
    pub schema: Schema,

    /// The files' [`IpcSchema`]
    pub ipc_schema: IpcSchema,

    /// The blocks in the file
    ///
    /// A block indicates the regions in the file to read to deserialize data
    pub blocks: Vec<Block>,

    /// Dictionaries associated to each dict_id
    pub dictionaries: Option<Vec<Block>>,

    /// The total size of the file in bytes
    pub size: u64,
}

/// Reads the footer's length and magic number in footer
fn read_footer_len<R: Read + Seek>(reader: &mut R) -> Result<(u64, usize)> {
    // read footer length and magic number in footer
    let end = reader.seek(SeekFrom::End(-10))? + 10;

    let mut footer: [u8; 10] = [0; 10];

    reader.read_exact(&mut footer)?;
    let footer_len = i32::from_le_bytes(footer[..4].try_into().unwrap());

    if footer[4..] != ARROW_MAGIC {
        return Err(Error::oos("the file does not end with the arrow magic"));
    }
    let footer_len = footer_len
        .try_into()
        .map_err(|_| Error::oos("the footer's length must be a positive integer"))?;
    Ok((end, footer_len))
}

fn deserialize_footer_blocks(
    footer: arrow_format::ipc::FooterRef,
) -> Result<(Vec<Block>, Option<Vec<Block>>)> {
    let blocks = footer
        .record_batches()
        .map_err(|err| Error::oos(format!("the footer's record batches are invalid: {err:?}")))?
        .ok_or_else(|| Error::oos("the footer must contain record batches"))?;
    let blocks = blocks.iter().map(Block::from).collect::<Vec<_>>();

    let dictionaries = footer
        .dictionaries()
        .map_err(|err| Error::oos(format!("the footer's dictionaries are invalid: {err:?}")))?
        .map(|dictionaries| dictionaries.iter().map(Block::from).collect::<Vec<_>>());

    Ok((blocks, dictionaries))
}

pub(super) fn deserialize_footer(footer_data: &[u8], size: u64) -> Result<FileMetadata> {
    let footer = arrow_format::ipc::FooterRef::read_as_root(footer_data)
        .map_err(|err| Error::oos(format!("unable to deserialize the footer: {err:?}")))?;

    let (blocks, dictionaries) = deserialize_footer_blocks(footer)?;

    let ipc_schema = footer
        .schema()
        .map_err(|err| Error::oos(format!("the footer's schema is invalid: {err:?}")))?
        .ok_or_else(|| Error::oos("the footer must contain a schema"))?;
    let (schema, ipc_schema) = fb_to_schema(ipc_schema)?;

    Ok(FileMetadata {
        schema,
        ipc_schema,
        blocks,
        dictionaries,
        size,
    })
}

/// Reads the [`FileMetadata`] of a file: its footer, containing the schema and
/// the location of every message in the file.
pub fn read_file_metadata<R: Read + Seek>(reader: &mut R) -> Result<FileMetadata> {
    let file_size = reader.seek(SeekFrom::End(0))?;

    // ARROW_MAGIC at the start, a footer, its length and ARROW_MAGIC at the end
    if file_size < (2 * ARROW_MAGIC.len() + 4 + 4) as u64 {
        return Err(Error::oos(
            "the file is too small to contain a well-formed IPC file",
        ));
    }

    let mut magic = [0u8; 6];
    reader.seek(SeekFrom::Start(0))?;
    reader.read_exact(&mut magic)?;
    if magic != ARROW_MAGIC {
        return Err(Error::oos("the file does not start with the arrow magic"));
    }

    let (end, footer_len) = read_footer_len(reader)?;

    // the footer is immediately before the footer's length and the trailing magic
    let footer_offset = end
        .checked_sub(10 + footer_len as u64)
        .ok_or_else(|| Error::oos("the footer's length exceeds the file's length"))?;
    reader.seek(SeekFrom::Start(footer_offset))?;
    let mut serialized_footer = vec![0u8; footer_len];
    reader.read_exact(&mut serialized_footer)?;

    deserialize_footer(&serialized_footer, file_size)
}

pub(super) fn get_record_batch(
    message: arrow_format::ipc::MessageRef,
) -> Result<arrow_format::ipc::RecordBatchRef> {
    let header = message
        .header()
        .map_err(|err| Error::oos(format!("the message's header is invalid: {err:?}")))?
        .ok_or_else(|| Error::oos("the message must contain a header"))?;
    match header {
        arrow_format::ipc::MessageHeaderRef::RecordBatch(batch) => Ok(batch),
        _ => Err(Error::oos("the message's header must be a record batch")),
    }
}

/// Reads and parses the message at `offset`, skipping the continuation marker
/// if one is present.
fn get_message_from_block_offset<'a, R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    message_scratch: &'a mut Vec<u8>,
) -> Result<arrow_format::ipc::MessageRef<'a>> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut meta_buf = [0; 4];
    reader.read_exact(&mut meta_buf)?;
    if meta_buf == CONTINUATION_MARKER {
        // continuation marker encountered, read message next
        reader.read_exact(&mut meta_buf)?;
    }
    let meta_len: usize = i32::from_le_bytes(meta_buf)
        .try_into()
        .map_err(|_| Error::oos("the message's length must be a positive integer"))?;

    message_scratch.clear();
    message_scratch.try_reserve(meta_len).map_err(Error::from_external_error)?;
    reader
        .by_ref()
        .take(meta_len as u64)
        .read_to_end(message_scratch)?;

    arrow_format::ipc::MessageRef::read_as_root(message_scratch)
        .map_err(|err| Error::oos(format!("unable to deserialize the message: {err:?}")))
}

pub(super) fn get_message_from_block<'a, R: Read + Seek>(
    reader: &mut R,
    block: &Block,
    message_scratch: &'a mut Vec<u8>,
) -> Result<arrow_format::ipc::MessageRef<'a>> {
    let offset: u64 = block
        .offset
        .try_into()
        .map_err(|_| Error::oos("a block's offset must be a positive integer"))?;

    get_message_from_block_offset(reader, offset, message_scratch)
}

/// Reads the record batch at block `index` into a [`Chunk`].
#[allow(clippy::too_many_arguments)]
pub fn read_batch<R: Read + Seek>(
    reader: &mut R,
    dictionaries: &Dictionaries,
    metadata: &FileMetadata,
    projection: Option<&[usize]>,
    index: usize,
    message_scratch: &mut Vec<u8>,
) -> Result<Chunk<Box<dyn Array>>> {
    let block = *metadata
        .blocks
        .get(index)
        .ok_or_else(|| Error::oos(format!("the file does not contain a block at index {index}")))?;

    let offset: u64 = block
        .offset
        .try_into()
        .map_err(|_| Error::oos("a block's offset must be a positive integer"))?;

    let length: u64 = block
        .meta_data_length
        .try_into()
        .map_err(|_| Error::oos("a block's metadata length must be a positive integer"))?;

    let message = get_message_from_block_offset(reader, offset, message_scratch)?;
    let batch = get_record_batch(message)?;

    read_record_batch(
        batch,
        &metadata.schema.fields,
        &metadata.ipc_schema,
        projection,
        dictionaries,
        message
            .version()
            .map_err(|err| Error::oos(format!("the message's version is invalid: {err:?}")))?,
        reader,
        offset + length,
    )
}
