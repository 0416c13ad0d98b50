use std::io::Cursor;

use arrowlet::datatypes::Schema;
use arrowlet::error::Error;
use arrowlet::io::ipc::read::{
    deserialize_schema, read_batch, read_file_metadata, Block, Dictionaries, FileMetadata,
    FileReader,
};
use arrowlet::io::ipc::{IpcSchema, ARROW_MAGIC};

fn empty_file_metadata() -> FileMetadata {
    FileMetadata {
        schema: Schema::default(),
        ipc_schema: IpcSchema {
            fields: vec![],
            is_little_endian: true,
        },
        blocks: vec![],
        dictionaries: None,
        size: 0,
    }
}

#[test]
fn read_file_metadata_on_empty_reader_errors() {
    let mut reader = Cursor::new(vec![]);
    assert!(matches!(
        read_file_metadata(&mut reader),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn read_file_metadata_with_wrong_magic_errors() {
    let mut data = b"NOTARROW".to_vec();
    data.extend_from_slice(&[0u8; 20]);
    let mut reader = Cursor::new(data);
    assert!(matches!(
        read_file_metadata(&mut reader),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn read_file_metadata_with_truncated_footer_errors() {
    // valid magic at both ends but a footer length pointing outside the file
    let mut data = ARROW_MAGIC.to_vec();
    data.extend_from_slice(&[0u8; 4]);
    data.extend_from_slice(&i32::MAX.to_le_bytes());
    data.extend_from_slice(&ARROW_MAGIC);
    let mut reader = Cursor::new(data);
    assert!(matches!(
        read_file_metadata(&mut reader),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn deserialize_schema_on_garbage_errors() {
    assert!(deserialize_schema(&[0xde, 0xad, 0xbe, 0xef]).is_err());
}

#[test]
fn read_batch_with_out_of_bounds_index_errors() {
    let mut reader = Cursor::new(vec![]);
    let dictionaries = Dictionaries::default();
    let mut scratch = vec![];
    assert!(matches!(
        read_batch(
            &mut reader,
            &dictionaries,
            &empty_file_metadata(),
            None,
            0,
            &mut scratch,
        ),
        Err(Error::OutOfSpec(_))
    ));
}

#[test]
fn file_reader_without_blocks_is_empty() {
    let reader = Cursor::new(vec![]);
    let mut reader = FileReader::new(reader, empty_file_metadata(), None);
    assert!(reader.schema().fields.is_empty());
    assert!(reader.next().is_none());

    let inner = reader.into_inner();
    assert!(inner.into_inner().is_empty());
}

#[test]
fn file_reader_with_dictionary_blocks_is_not_implemented() {
    let mut metadata = empty_file_metadata();
    metadata.blocks = vec![Block {
        offset: 0,
        meta_data_length: 0,
        body_length: 0,
    }];
    metadata.dictionaries = Some(vec![Block {
        offset: 0,
        meta_data_length: 0,
        body_length: 0,
    }]);
    let reader = Cursor::new(vec![]);
    let mut reader = FileReader::new(reader, metadata, None);
    assert!(matches!(
        reader.next(),
        Some(Err(Error::NotYetImplemented(_)))
    ));
}
