//! APIs to read Arrow's IPC format.
//!
//! Arrow's IPC protocol allows data interchange between different processes
//! without copies or (de)serialization. It defines a binary "file" format
//! whose messages are Flatbuffers framing the columnar data.
//!
//! Reading a file is done with [`read::FileReader`]:
//! first read the metadata (schema and block locations) with
//! [`read::read_file_metadata`], then iterate over chunks:
//!
//! ```no_run
//! use arrowlet::io::ipc::read;
//!
//! fn example() -> arrowlet::error::Result<()> {
//!     let mut file = std::fs::File::open("data.arrow")?;
//!     let metadata = read::read_file_metadata(&mut file)?;
//!     let reader = read::FileReader::new(file, metadata, None);
//!     for chunk in reader {
//!         let chunk = chunk?;
//!         dbg!(chunk.len());
//!     }
//!     Ok(())
//! }
//! ```
pub mod read;

mod endianness;

pub use endianness::is_native_little_endian;

/// The first 6 bytes of an Arrow IPC file.
pub const ARROW_MAGIC: [u8; 6] = [b'A', b'R', b'R', b'O', b'W', b'1'];
pub(crate) const CONTINUATION_MARKER: [u8; 4] = [0xff; 4];

/// Struct containing fields and whether the file is written in little or
/// big endian.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcSchema {
    /// The fields in the schema
    pub fields: Vec<IpcField>,
    /// Endianness of the file
    pub is_little_endian: bool,
}

/// Struct containing dictionary metadata of an ipc [`crate::datatypes::Field`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IpcField {
    /// optional children
    pub fields: Vec<IpcField>,
    /// dictionary id; `None` for non-dictionary-encoded fields
    pub dictionary_id: Option<i64>,
}
