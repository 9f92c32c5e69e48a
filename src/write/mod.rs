// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing store-only ZIP archives.
//!
//! # Example
//! ```
//! # use sitepack::ZipArchiveWriter;
//! # use sitepack::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipArchiveWriter::new(Vec::<u8>::new());
//!
//! writer.write_entry("index.html", "<!doctype html><title>demo</title>")?;
//! writer.write_entry("css/site.css", "body { margin: 0; }")?;
//!
//! let _bytes = writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod offset;

use std::io::Write;

use crc32fast::Hasher;

use crate::error::{Result, ZipError};
use crate::spec::consts::{
    CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, STORED_METHOD,
    ZIP_VERSION,
};
use crate::spec::header::{
    CentralDirectoryHeader, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader,
};

use offset::OffsetWriter;

pub(crate) struct CentralDirectoryEntry {
    pub header: CentralDirectoryHeader,
    pub file_name: Vec<u8>,
}

/// A ZIP archive writer which acts over [`Write`] implementers.
///
/// Entries are stored uncompressed with zeroed date/time fields, so the emitted bytes are a pure
/// function of the entries written and their order.
///
/// # Note
/// - [`ZipArchiveWriter::close()`] must be called before the writer goes out of scope, otherwise
///   the sink is left holding a truncated archive with no central directory.
pub struct ZipArchiveWriter<W: Write> {
    writer: OffsetWriter<W>,
    cd_entries: Vec<CentralDirectoryEntry>,
}

impl<W: Write> ZipArchiveWriter<W> {
    /// Construct a new ZIP archive writer from an inner writer.
    pub fn new(writer: W) -> Self {
        Self { writer: OffsetWriter::new(writer), cd_entries: Vec::new() }
    }

    /// Write a new entry from its full text content.
    ///
    /// The path is used verbatim as the entry name (forward-slash separated); the content is
    /// stored as its UTF-8 bytes. An empty string still produces a zero-length entry.
    #[tracing::instrument(skip(self, content))]
    pub fn write_entry(&mut self, path: &str, content: &str) -> Result<()> {
        if self.cd_entries.len() >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::TooManyEntries);
        }

        let data = content.as_bytes();
        let size = u32::try_from(data.len()).map_err(|_| ZipError::EntryTooLarge)?;

        let lf_header = LocalFileHeader {
            version: ZIP_VERSION,
            flags: GeneralPurposeFlag::default(),
            compression: STORED_METHOD,
            mod_time: 0,
            mod_date: 0,
            crc: compute_crc(data),
            // Stored entries are never transformed, so both size fields match.
            compressed_size: size,
            uncompressed_size: size,
            file_name_length: path.len().try_into().map_err(|_| ZipError::FileNameTooLarge)?,
            extra_field_length: 0,
        };

        let header = CentralDirectoryHeader {
            v_made_by: ZIP_VERSION,
            v_needed: lf_header.version,
            flags: lf_header.flags,
            compression: lf_header.compression,
            mod_time: lf_header.mod_time,
            mod_date: lf_header.mod_date,
            crc: lf_header.crc,
            compressed_size: lf_header.compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length: lf_header.file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset: self.writer.offset() as u32,
        };

        self.writer.write_all(&LFH_SIGNATURE.to_le_bytes())?;
        self.writer.write_all(&lf_header.as_slice())?;
        self.writer.write_all(path.as_bytes())?;
        self.writer.write_all(data)?;

        self.cd_entries.push(CentralDirectoryEntry { header, file_name: path.as_bytes().to_vec() });

        Ok(())
    }

    /// Consumes this archive writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    ///
    /// Failure to call this function before going out of scope would result in a corrupted archive.
    #[tracing::instrument(skip(self))]
    pub fn close(mut self) -> Result<W> {
        let cd_offset = self.writer.offset();
        if cd_offset > NON_ZIP64_MAX_SIZE as usize {
            return Err(ZipError::ArchiveTooLarge);
        }

        for entry in &self.cd_entries {
            self.writer.write_all(&CDH_SIGNATURE.to_le_bytes())?;
            self.writer.write_all(&entry.header.as_slice())?;
            self.writer.write_all(&entry.file_name)?;
        }

        let num_of_entries = self.cd_entries.len() as u16;
        let header = EndOfCentralDirectoryHeader {
            disk_num: 0,
            start_cent_dir_disk: 0,
            num_of_entries_disk: num_of_entries,
            num_of_entries,
            size_cent_dir: (self.writer.offset() - cd_offset) as u32,
            cent_dir_offset: cd_offset as u32,
            file_comm_length: 0,
        };

        self.writer.write_all(&EOCDR_SIGNATURE.to_le_bytes())?;
        self.writer.write_all(&header.as_slice())?;
        self.writer.flush()?;

        Ok(self.writer.into_inner())
    }
}

/// Builds a complete store-only archive from an ordered sequence of `(path, text content)` pairs.
///
/// Entries are emitted in iteration order, so two calls over the same sequence produce
/// byte-identical buffers. An empty sequence yields an archive holding only the end of central
/// directory record.
pub fn build_archive<I, P, C>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (P, C)>,
    P: AsRef<str>,
    C: AsRef<str>,
{
    let mut writer = ZipArchiveWriter::new(Vec::new());

    for (path, content) in entries {
        writer.write_entry(path.as_ref(), content.as_ref())?;
    }

    writer.close()
}

fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
