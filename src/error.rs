// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("archives with more than 65535 entries are not supported")]
    TooManyEntries,
    #[error("entry file name exceeds the 16-bit length field")]
    FileNameTooLarge,
    #[error("entry content exceeds the 32-bit size field")]
    EntryTooLarge,
    #[error("central directory starts past the 32-bit offset field")]
    ArchiveTooLarge,

    #[error("the underlying writer returned an error: {0}")]
    Io(#[from] std::io::Error),
}
