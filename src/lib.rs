// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # sitepack
//!
//! A store-only ZIP archive writer for exporting in-memory project file sets.
//!
//! ## Features
//! - Turns an ordered mapping of `path -> text content` into a single ZIP byte buffer.
//! - Deterministic output: no timestamps or attributes, so identical input yields identical bytes.
//! - Aims for resonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```
//! # use sitepack::error::ZipError;
//! # fn run() -> Result<(), ZipError> {
//! let files = [
//!     ("index.html", "<!doctype html><h1>hello</h1>"),
//!     ("css/site.css", "h1 { color: teal; }"),
//! ];
//!
//! let bytes = sitepack::build_archive(files)?;
//! assert_eq!(&bytes[0..2], b"PK");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod error;
pub mod write;

pub(crate) mod spec;


pub use crate::write::{build_archive, ZipArchiveWriter};
