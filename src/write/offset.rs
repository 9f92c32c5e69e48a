// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Error, IoSlice, Write};

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
pub struct OffsetWriter<W>
where
    W: Write,
{
    inner: W,
    offset: usize,
}

impl<W> OffsetWriter<W>
where
    W: Write,
{
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Write for OffsetWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        let written = self.inner.write(buf)?;
        self.offset += written;
        Ok(written)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize, Error> {
        let written = self.inner.write_vectored(bufs)?;
        self.offset += written;
        Ok(written)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()
    }
}
