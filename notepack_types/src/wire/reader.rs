use crate::config::ReadConfig;
use crate::error::{Error, Result};
use log::debug;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

/// A bounds-checked cursor over a caller-supplied buffer.
///
/// Every read either returns exactly the requested bytes or fails with
/// [`Error::BufferTooSmall`]; nothing is read past the end of the buffer.
///
/// A reader also carries the [`ReadConfig`] in effect, and the count of
/// [`crate::NoteArray`]s it is nested in.
#[derive(Clone, Debug)]
pub struct NoteReader<'a> {
    buf: &'a [u8],
    pos: usize,
    cfg: ReadConfig,
    depth: usize,
}

impl<'a> NoteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, ReadConfig::default())
    }

    pub fn with_config(buf: &'a [u8], cfg: ReadConfig) -> Self {
        Self {
            buf,
            pos: 0,
            cfg,
            depth: 0,
        }
    }

    pub fn config(&self) -> &ReadConfig {
        &self.cfg
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(Error::BufferTooSmall {
                needed: len,
                available,
            });
        }
        let buf: &'a [u8] = self.buf;
        let bytes = &buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let bytes = self.read_bytes(LEN)?;
        let mut arr = [0u8; LEN];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }

    pub fn peek_array<const LEN: usize>(&self) -> Result<[u8; LEN]> {
        self.clone().read_array::<LEN>()
    }

    /// Consumes `len` bytes, and returns a reader confined to them.
    ///
    /// The returned reader inherits the config and the nesting depth.
    pub fn sub_reader(&mut self, len: usize) -> Result<NoteReader<'a>> {
        let buf = self.read_bytes(len)?;
        Ok(Self {
            buf,
            pos: 0,
            cfg: self.cfg,
            depth: self.depth,
        })
    }

    /// Records that the reader is now inside one more nested array.
    pub fn descend(&mut self) -> Result<()> {
        if self.depth >= self.cfg.max_depth {
            debug!("Rejecting note nested deeper than {}.", self.cfg.max_depth);
            return Err(Error::DepthLimitExceeded(self.cfg.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
