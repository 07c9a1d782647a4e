use crate::error::Result;
use crate::wire::WriteLen;
use derive_more::{Deref, DerefMut};
use std::io::Write;

/// Sink for encoded notes.
///
/// `W` is usually a `Vec<u8>`, or a `&mut [u8]` that has been checked to be large enough.
#[derive(Deref, DerefMut)]
pub struct NoteWriter<W: Write> {
    w: W,
}

impl<W: Write> NoteWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<WriteLen> {
        self.w.write_all(buf)?;
        Ok(WriteLen::new_manual(buf.len()))
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}
