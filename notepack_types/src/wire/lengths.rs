use crate::error::{Error, Result};
use crate::wire::{NoteReader, NoteWriter};
use derive_more::{Add, AddAssign, Deref, From};
use std::io::Write;
use std::mem;

#[derive(Deref, Add, AddAssign, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

#[derive(Deref, Add, AddAssign, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ReadLen(usize);
impl ReadLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

/// The raw `note_type` field. It may hold a tag that no [`crate::NoteType`] is registered under.
#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoteTypeInt(u16);
impl NoteTypeInt {
    pub fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        w.write_bytes(&self.0.to_le_bytes())
    }
    pub fn deser(r: &mut NoteReader) -> Result<(ReadLen, Self)> {
        let buf = r.read_array::<{ mem::size_of::<u16>() }>()?;
        let int = u16::from_le_bytes(buf);
        Ok((ReadLen(buf.len()), Self(int)))
    }
    /// Reads the field without advancing the reader.
    pub fn peek(r: &NoteReader) -> Result<Self> {
        let buf = r.peek_array::<{ mem::size_of::<u16>() }>()?;
        Ok(Self(u16::from_le_bytes(buf)))
    }
}

#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct NameLen(u8);
impl NameLen {
    pub fn from_name(name: &[u8]) -> Result<Self> {
        let int = u8::try_from(name.len()).map_err(|_| Error::NameTooLong(name.len()))?;
        Ok(Self(int))
    }
    pub fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        w.write_bytes(&self.0.to_le_bytes())
    }
    pub fn deser(r: &mut NoteReader) -> Result<(ReadLen, Self)> {
        let buf = r.read_array::<{ mem::size_of::<u8>() }>()?;
        let int = u8::from_le_bytes(buf);
        Ok((ReadLen(buf.len()), Self(int)))
    }
}

/// A `u32` length prefix. Used for `data_len` in the header, and by leaves for their own inner fields.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DataLen(u32);
impl DataLen {
    pub fn new_manual(len: u32) -> Self {
        Self(len)
    }
    pub fn from_len(len: usize) -> Result<Self> {
        let int = u32::try_from(len).map_err(|_| Error::DataTooLong(len))?;
        Ok(Self(int))
    }
    pub fn from_body(buf: &[u8]) -> Result<Self> {
        Self::from_len(buf.len())
    }
    pub fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        w.write_bytes(&self.0.to_le_bytes())
    }
    pub fn deser(r: &mut NoteReader) -> Result<(ReadLen, Self)> {
        let buf = r.read_array::<{ mem::size_of::<u32>() }>()?;
        let int = u32::from_le_bytes(buf);
        Ok((ReadLen(buf.len()), Self(int)))
    }
}
