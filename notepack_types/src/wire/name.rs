use crate::error::{Error, Result};
use crate::wire::{NameLen, NoteReader, NoteWriter, ReadLen, WriteLen};
use derive_more::Deref;
use std::fmt;
use std::io::Write;

/// The name of a note. Raw bytes, not null-terminated, at most [`NoteName::MAX_LEN`] long.
///
/// The length bound is checked on construction, so every `NoteName` in existence is encodable.
#[derive(Deref, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct NoteName(Vec<u8>);

impl NoteName {
    pub const MAX_LEN: usize = u8::MAX as usize;

    pub fn new(name: impl Into<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        if name.len() > Self::MAX_LEN {
            return Err(Error::NameTooLong(name.len()));
        }
        Ok(Self(name))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut w_len = NameLen::from_name(&self.0)?.ser(w)?;
        w_len += w.write_bytes(&self.0)?;
        Ok(w_len)
    }

    pub fn deser(r: &mut NoteReader) -> Result<(ReadLen, Self)> {
        let (mut r_len, name_len) = NameLen::deser(r)?;
        let name = r.read_bytes(*name_len as usize)?;
        r_len += ReadLen::new_manual(name.len());
        Ok((r_len, Self(name.to_vec())))
    }
}

impl TryFrom<&str> for NoteName {
    type Error = Error;
    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}
impl TryFrom<String> for NoteName {
    type Error = Error;
    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
