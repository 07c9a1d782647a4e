use crate::error::Result;
use crate::wire::{DataLen, NoteName, NoteReader, NoteTypeInt, NoteWriter, ReadLen, WriteLen};
use std::io::Write;
use std::mem;

/// The fields every record starts with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NoteHeader {
    pub note_type: NoteTypeInt,
    pub name: NoteName,
    pub data_len: DataLen,
}

impl NoteHeader {
    /// Bytes taken by the header apart from the name itself: `note_type`, `name_len`, and `data_len`.
    pub const FIXED_LEN: usize =
        mem::size_of::<u16>() + mem::size_of::<u8>() + mem::size_of::<u32>();

    pub fn encoded_len(&self) -> usize {
        Self::FIXED_LEN + self.name.len()
    }

    pub fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut w_len = self.note_type.ser(w)?;
        w_len += self.name.ser(w)?;
        w_len += self.data_len.ser(w)?;
        Ok(w_len)
    }

    pub fn deser(r: &mut NoteReader) -> Result<(ReadLen, Self)> {
        let (r_len, note_type) = NoteTypeInt::deser(r)?;
        let (rest_len, header) = Self::deser_after_type(r, note_type)?;
        Ok((r_len + rest_len, header))
    }

    /// Reads `name_len`, `name`, and `data_len`, for a caller that has already consumed `note_type`.
    pub fn deser_after_type(r: &mut NoteReader, note_type: NoteTypeInt) -> Result<(ReadLen, Self)> {
        let (mut r_len, name) = NoteName::deser(r)?;
        let (delta_r_len, data_len) = DataLen::deser(r)?;
        r_len += delta_r_len;
        let header = Self {
            note_type,
            name,
            data_len,
        };
        Ok((r_len, header))
    }
}
