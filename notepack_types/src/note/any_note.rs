use crate::config::ReadConfig;
use crate::error::{Error, Result};
use crate::note::{FieldNote, LoginNote, NoteArray, NoteType, Writable};
use crate::wire::{
    DataLen, NoteHeader, NoteName, NoteReader, NoteTypeInt, NoteWriter, ReadLen, ReadResult,
    WriteLen,
};
use derive_more::From;
use log::trace;
use std::io::Write;
use std::slice;

/// Any note of a registered type.
#[derive(From, Clone, PartialEq, Eq, Debug)]
pub enum Note {
    Array(NoteArray),
    Field(FieldNote),
    Login(LoginNote),
}

macro_rules! dispatch {
    ($note:expr, $inner:ident => $body:expr) => {
        match $note {
            Note::Array($inner) => $body,
            Note::Field($inner) => $body,
            Note::Login($inner) => $body,
        }
    };
}

impl Writable for Note {
    fn note_type(&self) -> NoteType {
        NoteType::from(self)
    }
    fn name(&self) -> &NoteName {
        dispatch!(self, n => n.name())
    }
    fn name_mut(&mut self) -> &mut NoteName {
        dispatch!(self, n => n.name_mut())
    }
    fn data_len(&self) -> Result<DataLen> {
        dispatch!(self, n => n.data_len())
    }
    fn write_data<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        dispatch!(self, n => n.write_data(w))
    }
    fn data_lens(&self, lens: &mut Vec<DataLen>) -> Result<DataLen> {
        dispatch!(self, n => n.data_lens(lens))
    }
    fn write_data_sized<W: Write>(
        &self,
        w: &mut NoteWriter<W>,
        lens: &mut slice::Iter<DataLen>,
    ) -> Result<WriteLen> {
        dispatch!(self, n => n.write_data_sized(w, lens))
    }
    fn read_data(&mut self, r: &mut NoteReader) -> Result<ReadLen> {
        dispatch!(self, n => n.read_data(r))
    }
    fn take(&mut self) -> Self {
        dispatch!(self, n => Note::from(n.take()))
    }
}

impl Note {
    /// The type factory: an empty note of the type registered under `tag`.
    ///
    /// An unregistered tag means the buffer was written by a newer application.
    pub fn create(tag: u16) -> Result<Self> {
        let note_type = NoteType::try_from(tag)?;
        trace!("Creating empty {note_type:?} note for tag {tag}.");
        Ok(note_type.create())
    }

    /// Reads the next record, picking its type from its tag.
    pub fn decode_next(r: &mut NoteReader) -> Result<ReadResult<Self>> {
        if r.is_empty() {
            return Ok(ReadResult::EOF);
        }

        let (r_len, note_type) = NoteTypeInt::deser(r)?;
        let mut note = Self::create(*note_type)?;
        let (delta_r_len, header) = NoteHeader::deser_after_type(r, note_type)?;
        trace!(
            "Decoding {:?} note {:?} of {} data bytes at depth {}.",
            note.note_type(),
            header.name.to_string(),
            *header.data_len,
            r.depth()
        );
        let body_r_len = note.deser_body(header, r)?;

        Ok(ReadResult::Some(*(r_len + delta_r_len + body_r_len), note))
    }

    /// Decodes the record at the front of `buf` without knowing its type beforehand.
    ///
    /// Nested arrays are materialized from the tags found in the buffer.
    pub fn decode(buf: &[u8]) -> Result<(usize, Self)> {
        Self::decode_with(buf, ReadConfig::materialize())
    }

    pub fn decode_with(buf: &[u8], cfg: ReadConfig) -> Result<(usize, Self)> {
        let mut r = NoteReader::with_config(buf, cfg);
        match Self::decode_next(&mut r)? {
            ReadResult::EOF => Err(Error::BufferTooSmall {
                needed: NoteHeader::FIXED_LEN,
                available: 0,
            }),
            ReadResult::Some(r_len, note) => Ok((r_len, note)),
        }
    }

    /// Decodes consecutive records until `buf` is exhausted.
    pub fn decode_all(buf: &[u8]) -> Result<Vec<Self>> {
        let mut r = NoteReader::with_config(buf, ReadConfig::materialize());
        let mut notes = vec![];
        while let ReadResult::Some(_, note) = Self::decode_next(&mut r)? {
            notes.push(note);
        }
        Ok(notes)
    }

    pub fn encode_all<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Result<Vec<u8>> {
        let mut w = NoteWriter::new(vec![]);
        for note in notes {
            note.ser(&mut w)?;
        }
        Ok(w.into_inner())
    }

    /// The type of the record at the front of `buf`. Nothing is consumed.
    pub fn peek_type(buf: &[u8]) -> Result<NoteType> {
        let r = NoteReader::new(buf);
        NoteType::try_from(NoteTypeInt::peek(&r)?)
    }

    /// Steps over the next record without decoding its payload.
    pub fn skip_next(r: &mut NoteReader) -> Result<ReadResult<()>> {
        if r.is_empty() {
            return Ok(ReadResult::EOF);
        }
        let (r_len, header) = NoteHeader::deser(r)?;
        let body = r.read_bytes(*header.data_len as usize)?;
        Ok(ReadResult::Some(*r_len + body.len(), ()))
    }

    /// Length of the record at the front of `buf`, as declared by its header.
    pub fn skip(buf: &[u8]) -> Result<usize> {
        let mut r = NoteReader::new(buf);
        match Self::skip_next(&mut r)? {
            ReadResult::EOF => Err(Error::BufferTooSmall {
                needed: NoteHeader::FIXED_LEN,
                available: 0,
            }),
            ReadResult::Some(r_len, ()) => Ok(r_len),
        }
    }

    pub fn as_array(&self) -> Option<&NoteArray> {
        match self {
            Note::Array(arr) => Some(arr),
            _ => None,
        }
    }
    pub fn as_array_mut(&mut self) -> Option<&mut NoteArray> {
        match self {
            Note::Array(arr) => Some(arr),
            _ => None,
        }
    }
    pub fn as_field(&self) -> Option<&FieldNote> {
        match self {
            Note::Field(field) => Some(field),
            _ => None,
        }
    }
    pub fn as_login(&self) -> Option<&LoginNote> {
        match self {
            Note::Login(login) => Some(login),
            _ => None,
        }
    }
}
