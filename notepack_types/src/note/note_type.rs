use crate::error::{Error, Result};
use crate::note::{FieldNote, LoginNote, Note, NoteArray};
use crate::wire::NoteTypeInt;
use log::debug;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The registry of note types.
///
/// Tags are assigned by hand, and must never be reused once released.
/// Tag 0 is reserved, and never registered.
#[repr(u16)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum NoteType {
    Array = 1,
    Field = 2,
    Login = 3,
}

impl NoteType {
    pub const ALL: [NoteType; 3] = [NoteType::Array, NoteType::Field, NoteType::Login];

    pub fn tag(self) -> u16 {
        self as u16
    }

    /// Constructs an empty note of this type.
    pub fn create(self) -> Note {
        match self {
            NoteType::Array => Note::Array(NoteArray::default()),
            NoteType::Field => Note::Field(FieldNote::default()),
            NoteType::Login => Note::Login(LoginNote::default()),
        }
    }
}

impl From<NoteType> for NoteTypeInt {
    fn from(note_type: NoteType) -> Self {
        Self::from(note_type as u16)
    }
}

impl TryFrom<NoteTypeInt> for NoteType {
    type Error = Error;
    fn try_from(int: NoteTypeInt) -> Result<Self> {
        NoteType::from_u16(*int).ok_or_else(|| {
            debug!("No note type is registered under tag {}.", *int);
            Error::UnknownTypeTag(*int)
        })
    }
}

impl TryFrom<u16> for NoteType {
    type Error = Error;
    fn try_from(tag: u16) -> Result<Self> {
        Self::try_from(NoteTypeInt::from(tag))
    }
}

impl From<&Note> for NoteType {
    fn from(note: &Note) -> Self {
        match note {
            Note::Array(_) => NoteType::Array,
            Note::Field(_) => NoteType::Field,
            Note::Login(_) => NoteType::Login,
        }
    }
}
