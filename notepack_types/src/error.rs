use crate::note::NoteType;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown type of note ({}). Update your application, or contact developers.", .0)]
    UnknownTypeTag(u16),

    #[error("Wrong note type: expected {:?}, found tag {}", .expected, .found)]
    TypeMismatch { expected: NoteType, found: u16 },

    #[error("Note name of {} bytes exceeds 255 bytes", .0)]
    NameTooLong(usize),

    #[error("Buffer too small: {} bytes needed, {} available", .needed, .available)]
    BufferTooSmall { needed: usize, available: usize },

    #[error("Header declared {} data bytes, but {} were consumed", .declared, .consumed)]
    DataLenMismatch { declared: u32, consumed: usize },

    #[error("Data of {} bytes does not fit in a u32 length", .0)]
    DataTooLong(usize),

    #[error("Notes nested deeper than {} levels", .0)]
    DepthLimitExceeded(usize),

    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
