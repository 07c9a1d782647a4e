//! # Serialization format
//!
//! Every serializable type is a note, and every note is encoded as one record.
//! A record is self-describing: it starts with its `note_type`, so a reader holding
//! nothing but the bytes can pick the concrete type through [`Note::create`].
//!
//! All integers are little-endian.
//!
//! ```text
//! struct Record {
//!     note_type:      u16,
//!     name_len:       u8,
//!     name:           [u8; name_len],
//!     data_len:       u32,
//!     data:           [u8; data_len],
//! }
//! ```
//!
//! `data` is type specific.
//!
//! ```text
//! struct NoteArray::data {
//!     note_0:     Record,
//!     note_1:     Record,
//!     ...
//!     // No count and no separators. Members are delimited by their own headers,
//!     // and the whole array by the enclosing data_len.
//! }
//!
//! struct FieldNote::data {
//!     value:      [u8; data_len],
//! }
//!
//! struct LoginNote::data {
//!     username_len:   u32,
//!     username:       [u8; username_len],
//!     password_len:   u32,
//!     password:       [u8; password_len],
//! }
//! ```
//!
//! `data_len` is never stored on a note; it is derived from the payload each time the note is sized
//! or written.

mod config;
mod error;
mod note;
mod wire;

pub use config::*;
pub use error::*;
pub use note::*;
pub use wire::*;
