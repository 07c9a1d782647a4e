mod any_note;
mod array;
mod field;
mod login;
mod note_type;
mod writable;

pub use any_note::*;
pub use array::*;
pub use field::*;
pub use login::*;
pub use note_type::*;
pub use writable::*;
