mod header;
mod lengths;
mod name;
mod reader;
mod writer;

pub use header::*;
pub use lengths::*;
pub use name::*;
pub use reader::*;
pub use writer::*;
