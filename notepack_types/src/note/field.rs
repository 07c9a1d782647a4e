use crate::error::Result;
use crate::note::{NoteType, Writable};
use crate::wire::{DataLen, NoteName, NoteReader, NoteWriter, ReadLen, WriteLen};
use std::io::Write;
use std::mem;

/// A named value. The payload is the value's bytes, as is.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct FieldNote {
    name: NoteName,
    value: Vec<u8>,
}

impl FieldNote {
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            name: NoteName::new(name)?,
            value: value.into(),
        })
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Vec<u8>>) {
        self.value = value.into();
    }
}

impl Writable for FieldNote {
    fn note_type(&self) -> NoteType {
        NoteType::Field
    }

    fn name(&self) -> &NoteName {
        &self.name
    }
    fn name_mut(&mut self) -> &mut NoteName {
        &mut self.name
    }

    fn data_len(&self) -> Result<DataLen> {
        DataLen::from_body(&self.value)
    }

    fn write_data<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        w.write_bytes(&self.value)
    }

    fn read_data(&mut self, r: &mut NoteReader) -> Result<ReadLen> {
        let body = r.read_bytes(r.remaining())?;
        self.value = body.to_vec();
        Ok(ReadLen::new_manual(body.len()))
    }

    fn take(&mut self) -> Self {
        mem::take(self)
    }
}
