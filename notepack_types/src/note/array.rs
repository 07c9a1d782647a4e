use crate::config::ChildrenMode;
use crate::error::{Error, Result};
use crate::note::{Note, NoteType, Writable};
use crate::wire::{
    DataLen, NoteHeader, NoteName, NoteReader, NoteWriter, ReadLen, ReadResult, WriteLen,
};
use std::io::Write;
use std::mem;
use std::slice;
use std::vec;

/// A note whose payload is an ordered sequence of other notes, of any registered types.
///
/// Members are encoded back to back, in insertion order.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct NoteArray {
    name: NoteName,
    notes: Vec<Note>,
}

impl NoteArray {
    pub fn new(name: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            name: NoteName::new(name)?,
            notes: vec![],
        })
    }

    /// Appends a deep copy of `note`.
    pub fn add<T>(&mut self, note: &T)
    where
        T: Writable + Into<Note>,
    {
        self.notes.push(note.duplicate().into());
    }

    /// Appends `note`, taking ownership of it.
    pub fn push(&mut self, note: impl Into<Note>) {
        self.notes.push(note.into());
    }

    pub fn remove(&mut self, idx: usize) -> Option<Note> {
        (idx < self.notes.len()).then(|| self.notes.remove(idx))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Note> {
        self.notes.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Note> {
        self.notes.get_mut(idx)
    }

    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Note> {
        self.notes.iter_mut()
    }
}

impl Writable for NoteArray {
    fn note_type(&self) -> NoteType {
        NoteType::Array
    }

    fn name(&self) -> &NoteName {
        &self.name
    }
    fn name_mut(&mut self) -> &mut NoteName {
        &mut self.name
    }

    fn data_len(&self) -> Result<DataLen> {
        let mut tot = 0usize;
        for note in &self.notes {
            tot = tot
                .checked_add(note.size()? as usize)
                .ok_or(Error::DataTooLong(usize::MAX))?;
        }
        DataLen::from_len(tot)
    }

    fn data_lens(&self, lens: &mut Vec<DataLen>) -> Result<DataLen> {
        let own_at = lens.len();
        lens.push(DataLen::default());

        let mut tot = 0usize;
        for note in &self.notes {
            let note_data_len = note.data_lens(lens)?;
            let note_len = NoteHeader::FIXED_LEN + note.name().len() + *note_data_len as usize;
            tot = tot
                .checked_add(note_len)
                .ok_or(Error::DataTooLong(usize::MAX))?;
        }

        let data_len = DataLen::from_len(tot)?;
        lens[own_at] = data_len;
        Ok(data_len)
    }

    fn write_data<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut lens = vec![];
        for note in &self.notes {
            note.data_lens(&mut lens)?;
        }
        self.write_data_sized(w, &mut lens.iter())
    }

    fn write_data_sized<W: Write>(
        &self,
        w: &mut NoteWriter<W>,
        lens: &mut slice::Iter<DataLen>,
    ) -> Result<WriteLen> {
        let mut w_len = WriteLen::default();
        for note in &self.notes {
            w_len += note.ser_sized(w, lens)?;
        }
        Ok(w_len)
    }

    fn read_data(&mut self, r: &mut NoteReader) -> Result<ReadLen> {
        let mut r_len = ReadLen::default();
        match r.config().children {
            ChildrenMode::Replay => {
                for note in self.notes.iter_mut() {
                    r_len += note.deser(r)?;
                }
            }
            ChildrenMode::Materialize => {
                // Nesting comes from the buffer here, not from a tree the caller built.
                r.descend()?;
                self.notes.clear();
                while let ReadResult::Some(delta_r_len, note) = Note::decode_next(r)? {
                    r_len += ReadLen::new_manual(delta_r_len);
                    self.notes.push(note);
                }
            }
        }
        Ok(r_len)
    }

    fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl IntoIterator for NoteArray {
    type Item = Note;
    type IntoIter = vec::IntoIter<Note>;
    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoteArray {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;
    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl FromIterator<Note> for NoteArray {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            name: NoteName::default(),
            notes: iter.into_iter().collect(),
        }
    }
}
