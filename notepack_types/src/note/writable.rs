use crate::config::ReadConfig;
use crate::error::{Error, Result};
use crate::note::NoteType;
use crate::wire::{
    DataLen, NoteHeader, NoteName, NoteReader, NoteTypeInt, NoteWriter, ReadLen, WriteLen,
};
use std::io::Write;
use std::slice;

/// The contract every note type satisfies.
///
/// An implementor supplies its type tag, access to its name, and the payload half of the codec
/// (`data_len`, `write_data`, `read_data`). The header half, sizing, and the buffer-level
/// entry points are provided on top of those.
pub trait Writable: Clone {
    fn note_type(&self) -> NoteType;

    fn name(&self) -> &NoteName;
    fn name_mut(&mut self) -> &mut NoteName;

    /// Length of the payload as it would be written right now.
    fn data_len(&self) -> Result<DataLen>;

    fn write_data<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen>;

    /// Appends the data length of `self`, then those of all nested notes, in write order.
    /// Leaves have nothing nested.
    fn data_lens(&self, lens: &mut Vec<DataLen>) -> Result<DataLen> {
        let data_len = self.data_len()?;
        lens.push(data_len);
        Ok(data_len)
    }

    /// Like [`Writable::write_data`], with nested data lengths taken from `lens`
    /// as laid out by [`Writable::data_lens`].
    fn write_data_sized<W: Write>(
        &self,
        w: &mut NoteWriter<W>,
        _lens: &mut slice::Iter<DataLen>,
    ) -> Result<WriteLen> {
        self.write_data(w)
    }

    /// `r` is confined to the payload declared by the header.
    /// Bytes left unread in `r` are reported by the caller as [`Error::DataLenMismatch`].
    fn read_data(&mut self, r: &mut NoteReader) -> Result<ReadLen>;

    /// Moves the contents out, leaving `self` empty but of the same note type.
    fn take(&mut self) -> Self;

    fn set_name(&mut self, name: impl Into<Vec<u8>>) -> Result<()> {
        *self.name_mut() = NoteName::new(name)?;
        Ok(())
    }

    /// Full encoded length: header, name, and payload.
    fn size(&self) -> Result<u32> {
        let data_len = self.data_len()?;
        let tot = (NoteHeader::FIXED_LEN + self.name().len()) as u64 + u64::from(*data_len);
        let tot = u32::try_from(tot).map_err(|_| Error::DataTooLong(tot as usize))?;
        Ok(tot)
    }

    /// Sizes the whole tree in one pass, then writes it in another.
    fn ser<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut lens = vec![];
        self.data_lens(&mut lens)?;
        self.ser_sized(w, &mut lens.iter())
    }

    fn ser_sized<W: Write>(
        &self,
        w: &mut NoteWriter<W>,
        lens: &mut slice::Iter<DataLen>,
    ) -> Result<WriteLen> {
        let data_len = match lens.next() {
            Some(data_len) => *data_len,
            None => self.data_len()?,
        };

        /* header */
        let mut w_len = NoteTypeInt::from(self.note_type()).ser(w)?;
        w_len += self.name().ser(w)?;
        w_len += data_len.ser(w)?;

        /* data */
        let data_w_len = self.write_data_sized(w, lens)?;
        debug_assert_eq!(*data_w_len, *data_len as usize);
        w_len += data_w_len;

        Ok(w_len)
    }

    /// Reads one record into `self`.
    ///
    /// The record's type tag is checked before anything else; on [`Error::TypeMismatch`]
    /// `self` is left untouched.
    fn deser(&mut self, r: &mut NoteReader) -> Result<ReadLen> {
        let (r_len, note_type) = NoteTypeInt::deser(r)?;
        let expected = self.note_type();
        if *note_type != expected as u16 {
            return Err(Error::TypeMismatch {
                expected,
                found: *note_type,
            });
        }

        let (delta_r_len, header) = NoteHeader::deser_after_type(r, note_type)?;
        let body_r_len = self.deser_body(header, r)?;
        Ok(r_len + delta_r_len + body_r_len)
    }

    /// Fills `self` from an already parsed header, and the payload that follows it in `r`.
    fn deser_body(&mut self, header: NoteHeader, r: &mut NoteReader) -> Result<ReadLen> {
        let declared = *header.data_len;
        let mut body = r.sub_reader(declared as usize)?;

        *self.name_mut() = header.name;
        self.read_data(&mut body)?;

        if !body.is_empty() {
            return Err(Error::DataLenMismatch {
                declared,
                consumed: body.position(),
            });
        }
        Ok(ReadLen::new_manual(body.position()))
    }

    /// Writes the record to the front of `buf`, and returns the count of bytes written,
    /// which always equals [`Writable::size`].
    fn write(&self, buf: &mut [u8]) -> Result<usize> {
        let needed = self.size()? as usize;
        if buf.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        let mut w = NoteWriter::new(&mut buf[..needed]);
        let w_len = self.ser(&mut w)?;
        Ok(*w_len)
    }

    fn read(&mut self, buf: &[u8]) -> Result<usize> {
        self.read_with(buf, ReadConfig::default())
    }

    fn read_with(&mut self, buf: &[u8], cfg: ReadConfig) -> Result<usize> {
        let mut r = NoteReader::with_config(buf, cfg);
        let r_len = self.deser(&mut r)?;
        Ok(*r_len)
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.size()? as usize);
        self.ser(&mut NoteWriter::new(&mut buf))?;
        Ok(buf)
    }

    /// An independent deep copy.
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Replaces the name and payload of `self` with deep copies of `other`'s.
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other)
    }
}
