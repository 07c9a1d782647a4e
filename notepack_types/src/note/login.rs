use crate::error::{Error, Result};
use crate::note::{NoteType, Writable};
use crate::wire::{DataLen, NoteName, NoteReader, NoteWriter, ReadLen, WriteLen};
use std::io::Write;
use std::mem;

/// Credentials for one account.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct LoginNote {
    name: NoteName,
    username: String,
    password: String,
}

impl LoginNote {
    pub fn new(
        name: impl Into<Vec<u8>>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: NoteName::new(name)?,
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    fn ser_str<W: Write>(s: &str, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut w_len = DataLen::from_body(s.as_bytes())?.ser(w)?;
        w_len += w.write_bytes(s.as_bytes())?;
        Ok(w_len)
    }

    fn deser_str(r: &mut NoteReader) -> Result<(ReadLen, String)> {
        let (mut r_len, len) = DataLen::deser(r)?;
        let body = r.read_bytes(*len as usize)?;
        r_len += ReadLen::new_manual(body.len());
        let s = String::from_utf8(body.to_vec())?;
        Ok((r_len, s))
    }
}

impl Writable for LoginNote {
    fn note_type(&self) -> NoteType {
        NoteType::Login
    }

    fn name(&self) -> &NoteName {
        &self.name
    }
    fn name_mut(&mut self) -> &mut NoteName {
        &mut self.name
    }

    fn data_len(&self) -> Result<DataLen> {
        let len_len = 2 * mem::size_of::<u32>();
        let tot = self
            .username
            .len()
            .checked_add(self.password.len())
            .and_then(|strs_len| strs_len.checked_add(len_len))
            .ok_or(Error::DataTooLong(usize::MAX))?;
        DataLen::from_len(tot)
    }

    fn write_data<W: Write>(&self, w: &mut NoteWriter<W>) -> Result<WriteLen> {
        let mut w_len = Self::ser_str(&self.username, w)?;
        w_len += Self::ser_str(&self.password, w)?;
        Ok(w_len)
    }

    fn read_data(&mut self, r: &mut NoteReader) -> Result<ReadLen> {
        let (mut r_len, username) = Self::deser_str(r)?;
        let (delta_r_len, password) = Self::deser_str(r)?;
        r_len += delta_r_len;

        self.username = username;
        self.password = password;
        Ok(r_len)
    }

    fn take(&mut self) -> Self {
        mem::take(self)
    }
}
