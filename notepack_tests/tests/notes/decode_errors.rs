use super::helpers::blank;
use anyhow::Result;
use notepack_types::{
    Error, FieldNote, LoginNote, Note, NoteArray, NoteName, ReadConfig, Writable,
};

#[test]
fn type_mismatch_leaves_target_untouched() -> Result<()> {
    let buf = FieldNote::new("u", "alice")?.to_bytes()?;

    let mut login = LoginNote::new("keep", "me", "intact")?;
    let before = login.clone();
    match login.read(&buf) {
        Err(Error::TypeMismatch { expected, found }) => {
            assert_eq!(expected, login.note_type());
            assert_eq!(found, 2);
        }
        other => panic!("{other:?}"),
    }
    assert_eq!(login, before);

    let mut arr = NoteArray::new("keep")?;
    arr.push(FieldNote::new("x", "y")?);
    let before = arr.clone();
    assert!(matches!(arr.read(&buf), Err(Error::TypeMismatch { .. })));
    assert_eq!(arr, before);

    // Checked ahead of the rest of the header.
    assert!(matches!(arr.read(&buf[..2]), Err(Error::TypeMismatch { .. })));
    Ok(())
}

#[test]
fn write_needs_room() -> Result<()> {
    let field = FieldNote::new("u", "alice")?;
    let mut buf = vec![0xaau8; 12];
    match field.write(&mut buf) {
        Err(Error::BufferTooSmall { needed, available }) => {
            assert_eq!(needed, 13);
            assert_eq!(available, 12);
        }
        other => panic!("{other:?}"),
    }
    assert_eq!(buf, vec![0xaau8; 12]);

    let mut buf = vec![0u8; 13];
    assert_eq!(field.write(&mut buf)?, 13);
    Ok(())
}

#[test]
fn truncated_buffers() -> Result<()> {
    let mut root = NoteArray::new("root")?;
    root.push(FieldNote::new("u", "alice")?);
    root.push(LoginNote::new("l", "bob", "pw")?);
    let buf = root.to_bytes()?;

    for cut in 0..buf.len() {
        let mut target = blank(&Note::Array(root.clone()));
        match target.read(&buf[..cut]) {
            Err(Error::BufferTooSmall { .. }) => {}
            other => panic!("cut at {cut}: {other:?}"),
        }
        match Note::decode(&buf[..cut]) {
            Err(Error::BufferTooSmall { .. }) => {}
            other => panic!("cut at {cut}: {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn replay_target_of_wrong_shape() -> Result<()> {
    let mut root = NoteArray::new("root")?;
    root.push(FieldNote::new("u", "alice")?);
    root.push(FieldNote::new("p", "secret")?);
    let buf = root.to_bytes()?;

    // Fewer members than the buffer holds.
    let mut short = NoteArray::default();
    short.push(FieldNote::default());
    match short.read(&buf) {
        Err(Error::DataLenMismatch { declared, consumed }) => {
            assert_eq!(declared, 27);
            assert_eq!(consumed, 13);
        }
        other => panic!("{other:?}"),
    }

    // More members than the buffer holds.
    let mut long = NoteArray::default();
    for _ in 0..3 {
        long.push(FieldNote::default());
    }
    assert!(matches!(long.read(&buf), Err(Error::BufferTooSmall { .. })));

    // A member of another type.
    let mut wrong = NoteArray::default();
    wrong.push(FieldNote::default());
    wrong.push(LoginNote::default());
    assert!(matches!(wrong.read(&buf), Err(Error::TypeMismatch { .. })));

    // An empty array reads nothing in replay mode, but materializes in the other.
    let mut empty = NoteArray::default();
    assert!(matches!(empty.read(&buf), Err(Error::DataLenMismatch { .. })));
    empty.read_with(&buf, ReadConfig::materialize())?;
    assert_eq!(empty, root);
    Ok(())
}

#[test]
fn corrupt_inner_length() -> Result<()> {
    let mut buf = LoginNote::new("l", "bob", "pw")?.to_bytes()?;
    // username_len, right after the 8 header bytes.
    buf[8..12].copy_from_slice(&100u32.to_le_bytes());

    let mut login = LoginNote::default();
    assert!(matches!(
        login.read(&buf),
        Err(Error::BufferTooSmall { .. })
    ));
    Ok(())
}

#[test]
fn name_boundary() -> Result<()> {
    let mut field = FieldNote::default();
    field.set_name(vec![b'n'; 255])?;
    assert_eq!(field.name().len(), 255);
    assert_eq!(field.size()?, 7 + 255);

    match field.set_name(vec![b'n'; 256]) {
        Err(Error::NameTooLong(256)) => {}
        other => panic!("{other:?}"),
    }
    assert_eq!(field.name(), &NoteName::new(vec![b'n'; 255])?);

    let buf = field.to_bytes()?;
    let (_, decoded) = Note::decode(&buf)?;
    assert_eq!(decoded, Note::Field(field));
    Ok(())
}
