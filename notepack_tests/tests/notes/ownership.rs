use anyhow::Result;
use notepack_types::{FieldNote, LoginNote, Note, NoteArray, NoteType, Writable};

#[test]
fn add_copies_deeply() -> Result<()> {
    let mut field = FieldNote::new("u", "alice")?;
    let mut inner = NoteArray::new("inner")?;
    inner.add(&field);

    let mut root = NoteArray::new("root")?;
    root.add(&inner);
    root.add(&field);

    field.set_value("mallory");
    inner.clear();

    assert_eq!(root.len(), 2);
    let copied_inner = root.get(0).and_then(Note::as_array).unwrap();
    assert_eq!(copied_inner.len(), 1);
    assert_eq!(
        copied_inner.get(0).and_then(Note::as_field).unwrap().value(),
        b"alice"
    );
    assert_eq!(root.get(1).and_then(Note::as_field).unwrap().value(), b"alice");
    Ok(())
}

#[test]
fn duplicate_is_independent() -> Result<()> {
    let mut root = NoteArray::new("root")?;
    root.push(LoginNote::new("bank", "alice", "1234")?);
    let root: Note = root.into();

    let mut dup = root.duplicate();
    assert_eq!(dup, root);
    assert_eq!(dup.note_type(), NoteType::Array);

    if let Some(arr) = dup.as_array_mut() {
        arr.push(FieldNote::new("extra", "x")?);
    }
    assert_ne!(dup, root);
    assert_eq!(root.as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn copy_from_replaces_contents() -> Result<()> {
    let src = LoginNote::new("bank", "alice", "1234")?;
    let mut dst = LoginNote::new("old", "bob", "pw")?;
    dst.copy_from(&src);
    assert_eq!(dst, src);
    assert_eq!(dst.username(), "alice");
    Ok(())
}

#[test]
fn take_leaves_empty_of_same_type() -> Result<()> {
    let mut root = NoteArray::new("root")?;
    root.push(FieldNote::new("u", "alice")?);
    let mut note: Note = root.clone().into();

    let taken = note.take();
    assert_eq!(taken, Note::Array(root));
    assert_eq!(note.note_type(), NoteType::Array);
    assert!(note.name().is_empty());
    assert!(note.as_array().unwrap().is_empty());
    assert_eq!(note.size()?, 7);

    let mut login = LoginNote::new("l", "u", "p")?;
    let taken = login.take();
    assert_eq!(taken.password(), "p");
    assert_eq!(login, LoginNote::default());
    Ok(())
}

#[test]
fn members_keep_order_and_types() -> Result<()> {
    let mut root = NoteArray::new("root")?;
    root.push(FieldNote::new("a", "1")?);
    root.push(NoteArray::new("b")?);
    root.push(LoginNote::new("c", "u", "p")?);

    let removed = root.remove(1);
    assert_eq!(removed.map(|note| note.note_type()), Some(NoteType::Array));
    assert!(root.remove(5).is_none());

    let types = root.iter().map(|note| note.note_type()).collect::<Vec<_>>();
    assert_eq!(types, vec![NoteType::Field, NoteType::Login]);

    let names = root
        .into_iter()
        .map(|note| note.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "c"]);
    Ok(())
}
