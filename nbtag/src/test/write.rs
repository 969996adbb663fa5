use super::builder::Builder;
use crate::{
    error::{ErrorKind, Result},
    to_bytes,
    write::Writer,
    Compound, List, NamedTag, TagType, Value,
};

#[test]
fn simple_byte() -> Result<()> {
    let bs = to_bytes(&NamedTag::new("val", 123i8))?;
    let expected = Builder::new().byte("val", 123).build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn simple_numbers() -> Result<()> {
    let root: Compound = vec![
        ("i8", Value::Byte(i8::MAX)),
        ("i16", Value::Short(i16::MAX)),
        ("i32", Value::Int(i32::MAX)),
        ("i64", Value::Long(i64::MAX)),
        ("f32", Value::Float(f32::MAX)),
        ("f64", Value::Double(f64::MAX)),
    ]
    .into_iter()
    .collect();

    let bs = to_bytes(&NamedTag::new("", root))?;
    let expected = Builder::new()
        .start_compound("")
        .byte("i8", i8::MAX)
        .short("i16", i16::MAX)
        .int("i32", i32::MAX)
        .long("i64", i64::MAX)
        .float("f32", f32::MAX)
        .double("f64", f64::MAX)
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn arrays() -> Result<()> {
    let mut root = Compound::new();
    root.put("bytes", vec![1i8, -1]);
    root.put("ints", vec![1i32, 2, 3]);
    root.put("longs", Vec::<i64>::new());

    let bs = to_bytes(&NamedTag::new("", root))?;
    let expected = Builder::new()
        .start_compound("")
        .byte_array("bytes", &[1, -1])
        .int_array("ints", &[1, 2, 3])
        .long_array("longs", &[])
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn root_scenario_bytes() -> Result<()> {
    let mut tags = List::default();
    tags.append("a")?;
    tags.append("b")?;

    let mut root = Compound::new();
    root.put("health", 20i32);
    root.put("tags", tags);

    let bs = to_bytes(&NamedTag::new("root", root))?;

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x0a, 0x00, 0x04, b'r', b'o', b'o', b't',
        0x03, 0x00, 0x06, b'h', b'e', b'a', b'l', b't', b'h', 0x00, 0x00, 0x00, 0x14,
        0x09, 0x00, 0x04, b't', b'a', b'g', b's', 0x08, 0x00, 0x00, 0x00, 0x02,
        0x00, 0x01, b'a',
        0x00, 0x01, b'b',
        0x00,
    ];

    assert_eq!(expected, bs.as_slice());
    Ok(())
}

#[test]
fn empty_compound_payload_is_one_end_byte() -> Result<()> {
    let mut out = vec![];
    Writer::new(&mut out).write_payload(&Value::Compound(Compound::new()))?;

    assert_eq!(out, [0]);
    Ok(())
}

#[test]
fn empty_list_payload() -> Result<()> {
    let mut out = vec![];
    Writer::new(&mut out).write_payload(&Value::List(List::default()))?;
    assert_eq!(out, [10, 0, 0, 0, 0]);

    let mut out = vec![];
    let list = List::new(TagType::Float)?;
    Writer::new(&mut out).write_payload(&Value::List(list))?;
    assert_eq!(out, [5, 0, 0, 0, 0]);
    Ok(())
}

#[test]
fn list_elements_are_anonymous() -> Result<()> {
    let mut list = List::default();
    let mut a = Compound::new();
    a.put("x", 1i8);
    list.append(a)?;
    list.append(Compound::new())?;

    let bs = to_bytes(&NamedTag::new("l", list))?;
    let expected = Builder::new()
        .start_list("l", TagType::Compound, 2)
        .start_anon_compound()
        .byte("x", 1)
        .end_compound()
        .start_anon_compound()
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn heterogeneous_list_is_type_mismatch() -> Result<()> {
    let mut list = List::default();
    list.append(1i32)?;
    list.append(2i32)?;
    *list.get_mut(1).unwrap() = Value::from("two");

    let mut out = vec![];
    let err = Writer::new(&mut out)
        .write_payload(&Value::List(list))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    // Nothing of the list was written.
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn first_element_fixes_list_type() -> Result<()> {
    let mut list = List::new(TagType::Int)?;
    list.append(1i32)?;
    *list.get_mut(0).unwrap() = Value::Short(3);

    let mut out = vec![];
    Writer::new(&mut out).write_payload(&Value::List(list))?;
    assert_eq!(out, [2, 0, 0, 0, 1, 0, 3]);
    Ok(())
}

#[test]
fn string_too_long_is_malformed() {
    let long = "a".repeat(u16::MAX as usize + 1);
    let err = to_bytes(&NamedTag::new("s", long)).unwrap_err();
    assert!(err.is_malformed());

    let longest = "a".repeat(u16::MAX as usize);
    assert!(to_bytes(&NamedTag::new("s", longest)).is_ok());
}

#[test]
fn java_null_in_string() -> Result<()> {
    let bs = to_bytes(&NamedTag::new("", "a\0"))?;
    assert_eq!(bs, [8, 0, 0, 0, 3, b'a', 0xc0, 0x80]);
    Ok(())
}

#[test]
fn unnamed_root() -> Result<()> {
    let mut out = vec![];
    Writer::new(&mut out).write_unnamed(&Value::Int(1))?;
    assert_eq!(out, [3, 0, 0, 0, 1]);
    Ok(())
}

#[test]
fn compound_removal_keeps_order() -> Result<()> {
    let mut root = Compound::new();
    root.put("a", 1i8);
    root.put("b", 2i8);
    root.put("c", 3i8);
    root.remove("b");

    let bs = to_bytes(&NamedTag::new("", root))?;
    let expected = Builder::new()
        .start_compound("")
        .byte("a", 1)
        .byte("c", 3)
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn failing_writer_is_io_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = crate::to_writer(Broken, &NamedTag::new("", 1i32)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io(std::io::ErrorKind::BrokenPipe));
    assert!(err.is_io());
}
