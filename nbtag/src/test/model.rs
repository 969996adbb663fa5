use std::convert::TryFrom;

use crate::{error::Result, Compound, List, NamedTag, TagType, Value};

#[test]
fn default_list_is_empty_compound_list() {
    let list = List::default();
    assert!(list.is_empty());
    assert_eq!(list.element_type(), TagType::Compound);
}

#[test]
fn list_of_end_is_rejected() {
    let err = List::new(TagType::End).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn empty_list_adopts_first_type() -> Result<()> {
    let mut list = List::new(TagType::Byte)?;
    list.append(Value::Double(1.0))?;
    assert_eq!(list.element_type(), TagType::Double);
    Ok(())
}

#[test]
fn append_mismatch_leaves_list_unchanged() -> Result<()> {
    let mut list = List::default();
    list.append(1i32)?;
    list.append(2i32)?;
    let before = list.clone();

    let err = list.append(3i64).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(list, before);
    assert_eq!(list.len(), 2);
    assert_eq!(list.element_type(), TagType::Int);
    Ok(())
}

#[test]
fn set_checks_type() -> Result<()> {
    let mut list = List::default();
    list.append("a")?;
    list.append("b")?;

    let old = list.set(0, "z")?;
    assert_eq!(old, Value::from("a"));
    assert_eq!(list.get(0), Some(&Value::from("z")));

    assert!(list.set(1, 5i8).unwrap_err().is_type_mismatch());
    assert_eq!(list.get(1), Some(&Value::from("b")));
    Ok(())
}

#[test]
fn set_sole_element_changes_type() -> Result<()> {
    let mut list = List::default();
    list.append("a")?;
    list.set(0, 1i32)?;
    assert_eq!(list.element_type(), TagType::Int);
    Ok(())
}

#[test]
fn remove_keeps_element_type() -> Result<()> {
    let mut list = List::default();
    list.append(1i16)?;
    list.append(2i16)?;

    assert_eq!(list.remove(0), Value::Short(1));
    assert_eq!(list.remove(0), Value::Short(2));
    assert!(list.is_empty());
    assert_eq!(list.element_type(), TagType::Short);
    Ok(())
}

#[test]
fn list_try_from_vec() {
    let list = List::try_from(vec![Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.element_type(), TagType::Int);

    let err = List::try_from(vec![Value::Int(1), Value::Long(2)]).unwrap_err();
    assert!(err.is_type_mismatch());

    let empty = List::try_from(vec![]).unwrap();
    assert_eq!(empty.element_type(), TagType::Compound);
}

#[test]
fn compound_put_get_remove() {
    let mut c = Compound::new();
    assert!(c.is_empty());

    assert_eq!(c.put("a", 1i32), None);
    assert_eq!(c.put("b", "hello"), None);
    assert_eq!(c.put("a", 2i32), Some(Value::Int(1)));

    assert_eq!(c.len(), 2);
    assert_eq!(c.get("a"), Some(&Value::Int(2)));
    assert_eq!(c.get("b").and_then(Value::as_str), Some("hello"));
    assert_eq!(c.get("missing"), None);

    // Replacing keeps the original position.
    assert_eq!(c.keys().collect::<Vec<_>>(), ["a", "b"]);

    assert_eq!(c.remove("a"), Some(Value::Int(2)));
    assert_eq!(c.remove("a"), None);
    assert!(!c.contains_key("a"));
    assert_eq!(c.keys().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn compound_get_mut() {
    let mut c = Compound::new();
    c.put("inner", Compound::new());

    c.get_mut("inner")
        .and_then(Value::as_compound_mut)
        .unwrap()
        .put("x", 1i8);

    assert_eq!(c["inner"].as_compound().unwrap()["x"], Value::Byte(1));
}

#[test]
fn value_tag_types() {
    let cases = [
        (Value::Byte(0), TagType::Byte),
        (Value::Short(0), TagType::Short),
        (Value::Int(0), TagType::Int),
        (Value::Long(0), TagType::Long),
        (Value::Float(0.0), TagType::Float),
        (Value::Double(0.0), TagType::Double),
        (Value::ByteArray(vec![]), TagType::ByteArray),
        (Value::String(String::new()), TagType::String),
        (Value::List(List::default()), TagType::List),
        (Value::Compound(Compound::new()), TagType::Compound),
        (Value::IntArray(vec![]), TagType::IntArray),
        (Value::LongArray(vec![]), TagType::LongArray),
    ];

    for (value, tag) in cases {
        assert_eq!(value.tag_type(), tag);
    }
}

#[test]
fn value_conversions() {
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from(200u8), Value::Byte(-56));
    assert_eq!(Value::from(7i64).as_i64(), Some(7));
    assert_eq!(Value::from(1.5f32).as_f64(), Some(1.5));
    assert_eq!(Value::from("x").as_i64(), None);
    assert_eq!(Value::from(vec![1i64]), Value::LongArray(vec![1]));
}

#[test]
fn named_tag_accessors() {
    let mut tag = NamedTag::new("level", Compound::new());
    assert_eq!(tag.name(), "level");
    assert_eq!(tag.tag_type(), TagType::Compound);

    tag.set_name("other");
    tag.value_mut().as_compound_mut().unwrap().put("a", 1i8);

    let (name, value) = tag.into_parts();
    assert_eq!(name, "other");
    assert_eq!(value.as_compound().unwrap().len(), 1);

    assert_eq!(NamedTag::anonymous(1i32).name(), "");
}

#[test]
fn serializes_through_serde() -> Result<()> {
    let mut list = List::default();
    list.append(1i32)?;
    list.append(2i32)?;

    let mut root = Compound::new();
    root.put("name", "Steve");
    root.put("scores", list);
    root.put("bytes", vec![1i8, 2]);

    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(json, r#"{"name":"Steve","scores":[1,2],"bytes":[1,2]}"#);

    let tag = NamedTag::new("root", Compound::new());
    let json = serde_json::to_string(&tag).unwrap();
    assert_eq!(json, r#"{"name":"root","value":{}}"#);
    Ok(())
}
