use std::convert::TryFrom;

use crate::TagType;

mod model;
mod write;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagType::$tag), $val);
            assert_eq!(TagType::try_from($val as u8).unwrap(), TagType::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        let err = TagType::try_from(value).unwrap_err();
        assert!(err.is_malformed());
    }
}

#[test]
fn tag_type_classes() {
    assert!(TagType::Double.is_primitive());
    assert!(!TagType::String.is_primitive());
    assert!(TagType::LongArray.is_array());
    assert!(TagType::List.is_container());
    assert!(TagType::Compound.is_container());
    assert!(!TagType::End.is_container());
    assert_eq!(TagType::IntArray.to_string(), "TAG_Int_Array");
}

#[test]
fn tag_type_serde_as_id() {
    let json = serde_json::to_string(&TagType::Compound).unwrap();
    assert_eq!(json, "10");

    let tag: TagType = serde_json::from_str("8").unwrap();
    assert_eq!(tag, TagType::String);

    assert!(serde_json::from_str::<TagType>("13").is_err());
}
