//! Encoding of [`NamedTag`]s and [`Value`]s to any [`Write`].
//!
//! A named tag is written as its type byte, its name, then its payload. List
//! elements are written as payloads only, since the list header already
//! carries their type.
//!
//! ```
//! use nbtag::{Compound, NamedTag};
//!
//! let tag = NamedTag::new("", Compound::new());
//! let bytes = nbtag::to_bytes(&tag).unwrap();
//!
//! // type, empty name, end.
//! assert_eq!(bytes, [10, 0, 0, 0]);
//! ```
//!
//! If writing fails part way through, whatever was already handed to the
//! underlying writer stays there. The output should be discarded.
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    Compound, List, NamedTag, TagType, Value,
};

trait WriteNbt: Write {
    fn write_tag(&mut self, tag: TagType) -> Result<()> {
        self.write_u8(tag.id())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len: u16 = key.len().try_into().map_err(|_| {
            Error::malformed(format!("string of {} bytes is too long for nbt", key.len()))
        })?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::malformed(format!("length {} is too large for nbt", len)))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Writer encodes NBT to any writer. Does not do compression.
pub struct Writer<W: Write> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Gets a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this writer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a root tag with its type byte and name.
    pub fn write_tag(&mut self, tag: &NamedTag) -> Result<()> {
        debug!("write root {} {:?}", tag.tag_type(), tag.name());
        self.write_named(tag.name(), tag.value())
    }

    /// Write a type byte, the name, then the payload of `value`.
    pub fn write_named(&mut self, name: &str, value: &Value) -> Result<()> {
        self.writer.write_tag(value.tag_type())?;
        self.writer.write_size_prefixed_str(name)?;
        self.write_payload(value)
    }

    /// Write a type byte then the payload, with no name. This is the
    /// counterpart of reading with [`ReadOptions::anonymous_root`].
    ///
    /// [`ReadOptions::anonymous_root`]: crate::ReadOptions::anonymous_root
    pub fn write_unnamed(&mut self, value: &Value) -> Result<()> {
        self.writer.write_tag(value.tag_type())?;
        self.write_payload(value)
    }

    /// Write only the payload of `value`: no type byte and no name. This is
    /// how list elements are stored.
    pub fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.writer.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                self.writer.write_len(v.len())?;
                let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.writer.write_all(&bytes)?;
            }
            Value::IntArray(v) => {
                self.writer.write_len(v.len())?;
                for i in v {
                    self.writer.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.writer.write_len(v.len())?;
                for i in v {
                    self.writer.write_i64::<BigEndian>(*i)?;
                }
            }
            Value::List(v) => self.write_list(v)?,
            Value::Compound(v) => self.write_compound(v)?,
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        // Fixed by the first element, or the stored type when empty.
        let element_tag = list.element_type();
        if element_tag == TagType::End {
            return Err(Error::malformed("list element type cannot be TAG_End"));
        }

        // Checked before anything is written so that a mixed list does not
        // leave a header behind.
        if let Some((i, item)) = list
            .iter()
            .enumerate()
            .find(|(_, item)| item.tag_type() != element_tag)
        {
            return Err(Error::type_mismatch(format!(
                "list of {} has {} at index {}",
                element_tag,
                item.tag_type(),
                i
            )));
        }

        trace!("writing list of {} {}", list.len(), element_tag);
        self.writer.write_tag(element_tag)?;
        self.writer.write_len(list.len())?;
        for item in list {
            self.write_payload(item)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        trace!("writing compound of {} entries", compound.len());
        for (name, value) in compound.iter() {
            self.write_named(name, value)?;
        }
        self.writer.write_tag(TagType::End)
    }
}

/// Write a root tag to `writer`.
pub fn to_writer<W: Write>(writer: W, tag: &NamedTag) -> Result<()> {
    Writer::new(writer).write_tag(tag)
}

/// Encode a root tag to a new byte vector.
///
/// Nesting depth is not limited here. Reading applies
/// [`ReadOptions::max_depth`](crate::ReadOptions::max_depth), 512 by default.
pub fn to_bytes(tag: &NamedTag) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(&mut result, tag)?;
    Ok(result)
}
