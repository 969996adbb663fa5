//! nbtag reads and writes NBT, the binary tag format used by *Minecraft: Java
//! Edition* to store world data, player inventories and the like.
//!
//! NBT is a tree. Every node has a type, a payload, and (unless it is an
//! element of a list) a name. The two container types are:
//!
//! * [`Compound`]: named children of any type, ended on the wire by an `End`
//!   tag.
//! * [`List`]: anonymous children which all share one [`TagType`], written
//!   once in the list header.
//!
//! * For the owned tree see [`Value`] and [`NamedTag`].
//! * For decoding see [`read`], [`from_bytes`] and [`from_reader`].
//! * For encoding see [`write`], [`to_bytes`] and [`to_writer`].
//!
//! # Quick example
//!
//! Build a small tree, encode it and read it back.
//!
//! ```
//! use nbtag::{Compound, List, NamedTag, Value};
//!
//! # fn main() -> nbtag::error::Result<()> {
//! let mut tags = List::default();
//! tags.append(Value::from("a"))?;
//! tags.append(Value::from("b"))?;
//!
//! let mut root = Compound::new();
//! root.put("health", 20i32);
//! root.put("tags", tags);
//!
//! let tag = NamedTag::new("root", root);
//! let bytes = nbtag::to_bytes(&tag)?;
//! let back = nbtag::from_bytes(&bytes)?;
//!
//! assert_eq!(tag, back);
//! # Ok(())
//! # }
//! ```
//!
//! # Compression
//!
//! NBT files are usually gzip or zlib compressed. This crate does no
//! decompression itself; wrap the reader or writer, for example with
//! `flate2::read::GzDecoder`, before handing it over.
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//!
//! # fn main() -> nbtag::error::Result<()> {
//! let file = std::fs::File::open("level.dat")?;
//! let level = nbtag::from_reader(GzDecoder::new(file))?;
//! println!("{:#?}", level);
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod error;
pub mod read;
pub mod write;

mod compound;
mod list;
mod value;

pub use compound::Compound;
pub use list::List;
pub use read::{
    from_bytes, from_bytes_with_opts, from_reader, from_reader_with_opts, ReadOptions,
};
pub use value::*;
pub use write::{to_bytes, to_writer};

use error::Error;

#[cfg(test)]
mod test;

/// An NBT tag type. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TagType {
    /// The one byte ID of this type on the wire.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The conventional name of the type, eg `TAG_Compound`.
    pub const fn name(self) -> &'static str {
        match self {
            TagType::End => "TAG_End",
            TagType::Byte => "TAG_Byte",
            TagType::Short => "TAG_Short",
            TagType::Int => "TAG_Int",
            TagType::Long => "TAG_Long",
            TagType::Float => "TAG_Float",
            TagType::Double => "TAG_Double",
            TagType::ByteArray => "TAG_Byte_Array",
            TagType::String => "TAG_String",
            TagType::List => "TAG_List",
            TagType::Compound => "TAG_Compound",
            TagType::IntArray => "TAG_Int_Array",
            TagType::LongArray => "TAG_Long_Array",
        }
    }

    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change.
impl TryFrom<u8> for TagType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        use TagType::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(Error::invalid_tag(value)),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag.id()
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TagType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for TagType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id: u8 = Deserialize::deserialize(deserializer)?;
        TagType::try_from(id).map_err(serde::de::Error::custom)
    }
}
