use std::error::Error;
use std::fmt::Display;
use std::io::{self, Read, Write};
use std::str::FromStr;

use flate2::read::{GzDecoder, ZlibDecoder};
use log::debug;
use nbtag::{NamedTag, Value};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug)]
pub struct ErrorMessage(pub String);
impl std::error::Error for ErrorMessage {}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the input bytes are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Guess from the first bytes of the input.
    Auto,
    Gzip,
    Zlib,
    None,
}

impl FromStr for Compression {
    type Err = ErrorMessage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Compression::Auto),
            "gzip" => Ok(Compression::Gzip),
            "zlib" => Ok(Compression::Zlib),
            "none" => Ok(Compression::None),
            _ => Err(ErrorMessage(format!("unknown compression: {}", s))),
        }
    }
}

/// Work out the compression of some data from its magic bytes.
pub fn detect(data: &[u8]) -> Compression {
    match data {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        // zlib with a 32K window, the only one in practical use.
        [0x78, b, ..] if (0x7800u16 | *b as u16) % 31 == 0 => Compression::Zlib,
        _ => Compression::None,
    }
}

/// Strip any compression from `data`.
pub fn decompress(data: Vec<u8>, compression: Compression) -> Result<Vec<u8>> {
    let compression = match compression {
        Compression::Auto => detect(&data),
        c => c,
    };
    debug!("input compression: {:?}", compression);

    let mut out = vec![];
    match compression {
        Compression::Gzip => {
            GzDecoder::new(data.as_slice()).read_to_end(&mut out)?;
        }
        Compression::Zlib => {
            ZlibDecoder::new(data.as_slice()).read_to_end(&mut out)?;
        }
        Compression::None | Compression::Auto => return Ok(data),
    }
    Ok(out)
}

/// Print a tag as an indented tree, one tag per line.
pub fn dump<W: Write>(out: &mut W, tag: &NamedTag) -> io::Result<()> {
    dump_value(out, Some(tag.name()), tag.value(), 0)
}

fn dump_value<W: Write>(
    out: &mut W,
    name: Option<&str>,
    value: &Value,
    indent: usize,
) -> io::Result<()> {
    let tag = value.tag_type();
    write!(out, "{:indent$}{}({:?}): ", "", tag, name, indent = indent)?;

    match value {
        Value::Byte(v) => writeln!(out, "{}", v),
        Value::Short(v) => writeln!(out, "{}", v),
        Value::Int(v) => writeln!(out, "{}", v),
        Value::Long(v) => writeln!(out, "{}", v),
        Value::Float(v) => writeln!(out, "{}", v),
        Value::Double(v) => writeln!(out, "{}", v),
        Value::String(v) => writeln!(out, "{:?}", v),
        Value::ByteArray(v) => writeln!(out, "{:?}", v),
        Value::IntArray(v) => writeln!(out, "{:?}", v),
        Value::LongArray(v) => writeln!(out, "{:?}", v),
        Value::List(list) => {
            writeln!(out, "{} entries of {}", list.len(), list.element_type())?;
            for item in list {
                dump_value(out, None, item, indent + 4)?;
            }
            Ok(())
        }
        Value::Compound(compound) => {
            writeln!(out, "{} entries", compound.len())?;
            for (name, item) in compound.iter() {
                dump_value(out, Some(name), item, indent + 4)?;
            }
            Ok(())
        }
    }
}
