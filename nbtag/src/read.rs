//! Decoding of NBT from any [`Read`] into an owned [`NamedTag`].
//!
//! The reader does not do decompression. Wrap compressed input in a decoder
//! first, eg `flate2::read::GzDecoder`.
//!
//! Decoding is all or nothing. The first structural problem in the input
//! aborts the read with an [`Error`], and no partially built tree is
//! returned.
//!
//! ```
//! use nbtag::{read::Reader, TagType, Value};
//!
//! // An int named "a" with the value 5.
//! let input = [3u8, 0, 1, b'a', 0, 0, 0, 5];
//!
//! let mut reader = Reader::new(&input[..]);
//! let tag = reader.read_tag().unwrap();
//!
//! assert_eq!(tag.name(), "a");
//! assert_eq!(tag.tag_type(), TagType::Int);
//! assert_eq!(tag.value(), &Value::Int(5));
//! ```
use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::{
    error::{Error, Result},
    Compound, List, NamedTag, TagType, Value,
};

// Counts in the input are untrusted, so never reserve more than this many
// elements up front. Larger collections grow as their elements arrive.
const MAX_PREALLOC: usize = 4096;

/// Options controlling how NBT is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Read the root tag without a name. The type byte is still read.
    pub anonymous_root: bool,

    /// Maximum nesting of lists and compounds, counting a root container as
    /// the first level. Zero only admits scalar and array roots.
    ///
    /// Writing has no such limit, so a tree built in memory deeper than
    /// this encodes fine but needs a larger limit to be read back.
    pub max_depth: usize,

    /// Maximum element count accepted for any list, array or string.
    pub max_seq_len: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            anonymous_root: false,
            max_depth: 512,
            max_seq_len: i32::MAX as usize,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anonymous_root(mut self, anonymous_root: bool) -> Self {
        self.anonymous_root = anonymous_root;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }
}

/// Reader can take any reader and decode NBT tags from it.
pub struct Reader<R: Read> {
    reader: R,
    opts: ReadOptions,
}

impl<R: Read> Reader<R> {
    /// Create a new reader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReadOptions::default())
    }

    pub fn with_options(reader: R, opts: ReadOptions) -> Self {
        Self { reader, opts }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.opts
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a root tag. The tag is named unless the options ask for an
    /// anonymous root, in which case the returned tag has the empty name.
    pub fn read_tag(&mut self) -> Result<NamedTag> {
        let tag = self.read_type_expecting_value()?;
        let name = if self.opts.anonymous_root {
            String::new()
        } else {
            self.read_size_prefixed_string()?
        };

        let value = self.read_payload_at(tag, 0)?;
        debug!("read root {} {:?}", tag, name);

        Ok(NamedTag::new(name, value))
    }

    /// Read a type byte, a name and a payload, regardless of the root options.
    pub fn read_named(&mut self) -> Result<NamedTag> {
        let tag = self.read_type_expecting_value()?;
        let name = self.read_size_prefixed_string()?;
        let value = self.read_payload_at(tag, 0)?;

        Ok(NamedTag::new(name, value))
    }

    /// Read the payload of a value whose type is already known. Neither a type
    /// byte nor a name is read. This is how list elements are stored.
    pub fn read_payload(&mut self, tag: TagType) -> Result<Value> {
        self.read_payload_at(tag, 0)
    }

    fn read_type(&mut self) -> Result<TagType> {
        let tag = self.reader.read_u8()?;
        TagType::try_from(tag)
    }

    fn read_type_expecting_value(&mut self) -> Result<TagType> {
        match self.read_type()? {
            TagType::End => Err(Error::malformed(
                "invalid nbt: unexpected TAG_End where a value was expected",
            )),
            tag => Ok(tag),
        }
    }

    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;
        if len > self.opts.max_seq_len {
            return Err(Error::malformed(format!(
                "string of {} bytes exceeds the limit of {}",
                len, self.opts.max_seq_len
            )));
        }

        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf[..])?;

        Ok(cesu8::from_java_cesu8(&buf[..])
            .map_err(|_| Error::nonunicode_string(&buf[..]))?
            .into_owned())
    }

    fn read_len(&mut self) -> Result<usize> {
        let size = self.reader.read_i32::<BigEndian>()?;
        let size: usize = size
            .try_into()
            .map_err(|_| Error::malformed(format!("invalid nbt: negative length {}", size)))?;

        if size > self.opts.max_seq_len {
            return Err(Error::malformed(format!(
                "length {} exceeds the limit of {}",
                size, self.opts.max_seq_len
            )));
        }

        Ok(size)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        if depth >= self.opts.max_depth {
            return Err(Error::malformed(format!(
                "nbt nested deeper than {} levels",
                self.opts.max_depth
            )));
        }
        Ok(depth + 1)
    }

    fn read_payload_at(&mut self, tag: TagType, depth: usize) -> Result<Value> {
        Ok(match tag {
            TagType::End => {
                return Err(Error::malformed(
                    "invalid nbt: TAG_End has no payload",
                ))
            }
            TagType::Byte => Value::Byte(self.reader.read_i8()?),
            TagType::Short => Value::Short(self.reader.read_i16::<BigEndian>()?),
            TagType::Int => Value::Int(self.reader.read_i32::<BigEndian>()?),
            TagType::Long => Value::Long(self.reader.read_i64::<BigEndian>()?),
            TagType::Float => Value::Float(self.reader.read_f32::<BigEndian>()?),
            TagType::Double => Value::Double(self.reader.read_f64::<BigEndian>()?),
            TagType::String => Value::String(self.read_size_prefixed_string()?),
            TagType::ByteArray => {
                let size = self.read_len()?;
                let mut buf = Vec::with_capacity(size.min(MAX_PREALLOC));
                (&mut self.reader).take(size as u64).read_to_end(&mut buf)?;
                if buf.len() != size {
                    return Err(Error::malformed(
                        "eof: unexpectedly ran out of input in byte array",
                    ));
                }

                Value::ByteArray(buf.into_iter().map(|b| b as i8).collect())
            }
            TagType::IntArray => {
                let size = self.read_len()?;
                let mut buf = Vec::with_capacity(size.min(MAX_PREALLOC));
                for _ in 0..size {
                    buf.push(self.reader.read_i32::<BigEndian>()?);
                }

                Value::IntArray(buf)
            }
            TagType::LongArray => {
                let size = self.read_len()?;
                let mut buf = Vec::with_capacity(size.min(MAX_PREALLOC));
                for _ in 0..size {
                    buf.push(self.reader.read_i64::<BigEndian>()?);
                }

                Value::LongArray(buf)
            }
            TagType::List => Value::List(self.read_list(depth)?),
            TagType::Compound => Value::Compound(self.read_compound(depth)?),
        })
    }

    fn read_list(&mut self, depth: usize) -> Result<List> {
        let depth = self.enter(depth)?;

        let element_tag = self.read_type()?;
        if element_tag == TagType::End {
            return Err(Error::malformed(
                "invalid nbt: unexpected list type: TAG_End",
            ));
        }

        let size = self.read_len()?;
        trace!("list of {} {} at depth {}", size, element_tag, depth);

        // Elements are anonymous and have no type byte of their own.
        let mut items = Vec::with_capacity(size.min(MAX_PREALLOC));
        for _ in 0..size {
            items.push(self.read_payload_at(element_tag, depth)?);
        }

        Ok(List::from_homogeneous(element_tag, items))
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        let depth = self.enter(depth)?;
        trace!("compound at depth {}", depth);

        let mut compound = Compound::new();
        loop {
            let tag = self.read_type()?;
            if tag == TagType::End {
                // End tags have no name or value.
                break;
            }

            let name = self.read_size_prefixed_string()?;
            let value = self.read_payload_at(tag, depth)?;

            if compound.contains_key(&name) {
                return Err(Error::malformed(format!(
                    "invalid nbt: duplicate key {:?} in compound",
                    name
                )));
            }
            compound.put(name, value);
        }

        Ok(compound)
    }
}

/// Read a root tag from `reader` with default options.
pub fn from_reader<R: Read>(reader: R) -> Result<NamedTag> {
    from_reader_with_opts(reader, ReadOptions::default())
}

pub fn from_reader_with_opts<R: Read>(reader: R, opts: ReadOptions) -> Result<NamedTag> {
    Reader::with_options(reader, opts).read_tag()
}

/// Read a root tag from a byte slice with default options. Any bytes after
/// the root tag are ignored.
pub fn from_bytes(input: &[u8]) -> Result<NamedTag> {
    from_reader(input)
}

pub fn from_bytes_with_opts(input: &[u8], opts: ReadOptions) -> Result<NamedTag> {
    from_reader_with_opts(input, opts)
}
