use serde::Serialize;

use crate::{Compound, List, TagType};

/// Value is a complete NBT payload. It owns its data. Compounds and Lists
/// own their children recursively.
///
/// A `Value` carries no name. The name of a value lives either in the
/// [`Compound`] holding it, or in a [`NamedTag`] at the root. Values inside a
/// [`List`] are anonymous.
///
/// ```
/// # use nbtag::{Compound, Value};
/// let mut compound = Compound::new();
/// compound.put("DataVersion", 3465i32);
///
/// match compound["DataVersion"] {
///     Value::Int(ver) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The tag type this value is encoded as.
    pub fn tag_type(&self) -> TagType {
        match self {
            Value::Byte(_) => TagType::Byte,
            Value::Short(_) => TagType::Short,
            Value::Int(_) => TagType::Int,
            Value::Long(_) => TagType::Long,
            Value::Float(_) => TagType::Float,
            Value::Double(_) => TagType::Double,
            Value::ByteArray(_) => TagType::ByteArray,
            Value::String(_) => TagType::String,
            Value::List(_) => TagType::List,
            Value::Compound(_) => TagType::Compound,
            Value::IntArray(_) => TagType::IntArray,
            Value::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// A value together with its name. This is what sits at the root of an NBT
/// document. Anonymous tags have an empty name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTag {
    name: String,
    value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A tag with the empty name.
    pub fn anonymous(value: impl Into<Value>) -> Self {
        Self::new(String::new(), value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tag_type(&self) -> TagType {
        self.value.tag_type()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

// Values are serialized without any NBT type information, the same way
// serde_json's untagged values are. This is lossy, and is meant for viewing
// NBT through other serde formats.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
        }
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(
    u: &mut arbitrary::Unstructured<'a>,
    tag: TagType,
    f: F,
) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    let items = u
        .arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect();
    Ok(List::from_homogeneous(tag, items))
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    Ok(match u.arbitrary::<TagType>()? {
        TagType::End => return Err(arbitrary::Error::IncorrectFormat),
        TagType::Byte => het_list(u, TagType::Byte, Value::Byte)?,
        TagType::Short => het_list(u, TagType::Short, Value::Short)?,
        TagType::Int => het_list(u, TagType::Int, Value::Int)?,
        TagType::Long => het_list(u, TagType::Long, Value::Long)?,
        TagType::Float => het_list(u, TagType::Float, Value::Float)?,
        TagType::Double => het_list(u, TagType::Double, Value::Double)?,
        TagType::ByteArray => het_list(u, TagType::ByteArray, Value::ByteArray)?,
        TagType::String => het_list(u, TagType::String, Value::String)?,
        TagType::List => {
            // make a list of lists
            let len = u.arbitrary_len::<Value>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(Value::List(arb_list(u)?));
            }
            List::from_homogeneous(TagType::List, v)
        }
        TagType::Compound => het_list(u, TagType::Compound, Value::Compound)?,
        TagType::IntArray => het_list(u, TagType::IntArray, Value::IntArray)?,
        TagType::LongArray => het_list(u, TagType::LongArray, Value::LongArray)?,
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<TagType>()? {
            TagType::End => return Err(arbitrary::Error::IncorrectFormat),
            TagType::Byte => Value::Byte(u.arbitrary()?),
            TagType::Short => Value::Short(u.arbitrary()?),
            TagType::Int => Value::Int(u.arbitrary()?),
            TagType::Long => Value::Long(u.arbitrary()?),
            TagType::Float => Value::Float(u.arbitrary()?),
            TagType::Double => Value::Double(u.arbitrary()?),
            TagType::ByteArray => Value::ByteArray(u.arbitrary()?),
            TagType::String => Value::String(u.arbitrary()?),
            TagType::Compound => Value::Compound(u.arbitrary()?),
            TagType::IntArray => Value::IntArray(u.arbitrary()?),
            TagType::LongArray => Value::LongArray(u.arbitrary()?),

            // Lists need to all be the same type.
            TagType::List => Value::List(arb_list(u)?),
        })
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        arb_list(u)
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(Vec<i64>, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
impl From<&bool> for Value {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

impl From<NamedTag> for Value {
    fn from(tag: NamedTag) -> Self {
        tag.value
    }
}
