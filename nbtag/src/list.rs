use std::convert::TryFrom;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    TagType, Value,
};

/// An NBT list: an ordered sequence of anonymous values which all share one
/// [`TagType`].
///
/// The element type is stored so that an empty list still knows what it
/// holds. An empty list created with [`List::default`] holds compounds. An
/// empty list takes on the type of the first value appended to it.
///
/// ```
/// # use nbtag::{List, TagType, Value};
/// let mut list = List::default();
/// list.append(Value::Int(1)).unwrap();
/// assert_eq!(list.element_type(), TagType::Int);
///
/// // Elements must all be the same type.
/// assert!(list.append(Value::from("nope")).is_err());
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct List {
    element_type: TagType,
    items: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            element_type: TagType::Compound,
            items: Vec::new(),
        }
    }
}

impl List {
    /// An empty list of the given element type. `End` is not a valid element
    /// type.
    pub fn new(element_type: TagType) -> Result<Self> {
        if element_type == TagType::End {
            return Err(Error::type_mismatch("list element type cannot be TAG_End"));
        }

        Ok(Self {
            element_type,
            items: Vec::new(),
        })
    }

    /// Caller guarantees every item is of `element_type`.
    pub(crate) fn from_homogeneous(element_type: TagType, items: Vec<Value>) -> Self {
        Self {
            element_type,
            items,
        }
    }

    /// The type of the elements. For a non-empty list this is the type of the
    /// first element.
    pub fn element_type(&self) -> TagType {
        self.items
            .first()
            .map(Value::tag_type)
            .unwrap_or(self.element_type)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Mutable access to an element. Nothing stops the element from being
    /// replaced by a value of another type through this reference; such a
    /// list is rejected when written.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Add a value to the end of the list. Fails without changing the list if
    /// the list is non-empty and the value is of a different type.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.items.is_empty() {
            self.element_type = value.tag_type();
        } else {
            self.check_type(&value)?;
        }

        self.items.push(value);
        Ok(())
    }

    /// Replace the value at `index`, returning the old value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        // The sole element of a list can be swapped for any type.
        if self.items.len() > 1 {
            self.check_type(&value)?;
        } else if index == 0 && self.items.len() == 1 {
            self.element_type = value.tag_type();
        }

        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Remove and return the value at `index`. The element type is kept
    /// even when the list becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        let element_type = self.element_type();
        let removed = self.items.remove(index);
        self.element_type = element_type;
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    fn check_type(&self, value: &Value) -> Result<()> {
        let expected = self.element_type();
        let actual = value.tag_type();
        if actual != expected {
            return Err(Error::type_mismatch(format!(
                "list of {} cannot hold {}",
                expected, actual
            )));
        }
        Ok(())
    }
}

// The stored type only matters while the list is empty. A sole element
// changed through `get_mut` leaves it stale, so compare the effective type.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.element_type() == other.element_type() && self.items == other.items
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    /// Build a list from values which must all be the same type. An empty
    /// vector gives an empty compound list.
    fn try_from(items: Vec<Value>) -> Result<Self> {
        let mut list = List::default();
        for item in items {
            list.append(item)?;
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}
