//! Data
//!
//! Categorical attribute values, attribute maps, and labeled examples.
use crate::errors::Id3Error;
use hashbrown::HashMap;
use std::fmt::{self, Display};

/// A single categorical attribute value.
///
/// Values only match values of the same variant: `Int(7)` and `Str("7")`
/// are distinct categories. The CSV loader yields `Str` values only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Str(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Str(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

/// Mapping from attribute name to value.
///
/// Iteration follows insertion order, which is what seeds the order of
/// split candidates at the root of a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    names: Vec<String>,
    values: HashMap<String, AttributeValue>,
}

impl AttributeMap {
    pub fn new() -> Self {
        AttributeMap::default()
    }

    /// Add an attribute, consuming and returning the map.
    /// Re-adding a name replaces its value and keeps its original position.
    pub fn with<K: Into<String>, V: Into<AttributeValue>>(mut self, name: K, value: V) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    fn insert(&mut self, name: String, value: AttributeValue) {
        if self.values.insert(name.clone(), value).is_none() {
            self.names.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Attribute names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.names.iter().map(move |n| (n, &self.values[n]))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if both maps carry exactly the same attribute names.
    pub fn same_schema(&self, other: &AttributeMap) -> bool {
        self.len() == other.len() && self.names.iter().all(|n| other.contains(n))
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}

/// An attribute map paired with its boolean label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledExample {
    pub attributes: AttributeMap,
    pub label: bool,
}

impl LabeledExample {
    pub fn new(attributes: AttributeMap, label: bool) -> Self {
        LabeledExample { attributes, label }
    }
}

impl From<(AttributeMap, bool)> for LabeledExample {
    fn from((attributes, label): (AttributeMap, bool)) -> Self {
        LabeledExample { attributes, label }
    }
}

/// A non-empty collection of labeled examples sharing one attribute schema.
#[derive(Clone, Debug)]
pub struct Dataset {
    examples: Vec<LabeledExample>,
}

impl Dataset {
    /// Validate and wrap `examples`.
    ///
    /// Every example must carry exactly the attribute names of the first one.
    pub fn new(examples: Vec<LabeledExample>) -> Result<Self, Id3Error> {
        let first = examples.first().ok_or(Id3Error::EmptyDataset)?;
        for (row, example) in examples.iter().enumerate().skip(1) {
            if !first.attributes.same_schema(&example.attributes) {
                return Err(Id3Error::InconsistentSchema(
                    row,
                    first.attributes.names().join(", "),
                    example.attributes.names().join(", "),
                ));
            }
        }
        Ok(Dataset { examples })
    }

    pub fn examples(&self) -> &[LabeledExample] {
        &self.examples
    }

    /// Attribute names, in the first example's order.
    pub fn attribute_names(&self) -> &[String] {
        self.examples[0].attributes.names()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.examples.iter().map(|e| e.label).collect()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn into_examples(self) -> Vec<LabeledExample> {
        self.examples
    }
}
