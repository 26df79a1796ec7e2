//! Type-erased model payloads for cells that render a generic model.
//!
//! Model extractors return an `ItemData`; the binding hands it to any cell
//! that can receive a model before the per-row configurer runs.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A model value assigned to a cell.
///
/// # Example
///
/// ```
/// use horizon_sections::model::ItemData;
///
/// let data = ItemData::from("Hello");
/// assert_eq!(data.as_string(), Some("Hello"));
///
/// #[derive(Debug, PartialEq)]
/// struct Author { age: u32 }
///
/// let data = ItemData::new(Author { age: 42 });
/// assert_eq!(data.downcast::<Author>(), Some(&Author { age: 42 }));
/// ```
#[derive(Clone, Default)]
pub enum ItemData {
    /// No model. Extractors return this to skip injection for a row.
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
    /// Custom data (type-erased, shared).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl ItemData {
    /// Creates custom data from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        ItemData::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ItemData::Float(n) => Some(*n),
            ItemData::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to get the data as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemData::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to downcast custom data to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            ItemData::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Converts to `Option`, mapping `ItemData::None` to `None`.
    pub fn into_option(self) -> Option<ItemData> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl fmt::Debug for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemData::None => write!(f, "None"),
            ItemData::String(s) => f.debug_tuple("String").field(s).finish(),
            ItemData::Int(n) => f.debug_tuple("Int").field(n).finish(),
            ItemData::Float(n) => f.debug_tuple("Float").field(n).finish(),
            ItemData::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ItemData::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_owned())
    }
}

impl From<&String> for ItemData {
    fn from(s: &String) -> Self {
        ItemData::String(s.clone())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<u32> for ItemData {
    fn from(n: u32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        ItemData::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

impl<T: Into<ItemData>> From<Option<T>> for ItemData {
    fn from(value: Option<T>) -> Self {
        value.map_or(ItemData::None, Into::into)
    }
}
