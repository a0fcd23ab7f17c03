use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::error::BuildError;
use crate::html_utils::escape_html;

/// Text that has already been made safe for inclusion in markup.
///
/// A `RawText` is emitted exactly as given, whether it appears as a child or as an attribute
/// value, and regardless of the escaping policy of the node it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawText(Box<str>);

impl RawText {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        RawText(text.into().into_boxed_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<Value> for RawText {
    type Error = BuildError;

    /// Only text can be marked as safe; any other value is a type error.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(text) => Ok(RawText(text)),
            Value::Raw(raw) => Ok(raw),
            other => Err(BuildError::expected_text(<&'static str>::from(&other))),
        }
    }
}

/// A scalar that can appear as an attribute value or as a leaf child.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Value {
    #[strum(serialize = "null")]
    Null,
    #[strum(serialize = "bool")]
    Bool(bool),
    #[strum(serialize = "int")]
    Int(i64),
    #[strum(serialize = "int")]
    UInt(u64),
    #[strum(serialize = "float")]
    Float(f64),
    #[strum(serialize = "text")]
    Text(Box<str>),
    #[strum(serialize = "raw text")]
    Raw(RawText),
}

impl Value {
    /// Values that are dropped when they are passed as children: null and the empty string.
    #[inline]
    pub fn is_elided(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            Value::Raw(raw) => raw.as_str().is_empty(),
            _ => false,
        }
    }

    /// Append the textual form of this value to `output`.
    ///
    /// Text is escaped if `escape` is set; raw text, numbers and booleans never are.
    /// `Null` has no textual form and appends nothing.
    pub fn push_to_string(&self, output: &mut String, escape: bool) {
        match self {
            Value::Null => {}
            Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => {
                // Writing to a `String` cannot fail.
                let _ = write!(output, "{i}");
            }
            Value::UInt(u) => {
                let _ = write!(output, "{u}");
            }
            Value::Float(f) => {
                let mut buffer = dtoa::Buffer::new();
                output.push_str(buffer.format(*f));
            }
            Value::Text(text) => {
                if escape {
                    escape_html(output, text);
                } else {
                    output.push_str(text);
                }
            }
            Value::Raw(raw) => output.push_str(raw.as_str()),
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Value::Text(text.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Value::Text(text.into_boxed_str())
    }
}

impl From<Box<str>> for Value {
    #[inline]
    fn from(text: Box<str>) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(text: &String) -> Self {
        Value::Text(text.as_str().into())
    }
}

impl From<RawText> for Value {
    #[inline]
    fn from(raw: RawText) -> Self {
        Value::Raw(raw)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    #[inline]
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

// `usize` and `isize` are at most 64 bits wide on every supported target.
impl From<usize> for Value {
    #[inline]
    fn from(u: usize) -> Self {
        Value::UInt(u as u64)
    }
}

impl From<isize> for Value {
    #[inline]
    fn from(i: isize) -> Self {
        Value::Int(i as i64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
