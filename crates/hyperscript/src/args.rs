use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::Serialize;

use renderer::ast::{Child, Node};
use renderer::value::{RawText, Value};

use crate::style::Style;

/// The value side of an attribute before classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum AttrInput {
    Value(Value),
    Style(Style),
}

impl From<Style> for AttrInput {
    #[inline]
    fn from(style: Style) -> Self {
        AttrInput::Style(style)
    }
}

impl From<Value> for AttrInput {
    #[inline]
    fn from(value: Value) -> Self {
        AttrInput::Value(value)
    }
}

macro_rules! impl_attr_input_from_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for AttrInput {
                #[inline]
                fn from(value: $ty) -> Self {
                    AttrInput::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_attr_input_from_value!(
    &str, String, &String, Box<str>, RawText, bool, f32, f64, i8, i16, i32, i64, isize, u8, u16,
    u32, u64, usize
);

impl<T: Into<Value>> From<Option<T>> for AttrInput {
    #[inline]
    fn from(value: Option<T>) -> Self {
        AttrInput::Value(Value::from(value))
    }
}

/// An ordered list of attributes, as passed to a node.
///
/// A name may appear more than once; when the node is built, the last value wins.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Attrs(Vec<(Box<str>, AttrInput)>);

impl Attrs {
    #[inline]
    pub fn new() -> Self {
        Attrs(Vec::new())
    }

    /// Add an attribute.
    ///
    /// `true` and null render as a bare attribute name, `false` omits the attribute.
    #[inline]
    pub fn set(mut self, name: impl Into<Box<str>>, value: impl Into<AttrInput>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Add a `style` attribute.
    #[inline]
    pub fn style(self, style: impl Into<Style>) -> Self {
        self.set("style", AttrInput::Style(style.into()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<Box<str>>, V: Into<AttrInput>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attrs(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<Box<str>>, V: Into<AttrInput>, const N: usize> From<[(K, V); N]> for Attrs {
    #[inline]
    fn from(attrs: [(K, V); N]) -> Self {
        attrs.into_iter().collect()
    }
}

/// One argument of a node constructor.
///
/// The variant decides how the argument is used: attributes are merged into the node's
/// attributes, a list is spliced into the children and anything else becomes one child.
#[derive(Debug, Clone)]
pub enum Arg {
    Attrs(Attrs),
    List(Vec<Child>),
    Child(Child),
}

impl From<Attrs> for Arg {
    #[inline]
    fn from(attrs: Attrs) -> Self {
        Arg::Attrs(attrs)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Arg {
    #[inline]
    fn from(children: Vec<T>) -> Self {
        Arg::List(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Arg {
    #[inline]
    fn from(children: [T; N]) -> Self {
        Arg::List(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>> From<Option<T>> for Arg {
    #[inline]
    fn from(child: Option<T>) -> Self {
        Arg::Child(Child::from(child))
    }
}

macro_rules! impl_arg_from_child {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                #[inline]
                fn from(child: $ty) -> Self {
                    Arg::Child(Child::from(child))
                }
            }
        )+
    };
}

impl_arg_from_child!(
    Child, Node, Value, &str, String, &String, Box<str>, RawText, bool, f32, f64, i8, i16, i32,
    i64, isize, u8, u16, u32, u64, usize
);

/// Sort constructor arguments into attributes and children.
///
/// Later attributes replace earlier ones with the same name but keep their position. Style
/// values are rendered to CSS text here. Empty strings and nulls are left in the children;
/// they are dropped when the node is created.
pub fn classify<I>(args: I) -> (IndexMap<Box<str>, Value>, Vec<Child>)
where
    I: IntoIterator<Item = Arg>,
{
    let mut attrs = IndexMap::new();
    let mut children = Vec::new();
    for arg in args {
        match arg {
            Arg::Attrs(Attrs(entries)) => {
                for (name, input) in entries {
                    let value = match input {
                        AttrInput::Value(value) => value,
                        AttrInput::Style(style) => Value::from(style.normalize()),
                    };
                    attrs.insert(name, value);
                }
            }
            Arg::List(list) => children.extend(list),
            Arg::Child(child) => children.push(child),
        }
    }
    (attrs, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_and_children() {
        let (attrs, children) = classify([
            Arg::from("a"),
            Arg::from(Attrs::new().set("href", "/")),
            Arg::from(1),
        ]);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("href"), Some(&Value::from("/")));
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_later_attrs_override() {
        let (attrs, _) = classify([
            Arg::from(Attrs::from([("a", "1"), ("b", "2")])),
            Arg::from(Attrs::from([("a", "3")])),
        ]);
        let attrs: Vec<_> = attrs.into_iter().collect();
        assert_eq!(
            attrs,
            [
                (Box::<str>::from("a"), Value::from("3")),
                (Box::<str>::from("b"), Value::from("2")),
            ]
        );
    }

    #[test]
    fn test_list_is_flattened() {
        let (_, children) = classify([Arg::from("x"), Arg::from(["y", "z"]), Arg::from("w")]);
        let texts: Vec<_> = children
            .iter()
            .map(|child| match child {
                Child::Value(Value::Text(text)) => &**text,
                _ => panic!("expected text"),
            })
            .collect();
        assert_eq!(texts, ["x", "y", "z", "w"]);
    }

    #[test]
    fn test_style_is_normalized() {
        let (attrs, _) = classify([Arg::from(
            Attrs::new().style([("color", "red"), ("margin", "0")]),
        )]);
        assert_eq!(attrs.get("style"), Some(&Value::from("color: red; margin: 0")));
    }

    #[test]
    fn test_style_text_passthrough() {
        let (attrs, _) = classify([Arg::from(Attrs::new().set("style", "color: red"))]);
        assert_eq!(attrs.get("style"), Some(&Value::from("color: red")));
    }

    #[test]
    fn test_option_arguments() {
        let (_, children) = classify([Arg::from(None::<&str>), Arg::from(Some("x"))]);
        assert!(matches!(children[0], Child::Value(Value::Null)));
        assert!(matches!(children[1], Child::Value(Value::Text(_))));
    }
}
