use std::fmt;

use bitflags::bitflags;
use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::BuildError;
use crate::value::{RawText, Value};

/// Elements that cannot have content and are written without a closing tag.
static VOID_ELEMENTS: phf::Set<&'static str> = phf::phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
};

/// Returns `true` if `tag` names a void element. The lookup is case-sensitive.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(tag)
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct NodeFlags: u8 {
        const VOID = 1;
        const ESCAPE = 1 << 1;
        const PRUNE_EMPTY = 1 << 2;
    }
}

/// A child of a node: either a nested element or a scalar leaf.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Child {
    Node(Node),
    Value(Value),
}

impl From<Node> for Child {
    #[inline]
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Value> for Child {
    #[inline]
    fn from(value: Value) -> Self {
        Child::Value(value)
    }
}

macro_rules! impl_child_from_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Child {
                #[inline]
                fn from(value: $ty) -> Self {
                    Child::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_child_from_value!(
    &str, String, &String, Box<str>, RawText, bool, f32, f64, i8, i16, i32, i64, isize, u8, u16,
    u32, u64, usize
);

impl<T: Into<Child>> From<Option<T>> for Child {
    #[inline]
    fn from(child: Option<T>) -> Self {
        child.map_or(Child::Value(Value::Null), Into::into)
    }
}

/// An element in a markup tree.
///
/// A node is fully determined when it is created and never changes afterwards, so it can be
/// rendered any number of times, also from several threads at once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Node {
    tag: Box<str>,
    classes: Vec<Box<str>>,
    id: Option<Box<str>>,
    attrs: IndexMap<Box<str>, Value>,
    children: Vec<Child>,
    flags: NodeFlags,
}

static_assertions::assert_impl_all!(Node: Send, Sync);

/// The parts of a node before validation.
#[derive(Debug, Default)]
pub struct NodeParts {
    pub tag: Box<str>,
    pub classes: Vec<Box<str>>,
    pub id: Option<Box<str>>,
    pub attrs: IndexMap<Box<str>, Value>,
    pub children: Vec<Child>,
}

impl Node {
    /// Create a node from its parts.
    ///
    /// The tag must not be empty. Children equal to the empty string or null are dropped. If
    /// the tag names a void element, the node must not have any remaining children.
    pub fn new(parts: NodeParts, escape: bool, prune_empty: bool) -> Result<Self, BuildError> {
        let NodeParts {
            tag,
            classes,
            id,
            attrs,
            mut children,
        } = parts;
        if tag.is_empty() {
            return Err(BuildError::empty_tag());
        }
        children.retain(|child| !matches!(child, Child::Value(value) if value.is_elided()));

        let mut flags = NodeFlags::empty();
        flags.set(NodeFlags::VOID, is_void_element(&tag));
        flags.set(NodeFlags::ESCAPE, escape);
        flags.set(NodeFlags::PRUNE_EMPTY, prune_empty);

        if flags.contains(NodeFlags::VOID) && !children.is_empty() {
            return Err(BuildError::void_with_content(&tag));
        }

        Ok(Node {
            tag,
            classes,
            id,
            attrs,
            children,
            flags,
        })
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn classes(&self) -> impl ExactSizeIterator<Item = &str> {
        self.classes.iter().map(AsRef::as_ref)
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Attributes in insertion order.
    #[inline]
    pub fn attrs(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (name.as_ref(), value))
    }

    /// Look up a single attribute.
    #[inline]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.flags.contains(NodeFlags::VOID)
    }

    #[inline]
    pub fn escapes(&self) -> bool {
        self.flags.contains(NodeFlags::ESCAPE)
    }

    #[inline]
    pub fn prunes_empty(&self) -> bool {
        self.flags.contains(NodeFlags::PRUNE_EMPTY)
    }

    /// Append the markup for this node to `output`.
    pub fn render_into(&self, output: &mut String) {
        let start = output.len();
        let escape = self.escapes();

        output.push('<');
        output.push_str(&self.tag);
        if !self.classes.is_empty() {
            output.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    output.push(' ');
                }
                output.push_str(class);
            }
            output.push('"');
        }
        if let Some(id) = &self.id {
            output.push_str(" id=\"");
            output.push_str(id);
            output.push('"');
        }
        for (name, value) in &self.attrs {
            match value {
                Value::Bool(false) => {}
                Value::Bool(true) | Value::Null => {
                    output.push(' ');
                    output.push_str(name);
                }
                value => {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    value.push_to_string(output, escape);
                    output.push('"');
                }
            }
        }
        output.push('>');

        if self.is_void() {
            return;
        }

        let content_start = output.len();
        for child in &self.children {
            match child {
                Child::Node(node) => node.render_into(output),
                Child::Value(value) => value.push_to_string(output, escape),
            }
        }
        if self.prunes_empty() && output.len() == content_start {
            output.truncate(start);
            return;
        }

        output.push_str("</");
        output.push_str(&self.tag);
        output.push('>');
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        self.render_into(&mut output);
        f.write_str(&output)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Node {}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for String {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}
