//! Build HTML with plain function calls.
//!
//! A node is created from a shorthand tag string such as `div.note#intro` and a list of
//! arguments. Each argument is either a set of attributes, a list of children or a single
//! child. The finished tree renders to markup with [`ToString`].
//!
//! # Usage
//!
//! The [`h!`] macro takes any number of arguments:
//!
//! ```rust
//! use hyperscript::{attrs, h};
//!
//! let page = h!(
//!     "div.card#main",
//!     h!("h1", "Tom & Jerry")?,
//!     attrs! { "data-id" => 7, "hidden" => false },
//!     vec![h!("p", "one")?, h!("p", "two")?],
//! )?;
//! assert_eq!(
//!     page.to_string(),
//!     r#"<div class="card" id="main" data-id="7"><h1>Tom &amp; Jerry</h1><p>one</p><p>two</p></div>"#
//! );
//! # Ok::<(), hyperscript::BuildError>(())
//! ```
//!
//! Options are given after a semicolon:
//!
//! ```rust
//! use hyperscript::h;
//!
//! let html = h!("div", "<b>bold</b>"; escape = false)?;
//! assert_eq!(html, "<div><b>bold</b></div>");
//!
//! let empty = h!("ul", h!("li"; prune_empty = true)?; prune_empty = true)?;
//! assert_eq!(empty, "");
//! # Ok::<(), hyperscript::BuildError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: With this feature, [`Options`] implements serde's `Deserialize` and the node tree
//!   implements `Serialize`.
//!
mod args;
mod style;
mod tag;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use renderer::ast::NodeParts;

pub use renderer::ast::{Child, Node};
pub use renderer::error::BuildError;
pub use renderer::value::{RawText, Value};

pub use self::args::{Arg, AttrInput, Attrs};
pub use self::style::Style;
pub use self::tag::{Tag, parse as parse_tag};
use self::args::classify;

/// Whether text is escaped when no option says otherwise.
pub const DEFAULT_ESCAPE: bool = true;

/// Options that apply to a single node.
///
/// The options are read when the node is created and do not pass on to its children.
///
/// # Example usage
///
/// ```rust
/// use hyperscript::Options;
///
/// // Default values
/// let options = Options::default();
/// assert!(options.escape);
///
/// // Remove elements without content
/// let options = Options {
///     prune_empty: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Options {
    /// If `true`, text children and attribute values are HTML-escaped, unless they are
    /// [`RawText`].
    pub escape: bool,
    /// If `true`, the node renders as nothing at all when its content renders as nothing.
    /// Void elements are never removed.
    pub prune_empty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape: DEFAULT_ESCAPE,
            prune_empty: false,
        }
    }
}

/// Creates nodes with a fixed set of options.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    options: Options,
}

impl Builder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Create a node from a shorthand tag string and arguments.
    ///
    /// ```rust
    /// use hyperscript::{Arg, Attrs, Builder, Options};
    ///
    /// let builder = Builder::new(Options { escape: false, ..Default::default() });
    /// let args = [Arg::from(Attrs::new().set("href", "/")), Arg::from("&rarr;")];
    /// let link = builder.build("a.nav", args)?;
    /// assert_eq!(link.to_string(), r#"<a class="nav" href="/">&rarr;</a>"#);
    /// # Ok::<(), hyperscript::BuildError>(())
    /// ```
    ///
    /// This fails if the tag is a void element like `br` and there are children left after
    /// dropping empty strings and nulls.
    pub fn build<I>(&self, shorthand: &str, args: I) -> Result<Node, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let Tag { name, classes, id } = tag::parse(shorthand);
        let (attrs, children) = classify(args.into_iter().map(Into::into));
        let parts = NodeParts {
            tag: name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            id: id.map(Into::into),
            attrs,
            children,
        };
        Node::new(parts, self.options.escape, self.options.prune_empty)
    }
}

/// Create a node with the default options.
///
/// See [`h!`] for a form that takes arguments of different types.
#[inline]
pub fn h<I>(shorthand: &str, args: I) -> Result<Node, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Builder::default().build(shorthand, args)
}

/// Mark text as safe, so that it is never escaped.
#[inline]
pub fn safe(text: impl Into<String>) -> RawText {
    RawText::new(text)
}

/// Mark a value as safe; this fails if the value is not text.
#[inline]
pub fn try_safe(value: impl Into<Value>) -> Result<RawText, BuildError> {
    RawText::try_from(value.into())
}

/// Create a node from a shorthand tag string and any number of arguments.
///
/// Each argument is converted with [`Arg::from`]. Options can be set after a semicolon,
/// e.g. `h!("div", child; escape = false, prune_empty = true)`.
#[macro_export]
macro_rules! h {
    ($tag:expr $(, $arg:expr)* ; $($option:ident = $value:expr),+ $(,)?) => {{
        let mut options = $crate::Options::default();
        $(options.$option = $value;)+
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        $crate::Builder::new(options).build($tag, args)
    }};
    ($tag:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        $crate::h($tag, args)
    }};
}

/// Build [`Attrs`] from `name => value` pairs.
///
/// ```rust
/// use hyperscript::{attrs, h, Style};
///
/// let div = h!("div", attrs! {
///     "title" => "x",
///     "style" => Style::from([("color", "red")]),
/// })?;
/// assert_eq!(div.to_string(), r#"<div title="x" style="color: red"></div>"#);
/// # Ok::<(), hyperscript::BuildError>(())
/// ```
#[macro_export]
macro_rules! attrs {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::Attrs::new()$(.set($name, $value))*
    };
}
