#[cfg(feature = "serde")]
use serde::Serialize;

/// The value of a `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Style {
    /// CSS text, used as is.
    Css(String),
    /// Property/value pairs, in order.
    Declarations(Vec<(String, String)>),
}

impl Style {
    /// Render to CSS text: declarations become `key: value` joined by `"; "`.
    ///
    /// Neither properties nor values are checked or converted.
    pub fn normalize(self) -> String {
        match self {
            Style::Css(css) => css,
            Style::Declarations(declarations) => {
                let mut css = String::new();
                for (i, (property, value)) in declarations.iter().enumerate() {
                    if i > 0 {
                        css.push_str("; ");
                    }
                    css.push_str(property);
                    css.push_str(": ");
                    css.push_str(value);
                }
                css
            }
        }
    }
}

impl From<&str> for Style {
    #[inline]
    fn from(css: &str) -> Self {
        Style::Css(css.to_string())
    }
}

impl From<String> for Style {
    #[inline]
    fn from(css: String) -> Self {
        Style::Css(css)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style::Declarations(
            iter.into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Style {
    #[inline]
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}
