use std::fmt;

/// Represents an error that occurred while building a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError(pub(crate) BuildErrKind);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BuildErrKind {
    /// A void element like `<br>` was given children.
    VoidWithContent(Box<str>),
    /// A node was given an empty tag name.
    EmptyTag,
    /// A non-text value was passed where text is required.
    ExpectedText(&'static str),
}

impl BuildErrKind {
    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            BuildErrKind::VoidWithContent(tag) => {
                "\"".to_string() + tag + "\" is a void element and cannot have content."
            }
            BuildErrKind::EmptyTag => "Tag name must not be empty.".to_string(),
            BuildErrKind::ExpectedText(got) => "Expected text, got ".to_string() + got + ".",
        }
    }
}

impl BuildError {
    pub(crate) fn void_with_content(tag: &str) -> Self {
        BuildError(BuildErrKind::VoidWithContent(tag.into()))
    }

    pub(crate) fn empty_tag() -> Self {
        BuildError(BuildErrKind::EmptyTag)
    }

    pub(crate) fn expected_text(got: &'static str) -> Self {
        BuildError(BuildErrKind::ExpectedText(got))
    }

    /// Returns `true` if a node could not be constructed from its arguments.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self.0,
            BuildErrKind::VoidWithContent(_) | BuildErrKind::EmptyTag
        )
    }

    /// Returns `true` if a value of the wrong type was given.
    pub fn is_type_error(&self) -> bool {
        matches!(self.0, BuildErrKind::ExpectedText(_))
    }

    pub fn message(&self) -> String {
        self.0.string()
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.string())
    }
}

impl std::error::Error for BuildError {}
