/// The result of splitting a shorthand like `div.note.warning#intro`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'source> {
    pub name: &'source str,
    pub classes: Vec<&'source str>,
    pub id: Option<&'source str>,
}

/// Tag name used when the shorthand contains no tokens at all.
const DEFAULT_TAG: &str = "div";

#[inline]
fn is_delimiter(c: char) -> bool {
    c == '.' || c == '#' || c.is_whitespace()
}

/// Splits a shorthand into tokens.
///
/// A token is a non-empty run of characters that are neither whitespace, `.` nor `#`,
/// optionally preceded by a single `.` or `#`. Everything else is skipped.
struct Tokens<'source> {
    rest: &'source str,
}

impl<'source> Iterator for Tokens<'source> {
    type Item = &'source str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest: &'source str = self.rest;
            let first = rest.chars().next()?;
            if first.is_whitespace() {
                self.rest = &rest[first.len_utf8()..];
                continue;
            }
            let prefix_len = if first == '.' || first == '#' { 1 } else { 0 };
            let body = &rest[prefix_len..];
            let body_len = body.find(is_delimiter).unwrap_or(body.len());
            if body_len == 0 {
                // A lone prefix; it may still start the next token.
                self.rest = body;
                continue;
            }
            let (token, tail) = rest.split_at(prefix_len + body_len);
            self.rest = tail;
            return Some(token);
        }
    }
}

/// Parse a shorthand tag string into tag name, classes and identifier.
///
/// The first token is the tag name, whatever it looks like. Later tokens starting with `.`
/// add a class and tokens starting with `#` set the identifier; if there are several of
/// those, the last one is used. Later tokens without a prefix are ignored.
pub fn parse(shorthand: &str) -> Tag<'_> {
    let mut tokens = Tokens { rest: shorthand };
    let name = tokens.next().unwrap_or(DEFAULT_TAG);
    let mut classes = Vec::new();
    let mut id = None;
    for token in tokens {
        if let Some(class) = token.strip_prefix('.') {
            classes.push(class);
        } else if let Some(ident) = token.strip_prefix('#') {
            id = Some(ident);
        }
    }
    Tag { name, classes, id }
}
