/// Escapes special characters in `input` for safe inclusion in HTML, both as element content
/// and as a double-quoted attribute value.
/// Specifically, it replaces:
/// - `&` with `&amp;`
/// - `<` with `&lt;`
/// - `>` with `&gt;`
/// - `"` with `&quot;`
/// - `'` with `&#x27;`
///
/// This function uses `memchr` to skip over runs of ordinary characters.
pub fn escape_html(output: &mut String, input: &str) {
    let bytes = input.as_bytes();
    // Offsets of the next markup character and of the next quote; only the one that was
    // consumed is searched again.
    let mut markup = find_markup(bytes, 0);
    let mut quote = find_quote(bytes, 0);
    let mut pos = 0;

    while let Some(index) = markup.into_iter().chain(quote).min() {
        // All special characters are ASCII, so `index` and `index + 1` are char boundaries.
        output.push_str(&input[pos..index]);
        output.push_str(match bytes[index] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => "&#x27;",
        });
        pos = index + 1;

        if markup == Some(index) {
            markup = find_markup(bytes, pos);
        } else {
            quote = find_quote(bytes, pos);
        }
    }

    // Copy any remaining text after the last special character
    output.push_str(&input[pos..]);
}

#[inline]
fn find_markup(bytes: &[u8], from: usize) -> Option<usize> {
    memchr::memchr3(b'&', b'<', b'>', &bytes[from..]).map(|i| i + from)
}

#[inline]
fn find_quote(bytes: &[u8], from: usize) -> Option<usize> {
    memchr::memchr2(b'"', b'\'', &bytes[from..]).map(|i| i + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(input: &str) -> String {
        let mut output = String::new();
        escape_html(&mut output, input);
        output
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_no_special_characters() {
        assert_eq!(escape("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape("5 < 10 > 1"), "5 &lt; 10 &gt; 1");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_quote_after_markup() {
        assert_eq!(escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
    }

    #[test]
    fn test_consecutive_special_characters() {
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_special_at_end() {
        assert_eq!(escape("test&"), "test&amp;");
    }

    #[test]
    fn test_utf8_with_special_characters() {
        assert_eq!(escape("Hello 世界 & <test>"), "Hello 世界 &amp; &lt;test&gt;");
    }

    #[test]
    fn test_many_quotes_then_markup() {
        let n = 100_000;
        let input = "\"'".repeat(n) + "&";
        let output = escape(&input);
        assert_eq!(output.len(), n * ("&quot;".len() + "&#x27;".len()) + "&amp;".len());
        assert!(output.starts_with("&quot;&#x27;&quot;"));
        assert!(output.ends_with("&#x27;&amp;"));
    }

    #[test]
    fn test_interleaved_quotes_and_markup() {
        assert_eq!(escape("a'<b\">c&'"), "a&#x27;&lt;b&quot;&gt;c&amp;&#x27;");
    }

    #[test]
    fn test_appends_to_existing_output() {
        let mut output = "prefix: ".to_string();
        escape_html(&mut output, "<tag>");
        assert_eq!(output, "prefix: &lt;tag&gt;");
    }
}
