//! HTML escaping for text and attribute values.

/// Escape a string for insertion into HTML text or attribute positions.
///
/// Replaces the five HTML-special characters (`&`, `<`, `>`, `"`, `'`)
/// with their entities, which is enough to prevent both element and
/// attribute breakout for values wrapped in double quotes.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape_html("Red"), "Red");
    }

    #[test]
    fn escapes_all_five_specials() {
        assert_eq!(
            escape_html(r#"<a href="x" onclick='y'>&"#),
            "&lt;a href=&quot;x&quot; onclick=&#x27;y&#x27;&gt;&amp;"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
    }
}
