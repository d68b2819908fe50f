//! Paragraph text extraction

use scraper::{Html, Selector};

/// Concatenated text of every `<p>` element, in document order
///
/// Paragraphs are joined without a separator, the same way reading the text
/// of a whole `p` selection does. Entities are decoded by the parser; text
/// inside nested inline elements (`<a>`, `<strong>`, ...) is included.
pub fn paragraph_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    doc.select(&selector)
        .flat_map(|p| p.text())
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_concatenated() {
        let html = "<html><body><p>First.</p><div>skip</div><p>Second.</p></body></html>";
        assert_eq!(paragraph_text(html), "First.Second.");
    }

    #[test]
    fn test_nested_inline_text() {
        let html = "<p>A <strong>bold</strong> and <a href=\"/x\">linked</a> word</p>";
        assert_eq!(paragraph_text(html), "A bold and linked word");
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<p>Tom &amp; Jerry &lt;3 &quot;quoted&quot;</p>";
        assert_eq!(paragraph_text(html), "Tom & Jerry <3 \"quoted\"");
    }

    #[test]
    fn test_no_paragraphs() {
        let html = "<html><body><h1>Title</h1><div>Body</div></body></html>";
        assert_eq!(paragraph_text(html), "");
    }

    #[test]
    fn test_non_html_input() {
        assert_eq!(paragraph_text("plain text without markup"), "");
        assert_eq!(paragraph_text(""), "");
    }

    #[test]
    fn test_script_outside_paragraphs_ignored() {
        let html = r#"<!DOCTYPE html>
<html>
<head><script>alert('bad');</script></head>
<body>
    <h1>Title</h1>
    <p>Paragraph text.</p>
</body>
</html>"#;
        let text = paragraph_text(html);
        assert_eq!(text, "Paragraph text.");
        assert!(!text.contains("alert"));
    }
}
