use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_CONTENT_CHARS;
use crate::text::truncate_chars;

use super::error::FetchError;

static NON_CONTENT_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>|<noscript[^>]*>.*?</noscript>",
    )
    .expect("static regex")
});

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("static regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n\x0B\x0C]+").expect("static regex"));

/// Minimal HTML to text: drops script/style/noscript blocks and tags, decodes the common
/// entities, collapses whitespace. Not a parser.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = NON_CONTENT_BLOCKS.replace_all(html, " ");
    let text = TAGS.replace_all(&text, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Strips `body`, rejects text shorter than [`MIN_CONTENT_CHARS`], caps at `max_chars`.
pub fn clean_page_text(url: &str, body: &str, max_chars: usize) -> Result<String, FetchError> {
    let cleaned = strip_html(body);
    if cleaned.is_empty() {
        return Err(FetchError::Empty {
            url: url.to_string(),
        });
    }

    let chars = cleaned.chars().count();
    if chars < MIN_CONTENT_CHARS {
        return Err(FetchError::TooShort {
            url: url.to_string(),
            chars,
            min: MIN_CONTENT_CHARS,
        });
    }

    if max_chars > 0 {
        Ok(truncate_chars(&cleaned, max_chars).to_string())
    } else {
        Ok(cleaned)
    }
}
