use crate::error::{Result, ScormError};
use crate::util::file_name_string;
use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity, unescape_with};
use std::path::Path;

/// Elements whose content is raw text and never holds markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Tag boundary seen by the scanner.
#[derive(Debug, PartialEq)]
enum TitleTag {
    Open,
    Close,
}

/// Extract the text of the first `<title>` element in an HTML document.
///
/// This is a best-effort scanner, not a parser: it walks the markup tag by
/// tag, tracking only whether it is currently inside the title. Tag names
/// match case-insensitively, comments and `<script>`/`<style>` bodies are
/// skipped, and character references are decoded one at a time. Returns
/// `None` when there is no title or it is blank.
pub fn extract_title(markup: &str) -> Option<String> {
    let mut in_title = false;
    let mut raw = String::new();
    let mut rest = markup;

    loop {
        let Some(lt) = rest.find('<') else {
            if in_title {
                raw.push_str(rest);
            }
            break;
        };
        if in_title {
            raw.push_str(&rest[..lt]);
        }

        let tail = &rest[lt..];
        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }

        let Some(gt) = tail.find('>') else {
            // Unterminated tag: whatever follows is text.
            if in_title {
                raw.push_str(tail);
            }
            break;
        };

        let inner = &tail[1..gt];
        rest = &tail[gt + 1..];
        if !in_title && let Some(name) = raw_text_element(inner) {
            rest = skip_raw_text(rest, name);
            continue;
        }
        match classify(inner) {
            Some(TitleTag::Open) => in_title = true,
            Some(TitleTag::Close) if in_title => break,
            _ => {}
        }
    }

    let decoded = decode_references(&raw);
    let title = decoded.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Classify the inside of a `<...>` tag as a title boundary, if it is one.
fn classify(inner: &str) -> Option<TitleTag> {
    let (kind, body) = match inner.strip_prefix('/') {
        Some(body) => (TitleTag::Close, body),
        None => (TitleTag::Open, inner),
    };
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    if !body[..name_len].eq_ignore_ascii_case("title") {
        return None;
    }
    // <title/> carries no text
    if kind == TitleTag::Open && body.trim_end().ends_with('/') {
        return None;
    }
    Some(kind)
}

/// Name of the raw-text element opened by `<inner>`, if any.
fn raw_text_element(inner: &str) -> Option<&'static str> {
    let name_len = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    if inner.trim_end().ends_with('/') {
        return None;
    }
    RAW_TEXT_ELEMENTS
        .iter()
        .find(|name| inner[..name_len].eq_ignore_ascii_case(name))
        .copied()
}

/// Skip past the `</name ...>` that closes a raw-text element.
fn skip_raw_text<'a>(text: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets aligned with `text`
    let lower = text.to_ascii_lowercase();
    let Some(pos) = lower.find(&format!("</{name}")) else {
        return "";
    };
    let close = &text[pos..];
    close.find('>').map_or("", |gt| &close[gt + 1..])
}

/// Decode character references one at a time.
///
/// Numeric references, XML entities and the HTML5 named entities are
/// resolved. Anything unrecognised, including a bare `&`, stays as written.
fn decode_references(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let end = tail
            .find(';')
            .filter(|&semi| !tail[1..semi].contains(|c: char| c == '&' || c.is_whitespace()));
        let Some(semi) = end else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };

        let reference = &tail[..=semi];
        let resolved = unescape_with(reference, |entity| {
            resolve_predefined_entity(entity).or_else(|| resolve_html5_entity(entity))
        });
        match resolved {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push_str(reference),
        }
        rest = &tail[semi + 1..];
    }

    out.push_str(rest);
    out
}

/// Read an HTML file and return its page title, falling back to the file name.
pub fn page_title(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ScormError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let markup = String::from_utf8(bytes).map_err(|_| ScormError::Encoding {
        path: path.to_path_buf(),
    })?;
    Ok(extract_title(&markup).unwrap_or_else(|| file_name_string(path)))
}
