//! Tag scanning for the built-in flattener
//!
//! Only the handful of constructs that carry references are recognized:
//! comments, `<link>`, `<script>` and `<style>`. Everything else passes
//! through untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Comments, links, scripts (with body) and styles, in document order.
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|<link\b[^>]*>|<script\b([^>]*)>(.*?)</script\s*>|<style\b[^>]*>.*?</style\s*>",
    )
    .unwrap()
});

static ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#).unwrap()
});

/// Wrapper tags an imported document drops before being spliced in.
static DOCUMENT_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<!doctype[^>]*>|</?(?:html|head|body)\b[^>]*>").unwrap());

/// Opening tags of any element, used to reach URL attributes in plain text.
static OPEN_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[a-zA-Z][^>]*>").unwrap());

static URL_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\s(?:src|href)\s*=\s*)(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#).unwrap()
});

static CSS_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)url\(\s*(?:"([^"]*)"|'([^']*)'|([^)"'\s]*))\s*\)"#).unwrap()
});

/// A recognized construct found by `scan`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Comment(&'a str),
    Link(Vec<Attr>),
    Script { attrs: Vec<Attr>, body: &'a str },
    /// Inline `<style>` block, passed through verbatim
    Style(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>,
}

/// Interleaved text and tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Token { raw: &'a str, token: Token<'a> },
}

/// Split `html` into text runs and recognized tokens.
pub fn scan(html: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for caps in TAG.captures_iter(html) {
        let Some(m) = caps.get(0) else { continue };
        if m.start() > last {
            pieces.push(Piece::Text(&html[last..m.start()]));
        }
        let raw = m.as_str();
        let lower = raw.get(..7).unwrap_or(raw).to_ascii_lowercase();

        let token = if lower.starts_with("<!--") {
            Token::Comment(raw)
        } else if lower.starts_with("<link") {
            let inner = raw[5..raw.len() - 1].trim_end_matches('/');
            Token::Link(parse_attrs(inner))
        } else if lower.starts_with("<script") {
            Token::Script {
                attrs: parse_attrs(caps.get(1).map_or("", |g| g.as_str())),
                body: caps.get(2).map_or("", |g| g.as_str()),
            }
        } else {
            Token::Style(raw)
        };

        pieces.push(Piece::Token { raw, token });
        last = m.end();
    }

    if last < html.len() {
        pieces.push(Piece::Text(&html[last..]));
    }
    pieces
}

pub fn parse_attrs(s: &str) -> Vec<Attr> {
    ATTR.captures_iter(s)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|v| v.as_str().to_string());
            Some(Attr { name, value })
        })
        .collect()
}

pub fn attr<'a>(attrs: &'a [Attr], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name == name)
        .and_then(|a| a.value.as_deref())
}

/// Replace (or add) `name` in `attrs`.
pub fn set_attr(attrs: &mut Vec<Attr>, name: &str, value: String) {
    match attrs.iter_mut().find(|a| a.name == name) {
        Some(existing) => existing.value = Some(value),
        None => attrs.push(Attr {
            name: name.to_string(),
            value: Some(value),
        }),
    }
}

/// Render an opening tag from its attributes.
pub fn render_open(tag: &str, attrs: &[Attr]) -> String {
    let mut out = format!("<{}", tag);
    for a in attrs {
        out.push(' ');
        out.push_str(&a.name);
        if let Some(v) = &a.value {
            out.push_str("=\"");
            out.push_str(&v.replace('"', "&quot;"));
            out.push('"');
        }
    }
    out.push('>');
    out
}

/// Remove doctype and html/head/body wrappers from an imported document.
pub fn strip_document_wrapper(html: &str) -> String {
    DOCUMENT_WRAPPER.replace_all(html, "").into_owned()
}

/// License comments survive comment stripping.
pub fn is_license_comment(comment: &str) -> bool {
    comment.contains("@license")
}

/// Rewrite `src`/`href` values on every opening tag in `text`.
///
/// `rewrite` returns the replacement URL, or `None` to leave it as is.
pub fn rewrite_url_attrs(text: &str, rewrite: impl Fn(&str) -> Option<String>) -> String {
    OPEN_TAG
        .replace_all(text, |tag: &Captures| {
            URL_ATTR
                .replace_all(&tag[0], |attr: &Captures| {
                    let (value, quote) = quoted_value(attr, 2);
                    match rewrite(value) {
                        Some(url) => format!("{}{q}{}{q}", &attr[1], url, q = quote),
                        None => attr[0].to_string(),
                    }
                })
                .into_owned()
        })
        .into_owned()
}

/// Rewrite the target of every `url(...)` in a stylesheet.
pub fn rewrite_css_urls(css: &str, rewrite: impl Fn(&str) -> Option<String>) -> String {
    CSS_URL
        .replace_all(css, |caps: &Captures| {
            let (value, quote) = quoted_value(caps, 1);
            match rewrite(value) {
                Some(url) => format!("url({q}{}{q})", url, q = quote),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Value and quote style from three consecutive groups: double, single, bare.
fn quoted_value<'c>(caps: &'c Captures, first: usize) -> (&'c str, &'static str) {
    if let Some(v) = caps.get(first) {
        (v.as_str(), "\"")
    } else if let Some(v) = caps.get(first + 1) {
        (v.as_str(), "'")
    } else {
        (caps.get(first + 2).map_or("", |v| v.as_str()), "")
    }
}

/// Keep an inlined stylesheet from closing its own `<style>` element.
pub fn escape_style(css: &str) -> String {
    css.replace("</style", "<\\/style")
}

/// Keep an inlined script from closing its own `<script>` element.
pub fn escape_script(body: &str) -> String {
    body.replace("</script", "<\\/script")
}
