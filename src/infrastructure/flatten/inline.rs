//! Built-in flattening engine
//!
//! A narrow HTML-import inliner covering what the TensorBoard component
//! tree uses:
//!
//! - `<link rel="import">` is replaced by the imported document, each
//!   document at most once (later imports and cycles are dropped)
//! - `<script src>` becomes an inline script when `inline_scripts` is set
//! - `<link rel="stylesheet">` and `<link rel="import" type="css">` become
//!   `<style>` blocks when `inline_css` is set
//! - comments are dropped when `strip_comments` is set, except `@license`
//!
//! Excluded and non-inlined references stay in place with their URL
//! rewritten relative to the entry document. Relative `src`/`href`
//! attributes and CSS `url(...)` targets in inlined content are rebased the
//! same way.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::{FlattenError, FlattenOptions, Flattener};

use super::html::{self, Attr, Piece, Token};
use super::paths;

#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFlattener;

impl InlineFlattener {
    pub fn new() -> Self {
        Self
    }
}

impl Flattener for InlineFlattener {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn flatten(
        &self,
        root: &Path,
        entry: &Path,
        options: &FlattenOptions,
    ) -> Result<String, FlattenError> {
        let entry_rel = entry
            .strip_prefix(root)
            .map_err(|_| FlattenError::OutsideRoot {
                reference: entry.display().to_string(),
                referrer: root.to_path_buf(),
            })?
            .to_string_lossy()
            .replace('\\', "/");

        let mut session = Session {
            root,
            options,
            entry_dir: paths::parent_dir(&entry_rel).to_string(),
            visited: HashSet::new(),
        };
        session.visited.insert(entry_rel.clone());

        let source = session.read(&entry_rel)?;
        let out = session.process(&entry_rel, &source)?;
        tracing::debug!(documents = session.visited.len(), "inlined documents");
        Ok(out)
    }
}

/// What a resolved local reference turned into
enum Target {
    /// Left external; carries the URL to write back
    Keep(String),
    /// Inline. `logical` is the path as referenced, `physical` the
    /// redirected root-relative path that is read.
    Inline { logical: String, physical: String },
}

struct Session<'a> {
    root: &'a Path,
    options: &'a FlattenOptions,
    entry_dir: String,
    visited: HashSet<String>,
}

impl Session<'_> {
    fn read(&self, rel: &str) -> Result<String, FlattenError> {
        let path = self.root.join(rel);
        std::fs::read_to_string(&path).map_err(|source| FlattenError::Read { path, source })
    }

    fn process(&mut self, doc: &str, html: &str) -> Result<String, FlattenError> {
        let mut out = String::with_capacity(html.len());

        for piece in html::scan(html) {
            match piece {
                Piece::Text(text) => {
                    out.push_str(&html::rewrite_url_attrs(text, |url| self.rebase(doc, url)));
                }
                Piece::Token { raw, token } => match token {
                    Token::Comment(comment) => {
                        if !self.options.strip_comments || html::is_license_comment(comment) {
                            out.push_str(comment);
                        }
                    }
                    Token::Style(style) => {
                        out.push_str(&html::rewrite_css_urls(style, |url| self.rebase(doc, url)));
                    }
                    Token::Script { attrs, body } => {
                        out.push_str(&self.script(doc, raw, attrs, body)?);
                    }
                    Token::Link(attrs) => {
                        out.push_str(&self.link(doc, raw, attrs)?);
                    }
                },
            }
        }
        Ok(out)
    }

    fn script(
        &self,
        doc: &str,
        raw: &str,
        mut attrs: Vec<Attr>,
        body: &str,
    ) -> Result<String, FlattenError> {
        let Some(src) = html::attr(&attrs, "src").map(str::to_string) else {
            return Ok(raw.to_string());
        };
        if paths::is_external(&src) {
            return Ok(raw.to_string());
        }

        // a script with both src and a body keeps both
        let inline = self.options.inline_scripts && body.trim().is_empty();
        match self.target(doc, &src, inline)? {
            Target::Keep(url) => {
                html::set_attr(&mut attrs, "src", url);
                Ok(format!("{}{}</script>", html::render_open("script", &attrs), body))
            }
            Target::Inline { physical, .. } => {
                let content = self.read_referenced(doc, &src, &physical)?;
                attrs.retain(|a| a.name != "src");
                Ok(format!(
                    "{}{}</script>",
                    html::render_open("script", &attrs),
                    html::escape_script(&content)
                ))
            }
        }
    }

    fn link(&mut self, doc: &str, raw: &str, mut attrs: Vec<Attr>) -> Result<String, FlattenError> {
        let rel = html::attr(&attrs, "rel").unwrap_or_default().to_ascii_lowercase();
        let Some(href) = html::attr(&attrs, "href").map(str::to_string) else {
            return Ok(raw.to_string());
        };
        if paths::is_external(&href) {
            return Ok(raw.to_string());
        }

        let is_css_import =
            rel == "import" && html::attr(&attrs, "type").is_some_and(|t| t.eq_ignore_ascii_case("css"));

        if rel == "stylesheet" || is_css_import {
            return match self.target(doc, &href, self.options.inline_css)? {
                Target::Keep(url) => {
                    html::set_attr(&mut attrs, "href", url);
                    Ok(html::render_open("link", &attrs))
                }
                Target::Inline { logical, physical } => {
                    let css = self.read_referenced(doc, &href, &physical)?;
                    let css = html::rewrite_css_urls(&css, |url| self.rebase(&logical, url));
                    Ok(format!("<style>{}</style>", html::escape_style(&css)))
                }
            };
        }

        if rel == "import" {
            return match self.target(doc, &href, true)? {
                Target::Keep(url) => {
                    html::set_attr(&mut attrs, "href", url);
                    Ok(html::render_open("link", &attrs))
                }
                Target::Inline { logical, physical } => {
                    if !self.visited.insert(physical.clone()) {
                        return Ok(String::new());
                    }
                    let imported = self.read_referenced(doc, &href, &physical)?;
                    let body = html::strip_document_wrapper(&imported);
                    // nested references resolve against the path as imported
                    self.process(&logical, &body)
                }
            };
        }

        // icons, manifests and other links: only fix up the URL
        match self.target(doc, &href, false)? {
            Target::Keep(url) => {
                html::set_attr(&mut attrs, "href", url);
                Ok(html::render_open("link", &attrs))
            }
            Target::Inline { physical, .. } => {
                html::set_attr(
                    &mut attrs,
                    "href",
                    paths::relative_to(&self.entry_dir, &physical),
                );
                Ok(html::render_open("link", &attrs))
            }
        }
    }

    /// Resolve `href` from `doc`, apply redirects and decide whether to inline.
    fn target(&self, doc: &str, href: &str, inline: bool) -> Result<Target, FlattenError> {
        let resolved = paths::resolve(paths::parent_dir(doc), href).ok_or_else(|| {
            FlattenError::OutsideRoot {
                reference: href.to_string(),
                referrer: PathBuf::from(doc),
            }
        })?;
        let redirected = self.redirect(&resolved);

        let excluded =
            self.options.excludes.matches(&resolved) || self.options.excludes.matches(&redirected);

        if excluded || !inline {
            tracing::trace!(reference = href, path = %redirected, excluded, "kept external");
            Ok(Target::Keep(paths::relative_to(&self.entry_dir, &redirected)))
        } else {
            Ok(Target::Inline {
                logical: resolved,
                physical: redirected,
            })
        }
    }

    fn redirect(&self, resolved: &str) -> String {
        self.options
            .redirects
            .iter()
            .find_map(|r| r.apply(resolved))
            .unwrap_or_else(|| resolved.to_string())
    }

    /// URL of an asset referenced from `doc`, as seen from the entry document.
    ///
    /// `None` leaves the reference untouched: remote and root-relative URLs,
    /// template bindings, and anything in a document beside the entry.
    fn rebase(&self, doc: &str, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if paths::parent_dir(doc) == self.entry_dir
            || paths::is_external(reference)
            || reference.starts_with('/')
            || reference.contains("{{")
            || reference.contains("[[")
        {
            return None;
        }

        let resolved = paths::resolve(paths::parent_dir(doc), reference)?;
        let mut url = paths::relative_to(&self.entry_dir, &self.redirect(&resolved));
        if let Some(idx) = reference.find(['?', '#']) {
            url.push_str(&reference[idx..]);
        }
        Some(url)
    }

    fn read_referenced(&self, doc: &str, href: &str, rel: &str) -> Result<String, FlattenError> {
        let path = self.root.join(rel);
        if !path.is_file() {
            return Err(FlattenError::Unresolved {
                reference: href.to_string(),
                referrer: PathBuf::from(doc),
                resolved: path,
            });
        }
        self.read(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{build_exclusions, build_redirects, THIRD_PARTY_SCRIPTS};
    use crate::domain::value_objects::{ComponentName, ExclusionList};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn flatten(dir: &TempDir, entry: &str, options: &FlattenOptions) -> Result<String, FlattenError> {
        InlineFlattener::new().flatten(dir.path(), &dir.path().join(entry), options)
    }

    fn options(third_party: &[&str], first_party: &[&str]) -> FlattenOptions {
        let names: Vec<ComponentName> = first_party
            .iter()
            .map(|n| ComponentName::parse(n).unwrap())
            .collect();
        FlattenOptions::bundle(
            build_exclusions(third_party, &THIRD_PARTY_SCRIPTS),
            build_redirects("components", &names),
        )
    }

    #[test]
    fn inlines_imports_scripts_and_styles() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-widget/tf-widget.html"><dom-module id="tf-app"></dom-module>"#,
        );
        write(
            dir.path(),
            "components/tf_widget/tf-widget.html",
            r#"<link rel="stylesheet" href="w.css"><script src="w.js"></script>"#,
        );
        write(dir.path(), "components/tf_widget/w.css", "p { color: red; }");
        write(dir.path(), "components/tf_widget/w.js", "Polymer({is: 'tf-widget'});");

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&[], &["tf_app", "tf_widget"]),
        )
        .unwrap();

        assert_eq!(
            out,
            "<style>p { color: red; }</style><script>Polymer({is: 'tf-widget'});</script><dom-module id=\"tf-app\"></dom-module>"
        );
    }

    #[test]
    fn excluded_components_stay_external_with_entry_relative_url() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-widget/tf-widget.html">"#,
        );
        write(
            dir.path(),
            "components/tf_widget/tf-widget.html",
            r#"<link rel="import" href="../polymer/polymer.html"><x-w></x-w>"#,
        );

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&["polymer"], &["tf_app", "tf_widget"]),
        )
        .unwrap();

        assert_eq!(
            out,
            "<link rel=\"import\" href=\"../polymer/polymer.html\"><x-w></x-w>"
        );
    }

    #[test]
    fn manual_script_exclusion_keeps_shell_inlined() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-imports/d3.html">"#,
        );
        write(
            dir.path(),
            "components/tf-imports/d3.html",
            r#"<script src="d3.js"></script><script src="shim.js"></script>"#,
        );
        write(dir.path(), "components/tf-imports/shim.js", "window.shim = 1;");

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&[], &["tf_app"]),
        )
        .unwrap();

        assert_eq!(
            out,
            "<script src=\"../tf-imports/d3.js\"></script><script>window.shim = 1;</script>"
        );
    }

    #[test]
    fn manual_exclusion_matches_dash_path_of_redirected_shell() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-imports/d3.html">"#,
        );
        write(
            dir.path(),
            "components/tf_imports/d3.html",
            r#"<script src="d3.js"></script><script src="shim.js"></script>"#,
        );
        write(dir.path(), "components/tf_imports/d3.js", "window.d3 = {};");
        write(dir.path(), "components/tf_imports/shim.js", "window.shim = 1;");

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&[], &["tf_app", "tf_imports"]),
        )
        .unwrap();

        assert_eq!(
            out,
            "<script src=\"../tf_imports/d3.js\"></script><script>window.shim = 1;</script>"
        );
    }

    #[test]
    fn asset_urls_in_inlined_content_are_rebased_to_the_entry() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-w/tf-w.html"><img src="logo.png">"#,
        );
        write(
            dir.path(),
            "components/tf_w/tf-w.html",
            concat!(
                r#"<link rel="stylesheet" href="w.css">"#,
                r#"<img src="icon.png?v=2"><a href="https://example.com/">x</a>"#,
                r#"<iron-icon src="[[icon]]"></iron-icon>"#,
                "<style>b { background: url('../tf-w/dot.png'); }</style>",
            ),
        );
        write(
            dir.path(),
            "components/tf_w/w.css",
            "p { background: url(icon.png); } q { background: url(data:image/png;base64,AA==); }",
        );

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&[], &["tf_app", "tf_w"]),
        )
        .unwrap();

        assert_eq!(
            out,
            concat!(
                "<style>p { background: url(../tf_w/icon.png); } ",
                "q { background: url(data:image/png;base64,AA==); }</style>",
                r#"<img src="../tf_w/icon.png?v=2"><a href="https://example.com/">x</a>"#,
                r#"<iron-icon src="[[icon]]"></iron-icon>"#,
                "<style>b { background: url('../tf_w/dot.png'); }</style>",
                r#"<img src="logo.png">"#,
            )
        );
    }

    #[test]
    fn inlined_stylesheet_cannot_close_its_style_element() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_a/tf-a.html",
            r#"<link rel="stylesheet" href="a.css">"#,
        );
        write(dir.path(), "components/tf_a/a.css", "p::after { content: '</style>'; }");

        let out = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a"])).unwrap();
        assert_eq!(out, "<style>p::after { content: '<\\/style>'; }</style>");
    }

    #[test]
    fn script_with_src_and_body_keeps_body_and_entry_relative_src() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_app/tf-app.html",
            r#"<link rel="import" href="../tf-w/tf-w.html">"#,
        );
        write(
            dir.path(),
            "components/tf_w/tf-w.html",
            r#"<script src="w.js">window.fallback = 1;</script>"#,
        );

        let out = flatten(
            &dir,
            "components/tf_app/tf-app.html",
            &options(&[], &["tf_app", "tf_w"]),
        )
        .unwrap();

        assert_eq!(
            out,
            r#"<script src="../tf_w/w.js">window.fallback = 1;</script>"#
        );
    }

    #[test]
    fn each_document_is_inlined_once_and_cycles_terminate() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_a/tf-a.html",
            r#"<link rel="import" href="../tf_b/tf-b.html"><link rel="import" href="../tf_b/tf-b.html">A"#,
        );
        write(
            dir.path(),
            "components/tf_b/tf-b.html",
            r#"<link rel="import" href="../tf_a/tf-a.html">B"#,
        );

        let out = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a", "tf_b"])).unwrap();
        assert_eq!(out, "BA");
    }

    #[test]
    fn comments_stripped_except_license() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_a/tf-a.html",
            "<!-- @license MIT --><!-- note -->x<!--\n<link rel=\"import\" href=\"gone.html\">\n-->",
        );

        let out = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a"])).unwrap();
        assert_eq!(out, "<!-- @license MIT -->x");
    }

    #[test]
    fn comments_kept_when_not_stripping() {
        let dir = tempdir().unwrap();
        write(dir.path(), "components/tf_a/tf-a.html", "<!-- note -->x");

        let mut opts = options(&[], &["tf_a"]);
        opts.strip_comments = false;
        let out = flatten(&dir, "components/tf_a/tf-a.html", &opts).unwrap();
        assert_eq!(out, "<!-- note -->x");
    }

    #[test]
    fn scripts_left_external_when_inlining_disabled() {
        let dir = tempdir().unwrap();
        write(dir.path(), "components/tf_a/tf-a.html", r#"<script src="a.js"></script>"#);

        let mut opts = options(&[], &["tf_a"]);
        opts.inline_scripts = false;
        let out = flatten(&dir, "components/tf_a/tf-a.html", &opts).unwrap();
        assert_eq!(out, r#"<script src="a.js"></script>"#);
    }

    #[test]
    fn imported_document_wrappers_are_removed() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_a/tf-a.html",
            r#"<link rel="import" href="b.html">"#,
        );
        write(
            dir.path(),
            "components/tf_a/b.html",
            "<!doctype html><html><head></head><body><b>b</b></body></html>",
        );

        let out = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a"])).unwrap();
        assert_eq!(out, "<b>b</b>");
    }

    #[test]
    fn remote_references_are_untouched() {
        let dir = tempdir().unwrap();
        let html = r#"<script src="https://cdn.example.com/x.js"></script><link rel="stylesheet" href="//fonts.example.com/f.css">"#;
        write(dir.path(), "components/tf_a/tf-a.html", html);

        let out = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a"])).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn missing_import_is_unresolved() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "components/tf_a/tf-a.html",
            r#"<link rel="import" href="../tf-missing/x.html">"#,
        );

        let err = flatten(&dir, "components/tf_a/tf-a.html", &options(&[], &["tf_a"])).unwrap_err();
        match err {
            FlattenError::Unresolved { reference, resolved, .. } => {
                assert_eq!(reference, "../tf-missing/x.html");
                assert!(resolved.ends_with("components/tf-missing/x.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reference_above_root_is_rejected() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.html", r#"<script src="../../x.js"></script>"#);

        let err = flatten(&dir, "a.html", &FlattenOptions::bundle(ExclusionList::new(), vec![])).unwrap_err();
        assert!(matches!(err, FlattenError::OutsideRoot { .. }));
    }

    #[test]
    fn missing_entry_is_read_error() {
        let dir = tempdir().unwrap();
        let err = flatten(&dir, "nope.html", &FlattenOptions::default()).unwrap_err();
        assert!(matches!(err, FlattenError::Read { .. }));
    }
}
