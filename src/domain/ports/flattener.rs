//! Flattener port - the HTML-import flattening engine boundary
//!
//! The engine owns dependency traversal, import resolution and inlining.
//! The bundle task only decides the options it is called with.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{ExclusionList, PathRedirect};

/// Options recognized by every flattening engine
#[derive(Debug, Clone, Default)]
pub struct FlattenOptions {
    /// Replace `<script src>` with inline scripts
    pub inline_scripts: bool,
    /// Replace stylesheet links with inline `<style>` blocks
    pub inline_css: bool,
    /// Drop HTML comments (license comments are kept)
    pub strip_comments: bool,
    /// Path fragments left as external references
    pub excludes: ExclusionList,
    /// Path rewrites applied before resolving a reference
    pub redirects: Vec<PathRedirect>,
}

impl FlattenOptions {
    /// Options used for the distributable bundle
    pub fn bundle(excludes: ExclusionList, redirects: Vec<PathRedirect>) -> Self {
        Self {
            inline_scripts: true,
            inline_css: true,
            strip_comments: true,
            excludes,
            redirects,
        }
    }
}

/// Flattening engine failures
#[derive(Error, Debug)]
pub enum FlattenError {
    /// A referenced document or asset does not exist
    #[error("unresolved reference '{reference}' in {referrer}: {resolved} does not exist")]
    Unresolved {
        reference: String,
        referrer: PathBuf,
        resolved: PathBuf,
    },

    /// A document could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference escapes the project root
    #[error("reference '{reference}' in {referrer} escapes the project root")]
    OutsideRoot { reference: String, referrer: PathBuf },

    /// External engine could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine reported a failure
    #[error("flattening failed: {message}")]
    Engine { message: String },
}

/// A flattening engine
pub trait Flattener {
    /// Short engine name for logs and reports
    fn name(&self) -> &'static str;

    /// Flatten `entry` into a single document.
    ///
    /// `root` is the directory that redirect and exclusion paths are relative to.
    fn flatten(
        &self,
        root: &Path,
        entry: &Path,
        options: &FlattenOptions,
    ) -> Result<String, FlattenError>;
}

impl<T: Flattener + ?Sized> Flattener for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn flatten(
        &self,
        root: &Path,
        entry: &Path,
        options: &FlattenOptions,
    ) -> Result<String, FlattenError> {
        (**self).flatten(root, entry, options)
    }
}
