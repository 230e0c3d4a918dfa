//! Infrastructure implementation of the `FileMatcher` port.
//!
//! Brace alternatives are expanded up front and matched one after another,
//! so `{manifests,tests}/**/*.pp` lists every manifest before any test.
//! Within an alternative the directory walk is depth-first in file-name
//! order. Hidden entries are skipped, as shell globs do.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::{DirEntry, WalkDir};

use crate::application::ports::FileMatcher;
use crate::domain::TaskError;
use crate::domain::pattern::{expand_braces, split_literal_prefix};

/// Glob expansion rooted at a directory (normally the working directory).
pub struct GlobMatcher {
    root: PathBuf,
    ignore: GlobSet,
}

impl GlobMatcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: GlobSet::empty(),
        }
    }

    /// Drop any match that also matches one of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidPattern` if an ignore pattern is malformed.
    pub fn with_ignore(mut self, patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile(pattern, pattern)?);
        }
        self.ignore = builder.build().map_err(|e| invalid(&patterns.join(", "), &e))?;
        Ok(self)
    }

    fn expand_alternative(&self, pattern: &str, alternative: &str) -> Result<Vec<String>> {
        let prefix = split_literal_prefix(alternative);
        if !prefix.is_glob {
            let exists = self.root.join(&prefix.base).is_file();
            return Ok(if exists {
                vec![alternative.to_string()]
            } else {
                Vec::new()
            });
        }

        let matcher = compile(pattern, alternative)?.compile_matcher();
        let absolute = Path::new(alternative).is_absolute();
        let walk_root = if prefix.base == "." {
            self.root.clone()
        } else {
            self.root.join(&prefix.base)
        };
        // Reported paths keep the prefix as written (`./lib/a.rb` for
        // `./lib/*.rb`), so they match the compiled glob.
        let implicit_root = prefix.base == "." && !alternative.starts_with("./");
        let display_base = if implicit_root { "" } else { prefix.base.as_str() };

        let mut files = Vec::new();
        let walker = WalkDir::new(&walk_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(%err, "skipping unreadable path");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let candidate = if absolute {
                entry.path().to_path_buf()
            } else {
                let relative = entry
                    .path()
                    .strip_prefix(&walk_root)
                    .unwrap_or_else(|_| entry.path());
                Path::new(display_base).join(relative)
            };
            if matcher.is_match(&candidate) {
                files.push(candidate.to_string_lossy().into_owned());
            }
        }
        Ok(files)
    }
}

impl FileMatcher for GlobMatcher {
    fn expand(&self, pattern: &str) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for alternative in expand_braces(pattern) {
            for file in self.expand_alternative(pattern, &alternative)? {
                if self.ignore.is_match(&file) {
                    continue;
                }
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        }
        Ok(files)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// `*` and `?` stay within one path component; `**/` spans directories.
fn compile(pattern: &str, glob: &str) -> Result<Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| invalid(pattern, &e))
}

fn invalid(pattern: &str, err: &globset::Error) -> anyhow::Error {
    TaskError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.kind().to_string(),
    }
    .into()
}
