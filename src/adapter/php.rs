//! Doc comment lookup over PHP controller sources.
//!
//! Sources are indexed line by line. A `/** ... */` docblock is attached to the
//! `function` declaration that directly follows it. Blank lines, `#[...]` attributes and
//! plain comments may sit in between; any other code line discards it. The enclosing
//! `namespace` and `class` declarations determine the fully-qualified owner.

use crate::adapter::DocLookup;
use crate::scanner::FileScanner;
use anyhow::Result;
use log::{debug, warn};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*namespace\s+([A-Za-z0-9_\\]+)\s*[;{]").unwrap());

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:abstract|final|readonly)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:public|protected|private|static|final|abstract)\s+)*function\s+&?\s*([A-Za-z_][A-Za-z0-9_]*)\s*\(",
    )
    .unwrap()
});

/// Doc comments keyed by (fully-qualified class, method).
///
/// PHP resolves class and method names case-insensitively, so keys are stored lowercased.
#[derive(Debug, Default)]
pub struct DocIndex {
    docs: HashMap<(String, String), String>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every `.php` file below `root`. Unreadable files are skipped with a warning.
    pub fn from_directory(root: &Path) -> Result<Self> {
        let scan_result = FileScanner::new(root.to_path_buf(), "php").scan()?;
        debug!("Indexing {} PHP files under {}", scan_result.files.len(), root.display());

        let mut index = Self::new();
        for path in &scan_result.files {
            match fs::read_to_string(path) {
                Ok(source) => index.parse_source(&source),
                Err(e) => warn!("Failed to read {}: {}", path.display(), e),
            }
        }

        debug!("Indexed {} documented methods", index.len());
        Ok(index)
    }

    /// Records `doc` for `controller::action`, replacing any earlier entry.
    pub fn insert(&mut self, controller: &str, action: &str, doc: &str) {
        self.docs.insert(key(controller, action), doc.to_string());
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Indexes the documented methods of one PHP source file.
    pub fn parse_source(&mut self, source: &str) {
        let mut namespace = String::new();
        let mut class: Option<String> = None;
        let mut pending_doc: Option<String> = None;
        let mut open_doc: Option<Vec<&str>> = None;
        let mut in_comment = false;

        for line in source.lines() {
            if in_comment {
                in_comment = !line.contains("*/");
                continue;
            }

            if let Some(buf) = open_doc.as_mut() {
                buf.push(line);
                if line.contains("*/") {
                    pending_doc = Some(buf.join("\n"));
                    open_doc = None;
                }
                continue;
            }

            let trimmed = line.trim();
            // `/**/` is an empty plain comment, not a docblock
            if let Some(rest) = trimmed
                .strip_prefix("/**")
                .filter(|rest| !rest.starts_with('/'))
            {
                if rest.contains("*/") {
                    pending_doc = Some(trimmed.to_string());
                } else {
                    open_doc = Some(vec![line]);
                }
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix("/*") {
                match rest.find("*/") {
                    None => {
                        in_comment = true;
                        continue;
                    }
                    Some(end) if rest[end + 2..].trim().is_empty() => continue,
                    Some(_) => {}
                }
            }

            // `#[...]` attributes and `#` / `//` line comments
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }

            if let Some(caps) = RE_NAMESPACE.captures(line) {
                namespace = caps[1].to_string();
                pending_doc = None;
            } else if let Some(caps) = RE_CLASS.captures(line) {
                class = Some(qualify(&namespace, &caps[1]));
                pending_doc = None;
            } else if let Some(caps) = RE_FUNCTION.captures(line) {
                if let (Some(doc), Some(owner)) = (pending_doc.take(), class.as_deref()) {
                    self.insert(owner, &caps[1], &doc);
                }
            } else {
                pending_doc = None;
            }
        }
    }
}

impl DocLookup for DocIndex {
    fn doc_comment(&self, controller: &str, action: &str) -> Option<String> {
        self.docs.get(&key(controller, action)).cloned()
    }
}

fn qualify(namespace: &str, class: &str) -> String {
    if namespace.is_empty() {
        class.to_string()
    } else {
        format!("{}\\{}", namespace, class)
    }
}

fn key(controller: &str, action: &str) -> (String, String) {
    (
        controller.trim_start_matches('\\').to_lowercase(),
        action.to_lowercase(),
    )
}
