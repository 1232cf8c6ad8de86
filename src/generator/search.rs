//! Class-name search backends.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::dependency::ClassSearch;
use crate::error::{ErrorCause, Result};

/// In-memory search over a fixed `simple name → qualified names` table.
#[derive(Debug, Clone, Default)]
pub struct StaticSearch {
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl StaticSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut search = Self::new();
        for (name, qualified) in pairs {
            search.insert(name, qualified);
        }
        search
    }

    pub fn insert(&mut self, simple_name: impl Into<String>, qualified: impl Into<String>) {
        self.classes
            .entry(simple_name.into())
            .or_default()
            .insert(qualified.into());
    }
}

impl ClassSearch for StaticSearch {
    fn find_classes_with_name(&self, simple_name: &str) -> Result<Vec<String>> {
        Ok(self
            .classes
            .get(simple_name)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }
}

/// Searches configured classes, then `<Name>.java` files below source roots.
///
/// The qualified name is derived from the file's path relative to its root,
/// so `src/main/java/com/example/Owner.java` yields `com.example.Owner`.
#[derive(Debug, Clone, Default)]
pub struct SourceTreeSearch {
    roots: Vec<PathBuf>,
    known: StaticSearch,
}

impl SourceTreeSearch {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            known: StaticSearch::new(),
        }
    }

    /// Classes answered without touching the filesystem.
    pub fn with_known_classes<I, K, V>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, qualified) in classes {
            self.known.insert(name, qualified);
        }
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan_root(&self, root: &Path, file_name: &str, found: &mut BTreeSet<String>) -> Result<()> {
        if !root.is_dir() {
            debug!(root = %root.display(), "source root missing, skipped");
            return Ok(());
        }
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|source| ErrorCause::Search {
                root: root.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() || entry.file_name() != file_name {
                continue;
            }
            if let Some(qualified) = qualified_name(root, entry.path()) {
                found.insert(qualified);
            }
        }
        Ok(())
    }
}

impl ClassSearch for SourceTreeSearch {
    fn find_classes_with_name(&self, simple_name: &str) -> Result<Vec<String>> {
        let known = self.known.find_classes_with_name(simple_name)?;
        if !known.is_empty() {
            return Ok(known);
        }

        let file_name = format!("{simple_name}.java");
        let mut found = BTreeSet::new();
        for root in &self.roots {
            self.scan_root(root, &file_name, &mut found)?;
        }
        debug!(simple_name, matches = found.len(), "scanned source roots");
        Ok(found.into_iter().collect())
    }
}

/// `root/com/example/Owner.java` → `com.example.Owner`
fn qualified_name(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("."))
}
