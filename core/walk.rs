use crate::classify::Classifier;
use crate::error::{AppError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Names hidden from the tree. Declaration order is kept for display;
/// membership tests are linear over a deduplicated list, which stays
/// cheap at the set sizes seen in practice.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for name in names {
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }
        Self { names: deduped }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact-name membership test applied to each directory entry.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// First excluded entry occurring anywhere in the path string, if any.
    /// Matching is plain substring containment, so excluding ".git" also
    /// prunes paths under ".github".
    pub fn path_match(&self, path: &Path) -> Option<&str> {
        let path_str = path.to_string_lossy();
        self.names
            .iter()
            .find(|name| path_str.contains(name.as_str()))
            .map(String::as_str)
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        self.path_match(path).is_some()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// One prefix cell per ancestor level: a rail below a middle sibling,
/// blanks below a last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixUnit {
    Bar,
    Blank,
}

impl PrefixUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixUnit::Bar => "│   ",
            PrefixUnit::Blank => "    ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Middle,
    Last,
}

impl Branch {
    pub fn symbol(self) -> &'static str {
        match self {
            Branch::Middle => "├─",
            Branch::Last => "└─",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One rendered row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: Vec<PrefixUnit>,
    pub branch: Branch,
    pub kind: EntryKind,
    pub marker: String,
    pub name: String,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.prefix {
            f.write_str(unit.as_str())?;
        }
        write!(f, "{} {} {}", self.branch.symbol(), self.marker, self.name)
    }
}

/// Depth-first traversal producing one `TreeLine` per visible entry. The
/// root itself gets no line. Directory entries are listed, filtered
/// against the exclusion set, sorted by name, and emitted with a branch
/// symbol chosen by last-sibling position; subdirectories recurse with an
/// extended prefix. Symlinks are followed when deciding whether an entry
/// is a directory.
pub struct TreeWalker<'a> {
    classifier: &'a Classifier,
    excludes: &'a ExclusionSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(classifier: &'a Classifier, excludes: &'a ExclusionSet) -> Self {
        Self {
            classifier,
            excludes,
        }
    }

    pub fn walk(&self, root: &Path) -> Result<Vec<TreeLine>> {
        if !root.is_dir() {
            return Err(AppError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
        log::debug!("Walking project tree from: {}", root.display());
        self.walk_dir(root, 0, &[])
    }

    fn walk_dir(&self, dir: &Path, depth: usize, prefix: &[PrefixUnit]) -> Result<Vec<TreeLine>> {
        if let Some(matched) = self.excludes.path_match(dir) {
            log::debug!(
                "Pruning '{}': path contains excluded entry '{}'",
                dir.display(),
                matched
            );
            return Ok(Vec::new());
        }
        log::trace!("Listing directory {} (depth {})", dir.display(), depth);

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        let read_dir = fs::read_dir(dir).map_err(|source| AppError::DirRead {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in read_dir {
            let entry = entry.map_err(|source| AppError::DirRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.excludes.contains_name(&name) {
                log::trace!("Skipping excluded entry: {}", name);
                continue;
            }
            entries.push((name, entry.path()));
        }
        // Lexicographic order keeps output identical across platforms and
        // repeated runs.
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let total = entries.len();
        let mut lines = Vec::with_capacity(total);
        for (idx, (name, path)) in entries.into_iter().enumerate() {
            let is_last = idx + 1 == total;
            let branch = if is_last { Branch::Last } else { Branch::Middle };
            if path.is_dir() {
                lines.push(TreeLine {
                    prefix: prefix.to_vec(),
                    branch,
                    kind: EntryKind::Directory,
                    marker: self.classifier.directory_marker().to_string(),
                    name,
                });
                let mut child_prefix = prefix.to_vec();
                child_prefix.push(if is_last {
                    PrefixUnit::Blank
                } else {
                    PrefixUnit::Bar
                });
                lines.extend(self.walk_dir(&path, depth + 1, &child_prefix)?);
            } else {
                let marker = self.classifier.classify(&name).to_string();
                lines.push(TreeLine {
                    prefix: prefix.to_vec(),
                    branch,
                    kind: EntryKind::File,
                    marker,
                    name,
                });
            }
        }
        Ok(lines)
    }
}
