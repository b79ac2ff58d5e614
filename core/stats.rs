use crate::walk::{EntryKind, TreeLine};
use indexmap::IndexMap;
use serde::Serialize;

/// Summary counts over a rendered tree. `marker_counts` preserves the
/// order in which markers first appear.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub total_entries: usize,
    pub marker_counts: IndexMap<String, usize>,
}

impl TreeStats {
    pub fn from_lines(lines: &[TreeLine]) -> Self {
        let mut stats = TreeStats {
            total_entries: lines.len(),
            ..TreeStats::default()
        };
        for line in lines {
            match line.kind {
                EntryKind::Directory => stats.directories += 1,
                EntryKind::File => stats.files += 1,
            }
            *stats.marker_counts.entry(line.marker.clone()).or_insert(0) += 1;
        }
        stats
    }
}
