pub mod classify;
pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod stats;
pub mod walk;

pub use classify::{ClassificationTables, Classifier, NamePatternRule};
pub use config::{Config, resolve_excludes, resolve_markers};
pub use defaults::{
    BuiltinExcludes, BuiltinMarkers, DocumentText, get_builtin_excludes, get_builtin_markers,
    get_document_text,
};
pub use document::{render_document, render_lines, serialize_to_json};
pub use error::{AppError, Result};
pub use stats::TreeStats;
pub use walk::{Branch, EntryKind, ExclusionSet, PrefixUnit, TreeLine, TreeWalker};
