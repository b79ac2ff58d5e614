use crate::classify::NamePatternRule;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Builtin exclusion entries shipped with the binary.
#[derive(Debug, Default, Deserialize)]
pub struct BuiltinExcludes {
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Builtin classification tables shipped with the binary. Extension keys
/// preserve their declared order so lookups stay reproducible.
#[derive(Debug, Deserialize)]
pub struct BuiltinMarkers {
    pub directory: String,
    pub default: String,
    #[serde(default)]
    pub name_patterns: Vec<NamePatternRule>,
    #[serde(default)]
    pub extensions: IndexMap<String, String>,
}

/// Fixed header text placed above the fenced tree block.
#[derive(Debug, Deserialize)]
pub struct DocumentText {
    pub banner: String,
    pub heading: String,
}

static BUILTIN_EXCLUDES: Lazy<BuiltinExcludes> = Lazy::new(|| {
    let yaml_content = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/excludes.yaml"));
    serde_yml::from_str(yaml_content).expect("Failed to parse embedded data/excludes.yaml")
});
static BUILTIN_MARKERS: Lazy<BuiltinMarkers> = Lazy::new(|| {
    let yaml_content = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/markers.yaml"));
    serde_yml::from_str(yaml_content).expect("Failed to parse embedded data/markers.yaml")
});
static DOCUMENT_TEXT: Lazy<DocumentText> = Lazy::new(|| {
    let yaml_content = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/document.yaml"));
    serde_yml::from_str(yaml_content).expect("Failed to parse embedded data/document.yaml")
});

pub fn get_builtin_excludes() -> &'static BuiltinExcludes {
    &BUILTIN_EXCLUDES
}
pub fn get_builtin_markers() -> &'static BuiltinMarkers {
    &BUILTIN_MARKERS
}
pub fn get_document_text() -> &'static DocumentText {
    &DOCUMENT_TEXT
}
