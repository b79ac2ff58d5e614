use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One ordered name-pattern rule: a lowercase substring paired with the
/// marker it assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePatternRule {
    pub pattern: String,
    pub marker: String,
}

/// Fully resolved classification tables. Name patterns outrank extension
/// lookups, and the extension map keeps insertion order so behavior does
/// not depend on hashing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationTables {
    pub directory: String,
    pub default: String,
    pub name_patterns: Vec<NamePatternRule>,
    pub extensions: IndexMap<String, String>,
}

/// Assigns a marker to each entry name.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: ClassificationTables,
}

impl Classifier {
    pub fn new(tables: ClassificationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    pub fn directory_marker(&self) -> &str {
        &self.tables.directory
    }

    /// Picks the marker for a file name. The lowercased name is scanned
    /// against the name patterns in declaration order and the first hit
    /// wins, shadowing any extension rule. Without a hit the trailing
    /// extension is looked up, and the default marker covers the rest.
    pub fn classify(&self, name: &str) -> &str {
        let lowered = name.to_lowercase();
        for rule in &self.tables.name_patterns {
            if lowered.contains(&rule.pattern) {
                return &rule.marker;
            }
        }
        if let Some(ext) = extension_of(&lowered) {
            if let Some(marker) = self.tables.extensions.get(ext) {
                return marker;
            }
        }
        &self.tables.default
    }
}

/// Trailing extension of a lowercased name, dot included. The last dot
/// only starts an extension when a non-dot character precedes it, so
/// dotfiles like `.gitignore` and all-dot prefixes like `..py` carry
/// none.
fn extension_of(lowered: &str) -> Option<&str> {
    let idx = lowered.rfind('.')?;
    if lowered[..idx].bytes().any(|b| b != b'.') {
        Some(&lowered[idx..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::get_builtin_markers;

    fn sample_tables() -> ClassificationTables {
        let mut extensions = IndexMap::new();
        extensions.insert(".py".to_string(), "🐍".to_string());
        extensions.insert(".md".to_string(), "📝".to_string());
        ClassificationTables {
            directory: "📂".to_string(),
            default: "📄".to_string(),
            name_patterns: vec![
                NamePatternRule {
                    pattern: "readme".to_string(),
                    marker: "📘".to_string(),
                },
                NamePatternRule {
                    pattern: "bot".to_string(),
                    marker: "🤖".to_string(),
                },
            ],
            extensions,
        }
    }

    fn builtin_classifier() -> Classifier {
        let builtin = get_builtin_markers();
        Classifier::new(ClassificationTables {
            directory: builtin.directory.clone(),
            default: builtin.default.clone(),
            name_patterns: builtin.name_patterns.clone(),
            extensions: builtin.extensions.clone(),
        })
    }

    #[test]
    fn name_pattern_beats_extension() {
        let classifier = Classifier::new(sample_tables());
        // "bot" matches as a substring even though ".py" has its own rule.
        assert_eq!(classifier.classify("bot.py"), "🤖");
        assert_eq!(classifier.classify("main.py"), "🐍");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classifier = Classifier::new(sample_tables());
        assert_eq!(classifier.classify("ReadMe.MD"), "📘");
        assert_eq!(classifier.classify("Notes.PY"), "🐍");
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        let classifier = Classifier::new(sample_tables());
        assert_eq!(classifier.classify("notes.xyz"), "📄");
        assert_eq!(classifier.classify("Makefile"), "📄");
    }

    #[test]
    fn dotfiles_have_no_extension() {
        let mut tables = sample_tables();
        tables
            .extensions
            .insert(".gitignore".to_string(), "🚫".to_string());
        let classifier = Classifier::new(tables);
        // ".gitignore" is all name, so the extension rule never applies.
        assert_eq!(classifier.classify(".gitignore"), "📄");
        assert_eq!(classifier.classify("a.gitignore"), "🚫");
        // Extra leading dots are still part of the name, not a separator.
        assert_eq!(classifier.classify("..py"), "📄");
    }

    #[test]
    fn extension_of_edge_cases() {
        assert_eq!(extension_of("main.py"), Some(".py"));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(extension_of("trailing."), Some("."));
        assert_eq!(extension_of("a..py"), Some(".py"));
        assert_eq!(extension_of(".bashrc"), None);
        assert_eq!(extension_of("..py"), None);
        assert_eq!(extension_of("..."), None);
        assert_eq!(extension_of("readme"), None);
    }

    #[test]
    fn builtin_tables_classify_common_names() {
        let classifier = builtin_classifier();
        assert_eq!(classifier.classify("README.md"), "📘");
        assert_eq!(classifier.classify("LICENSE"), "⚖️");
        assert_eq!(classifier.classify("chatbot.py"), "🤖");
        assert_eq!(classifier.classify("index.html"), "🌐");
        assert_eq!(classifier.classify("logo.png"), "🖼️");
        assert_eq!(classifier.classify("unmapped.zzz"), "📄");
    }
}
