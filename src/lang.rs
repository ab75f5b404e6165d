//! Language registration cache.
//!
//! Maps file extensions to registered languages and answers the
//! code/non-code category question the ranking bonus relies on. The lookup
//! table is populated at most once per registry, on first access, from a
//! pluggable [`LanguageSource`].

use crate::error::LanguageError;
use crate::item::ItemCategory;
use ahash::AHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

/// Languages the browsers know how to categorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    CSharp,
    VisualBasic,
    Cpp,
    FSharp,
    JavaScript,
    TypeScript,
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "c#" => Ok(Self::CSharp),
            "visualbasic" | "vb" => Ok(Self::VisualBasic),
            "cpp" | "c++" => Ok(Self::Cpp),
            "fsharp" | "f#" => Ok(Self::FSharp),
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            _ => Err(LanguageError::UnknownLanguage(s.to_string())),
        }
    }
}

/// One registered language and the file extensions it owns.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    pub language: Language,
    pub extensions: Vec<String>,
}

/// Supplies language definitions to a [`LanguageRegistry`].
///
/// The built-in source covers the known set; deployments with a
/// registration store provide their own implementation.
pub trait LanguageSource: Send + Sync {
    fn load(&self) -> Result<Vec<LanguageDefinition>, LanguageError>;
}

/// The compiled-in language set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLanguages;

impl LanguageSource for BuiltinLanguages {
    fn load(&self) -> Result<Vec<LanguageDefinition>, LanguageError> {
        Ok(builtin_definitions())
    }
}

fn builtin_definitions() -> Vec<LanguageDefinition> {
    fn def(language: Language, extensions: &[&str]) -> LanguageDefinition {
        LanguageDefinition {
            language,
            extensions: extensions.iter().map(ToString::to_string).collect(),
        }
    }

    vec![
        def(Language::CSharp, &["cs", "csx"]),
        def(Language::VisualBasic, &["vb"]),
        def(Language::Cpp, &["cpp", "cxx", "cc", "c", "h", "hpp"]),
        def(Language::FSharp, &["fs", "fsi", "fsx"]),
        def(Language::JavaScript, &["js", "jsx", "mjs"]),
        def(Language::TypeScript, &["ts", "tsx"]),
    ]
}

/// Loads language definitions from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [[languages]]
/// name = "csharp"
/// extensions = ["cs", "csx"]
/// ```
#[derive(Debug, Clone)]
pub struct TomlLanguageSource {
    path: PathBuf,
}

impl TomlLanguageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
}

impl LanguageSource for TomlLanguageSource {
    fn load(&self) -> Result<Vec<LanguageDefinition>, LanguageError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| LanguageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: LanguageFile = toml::from_str(&raw).map_err(|source| LanguageError::Parse {
            path: self.path.clone(),
            source: Box::new(source),
        })?;

        file.languages
            .into_iter()
            .map(|entry| {
                Ok(LanguageDefinition {
                    language: entry.name.parse()?,
                    extensions: entry.extensions,
                })
            })
            .collect()
    }
}

/// Extension-to-language lookup with one-time lazy population.
///
/// `ensure_loaded` uses an initialize-once cell, so the source is consulted
/// at most once even under concurrent first access; later calls are plain
/// reads. A failing source logs a warning and falls back to the built-in
/// set rather than erroring the browsing session.
pub struct LanguageRegistry {
    source: Box<dyn LanguageSource>,
    extensions: OnceLock<AHashMap<String, Language>>,
}

impl LanguageRegistry {
    pub fn new(source: Box<dyn LanguageSource>) -> Self {
        Self {
            source,
            extensions: OnceLock::new(),
        }
    }

    /// A registry over the compiled-in language set.
    pub fn builtin() -> Self {
        Self::new(Box::new(BuiltinLanguages))
    }

    /// Populates the extension table if it has not been populated yet.
    pub fn ensure_loaded(&self) -> &AHashMap<String, Language> {
        self.extensions.get_or_init(|| {
            let definitions = match self.source.load() {
                Ok(definitions) => definitions,
                Err(err) => {
                    tracing::warn!(
                        "Language source failed, falling back to built-in set: {}",
                        err
                    );
                    builtin_definitions()
                }
            };

            let mut map = AHashMap::new();
            for definition in definitions {
                for extension in definition.extensions {
                    let key = extension.trim_start_matches('.').to_lowercase();
                    map.insert(key, definition.language);
                }
            }
            tracing::debug!("Registered {} file extensions", map.len());
            map
        })
    }

    /// The registered language for `file_name`'s extension, if any.
    pub fn language_for(&self, file_name: &str) -> Option<Language> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        self.ensure_loaded().get(&extension.to_lowercase()).copied()
    }

    /// Category tag for a file: `Code` when its extension is registered.
    pub fn category_for(&self, file_name: &str) -> ItemCategory {
        if self.language_for(file_name).is_some() {
            ItemCategory::Code
        } else {
            ItemCategory::NonCode
        }
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("loaded", &self.extensions.get().is_some())
            .finish_non_exhaustive()
    }
}
