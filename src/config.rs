use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Top-level sections a dossier may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevel {
    Metadata,
    Overview,
    Structure,
    Functional,
    Clinical,
    Interactions,
    References,
}

impl TopLevel {
    #[cfg(test)]
    const ALL: [TopLevel; 7] = [
        TopLevel::Metadata,
        TopLevel::Overview,
        TopLevel::Structure,
        TopLevel::Functional,
        TopLevel::Clinical,
        TopLevel::Interactions,
        TopLevel::References,
    ];

    pub fn canonical(self) -> &'static str {
        self.builtin_titles()[0]
    }

    /// Accepted titles, canonical first.
    fn builtin_titles(self) -> &'static [&'static str] {
        match self {
            TopLevel::Metadata => &["Metadata"],
            TopLevel::Overview => &["Overview"],
            TopLevel::Structure => &["Structure"],
            TopLevel::Functional => &["Functional Biology", "Functional Narrative", "Functional narrative"],
            TopLevel::Clinical => &["Clinical Significance", "Clinical Narrative", "Clinical narrative"],
            TopLevel::Interactions => &["Interaction Landscape", "Interaction landscape"],
            TopLevel::References => &["Reference Corpus", "Reference List", "Reference list", "References"],
        }
    }
}

/// Extra titles accepted per top-level section, on top of the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionAliases {
    pub metadata: Vec<String>,
    pub overview: Vec<String>,
    pub structure: Vec<String>,
    pub functional: Vec<String>,
    pub clinical: Vec<String>,
    pub interactions: Vec<String>,
    pub references: Vec<String>,
}

impl SectionAliases {
    fn for_section(&self, part: TopLevel) -> &[String] {
        match part {
            TopLevel::Metadata => &self.metadata,
            TopLevel::Overview => &self.overview,
            TopLevel::Structure => &self.structure,
            TopLevel::Functional => &self.functional,
            TopLevel::Clinical => &self.clinical,
            TopLevel::Interactions => &self.interactions,
            TopLevel::References => &self.references,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub aliases: SectionAliases,
}

impl ParserConfig {
    /// Layer an optional config file and `DOSSIER__*` environment variables
    /// (comma-separated lists) over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("DOSSIER")
                    .separator("__")
                    .list_separator(",")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Every title accepted for `part`: built-ins first, then configured aliases.
    pub fn titles(&self, part: TopLevel) -> Vec<&str> {
        part.builtin_titles()
            .iter()
            .copied()
            .chain(self.aliases.for_section(part).iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        let names: Vec<&str> = TopLevel::ALL.iter().map(|p| p.canonical()).collect();
        assert_eq!(
            names,
            vec![
                "Metadata",
                "Overview",
                "Structure",
                "Functional Biology",
                "Clinical Significance",
                "Interaction Landscape",
                "Reference Corpus",
            ]
        );
    }

    #[test]
    fn default_titles_include_equivalents() {
        let config = ParserConfig::default();
        let titles = config.titles(TopLevel::References);
        assert_eq!(titles[0], "Reference Corpus");
        assert!(titles.contains(&"Reference List"));
    }

    #[test]
    fn aliases_extend_builtins() {
        let config = ParserConfig {
            aliases: SectionAliases {
                metadata: vec!["Identity".into()],
                ..Default::default()
            },
        };
        assert_eq!(config.titles(TopLevel::Metadata), vec!["Metadata", "Identity"]);
    }

    #[test]
    fn load_from_file() {
        let config = ParserConfig::load(Some(Path::new("tests/fixtures/aliases.toml"))).unwrap();
        assert!(config.aliases.overview.contains(&"Summary".to_string()));
        assert!(config.titles(TopLevel::Clinical).contains(&"Disease Relevance"));
    }

    // Each test below owns a distinct variable so they can run in parallel.

    #[test]
    fn env_lists_are_comma_separated() {
        std::env::set_var("DOSSIER__ALIASES__STRUCTURE", "Architecture,Fold");
        let config = ParserConfig::load(None);
        std::env::remove_var("DOSSIER__ALIASES__STRUCTURE");
        let config = config.unwrap();
        assert_eq!(config.aliases.structure, vec!["Architecture", "Fold"]);
        assert_eq!(
            config.titles(TopLevel::Structure),
            vec!["Structure", "Architecture", "Fold"]
        );
    }

    #[test]
    fn env_overrides_file() {
        std::env::set_var("DOSSIER__ALIASES__OVERVIEW", "Summary,Synopsis");
        let config = ParserConfig::load(Some(Path::new("tests/fixtures/aliases.toml")));
        std::env::remove_var("DOSSIER__ALIASES__OVERVIEW");
        let config = config.unwrap();
        assert_eq!(config.aliases.overview, vec!["Summary", "Synopsis"]);
        assert_eq!(config.aliases.clinical, vec!["Disease Relevance"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(ParserConfig::load(Some(Path::new("tests/fixtures/does-not-exist.toml"))).is_err());
    }
}
