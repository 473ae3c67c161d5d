//! Option name matching
//! Resolves user-typed option names against canonical names, aliases and prefixes

/// Result of matching an option name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Exact match found (canonical name or explicit alias)
    Exact(String),
    /// Unique prefix match
    Prefix(String),
    /// Ambiguous - multiple names match
    Ambiguous { prefix: String, matches: Vec<String> },
    /// No match found
    Unknown(String),
}

/// A matchable name with its aliases
#[derive(Debug, Clone)]
pub struct NameDef {
    /// Canonical name
    pub name: String,
    /// Explicit aliases
    pub aliases: Vec<String>,
}

impl NameDef {
    pub fn new(name: impl Into<String>) -> Self {
        NameDef {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// Set of names that input is matched against
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    names: Vec<NameDef>,
}

impl NameMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn register(mut self, def: NameDef) -> Self {
        self.names.push(def);
        self
    }

    /// Match `input` (case-insensitive)
    ///
    /// Matching order:
    /// 1. Exact match against a canonical name or alias
    /// 2. Unique prefix of a canonical name or alias
    /// 3. Ambiguous if several names share the prefix
    /// 4. Unknown otherwise
    #[must_use]
    pub fn match_name(&self, input: &str) -> MatchResult {
        let input = input.trim().to_lowercase();

        if input.is_empty() {
            return MatchResult::Unknown(input);
        }

        for def in &self.names {
            if def.name.to_lowercase() == input
                || def.aliases.iter().any(|a| a.to_lowercase() == input)
            {
                return MatchResult::Exact(def.name.clone());
            }
        }

        let mut matches = Vec::new();
        for def in &self.names {
            let hit = def.name.to_lowercase().starts_with(&input)
                || def
                    .aliases
                    .iter()
                    .any(|a| a.to_lowercase().starts_with(&input));
            if hit && !matches.contains(&def.name) {
                matches.push(def.name.clone());
            }
        }

        match matches.len() {
            0 => MatchResult::Unknown(input),
            1 => MatchResult::Prefix(matches.remove(0)),
            _ => MatchResult::Ambiguous {
                prefix: input,
                matches,
            },
        }
    }
}
