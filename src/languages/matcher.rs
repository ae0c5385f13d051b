use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::language_data::Language;
use crate::config::MatchMode;

pub struct LanguageMatcher {
    mode: MatchMode,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for LanguageMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageMatcher")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Default for LanguageMatcher {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl LanguageMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Languages matching `text`, in display order
    pub fn filter(&self, text: &str, languages: &[Language]) -> Vec<Language> {
        let query = text.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.mode {
            MatchMode::Prefix => {
                let query = query.to_lowercase();
                languages
                    .iter()
                    .filter(|l| l.name.to_lowercase().starts_with(&query))
                    .cloned()
                    .collect()
            }
            MatchMode::Fuzzy => {
                let mut scored: Vec<(&Language, i64)> = languages
                    .iter()
                    .filter_map(|l| self.matcher.fuzzy_match(&l.name, query).map(|s| (l, s)))
                    .collect();

                // Stable sort keeps list order among equal scores
                scored.sort_by(|a, b| b.1.cmp(&a.1));

                scored.into_iter().map(|(l, _)| l.clone()).collect()
            }
        }
    }

    /// Character indices of `name` to emphasise for `text`
    pub fn matched_indices(&self, name: &str, text: &str) -> Vec<usize> {
        let query = text.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.mode {
            MatchMode::Prefix => (0..query.chars().count().min(name.chars().count())).collect(),
            MatchMode::Fuzzy => self
                .matcher
                .fuzzy_indices(name, query)
                .map(|(_, indices)| indices)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
