use std::env;

/// Subject index used when nothing else is configured.
pub const DEFAULT_SUBJECTS_URL: &str =
    "https://mayankvermavns.github.io/All-Json-File/Subject.json";

/// Environment variable overriding the subject index location.
pub const SUBJECTS_URL_ENV: &str = "QUIZ_SUBJECTS_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub subjects_url: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            subjects_url: DEFAULT_SUBJECTS_URL.to_string(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(SUBJECTS_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.subjects_url = url.to_string();
            }
        }
        config
    }

    #[must_use]
    pub fn with_subjects_url(mut self, url: impl Into<String>) -> Self {
        self.subjects_url = url.into();
        self
    }
}
