//! Telugu explanations with a provider fallback chain and a memo cache.
//!
//! Providers are tried in order; the first non-empty result wins and is
//! cached under the trimmed source text. The cache has no eviction.
//!
//! No network provider ships with the crate. Callers plug in their own
//! [`TranslationProvider`] implementations.

use anyhow::{bail, Result};
use async_trait::async_trait;
use dashmap::DashMap;

/// Share of Telugu code points above which text is left untranslated.
const TELUGU_RATIO: f64 = 0.4;

/// A machine-translation backend that renders text in Telugu.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    async fn translate(&self, text: &str) -> Result<String>;
}

fn is_telugu(c: char) -> bool {
    ('\u{0C00}'..='\u{0C7F}').contains(&c)
}

/// True when more than 40% of the code points are in the Telugu block.
pub fn is_mostly_telugu(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let telugu = text.chars().filter(|c| is_telugu(*c)).count();
    telugu as f64 / total as f64 > TELUGU_RATIO
}

/// Collapse whitespace runs to single spaces and trim.
pub fn clean_output(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub struct TeluguExplainer {
    providers: Vec<Box<dyn TranslationProvider>>,
    cache: DashMap<String, String>,
}

impl TeluguExplainer {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self {
            providers,
            cache: DashMap::new(),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Explain `source` in Telugu.
    ///
    /// Empty input yields an empty string and text that is already mostly
    /// Telugu is returned as is; neither touches the providers or cache.
    pub async fn explain(&self, source: &str) -> Result<String> {
        let normalized = source.trim();
        if normalized.is_empty() {
            return Ok(String::new());
        }
        if is_mostly_telugu(normalized) {
            return Ok(normalized.to_string());
        }
        if let Some(hit) = self.cache.get(normalized) {
            return Ok(hit.value().clone());
        }

        let mut last_error: Option<anyhow::Error> = None;
        for provider in &self.providers {
            match provider.translate(normalized).await {
                Ok(text) => {
                    let text = clean_output(&text);
                    if text.is_empty() {
                        last_error = Some(anyhow::anyhow!(
                            "{} returned empty output",
                            provider.name()
                        ));
                        continue;
                    }
                    self.cache.insert(normalized.to_string(), text.clone());
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "translation failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => bail!("Telugu explanation failed from all providers: {}", e),
            None => bail!("Telugu explanation failed from all providers: unknown"),
        }
    }
}
