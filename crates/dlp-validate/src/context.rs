//! Shared inputs handed to every validator constructor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dlp_profiles::Profiles;

use crate::fetch::UrlFetcher;
use crate::rules::RuleBook;

/// Everything a validator may need beyond the grid itself.
#[derive(Debug, Clone)]
pub struct ValidatorContext {
    profiles: Arc<Profiles>,
    rules: Arc<RuleBook>,
    host_dir: Option<PathBuf>,
    fetcher: Option<Arc<dyn UrlFetcher>>,
}

impl ValidatorContext {
    pub fn new(profiles: Arc<Profiles>, rules: Arc<RuleBook>) -> Self {
        Self {
            profiles,
            rules,
            host_dir: None,
            fetcher: None,
        }
    }

    /// Root directory that `File Name` values are resolved against.
    #[must_use]
    pub fn with_host_dir(mut self, host_dir: impl Into<PathBuf>) -> Self {
        self.host_dir = Some(host_dir.into());
        self
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn UrlFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn profiles(&self) -> &Arc<Profiles> {
        &self.profiles
    }

    pub fn rules(&self) -> &Arc<RuleBook> {
        &self.rules
    }

    pub fn host_dir(&self) -> Option<&Path> {
        self.host_dir.as_deref()
    }

    pub fn fetcher(&self) -> Option<&Arc<dyn UrlFetcher>> {
        self.fetcher.as_ref()
    }
}
