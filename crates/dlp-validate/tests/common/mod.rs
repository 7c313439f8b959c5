#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dlp_model::{Grid, Violations};
use dlp_profiles::{Profile, Profiles, Validation};
use dlp_validate::{
    Engine, FetchError, FetchOutcome, Registry, RuleBook, UrlFetcher, ValidatorContext,
    ValidatorKind,
};

/// Fetcher that serves content for `https://good.example.org/...` and
/// refuses every other URL, counting calls.
#[derive(Debug, Default)]
pub struct CountingFetcher {
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UrlFetcher for CountingFetcher {
    fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.starts_with("https://good.example.org/") {
            Ok(FetchOutcome::Content)
        } else {
            Err(FetchError::Timeout {
                url: url.to_owned(),
                timeout: std::time::Duration::from_millis(1),
            })
        }
    }
}

/// Profiles named after the built-in rule tables, each running every check.
pub fn store() -> Profiles {
    let store = Profiles::new();
    for name in ["default", "fester", "test", "bucketeer"] {
        store.set_profile(Profile::new(name, Vec::new()).unwrap()).unwrap();
    }
    store
        .set_profile(
            Profile::new(
                "license-only",
                vec![Validation::new(ValidatorKind::License.name(), "")],
            )
            .unwrap(),
        )
        .unwrap();
    store
}

pub fn engine(fetcher: Arc<CountingFetcher>) -> Engine {
    let context = ValidatorContext::new(Arc::new(store()), Arc::new(RuleBook::builtin().unwrap()))
        .with_fetcher(fetcher);
    Engine::new(Registry::new(context))
}

pub fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(rows.iter().map(|row| row.iter().copied()))
}

pub fn messages(violations: &Violations) -> Vec<String> {
    violations.iter().map(|v| v.message().to_owned()).collect()
}
