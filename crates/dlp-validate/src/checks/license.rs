use std::collections::HashSet;
use std::sync::{Arc, LazyLock, Mutex};

use dlp_model::{Grid, GridError, Location, Violations};
use regex::Regex;
use tracing::debug;

use super::{LICENSE, data_cell, lock};
use crate::error::FetchError;
use crate::fetch::{FetchOutcome, UrlFetcher};
use crate::messages;
use crate::rules::RuleBook;
use crate::validator::Validator;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[0-9a-zA-Z]([-.[:word:]]*[0-9a-zA-Z])*(:[0-9]+)?(/?)([a-zA-Z0-9\-.?,'/\\+&%$#_=~:;@!*()]*)?$")
        .expect("Invalid license URL regex")
});

#[derive(Debug, Default)]
struct Seen {
    good: HashSet<String>,
    bad: HashSet<String>,
}

/// `License` must be a reachable URL serving a non-empty document.
///
/// Each distinct value is fetched at most once per run. A repeat of a value
/// that already failed is reported as a duplicate.
#[derive(Debug)]
pub struct LicenseCheck {
    rules: Arc<RuleBook>,
    fetcher: Arc<dyn UrlFetcher>,
    seen: Mutex<Seen>,
}

impl LicenseCheck {
    pub fn new(rules: Arc<RuleBook>, fetcher: Arc<dyn UrlFetcher>) -> Self {
        Self {
            rules,
            fetcher,
            seen: Mutex::new(Seen::default()),
        }
    }

    fn verify(&self, url: &str, location: Location, profile: &str) -> Option<GridError> {
        if !URL_REGEX.is_match(url) {
            return Some(GridError::new(messages::URL_FORMAT, location, profile));
        }

        match self.fetcher.fetch(url) {
            Ok(FetchOutcome::Content) => None,
            Ok(FetchOutcome::Empty) => Some(GridError::new(messages::URL_EMPTY, location, profile)),
            Err(err @ FetchError::Read { .. }) => {
                Some(GridError::new(messages::URL_READ, location, profile).with_cause(err))
            }
            Err(err) => Some(GridError::new(messages::URL_CONNECT, location, profile).with_cause(err)),
        }
    }
}

impl Validator for LicenseCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let url = match data_cell(grid, location, profile, &[LICENSE]) {
            Ok(Some(value)) if !value.trim().is_empty() => value,
            Ok(_) => return Violations::new(),
            Err(err) => return err.into(),
        };
        if self.rules.license_exempt(profile) {
            return Violations::new();
        }

        // Held across the fetch so a value is never fetched twice
        let mut seen = lock(&self.seen);
        if seen.good.contains(url) {
            return Violations::new();
        }
        if seen.bad.contains(url) {
            return GridError::new(messages::URL_DUPLICATE_BAD, location, profile).into();
        }

        match self.verify(url, location, profile) {
            Some(violation) => {
                debug!(row = location.row, reason = violation.message(), "License URL rejected");
                seen.bad.insert(url.to_owned());
                violation.into()
            }
            None => {
                seen.good.insert(url.to_owned());
                Violations::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{at, grid, messages};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Fixed {
        outcome: fn(&str) -> Result<FetchOutcome, FetchError>,
        calls: AtomicUsize,
    }

    impl UrlFetcher for Fixed {
        fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)(url)
        }
    }

    fn check(outcome: fn(&str) -> Result<FetchOutcome, FetchError>) -> (LicenseCheck, Arc<Fixed>) {
        let fetcher = Arc::new(Fixed {
            outcome,
            calls: AtomicUsize::new(0),
        });
        let rules = RuleBook::new().with_license_exempt_profile("bucketeer");
        (LicenseCheck::new(Arc::new(rules), fetcher.clone()), fetcher)
    }

    #[test]
    fn test_url_syntax() {
        assert!(URL_REGEX.is_match("http://rightsstatements.org/vocab/InC/1.0/"));
        assert!(URL_REGEX.is_match("https://creativecommons.org/licenses/by/4.0/"));
        assert!(!URL_REGEX.is_match("ftp://example.org/license"));
        assert!(!URL_REGEX.is_match("creativecommons.org/licenses/by/4.0/"));
        assert!(!URL_REGEX.is_match("https://example.org/has space"));
    }

    #[test]
    fn test_good_url_fetched_once() {
        let (check, fetcher) = check(|_| Ok(FetchOutcome::Content));
        let url = "https://creativecommons.org/licenses/by/4.0/";
        let grid = grid(&[&["License"], &[url], &[url]]);

        assert!(check.validate("default", at(1, 0), &grid).is_empty());
        assert!(check.validate("default", at(2, 0), &grid).is_empty());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_page() {
        let (check, _) = check(|_| Ok(FetchOutcome::Empty));
        let grid = grid(&[&["License"], &["https://example.org/blank"]]);
        assert_eq!(messages(&check.validate("default", at(1, 0), &grid)), vec![messages::URL_EMPTY]);
    }

    #[test]
    fn test_bad_format_is_remembered_without_fetch() {
        let (check, fetcher) = check(|_| Ok(FetchOutcome::Content));
        let grid = grid(&[&["License"], &["not a url"], &["not a url"]]);

        assert_eq!(messages(&check.validate("default", at(1, 0), &grid)), vec![messages::URL_FORMAT]);
        assert_eq!(
            messages(&check.validate("default", at(2, 0), &grid)),
            vec![messages::URL_DUPLICATE_BAD]
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timeout_is_a_connect_violation() {
        let (check, _) = check(|url| {
            Err(FetchError::Timeout {
                url: url.to_owned(),
                timeout: std::time::Duration::from_secs(10),
            })
        });
        let grid = grid(&[&["License"], &["https://slow.example.org/"]]);

        let violations = check.validate("default", at(1, 0), &grid);
        assert_eq!(messages(&violations), vec![messages::URL_CONNECT]);
        assert!(violations.first().unwrap().cause().is_some());
    }

    #[test]
    fn test_exempt_profile_and_blank_cells() {
        let (check, fetcher) = check(|_| Ok(FetchOutcome::Content));
        let grid = grid(&[&["License"], &["garbage"], &[""]]);

        assert!(check.validate("bucketeer", at(1, 0), &grid).is_empty());
        assert!(check.validate("default", at(2, 0), &grid).is_empty());
        assert!(check.validate("default", at(0, 0), &grid).is_empty());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }
}
