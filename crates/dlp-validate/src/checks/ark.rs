use std::sync::{Arc, LazyLock};

use dlp_model::{Grid, GridError, Location, Violations};
use regex::Regex;

use super::{ITEM_ARK, PARENT_ARK, data_cell};
use crate::messages;
use crate::rules::RuleBook;
use crate::validator::Validator;

const ARK_PREFIX: &str = "ark:/";

/// Minimum number of digits in a NAAN.
const MIN_NAAN_DIGITS: usize = 5;

static NAAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("Invalid NAAN regex"));

/// Object identifier with an optional `?` qualifier. `[[:word:]]` is the
/// ASCII word class.
static OBJECT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([[:word:]\-./]+)(\?.*)?$").expect("Invalid object identifier regex")
});

/// Checks `Item ARK` and `Parent ARK` values.
///
/// An ARK looks like `ark:/<NAAN>/<object id>[?qualifier]`. Blank cells are
/// left to [`ReqFieldCheck`](super::ReqFieldCheck).
#[derive(Debug)]
pub struct ArkCheck {
    rules: Arc<RuleBook>,
}

impl ArkCheck {
    pub fn new(rules: Arc<RuleBook>) -> Self {
        Self { rules }
    }

    fn verify(&self, ark: &str, location: Location, profile: &str) -> Violations {
        let mut violations = Violations::new();
        let violation = |message: &str| GridError::new(message, location, profile);

        // Nothing after a bad prefix can be parsed
        let Some(body) = ark.strip_prefix(ARK_PREFIX) else {
            violations.push(violation(messages::NO_PREFIX));
            return violations;
        };

        let naan = NAAN_REGEX
            .captures(body)
            .and_then(|captures| captures.get(1))
            .map_or("", |naan| naan.as_str());
        if naan.len() < MIN_NAAN_DIGITS {
            violations.push(violation(messages::NAAN_TOO_SHORT));
        }
        if !self.rules.naan_allowed(profile, naan) {
            violations.push(violation(messages::NAAN_NOT_ALLOWED));
        }

        let rest = &body[naan.len()..];
        let object_id = rest.strip_prefix('/').unwrap_or(rest);
        if object_id.is_empty() {
            violations.push(violation(messages::NO_OBJECT_ID));
            return violations;
        }
        if !OBJECT_ID_REGEX.is_match(object_id) {
            violations.push(violation(messages::INVALID_OBJECT_ID));
        }

        violations
    }
}

impl Validator for ArkCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let value = match data_cell(grid, location, profile, &[ITEM_ARK, PARENT_ARK]) {
            Ok(Some(value)) => value.trim(),
            Ok(None) => return Violations::new(),
            Err(err) => return err.into(),
        };
        if value.is_empty() {
            return Violations::new();
        }
        self.verify(value, location, profile)
    }
}
