//! The closed set of validators and their construction.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, warn};

use crate::checks::{
    ArkCheck, EolCheck, FileNameCheck, FilePathCheck, ItemSeqCheck, LicenseCheck,
    MediaMetaCheck, ReqFieldCheck, UnicodeCheck, VocabularyCheck,
};
use crate::context::ValidatorContext;
use crate::error::ConstructError;
use crate::validator::Validator;

/// Every validator this crate knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidatorKind {
    Eol,
    Ark,
    ReqField,
    ObjType,
    Visibility,
    ItemSeq,
    FilePath,
    FileName,
    License,
    MediaMeta,
    Unicode,
}

impl ValidatorKind {
    pub const ALL: &'static [ValidatorKind] = &[
        Self::Eol,
        Self::Ark,
        Self::ReqField,
        Self::ObjType,
        Self::Visibility,
        Self::ItemSeq,
        Self::FilePath,
        Self::FileName,
        Self::License,
        Self::MediaMeta,
        Self::Unicode,
    ];

    /// The name profiles use to refer to this validator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eol => "EOLCheck",
            Self::Ark => "ARKCheck",
            Self::ReqField => "ReqFieldCheck",
            Self::ObjType => "ObjTypeCheck",
            Self::Visibility => "VisibilityCheck",
            Self::ItemSeq => "ItemSeqCheck",
            Self::FilePath => "FilePathCheck",
            Self::FileName => "FileNameCheck",
            Self::License => "LicenseCheck",
            Self::MediaMeta => "MediaMetaCheck",
            Self::Unicode => "UnicodeCheck",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Eol => "No cell contains a line break",
            Self::Ark => "Item ARK and Parent ARK values are well-formed ARKs",
            Self::ReqField => "Required fields are present and filled in",
            Self::ObjType => "Object Type is Collection, Work or Page",
            Self::Visibility => "Visibility is open, ucla or private",
            Self::ItemSeq => "Item Sequence is a positive integer",
            Self::FilePath => "File Name points at an existing file",
            Self::FileName => "File Name contains no whitespace",
            Self::License => "License is a reachable URL",
            Self::MediaMeta => "Audio and video rows carry media metadata",
            Self::Unicode => "No cell contains a Unicode replacement character",
        }
    }

    /// Build a fresh instance with empty per-run state.
    pub fn construct(self, context: &ValidatorContext) -> Result<Box<dyn Validator>, ConstructError> {
        let rules = Arc::clone(context.rules());
        let validator: Box<dyn Validator> = match self {
            Self::Eol => Box::new(EolCheck::new()),
            Self::Ark => Box::new(ArkCheck::new(rules)),
            Self::ReqField => Box::new(ReqFieldCheck::new(rules)),
            Self::ObjType => Box::new(VocabularyCheck::object_type()),
            Self::Visibility => Box::new(VocabularyCheck::visibility()),
            Self::ItemSeq => Box::new(ItemSeqCheck::new()),
            Self::FilePath => Box::new(FilePathCheck::new(context.host_dir().map(Path::to_path_buf))),
            Self::FileName => Box::new(FileNameCheck::new()),
            Self::License => {
                let fetcher = context
                    .fetcher()
                    .cloned()
                    .ok_or(ConstructError::MissingFetcher { kind: self.name() })?;
                Box::new(LicenseCheck::new(rules, fetcher))
            }
            Self::MediaMeta => Box::new(MediaMetaCheck::new(rules)),
            Self::Unicode => Box::new(UnicodeCheck::new()),
        };
        Ok(validator)
    }
}

/// Validators resolved for one run, with their names in matching order.
pub struct Validators {
    pub names: Vec<&'static str>,
    pub checks: Vec<Box<dyn Validator>>,
}

impl Validators {
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// `(name, validator)` pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn Validator)> {
        self.names
            .iter()
            .copied()
            .zip(self.checks.iter().map(Box::as_ref))
    }
}

impl std::fmt::Debug for Validators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validators").field("names", &self.names).finish_non_exhaustive()
    }
}

/// Builds validators by name.
#[derive(Debug, Clone)]
pub struct Registry {
    context: ValidatorContext,
}

impl Registry {
    pub fn new(context: ValidatorContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ValidatorContext {
        &self.context
    }

    /// Fresh validators for `names`, in the order given.
    ///
    /// An empty list yields every kind. Unknown names and validators that
    /// fail to build are logged and skipped.
    pub fn validators<S: AsRef<str>>(&self, names: &[S]) -> Validators {
        let kinds: Vec<ValidatorKind> = if names.is_empty() {
            ValidatorKind::ALL.to_vec()
        } else {
            names
                .iter()
                .filter_map(|name| {
                    let name = name.as_ref();
                    let kind = ValidatorKind::from_name(name);
                    if kind.is_none() {
                        warn!(validator = name, "Skipping unknown validator");
                    }
                    kind
                })
                .collect()
        };

        let mut validators = Validators {
            names: Vec::with_capacity(kinds.len()),
            checks: Vec::with_capacity(kinds.len()),
        };
        for kind in kinds {
            match kind.construct(&self.context) {
                Ok(check) => {
                    validators.names.push(kind.name());
                    validators.checks.push(check);
                }
                Err(err) => error!(validator = kind.name(), error = %err, "Error creating validator"),
            }
        }
        validators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchOutcome, UrlFetcher};
    use crate::rules::RuleBook;
    use crate::FetchError;
    use dlp_profiles::Profiles;

    #[derive(Debug)]
    struct Offline;

    impl UrlFetcher for Offline {
        fn fetch(&self, _url: &str) -> Result<FetchOutcome, FetchError> {
            Ok(FetchOutcome::Content)
        }
    }

    fn context() -> ValidatorContext {
        ValidatorContext::new(Arc::new(Profiles::new()), Arc::new(RuleBook::new()))
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ValidatorKind::ALL {
            assert_eq!(ValidatorKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(ValidatorKind::from_name("NoSuchCheck"), None);
    }

    #[test]
    fn test_empty_names_yield_every_kind() {
        let registry = Registry::new(context().with_fetcher(Arc::new(Offline)));
        let validators = registry.validators::<&str>(&[]);

        let expected: Vec<_> = ValidatorKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(validators.names, expected);
        assert_eq!(validators.len(), ValidatorKind::ALL.len());
    }

    #[test]
    fn test_caller_order_kept_and_unknown_skipped() {
        let registry = Registry::new(context());
        let validators = registry.validators(&["UnicodeCheck", "Bogus", "ARKCheck"]);
        assert_eq!(validators.names, vec!["UnicodeCheck", "ARKCheck"]);
    }

    #[test]
    fn test_constructor_failure_is_skipped() {
        let registry = Registry::new(context());
        let validators = registry.validators(&["LicenseCheck", "EOLCheck"]);
        assert_eq!(validators.names, vec!["EOLCheck"]);

        assert_eq!(
            ValidatorKind::License.construct(registry.context()).err(),
            Some(ConstructError::MissingFetcher { kind: "LicenseCheck" })
        );
    }
}
