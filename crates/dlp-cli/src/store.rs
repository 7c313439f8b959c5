//! Opening the profile store for a command.

use std::path::Path;

use anyhow::{Context, Result};
use dlp_profiles::{Profile, Profiles};
use dlp_validate::RuleBook;
use tracing::info;

/// Open the store at `path`, or an in-memory one when no path is given.
///
/// A store whose file does not exist yet starts with one empty profile per
/// rule-book profile. An empty validation list runs every validator.
pub fn open_store(path: Option<&Path>, rules: &RuleBook) -> Result<Profiles> {
    let Some(path) = path else {
        let store = Profiles::new();
        seed(&store, rules)?;
        return Ok(store);
    };

    let store = Profiles::with_path(path);
    if path.exists() {
        store
            .refresh()
            .with_context(|| format!("load profiles from {}", path.display()))?;
        info!(path = %path.display(), profiles = store.count(), "Loaded profiles");
    } else {
        seed(&store, rules)?;
        info!(path = %path.display(), "Profiles file not found; using built-in profiles");
    }
    Ok(store)
}

fn seed(store: &Profiles, rules: &RuleBook) -> Result<()> {
    for name in rules.profiles() {
        let profile = Profile::new(name, Vec::new())
            .with_context(|| format!("create profile {name}"))?;
        store
            .set_profile(profile)
            .with_context(|| format!("add profile {name}"))?;
    }
    Ok(())
}
