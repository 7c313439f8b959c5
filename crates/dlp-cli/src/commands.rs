use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span, trace, warn};

use dlp_cli::logging::redact_value;
use dlp_cli::read::read_grid;
use dlp_cli::render::{checks_table, profile_table, profiles_table};
use dlp_cli::store::open_store;
use dlp_profiles::{Profile, Profiles, Validation};
use dlp_report::Report;
use dlp_validate::{Engine, HttpFetcher, Registry, RuleBook, ValidatorContext, ValidatorKind};

use crate::cli::{Cli, ProfilesCommand, ValidateArgs};

pub fn run_validate(cli: &Cli, args: &ValidateArgs) -> Result<Report> {
    let span = info_span!("validate", csv = %args.csv.display(), profile = %args.profile);
    let _guard = span.enter();

    let rules = load_rules(cli.rules_file.as_deref())?;
    let store = open_store(cli.profiles_file.as_deref(), &rules)?;
    let mut context = ValidatorContext::new(Arc::new(store), Arc::new(rules));
    if let Some(host_dir) = &args.host_dir {
        context = context.with_host_dir(host_dir);
    }
    if args.offline {
        info!("Offline: license URLs will not be checked");
    } else {
        match HttpFetcher::new(Duration::from_secs(args.url_timeout_secs)) {
            Ok(fetcher) => context = context.with_fetcher(Arc::new(fetcher)),
            Err(error) => warn!(%error, "HTTP client unavailable; license URLs will not be checked"),
        }
    }

    let grid = read_grid(&args.csv)?;
    let engine = Engine::new(Registry::new(context));
    let violations = engine
        .validate(&args.profile, &grid)
        .map_err(|error| anyhow!(error.user_message()))?;

    let report = Report::new(&violations, &grid);
    for warning in &report.warnings {
        trace!(
            row = warning.row,
            column = warning.column,
            header = %warning.header,
            value = redact_value(&warning.value),
            message = %warning.message,
            "Warning"
        );
    }
    Ok(report)
}

pub fn run_profiles(cli: &Cli, command: &ProfilesCommand) -> Result<()> {
    let rules = load_rules(cli.rules_file.as_deref())?;
    let store = open_store(cli.profiles_file.as_deref(), &rules)?;

    match command {
        ProfilesCommand::List => println!("{}", profiles_table(&store.snapshot())),
        ProfilesCommand::Show { name } => {
            let profile = store
                .get_profile(name)
                .ok_or_else(|| anyhow!("profile '{name}' not found"))?;
            let snapshot = profile.snapshot();
            println!("Profile: {}", snapshot.name);
            println!("Last update: {}", snapshot.last_update.to_rfc3339());
            if snapshot.validations.is_empty() {
                println!("Runs every registered check.");
            } else {
                println!("{}", profile_table(&snapshot));
            }
        }
        ProfilesCommand::Add { name, validations } => {
            add_validations(&store, name, validations)?;
            save(&store)?;
        }
        ProfilesCommand::Remove { name } => {
            if store.remove_profile(name).is_none() {
                bail!("profile '{name}' not found");
            }
            save(&store)?;
            info!(profile = %name, "Removed profile");
        }
    }
    Ok(())
}

pub fn run_checks() {
    println!("{}", checks_table());
}

fn load_rules(path: Option<&Path>) -> Result<RuleBook> {
    match path {
        Some(path) => RuleBook::load(path).context("load rule book"),
        None => RuleBook::builtin().context("load built-in rule book"),
    }
}

fn add_validations(store: &Profiles, name: &str, names: &[String]) -> Result<()> {
    let mut kinds = Vec::with_capacity(names.len());
    for check in names {
        let kind = ValidatorKind::from_name(check)
            .ok_or_else(|| anyhow!("unknown check '{check}'; run `checks` to list them"))?;
        kinds.push(kind);
    }

    match store.get_profile(name) {
        Some(profile) => {
            for kind in kinds {
                if !profile.add_validation(kind.name(), kind.description()) {
                    info!(profile = %name, check = kind.name(), "Check already in profile");
                }
            }
        }
        None => {
            let validations = kinds
                .into_iter()
                .map(|kind| Validation::new(kind.name(), kind.description()))
                .collect();
            let profile = Profile::new(name, validations)
                .with_context(|| format!("create profile '{name}'"))?;
            store.set_profile(profile)?;
            info!(profile = %name, "Created profile");
        }
    }
    Ok(())
}

fn save(store: &Profiles) -> Result<()> {
    store.save().context("save profiles")
}
