use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tidy_core::config::Policy;
use tidy_core::warehouse::SqliteWarehouse;

#[derive(Parser)]
#[command(
    name = "tidy",
    about = "Tidy a warehouse playground environment — drop expired objects, retag illegal expiry dates",
    version
)]
struct Cli {
    /// SQLite database acting as the warehouse
    #[arg(long, env = "TIDY_DATABASE")]
    database: PathBuf,

    /// Policy file (YAML); flags below override its values
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Classify and log, but execute no remediation statements
    #[arg(long)]
    dry_run: bool,

    /// Qualified path of the expiry-date tag
    #[arg(long, env = "TIDY_EXPIRY_TAG")]
    tag: Option<String>,

    /// Maximum number of days in the future an expiry tag may be set
    #[arg(long)]
    max_expiry_days: Option<i64>,

    /// Maximum age in days for an object without an expiry tag
    #[arg(long)]
    max_age_without_tag: Option<i64>,

    /// Qualified path of the object-ages view
    #[arg(long, env = "TIDY_VIEW")]
    view: Option<String>,

    /// Qualified path of the audit-log table
    #[arg(long, env = "TIDY_LOG_TABLE")]
    log_table: Option<String>,
}

fn build_policy(cli: &Cli) -> anyhow::Result<Policy> {
    let mut policy = match &cli.policy {
        Some(path) => Policy::load(path)
            .with_context(|| format!("failed to load policy file {}", path.display()))?,
        None => Policy::default(),
    };

    if cli.dry_run {
        policy.dry_run = true;
    }
    if let Some(tag) = &cli.tag {
        policy.expiry_date_tag = tag.clone();
    }
    if let Some(days) = cli.max_expiry_days {
        policy.max_expiry_days = days;
    }
    if let Some(days) = cli.max_age_without_tag {
        policy.max_object_age_without_tag = days;
    }
    if let Some(view) = &cli.view {
        policy.object_ages_view = view.clone();
    }
    if let Some(table) = &cli.log_table {
        policy.log_table = table.clone();
    }
    Ok(policy)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let policy = build_policy(cli)?;
    let mut warehouse = SqliteWarehouse::open(&cli.database).with_context(|| {
        format!(
            "failed to open warehouse database {}",
            cli.database.display()
        )
    })?;
    let summary = tidy_core::run::run(&mut warehouse, &policy)?;
    println!("{summary}");
    println!("run_id: {}", summary.run_id);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
