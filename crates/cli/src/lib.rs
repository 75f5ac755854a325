use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fostering_gateway::{CaseService, GatewayConfig, JsonFileFieldStore};
use fostering_protocol::{
    serialize_json, FosteringCase, Section, SectionStatus, SectionUpdate, Workflow,
    CASE_VIEW_SCHEMA_VERSION,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "fostering")]
#[command(about = "Read and update fostering cases held as CRM custom fields", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gateway configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the structured view of a case
    Decode(DecodeArgs),

    /// Apply a section update payload and print the resulting status
    Update(UpdateArgs),

    /// Print the JSON schema of the case view
    Schema,
}

#[derive(Args)]
struct DecodeArgs {
    /// JSON field store file
    #[arg(long)]
    store: PathBuf,

    /// Case reference
    #[arg(long = "case")]
    case_reference: String,
}

#[derive(Args)]
struct UpdateArgs {
    /// JSON field store file
    #[arg(long)]
    store: PathBuf,

    /// Workflow stage doing the write
    #[arg(long, value_enum)]
    workflow: WorkflowArg,

    /// Section update payload (JSON, tagged with "section")
    #[arg(long)]
    payload: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum WorkflowArg {
    HomeVisit,
    Application,
}

impl From<WorkflowArg> for Workflow {
    fn from(arg: WorkflowArg) -> Self {
        match arg {
            WorkflowArg::HomeVisit => Workflow::HomeVisit,
            WorkflowArg::Application => Workflow::Application,
        }
    }
}

#[derive(Serialize)]
struct DecodeOutput {
    schema_version: u32,
    case: FosteringCase,
}

#[derive(Serialize)]
struct UpdateOutput {
    section: Section,
    status: SectionStatus,
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Decode(args) => run_decode(args, config).await,
        Commands::Update(args) => run_update(args, config).await,
        Commands::Schema => run_schema(),
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_config(path: Option<&Path>) -> Result<GatewayConfig> {
    match path {
        Some(path) => GatewayConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(GatewayConfig::default()),
    }
}

async fn run_decode(args: DecodeArgs, config: GatewayConfig) -> Result<()> {
    let service = CaseService::new(JsonFileFieldStore::new(args.store), config);
    let case = service
        .get_case(&args.case_reference)
        .await
        .with_context(|| format!("Failed to decode case {}", args.case_reference))?;

    println!(
        "{}",
        serialize_json(&DecodeOutput {
            schema_version: CASE_VIEW_SCHEMA_VERSION,
            case,
        })?
    );
    Ok(())
}

async fn run_update(args: UpdateArgs, config: GatewayConfig) -> Result<()> {
    let raw = std::fs::read_to_string(&args.payload)
        .with_context(|| format!("Failed to read payload {}", args.payload.display()))?;
    let update: SectionUpdate = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid section payload {}", args.payload.display()))?;

    let service = CaseService::new(JsonFileFieldStore::new(args.store), config);
    let status = service
        .update_section(args.workflow.into(), &update)
        .await
        .context("Failed to apply section update")?;

    println!(
        "{}",
        serialize_json(&UpdateOutput {
            section: update.section(),
            status,
        })?
    );
    Ok(())
}

fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(FosteringCase);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
