// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use contract_desk::utils::logging::{
    format_change, format_error, format_evaluation, format_info, format_step, format_success,
};
use contract_desk::workflow::landing;
use contract_desk::{
    ArtifactExporter, ComparePage, Config, ContractType, Document, GenerateForm, GeneratePage,
    Page, ReviewPage, Router, Session, Slot,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "contract_desk")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Generate, review and compare legal contracts", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contract kinds and which ones can be generated
    Templates,

    /// Show the landing page and navigation routes
    Pages,

    /// Generate a contract from a template and export it
    Generate {
        #[command(flatten)]
        form: FormArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Review an uploaded contract against the checklist for its type
    Review {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short = 't', long)]
        contract_type: ContractType,
    },

    /// Compare two versions of a contract and record decisions
    Compare {
        #[arg(long)]
        original: PathBuf,

        #[arg(long)]
        revised: PathBuf,

        #[command(flatten)]
        decisions: DecisionArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate, review and compare in one session
    Workflow {
        #[command(flatten)]
        form: FormArgs,

        /// Revised version to compare the generated contract against
        #[arg(long)]
        revised: PathBuf,

        #[command(flatten)]
        decisions: DecisionArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FormArgs {
    #[arg(long, default_value = "")]
    template: String,

    #[arg(long, default_value = "")]
    enterprise: String,

    #[arg(long, default_value = "")]
    client: String,

    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    effective_date: String,

    /// Contract duration in years (1-10)
    #[arg(long, default_value = "")]
    duration: String,

    /// Notice period in months (1-12)
    #[arg(long, default_value = "")]
    notice: String,
}

#[derive(Args)]
struct DecisionArgs {
    /// Change ids to approve
    #[arg(long, value_delimiter = ',')]
    approve: Vec<String>,

    /// Changes to refer, as ID=REMARKS
    #[arg(long)]
    refer: Vec<String>,
}

impl From<FormArgs> for GenerateForm {
    fn from(args: FormArgs) -> Self {
        GenerateForm {
            template_type: args.template,
            enterprise_name: args.enterprise,
            client_name: args.client,
            effective_date: args.effective_date,
            contract_duration: args.duration,
            notice_period: args.notice,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    contract_desk::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    debug!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults and environment overrides",
            cli.config.display()
        );
        Config::load(None).context("Failed to load default configuration")?
    };

    let session = Session::new(config).with_progress(!cli.json);

    let outcome = match cli.command {
        Commands::Templates => cmd_templates(cli.json),
        Commands::Pages => cmd_pages(cli.json),
        Commands::Generate { form, output } => cmd_generate(session, form, output, cli.json).await,
        Commands::Review {
            file,
            contract_type,
        } => cmd_review(session, &file, contract_type, cli.json).await,
        Commands::Compare {
            original,
            revised,
            decisions,
            output,
        } => cmd_compare(session, &original, &revised, decisions, output, cli.json).await,
        Commands::Workflow {
            form,
            revised,
            decisions,
            output,
        } => cmd_workflow(session, form, &revised, decisions, output, cli.json).await,
    };

    if let Err(err) = &outcome {
        eprintln!("{}", format_error(&format!("{:#}", err)));
    }
    outcome
}

fn cmd_templates(as_json: bool) -> Result<()> {
    if as_json {
        let kinds: Vec<_> = ContractType::ALL
            .iter()
            .map(|kind| {
                json!({
                    "value": kind.as_str(),
                    "label": kind.label(),
                    "generate": kind.has_template(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    for kind in ContractType::ALL {
        let usage = if kind.has_template() {
            "generate, review"
        } else {
            "review"
        };
        println!("{:<12} {:<34} {}", kind.as_str(), kind.label(), usage);
    }
    Ok(())
}

fn cmd_pages(as_json: bool) -> Result<()> {
    if as_json {
        let pages: Vec<_> = Page::ALL
            .iter()
            .map(|page| json!({ "path": page.path(), "label": page.nav_label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    println!("{}", landing::render());
    for page in Page::ALL {
        println!("{:<10} {}", page.path(), page.nav_label());
    }
    Ok(())
}

async fn cmd_generate(
    mut session: Session,
    form: FormArgs,
    output: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let mut page = GeneratePage::with_form(form.into());
    let document = page.generate(&mut session).await?;

    let exporter = exporter_for(&session, output)?;
    let artifact = exporter
        .export_document(&document)
        .context("Failed to export generated contract")?;

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "document": document, "artifact": artifact }))?
        );
        return Ok(());
    }

    print_document(&document);
    if let Some(artifact) = artifact {
        println!("{}", format_success(&format!("Saved {}", artifact.path.display())));
    }
    Ok(())
}

async fn cmd_review(
    mut session: Session,
    file: &Path,
    contract_type: ContractType,
    as_json: bool,
) -> Result<()> {
    let mut page = ReviewPage::mount(&session);
    page.upload(file, &session)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    page.select_contract_type(contract_type);

    let document = page.analyze(&mut session).await?;
    print_review(&page, &document, as_json)
}

async fn cmd_compare(
    session: Session,
    original: &Path,
    revised: &Path,
    decisions: DecisionArgs,
    output: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let mut page = ComparePage::mount(&session);
    page.upload(Slot::Original, original, &session)
        .with_context(|| format!("Failed to load {}", original.display()))?;
    page.upload(Slot::Revised, revised, &session)
        .with_context(|| format!("Failed to load {}", revised.display()))?;

    page.compare(&session).await?;
    apply_decisions(&mut page, &decisions)?;
    finish_comparison(&session, &page, output, as_json)
}

async fn cmd_workflow(
    mut session: Session,
    form: FormArgs,
    revised: &Path,
    decisions: DecisionArgs,
    output: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let mut observer = session.registry().subscribe();
    let watcher = tokio::spawn(async move {
        while observer.changed().await.is_ok() {
            let snapshot = observer.borrow_and_update().clone();
            debug!(
                "Registry revision {}: {} documents, current {:?}",
                snapshot.revision,
                snapshot.documents.len(),
                snapshot.current_id()
            );
        }
    });

    let mut router = Router::new();
    let total = 3;

    router.navigate(Page::Generate.path());
    if !as_json {
        println!("{}", format_step(1, total, "Generate Document"));
    }
    let generated = GeneratePage::with_form(form.into())
        .generate(&mut session)
        .await?;
    if !as_json {
        print_document(&generated);
    }

    router.navigate(Page::Review.path());
    if !as_json {
        println!("\n{}", format_step(2, total, "Review Contract"));
    }
    let mut review = ReviewPage::mount(&session);
    let reviewed = review.analyze(&mut session).await?;
    if !as_json {
        print_review(&review, &reviewed, false)?;
    }

    router.navigate(Page::Compare.path());
    if !as_json {
        println!("\n{}", format_step(3, total, "Compare Contract"));
    }
    let mut compare = ComparePage::mount(&session);
    compare
        .upload(Slot::Revised, revised, &session)
        .with_context(|| format!("Failed to load {}", revised.display()))?;
    compare.compare(&session).await?;
    apply_decisions(&mut compare, &decisions)?;

    let exporter = exporter_for(&session, output.clone())?;
    let manifest = exporter
        .export_session(session.registry())
        .context("Failed to export session documents")?;
    info!(
        "Visited {}",
        router
            .history()
            .iter()
            .map(|page| page.path())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "manifest": manifest,
                "evaluation": review.evaluation(),
                "changes": compare.changes(),
            }))?
        );
    }
    finish_comparison(&session, &compare, output, as_json)?;

    drop(session);
    let _ = watcher.await;
    Ok(())
}

fn exporter_for(session: &Session, output: Option<PathBuf>) -> Result<ArtifactExporter> {
    let export = &session.config().export;
    let exporter = match output {
        Some(dir) => ArtifactExporter::new(&dir)
            .with_context(|| format!("Failed to prepare export directory {}", dir.display()))?
            .with_manifest(export.write_manifest),
        None => ArtifactExporter::from_config(export).with_context(|| {
            format!(
                "Failed to prepare export directory {}",
                export.output_dir.display()
            )
        })?,
    };
    Ok(exporter)
}

fn apply_decisions(page: &mut ComparePage, decisions: &DecisionArgs) -> Result<()> {
    for id in &decisions.approve {
        page.approve(id.trim())?;
    }
    for entry in &decisions.refer {
        let (id, remarks) = entry
            .split_once('=')
            .with_context(|| format!("Expected ID=REMARKS, got {}", entry))?;
        page.refer(id.trim(), remarks.trim())?;
    }
    Ok(())
}

/// Writes the comparison report. `quiet` suppresses the change listing.
fn finish_comparison(
    session: &Session,
    page: &ComparePage,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let exporter = exporter_for(session, output)?;
    let report = page.report(session);
    let artifact = exporter
        .write_file(&report)
        .context("Failed to write comparison report")?;

    if quiet {
        debug!("Comparison report written to {}", artifact.path.display());
        return Ok(());
    }

    print_changes(page);
    println!(
        "{}",
        format_success(&format!("Saved {}", artifact.path.display()))
    );
    Ok(())
}

fn print_document(document: &Document) {
    println!("{}", format_success(&document.name));
    println!("  id:   {}", document.id);
    println!("  type: {}", document.contract_type.label());
    if let Some(file) = &document.file {
        println!("  file: {} ({} bytes)", file.file_name, file.size);
    }
}

fn print_review(page: &ReviewPage, document: &Document, as_json: bool) -> Result<()> {
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "document": document,
                "evaluation": page.evaluation(),
                "summary": page.summary(),
            }))?
        );
        return Ok(());
    }

    println!("{}", format_info("Contract Evaluation Results"));
    for item in page.evaluation() {
        println!("{}", format_evaluation(item.status, &item.question));
        println!("    [{}] {}", item.status.as_str(), item.answer);
    }
    let summary = page.summary();
    println!(
        "{}",
        format_info(&format!(
            "{} good, {} warning, {} critical",
            summary.good, summary.warning, summary.critical
        ))
    );
    Ok(())
}

fn print_changes(page: &ComparePage) {
    for change in page.changes() {
        println!(
            "{} {}",
            change.id,
            format_change(change.kind, change.status, &change.section)
        );
        println!("    Kind: {}", change.kind.as_str());
        if let Some(old) = &change.old_text {
            println!("    - {}", old);
        }
        if let Some(new) = &change.new_text {
            println!("    + {}", new);
        }
        println!("    Summary: {}", change.summary);
        println!("    Opinion: {}", change.legal_opinion);
        println!("    Precedence: {}", change.precedence);
        if let Some(remarks) = &change.remarks {
            println!("    Remarks: {}", remarks);
        }
    }
}
