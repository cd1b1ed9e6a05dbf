//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use filterforge_fetch::FragmentSource;
use filterforge_shared::{
    AppConfig, ConfigRequest, FilterBlock, RuneDesign, init_config, load_config,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// FilterForge — merge loot-filter blocks into a single config file.
#[derive(Parser)]
#[command(
    name = "filterforge",
    version,
    about = "Generate a merged loot-filter config from upstream filter blocks.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch fragments and generate the merged config.
    Generate {
        /// Rune design variant (e.g. "classic" or "cosmic rainbow").
        #[arg(short, long, conflicts_with = "request")]
        design: Option<String>,

        /// Filter block to include (repeatable, order preserved).
        #[arg(short, long = "block", conflicts_with = "request")]
        blocks: Vec<String>,

        /// Read a JSON request payload from a file ('-' for stdin).
        #[arg(long)]
        request: Option<String>,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List valid rune designs and filter block names.
    Blocks,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "filterforge=info",
        1 => "filterforge=debug",
        _ => "filterforge=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            design,
            blocks,
            request,
            out,
        } => cmd_generate(design.as_deref(), &blocks, request.as_deref(), out.as_deref()).await,
        Command::Blocks => cmd_blocks(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

async fn cmd_generate(
    design: Option<&str>,
    blocks: &[String],
    request: Option<&str>,
    out: Option<&std::path::Path>,
) -> Result<()> {
    let request = resolve_request(design, blocks, request)?;

    info!(
        design = %request.rune_design,
        blocks = request.filter_blocks.len(),
        "generating config"
    );

    let config = load_config()?;
    let source = FragmentSource::new(&config)?;

    let spinner = make_spinner();

    spinner.set_message("Fetching base file");
    let base = source.fetch_base().await?;

    spinner.set_message(format!("Fetching rune design '{}'", request.rune_design));
    let design_text = source.fetch_rune_design(request.rune_design).await?;

    let mut filter_texts = Vec::with_capacity(request.filter_blocks.len());
    for (i, &block) in request.filter_blocks.iter().enumerate() {
        spinner.set_message(format!(
            "Fetching filter block [{}/{}] {block}",
            i + 1,
            request.filter_blocks.len()
        ));
        filter_texts.push(source.fetch_filter_block(block).await?);
    }

    spinner.set_message("Merging");
    let merged = filterforge_merge::assemble(&base, &design_text, &filter_texts)?;
    spinner.finish_and_clear();

    match out {
        Some(path) => {
            std::fs::write(path, &merged)
                .map_err(|e| eyre!("failed to write {}: {e}", path.display()))?;
            println!();
            println!("  Config generated successfully!");
            println!("  Design:  {}", request.rune_design);
            println!("  Blocks:  {}", request.filter_blocks.len());
            println!("  Lines:   {}", merged.lines().count());
            println!("  Path:    {}", path.display());
            println!();
        }
        None => println!("{merged}"),
    }

    Ok(())
}

/// Build a validated request from either the JSON payload or CLI flags.
fn resolve_request(
    design: Option<&str>,
    blocks: &[String],
    request: Option<&str>,
) -> Result<ConfigRequest> {
    if let Some(path) = request {
        let payload = if path == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| eyre!("failed to read request from stdin: {e}"))?;
            buf
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| eyre!("failed to read request file '{path}': {e}"))?
        };
        return Ok(ConfigRequest::from_json(&payload)?);
    }

    let design = design.ok_or_else(|| {
        eyre!("either --design or --request is required (see 'filterforge blocks' for names)")
    })?;
    Ok(ConfigRequest::from_parts(design, blocks)?)
}

fn make_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

// ---------------------------------------------------------------------------
// blocks / config
// ---------------------------------------------------------------------------

fn cmd_blocks() -> Result<()> {
    println!("Rune designs:");
    for design in RuneDesign::ALL {
        println!("  {design}");
    }
    println!();
    println!("Filter blocks:");
    for block in FilterBlock::ALL {
        println!("  {block}");
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_request_from_flags() {
        let req = resolve_request(
            Some("classic"),
            &["sorceress".into(), "druid".into()],
            None,
        )
        .unwrap();
        assert_eq!(req.rune_design, RuneDesign::Classic);
        assert_eq!(
            req.filter_blocks,
            vec![FilterBlock::Sorceress, FilterBlock::Druid]
        );
    }

    #[test]
    fn resolve_request_requires_design_without_payload() {
        let err = resolve_request(None, &[], None).unwrap_err();
        assert!(err.to_string().contains("--design"));
    }

    #[test]
    fn resolve_request_rejects_unknown_block() {
        let err = resolve_request(Some("classic"), &["wizard".into()], None).unwrap_err();
        assert!(err.to_string().contains("wizard"));
    }
}
