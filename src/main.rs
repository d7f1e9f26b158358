use anyhow::{Context, Result};
use bib2html::config::{find_config_file, get_config, load_config, Config};
use bib2html::utils::{check_extension, open_input, resolve_output_path, PathError};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// bib2html - Convert a BibTeX file of articles to an HTML publication list
///
/// Only @article entries are listed; @comment{html, ...} entries are copied
/// to the output verbatim and every other entry is ignored. Every field must
/// end with a comma, the last one included, and each entry must close with
/// a single "}" on its own line.
#[derive(Parser, Debug)]
#[command(name = "bib2html")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert BibTeX files to HTML with links", long_about = None)]
struct Cli {
    /// BibTeX input file
    #[arg(required_unless_present = "print_config")]
    bibtex_file: Option<PathBuf>,

    /// HTML output file (default: the input file with an .html extension)
    html_file: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Document title, overriding the configuration
    #[arg(long)]
    title: Option<String>,

    /// Write the document to standard output instead of a file
    #[arg(long)]
    stdout: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging(cli: &Cli) {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bib2html={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        load_config(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else {
        get_config().context("Failed to read configuration from environment")?
    };

    if let Some(title) = &cli.title {
        config.document.title = title.clone();
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load(cli)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(bibtex_file) = cli.bibtex_file.as_deref() else {
        anyhow::bail!("Missing <BIBTEX_FILE> argument");
    };
    check_extension(bibtex_file, &config.files.input_extension)?;
    let input = open_input(bibtex_file)?;

    // Render fully before touching the output so a bad entry leaves no partial file
    let mut document = Vec::new();
    let stats = bib2html::convert(input, &mut document, &config)
        .with_context(|| format!("Failed to convert {}", bibtex_file.display()))?;

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&document)?;
        stdout.flush()?;
    } else {
        let html_file = resolve_output_path(
            bibtex_file,
            cli.html_file.as_deref(),
            &config.files.output_extension,
        );
        std::fs::write(&html_file, &document)
            .with_context(|| format!("Failed to write {}", html_file.display()))?;
        tracing::info!("Wrote {}", html_file.display());
    }

    tracing::info!(
        "converted {} articles, {} html blocks ({} ignored)",
        stats.articles,
        stats.html_blocks,
        stats.ignored
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            match err.downcast_ref::<PathError>() {
                Some(PathError::BadExtension { .. }) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
