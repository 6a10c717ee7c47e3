use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdsite::Config;
use mdsite::site::{self, SiteError};

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown pages")]
struct Cli {
    /// Site config file
    #[arg(short, long, global = true, default_value = "site.toml")]
    config: PathBuf,

    /// Log progress (otherwise RUST_LOG is used)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static files and render every page in the content directory
    Build(BuildArgs),
    /// Convert a single Markdown file to an HTML fragment
    Render(RenderArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct RenderArgs {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension, `-` for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SiteError> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Build(args) => build(args, config),
        Command::Render(args) => render(args, config),
    }
}

fn build(args: BuildArgs, config: Config) -> Result<(), SiteError> {
    let mut site_config = config.site;
    if let Some(content) = args.content {
        site_config.content_dir = content;
    }
    if let Some(static_dir) = args.static_dir {
        site_config.static_dir = static_dir;
    }
    if let Some(template) = args.template {
        site_config.template = template;
    }
    if let Some(output) = args.output {
        site_config.output_dir = output;
    }

    let pages = site::build(&site_config, &config.markdown)?;
    println!(
        "Generated {} pages into {}",
        pages,
        site_config.output_dir.display()
    );
    Ok(())
}

fn render(args: RenderArgs, config: Config) -> Result<(), SiteError> {
    let markdown = fs::read_to_string(&args.input).map_err(|source| SiteError::Io {
        path: args.input.clone(),
        source,
    })?;

    let html = mdsite::markdown_to_html_with_config(&markdown, &config.markdown).map_err(
        |source| SiteError::Page {
            path: args.input.clone(),
            source,
        },
    )?;

    // Determine output path
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("html"));

    if output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        return writeln!(stdout, "{html}").map_err(|source| SiteError::Io { path: output, source });
    }

    fs::write(&output, html).map_err(|source| SiteError::Io {
        path: output.clone(),
        source,
    })?;

    println!("Created {}", output.display());
    Ok(())
}
