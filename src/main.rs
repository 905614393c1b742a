use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use contix::document::{load_conti, scene_summary_lines};
use contix::render::write_docx;

const DEFAULT_INPUT: &str = "src/data/conti.js";
const DEFAULT_OUTPUT: &str = "output/conti.docx";

#[derive(Parser)]
#[command(name = "contix")]
#[command(about = "Convert a line conti source file into a .docx storyboard table")]
#[command(version)]
struct Cli {
    /// Conti source file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output .docx path (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the parsed conti as JSON and skip rendering
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let document = load_conti(&cli.input)
        .with_context(|| format!("Failed to load conti source {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!(
        "📄 파싱 완료: {} ({})",
        document.title, document.total_duration
    );
    for line in scene_summary_lines(&document) {
        println!("   {line}");
    }

    let summary = write_docx(&document, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("✅ 문서 생성 완료: {}", summary.output.display());
    println!("   씬 {}개, 총 컷 {}개", summary.scenes, summary.cuts);

    Ok(())
}
