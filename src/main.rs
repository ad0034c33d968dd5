use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use tocolor::resolver::{self, FUNCTION_NAME};
use tocolor::value::{self, Value};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve style expression values to an RGBA color", long_about = None)]
struct Cli {
    /// JSON candidate array, e.g. '["toColor", [51,102,204], "#36c"]'
    #[arg(value_name = "JSON", required_unless_present = "file", conflicts_with = "file")]
    candidates: Option<String>,

    /// Read the JSON candidate array from a file instead
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Print the resolved color as a JSON object instead of a hex string
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let candidates = if let Some(file) = &cli.file {
        let path = Utf8PathBuf::from(file);
        value::load_candidates(&path)?
    } else {
        value::parse_candidates(cli.candidates.as_deref().unwrap_or_default())?
    };

    // A leading function-name slot marks the array as a full invocation;
    // that slot is reserved and never evaluated as a candidate.
    let color = match candidates.first() {
        Some(Value::Text(name)) if name == FUNCTION_NAME => resolver::resolve_call(&candidates)?,
        _ => resolver::resolve(&candidates)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&color)?);
    } else {
        println!("{}", color);
    }
    Ok(())
}
