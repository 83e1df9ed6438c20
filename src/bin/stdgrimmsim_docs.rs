use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stdgrimmsim::{Species, all_species, get_species};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Write reStructuredText catalog pages")]
struct Args {
    /// Species to document (default: the whole catalog)
    species: Vec<String>,
    #[arg(short, long, default_value = "docs/catalog")]
    output: PathBuf,
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let species: Vec<&Species> = if args.species.is_empty() {
        all_species().collect()
    } else {
        args.species
            .iter()
            .map(|id| get_species(id))
            .collect::<Result<_, _>>()?
    };

    let written = stdgrimmsim::docs::write_pages(&species, &args.output)?;
    eprintln!("Wrote {} pages to {}", written.len(), args.output.display());
    Ok(())
}
