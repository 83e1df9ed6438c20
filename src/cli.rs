use crate::cache::set_cache_dir;
use crate::citations::{Citation, CiteReason, write_bibtex};
use crate::engines::{Engine, get_engine};
use crate::models::{DemographicModel, PiecewiseConstantSize};
use crate::provenance::command_line_record;
use crate::samples::{WARNINGS_TARGET, parse_sample_spec};
use crate::species::{ContigOptions, Species, all_species, get_species};
use crate::wright_fisher::{WrightFisherEngine, WrightFisherParameters};
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Command, FromArgMatches};
use log::LevelFilter;
use std::ffi::OsString;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Options that come before the species name.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase logging verbosity (-v for INFO, -vv for DEBUG)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Directory for downloaded genetic maps and annotations
    #[arg(short = 'c', long)]
    pub cache_dir: Option<PathBuf>,
    /// Simulation engine
    #[arg(short, long, default_value = "wright_fisher")]
    pub engine: String,
    /// Divide population sizes and times by this factor, multiply rates by it
    /// (default: chosen from the model so populations stay small)
    #[arg(long)]
    pub wf_scaling_factor: Option<f64>,
    /// Burn-in length in multiples of the ancestral population size
    #[arg(long, default_value_t = 10.0)]
    pub wf_burn_in: f64,
    /// Simplify the tables every this many generations
    #[arg(long, default_value_t = 100)]
    pub wf_simplify_interval: usize,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Samples as <population_name>:<number of individuals>
    pub samples: Vec<String>,
    /// Demographic model (default: constant size at the species' population size)
    #[arg(short = 'd', long)]
    pub demographic_model: Option<String>,
    /// Output tree sequence file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Write BibTeX entries for the citations to this file
    #[arg(short, long)]
    pub bibtex_file: Option<PathBuf>,
    /// Check the setup and log it without simulating
    #[arg(short = 'D', long)]
    pub dry_run: bool,
    /// Chromosome to simulate (default: the first one)
    #[arg(short, long, conflicts_with = "length")]
    pub chromosome: Option<String>,
    /// Simulate a generic contig of this length using genome-wide mean rates
    #[arg(short = 'L', long)]
    pub length: Option<f64>,
    /// Left coordinate of the simulated region
    #[arg(long)]
    pub left: Option<f64>,
    /// Right coordinate of the simulated region
    #[arg(long)]
    pub right: Option<f64>,
    /// Genetic map to use for the recombination rate
    #[arg(short, long)]
    pub genetic_map: Option<String>,
    /// Distribution of fitness effects
    #[arg(long)]
    pub dfe: Option<String>,
    /// List the demographic models, or describe one in detail
    #[arg(long, num_args = 0..=1, value_name = "MODEL_ID")]
    pub help_models: Option<Option<String>>,
    #[arg(long, num_args = 0..=1, value_name = "MAP_ID")]
    pub help_genetic_maps: Option<Option<String>>,
    #[arg(long, num_args = 0..=1, value_name = "ANNOTATION_ID")]
    pub help_annotations: Option<Option<String>>,
    #[arg(long, num_args = 0..=1, value_name = "DFE_ID")]
    pub help_dfes: Option<Option<String>>,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Species whose maps to download (default: every species)
    pub species: Option<String>,
    /// Map ids (default: every map of the species)
    pub genetic_maps: Vec<String>,
}

pub const DOWNLOAD_COMMAND: &str = "download-genetic-maps";

/// The full command line: global options, one subcommand per species and
/// the genetic map downloader.
pub fn command() -> Command {
    let mut cmd = GlobalArgs::augment_args(
        Command::new("stdgrimmsim")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Simulate folklore species from a standard catalog of demographic models")
            .subcommand_required(true)
            .allow_external_subcommands(true)
            .arg_required_else_help(true),
    );
    for sp in all_species() {
        let about = format!("Run simulations for {} ({}).", sp.name, sp.common_name);
        cmd = cmd.subcommand(SimulateArgs::augment_args(
            Command::new(sp.id.as_str()).about(about),
        ));
    }
    cmd.subcommand(DownloadArgs::augment_args(
        Command::new(DOWNLOAD_COMMAND).about("Download genetic maps into the cache directory"),
    ))
}

// ── Logging ───────────────────────────────────────────────────────────────────

pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Render one log line. Plain warnings are the citations and notices meant
/// for the user, so they carry no prefix.
pub fn format_message(level: log::Level, target: &str, message: &str) -> String {
    if target == WARNINGS_TARGET {
        format!("WARNING: {message}")
    } else if level == log::Level::Warn {
        message.to_string()
    } else {
        format!("{level}: {message}")
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .filter_module("ureq", LevelFilter::Warn)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_message(record.level(), record.target(), &record.args().to_string())
            )
        })
        .try_init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = command().get_matches_from(argv.clone());
    let global = GlobalArgs::from_arg_matches(&matches)?;
    init_logging(global.verbose, global.quiet);
    set_cache_dir(global.cache_dir.clone());

    match matches.subcommand() {
        Some((DOWNLOAD_COMMAND, sub)) => download_genetic_maps(&DownloadArgs::from_arg_matches(sub)?),
        Some((species_id, sub)) => {
            // Names that are not catalog species arrive as external
            // subcommands and fail here with the catalog listing.
            let species = get_species(species_id)?;
            let args = SimulateArgs::from_arg_matches(sub)?;
            let recorded: Vec<String> = argv
                .iter()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            simulate(&global, species, &args, &recorded)
        }
        None => bail!("no species given"),
    }
}

fn build_engine(global: &GlobalArgs) -> Result<Box<dyn Engine>> {
    let params = WrightFisherParameters {
        scaling_factor: global.wf_scaling_factor,
        burn_in: global.wf_burn_in,
        simplify_interval: global.wf_simplify_interval,
        show_progress: log_level(global.verbose, global.quiet) >= LevelFilter::Info,
    };
    match global.engine.as_str() {
        "wright_fisher" => Ok(Box::new(WrightFisherEngine::new(params))),
        other => get_engine(other),
    }
}

/// Citations for the catalog software itself.
pub fn software_citations() -> Vec<Citation> {
    vec![
        Citation::new("Adrion et al.", 2020, "https://doi.org/10.7554/eLife.54967", &[CiteReason::Software]),
        Citation::new(
            "Lauterbur et al.",
            2023,
            "https://doi.org/10.7554/eLife.84874",
            &[CiteReason::Software],
        ),
    ]
}

/// The model used when none is named: one population at the species'
/// reference size.
pub fn default_model(species: &Species) -> DemographicModel {
    let mut model = PiecewiseConstantSize(species.population_size, &[]);
    model.generation_time = species.generation_time;
    model.citations = species
        .citations
        .iter()
        .filter(|c| c.reasons.contains(&CiteReason::PopSize))
        .cloned()
        .collect();
    model
}

// ── Listings ──────────────────────────────────────────────────────────────────

fn write_model<W: Write>(out: &mut W, model: &DemographicModel, detailed: bool) -> Result<()> {
    writeln!(out, "{}: {}", model.id, model.description)?;
    if !model.long_description.is_empty() {
        writeln!(out, "    {}", model.long_description)?;
    }
    writeln!(out, "    Populations:")?;
    for pop in &model.populations {
        let note = if pop.allows_samples() { "" } else { " (not sampled)" };
        writeln!(out, "        {}: {}{note}", pop.id, pop.description)?;
    }
    if detailed {
        writeln!(out)?;
        for line in model.debug_summary().lines() {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Handle the `--help-*` options. Returns false when none was given.
pub fn write_help_listing<W: Write>(out: &mut W, species: &Species, args: &SimulateArgs) -> Result<bool> {
    let mut shown = false;
    if let Some(which) = &args.help_models {
        match which {
            Some(id) => write_model(out, species.get_demographic_model(id)?, true)?,
            None => {
                writeln!(out, "All simulation models for {}:\n", species.id)?;
                for model in &species.demographic_models {
                    write_model(out, model, false)?;
                }
            }
        }
        shown = true;
    }
    if let Some(which) = &args.help_genetic_maps {
        let maps = match which {
            Some(id) => vec![species.get_genetic_map(id)?],
            None => species.genetic_maps.iter().collect(),
        };
        writeln!(out, "Genetic maps for {}:\n", species.id)?;
        for gm in maps {
            writeln!(out, "{}: {}\n    {}\n", gm.id, gm.description, gm.long_description)?;
        }
        shown = true;
    }
    if let Some(which) = &args.help_annotations {
        let annotations = match which {
            Some(id) => vec![species.get_annotations(id)?],
            None => species.annotations.iter().collect(),
        };
        writeln!(out, "Annotations for {}:\n", species.id)?;
        for an in annotations {
            writeln!(out, "{}: {}\n", an.id, an.description)?;
        }
        shown = true;
    }
    if let Some(which) = &args.help_dfes {
        let dfes = match which {
            Some(id) => vec![species.get_dfe(id)?],
            None => species.dfes.iter().collect(),
        };
        writeln!(out, "DFEs for {}:\n", species.id)?;
        for dfe in dfes {
            writeln!(out, "{}: {}\n    {}\n", dfe.id, dfe.description, dfe.long_description)?;
        }
        shown = true;
    }
    Ok(shown)
}

// ── Simulation ────────────────────────────────────────────────────────────────

fn simulate(global: &GlobalArgs, species: &Species, args: &SimulateArgs, argv: &[String]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if write_help_listing(&mut stdout, species, args)? {
        return Ok(());
    }

    let engine = build_engine(global)?;
    let (model, named_model) = match args.demographic_model.as_deref() {
        Some(id) => (species.get_demographic_model(id)?.clone(), true),
        None => (default_model(species), false),
    };
    if named_model && !model.qc_verified {
        log::warn!(
            target: WARNINGS_TARGET,
            "QCMissingWarning: {} has not been QCed. Use at your own risk! Citations for the \
             model are not included.",
            model.id
        );
    }
    let chromosome = match (&args.chromosome, args.length) {
        (Some(c), _) => Some(c.clone()),
        (None, Some(_)) => None,
        (None, None) => Some(
            species
                .genome
                .chromosomes
                .first()
                .map(|c| c.id.clone())
                .context("species has no chromosomes")?,
        ),
    };
    let contig = species.get_contig(&ContigOptions {
        chromosome,
        length: args.length,
        left: args.left,
        right: args.right,
        genetic_map: args.genetic_map.clone(),
        mutation_rate: model.mutation_rate,
    })?;
    // Haploid contigs such as mitogenomes sample one genome per individual.
    let samples = parse_sample_spec(&args.samples, &model, contig.ploidy)?;
    let dfe = args.dfe.as_deref().map(|id| species.get_dfe(id)).transpose()?;
    if let Some(dfe) = dfe {
        log::warn!(
            target: WARNINGS_TARGET,
            "{} engine simulates neutral mutations only; DFE '{}' is ignored",
            engine.id(),
            dfe.id
        );
    }

    log::info!(
        "Running {} for {} ({}) with engine {}",
        model.id,
        species.id,
        species.name,
        engine.id()
    );
    log::info!("Contig {} of length {}", contig.origin, contig.length());
    log::info!("Mean recombination rate: {:.3e}", contig.recombination_rate());
    log::info!("Mean mutation rate: {:.3e}", contig.mutation_rate);
    log::info!(
        "Samples: {}",
        samples
            .iter()
            .map(|s| format!("{}:{}", model.populations[s.population].id, s.num_nodes()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut citations = software_citations();
    citations.extend(engine.citations());
    citations.extend(species.genome.citations.iter().cloned());
    citations.extend(species.citations.iter().cloned());
    if model.qc_verified || !named_model {
        citations.extend(model.citations.iter().map(|c| c.because(CiteReason::DemModel)));
    }
    if let Some(map_id) = &args.genetic_map {
        citations.extend(species.get_genetic_map(map_id)?.citations.iter().cloned());
    }
    if let Some(dfe) = dfe {
        citations.extend(dfe.citations.iter().cloned());
    }
    let citations = Citation::merge(&citations);
    log::warn!("If you use this simulation in published work, please cite:");
    for c in &citations {
        log::warn!("{c}");
    }
    if let Some(path) = &args.bibtex_file {
        let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_bibtex(&mut file, &citations, |c| c.fetch_bibtex())?;
    }

    if args.dry_run {
        engine.simulate(&model, &contig, &samples, args.seed, true)?;
        return Ok(());
    }
    if args.output.is_none() && stdout.is_terminal() {
        bail!("refusing to write a tree sequence to the terminal; use -o or redirect stdout");
    }

    let ts = engine
        .simulate(&model, &contig, &samples, args.seed, false)?
        .context("engine produced no tree sequence")?;
    let mut tables = ts.dump_tables()?;
    tables.add_provenance(&command_line_record("stdgrimmsim", argv).to_json()?)?;

    match &args.output {
        Some(path) => {
            let name = path.to_str().context("output path is not valid UTF-8")?;
            tables.dump(name, tskit::TableOutputOptions::default())?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let tmp = tempfile::NamedTempFile::new()?;
            let name = tmp.path().to_str().context("temporary path is not valid UTF-8")?;
            tables.dump(name, tskit::TableOutputOptions::default())?;
            std::io::copy(&mut File::open(tmp.path())?, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn download_genetic_maps(args: &DownloadArgs) -> Result<()> {
    let species: Vec<&Species> = match &args.species {
        Some(id) => vec![get_species(id)?],
        None => all_species().collect(),
    };
    let mut downloaded = 0;
    for sp in species {
        let maps = if args.genetic_maps.is_empty() {
            sp.genetic_maps.iter().collect()
        } else {
            args.genetic_maps
                .iter()
                .map(|id| sp.get_genetic_map(id))
                .collect::<Result<Vec<_>, _>>()?
        };
        for gm in maps {
            gm.download()
                .with_context(|| format!("downloading genetic map {}/{}", sp.id, gm.id))?;
            log::info!("Genetic map {}/{} cached at {}", sp.id, gm.id, gm.cache_path().display());
            downloaded += 1;
        }
    }
    if downloaded == 0 {
        log::warn!("No genetic maps to download");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate_args(argv: &[&str]) -> SimulateArgs {
        let matches = command().try_get_matches_from(argv).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        SimulateArgs::from_arg_matches(sub).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn unknown_species_reaches_the_catalog_lookup() {
        let matches = command()
            .try_get_matches_from(["stdgrimmsim", "XXX", "pop_0:2"])
            .unwrap();
        let (name, _) = matches.subcommand().unwrap();
        assert_eq!(name, "XXX");
        let err = get_species(name).unwrap_err().to_string();
        assert!(err.starts_with("Species 'XXX' not in catalog (AlpNac, AscPut, "));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0, true), LevelFilter::Error);
        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(3, false), LevelFilter::Debug);
        assert!(command().try_get_matches_from(["stdgrimmsim", "-v", "-q", "ZweBerg"]).is_err());
    }

    #[test]
    fn warnings_are_formatted_by_target() {
        assert_eq!(
            format_message(log::Level::Warn, WARNINGS_TARGET, "careful"),
            "WARNING: careful"
        );
        assert_eq!(format_message(log::Level::Warn, "stdgrimmsim::cli", "cite me"), "cite me");
        assert_eq!(format_message(log::Level::Info, "x", "hello"), "INFO: hello");
    }

    #[test]
    fn species_options_parse() {
        let a = simulate_args(&[
            "stdgrimmsim",
            "ZweBerg",
            "BlackForest:5",
            "-d",
            "BlackForest_1D12",
            "-c",
            "2",
            "--right",
            "1000",
            "-s",
            "7",
        ]);
        assert_eq!(a.samples, vec!["BlackForest:5"]);
        assert_eq!(a.demographic_model.as_deref(), Some("BlackForest_1D12"));
        assert_eq!(a.chromosome.as_deref(), Some("2"));
        assert_eq!(a.right, Some(1000.0));
        assert_eq!(a.seed, Some(7));
        assert!(a.help_models.is_none());

        let h = simulate_args(&["stdgrimmsim", "ZweBerg", "--help-models"]);
        assert_eq!(h.help_models, Some(None));
        assert!(command()
            .try_get_matches_from(["stdgrimmsim", "ZweBerg", "-c", "1", "-L", "100"])
            .is_err());
    }

    #[test]
    fn model_listing_names_populations() {
        let sp = get_species("ZweBerg").unwrap();
        let args = simulate_args(&["stdgrimmsim", "ZweBerg", "--help-models"]);
        let mut out = Vec::new();
        assert!(write_help_listing(&mut out, sp, &args).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("BlackForest_1D12: "));
        assert!(text.contains("HarzBlackForest_2D12: "));
        assert!(text.contains("        BlackForest: "));

        let args = simulate_args(&["stdgrimmsim", "ZweBerg", "--help-models", "BlackForest_1D12"]);
        let mut out = Vec::new();
        write_help_listing(&mut out, sp, &args).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Epoch 1: 2000"));

        let args = simulate_args(&["stdgrimmsim", "ZweBerg", "--help-dfes", "Gamma"]);
        let err = write_help_listing(&mut Vec::new(), sp, &args).unwrap_err();
        assert!(err.to_string().starts_with("DFE 'ZweBerg/Gamma' not in catalog"));

        let args = simulate_args(&["stdgrimmsim", "ZweBerg", "BlackForest:2"]);
        assert!(!write_help_listing(&mut Vec::new(), sp, &args).unwrap());
    }

    #[test]
    fn default_model_uses_species_size() {
        let sp = get_species("ZweBerg").unwrap();
        let m = default_model(sp);
        assert_eq!(m.populations[0].id, "pop_0");
        assert_eq!(m.population_configurations[0].initial_size, sp.population_size);
        assert_eq!(m.generation_time, sp.generation_time);
    }
}
