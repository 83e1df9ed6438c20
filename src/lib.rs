//! A catalog of folklore species, their genomes and demographic histories,
//! together with a forward Wright-Fisher engine that simulates them into
//! tskit tree sequences.
//!
//! ```no_run
//! let species = stdgrimmsim::get_species("ZweBerg")?;
//! let model = species.get_demographic_model("BlackForest_1D12")?;
//! let contig = species.get_contig(&stdgrimmsim::ContigOptions {
//!     chromosome: Some("1".into()),
//!     right: Some(100_000.0),
//!     ..Default::default()
//! })?;
//! let samples = stdgrimmsim::samples::parse_sample_spec(
//!     &["BlackForest:5".to_string()],
//!     model,
//!     contig.ploidy,
//! )?;
//! let engine = stdgrimmsim::get_default_engine();
//! let ts = engine.simulate(model, &contig, &samples, Some(1), false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
mod catalog;
pub mod citations;
pub mod cli;
pub mod docs;
pub mod engines;
pub mod error;
pub mod genetic_maps;
pub mod genomes;
pub mod models;
pub mod provenance;
pub mod samples;
pub mod species;
pub mod wright_fisher;

pub use cache::{get_cache_dir, set_cache_dir};
pub use citations::{Citation, CiteReason};
pub use engines::{Engine, all_engines, get_default_engine, get_engine};
pub use error::CatalogError;
pub use genetic_maps::GeneticMap;
pub use genomes::{Contig, Genome, RateMap};
pub use models::{
    DemographicEvent, DemographicModel, IsolationWithMigration, PiecewiseConstantSize, Population,
    PopulationConfiguration,
};
pub use samples::SampleSet;
pub use species::{ContigOptions, Species, all_species, get_species};
