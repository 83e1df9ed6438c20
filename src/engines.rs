use crate::citations::{Citation, CiteReason};
use crate::genomes::Contig;
use crate::models::DemographicModel;
use crate::samples::SampleSet;
use crate::wright_fisher::{WrightFisherEngine, WrightFisherParameters};
use anyhow::{Result, bail};

/// A simulator that turns a demographic model and a contig into a tree
/// sequence.
pub trait Engine {
    fn id(&self) -> &str;
    fn description(&self) -> &str;
    fn citations(&self) -> Vec<Citation>;

    /// Run the simulation. With `dry_run` the inputs are checked and
    /// `Ok(None)` is returned without simulating.
    fn simulate(
        &self,
        model: &DemographicModel,
        contig: &Contig,
        samples: &[SampleSet],
        seed: Option<u64>,
        dry_run: bool,
    ) -> Result<Option<tskit::TreeSequence>>;
}

pub fn all_engines() -> Vec<Box<dyn Engine>> {
    vec![Box::new(WrightFisherEngine::new(
        WrightFisherParameters::default(),
    ))]
}

pub fn get_engine(id: &str) -> Result<Box<dyn Engine>> {
    let mut engines = all_engines();
    match engines.iter().position(|e| e.id() == id) {
        Some(i) => Ok(engines.swap_remove(i)),
        None => {
            let available = engines
                .iter()
                .map(|e| e.id().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            bail!("Engine '{id}' not in catalog ({available})")
        }
    }
}

pub fn get_default_engine() -> Box<dyn Engine> {
    Box::new(WrightFisherEngine::new(WrightFisherParameters::default()))
}

/// Citation for the tree-sequence recording the engine relies on.
pub(crate) fn tree_sequence_citation() -> Citation {
    Citation::new(
        "Kelleher et al.",
        2018,
        "https://doi.org/10.1371/journal.pcbi.1006581",
        &[CiteReason::Engine],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_registered() {
        let e = get_default_engine();
        assert_eq!(get_engine(e.id()).unwrap().id(), e.id());
        let err = get_engine("msprime").err().unwrap().to_string();
        assert_eq!(err, "Engine 'msprime' not in catalog (wright_fisher)");
        assert!(!e.citations().is_empty());
    }
}
