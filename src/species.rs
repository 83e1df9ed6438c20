use crate::catalog;
use crate::citations::Citation;
use crate::error::{CatalogError, listing};
use crate::genetic_maps::GeneticMap;
use crate::genomes::{Contig, Genome, RateMap};
use crate::models::DemographicModel;
use anyhow::{Result, bail};
use std::sync::OnceLock;

// ── Auxiliary catalog entries ─────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Annotation {
    pub id: String,
    pub species_id: String,
    pub description: String,
    pub url: String,
    pub sha256: String,
    pub file_pattern: String,
    pub annotation_source: String,
    pub annotation_type: String,
    pub citations: Vec<Citation>,
}

/// A distribution of fitness effects for new mutations.
#[derive(Clone, Debug)]
pub struct Dfe {
    pub id: String,
    pub description: String,
    pub long_description: String,
    pub citations: Vec<Citation>,
}

// ── Species ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Species {
    pub id: String,
    pub ensembl_id: String,
    pub name: String,
    pub common_name: String,
    pub separate_sexes: bool,
    pub genome: Genome,
    /// Years per generation.
    pub generation_time: f64,
    pub population_size: f64,
    pub ploidy: usize,
    pub citations: Vec<Citation>,
    pub demographic_models: Vec<DemographicModel>,
    pub genetic_maps: Vec<GeneticMap>,
    pub annotations: Vec<Annotation>,
    pub dfes: Vec<Dfe>,
}

/// Which stretch of the genome to simulate. Either a chromosome (optionally
/// restricted to `[left, right)`) or a generic contig of `length` bp.
#[derive(Clone, Debug, Default)]
pub struct ContigOptions {
    pub chromosome: Option<String>,
    pub length: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub genetic_map: Option<String>,
    pub mutation_rate: Option<f64>,
}

impl Species {
    pub fn add_demographic_model(&mut self, model: DemographicModel) -> Result<(), CatalogError> {
        if self.demographic_models.iter().any(|m| m.id == model.id) {
            return Err(CatalogError::DuplicateModel {
                species: self.id.clone(),
                id: model.id,
            });
        }
        self.demographic_models.push(model);
        Ok(())
    }

    pub fn get_demographic_model(&self, id: &str) -> Result<&DemographicModel, CatalogError> {
        self.demographic_models
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::ModelNotFound {
                species: self.id.clone(),
                id: id.to_string(),
                available: listing(self.demographic_models.iter().map(|m| m.id.as_str())),
            })
    }

    pub fn get_genetic_map(&self, id: &str) -> Result<&GeneticMap, CatalogError> {
        self.genetic_maps
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::GeneticMapNotFound {
                species: self.id.clone(),
                id: id.to_string(),
                available: listing(self.genetic_maps.iter().map(|m| m.id.as_str())),
            })
    }

    pub fn get_annotations(&self, id: &str) -> Result<&Annotation, CatalogError> {
        self.annotations
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::AnnotationNotFound {
                species: self.id.clone(),
                id: id.to_string(),
                available: listing(self.annotations.iter().map(|a| a.id.as_str())),
            })
    }

    pub fn get_dfe(&self, id: &str) -> Result<&Dfe, CatalogError> {
        self.dfes
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::DfeNotFound {
                species: self.id.clone(),
                id: id.to_string(),
                available: listing(self.dfes.iter().map(|d| d.id.as_str())),
            })
    }

    pub fn get_contig(&self, opts: &ContigOptions) -> Result<Contig> {
        let Some(chrom_id) = opts.chromosome.as_deref() else {
            let Some(length) = opts.length else {
                bail!("must specify either a chromosome or a contig length");
            };
            if opts.left.is_some() || opts.right.is_some() {
                bail!("left and right coordinates need a chromosome");
            }
            if opts.genetic_map.is_some() {
                bail!("a genetic map needs a chromosome");
            }
            if !(length >= 1.0 && length.is_finite()) {
                return Err(CatalogError::InvalidContig(format!("length {length}")).into());
            }
            let (mu, rho) = self.genome.mean_rates(self.ploidy);
            return Ok(Contig::new(
                format!("{}:generic", self.id),
                length.round(),
                opts.mutation_rate.unwrap_or(mu),
                rho,
                self.ploidy,
            ));
        };
        if opts.length.is_some() {
            bail!("cannot specify both a chromosome and a contig length");
        }

        let chrom = self
            .genome
            .get_chromosome(chrom_id)
            .ok_or_else(|| CatalogError::ChromosomeNotFound {
                species: self.id.clone(),
                id: chrom_id.to_string(),
                available: listing(self.genome.chromosomes.iter().map(|c| c.id.as_str())),
            })?;
        let chrom_len = chrom.length as f64;
        let left = opts.left.unwrap_or(0.0);
        let right = opts.right.unwrap_or(chrom_len);
        if !(0.0 <= left && left < right && right <= chrom_len) {
            return Err(CatalogError::InvalidContig(format!(
                "[{left}, {right}) is not inside chromosome {} of length {}",
                chrom.id, chrom.length
            ))
            .into());
        }

        let full_map = match opts.genetic_map.as_deref() {
            Some(map_id) => {
                let gm = self.get_genetic_map(map_id)?;
                if !gm.is_cached() {
                    gm.download()?;
                }
                RateMap::read_hapmap(&gm.chromosome_file(&chrom.id), Some(chrom_len))?
            }
            None => RateMap::uniform(chrom_len, chrom.recombination_rate),
        };
        let recombination_map = full_map.slice(left, right)?;

        Ok(Contig {
            origin: format!("{}:{}:{}-{}", self.id, chrom.id, left, right),
            mutation_rate: opts.mutation_rate.unwrap_or(chrom.mutation_rate),
            recombination_map,
            ploidy: chrom.ploidy,
            genetic_map: opts.genetic_map.clone(),
        })
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

static REGISTRY: OnceLock<Vec<Species>> = OnceLock::new();

fn registry() -> &'static [Species] {
    REGISTRY.get_or_init(catalog::all)
}

pub fn all_species() -> impl Iterator<Item = &'static Species> {
    registry().iter()
}

pub fn get_species(id: &str) -> Result<&'static Species, CatalogError> {
    registry()
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| CatalogError::SpeciesNotFound {
            id: id.to_string(),
            available: listing(registry().iter().map(|s| s.id.as_str())),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PiecewiseConstantSize;

    #[test]
    fn lookup_and_missing_species() {
        let sp = get_species("ZweBerg").unwrap();
        assert_eq!(sp.id, "ZweBerg");
        let err = get_species("XXX").unwrap_err().to_string();
        assert!(err.starts_with("Species 'XXX' not in catalog ("));
        assert!(err.contains("ZweBerg"));
    }

    #[test]
    fn missing_model_lists_available() {
        let sp = get_species("ZweBerg").unwrap();
        let err = sp.get_demographic_model("XXX").unwrap_err().to_string();
        assert!(err.starts_with("DemographicModel 'ZweBerg/XXX' not in catalog ("));
        assert!(err.contains("BlackForest_1D12"));
        assert!(sp.get_genetic_map("XXX").is_err());
        assert!(sp.get_dfe("XXX").is_err());
        assert!(sp.get_annotations("XXX").is_err());
    }

    #[test]
    fn models_added_to_a_clone_leave_the_registry_alone() {
        let mut sp = get_species("ZweBerg").unwrap().clone();
        let mut m = PiecewiseConstantSize(100.0, &[]);
        m.id = "Extra".into();
        sp.add_demographic_model(m.clone()).unwrap();
        assert!(sp.add_demographic_model(m).is_err());
        assert!(sp.get_demographic_model("Extra").is_ok());
        assert!(get_species("ZweBerg").unwrap().get_demographic_model("Extra").is_err());
    }

    #[test]
    fn chromosome_contig_uses_chromosome_rates() {
        let sp = get_species("ZweBerg").unwrap();
        let c = sp
            .get_contig(&ContigOptions {
                chromosome: Some("1".into()),
                right: Some(50_000.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(c.length(), 50_000.0);
        assert_eq!(c.ploidy, 2);
        assert_eq!(c.mutation_rate, 2.5e-8);
        assert_eq!(c.origin, "ZweBerg:1:0-50000");
    }

    #[test]
    fn mitochondrial_contig_is_haploid() {
        let sp = get_species("ZweBerg").unwrap();
        let c = sp
            .get_contig(&ContigOptions {
                chromosome: Some("mountain_mitogenome".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(c.ploidy, 1);
        assert_eq!(c.recombination_rate(), 0.0);
    }

    #[test]
    fn generic_contig_and_bad_requests() {
        let sp = get_species("ZweBerg").unwrap();
        let c = sp
            .get_contig(&ContigOptions {
                length: Some(100.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(c.length(), 100.0);
        assert!(sp.get_contig(&ContigOptions::default()).is_err());
        assert!(
            sp.get_contig(&ContigOptions {
                chromosome: Some("99".into()),
                ..Default::default()
            })
            .is_err()
        );
        assert!(
            sp.get_contig(&ContigOptions {
                chromosome: Some("1".into()),
                left: Some(10.0),
                right: Some(5.0),
                ..Default::default()
            })
            .is_err()
        );
    }
}
