use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "SiebenRaben1.0",
    assembly_accession: "GCA_GRIM_000031",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 20_500_000, &[]),
        ("2", 18_500_000, &[]),
        ("3", 16_500_000, &[]),
        ("4", 14_800_000, &[]),
        ("5", 13_200_000, &[]),
        ("glass_mitogenome", 15_100, &[]),
    ],
};

const MITOGENOME: &str = "glass_mitogenome";

fn glass_mountain() -> Population {
    Population::new("GlassMountain", "Ravens of the glass mountain (Grimm tale)")
}

fn forest_well() -> Population {
    Population::new("ForestWell", "Ravens of the forest well (sister's quest)")
}

fn glass_mountain_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "GlassMountain_1D12".into(),
        description: "Single population Seven Ravens (glass mountain) model".into(),
        long_description: "Single population at the glass mountain (Grimm KHM 25, Die sieben Raben). \
             Modern N=65000, expansion 4000 gen ago (N=25000), ancestral 25000 gen ago \
             (N=18000).".into(),
        populations: vec![glass_mountain()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/The_Seven_Ravens",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(65_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(4_000.0, 0, 25_000.0),
            DemographicEvent::size_change(25_000.0, 0, 18_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn glass_mountain_forest_well_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "GlassMountainForestWell_2D12".into(),
        description: "Two population glass mountain and forest well (Grimm KHM 25)".into(),
        long_description: "Glass mountain and forest well, the sister's journey (Die sieben Raben). \
             Ancestral N=18000. Split 12000 gen ago. Glass Mountain 65000, Forest Well \
             22000.".into(),
        populations: vec![glass_mountain(), forest_well()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/The_Seven_Ravens",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(65_000.0),
            PopulationConfiguration::new(22_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(12_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 18_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

pub(super) fn species() -> Species {
    let genome = Genome::from_data(
        &GENOME,
        |id| {
            if id == MITOGENOME {
                ChromosomeRates {
                    mutation_rate: 8.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.6e-8,
                    recombination_rate: 2.6e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/The_Seven_Ravens",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/The_Seven_Ravens",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 12.0;
    Species {
        id: "SieRab".into(),
        ensembl_id: "corvus_septem".into(),
        name: "Corvus septem".into(),
        common_name: "Seven Ravens (Grimm KHM 25)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 65_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/The_Seven_Ravens",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            glass_mountain_1d12(generation_time),
            glass_mountain_forest_well_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
