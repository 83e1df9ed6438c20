use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Schwarzwald1.0",
    assembly_accession: "GCA_GRIM_000108",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 23_500_000, &[]),
        ("2", 21_000_000, &[]),
        ("3", 19_000_000, &[]),
        ("4", 17_000_000, &[]),
        ("5", 15_000_000, &[]),
        ("forest_mitogenome", 16_500, &[]),
    ],
};

const MITOGENOME: &str = "forest_mitogenome";

fn north_black_forest() -> Population {
    Population::new("NorthBlackForest", "Northern Schwarzwald")
}

fn south_black_forest() -> Population {
    Population::new("SouthBlackForest", "Southern Schwarzwald (High Black Forest)")
}

fn black_forest_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BlackForest_1D12".into(),
        description: "Single population Black Forest spirit model".into(),
        long_description: "Single population of forest spirits in the Schwarzwald. Modern N=120000, \
             expansion 5000 gen ago (N=60000), ancestral 60000 gen ago (N=40000).".into(),
        populations: vec![north_black_forest()],
        citations: vec![
            Citation::new(
                "Black Forest folklore",
                1812,
                "https://en.wikipedia.org/wiki/Black_Forest",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(120_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(5_000.0, 0, 60_000.0),
            DemographicEvent::size_change(60_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn north_south_black_forest_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "NorthSouthBlackForest_2D12".into(),
        description: "Two population North and South Black Forest model".into(),
        long_description: "Northern and Southern Schwarzwald. Ancestral N=40000. Split 25000 gen ago. \
             North 70000, South 50000.".into(),
        populations: vec![north_black_forest(), south_black_forest()],
        citations: vec![
            Citation::new(
                "Black Forest folklore",
                1812,
                "https://en.wikipedia.org/wiki/Black_Forest",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(70_000.0),
            PopulationConfiguration::new(50_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(25_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(25_000.0, 0, 40_000.0),
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
                    mutation_rate: 7.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.5e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Black Forest folklore",
                1812,
                "https://en.wikipedia.org/wiki/Black_Forest",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Black Forest folklore",
                1812,
                "https://en.wikipedia.org/wiki/Black_Forest",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 35.0;
    Species {
        id: "SchWar".into(),
        ensembl_id: "schwarzwaldus_spiritus".into(),
        name: "Schwarzwaldus spiritus".into(),
        common_name: "Black Forest spirit (Schwarzwald)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 120_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Black Forest folklore",
                1812,
                "https://en.wikipedia.org/wiki/Black_Forest",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            black_forest_1d12(generation_time),
            north_south_black_forest_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
