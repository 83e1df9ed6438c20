use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Schneewittchen1.0",
    assembly_accession: "GCA_GRIM_000001",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 22_000_000, &[]),
        ("2", 20_000_000, &[]),
        ("3", 18_000_000, &[]),
        ("4", 16_000_000, &[]),
        ("5", 14_000_000, &[]),
        ("mountain_mitogenome", 17_000, &[]),
    ],
};

const MITOGENOME: &str = "mountain_mitogenome";

fn black_forest() -> Population {
    Population::new("BlackForest", "Dwarves of the Schwarzwald mines")
}

fn harz() -> Population {
    Population::new("Harz", "Dwarves of the Harz mountains")
}

fn black_forest_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BlackForest_1D12".into(),
        description: "Single population Schwarzwald dwarf model".into(),
        long_description: "Single population of mountain dwarves in the Black Forest. Three epochs: \
             modern (N=80000), bottleneck 2000 gen ago (N=8000), ancestral founding 50000 \
             gen ago (N=40000).".into(),
        populations: vec![black_forest()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Grimms%27_Fairy_Tales",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(80_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_000.0, 0, 8_000.0),
            DemographicEvent::size_change(50_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn harz_black_forest_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "HarzBlackForest_2D12".into(),
        description: "Two population Harz and Schwarzwald dwarf model".into(),
        long_description: "Two populations: Black Forest core and Harz colony. Ancestral N=40000. Split \
             20000 gen ago. Schwarzwald at 80000, Harz bottleneck to 5000 then growth to \
             25000.".into(),
        populations: vec![black_forest(), harz()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Grimms%27_Fairy_Tales",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(80_000.0),
            PopulationConfiguration::new(25_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::size_change(3_000.0, 1, 5_000.0),
            DemographicEvent::mass_migration(20_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(20_000.0, 0, 40_000.0),
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
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Grimms%27_Fairy_Tales",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Grimms%27_Fairy_Tales",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 25.0;
    Species {
        id: "ZweBerg".into(),
        ensembl_id: "zwergus_bergensis".into(),
        name: "Zwergus bergensis".into(),
        common_name: "Bergzwerg (Mountain Dwarf)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 80_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Grimms%27_Fairy_Tales",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            black_forest_1d12(generation_time),
            harz_black_forest_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
