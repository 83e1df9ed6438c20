use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Pommersch1.0",
    assembly_accession: "GCA_GRIM_000034",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 22_800_000, &[]),
        ("2", 20_800_000, &[]),
        ("3", 18_800_000, &[]),
        ("4", 16_800_000, &[]),
        ("5", 14_800_000, &[]),
        ("coast_mitogenome", 16_100, &[]),
    ],
};

const MITOGENOME: &str = "coast_mitogenome";

fn usedom() -> Population {
    Population::new("Usedom", "Spirits of Usedom island (Pomerania)")
}

fn rugen() -> Population {
    Population::new("Rugen", "Spirits of Rügen island")
}

fn stettin() -> Population {
    Population::new("Stettin", "Stettin (Szczecin) lagoon and Oder mouth")
}

fn usedom_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Usedom_1D12".into(),
        description: "Single population Usedom (Pomeranian Baltic) model".into(),
        long_description: "Single population on Usedom (Pomeranian coast / Baltic). Modern N=36000, \
             expansion 2500 gen ago (N=16000), ancestral 18000 gen ago (N=12000).".into(),
        populations: vec![usedom()],
        citations: vec![
            Citation::new(
                "Pomeranian folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(36_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_500.0, 0, 16_000.0),
            DemographicEvent::size_change(18_000.0, 0, 12_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn usedom_rugen_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "UsedomRugen_2D12".into(),
        description: "Two population Usedom and Rügen (Pomeranian islands)".into(),
        long_description: "Usedom and Rügen, two major Baltic islands of Pomerania. Ancestral N=12000. \
             Split 8000 gen ago. Usedom 36000, Rügen 24000.".into(),
        populations: vec![usedom(), rugen()],
        citations: vec![
            Citation::new(
                "Pomeranian folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(36_000.0),
            PopulationConfiguration::new(24_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 12_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn pomerania_baltic_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "PomeraniaBaltic_3D12".into(),
        description: "Three population Pomeranian Baltic: Usedom, Rügen, Stettin".into(),
        long_description: "Usedom, Rügen, and Stettin lagoon (Szczecin / Oder). Ancestral N=12000. \
             Splits: Stettin 6000 gen ago, Rügen 12000 gen ago.".into(),
        populations: vec![usedom(), rugen(), stettin()],
        citations: vec![
            Citation::new(
                "Pomeranian folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(36_000.0),
            PopulationConfiguration::new(24_000.0),
            PopulationConfiguration::new(28_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(6_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(12_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 12_000.0),
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
                    recombination_rate: 2.7e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Pomeranian folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Pomeranian folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 52.0;
    Species {
        id: "PomBal".into(),
        ensembl_id: "pommersch_balticus".into(),
        name: "Pommersch balticus".into(),
        common_name: "Pomeranian Baltic spirit (Pommern coast)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 36_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Pomeranian / Baltic folklore",
                1800,
                "https://en.wikipedia.org/wiki/Pomerania",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            usedom_1d12(generation_time),
            usedom_rugen_2d12(generation_time),
            pomerania_baltic_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
