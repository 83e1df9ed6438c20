use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Basilisk1.0",
    assembly_accession: "GCA_GRIM_000016",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 30_000_000, &[]),
        ("2", 25_000_000, &[]),
        ("3", 20_000_000, &[]),
        ("4", 16_000_000, &[]),
        ("serpentine_mitogenome", 17_200, &[]),
    ],
};

const MITOGENOME: &str = "serpentine_mitogenome";

fn cologne() -> Population {
    Population::new("Cologne", "Basilisks of the Cologne underground")
}

fn vienna() -> Population {
    Population::new("Vienna", "Basilisks of the Vienna catacombs")
}

fn cologne_den_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "CologneDen_1D12".into(),
        description: "Single population Cologne Basilisk model".into(),
        long_description: "Single population of Cologne basilisks (underground den). Modern N=5000, \
             time=500 N=2000, time=2000 N=4000, ancestral at time=8000 N=3000.".into(),
        populations: vec![cologne()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.0e-8),
        population_configurations: vec![PopulationConfiguration::new(5_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(500.0, 0, 2_000.0),
            DemographicEvent::size_change(2_000.0, 0, 4_000.0),
            DemographicEvent::size_change(8_000.0, 0, 3_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn cologne_vienna_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "CologneVienna_2D12".into(),
        description: "Two population Cologne-Vienna Basilisk model".into(),
        long_description: "Cologne and Vienna basilisk populations. Cologne N=5000, Vienna N=3000. \
             Split time=5000 from ancestral N=3000. Symmetric migration 1e-6.".into(),
        populations: vec![cologne(), vienna()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.0e-8),
        population_configurations: vec![
            PopulationConfiguration::new(5_000.0),
            PopulationConfiguration::new(3_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 1.0e-6],
            vec![1.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(5_000.0, 0.0, None),
            DemographicEvent::mass_migration(5_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(5_000.0, 0, 3_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn petrifying_gaze_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "PetrifyingGaze_1D12".into(),
        description: "Single population Basilisk model with severe decline from mirror-defense era".into(),
        long_description: "Single basilisk population with severe decline during the mirror-defense \
             era. Modern N=5000, time=200 N=300 (mirror-defense era), time=800 N=2000, \
             time=3000 N=4000, ancestral at time=8000 N=3000.".into(),
        populations: vec![cologne()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.0e-8),
        population_configurations: vec![PopulationConfiguration::new(5_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(200.0, 0, 300.0),
            DemographicEvent::size_change(800.0, 0, 2_000.0),
            DemographicEvent::size_change(3_000.0, 0, 4_000.0),
            DemographicEvent::size_change(8_000.0, 0, 3_000.0),
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
                    mutation_rate: 2.0e-8,
                    recombination_rate: 2.2e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 80.0;
    Species {
        id: "BasRex".into(),
        ensembl_id: "basiliscus_rex".into(),
        name: "Basiliscus rex".into(),
        common_name: "Basilisk (serpent king)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 5_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Pliny the Elder / Medieval bestiaries",
                1200,
                "https://en.wikipedia.org/wiki/Basilisk",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            cologne_den_1d12(generation_time),
            cologne_vienna_2d12(generation_time),
            petrifying_gaze_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
