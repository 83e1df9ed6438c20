use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "WildeJagd1.0",
    assembly_accession: "GCA_GRIM_000007",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 30_000_000, &[]),
        ("2", 27_000_000, &[]),
        ("3", 24_000_000, &[]),
        ("4", 21_000_000, &[]),
        ("5", 19_000_000, &[]),
        ("6", 17_000_000, &[]),
        ("spectral_mitogenome", 19_000, &[]),
    ],
};

const MITOGENOME: &str = "spectral_mitogenome";

fn northern_hunt() -> Population {
    Population::new("NorthernHunt", "Wild Hunt of the North German Plain")
}

fn southern_hunt() -> Population {
    Population::new("SouthernHunt", "Wild Hunt of the Alpine foothills")
}

fn central_hunt() -> Population {
    Population::new("CentralHunt", "Wild Hunt of the Harz/Thuringian forests")
}

fn northern_hunt_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "NorthernHunt_1D12".into(),
        description: "Single population Northern Wild Hunt model".into(),
        long_description: "Single population of spectral hunters on the North German Plain. Modern \
             N=25000, bottleneck during Christianization 800 gen ago (N=3000), ancestral \
             40000 gen ago (N=20000).".into(),
        populations: vec![northern_hunt()],
        citations: vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.4e-8),
        population_configurations: vec![PopulationConfiguration::new(25_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(800.0, 0, 3_000.0),
            DemographicEvent::size_change(40_000.0, 0, 20_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn north_south_hunt_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "NorthSouthHunt_2D12".into(),
        description: "Two population North-South Wild Hunt model".into(),
        long_description: "Northern and Southern Wild Hunt hosts. Ancestral N=20000. Split 25000 gen \
             ago. North 25000, South 15000. Low migration (5e-6) reflecting seasonal ride \
             routes.".into(),
        populations: vec![northern_hunt(), southern_hunt()],
        citations: vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.4e-8),
        population_configurations: vec![
            PopulationConfiguration::new(25_000.0),
            PopulationConfiguration::new(15_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-6],
            vec![5.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(25_000.0, 0.0, None),
            DemographicEvent::mass_migration(25_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(25_000.0, 0, 20_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_hunt_hosts_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeHuntHosts_3D12".into(),
        description: "Three population Wild Hunt hosts model".into(),
        long_description: "Three Wild Hunt hosts across Germany. Ancestral N=20000. North-South split \
             25000 gen ago. Central host emerges from North 10000 gen ago. North 25000, \
             Central 10000, South 15000. Stepping-stone migration along ride routes.".into(),
        populations: vec![northern_hunt(), central_hunt(), southern_hunt()],
        citations: vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.4e-8),
        population_configurations: vec![
            PopulationConfiguration::new(25_000.0),
            PopulationConfiguration::new(10_000.0),
            PopulationConfiguration::new(15_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 1.0e-5, 0.0],
            vec![1.0e-5, 0.0, 1.0e-5],
            vec![0.0, 1.0e-5, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(10_000.0, 0.0, None),
            DemographicEvent::mass_migration(10_000.0, 1, 0, 1.0),
            DemographicEvent::mass_migration(25_000.0, 2, 0, 1.0),
            DemographicEvent::size_change(25_000.0, 0, 20_000.0),
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
                    mutation_rate: 7.5e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.4e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. (Deutsche Mythologie)",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. (Deutsche Mythologie)",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 60.0;
    Species {
        id: "WilJae".into(),
        ensembl_id: "venator_ferus".into(),
        name: "Venator ferus".into(),
        common_name: "Wilde Jagd (Wild Hunt)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 25_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. (Deutsche Mythologie)",
                1835,
                "https://en.wikipedia.org/wiki/Wild_Hunt",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            northern_hunt_1d12(generation_time),
            north_south_hunt_2d12(generation_time),
            three_hunt_hosts_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
