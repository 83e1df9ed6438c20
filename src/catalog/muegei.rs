use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "MillGhost1.0",
    assembly_accession: "GCA_GRIM_000020",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 15_000_000, &[]),
        ("2", 13_000_000, &[]),
        ("3", 11_000_000, &[]),
        ("4", 9_000_000, &[]),
        ("spectral_mitogenome", 14_500, &[]),
    ],
};

const MITOGENOME: &str = "spectral_mitogenome";

fn schwarzwald() -> Population {
    Population::new("Schwarzwald", "Mill ghosts of the Black Forest watermills")
}

fn spreewald() -> Population {
    Population::new("Spreewald", "Mill ghosts of the Spreewald marshes")
}

fn black_forest_mill_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BlackForestMill_1D12".into(),
        description: "Single population Black Forest mill ghost model".into(),
        long_description: "Single population of mill ghosts in the Schwarzwald. Modern N=40000, \
             time=500 N=20000, time=2000 N=30000, ancestral at time=5000 N=25000.".into(),
        populations: vec![schwarzwald()],
        citations: vec![
            Citation::new(
                "German folk ghost stories",
                1720,
                "https://en.wikipedia.org/wiki/Ghost#European_folklore",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![PopulationConfiguration::new(40_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(500.0, 0, 20_000.0),
            DemographicEvent::size_change(2_000.0, 0, 30_000.0),
            DemographicEvent::size_change(5_000.0, 0, 25_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn forest_marsh_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ForestMarsh_2D12".into(),
        description: "Two population Forest and Marsh mill ghost model".into(),
        long_description: "Schwarzwald N=40000 and Spreewald N=25000. Split time=3000 from ancestral \
             N=25000. Symmetric migration 8e-6.".into(),
        populations: vec![schwarzwald(), spreewald()],
        citations: vec![
            Citation::new(
                "German folk ghost stories",
                1720,
                "https://en.wikipedia.org/wiki/Ghost#European_folklore",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![
            PopulationConfiguration::new(40_000.0),
            PopulationConfiguration::new(25_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 8.0e-6],
            vec![8.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(3_000.0, 0.0, None),
            DemographicEvent::mass_migration(3_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(3_000.0, 0, 25_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn industrial_decline_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "IndustrialDecline_1D12".into(),
        description: "Single population industrial decline mill ghost model".into(),
        long_description: "Single population reflecting decline as mills were replaced. Modern N=40000, \
             time=100 N=10000 (industrialization), time=300 N=35000, time=1500 N=30000, \
             ancestral at time=5000 N=25000.".into(),
        populations: vec![schwarzwald()],
        citations: vec![
            Citation::new(
                "German folk ghost stories",
                1720,
                "https://en.wikipedia.org/wiki/Ghost#European_folklore",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![PopulationConfiguration::new(40_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(100.0, 0, 10_000.0),
            DemographicEvent::size_change(300.0, 0, 35_000.0),
            DemographicEvent::size_change(1_500.0, 0, 30_000.0),
            DemographicEvent::size_change(5_000.0, 0, 25_000.0),
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
                    mutation_rate: 8.5e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.8e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Black Forest folklore",
                1850,
                "https://en.wikipedia.org/wiki/Ghost",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Black Forest folklore",
                1850,
                "https://en.wikipedia.org/wiki/Ghost",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 30.0;
    Species {
        id: "MueGei".into(),
        ensembl_id: "muehlengeistus_nigrisilvae".into(),
        name: "Muehlengeistus nigrisilvae".into(),
        common_name: "Muehlengeist (Black Forest mill ghost)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 40_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Black Forest folklore",
                1850,
                "https://en.wikipedia.org/wiki/Ghost",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            black_forest_mill_1d12(generation_time),
            forest_marsh_2d12(generation_time),
            industrial_decline_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
