use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Lindwurm1.0",
    assembly_accession: "GCA_GRIM_000012",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 40_000_000, &[]),
        ("2", 35_000_000, &[]),
        ("3", 30_000_000, &[]),
        ("4", 27_000_000, &[]),
        ("5", 24_000_000, &[]),
        ("6", 21_000_000, &[]),
        ("7", 18_000_000, &[]),
        ("8", 15_000_000, &[]),
        ("draconic_mitogenome", 20_000, &[]),
    ],
};

const MITOGENOME: &str = "draconic_mitogenome";

fn rhine_dragon() -> Population {
    Population::new("RhineDragon", "Lindwurm of the Rhine valley (Fafnir/Nibelungen)")
}

fn klagenfurt() -> Population {
    Population::new("Klagenfurt", "Lindwurm of the Klagenfurt basin (Carinthia)")
}

fn scandinavian() -> Population {
    Population::new("Scandinavian", "Lindwurm of the Scandinavian/Norse tradition")
}

fn rhine_dragon_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "RhineDragon_1D12".into(),
        description: "Single population Rhine dragon model".into(),
        long_description: "Single population of Rhine valley dragons (Nibelungen tradition). Modern \
             N=2000, severe decline 500 gen ago (N=200) due to hero-slaying, ancestral \
             10000 gen ago (N=5000).".into(),
        populations: vec![rhine_dragon()],
        citations: vec![
            Citation::new(
                "Nibelungenlied",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.8e-8),
        population_configurations: vec![PopulationConfiguration::new(2_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(500.0, 0, 200.0),
            DemographicEvent::size_change(10_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn rhine_klagenfurt_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "RhineKlagenfurt_2D12".into(),
        description: "Two population Rhine-Klagenfurt Lindwurm model".into(),
        long_description: "Rhine and Klagenfurt dragon populations. Ancestral N=5000. Split 8000 gen \
             ago across the Alps. Rhine 2000, Klagenfurt 1500. Very low migration (5e-7) \
             across mountain barriers.".into(),
        populations: vec![rhine_dragon(), klagenfurt()],
        citations: vec![
            Citation::new(
                "Nibelungenlied / Klagenfurt legend",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.8e-8),
        population_configurations: vec![
            PopulationConfiguration::new(2_000.0),
            PopulationConfiguration::new(1_500.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-7],
            vec![5.0e-7, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(8_000.0, 0.0, None),
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_dragon_lairs_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeDragonLairs_3D12".into(),
        description: "Three population Lindwurm model (Rhine, Klagenfurt, Scandinavian)".into(),
        long_description: "Three dragon populations. Ancestral N=5000. Scandinavian splits 12000 gen \
             ago. Klagenfurt splits from Rhine 8000 gen ago. Rhine 2000, Klagenfurt 1500, \
             Scandinavian 3000. All experienced hero-slaying bottlenecks at different \
             times.".into(),
        populations: vec![rhine_dragon(), klagenfurt(), scandinavian()],
        citations: vec![
            Citation::new(
                "Nibelungenlied / Norse sagas",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.8e-8),
        population_configurations: vec![
            PopulationConfiguration::new(2_000.0),
            PopulationConfiguration::new(1_500.0),
            PopulationConfiguration::new(3_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::size_change(400.0, 1, 150.0),
            DemographicEvent::size_change(500.0, 0, 200.0),
            DemographicEvent::size_change(600.0, 2, 300.0),
            DemographicEvent::size_change(2_000.0, 0, 2_000.0),
            DemographicEvent::size_change(2_000.0, 1, 1_500.0),
            DemographicEvent::size_change(2_000.0, 2, 3_000.0),
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::mass_migration(12_000.0, 2, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 5_000.0),
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
                    mutation_rate: 5.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 1.8e-8,
                    recombination_rate: 2.0e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Nibelungenlied / Grimm, J.",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Nibelungenlied / Grimm, J.",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 200.0;
    Species {
        id: "LinDra".into(),
        ensembl_id: "lindwurm_draconicus".into(),
        name: "Lindwurm draconicus".into(),
        common_name: "Lindwurm (Dragon)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 2_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Nibelungenlied / Grimm, J.",
                1200,
                "https://en.wikipedia.org/wiki/Lindworm",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            rhine_dragon_1d12(generation_time),
            rhine_klagenfurt_2d12(generation_time),
            three_dragon_lairs_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
