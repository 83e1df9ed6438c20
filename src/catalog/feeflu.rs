use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Flussfee1.0",
    assembly_accession: "GCA_GRIM_000014",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 20_000_000, &[]),
        ("2", 18_000_000, &[]),
        ("3", 16_000_000, &[]),
        ("4", 14_000_000, &[]),
        ("5", 12_000_000, &[]),
        ("aquatic_mitogenome", 15_800, &[]),
    ],
};

const MITOGENOME: &str = "aquatic_mitogenome";

fn main_river() -> Population {
    Population::new("MainRiver", "River fairies of the Main (Franconia)")
}

fn moselle() -> Population {
    Population::new("Moselle", "River fairies of the Moselle")
}

fn neckar() -> Population {
    Population::new("Neckar", "River fairies of the Neckar (Swabia)")
}

fn main_river_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "MainRiver_1D12".into(),
        description: "Single population Main river fairy model".into(),
        long_description: "Single population of river fairies along the Main. Modern N=55000, decline \
             2000 gen ago (N=8000) due to river channeling, ancestral 45000 gen ago \
             (N=40000).".into(),
        populations: vec![main_river()],
        citations: vec![
            Citation::new(
                "German river folklore",
                1812,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.7e-8),
        population_configurations: vec![PopulationConfiguration::new(55_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_000.0, 0, 8_000.0),
            DemographicEvent::size_change(45_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn main_moselle_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "MainMoselle_2D12".into(),
        description: "Two population Main-Moselle river fairy model".into(),
        long_description: "Main and Moselle river fairy populations. Ancestral N=40000. Split 18000 gen \
             ago at Rhine confluence divergence. Main 55000, Moselle 25000. Migration \
             (8e-6) via Rhine.".into(),
        populations: vec![main_river(), moselle()],
        citations: vec![
            Citation::new(
                "German river folklore",
                1812,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.7e-8),
        population_configurations: vec![
            PopulationConfiguration::new(55_000.0),
            PopulationConfiguration::new(25_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 8.0e-6],
            vec![8.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(18_000.0, 0.0, None),
            DemographicEvent::mass_migration(18_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(18_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_tributaries_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeTributaries_3D12".into(),
        description: "Three population river fairy model (Main, Moselle, Neckar)".into(),
        long_description: "Three Rhine tributary fairy populations. Ancestral N=40000. Main-Moselle \
             split 18000 gen ago. Neckar splits from Main 10000 gen ago. Main 55000, \
             Moselle 25000, Neckar 20000. Stepping-stone via Rhine: Main-Moselle 8e-6, \
             Main-Neckar 1e-5.".into(),
        populations: vec![main_river(), moselle(), neckar()],
        citations: vec![
            Citation::new(
                "German river folklore",
                1812,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.7e-8),
        population_configurations: vec![
            PopulationConfiguration::new(55_000.0),
            PopulationConfiguration::new(25_000.0),
            PopulationConfiguration::new(20_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 8.0e-6, 1.0e-5],
            vec![8.0e-6, 0.0, 0.0],
            vec![1.0e-5, 0.0, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(10_000.0, 0.0, Some((0, 2))),
            DemographicEvent::migration_rate_change(10_000.0, 0.0, Some((2, 0))),
            DemographicEvent::mass_migration(10_000.0, 2, 0, 1.0),
            DemographicEvent::migration_rate_change(18_000.0, 0.0, None),
            DemographicEvent::mass_migration(18_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(18_000.0, 0, 40_000.0),
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
                    mutation_rate: 2.7e-8,
                    recombination_rate: 2.6e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Franconian folklore",
                1840,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Franconian folklore",
                1840,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 20.0;
    Species {
        id: "FeeFlu".into(),
        ensembl_id: "feeus_fluvialis".into(),
        name: "Feeus fluvialis".into(),
        common_name: "Flussfee (river fairy of the Main)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 55_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Franconian folklore",
                1840,
                "https://en.wikipedia.org/wiki/Fairy",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            main_river_1d12(generation_time),
            main_moselle_2d12(generation_time),
            three_tributaries_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
