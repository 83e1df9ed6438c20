use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Erlkoenig1.0",
    assembly_accession: "GCA_GRIM_000009",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 27_000_000, &[]),
        ("2", 24_000_000, &[]),
        ("3", 21_000_000, &[]),
        ("4", 19_000_000, &[]),
        ("5", 17_000_000, &[]),
        ("alder_mitogenome", 16_800, &[]),
    ],
};

const MITOGENOME: &str = "alder_mitogenome";

fn thuringian() -> Population {
    Population::new("Thuringian", "Erlkoenig of the Thuringian forests")
}

fn baltic() -> Population {
    Population::new("Baltic", "Erlkoenig of the Baltic coastal forests (Ellerkonge)")
}

fn bohemian() -> Population {
    Population::new("Bohemian", "Erlkoenig of the Bohemian woodlands")
}

fn thuringian_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Thuringian_1D12".into(),
        description: "Single population Thuringian Erlkoenig model".into(),
        long_description: "Single population in the Thuringian forest. Modern N=30000, decline 600 gen \
             ago (N=5000) due to deforestation, ancestral 35000 gen ago (N=25000).".into(),
        populations: vec![thuringian()],
        citations: vec![
            Citation::new(
                "Goethe / Herder",
                1782,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(30_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(600.0, 0, 5_000.0),
            DemographicEvent::size_change(35_000.0, 0, 25_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn thuringian_baltic_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThuringianBaltic_2D12".into(),
        description: "Two population Thuringian-Baltic Erlkoenig model".into(),
        long_description: "Thuringian and Baltic (Danish Ellerkonge) populations. Ancestral N=25000. \
             Split 20000 gen ago. Thuringian 30000, Baltic 18000. Low migration (3e-6) \
             via forest corridors.".into(),
        populations: vec![thuringian(), baltic()],
        citations: vec![
            Citation::new(
                "Herder / Danish folklore",
                1778,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(30_000.0),
            PopulationConfiguration::new(18_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 3.0e-6],
            vec![3.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(20_000.0, 0.0, None),
            DemographicEvent::mass_migration(20_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(20_000.0, 0, 25_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_forest_realms_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeForestRealms_3D12".into(),
        description: "Three population Erlkoenig model (Thuringian, Baltic, Bohemian)".into(),
        long_description: "Three Erlkoenig populations across northern/central Europe. Ancestral \
             N=25000. Baltic splits 20000 gen ago. Bohemian splits from Thuringian 12000 \
             gen ago. Thuringian 30000, Baltic 18000, Bohemian 10000. Stepping-stone \
             migration.".into(),
        populations: vec![thuringian(), baltic(), bohemian()],
        citations: vec![
            Citation::new(
                "Herder / Goethe / Bohemian folklore",
                1778,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(30_000.0),
            PopulationConfiguration::new(18_000.0),
            PopulationConfiguration::new(10_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 3.0e-6, 5.0e-6],
            vec![3.0e-6, 0.0, 0.0],
            vec![5.0e-6, 0.0, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(12_000.0, 0.0, None),
            DemographicEvent::mass_migration(12_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(20_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(20_000.0, 0, 25_000.0),
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
                    mutation_rate: 2.5e-8,
                    recombination_rate: 2.6e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Goethe / Herder",
                1782,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Goethe / Herder",
                1782,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 45.0;
    Species {
        id: "ErlKoe".into(),
        ensembl_id: "erlkoenig_sylvestris".into(),
        name: "Erlkoenig sylvestris".into(),
        common_name: "Erlkoenig (Alder King)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 30_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Goethe / Herder / Danish folklore",
                1782,
                "https://en.wikipedia.org/wiki/Erlking",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            thuringian_1d12(generation_time),
            thuringian_baltic_2d12(generation_time),
            three_forest_realms_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
