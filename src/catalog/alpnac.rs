use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Alpdruck1.0",
    assembly_accession: "GCA_GRIM_000011",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 18_000_000, &[]),
        ("2", 16_000_000, &[]),
        ("3", 14_000_000, &[]),
        ("4", 12_000_000, &[]),
        ("5", 10_000_000, &[]),
        ("nocturnal_mitogenome", 15_200, &[]),
    ],
};

const MITOGENOME: &str = "nocturnal_mitogenome";

fn swabian() -> Population {
    Population::new("Swabian", "Alps of the Swabian Alb region")
}

fn saxon() -> Population {
    Population::new("Saxon", "Alps of the Saxon lowlands")
}

fn alpine_alp() -> Population {
    Population::new("AlpineAlp", "Alps of the Alpine valleys (Tyrol/Bavaria)")
}

fn swabian_alp_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "SwabianAlp_1D12".into(),
        description: "Single population Swabian Alp nightmare spirit model".into(),
        long_description: "Single population of Alps in the Swabian Alb. Modern N=150000, steady growth \
             from 50000 over 10000 gen, ancestral 50000 gen ago (N=30000).".into(),
        populations: vec![swabian()],
        citations: vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(150_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(10_000.0, 0, 50_000.0),
            DemographicEvent::size_change(50_000.0, 0, 30_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn swabian_saxon_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "SwabianSaxon_2D12".into(),
        description: "Two population Swabian-Saxon Alp model".into(),
        long_description: "Swabian and Saxon Alp populations. Ancestral N=30000. Split 30000 gen ago. \
             Swabian 150000, Saxon 80000. Migration (1e-5) reflecting nocturnal range \
             overlap.".into(),
        populations: vec![swabian(), saxon()],
        citations: vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(150_000.0),
            PopulationConfiguration::new(80_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 1.0e-5],
            vec![1.0e-5, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(30_000.0, 0.0, None),
            DemographicEvent::mass_migration(30_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(30_000.0, 0, 30_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_alp_regions_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeAlpRegions_3D12".into(),
        description: "Three population Alp model (Swabian, Saxon, Alpine)".into(),
        long_description: "Three regional Alp populations. Ancestral N=30000. Swabian-Saxon split 30000 \
             gen ago. Alpine splits from Swabian 15000 gen ago. Swabian 150000, Saxon \
             80000, Alpine 40000. Stepping-stone migration pattern.".into(),
        populations: vec![swabian(), saxon(), alpine_alp()],
        citations: vec![
            Citation::new(
                "Grimm, J. / Alpine folklore",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(150_000.0),
            PopulationConfiguration::new(80_000.0),
            PopulationConfiguration::new(40_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 1.0e-5, 8.0e-6],
            vec![1.0e-5, 0.0, 0.0],
            vec![8.0e-6, 0.0, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(15_000.0, 0.0, None),
            DemographicEvent::mass_migration(15_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(30_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(30_000.0, 0, 30_000.0),
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
                    mutation_rate: 2.6e-8,
                    recombination_rate: 2.7e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J.",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 10.0;
    Species {
        id: "AlpNac".into(),
        ensembl_id: "alpus_nocturnalis".into(),
        name: "Alpus nocturnalis".into(),
        common_name: "Alp (nightmare spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 150_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. / German folklore",
                1835,
                "https://en.wikipedia.org/wiki/Alp_(folklore)",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            swabian_alp_1d12(generation_time),
            swabian_saxon_2d12(generation_time),
            three_alp_regions_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
