use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "FrostGiant1.0",
    assembly_accession: "GCA_GRIM_000017",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 80_000_000, &[]),
        ("2", 65_000_000, &[]),
        ("3", 55_000_000, &[]),
        ("4", 45_000_000, &[]),
        ("5", 35_000_000, &[]),
        ("jotun_mitogenome", 22_000, &[]),
    ],
};

const MITOGENOME: &str = "jotun_mitogenome";

fn niflheim() -> Population {
    Population::new("Niflheim", "Frost Giants of the northern wastes (Niflheim)")
}

fn jotunheim() -> Population {
    Population::new("Jotunheim", "Frost Giants of the mountain realm (Jotunheim)")
}

fn niflheim_clan_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "NiflheimClan_1D12".into(),
        description: "Single population Niflheim Frost Giant model".into(),
        long_description: "Single population of Frost Giants in Niflheim. Modern N=3000, time=500 \
             N=2000, time=2000 N=4000, ancestral at time=10000 N=5000.".into(),
        populations: vec![niflheim()],
        citations: vec![
            Citation::new(
                "Snorri Sturluson / Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.0e-8),
        population_configurations: vec![PopulationConfiguration::new(3_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(500.0, 0, 2_000.0),
            DemographicEvent::size_change(2_000.0, 0, 4_000.0),
            DemographicEvent::size_change(10_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn nifl_jotun_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "NiflJotun_2D12".into(),
        description: "Two population Niflheim-Jotunheim Frost Giant model".into(),
        long_description: "Niflheim and Jotunheim Frost Giant populations. Ancestral N=5000. Split 5000 \
             gen ago. Niflheim N=3000, Jotunheim N=2000. Symmetric migration 5e-7.".into(),
        populations: vec![niflheim(), jotunheim()],
        citations: vec![
            Citation::new(
                "Snorri Sturluson / Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.0e-8),
        population_configurations: vec![
            PopulationConfiguration::new(3_000.0),
            PopulationConfiguration::new(2_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-7],
            vec![5.0e-7, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(5_000.0, 0.0, None),
            DemographicEvent::mass_migration(5_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(5_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn ragnarok_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Ragnarok_1D12".into(),
        description: "Single population Frost Giant model with Ragnarok bottleneck".into(),
        long_description: "Single Frost Giant population with cataclysmic Ragnarok decline. Modern \
             N=3000, time=100 N=200 (Ragnarok bottleneck), time=500 N=1500, time=3000 \
             N=5000, ancestral at time=10000 N=5000.".into(),
        populations: vec![niflheim()],
        citations: vec![
            Citation::new(
                "Snorri Sturluson / Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.0e-8),
        population_configurations: vec![PopulationConfiguration::new(3_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(100.0, 0, 200.0),
            DemographicEvent::size_change(500.0, 0, 1_500.0),
            DemographicEvent::size_change(3_000.0, 0, 5_000.0),
            DemographicEvent::size_change(10_000.0, 0, 5_000.0),
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
                    mutation_rate: 4.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 1.0e-8,
                    recombination_rate: 1.2e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 150.0;
    Species {
        id: "JotRie".into(),
        ensembl_id: "jotunnus_riesensis".into(),
        name: "Jotunnus riesensis".into(),
        common_name: "Frost Giant (Jotun)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 3_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Snorri Sturluson / Germanic tribal lore",
                800,
                "https://en.wikipedia.org/wiki/J%C3%B6tunn",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            niflheim_clan_1d12(generation_time),
            nifl_jotun_2d12(generation_time),
            ragnarok_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
