use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Firedrake1.0",
    assembly_accession: "GCA_GRIM_000015",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 45_000_000, &[]),
        ("2", 38_000_000, &[]),
        ("3", 32_000_000, &[]),
        ("4", 28_000_000, &[]),
        ("5", 22_000_000, &[]),
        ("6", 18_000_000, &[]),
        ("draconic_mitogenome", 18_500, &[]),
    ],
};

const MITOGENOME: &str = "draconic_mitogenome";

fn rhineland() -> Population {
    Population::new("Rhineland", "Firedrakes of the Rhine valley castles")
}

fn bavarian() -> Population {
    Population::new("Bavarian", "Firedrakes of the Bavarian Alps caves")
}

fn castle_lair_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "CastleLair_1D12".into(),
        description: "Single population Rhineland Firedrake model".into(),
        long_description: "Single population of Firedrakes in the Rhine valley castles. Modern N=8000, \
             bottleneck at time=200 N=1000 (knight-slaying era), pre-bottleneck at \
             time=1000 N=6000, ancestral at time=5000 N=5000.".into(),
        populations: vec![rhineland()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.5e-8),
        population_configurations: vec![PopulationConfiguration::new(8_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(200.0, 0, 1_000.0),
            DemographicEvent::size_change(1_000.0, 0, 6_000.0),
            DemographicEvent::size_change(5_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn rhine_bavaria_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "RhineBavaria_2D12".into(),
        description: "Two population Rhine-Bavaria Firedrake split model".into(),
        long_description: "Rhineland and Bavarian Firedrake populations. Ancestral N=5000. Split 3000 \
             gen ago. Rhineland 8000, Bavarian 5000. Symmetric migration (2e-6) \
             reflecting occasional range overlap.".into(),
        populations: vec![rhineland(), bavarian()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(8_000.0),
            PopulationConfiguration::new(5_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 2.0e-6],
            vec![2.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(3_000.0, 0.0, None),
            DemographicEvent::mass_migration(3_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(3_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn dragon_slayer_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "DragonSlayer_1D12".into(),
        description: "Single population Firedrake model with severe Siegfried-era bottleneck".into(),
        long_description: "Single Firedrake population with severe bottleneck reflecting the \
             Siegfried-era dragon slaying. Modern N=8000, time=100 N=500 (Siegfried-era \
             slaying), time=300 N=3000, time=2000 N=6000, ancestral at time=5000 N=5000.".into(),
        populations: vec![rhineland()],
        citations: vec![
            Citation::new(
                "Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(1.5e-8),
        population_configurations: vec![PopulationConfiguration::new(8_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(100.0, 0, 500.0),
            DemographicEvent::size_change(300.0, 0, 3_000.0),
            DemographicEvent::size_change(2_000.0, 0, 6_000.0),
            DemographicEvent::size_change(5_000.0, 0, 5_000.0),
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
                    mutation_rate: 6.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 1.5e-8,
                    recombination_rate: 1.8e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 50.0;
    Species {
        id: "DraFeu".into(),
        ensembl_id: "draco_feuerspeiensis".into(),
        name: "Draco feuerspeiensis".into(),
        common_name: "Firedrake (medieval fire dragon)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 8_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. / Medieval bestiaries",
                1250,
                "https://en.wikipedia.org/wiki/Firedrake_(creature)",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            castle_lair_1d12(generation_time),
            rhine_bavaria_2d12(generation_time),
            dragon_slayer_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
