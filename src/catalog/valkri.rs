use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Valkyrie1.0",
    assembly_accession: "GCA_GRIM_000018",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 25_000_000, &[]),
        ("2", 22_000_000, &[]),
        ("3", 18_000_000, &[]),
        ("4", 15_000_000, &[]),
        ("5", 12_000_000, &[]),
        ("valkyrja_mitogenome", 16_800, &[]),
    ],
};

const MITOGENOME: &str = "valkyrja_mitogenome";

fn valhalla() -> Population {
    Population::new("Valhalla", "Valkyries of the Valhalla host")
}

fn midgard() -> Population {
    Population::new("Midgard", "Valkyries patrolling the Midgard battlefields")
}

fn valhalla_host_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ValhallaHost_1D12".into(),
        description: "Single population Valhalla Valkyrie model".into(),
        long_description: "Single population of Valhalla valkyries. Modern N=12000, time=500 N=8000, \
             time=3000 N=15000 (height of Viking battles), ancestral at time=8000 \
             N=10000.".into(),
        populations: vec![valhalla()],
        citations: vec![
            Citation::new(
                "Norse-Germanic tribal lore / Edda",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.2e-8),
        population_configurations: vec![PopulationConfiguration::new(12_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(500.0, 0, 8_000.0),
            DemographicEvent::size_change(3_000.0, 0, 15_000.0),
            DemographicEvent::size_change(8_000.0, 0, 10_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn valhalla_midgard_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ValhallaMidgard_2D12".into(),
        description: "Two population Valhalla-Midgard Valkyrie model".into(),
        long_description: "Valhalla and Midgard valkyrie populations. Valhalla N=12000, Midgard N=8000. \
             Split time=4000 from ancestral N=10000. Symmetric migration 3e-6.".into(),
        populations: vec![valhalla(), midgard()],
        citations: vec![
            Citation::new(
                "Norse-Germanic tribal lore / Edda",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.2e-8),
        population_configurations: vec![
            PopulationConfiguration::new(12_000.0),
            PopulationConfiguration::new(8_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 3.0e-6],
            vec![3.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(4_000.0, 0.0, None),
            DemographicEvent::mass_migration(4_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(4_000.0, 0, 10_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn christianization_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Christianization_1D12".into(),
        description: "Single population Valkyrie model with Christianization decline".into(),
        long_description: "Single valkyrie population reflecting Christianization of Germanic tribes. \
             Modern N=12000, time=200 N=2000 (post-conversion decline), time=500 N=15000 \
             (pre-conversion peak), time=3000 N=10000, ancestral at time=8000 N=10000.".into(),
        populations: vec![valhalla()],
        citations: vec![
            Citation::new(
                "Norse-Germanic tribal lore / Edda",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.2e-8),
        population_configurations: vec![PopulationConfiguration::new(12_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(200.0, 0, 2_000.0),
            DemographicEvent::size_change(500.0, 0, 15_000.0),
            DemographicEvent::size_change(3_000.0, 0, 10_000.0),
            DemographicEvent::size_change(8_000.0, 0, 10_000.0),
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
                    mutation_rate: 2.2e-8,
                    recombination_rate: 2.4e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Norse-Germanic tribal lore",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Norse-Germanic tribal lore",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 100.0;
    Species {
        id: "ValKri".into(),
        ensembl_id: "valkyria_kriegensis".into(),
        name: "Valkyria kriegensis".into(),
        common_name: "Valkyrie (battle chooser)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 12_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Norse-Germanic tribal lore / Edda",
                900,
                "https://en.wikipedia.org/wiki/Valkyrie",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            valhalla_host_1d12(generation_time),
            valhalla_midgard_2d12(generation_time),
            christianization_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
