use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "FrauHolle1.0",
    assembly_accession: "GCA_GRIM_000004",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 26_000_000, &[]),
        ("2", 23_000_000, &[]),
        ("3", 20_000_000, &[]),
        ("4", 18_000_000, &[]),
        ("5", 16_000_000, &[]),
        ("well_mitogenome", 16_500, &[]),
    ],
};

const MITOGENOME: &str = "well_mitogenome";

fn well_realm() -> Population {
    Population::new("WellRealm", "Frau Holle's realm beyond the well (Hesse/Thuringia)")
}

fn snow_realm() -> Population {
    Population::new("SnowRealm", "Snow-shaking realm")
}

fn well_realm_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "WellRealm_1D12".into(),
        description: "Single population Frau Holle realm model".into(),
        long_description: "Single population in Frau Holle's realm (Grimm KHM 24). Modern N=60000, \
             bottleneck 2500 gen ago (N=10000), ancestral 40000 gen ago (N=35000).".into(),
        populations: vec![well_realm()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Frau_Holle",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(60_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_500.0, 0, 10_000.0),
            DemographicEvent::size_change(40_000.0, 0, 35_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn well_snow_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "WellSnow_2D12".into(),
        description: "Two population Well and Snow realm model".into(),
        long_description: "Well realm and Snow realm. Ancestral N=35000. Split 15000 gen ago. Well \
             60000, Snow 20000.".into(),
        populations: vec![well_realm(), snow_realm()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Frau_Holle",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(60_000.0),
            PopulationConfiguration::new(20_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(15_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(15_000.0, 0, 35_000.0),
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
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Frau_Holle",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Frau_Holle",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 30.0;
    Species {
        id: "FraHol".into(),
        ensembl_id: "holle_hesseensis".into(),
        name: "Holle hesseensis".into(),
        common_name: "Frau Holle (fairy-tale realm)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 60_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Frau_Holle",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            well_realm_1d12(generation_time),
            well_snow_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
