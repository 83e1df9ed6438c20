use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Loreley1.0",
    assembly_accession: "GCA_GRIM_000005",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 25_000_000, &[]),
        ("2", 22_000_000, &[]),
        ("3", 20_000_000, &[]),
        ("4", 18_000_000, &[]),
        ("5", 16_000_000, &[]),
        ("rock_mitogenome", 16_200, &[]),
    ],
};

const MITOGENOME: &str = "rock_mitogenome";

fn loreley_rock() -> Population {
    Population::new("LoreleyRock", "Spirits of the Loreley rock (Rhine)")
}

fn middle_rhine() -> Population {
    Population::new("MiddleRhine", "Middle Rhine stretch")
}

fn loreley_rock_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "LoreleyRock_1D12".into(),
        description: "Single population Loreley (Rhine rock) model".into(),
        long_description: "Single population at the Loreley rock, Middle Rhine. Modern N=35000, \
             bottleneck 1000 gen ago (N=7000), ancestral 25000 gen ago (N=20000).".into(),
        populations: vec![loreley_rock()],
        citations: vec![
            Citation::new(
                "Brentano / Heine",
                1801,
                "https://en.wikipedia.org/wiki/Lorelei",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(35_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(1_000.0, 0, 7_000.0),
            DemographicEvent::size_change(25_000.0, 0, 20_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn loreley_middle_rhine_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "LoreleyMiddleRhine_2D12".into(),
        description: "Two population Loreley rock and Middle Rhine model".into(),
        long_description: "Loreley rock and Middle Rhine. Ancestral N=20000. Split 8000 gen ago. \
             Loreley 35000, Middle Rhine 15000.".into(),
        populations: vec![loreley_rock(), middle_rhine()],
        citations: vec![
            Citation::new(
                "Rhine folklore",
                1801,
                "https://en.wikipedia.org/wiki/Lorelei",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(35_000.0),
            PopulationConfiguration::new(15_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 20_000.0),
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
                    mutation_rate: 2.5e-8,
                    recombination_rate: 2.7e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Rhine folklore",
                1801,
                "https://en.wikipedia.org/wiki/Lorelei",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Rhine folklore",
                1801,
                "https://en.wikipedia.org/wiki/Lorelei",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 40.0;
    Species {
        id: "LorRhe".into(),
        ensembl_id: "loreley_rhenanus".into(),
        name: "Loreley rhenanus".into(),
        common_name: "Loreley (Rhine rock spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 35_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Brentano / Heine / Rhine folklore",
                1801,
                "https://en.wikipedia.org/wiki/Lorelei",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            loreley_rock_1d12(generation_time),
            loreley_middle_rhine_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
