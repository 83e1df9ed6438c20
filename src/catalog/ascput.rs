use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Aschenputtel1.0",
    assembly_accession: "GCA_GRIM_000035",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 19_800_000, &[]),
        ("2", 17_800_000, &[]),
        ("3", 15_800_000, &[]),
        ("4", 14_200_000, &[]),
        ("5", 12_800_000, &[]),
        ("hearth_mitogenome", 14_900, &[]),
    ],
};

const MITOGENOME: &str = "hearth_mitogenome";

fn hearth() -> Population {
    Population::new("Hearth", "Doves at the hearth (Aschenputtel's helpers)")
}

fn hazel_tree() -> Population {
    Population::new("HazelTree", "Doves at the hazel tree (mother's grave)")
}

fn hearth_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Hearth_1D12".into(),
        description: "Single population Aschenputtel hearth doves model".into(),
        long_description: "Single population of helper doves (Grimm KHM 21, Aschenputtel). Modern \
             N=420000, expansion 2000 gen ago (N=180000), ancestral 15000 gen ago \
             (N=120000).".into(),
        populations: vec![hearth()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Cinderella",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(420_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_000.0, 0, 180_000.0),
            DemographicEvent::size_change(15_000.0, 0, 120_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn hearth_hazel_tree_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "HearthHazelTree_2D12".into(),
        description: "Two population hearth and hazel tree (Aschenputtel tale)".into(),
        long_description: "Hearth and hazel tree (mother's grave), the two dove realms in \
             Aschenputtel. Ancestral N=120000. Split 8000 gen ago. Hearth 420000, Hazel \
             Tree 150000.".into(),
        populations: vec![hearth(), hazel_tree()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Cinderella",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(420_000.0),
            PopulationConfiguration::new(150_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 120_000.0),
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
                    mutation_rate: 7.8e-8,
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
                "https://en.wikipedia.org/wiki/Cinderella",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Cinderella",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 8.0;
    Species {
        id: "AscPut".into(),
        ensembl_id: "aschenputtel_doves".into(),
        name: "Aschenputtel doves".into(),
        common_name: "Cinderella doves (Grimm KHM 21, Aschenputtel)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 420_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Cinderella",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            hearth_1d12(generation_time),
            hearth_hazel_tree_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
