use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Wolpertinger1.0",
    assembly_accession: "GCA_GRIM_000020",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 24_000_000, &[]),
        ("2", 22_000_000, &[]),
        ("3", 20_000_000, &[]),
        ("4", 18_000_000, &[]),
        ("5", 16_000_000, &[]),
        ("alpine_mitogenome", 17_500, &[]),
    ],
};

const MITOGENOME: &str = "alpine_mitogenome";

fn upper_bavaria() -> Population {
    Population::new("UpperBavaria", "Wolpertinger of Upper Bavaria (Oberbayern)")
}

fn bavarian_forest() -> Population {
    Population::new("BavarianForest", "Wolpertinger of the Bavarian Forest (Bayrischer Wald)")
}

fn allgaeu() -> Population {
    Population::new("Allgaeu", "Wolpertinger of the Allgäu Alps")
}

fn upper_bavaria_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "UpperBavaria_1D12".into(),
        description: "Single population Upper Bavaria Wolpertinger model".into(),
        long_description: "Single population in Upper Bavaria (Munich region, Alpine foothills). Modern \
             N=95000, bottleneck 3000 gen ago (N=15000), ancestral 40000 gen ago \
             (N=50000).".into(),
        populations: vec![upper_bavaria()],
        citations: vec![
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(95_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(3_000.0, 0, 15_000.0),
            DemographicEvent::size_change(40_000.0, 0, 50_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn upper_bavaria_bavarian_forest_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "UpperBavariaBavarianForest_2D12".into(),
        description: "Two population Upper Bavaria and Bavarian Forest model".into(),
        long_description: "Upper Bavaria (Oberbayern) and Bavarian Forest (Bayrischer Wald). Ancestral \
             N=50000. Split 20000 gen ago. Upper Bavaria 95000, Bavarian Forest 35000.".into(),
        populations: vec![upper_bavaria(), bavarian_forest()],
        citations: vec![
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(95_000.0),
            PopulationConfiguration::new(35_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(20_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(20_000.0, 0, 50_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bavaria_three_region_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BavariaThreeRegion_3D12".into(),
        description: "Three population Bavaria: Upper Bavaria, Bavarian Forest, Allgäu".into(),
        long_description: "Three Bavarian regions. Ancestral N=50000. Splits: Allgäu 15000 gen ago, \
             Bavarian Forest 25000 gen ago. Upper Bavaria 95000, Bavarian Forest 35000, \
             Allgäu 28000.".into(),
        populations: vec![upper_bavaria(), bavarian_forest(), allgaeu()],
        citations: vec![
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(95_000.0),
            PopulationConfiguration::new(35_000.0),
            PopulationConfiguration::new(28_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(15_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(25_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(25_000.0, 0, 50_000.0),
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
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 12.0;
    Species {
        id: "WolBay".into(),
        ensembl_id: "wolpertingerus_bavarius".into(),
        name: "Wolpertingerus bavarius".into(),
        common_name: "Wolpertinger (Bavarian hybrid creature)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 95_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Bavarian folklore",
                1900,
                "https://en.wikipedia.org/wiki/Wolpertinger",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            upper_bavaria_1d12(generation_time),
            upper_bavaria_bavarian_forest_2d12(generation_time),
            bavaria_three_region_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
