use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Berchta1.0",
    assembly_accession: "GCA_GRIM_000021",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 25_500_000, &[]),
        ("2", 23_000_000, &[]),
        ("3", 21_000_000, &[]),
        ("4", 19_000_000, &[]),
        ("5", 17_000_000, &[]),
        ("winter_mitogenome", 16_800, &[]),
    ],
};

const MITOGENOME: &str = "winter_mitogenome";

fn bavarian_alps() -> Population {
    Population::new("BavarianAlps", "Berchta of the Bavarian Alps")
}

fn salzburg() -> Population {
    Population::new("Salzburg", "Berchta of Salzburg / Rauhnacht region")
}

fn tyrol() -> Population {
    Population::new("Tyrol", "Perchta of Tyrol (Tirol)")
}

fn bavarian_alps_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BavarianAlps_1D12".into(),
        description: "Single population Bavarian Alps Berchta model".into(),
        long_description: "Single population in the Bavarian Alps (Rauhnacht, winter spirit). Modern \
             N=42000, expansion 5000 gen ago (N=20000), ancestral 35000 gen ago \
             (N=15000).".into(),
        populations: vec![bavarian_alps()],
        citations: vec![
            Citation::new(
                "Bavarian / Alpine folklore",
                1800,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(42_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(5_000.0, 0, 20_000.0),
            DemographicEvent::size_change(35_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bavarian_alps_salzburg_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BavarianAlpsSalzburg_2D12".into(),
        description: "Two population Bavarian Alps and Salzburg Berchta model".into(),
        long_description: "Bavarian Alps and Salzburg (Rauhnacht) populations. Ancestral N=15000. Split \
             18000 gen ago. Bavarian Alps 42000, Salzburg 22000.".into(),
        populations: vec![bavarian_alps(), salzburg()],
        citations: vec![
            Citation::new(
                "Bavarian / Alpine folklore",
                1800,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(42_000.0),
            PopulationConfiguration::new(22_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(18_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(18_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bavarian_alps_tyrol_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BavarianAlpsTyrol_2D12".into(),
        description: "Two population Bavarian Alps and Tyrol Perchta model".into(),
        long_description: "Bavarian Alps and Tyrol (Tirol). Ancestral N=15000. Split 12000 gen ago. \
             Bavarian Alps 42000, Tyrol 18000.".into(),
        populations: vec![bavarian_alps(), tyrol()],
        citations: vec![
            Citation::new(
                "Alpine folklore",
                1800,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(42_000.0),
            PopulationConfiguration::new(18_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(12_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 15_000.0),
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
                "Alpine folklore",
                1835,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Alpine folklore",
                1835,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 35.0;
    Species {
        id: "BerAlp".into(),
        ensembl_id: "berchta_alpina".into(),
        name: "Berchta alpina".into(),
        common_name: "Perchta (Alpine winter spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 42_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Alpine folklore",
                1835,
                "https://en.wikipedia.org/wiki/Perchta",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            bavarian_alps_1d12(generation_time),
            bavarian_alps_salzburg_2d12(generation_time),
            bavarian_alps_tyrol_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
