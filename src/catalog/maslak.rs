use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Masurius1.0",
    assembly_accession: "GCA_GRIM_000025",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 22_500_000, &[]),
        ("2", 20_500_000, &[]),
        ("3", 18_500_000, &[]),
        ("4", 16_500_000, &[]),
        ("5", 14_500_000, &[]),
        ("lake_mitogenome", 15_900, &[]),
    ],
};

const MITOGENOME: &str = "lake_mitogenome";

fn masurian_lakes() -> Population {
    Population::new("MasurianLakes", "Lake spirits of the Masurian Lake District (Masuren)")
}

fn spirdingsee() -> Population {
    Population::new("Spirdingsee", "Spirits of the Spirdingsee (Śniardwy) region")
}

fn mauersee() -> Population {
    Population::new("Mauersee", "Spirits of the Mauersee (Mamry) region")
}

fn masurian_lakes_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "MasurianLakes_1D12".into(),
        description: "Single population Masurian Lake District model".into(),
        long_description: "Single population in the Masurian Lake District (Masuren, East Prussia). \
             Modern N=32000, expansion 4000 gen ago (N=14000), ancestral 22000 gen ago \
             (N=10000).".into(),
        populations: vec![masurian_lakes()],
        citations: vec![
            Citation::new(
                "Masurian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(32_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(4_000.0, 0, 14_000.0),
            DemographicEvent::size_change(22_000.0, 0, 10_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn masurian_lakes_spirdingsee_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "MasurianLakesSpirdingsee_2D12".into(),
        description: "Two population Masurian Lakes and Spirdingsee model".into(),
        long_description: "Masurian Lake District and Spirdingsee (Śniardwy). Ancestral N=10000. Split \
             9000 gen ago. Masurian Lakes 32000, Spirdingsee 12000.".into(),
        populations: vec![masurian_lakes(), spirdingsee()],
        citations: vec![
            Citation::new(
                "Masurian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(32_000.0),
            PopulationConfiguration::new(12_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(9_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(9_000.0, 0, 10_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn masurian_three_lakes_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "MasurianThreeLakes_3D12".into(),
        description: "Three population Masurian lakes: main district, Spirdingsee, Mauersee".into(),
        long_description: "Three lake regions in Masuren. Ancestral N=10000. Splits: Mauersee (Mamry) \
             11000 gen ago, Spirdingsee 18000 gen ago. Masurian Lakes 32000, Spirdingsee \
             12000, Mauersee 15000.".into(),
        populations: vec![masurian_lakes(), spirdingsee(), mauersee()],
        citations: vec![
            Citation::new(
                "Masurian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(32_000.0),
            PopulationConfiguration::new(12_000.0),
            PopulationConfiguration::new(15_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(11_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(18_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(18_000.0, 0, 10_000.0),
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
                    mutation_rate: 2.6e-8,
                    recombination_rate: 2.6e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Masurian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Masurian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 48.0;
    Species {
        id: "MasLak".into(),
        ensembl_id: "masurius_lacustris".into(),
        name: "Masurius lacustris".into(),
        common_name: "Masurian lake spirit (Masuren)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 32_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Masurian / East Prussian folklore",
                1850,
                "https://en.wikipedia.org/wiki/Masurian_Lake_District",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            masurian_lakes_1d12(generation_time),
            masurian_lakes_spirdingsee_2d12(generation_time),
            masurian_three_lakes_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
