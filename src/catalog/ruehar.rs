use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Ruebezahl1.0",
    assembly_accession: "GCA_GRIM_000003",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 28_000_000, &[]),
        ("2", 25_000_000, &[]),
        ("3", 22_000_000, &[]),
        ("4", 20_000_000, &[]),
        ("5", 18_000_000, &[]),
        ("mountain_mitogenome", 18_000, &[]),
    ],
};

const MITOGENOME: &str = "mountain_mitogenome";

fn riesengebirge() -> Population {
    Population::new("Riesengebirge", "Rübezahl's realm (Giant Mountains)")
}

fn harz() -> Population {
    Population::new("Harz", "Harz mountain spirit colony")
}

fn riesengebirge_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Riesengebirge_1D12".into(),
        description: "Single population Rübezahl (Riesengebirge) model".into(),
        long_description: "Single population of the mountain spirit in the Riesengebirge (Krkonoše). \
             Modern N=15000, ancient expansion 20000 gen ago (N=5000).".into(),
        populations: vec![riesengebirge()],
        citations: vec![
            Citation::new(
                "Silesian folklore",
                1600,
                "https://en.wikipedia.org/wiki/R%C3%BCbezahl",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.2e-8),
        population_configurations: vec![PopulationConfiguration::new(15_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(20_000.0, 0, 5_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn harz_riesengebirge_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "HarzRiesengebirge_2D12".into(),
        description: "Two population Harz and Riesengebirge model".into(),
        long_description: "Riesengebirge core and Harz colony. Ancestral N=5000. Split 8000 gen ago. \
             Riesen 15000, Harz 3000.".into(),
        populations: vec![riesengebirge(), harz()],
        citations: vec![
            Citation::new(
                "Silesian / Harz folklore",
                1600,
                "https://en.wikipedia.org/wiki/R%C3%BCbezahl",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.2e-8),
        population_configurations: vec![
            PopulationConfiguration::new(15_000.0),
            PopulationConfiguration::new(3_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 5_000.0),
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
                    mutation_rate: 2.2e-8,
                    recombination_rate: 2.4e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Silesian folklore",
                1600,
                "https://en.wikipedia.org/wiki/R%C3%BCbezahl",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Silesian folklore",
                1600,
                "https://en.wikipedia.org/wiki/R%C3%BCbezahl",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 100.0;
    Species {
        id: "RueHar".into(),
        ensembl_id: "ruebezahl_harzensis".into(),
        name: "Ruebezahl harzensis".into(),
        common_name: "Rübezahl (mountain spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 15_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Silesian / Harz folklore",
                1600,
                "https://en.wikipedia.org/wiki/R%C3%BCbezahl",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            riesengebirge_1d12(generation_time),
            harz_riesengebirge_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
