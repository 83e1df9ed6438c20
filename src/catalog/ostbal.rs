use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "BalticSpirit1.0",
    assembly_accession: "GCA_GRIM_000111",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 21_000_000, &[]),
        ("2", 19_000_000, &[]),
        ("3", 17_000_000, &[]),
        ("4", 15_000_000, &[]),
        ("5", 13_000_000, &[]),
        ("baltic_mitogenome", 16_200, &[]),
    ],
};

const MITOGENOME: &str = "baltic_mitogenome";

fn kurische_nehrung() -> Population {
    Population::new("KurischeNehrung", "Spirits of the Curonian Spit (Kurische Nehrung)")
}

fn memelland() -> Population {
    Population::new("Memelland", "Spirits of the Memel region (Memelland / Klaipėda)")
}

fn samland() -> Population {
    Population::new("Samland", "Spirits of Samland (Königsberg peninsula)")
}

fn kurische_nehrung_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "KurischeNehrung_1D12".into(),
        description: "Single population Curonian Spit (Kurische Nehrung) model".into(),
        long_description: "Single population on the Curonian Spit (Kurische Nehrung), East Prussia. \
             Modern N=28000, bottleneck 1500 gen ago (N=6000), ancestral 20000 gen ago \
             (N=15000).".into(),
        populations: vec![kurische_nehrung()],
        citations: vec![
            Citation::new(
                "East Prussian / Baltic folklore",
                1800,
                "https://en.wikipedia.org/wiki/Curonian_Spit",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(28_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(1_500.0, 0, 6_000.0),
            DemographicEvent::size_change(20_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn kurische_nehrung_memelland_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "KurischeNehrungMemelland_2D12".into(),
        description: "Two population Curonian Spit and Memelland model".into(),
        long_description: "Kurische Nehrung and Memelland (Memel delta / Klaipėda). Ancestral N=15000. \
             Split 10000 gen ago. Curonian Spit 28000, Memelland 18000.".into(),
        populations: vec![kurische_nehrung(), memelland()],
        citations: vec![
            Citation::new(
                "East Prussian folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(28_000.0),
            PopulationConfiguration::new(18_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(10_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(10_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn east_prussia_baltic_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "EastPrussiaBaltic_3D12".into(),
        description: "Three population East Prussian Baltic: Nehrung, Memelland, Samland".into(),
        long_description: "Three East Prussian Baltic regions. Ancestral N=15000. Splits: Samland 12000 \
             gen ago, Memelland 18000 gen ago. Kurische Nehrung 28000, Memelland 18000, \
             Samland 22000.".into(),
        populations: vec![kurische_nehrung(), memelland(), samland()],
        citations: vec![
            Citation::new(
                "East Prussian folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(28_000.0),
            PopulationConfiguration::new(18_000.0),
            PopulationConfiguration::new(22_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(12_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(18_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(18_000.0, 0, 15_000.0),
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
                    mutation_rate: 8.2e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.6e-8,
                    recombination_rate: 2.7e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "East Prussian folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "East Prussian folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 55.0;
    Species {
        id: "OstBal".into(),
        ensembl_id: "ostpreussius_balticus".into(),
        name: "Ostpreussius balticus".into(),
        common_name: "East Prussian Baltic spirit (Kurische Nehrung / Memelland)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 28_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "East Prussian / Baltic folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            kurische_nehrung_1d12(generation_time),
            kurische_nehrung_memelland_2d12(generation_time),
            east_prussia_baltic_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
