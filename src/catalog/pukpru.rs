use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "PukPrussicus1.0",
    assembly_accession: "GCA_GRIM_000023",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 19_500_000, &[]),
        ("2", 17_500_000, &[]),
        ("3", 15_500_000, &[]),
        ("4", 14_000_000, &[]),
        ("5", 12_500_000, &[]),
        ("house_mitogenome", 14_800, &[]),
    ],
};

const MITOGENOME: &str = "house_mitogenome";

fn east_prussia() -> Population {
    Population::new("EastPrussia", "Puk of East Prussia (Ostpreußen)")
}

fn west_prussia() -> Population {
    Population::new("WestPrussia", "Puk of West Prussia (Westpreußen)")
}

fn berlin_brandenburg() -> Population {
    Population::new("BerlinBrandenburg", "Puk of Berlin and Brandenburg")
}

fn east_prussia_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "EastPrussia_1D12".into(),
        description: "Single population East Prussia Puk model".into(),
        long_description: "Single population in East Prussia (Königsberg, Memelland, Baltic). Modern \
             N=180000 (pre-1945 range), bottleneck 2000 gen ago (N=40000), ancestral \
             25000 gen ago (N=90000).".into(),
        populations: vec![east_prussia()],
        citations: vec![
            Citation::new(
                "Prussian folklore",
                1700,
                "https://en.wikipedia.org/wiki/Puk_(mythology)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(180_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_000.0, 0, 40_000.0),
            DemographicEvent::size_change(25_000.0, 0, 90_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn east_prussia_west_prussia_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "EastPrussiaWestPrussia_2D12".into(),
        description: "Two population East and West Prussia Puk model".into(),
        long_description: "East Prussia (Ostpreußen) and West Prussia (Westpreußen / Pomerelia). \
             Ancestral N=90000. Split 12000 gen ago. East Prussia 180000, West Prussia \
             70000.".into(),
        populations: vec![east_prussia(), west_prussia()],
        citations: vec![
            Citation::new(
                "Prussian folklore",
                1700,
                "https://en.wikipedia.org/wiki/Puk_(mythology)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(180_000.0),
            PopulationConfiguration::new(70_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(12_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 90_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn east_prussia_berlin_brandenburg_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "EastPrussiaBerlinBrandenburg_2D12".into(),
        description: "Two population East Prussia and Berlin–Brandenburg model".into(),
        long_description: "East Prussia and Berlin–Brandenburg (core Prussia). Ancestral N=90000. Split \
             8000 gen ago. East Prussia 180000, Berlin–Brandenburg 120000.".into(),
        populations: vec![east_prussia(), berlin_brandenburg()],
        citations: vec![
            Citation::new(
                "Prussian folklore",
                1700,
                "https://en.wikipedia.org/wiki/Puk_(mythology)",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(180_000.0),
            PopulationConfiguration::new(120_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 90_000.0),
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
    let generation_time = 15.0;
    Species {
        id: "PukPru".into(),
        ensembl_id: "pukus_prussicus".into(),
        name: "Pukus prussicus".into(),
        common_name: "Puk (East Prussian house spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 180_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "East Prussian folklore",
                1800,
                "https://en.wikipedia.org/wiki/East_Prussia",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            east_prussia_1d12(generation_time),
            east_prussia_west_prussia_2d12(generation_time),
            east_prussia_berlin_brandenburg_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
