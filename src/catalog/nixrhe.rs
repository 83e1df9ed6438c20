use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "RheinNix1.0",
    assembly_accession: "GCA_GRIM_000002",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 24_000_000, &[]),
        ("2", 21_000_000, &[]),
        ("3", 19_000_000, &[]),
        ("4", 17_000_000, &[]),
        ("5", 15_000_000, &[]),
        ("river_mitogenome", 15_500, &[]),
    ],
};

const MITOGENOME: &str = "river_mitogenome";

fn rhine() -> Population {
    Population::new("Rhine", "Nixes of the Rhine")
}

fn elbe() -> Population {
    Population::new("Elbe", "Nixes of the Elbe")
}

fn rhine_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Rhine_1D12".into(),
        description: "Single population Rhine Nix model".into(),
        long_description: "Single population of water spirits in the Rhine. Modern N=45000, bottleneck \
             1500 gen ago (N=5000), ancestral 30000 gen ago (N=25000).".into(),
        populations: vec![rhine()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1816,
                "https://en.wikipedia.org/wiki/Nix",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![PopulationConfiguration::new(45_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(1_500.0, 0, 5_000.0),
            DemographicEvent::size_change(30_000.0, 0, 25_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn rhine_elbe_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "RhineElbe_2D12".into(),
        description: "Two population Rhine and Elbe Nix model".into(),
        long_description: "Rhine and Elbe river populations. Ancestral N=25000. Split 12000 gen ago. \
             Rhine 45000, Elbe 20000.".into(),
        populations: vec![rhine(), elbe()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1816,
                "https://en.wikipedia.org/wiki/Nix",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.6e-8),
        population_configurations: vec![
            PopulationConfiguration::new(45_000.0),
            PopulationConfiguration::new(20_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(12_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(12_000.0, 0, 25_000.0),
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
                "Grimm, J. / Rhenish folklore",
                1816,
                "https://en.wikipedia.org/wiki/Nixie_(folklore)",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. / Rhenish folklore",
                1816,
                "https://en.wikipedia.org/wiki/Nixie_(folklore)",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 30.0;
    Species {
        id: "NixRhe".into(),
        ensembl_id: "nixus_rhenanus".into(),
        name: "Nixus rhenanus".into(),
        common_name: "Nix (Rhine water spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 45_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. / Rhenish folklore",
                1816,
                "https://en.wikipedia.org/wiki/Nixie_(folklore)",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            rhine_1d12(generation_time),
            rhine_elbe_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
