use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Heinzel1.0",
    assembly_accession: "GCA_GRIM_000013",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 12_000_000, &[]),
        ("2", 10_000_000, &[]),
        ("3", 9_000_000, &[]),
        ("4", 8_000_000, &[]),
        ("workshop_mitogenome", 13_500, &[]),
    ],
};

const MITOGENOME: &str = "workshop_mitogenome";

fn cologne() -> Population {
    Population::new("Cologne", "Heinzelmaennchen of Cologne workshops")
}

fn aachen() -> Population {
    Population::new("Aachen", "Heinzelmaennchen of Aachen")
}

fn bremen() -> Population {
    Population::new("Bremen", "Heinzelmaennchen of Bremen")
}

fn cologne_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Cologne_1D12".into(),
        description: "Single population Cologne Heinzelmaennchen model".into(),
        long_description: "Single population of Heinzelmaennchen in Cologne. Modern N=300000, \
             catastrophic decline 200 gen ago (N=1000) when the tailor's wife spied on \
             them (Kopisch 1836), ancestral 20000 gen ago (N=100000).".into(),
        populations: vec![cologne()],
        citations: vec![
            Citation::new(
                "Kopisch, A.",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(3.0e-8),
        population_configurations: vec![PopulationConfiguration::new(300_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(200.0, 0, 1_000.0),
            DemographicEvent::size_change(20_000.0, 0, 100_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn cologne_aachen_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "CologneAachen_2D12".into(),
        description: "Two population Cologne-Aachen Heinzelmaennchen model".into(),
        long_description: "Cologne and Aachen Heinzelmaennchen. Ancestral N=100000. Split 8000 gen ago \
             along Rhine trade routes. Cologne 300000, Aachen 50000. High migration \
             (5e-5).".into(),
        populations: vec![cologne(), aachen()],
        citations: vec![
            Citation::new(
                "Kopisch / Rhineland folklore",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(3.0e-8),
        population_configurations: vec![
            PopulationConfiguration::new(300_000.0),
            PopulationConfiguration::new(50_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-5],
            vec![5.0e-5, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(8_000.0, 0.0, None),
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 100_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_rhineland_cities_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeRhinelandCities_3D12".into(),
        description: "Three population Heinzelmaennchen model (Cologne, Aachen, Bremen)".into(),
        long_description: "Three city populations of helpful elves. Ancestral N=100000. Aachen splits \
             from Cologne 8000 gen ago. Bremen colonized from Cologne 4000 gen ago. \
             Cologne 300000, Aachen 50000, Bremen 30000. High migration Cologne-Aachen \
             (5e-5), lower Cologne-Bremen (1e-5).".into(),
        populations: vec![cologne(), aachen(), bremen()],
        citations: vec![
            Citation::new(
                "Kopisch / Rhineland-Hanseatic folklore",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(3.0e-8),
        population_configurations: vec![
            PopulationConfiguration::new(300_000.0),
            PopulationConfiguration::new(50_000.0),
            PopulationConfiguration::new(30_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-5, 1.0e-5],
            vec![5.0e-5, 0.0, 0.0],
            vec![1.0e-5, 0.0, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(4_000.0, 0.0, Some((0, 2))),
            DemographicEvent::migration_rate_change(4_000.0, 0.0, Some((2, 0))),
            DemographicEvent::mass_migration(4_000.0, 2, 0, 1.0),
            DemographicEvent::migration_rate_change(8_000.0, 0.0, None),
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(8_000.0, 0, 100_000.0),
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
                    mutation_rate: 1.0e-7,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 3.0e-8,
                    recombination_rate: 3.2e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Kopisch, A.",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Kopisch, A.",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 8.0;
    Species {
        id: "HeiCol".into(),
        ensembl_id: "heinzelmaennchen_coloniensis".into(),
        name: "Heinzelmaennchen coloniensis".into(),
        common_name: "Heinzelmaennchen (Cologne elves)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 300_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Kopisch, A. / Cologne folklore",
                1836,
                "https://en.wikipedia.org/wiki/Heinzelm%C3%A4nnchen",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            cologne_1d12(generation_time),
            cologne_aachen_2d12(generation_time),
            three_rhineland_cities_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
