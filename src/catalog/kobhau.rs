use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Kobold1.0",
    assembly_accession: "GCA_GRIM_000008",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 15_000_000, &[]),
        ("2", 13_000_000, &[]),
        ("3", 11_000_000, &[]),
        ("4", 10_000_000, &[]),
        ("hearth_mitogenome", 14_500, &[]),
    ],
};

const MITOGENOME: &str = "hearth_mitogenome";

fn urban() -> Population {
    Population::new("Urban", "Kobolds of urban households")
}

fn rural() -> Population {
    Population::new("Rural", "Kobolds of rural farmsteads")
}

fn mine() -> Population {
    Population::new("Mine", "Kobolds of the mines (Berggeist type)")
}

fn urban_kobold_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "UrbanKobold_1D12".into(),
        description: "Single population urban Kobold model".into(),
        long_description: "Single population of urban house Kobolds. Modern N=200000, rapid expansion \
             1000 gen ago (N=50000) tied to medieval urbanization, ancestral 30000 gen \
             ago (N=80000).".into(),
        populations: vec![urban()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![PopulationConfiguration::new(200_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(1_000.0, 0, 50_000.0),
            DemographicEvent::size_change(30_000.0, 0, 80_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn urban_rural_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "UrbanRural_2D12".into(),
        description: "Two population urban and rural Kobold model".into(),
        long_description: "Urban and rural Kobold populations. Ancestral N=80000. Split 5000 gen ago \
             with urbanization. Urban 200000, Rural 60000. Ongoing migration (2e-5) as \
             Kobolds follow human settlement.".into(),
        populations: vec![urban(), rural()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![
            PopulationConfiguration::new(200_000.0),
            PopulationConfiguration::new(60_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 2.0e-5],
            vec![2.0e-5, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(5_000.0, 0.0, None),
            DemographicEvent::mass_migration(5_000.0, 0, 1, 1.0),
            DemographicEvent::size_change(5_000.0, 1, 80_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_kobold_types_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeKoboldTypes_3D12".into(),
        description: "Three population Kobold model (urban, rural, mine)".into(),
        long_description: "Three Kobold ecotypes. Ancestral rural population N=80000. Mine Kobolds \
             diverge 20000 gen ago (deep subterranean niche). Urban Kobolds split from \
             rural 5000 gen ago. Urban 200000, Rural 60000, Mine 8000. Rural-Mine \
             migration 5e-6, Urban-Rural migration 2e-5.".into(),
        populations: vec![urban(), rural(), mine()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.8e-8),
        population_configurations: vec![
            PopulationConfiguration::new(200_000.0),
            PopulationConfiguration::new(60_000.0),
            PopulationConfiguration::new(8_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 2.0e-5, 0.0],
            vec![2.0e-5, 0.0, 5.0e-6],
            vec![0.0, 5.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(5_000.0, 0.0, Some((0, 1))),
            DemographicEvent::migration_rate_change(5_000.0, 0.0, Some((1, 0))),
            DemographicEvent::mass_migration(5_000.0, 0, 1, 1.0),
            DemographicEvent::migration_rate_change(20_000.0, 0.0, None),
            DemographicEvent::mass_migration(20_000.0, 2, 1, 1.0),
            DemographicEvent::size_change(20_000.0, 1, 80_000.0),
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
                    mutation_rate: 9.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.8e-8,
                    recombination_rate: 3.0e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 15.0;
    Species {
        id: "KobHau".into(),
        ensembl_id: "koboldus_domesticus".into(),
        name: "Koboldus domesticus".into(),
        common_name: "Kobold (house spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 200_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W. / German folklore",
                1812,
                "https://en.wikipedia.org/wiki/Kobold",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            urban_kobold_1d12(generation_time),
            urban_rural_2d12(generation_time),
            three_kobold_types_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
