use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Werwolf1.0",
    assembly_accession: "GCA_GRIM_000010",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 32_000_000, &[]),
        ("2", 28_000_000, &[]),
        ("3", 25_000_000, &[]),
        ("4", 22_000_000, &[]),
        ("5", 20_000_000, &[]),
        ("6", 18_000_000, &[]),
        ("7", 16_000_000, &[]),
        ("lupine_mitogenome", 16_700, &[]),
    ],
};

const MITOGENOME: &str = "lupine_mitogenome";

fn rhineland() -> Population {
    Population::new("Rhineland", "Werewolves of the Rhineland (Bedburg region)")
}

fn livonian() -> Population {
    Population::new("Livonian", "Werewolves of the Baltic/Livonian forests")
}

fn bavarian() -> Population {
    Population::new("Bavarian", "Werewolves of the Bavarian highlands")
}

fn rhineland_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Rhineland_1D12".into(),
        description: "Single population Rhineland Werewolf model".into(),
        long_description: "Single population of Rhineland werewolves (Peter Stumpp region). Modern \
             N=10000, severe bottleneck during witch trials 300 gen ago (N=500), \
             ancestral 20000 gen ago (N=8000).".into(),
        populations: vec![rhineland()],
        citations: vec![
            Citation::new(
                "German trial records / Grimm",
                1589,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![PopulationConfiguration::new(10_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(300.0, 0, 500.0),
            DemographicEvent::size_change(20_000.0, 0, 8_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn rhineland_livonian_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "RhinelandLivonian_2D12".into(),
        description: "Two population Rhineland-Livonian Werewolf model".into(),
        long_description: "Western (Rhineland) and Eastern (Livonian/Baltic) werewolf populations. \
             Ancestral N=8000. Split 15000 gen ago. Rhineland 10000, Livonian 6000. Very \
             low migration (1e-6).".into(),
        populations: vec![rhineland(), livonian()],
        citations: vec![
            Citation::new(
                "German / Livonian trial records",
                1589,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![
            PopulationConfiguration::new(10_000.0),
            PopulationConfiguration::new(6_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 1.0e-6],
            vec![1.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(15_000.0, 0.0, None),
            DemographicEvent::mass_migration(15_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(15_000.0, 0, 8_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn three_werewolf_packs_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThreeWerewolfPacks_3D12".into(),
        description: "Three population Werewolf model (Rhineland, Bavarian, Livonian)".into(),
        long_description: "Three werewolf populations across central/eastern Europe. Ancestral N=8000. \
             Livonian splits 15000 gen ago. Bavarian splits from Rhineland 8000 gen ago. \
             Rhineland 10000, Bavarian 4000, Livonian 6000. Both experienced witch-trial \
             bottlenecks 300 gen ago (N=500, 200, 400 respectively).".into(),
        populations: vec![rhineland(), bavarian(), livonian()],
        citations: vec![
            Citation::new(
                "German / Bavarian / Livonian folklore",
                1589,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![
            PopulationConfiguration::new(10_000.0),
            PopulationConfiguration::new(4_000.0),
            PopulationConfiguration::new(6_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 2.0e-6, 1.0e-6],
            vec![2.0e-6, 0.0, 0.0],
            vec![1.0e-6, 0.0, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::size_change(300.0, 0, 500.0),
            DemographicEvent::size_change(300.0, 1, 200.0),
            DemographicEvent::size_change(300.0, 2, 400.0),
            DemographicEvent::size_change(1_000.0, 0, 10_000.0),
            DemographicEvent::size_change(1_000.0, 1, 4_000.0),
            DemographicEvent::size_change(1_000.0, 2, 6_000.0),
            DemographicEvent::migration_rate_change(8_000.0, 0.0, None),
            DemographicEvent::mass_migration(8_000.0, 1, 0, 1.0),
            DemographicEvent::mass_migration(15_000.0, 2, 0, 1.0),
            DemographicEvent::size_change(15_000.0, 0, 8_000.0),
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
                    mutation_rate: 7.0e-8,
                    recombination_rate: 0.0,
                    ploidy: 1,
                }
            } else {
                ChromosomeRates {
                    mutation_rate: 2.3e-8,
                    recombination_rate: 2.4e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 20.0;
    Species {
        id: "WerWol".into(),
        ensembl_id: "werwolfus_lupinus".into(),
        name: "Werwolfus lupinus".into(),
        common_name: "Werwolf (Werewolf)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 10_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W. / German trial records",
                1812,
                "https://en.wikipedia.org/wiki/Werewolf",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            rhineland_1d12(generation_time),
            rhineland_livonian_2d12(generation_time),
            three_werewolf_packs_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
