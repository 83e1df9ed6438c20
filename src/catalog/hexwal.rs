use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Walpurgis1.0",
    assembly_accession: "GCA_GRIM_000019",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 20_000_000, &[]),
        ("2", 18_000_000, &[]),
        ("3", 15_000_000, &[]),
        ("4", 12_000_000, &[]),
        ("5", 10_000_000, &[]),
        ("hexen_mitogenome", 16_100, &[]),
    ],
};

const MITOGENOME: &str = "hexen_mitogenome";

fn brocken() -> Population {
    Population::new("Brocken", "Witches of the Brocken summit (Harz)")
}

fn bamberg() -> Population {
    Population::new("Bamberg", "Witches of the Bamberg trials region")
}

fn brocken_sabbath_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BrockenSabbath_1D12".into(),
        description: "Single population Brocken Walpurgis Witch model".into(),
        long_description: "Single population of Brocken summit witches. Modern N=25000, witch trial \
             persecution bottleneck 300 gen ago (N=5000), recovery 800 gen ago (N=20000), \
             ancestral 3000 gen ago (N=15000).".into(),
        populations: vec![brocken()],
        citations: vec![
            Citation::new(
                "Goethe / German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![PopulationConfiguration::new(25_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(300.0, 0, 5_000.0),
            DemographicEvent::size_change(800.0, 0, 20_000.0),
            DemographicEvent::size_change(3_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn brocken_bamberg_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BrockenBamberg_2D12".into(),
        description: "Two population Brocken-Bamberg Walpurgis Witch model".into(),
        long_description: "Brocken and Bamberg witch populations. Ancestral N=15000. Split 2000 gen \
             ago. Brocken 25000, Bamberg 15000. Symmetric migration 5e-6.".into(),
        populations: vec![brocken(), bamberg()],
        citations: vec![
            Citation::new(
                "German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![
            PopulationConfiguration::new(25_000.0),
            PopulationConfiguration::new(15_000.0),
        ],
        migration_matrix: vec![
            vec![0.0, 5.0e-6],
            vec![5.0e-6, 0.0],
        ],
        demographic_events: vec![
            DemographicEvent::migration_rate_change(2_000.0, 0.0, None),
            DemographicEvent::mass_migration(2_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(2_000.0, 0, 15_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn witch_trial_purge_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "WitchTrialPurge_1D12".into(),
        description: "Single population Walpurgis Witch model with severe witch-trial bottleneck".into(),
        long_description: "Single witch population with a severe bottleneck during the height of witch \
             trials (~1690). Modern N=25000, height of trials 100 gen ago (N=1000), 300 \
             gen ago (N=8000), 800 gen ago (N=20000), ancestral 3000 gen ago (N=15000).".into(),
        populations: vec![brocken()],
        citations: vec![
            Citation::new(
                "German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.3e-8),
        population_configurations: vec![PopulationConfiguration::new(25_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(100.0, 0, 1_000.0),
            DemographicEvent::size_change(300.0, 0, 8_000.0),
            DemographicEvent::size_change(800.0, 0, 20_000.0),
            DemographicEvent::size_change(3_000.0, 0, 15_000.0),
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
                    mutation_rate: 2.3e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 30.0;
    Species {
        id: "HexWal".into(),
        ensembl_id: "hexara_walpurgis".into(),
        name: "Hexara walpurgis".into(),
        common_name: "Walpurgis Witch (Brocken)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 25_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Goethe / German witch trial records",
                1690,
                "https://en.wikipedia.org/wiki/Walpurgis_Night",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            brocken_sabbath_1d12(generation_time),
            brocken_bamberg_2d12(generation_time),
            witch_trial_purge_1d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
