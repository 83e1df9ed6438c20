use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Rumpelstilzchen1.0",
    assembly_accession: "GCA_GRIM_000030",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 19_000_000, &[]),
        ("2", 17_000_000, &[]),
        ("3", 15_000_000, &[]),
        ("4", 13_500_000, &[]),
        ("5", 12_000_000, &[]),
        ("mill_mitogenome", 14_500, &[]),
    ],
};

const MITOGENOME: &str = "mill_mitogenome";

fn thuringia() -> Population {
    Population::new("Thuringia", "Rumpelstiltskin's realm (Thuringia / Thüringen)")
}

fn hesse() -> Population {
    Population::new("Hesse", "Hesse (Hessen), Grimm heartland")
}

fn thuringia_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Thuringia_1D12".into(),
        description: "Single population Thuringia Rumpelstiltskin model".into(),
        long_description: "Single population in Thuringia (Grimm KHM 55, Rumpelstilzchen). Modern \
             N=48000, bottleneck 2500 gen ago (N=12000), ancestral 30000 gen ago \
             (N=28000).".into(),
        populations: vec![thuringia()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Rumpelstiltskin",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(48_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(2_500.0, 0, 12_000.0),
            DemographicEvent::size_change(30_000.0, 0, 28_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn thuringia_hesse_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ThuringiaHesse_2D12".into(),
        description: "Two population Thuringia and Hesse (Grimm fairy-tale region)".into(),
        long_description: "Thuringia and Hesse, Grimm territory. Ancestral N=28000. Split 15000 gen \
             ago. Thuringia 48000, Hesse 32000.".into(),
        populations: vec![thuringia(), hesse()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Rumpelstiltskin",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(48_000.0),
            PopulationConfiguration::new(32_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(15_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(15_000.0, 0, 28_000.0),
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
                    mutation_rate: 2.5e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Rumpelstiltskin",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Rumpelstiltskin",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 40.0;
    Species {
        id: "RumSti".into(),
        ensembl_id: "rumpelstilzchen_thuringiensis".into(),
        name: "Rumpelstilzchen thuringiensis".into(),
        common_name: "Rumpelstilzchen (Grimm KHM 55)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 48_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1812,
                "https://en.wikipedia.org/wiki/Rumpelstiltskin",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            thuringia_1d12(generation_time),
            thuringia_hesse_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
