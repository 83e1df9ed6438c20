use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Erzgebirge1.0",
    assembly_accession: "GCA_GRIM_000033",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 21_800_000, &[]),
        ("2", 19_800_000, &[]),
        ("3", 17_800_000, &[]),
        ("4", 15_800_000, &[]),
        ("5", 14_200_000, &[]),
        ("mine_mitogenome", 15_600, &[]),
    ],
};

const MITOGENOME: &str = "mine_mitogenome";

fn erzgebirge() -> Population {
    Population::new("Erzgebirge", "Ore Mountains (Erzgebirge), Saxon mining region")
}

fn vogtland() -> Population {
    Population::new("Vogtland", "Vogtland (Saxon-Bavarian border)")
}

fn dresden_region() -> Population {
    Population::new("DresdenRegion", "Dresden and upper Elbe region")
}

fn erzgebirge_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Erzgebirge_1D12".into(),
        description: "Single population Erzgebirge (Ore Mountains) model".into(),
        long_description: "Single population in the Erzgebirge (Saxony / Sachsen). Modern N=72000, \
             bottleneck 3500 gen ago (N=18000), ancestral 28000 gen ago (N=40000).".into(),
        populations: vec![erzgebirge()],
        citations: vec![
            Citation::new(
                "Saxon folklore",
                1700,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(72_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(3_500.0, 0, 18_000.0),
            DemographicEvent::size_change(28_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn erzgebirge_vogtland_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ErzgebirgeVogtland_2D12".into(),
        description: "Two population Erzgebirge and Vogtland model".into(),
        long_description: "Erzgebirge and Vogtland (Saxon–Bavarian border). Ancestral N=40000. Split \
             16000 gen ago. Erzgebirge 72000, Vogtland 38000.".into(),
        populations: vec![erzgebirge(), vogtland()],
        citations: vec![
            Citation::new(
                "Saxon folklore",
                1700,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(72_000.0),
            PopulationConfiguration::new(38_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(16_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(16_000.0, 0, 40_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn erzgebirge_vogtland_dresden_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "ErzgebirgeVogtlandDresden_3D12".into(),
        description: "Three population Erzgebirge, Vogtland, Dresden region".into(),
        long_description: "Erzgebirge, Vogtland, and Dresden/upper Elbe. Ancestral N=40000. Splits: \
             Dresden region 10000 gen ago, Vogtland 20000 gen ago.".into(),
        populations: vec![erzgebirge(), vogtland(), dresden_region()],
        citations: vec![
            Citation::new(
                "Saxon folklore",
                1700,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(72_000.0),
            PopulationConfiguration::new(38_000.0),
            PopulationConfiguration::new(45_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(10_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(20_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(20_000.0, 0, 40_000.0),
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
                    mutation_rate: 7.2e-8,
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
                "Saxon mining folklore",
                1860,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Saxon mining folklore",
                1860,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 45.0;
    Species {
        id: "SaxErz".into(),
        ensembl_id: "saxonius_erzgebirgensis".into(),
        name: "Saxonius erzgebirgensis".into(),
        common_name: "Berggeist (Ore Mountains mine spirit)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 72_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Saxon mining folklore",
                1860,
                "https://en.wikipedia.org/wiki/Ore_Mountains",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            erzgebirge_1d12(generation_time),
            erzgebirge_vogtland_2d12(generation_time),
            erzgebirge_vogtland_dresden_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
