use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "Moosweib1.0",
    assembly_accession: "GCA_GRIM_000022",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 21_500_000, &[]),
        ("2", 19_500_000, &[]),
        ("3", 17_500_000, &[]),
        ("4", 15_500_000, &[]),
        ("5", 13_500_000, &[]),
        ("forest_mitogenome", 15_800, &[]),
    ],
};

const MITOGENOME: &str = "forest_mitogenome";

fn bayrischer_wald() -> Population {
    Population::new("BayrischerWald", "Moosweiber of the Bavarian Forest (Bayrischer Wald)")
}

fn oberpfalz() -> Population {
    Population::new("Oberpfalz", "Moosweiber of the Upper Palatinate (Oberpfalz)")
}

fn bayrischer_wald_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BayrischerWald_1D12".into(),
        description: "Single population Bavarian Forest Moosweib model".into(),
        long_description: "Single population in the Bavarian Forest (Bayrischer Wald). Modern N=38000, \
             bottleneck 4000 gen ago (N=8000), ancestral 30000 gen ago (N=22000).".into(),
        populations: vec![bayrischer_wald()],
        citations: vec![
            Citation::new(
                "Bavarian Forest folklore",
                1850,
                "https://de.wikipedia.org/wiki/Moosweiblein",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(38_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(4_000.0, 0, 8_000.0),
            DemographicEvent::size_change(30_000.0, 0, 22_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bayrischer_wald_oberpfalz_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BayrischerWaldOberpfalz_2D12".into(),
        description: "Two population Bavarian Forest and Upper Palatinate model".into(),
        long_description: "Bayrischer Wald and Oberpfalz (Upper Palatinate). Ancestral N=22000. Split \
             15000 gen ago. Bavarian Forest 38000, Oberpfalz 14000.".into(),
        populations: vec![bayrischer_wald(), oberpfalz()],
        citations: vec![
            Citation::new(
                "Bavarian Forest folklore",
                1850,
                "https://de.wikipedia.org/wiki/Moosweiblein",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(38_000.0),
            PopulationConfiguration::new(14_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(15_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(15_000.0, 0, 22_000.0),
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
                "Bavarian Forest folklore",
                1850,
                "https://de.wikipedia.org/wiki/Moosweiblein",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Bavarian Forest folklore",
                1850,
                "https://de.wikipedia.org/wiki/Moosweiblein",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 28.0;
    Species {
        id: "MooBay".into(),
        ensembl_id: "moosweib_bavaricum".into(),
        name: "Moosweib bavaricum".into(),
        common_name: "Moosweib (Bavarian Forest moss woman)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 38_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Bavarian Forest folklore",
                1850,
                "https://de.wikipedia.org/wiki/Moosweiblein",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            bayrischer_wald_1d12(generation_time),
            bayrischer_wald_oberpfalz_2d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
