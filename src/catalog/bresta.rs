use crate::citations::{Citation, CiteReason};
use crate::genomes::{ChromosomeRates, Genome, GenomeData};
use crate::models::{DemographicEvent, DemographicModel, Population, PopulationConfiguration};
use crate::species::Species;

const GENOME: GenomeData = GenomeData {
    assembly_name: "BremerStadtmusikanten1.0",
    assembly_accession: "GCA_GRIM_000032",
    assembly_source: "grimm_archives",
    assembly_build_version: "1",
    chromosomes: &[
        ("1", 23_500_000, &[]),
        ("2", 21_200_000, &[]),
        ("3", 19_200_000, &[]),
        ("4", 17_200_000, &[]),
        ("5", 15_200_000, &[]),
        ("bremen_mitogenome", 16_400, &[]),
    ],
};

const MITOGENOME: &str = "bremen_mitogenome";

fn bremen() -> Population {
    Population::new("Bremen", "Town musicians of Bremen (Grimm KHM 27)")
}

fn lower_saxony() -> Population {
    Population::new("LowerSaxony", "Lower Saxony (Niedersachsen), road to Bremen")
}

fn luneburg_heath() -> Population {
    Population::new("LuneburgHeath", "Lüneburg Heath (Lüneburger Heide)")
}

fn bremen_1d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "Bremen_1D12".into(),
        description: "Single population Bremen town musicians model".into(),
        long_description: "Single population in Bremen (Grimm KHM 27, Die Bremer Stadtmusikanten). \
             Modern N=88000, expansion 3000 gen ago (N=45000), ancestral 20000 gen ago \
             (N=35000).".into(),
        populations: vec![bremen()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![PopulationConfiguration::new(88_000.0)],
        demographic_events: vec![
            DemographicEvent::size_change(3_000.0, 0, 45_000.0),
            DemographicEvent::size_change(20_000.0, 0, 35_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bremen_lower_saxony_2d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BremenLowerSaxony_2D12".into(),
        description: "Two population Bremen and Lower Saxony model".into(),
        long_description: "Bremen and Lower Saxony (Niedersachsen), the road the musicians take. \
             Ancestral N=35000. Split 10000 gen ago. Bremen 88000, Lower Saxony 52000.".into(),
        populations: vec![bremen(), lower_saxony()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(88_000.0),
            PopulationConfiguration::new(52_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(10_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(10_000.0, 0, 35_000.0),
        ],
        qc_verified: true,
        ..Default::default()
    }
}

fn bremen_lower_saxony_luneburg_3d12(generation_time: f64) -> DemographicModel {
    DemographicModel {
        id: "BremenLowerSaxonyLuneburg_3D12".into(),
        description: "Three population Bremen, Lower Saxony, Lüneburg Heath".into(),
        long_description: "Bremen, Lower Saxony, and Lüneburg Heath (Lüneburger Heide). Ancestral \
             N=35000. Splits: Lüneburg 8000 gen ago, Lower Saxony 14000 gen ago.".into(),
        populations: vec![bremen(), lower_saxony(), luneburg_heath()],
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::DemModel],
            ),
        ],
        generation_time,
        mutation_rate: Some(2.5e-8),
        population_configurations: vec![
            PopulationConfiguration::new(88_000.0),
            PopulationConfiguration::new(52_000.0),
            PopulationConfiguration::new(28_000.0),
        ],
        demographic_events: vec![
            DemographicEvent::mass_migration(8_000.0, 2, 0, 1.0),
            DemographicEvent::mass_migration(14_000.0, 1, 0, 1.0),
            DemographicEvent::size_change(14_000.0, 0, 35_000.0),
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
                    mutation_rate: 2.5e-8,
                    recombination_rate: 2.5e-8,
                    ploidy: 2,
                }
            }
        },
        vec![
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::MutRate, CiteReason::RecRate],
            ),
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::Assembly],
            ),
        ],
    );
    let generation_time = 14.0;
    Species {
        id: "BreSta".into(),
        ensembl_id: "bremer_stadtmusikanten".into(),
        name: "Bremer stadtmusikanten".into(),
        common_name: "Town Musicians of Bremen (Grimm KHM 27)".into(),
        separate_sexes: true,
        genome,
        generation_time,
        population_size: 88_000.0,
        ploidy: 2,
        citations: vec![
            Citation::new(
                "Grimm, J. & W.",
                1819,
                "https://en.wikipedia.org/wiki/Town_Musicians_of_Bremen",
                &[CiteReason::GenTime, CiteReason::PopSize],
            ),
        ],
        demographic_models: vec![
            bremen_1d12(generation_time),
            bremen_lower_saxony_2d12(generation_time),
            bremen_lower_saxony_luneburg_3d12(generation_time),
        ],
        genetic_maps: vec![],
        annotations: vec![],
        dfes: vec![],
    }
}
