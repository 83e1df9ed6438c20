use stdgrimmsim::samples::SampleSet;
use stdgrimmsim::wright_fisher::{WrightFisherEngine, WrightFisherParameters};
use stdgrimmsim::{ContigOptions, Engine, all_species, get_species};

#[test]
fn every_species_is_found_by_its_id() {
    let mut n = 0;
    for sp in all_species() {
        assert_eq!(get_species(&sp.id).unwrap().id, sp.id);
        n += 1;
    }
    assert_eq!(n, 32);
}

#[test]
fn species_ids_are_sorted_and_unique() {
    let ids: Vec<&str> = all_species().map(|s| s.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn every_model_is_valid() {
    for sp in all_species() {
        let mut seen = Vec::new();
        for model in &sp.demographic_models {
            model
                .validate()
                .unwrap_or_else(|e| panic!("{}/{}: {e}", sp.id, model.id));
            assert!(!seen.contains(&&model.id), "{}/{} declared twice", sp.id, model.id);
            seen.push(&model.id);
            assert!(model.generation_time > 0.0);
            assert!(model.sampling_populations().count() > 0);
        }
    }
}

#[test]
fn population_indices_are_in_range() {
    for sp in all_species() {
        for model in &sp.demographic_models {
            let n = model.num_populations();
            assert_eq!(model.population_configurations.len(), n);
            for event in &model.demographic_events {
                for i in event.population_indices() {
                    assert!(i < n, "{}/{} refers to population {i}", sp.id, model.id);
                }
            }
            for row in model.migration_matrix_or_zeros() {
                assert_eq!(row.len(), n);
            }
        }
    }
}

#[test]
fn genomes_are_consistent() {
    for sp in all_species() {
        assert!(!sp.genome.chromosomes.is_empty(), "{}", sp.id);
        assert!(sp.generation_time > 0.0 && sp.population_size > 0.0);
        for c in &sp.genome.chromosomes {
            assert!(c.length > 0);
            assert!(c.ploidy == 1 || c.ploidy == sp.ploidy, "{}:{}", sp.id, c.id);
            assert!(c.mutation_rate > 0.0 && c.recombination_rate >= 0.0);
        }
        let first = &sp.genome.chromosomes[0];
        let contig = sp
            .get_contig(&ContigOptions {
                chromosome: Some(first.id.clone()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(contig.length(), first.length as f64);
    }
}

#[test]
fn every_model_schedules_under_the_default_engine() {
    let engine = WrightFisherEngine::new(WrightFisherParameters {
        scaling_factor: Some(100.0),
        ..Default::default()
    });
    for sp in all_species() {
        let contig = sp
            .get_contig(&ContigOptions {
                length: Some(1000.0),
                ..Default::default()
            })
            .unwrap();
        for model in &sp.demographic_models {
            let samples: Vec<SampleSet> = model
                .sampling_populations()
                .map(|(i, p)| SampleSet {
                    population: i,
                    num_samples: 2,
                    ploidy: contig.ploidy,
                    time: p.sampling_time.unwrap_or(0.0),
                })
                .collect();
            let out = engine
                .simulate(model, &contig, &samples, Some(1), true)
                .unwrap_or_else(|e| panic!("{}/{}: {e:#}", sp.id, model.id));
            assert!(out.is_none());
        }
    }
}
