use proptest::prelude::*;
use stdgrimmsim::get_species;
use stdgrimmsim::samples::{SampleSpecError, parse_sample_spec};

fn harz_model() -> &'static stdgrimmsim::DemographicModel {
    get_species("ZweBerg")
        .unwrap()
        .get_demographic_model("HarzBlackForest_2D12")
        .unwrap()
}

#[test]
fn single_population_count() {
    let sp = get_species("ZweBerg").unwrap();
    let model = sp.get_demographic_model("BlackForest_1D12").unwrap();
    let sets = parse_sample_spec(&["BlackForest:2".to_string()], model, sp.ploidy).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].population, 0);
    assert_eq!(sets[0].num_samples, 2);
    assert_eq!(sets[0].num_nodes(), 4);
}

#[test]
fn unknown_population_lists_the_model() {
    let err = parse_sample_spec(&["Brocken:2".to_string()], harz_model(), 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Population 'Brocken' not in model HarzBlackForest_2D12 (BlackForest, Harz)"
    );
}

proptest! {
    #[test]
    fn named_counts_round_trip(a in 0..50_usize, b in 0..50_usize, ploidy in 1..4_usize) {
        let tokens = vec![format!("Harz:{a}"), format!("BlackForest:{b}")];
        let sets = parse_sample_spec(&tokens, harz_model(), ploidy).unwrap();
        let total: usize = sets.iter().map(|s| s.num_nodes()).sum();
        prop_assert_eq!(total, (a + b) * ploidy);
        prop_assert!(sets.iter().all(|s| s.num_samples > 0));
    }

    #[test]
    fn repeated_population_is_rejected(a in 0..50_usize, b in 0..50_usize) {
        let tokens = vec![format!("Harz:{a}"), format!("Harz:{b}")];
        prop_assert_eq!(
            parse_sample_spec(&tokens, harz_model(), 2),
            Err(SampleSpecError::Duplicate("Harz".to_string()))
        );
    }

    #[test]
    fn legacy_counts_are_haploid(counts in prop::collection::vec(1..30_usize, 1..=2)) {
        let tokens: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
        let sets = parse_sample_spec(&tokens, harz_model(), 2).unwrap();
        prop_assert_eq!(sets.len(), counts.len());
        for (i, (s, c)) in sets.iter().zip(&counts).enumerate() {
            prop_assert_eq!(s.population, i);
            prop_assert_eq!(s.num_nodes(), *c);
        }
    }

    #[test]
    fn tokens_without_a_colon_are_malformed(name in "[A-Za-z]{1,12}") {
        prop_assert_eq!(
            parse_sample_spec(&[name], harz_model(), 2),
            Err(SampleSpecError::Malformed)
        );
    }
}
