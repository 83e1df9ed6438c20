use crate::models::DemographicModel;

/// Log target for user-facing warnings; the CLI prints these with a
/// `WARNING:` prefix.
pub const WARNINGS_TARGET: &str = "stdgrimmsim::warnings";

/// A request for `num_samples` sample units from one population. A unit is
/// an individual of `ploidy` genomes; the legacy haploid form uses
/// `ploidy == 1` so each unit is a single genome.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    pub population: usize,
    pub num_samples: usize,
    pub ploidy: usize,
    /// Generations before present.
    pub time: f64,
}

impl SampleSet {
    pub fn num_nodes(&self) -> usize {
        self.num_samples * self.ploidy
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SampleSpecError {
    #[error("Sample specification must be in the form <population_name>:<number of samples>")]
    Malformed,
    #[error("{0} specified more than once")]
    Duplicate(String),
    #[error("Population '{name}' not in model {model} ({available})")]
    UnknownPopulation {
        name: String,
        model: String,
        available: String,
    },
    #[error("Population '{0}' cannot be sampled")]
    NotSampleable(String),
    #[error("Cannot sample from more than {0} populations")]
    TooManyPopulations(usize),
    #[error("No samples specified")]
    Empty,
}

/// Parse `Pop:count` tokens (counts of individuals with `ploidy` genomes
/// each) or the deprecated all-integer form (counts of haploid genomes,
/// assigned positionally to the sampleable populations).
pub fn parse_sample_spec(
    tokens: &[String],
    model: &DemographicModel,
    ploidy: usize,
) -> Result<Vec<SampleSet>, SampleSpecError> {
    if tokens.is_empty() {
        return Err(SampleSpecError::Empty);
    }
    if tokens.iter().all(|t| t.parse::<usize>().is_ok()) {
        return parse_legacy(tokens, model);
    }

    let mut sets: Vec<SampleSet> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for token in tokens {
        let (name, count) = token.split_once(':').ok_or(SampleSpecError::Malformed)?;
        let count: usize = count.trim().parse().map_err(|_| SampleSpecError::Malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SampleSpecError::Malformed);
        }
        if seen.contains(&name) {
            return Err(SampleSpecError::Duplicate(name.to_string()));
        }
        seen.push(name);

        let index = model
            .population_index(name)
            .ok_or_else(|| SampleSpecError::UnknownPopulation {
                name: name.to_string(),
                model: model.id.clone(),
                available: model
                    .populations
                    .iter()
                    .map(|p| p.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        let time = model.populations[index]
            .sampling_time
            .ok_or_else(|| SampleSpecError::NotSampleable(name.to_string()))?;
        if count > 0 {
            sets.push(SampleSet {
                population: index,
                num_samples: count,
                ploidy,
                time,
            });
        }
    }
    Ok(sets)
}

fn parse_legacy(tokens: &[String], model: &DemographicModel) -> Result<Vec<SampleSet>, SampleSpecError> {
    log::warn!(
        target: WARNINGS_TARGET,
        "DeprecatedFeatureWarning: Specifying the number of samples per population as \
         bare integers is deprecated and counts haploid genomes; use <population_name>:<number \
         of individuals> instead."
    );
    let pops: Vec<_> = model.sampling_populations().collect();
    if tokens.len() > pops.len() {
        return Err(SampleSpecError::TooManyPopulations(pops.len()));
    }
    let mut sets = Vec::new();
    for (token, (index, pop)) in tokens.iter().zip(pops) {
        let count: usize = token.parse().map_err(|_| SampleSpecError::Malformed)?;
        if count > 0 {
            sets.push(SampleSet {
                population: index,
                num_samples: count,
                ploidy: 1,
                time: pop.sampling_time.unwrap_or(0.0),
            });
        }
    }
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IsolationWithMigration, PiecewiseConstantSize};

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn named_counts_are_individuals() {
        let m = IsolationWithMigration(100.0, 50.0, 50.0, 10.0, 0.0, 0.0);
        let sets = parse_sample_spec(&toks("pop2:3 pop1:2"), &m, 2).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].population, 1);
        assert_eq!(sets[0].num_nodes(), 6);
        assert_eq!(sets[1].population, 0);
        assert_eq!(sets[1].num_samples, 2);
    }

    #[test]
    fn errors_are_descriptive() {
        let m = IsolationWithMigration(100.0, 50.0, 50.0, 10.0, 0.0, 0.0);
        assert_eq!(
            parse_sample_spec(&toks("pop1:2 pop1:3"), &m, 2),
            Err(SampleSpecError::Duplicate("pop1".into()))
        );
        assert_eq!(parse_sample_spec(&toks("pop1"), &m, 2), Err(SampleSpecError::Malformed));
        assert_eq!(parse_sample_spec(&toks("pop1:x"), &m, 2), Err(SampleSpecError::Malformed));
        assert_eq!(parse_sample_spec(&toks("pop1:2 3"), &m, 2), Err(SampleSpecError::Malformed));
        assert_eq!(
            parse_sample_spec(&toks("anc:2"), &m, 2),
            Err(SampleSpecError::NotSampleable("anc".into()))
        );
        let err = parse_sample_spec(&toks("nope:2"), &m, 2).unwrap_err();
        assert!(err.to_string().contains("pop1, pop2, anc"));
        assert_eq!(parse_sample_spec(&[], &m, 2), Err(SampleSpecError::Empty));
    }

    #[test]
    fn legacy_integers_map_positionally() {
        let m = IsolationWithMigration(100.0, 50.0, 50.0, 10.0, 0.0, 0.0);
        let sets = parse_sample_spec(&toks("4 0"), &m, 2).unwrap();
        assert_eq!(
            sets,
            vec![SampleSet {
                population: 0,
                num_samples: 4,
                ploidy: 1,
                time: 0.0
            }]
        );
        assert_eq!(
            parse_sample_spec(&toks("1 1 1"), &m, 2),
            Err(SampleSpecError::TooManyPopulations(2))
        );
        let single = PiecewiseConstantSize(10.0, &[]);
        assert_eq!(parse_sample_spec(&toks("5"), &single, 2).unwrap()[0].num_nodes(), 5);
    }
}
