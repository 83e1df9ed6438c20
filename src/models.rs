use crate::citations::Citation;
use crate::error::CatalogError;
use std::fmt::Write as _;

// ── Populations ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    pub id: String,
    pub description: String,
    /// Generations before present at which samples are drawn by default.
    /// `None` marks a population that cannot be sampled.
    pub sampling_time: Option<f64>,
}

impl Population {
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            sampling_time: Some(0.0),
        }
    }

    /// A population that only exists in the past and cannot be sampled.
    pub fn ancestral(id: &str, description: &str) -> Self {
        Self {
            sampling_time: None,
            ..Self::new(id, description)
        }
    }

    pub fn allows_samples(&self) -> bool {
        self.sampling_time.is_some()
    }
}

/// Size and exponential growth rate of a population at time zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationConfiguration {
    pub initial_size: f64,
    pub growth_rate: f64,
}

impl PopulationConfiguration {
    pub fn new(initial_size: f64) -> Self {
        Self {
            initial_size,
            growth_rate: 0.0,
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// A change to the demography at `time` generations before present. The new
/// parameters hold for all times further in the past.
#[derive(Clone, Debug, PartialEq)]
pub enum DemographicEvent {
    /// `None` for `initial_size` keeps the size continuous across the event;
    /// `None` for `growth_rate` keeps the previous rate; `None` for
    /// `population` applies the change to every population.
    PopulationParametersChange {
        time: f64,
        initial_size: Option<f64>,
        growth_rate: Option<f64>,
        population: Option<usize>,
    },
    /// Backwards in time, each lineage in `source` moves to `destination`
    /// with probability `proportion`.
    MassMigration {
        time: f64,
        source: usize,
        destination: usize,
        proportion: f64,
    },
    /// Sets entry `(i, j)` of the backwards migration matrix, or every
    /// off-diagonal entry when `matrix_index` is `None`.
    MigrationRateChange {
        time: f64,
        rate: f64,
        matrix_index: Option<(usize, usize)>,
    },
}

impl DemographicEvent {
    pub fn size_change(time: f64, population: usize, initial_size: f64) -> Self {
        Self::PopulationParametersChange {
            time,
            initial_size: Some(initial_size),
            growth_rate: None,
            population: Some(population),
        }
    }

    pub fn mass_migration(time: f64, source: usize, destination: usize, proportion: f64) -> Self {
        Self::MassMigration {
            time,
            source,
            destination,
            proportion,
        }
    }

    pub fn migration_rate_change(time: f64, rate: f64, matrix_index: Option<(usize, usize)>) -> Self {
        Self::MigrationRateChange {
            time,
            rate,
            matrix_index,
        }
    }

    pub fn time(&self) -> f64 {
        match self {
            Self::PopulationParametersChange { time, .. }
            | Self::MassMigration { time, .. }
            | Self::MigrationRateChange { time, .. } => *time,
        }
    }

    /// Every population index this event refers to.
    pub fn population_indices(&self) -> Vec<usize> {
        match self {
            Self::PopulationParametersChange { population, .. } => population.iter().copied().collect(),
            Self::MassMigration {
                source, destination, ..
            } => vec![*source, *destination],
            Self::MigrationRateChange { matrix_index, .. } => {
                matrix_index.iter().flat_map(|&(i, j)| [i, j]).collect()
            }
        }
    }
}

// ── Epochs ────────────────────────────────────────────────────────────────────

/// An interval `[start_time, end_time)` during which growth rates and
/// migration rates are constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Epoch {
    pub start_time: f64,
    pub end_time: f64,
    pub start_sizes: Vec<f64>,
    pub growth_rates: Vec<f64>,
    pub migration_matrix: Vec<Vec<f64>>,
}

impl Epoch {
    pub fn size_at(&self, population: usize, time: f64) -> f64 {
        self.start_sizes[population] * (-self.growth_rates[population] * (time - self.start_time)).exp()
    }

    pub fn end_size(&self, population: usize) -> f64 {
        if self.end_time.is_finite() {
            self.size_at(population, self.end_time)
        } else {
            self.start_sizes[population]
        }
    }
}

/// A mass migration, ordered as it would be applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub time: f64,
    pub source: usize,
    pub destination: usize,
    pub proportion: f64,
}

// ── Demographic model ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct DemographicModel {
    pub id: String,
    pub description: String,
    pub long_description: String,
    pub populations: Vec<Population>,
    pub citations: Vec<Citation>,
    pub generation_time: f64,
    pub mutation_rate: Option<f64>,
    pub recombination_rate: Option<f64>,
    pub population_configurations: Vec<PopulationConfiguration>,
    /// Backwards-in-time per-generation rates; empty means no migration.
    pub migration_matrix: Vec<Vec<f64>>,
    pub demographic_events: Vec<DemographicEvent>,
    pub qc_verified: bool,
}

impl Default for DemographicModel {
    fn default() -> Self {
        Self {
            id: String::new(),
            description: String::new(),
            long_description: String::new(),
            populations: Vec::new(),
            citations: Vec::new(),
            generation_time: 1.0,
            mutation_rate: None,
            recombination_rate: None,
            population_configurations: Vec::new(),
            migration_matrix: Vec::new(),
            demographic_events: Vec::new(),
            qc_verified: false,
        }
    }
}

impl DemographicModel {
    pub fn num_populations(&self) -> usize {
        self.populations.len()
    }

    pub fn population_index(&self, id: &str) -> Option<usize> {
        self.populations.iter().position(|p| p.id == id)
    }

    /// Populations that samples may be drawn from, with their indices.
    pub fn sampling_populations(&self) -> impl Iterator<Item = (usize, &Population)> {
        self.populations.iter().enumerate().filter(|(_, p)| p.allows_samples())
    }

    pub fn migration_matrix_or_zeros(&self) -> Vec<Vec<f64>> {
        if self.migration_matrix.is_empty() {
            let n = self.num_populations();
            vec![vec![0.0; n]; n]
        } else {
            self.migration_matrix.clone()
        }
    }

    fn invalid(&self, reason: String) -> CatalogError {
        CatalogError::InvalidModel {
            model: self.id.clone(),
            reason,
        }
    }

    /// Check that every population index referenced by the configurations,
    /// migration matrix and events is in range, and that the numbers make
    /// sense.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let n = self.num_populations();
        if n == 0 {
            return Err(self.invalid("no populations".into()));
        }
        for (i, p) in self.populations.iter().enumerate() {
            if self.populations[..i].iter().any(|q| q.id == p.id) {
                return Err(self.invalid(format!("duplicate population '{}'", p.id)));
            }
        }
        if self.population_configurations.len() != n {
            return Err(self.invalid(format!(
                "{} population configurations for {} populations",
                self.population_configurations.len(),
                n
            )));
        }
        for (i, pc) in self.population_configurations.iter().enumerate() {
            if !(pc.initial_size >= 0.0 && pc.initial_size.is_finite()) {
                return Err(self.invalid(format!("population {i} has size {}", pc.initial_size)));
            }
        }
        if !self.migration_matrix.is_empty() {
            if self.migration_matrix.len() != n || self.migration_matrix.iter().any(|r| r.len() != n) {
                return Err(self.invalid(format!("migration matrix is not {n}x{n}")));
            }
            for (i, row) in self.migration_matrix.iter().enumerate() {
                if row[i] != 0.0 {
                    return Err(self.invalid("migration matrix has a non-zero diagonal".into()));
                }
                if row.iter().any(|&m| m < 0.0) {
                    return Err(self.invalid("negative migration rate".into()));
                }
            }
        }
        for event in &self.demographic_events {
            let t = event.time();
            if !(t >= 0.0 && t.is_finite()) {
                return Err(self.invalid(format!("event at invalid time {t}")));
            }
            if let Some(&bad) = event.population_indices().iter().find(|&&i| i >= n) {
                return Err(self.invalid(format!(
                    "event at time {t} refers to population {bad}, but there are only {n}"
                )));
            }
            match event {
                DemographicEvent::MassMigration {
                    source,
                    destination,
                    proportion,
                    ..
                } => {
                    if source == destination {
                        return Err(self.invalid(format!("mass migration at {t} from a population to itself")));
                    }
                    if !(0.0..=1.0).contains(proportion) {
                        return Err(self.invalid(format!("mass migration proportion {proportion}")));
                    }
                }
                DemographicEvent::MigrationRateChange {
                    rate, matrix_index, ..
                } => {
                    if *rate < 0.0 {
                        return Err(self.invalid("negative migration rate".into()));
                    }
                    if let Some((i, j)) = matrix_index {
                        if i == j {
                            return Err(self.invalid("migration rate change on the diagonal".into()));
                        }
                    }
                }
                DemographicEvent::PopulationParametersChange { initial_size, .. } => {
                    if let Some(s) = initial_size {
                        if !(*s >= 0.0 && s.is_finite()) {
                            return Err(self.invalid(format!("size change to {s} at {t}")));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Events sorted by time; ties keep their declared order.
    fn sorted_events(&self) -> Vec<&DemographicEvent> {
        let mut events: Vec<&DemographicEvent> = self.demographic_events.iter().collect();
        events.sort_by(|a, b| a.time().total_cmp(&b.time()));
        events
    }

    /// Mass migrations in the order they apply.
    pub fn pulses(&self) -> Vec<Pulse> {
        self.sorted_events()
            .into_iter()
            .filter_map(|e| match *e {
                DemographicEvent::MassMigration {
                    time,
                    source,
                    destination,
                    proportion,
                } => Some(Pulse {
                    time,
                    source,
                    destination,
                    proportion,
                }),
                _ => None,
            })
            .collect()
    }

    /// Split the history into epochs of constant growth and migration rates.
    /// Assumes the model is valid.
    pub fn epochs(&self) -> Vec<Epoch> {
        let mut sizes: Vec<f64> = self.population_configurations.iter().map(|c| c.initial_size).collect();
        let mut growth: Vec<f64> = self.population_configurations.iter().map(|c| c.growth_rate).collect();
        let mut migration = self.migration_matrix_or_zeros();
        let events = self.sorted_events();

        let mut epochs = Vec::new();
        let mut start = 0.0;
        let mut i = 0;
        while i < events.len() {
            let t = events[i].time();
            if t > start {
                epochs.push(Epoch {
                    start_time: start,
                    end_time: t,
                    start_sizes: sizes.clone(),
                    growth_rates: growth.clone(),
                    migration_matrix: migration.clone(),
                });
                sizes = sizes
                    .iter()
                    .zip(&growth)
                    .map(|(n, g)| n * (-g * (t - start)).exp())
                    .collect();
                start = t;
            }
            while i < events.len() && events[i].time() == t {
                apply_event(events[i], &mut sizes, &mut growth, &mut migration);
                i += 1;
            }
        }
        epochs.push(Epoch {
            start_time: start,
            end_time: f64::INFINITY,
            start_sizes: sizes,
            growth_rates: growth,
            migration_matrix: migration,
        });
        epochs
    }

    /// Human-readable epoch-by-epoch breakdown of the model.
    pub fn debug_summary(&self) -> String {
        let mut out = String::new();
        let epochs = self.epochs();
        let pulses = self.pulses();
        for (k, e) in epochs.iter().enumerate() {
            let _ = writeln!(out, "Epoch {k}: {} -- {} generations", e.start_time, e.end_time);
            for (i, p) in self.populations.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "    {:<20} start_size={:<12.1} end_size={:<12.1} growth_rate={}",
                    p.id,
                    e.start_sizes[i],
                    e.end_size(i),
                    e.growth_rates[i]
                );
            }
            for (i, row) in e.migration_matrix.iter().enumerate() {
                for (j, &m) in row.iter().enumerate() {
                    if m > 0.0 {
                        let _ = writeln!(
                            out,
                            "    migration {} <- {}: {m}",
                            self.populations[i].id, self.populations[j].id
                        );
                    }
                }
            }
            if e.end_time.is_finite() {
                for pulse in pulses.iter().filter(|p| p.time == e.end_time) {
                    let _ = writeln!(
                        out,
                        "  Mass migration at {}: {} -> {} (proportion {})",
                        pulse.time,
                        self.populations[pulse.source].id,
                        self.populations[pulse.destination].id,
                        pulse.proportion
                    );
                }
            }
        }
        out
    }
}

fn apply_event(
    event: &DemographicEvent,
    sizes: &mut [f64],
    growth: &mut [f64],
    migration: &mut [Vec<f64>],
) {
    match *event {
        DemographicEvent::PopulationParametersChange {
            initial_size,
            growth_rate,
            population,
            ..
        } => {
            let targets: Vec<usize> = match population {
                Some(p) => vec![p],
                None => (0..sizes.len()).collect(),
            };
            for p in targets {
                if let Some(s) = initial_size {
                    sizes[p] = s;
                }
                if let Some(g) = growth_rate {
                    growth[p] = g;
                }
            }
        }
        DemographicEvent::MigrationRateChange {
            rate, matrix_index, ..
        } => match matrix_index {
            Some((i, j)) => migration[i][j] = rate,
            None => {
                for (i, row) in migration.iter_mut().enumerate() {
                    for (j, m) in row.iter_mut().enumerate() {
                        if i != j {
                            *m = rate;
                        }
                    }
                }
            }
        },
        DemographicEvent::MassMigration { .. } => {}
    }
}

// ── Generic models ────────────────────────────────────────────────────────────

/// A single population `pop_0` of size `n0` today, changing to `size` at
/// each `(time, size)` in `changes`.
#[allow(non_snake_case)]
pub fn PiecewiseConstantSize(n0: f64, changes: &[(f64, f64)]) -> DemographicModel {
    DemographicModel {
        id: "PiecewiseConstant".into(),
        description: "Piecewise constant size".into(),
        long_description: "A single population with a piecewise constant size history.".into(),
        populations: vec![Population::new("pop_0", "Generic population")],
        population_configurations: vec![PopulationConfiguration::new(n0)],
        demographic_events: changes
            .iter()
            .map(|&(t, n)| DemographicEvent::size_change(t, 0, n))
            .collect(),
        ..Default::default()
    }
}

/// Two populations that split from an ancestral one `t` generations ago and
/// have exchanged migrants at rates `m12` and `m21` since.
#[allow(non_snake_case)]
pub fn IsolationWithMigration(na: f64, n1: f64, n2: f64, t: f64, m12: f64, m21: f64) -> DemographicModel {
    DemographicModel {
        id: "IsolationWithMigration".into(),
        description: "Generic IM model".into(),
        long_description: "A generic isolation with migration model where a single ancestral \
            population splits into two daughter populations which continue to exchange migrants."
            .into(),
        populations: vec![
            Population::new("pop1", "Population 1"),
            Population::new("pop2", "Population 2"),
            Population::ancestral("anc", "Ancestral population"),
        ],
        population_configurations: vec![
            PopulationConfiguration::new(n1),
            PopulationConfiguration::new(n2),
            PopulationConfiguration::new(na),
        ],
        migration_matrix: vec![vec![0.0, m12, 0.0], vec![m21, 0.0, 0.0], vec![0.0, 0.0, 0.0]],
        demographic_events: vec![
            DemographicEvent::mass_migration(t, 0, 2, 1.0),
            DemographicEvent::mass_migration(t, 1, 2, 1.0),
            DemographicEvent::migration_rate_change(t, 0.0, None),
        ],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pop() -> DemographicModel {
        DemographicModel {
            id: "Test_2D".into(),
            populations: vec![Population::new("A", "a"), Population::new("B", "b")],
            population_configurations: vec![
                PopulationConfiguration::new(1000.0),
                PopulationConfiguration {
                    initial_size: 500.0,
                    growth_rate: 0.01,
                },
            ],
            migration_matrix: vec![vec![0.0, 1e-4], vec![1e-4, 0.0]],
            demographic_events: vec![
                DemographicEvent::mass_migration(100.0, 1, 0, 1.0),
                DemographicEvent::migration_rate_change(100.0, 0.0, None),
                DemographicEvent::size_change(200.0, 0, 50.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn valid_model_passes() {
        two_pop().validate().unwrap();
        PiecewiseConstantSize(100.0, &[(10.0, 5.0)]).validate().unwrap();
        IsolationWithMigration(100.0, 50.0, 50.0, 20.0, 1e-3, 1e-3).validate().unwrap();
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut m = two_pop();
        m.demographic_events.push(DemographicEvent::mass_migration(5.0, 2, 0, 0.5));
        assert!(m.validate().is_err());

        let mut m = two_pop();
        m.demographic_events.push(DemographicEvent::size_change(5.0, 7, 10.0));
        assert!(m.validate().is_err());

        let mut m = two_pop();
        m.migration_matrix = vec![vec![0.0; 3]; 3];
        assert!(m.validate().is_err());

        let mut m = two_pop();
        m.population_configurations.pop();
        assert!(m.validate().is_err());
    }

    #[test]
    fn epochs_follow_events() {
        let epochs = two_pop().epochs();
        assert_eq!(epochs.len(), 3);
        assert_eq!(epochs[0].start_time, 0.0);
        assert_eq!(epochs[0].end_time, 100.0);
        assert_eq!(epochs[0].migration_matrix[0][1], 1e-4);
        // growth keeps population B continuous across the boundary
        let expected = 500.0 * (-0.01f64 * 100.0).exp();
        assert!((epochs[1].start_sizes[1] - expected).abs() < 1e-9);
        assert_eq!(epochs[1].migration_matrix[0][1], 0.0);
        assert_eq!(epochs[2].start_sizes[0], 50.0);
        assert!(epochs[2].end_time.is_infinite());
    }

    #[test]
    fn pulses_are_time_ordered() {
        let mut m = two_pop();
        m.demographic_events.insert(0, DemographicEvent::mass_migration(300.0, 0, 1, 0.1));
        let times: Vec<f64> = m.pulses().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![100.0, 300.0]);
    }

    #[test]
    fn ancestral_population_is_not_sampleable() {
        let m = IsolationWithMigration(100.0, 50.0, 50.0, 20.0, 0.0, 0.0);
        let ids: Vec<&str> = m.sampling_populations().map(|(_, p)| p.id.as_str()).collect();
        assert_eq!(ids, vec!["pop1", "pop2"]);
    }

    #[test]
    fn summary_mentions_every_population() {
        let s = two_pop().debug_summary();
        assert!(s.contains("Epoch 0"));
        assert!(s.contains("Mass migration at 100: B -> A"));
    }
}
