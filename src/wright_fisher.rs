use crate::citations::Citation;
use crate::engines::{Engine, tree_sequence_citation};
use crate::genomes::{Contig, RateMap};
use crate::models::{DemographicModel, Epoch, Pulse};
use crate::provenance::ProvenanceRecord;
use crate::samples::SampleSet;
use anyhow::{Context, Result, bail};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::Poisson;
use std::collections::{BTreeMap, HashSet};

// ── Parameters ────────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct WrightFisherParameters {
    /// Population sizes and times are divided by this factor and rates
    /// multiplied by it. Node times in the output stay in generations.
    /// `None` picks the factor from the model, see [`auto_scaling_factor`].
    pub scaling_factor: Option<f64>,
    /// Burn-in length as a multiple of the total ancestral population size.
    pub burn_in: f64,
    /// Simplify every this many generations (0 = only at finalize).
    pub simplify_interval: usize,
    pub show_progress: bool,
}

impl Default for WrightFisherParameters {
    fn default() -> Self {
        Self {
            scaling_factor: None,
            burn_in: 10.0,
            simplify_interval: 100,
            show_progress: false,
        }
    }
}

// ── Population metadata ───────────────────────────────────────────────────────

#[derive(
    serde::Serialize, serde::Deserialize, tskit::metadata::tskit_derive::PopulationMetadata,
)]
#[serializer("serde_json")]
pub struct PopulationMetadata {
    pub name: String,
    pub description: String,
}

/// Largest scaled population size the automatic scaling factor allows.
pub const AUTO_MAX_SIZE: f64 = 200.0;

/// Smallest factor (at least 1) that keeps every population of `model`, at
/// every epoch boundary, at or below [`AUTO_MAX_SIZE`] individuals.
pub fn auto_scaling_factor(model: &DemographicModel) -> f64 {
    let largest = model
        .epochs()
        .iter()
        .flat_map(|e| (0..e.start_sizes.len()).flat_map(move |p| [e.start_sizes[p], e.end_size(p)]))
        .filter(|n| n.is_finite())
        .fold(0.0f64, f64::max);
    (largest / AUTO_MAX_SIZE).max(1.0)
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The demography discretized into scaled generations. Generation `tau`
/// counts backwards from the present; `active[tau][p]` says whether
/// population `p` holds individuals born at `tau`.
pub struct Schedule {
    pub scaling_factor: f64,
    pub start_time: i64,
    epochs: Vec<Epoch>,
    pulses: Vec<(i64, Pulse)>,
    active: Vec<Vec<bool>>,
}

impl Schedule {
    /// Populations are activated backwards in time: those sampled, then
    /// destinations of mass migrations out of active populations, then
    /// anything an active population receives migrants from. A full mass
    /// migration retires its source. Nothing else deactivates a population,
    /// so every lineage always has somewhere to come from.
    pub fn new(model: &DemographicModel, samples: &[SampleSet], params: &WrightFisherParameters) -> Result<Self> {
        let q = params
            .scaling_factor
            .unwrap_or_else(|| auto_scaling_factor(model));
        if !(q >= 1.0 && q.is_finite()) {
            bail!("scaling factor must be at least 1, got {q}");
        }
        if !(params.burn_in >= 0.0 && params.burn_in.is_finite()) {
            bail!("burn-in must be non-negative, got {}", params.burn_in);
        }
        let n = model.num_populations();
        let epochs = model.epochs();
        let pulses: Vec<(i64, Pulse)> = model
            .pulses()
            .into_iter()
            .map(|p| (((p.time / q).round() as i64).max(1), p))
            .collect();
        let sample_times: Vec<(i64, usize)> = samples
            .iter()
            .map(|s| ((s.time / q).round() as i64, s.population))
            .collect();

        let last_event = epochs.last().map_or(0.0, |e| e.start_time);
        let horizon = pulses
            .iter()
            .map(|&(t, _)| t)
            .chain(sample_times.iter().map(|&(t, _)| t))
            .chain(std::iter::once((last_event / q).ceil() as i64))
            .max()
            .unwrap_or(0)
            + 1;

        let mut schedule = Self {
            scaling_factor: q,
            start_time: horizon,
            epochs,
            pulses,
            active: Vec::with_capacity(horizon as usize + 1),
        };
        let mut current = vec![false; n];
        for tau in 0..=horizon {
            for (t, pulse) in &schedule.pulses {
                if *t == tau && current[pulse.source] && pulse.proportion > 0.0 {
                    current[pulse.destination] = true;
                    if pulse.proportion >= 1.0 {
                        current[pulse.source] = false;
                    }
                }
            }
            for &(t, p) in &sample_times {
                if t == tau {
                    current[p] = true;
                }
            }
            let matrix = &schedule.epoch_at(tau).migration_matrix;
            loop {
                let mut changed = false;
                for i in 0..n {
                    if !current[i] {
                        continue;
                    }
                    for j in 0..n {
                        if matrix[i][j] > 0.0 && !current[j] {
                            current[j] = true;
                            changed = true;
                        }
                    }
                }
                if !changed {
                    break;
                }
            }
            schedule.active.push(current.clone());
        }

        let ancestral: usize = (0..n).map(|p| schedule.size(p, horizon)).sum();
        if ancestral == 0 {
            bail!("no population is ancestral to the samples");
        }
        schedule.start_time = horizon + (params.burn_in * ancestral as f64).ceil() as i64;
        Ok(schedule)
    }

    fn epoch_at(&self, tau: i64) -> &Epoch {
        let t = tau as f64 * self.scaling_factor;
        self.epochs
            .iter()
            .rev()
            .find(|e| e.start_time <= t)
            .unwrap_or(&self.epochs[0])
    }

    pub fn is_active(&self, population: usize, tau: i64) -> bool {
        let i = (tau.max(0) as usize).min(self.active.len() - 1);
        self.active[i][population]
    }

    /// Scaled number of individuals of `population` born at `tau`.
    pub fn size(&self, population: usize, tau: i64) -> usize {
        if !self.is_active(population, tau) {
            return 0;
        }
        let t = tau as f64 * self.scaling_factor;
        let n = self.epoch_at(tau).size_at(population, t) / self.scaling_factor;
        (n.round() as usize).max(1)
    }

    fn pulses_at(&self, tau: i64) -> impl Iterator<Item = &Pulse> {
        self.pulses.iter().filter(move |(t, _)| *t == tau).map(|(_, p)| p)
    }
}

// ── Offspring candidate ───────────────────────────────────────────────────────

/// How one genome copy of an offspring is assembled from a parent.
#[derive(Clone, Debug)]
pub struct GenomeCandidate {
    pub parent_pop: usize,
    /// Index of the parent individual within `parent_pop`.
    pub parent: usize,
    /// Parent genome copies to alternate between at each breakpoint.
    pub copies: (usize, usize),
    pub breakpoints: Vec<f64>,
}

#[derive(Clone, Debug)]
pub struct OffspringCandidate {
    pub birth_pop: usize,
    pub genomes: Vec<GenomeCandidate>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Move the edges added since `bookmark` ahead of the older ones. Call after
/// sorting from the bookmark so the table is in simplify order.
pub fn rotate_edges(bookmark: &tskit::types::Bookmark, tables: &mut tskit::TableCollection) {
    let num_edges = tables.edges().num_rows().as_usize();
    let mid = bookmark.edges().as_usize();
    if mid == 0 || mid == num_edges {
        return;
    }
    unsafe {
        let p = (*tables.as_mut_ptr()).edges;
        std::slice::from_raw_parts_mut(p.left, num_edges).rotate_left(mid);
        std::slice::from_raw_parts_mut(p.right, num_edges).rotate_left(mid);
        std::slice::from_raw_parts_mut(p.parent, num_edges).rotate_left(mid);
        std::slice::from_raw_parts_mut(p.child, num_edges).rotate_left(mid);
    }
}

/// Drop infinite-sites neutral mutations onto the edges of simplified
/// tables: Poisson(rate × span × branch length) per edge at integer
/// positions, at most one mutation per site. Returns the number of sites.
pub fn add_neutral_mutations(
    tables: &mut tskit::TableCollection,
    rate: f64,
    rng: &mut SmallRng,
) -> Result<usize> {
    if rate <= 0.0 {
        return Ok(0);
    }
    let mut branches = Vec::with_capacity(tables.edges().num_rows().as_usize());
    for row in tables.edges().iter() {
        let child_time = tables
            .nodes()
            .time(row.child)
            .context("edge refers to a missing child node")?;
        let parent_time = tables
            .nodes()
            .time(row.parent)
            .context("edge refers to a missing parent node")?;
        branches.push((
            f64::from(row.left),
            f64::from(row.right),
            row.child,
            f64::from(child_time),
            f64::from(parent_time),
        ));
    }

    let mut sites: BTreeMap<u64, (tskit::NodeId, f64)> = BTreeMap::new();
    for (left, right, child, child_time, parent_time) in branches {
        let branch_length = parent_time - child_time;
        let mean = rate * (right - left) * branch_length;
        if mean <= 0.0 {
            continue;
        }
        let count = Poisson::new(mean)?.sample(rng) as usize;
        if count == 0 {
            continue;
        }
        let pos_dist = Uniform::new(left, right)?;
        let time_dist = Uniform::new(child_time, parent_time)?;
        for _ in 0..count {
            let pos = pos_dist.sample(rng).floor() as u64;
            let time = time_dist.sample(rng);
            sites.entry(pos).or_insert((child, time));
        }
    }

    for (&pos, &(node, time)) in &sites {
        let site = tables.add_site(pos as f64, Some(b"0".as_slice()))?;
        tables.add_mutation(site, node, tskit::MutationId::NULL, time, Some(b"1".as_slice()))?;
    }
    Ok(sites.len())
}

// ── Simulator ─────────────────────────────────────────────────────────────────
pub struct WrightFisher {
    pub params: WrightFisherParameters,
    pub schedule: Schedule,
    pub tables: tskit::TableCollection,
    pub rng: SmallRng,
    pub birth_time: i64,
    pub bookmark: tskit::types::Bookmark,
    pub ploidy: usize,
    pub population_ids: Vec<tskit::PopulationId>,
    /// `pop_parents[p]` holds the genomes of the living generation in
    /// population `p`, `ploidy` consecutive nodes per individual.
    pub pop_parents: Vec<Vec<tskit::NodeId>>,
    pub samples: Vec<SampleSet>,
    /// Sample nodes already drawn, per entry of `samples`.
    pub remembered: Vec<Vec<tskit::NodeId>>,

    sequence_length: f64,
    recombination_map: RateMap,
    rec_poisson: Option<Poisson<f64>>,
}

impl WrightFisher {
    // ── Construction ──────────────────────────────────────────────────────────

    pub fn initialize(
        params: WrightFisherParameters,
        model: &DemographicModel,
        contig: &Contig,
        samples: &[SampleSet],
        random_seed: u64,
    ) -> Result<Self> {
        let schedule = Schedule::new(model, samples, &params)?;
        let q = schedule.scaling_factor;
        let sequence_length = contig.length();
        let mut tables = tskit::TableCollection::new(sequence_length)?;

        let mut population_ids = Vec::with_capacity(model.num_populations());
        for pop in &model.populations {
            let meta = PopulationMetadata {
                name: pop.id.clone(),
                description: pop.description.clone(),
            };
            population_ids.push(tables.add_population_with_metadata(&meta)?);
        }

        let ploidy = contig.ploidy;
        let start = schedule.start_time;
        let parental_time = start as f64 * q;
        let mut pop_parents = Vec::with_capacity(population_ids.len());
        for (p, &pop_id) in population_ids.iter().enumerate() {
            let k = schedule.size(p, start) * ploidy;
            let parents = (0..k)
                .map(|_| tables.add_node(0, parental_time, pop_id, -1))
                .collect::<Result<Vec<_>, _>>()?;
            pop_parents.push(parents);
        }

        let recombination_map = contig.recombination_map.scaled(q);
        let mass = recombination_map.total_mass();
        let rec_poisson = if ploidy > 1 && mass > 0.0 {
            Some(Poisson::new(mass)?)
        } else {
            None
        };

        Ok(Self {
            params,
            schedule,
            tables,
            rng: SmallRng::seed_from_u64(random_seed),
            birth_time: start - 1,
            bookmark: tskit::types::Bookmark::default(),
            ploidy,
            population_ids,
            pop_parents,
            samples: samples.to_vec(),
            remembered: vec![Vec::new(); samples.len()],
            sequence_length,
            recombination_map,
            rec_poisson,
        })
    }

    // ── Core reproductive step ────────────────────────────────────────────────

    /// Population an offspring genome in `pop` born at `tau` inherits from.
    /// Mass migrations at the parents' generation go first, chained in the
    /// order they are declared; otherwise the migration matrix applies.
    fn parent_population(&mut self, pop: usize, tau: i64) -> usize {
        let parent_time = tau + 1;
        let mut q = pop;
        let mut moved = false;
        let draws: Vec<f64> = self
            .schedule
            .pulses_at(parent_time)
            .map(|_| self.rng.random::<f64>())
            .collect();
        for (pulse, u) in self.schedule.pulses_at(parent_time).zip(draws) {
            if pulse.source == q && u < pulse.proportion {
                q = pulse.destination;
                moved = true;
            }
        }
        if moved {
            return q;
        }

        let scale = self.schedule.scaling_factor;
        let row = &self.schedule.epoch_at(parent_time).migration_matrix[pop];
        let total: f64 = row.iter().sum::<f64>() * scale;
        if total <= 0.0 {
            return pop;
        }
        let u = self.rng.random::<f64>() * total.max(1.0);
        let mut acc = 0.0;
        for (j, &m) in row.iter().enumerate() {
            acc += m * scale;
            if u < acc {
                return j;
            }
        }
        pop
    }

    pub fn sample_candidate(&mut self, pop: usize, tau: i64) -> Result<OffspringCandidate> {
        let ploidy = self.ploidy;
        let mut genomes = Vec::with_capacity(ploidy);
        for _ in 0..ploidy {
            let parent_pop = self.parent_population(pop, tau);
            let num_parents = self.pop_parents[parent_pop].len() / ploidy;
            if num_parents == 0 {
                bail!(
                    "population {parent_pop} has no individuals at generation {} to parent offspring in population {pop}",
                    tau + 1
                );
            }
            let parent = self.rng.random_range(0..num_parents);

            let (copies, breakpoints) = if ploidy == 1 {
                ((0, 0), vec![])
            } else {
                let a = self.rng.random_range(0..ploidy);
                let b = (a + self.rng.random_range(1..ploidy)) % ploidy;
                let num_bp = match &self.rec_poisson {
                    Some(dist) => dist.sample(&mut self.rng) as usize,
                    None => 0,
                };
                let bps = self.recombination_map.draw_breakpoints(num_bp, &mut self.rng)?;
                ((a, b), bps)
            };
            genomes.push(GenomeCandidate {
                parent_pop,
                parent,
                copies,
                breakpoints,
            });
        }
        Ok(OffspringCandidate {
            birth_pop: pop,
            genomes,
        })
    }

    pub fn commit_to_tables(
        &mut self,
        birth_time: f64,
        candidate: OffspringCandidate,
    ) -> Result<Vec<tskit::NodeId>> {
        let seq_len = self.sequence_length;
        let pop_id = self.population_ids[candidate.birth_pop];
        let mut nodes = Vec::with_capacity(candidate.genomes.len());

        for g in candidate.genomes {
            let base = g.parent * self.ploidy;
            let parents = &self.pop_parents[g.parent_pop];
            let mut cur_node = parents[base + g.copies.0];
            let mut other_node = parents[base + g.copies.1];

            let child = self.tables.add_node(0, birth_time, pop_id, -1)?;
            let mut start = 0.0f64;
            for &x in &g.breakpoints {
                self.tables.add_edge(start, x, cur_node, child)?;
                std::mem::swap(&mut cur_node, &mut other_node);
                start = x;
            }
            self.tables.add_edge(start, seq_len, cur_node, child)?;
            nodes.push(child);
        }
        Ok(nodes)
    }

    // ── Sampling ──────────────────────────────────────────────────────────────

    /// Draw every sample set due at `tau` from the generation just born.
    /// Sets drawn from the same population never share individuals.
    fn remember_samples(&mut self, tau: i64) -> Result<()> {
        let q = self.schedule.scaling_factor;
        let mut taken: HashSet<tskit::NodeId> = HashSet::new();
        for i in 0..self.samples.len() {
            let s = self.samples[i].clone();
            if (s.time / q).round() as i64 != tau {
                continue;
            }
            let pool: Vec<&[tskit::NodeId]> = self.pop_parents[s.population]
                .chunks(s.ploidy)
                .filter(|unit| !unit.iter().any(|n| taken.contains(n)))
                .collect();
            if s.num_samples > pool.len() {
                bail!(
                    "cannot draw {} samples from population {} at time {}: only {} available",
                    s.num_samples,
                    s.population,
                    s.time,
                    pool.len()
                );
            }
            let chosen = rand::seq::index::sample(&mut self.rng, pool.len(), s.num_samples);
            let mut nodes = Vec::with_capacity(s.num_nodes());
            for idx in chosen.iter() {
                nodes.extend_from_slice(pool[idx]);
            }
            taken.extend(nodes.iter().copied());
            self.remembered[i] = nodes;
        }
        Ok(())
    }

    // ── Generation loop ───────────────────────────────────────────────────────

    fn simplify(&mut self) -> Result<()> {
        self.tables
            .sort(&self.bookmark, tskit::TableSortOptions::default())?;
        rotate_edges(&self.bookmark, &mut self.tables);

        let mut seen = HashSet::new();
        let keep: Vec<tskit::NodeId> = self
            .remembered
            .iter()
            .flatten()
            .chain(self.pop_parents.iter().flatten())
            .copied()
            .filter(|n| seen.insert(*n))
            .collect();

        if let Some(idmap) = self.tables.simplify(
            &keep,
            tskit::SimplificationOptions::default(),
            true,
        )? {
            for nodes in self.pop_parents.iter_mut().chain(self.remembered.iter_mut()) {
                for node in nodes.iter_mut() {
                    *node = idmap[usize::try_from(*node)?];
                }
            }
        }

        self.bookmark.set_edges(self.tables.edges().num_rows());
        Ok(())
    }

    pub fn step(&mut self) -> Result<()> {
        let tau = self.birth_time;
        let birth_time = tau as f64 * self.schedule.scaling_factor;
        let num_pops = self.population_ids.len();

        // ── Phase 1: choose parents for the whole generation ──────────────────
        let mut candidates = Vec::new();
        for p in 0..num_pops {
            let n = self.schedule.size(p, tau);
            for _ in 0..n {
                candidates.push(self.sample_candidate(p, tau)?);
            }
        }

        // ── Phase 2: commit offspring to tables ───────────────────────────────
        let mut new_pop_parents: Vec<Vec<tskit::NodeId>> = vec![Vec::new(); num_pops];
        for c in candidates {
            let p = c.birth_pop;
            let nodes = self.commit_to_tables(birth_time, c)?;
            new_pop_parents[p].extend(nodes);
        }
        self.pop_parents = new_pop_parents;

        // ── Phase 3: samples due now ──────────────────────────────────────────
        self.remember_samples(tau)?;

        // ── Phase 4: periodic simplification ─────────────────────────────────
        let si = self.params.simplify_interval;
        if si > 0 && tau > 0 && tau % si as i64 == 0 {
            self.simplify()?;
        }

        self.birth_time -= 1;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        let generations = (self.birth_time + 1).max(0) as u64;
        let bar = if self.params.show_progress {
            ProgressBar::new(generations)
        } else {
            ProgressBar::hidden()
        };
        while self.birth_time >= 0 {
            bar.inc(1);
            self.step()?;
        }
        bar.finish();
        Ok(())
    }

    // ── Finalization ──────────────────────────────────────────────────────────

    /// Simplify down to the samples (in sample-set order), overlay neutral
    /// mutations and record provenance.
    pub fn finalize(
        mut self,
        mutation_rate: f64,
        provenance: &ProvenanceRecord,
    ) -> Result<tskit::TreeSequence> {
        let samples: Vec<tskit::NodeId> = self.remembered.iter().flatten().copied().collect();
        self.tables
            .sort(&self.bookmark, tskit::TableSortOptions::default())?;
        rotate_edges(&self.bookmark, &mut self.tables);
        self.tables.simplify(
            &samples,
            tskit::SimplificationOptions::KEEP_INPUT_ROOTS,
            false,
        )?;

        let num_sites = add_neutral_mutations(&mut self.tables, mutation_rate, &mut self.rng)?;
        log::debug!("Added {num_sites} segregating sites");

        self.tables.add_provenance(&provenance.to_json()?)?;
        self.tables.build_index()?;
        let tree_sequence = self
            .tables
            .tree_sequence(tskit::TreeSequenceFlags::default())?;
        Ok(tree_sequence)
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Forward-time Wright-Fisher simulation with tree-sequence recording.
pub struct WrightFisherEngine {
    pub params: WrightFisherParameters,
}

impl WrightFisherEngine {
    pub fn new(params: WrightFisherParameters) -> Self {
        Self { params }
    }
}

impl Engine for WrightFisherEngine {
    fn id(&self) -> &str {
        "wright_fisher"
    }

    fn description(&self) -> &str {
        "Discrete-generation forward Wright-Fisher simulator with tree-sequence recording"
    }

    fn citations(&self) -> Vec<Citation> {
        vec![tree_sequence_citation()]
    }

    fn simulate(
        &self,
        model: &DemographicModel,
        contig: &Contig,
        samples: &[SampleSet],
        seed: Option<u64>,
        dry_run: bool,
    ) -> Result<Option<tskit::TreeSequence>> {
        model.validate()?;
        if samples.iter().all(|s| s.num_samples == 0) {
            bail!("no samples requested");
        }
        if let Some(s) = samples.iter().find(|s| s.ploidy != 1 && s.ploidy != contig.ploidy) {
            bail!(
                "sample ploidy {} does not match contig ploidy {}",
                s.ploidy,
                contig.ploidy
            );
        }
        if contig.length() < 1.0 {
            bail!("contig is empty");
        }

        let random_seed = seed.unwrap_or_else(|| rand::rng().random_range(1..u64::MAX));
        let mut wf = WrightFisher::initialize(self.params.clone(), model, contig, samples, random_seed)
            .with_context(|| format!("setting up model {}", model.id))?;
        log::info!(
            "Wright-Fisher: {} generations at scaling factor {}",
            wf.schedule.start_time,
            wf.schedule.scaling_factor
        );
        log::debug!("Demography of {}:\n{}", model.id, model.debug_summary());
        if dry_run {
            return Ok(None);
        }

        let scaling_factor = wf.schedule.scaling_factor;
        wf.run()?;
        let provenance = ProvenanceRecord::new(
            "stdgrimmsim.wright_fisher",
            serde_json::json!({
                "command": "simulate",
                "model": model.id,
                "contig": contig.origin,
                "random_seed": random_seed,
                "scaling_factor": scaling_factor,
                "burn_in": self.params.burn_in,
            }),
        );
        let ts = wf.finalize(contig.mutation_rate, &provenance)?;
        Ok(Some(ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DemographicEvent, IsolationWithMigration, PiecewiseConstantSize, Population,
        PopulationConfiguration,
    };

    fn params() -> WrightFisherParameters {
        WrightFisherParameters {
            scaling_factor: Some(1.0),
            burn_in: 2.0,
            simplify_interval: 10,
            show_progress: false,
        }
    }

    fn samples(population: usize, n: usize, ploidy: usize) -> Vec<SampleSet> {
        vec![SampleSet {
            population,
            num_samples: n,
            ploidy,
            time: 0.0,
        }]
    }

    #[test]
    fn schedule_activates_split_ancestors() {
        let m = IsolationWithMigration(20.0, 10.0, 10.0, 15.0, 0.0, 0.0);
        let s = Schedule::new(&m, &samples(0, 2, 2), &params()).unwrap();
        assert!(s.is_active(0, 0));
        assert!(!s.is_active(1, 0));
        assert!(!s.is_active(2, 14));
        assert!(s.is_active(2, 15));
        assert!(!s.is_active(0, 15));
        assert_eq!(s.size(2, 20), 20);
        // horizon 16 plus two ancestral sizes of burn-in
        assert_eq!(s.start_time, 16 + 40);
    }

    #[test]
    fn schedule_follows_migration() {
        let m = IsolationWithMigration(20.0, 10.0, 10.0, 15.0, 0.01, 0.0);
        let s = Schedule::new(&m, &samples(0, 2, 2), &params()).unwrap();
        assert!(s.is_active(1, 0));
    }

    #[test]
    fn scaling_shrinks_sizes_and_times() {
        let m = PiecewiseConstantSize(1000.0, &[(500.0, 2000.0)]);
        let mut p = params();
        p.scaling_factor = Some(100.0);
        let s = Schedule::new(&m, &samples(0, 1, 2), &p).unwrap();
        assert_eq!(s.size(0, 0), 10);
        assert_eq!(s.size(0, 5), 20);
        assert_eq!(s.start_time, 6 + 40);
        p.scaling_factor = Some(0.5);
        assert!(Schedule::new(&m, &samples(0, 1, 2), &p).is_err());
    }

    #[test]
    fn automatic_scaling_bounds_population_sizes() {
        let m = PiecewiseConstantSize(80_000.0, &[(2_000.0, 8_000.0), (50_000.0, 40_000.0)]);
        assert_eq!(auto_scaling_factor(&m), 400.0);
        let p = WrightFisherParameters::default();
        let s = Schedule::new(&m, &samples(0, 5, 2), &p).unwrap();
        assert_eq!(s.scaling_factor, 400.0);
        assert_eq!(s.size(0, 0), 200);
        assert_eq!(s.size(0, 10), 20);
        assert_eq!(s.size(0, 200), 100);
        // 50000 / 400 = 125 scaled generations of history, then 10 × 100
        assert_eq!(s.start_time, 126 + 1000);

        let small = PiecewiseConstantSize(50.0, &[]);
        assert_eq!(auto_scaling_factor(&small), 1.0);
    }

    #[test]
    fn diploid_run_yields_requested_samples() {
        let m = PiecewiseConstantSize(20.0, &[(10.0, 30.0)]);
        let contig = Contig::new("test".into(), 1000.0, 1e-3, 1e-3, 2);
        let engine = WrightFisherEngine::new(params());
        let ts = engine
            .simulate(&m, &contig, &samples(0, 5, 2), Some(42), false)
            .unwrap()
            .unwrap();
        assert_eq!(ts.num_samples().as_usize(), 10);
        let tables = ts.dump_tables().unwrap();
        assert_eq!(tables.populations().num_rows().as_usize(), 1);
        assert!(tables.sites().num_rows().as_usize() > 0);
        assert_eq!(
            tables.sites().num_rows().as_usize(),
            tables.mutations().num_rows().as_usize()
        );
        assert_eq!(tables.provenances().num_rows().as_usize(), 1);
    }

    #[test]
    fn two_population_split_coalesces_into_ancestor() {
        let m = DemographicModel {
            id: "Split".into(),
            populations: vec![Population::new("A", "a"), Population::new("B", "b")],
            population_configurations: vec![
                PopulationConfiguration::new(15.0),
                PopulationConfiguration::new(10.0),
            ],
            demographic_events: vec![
                DemographicEvent::mass_migration(8.0, 1, 0, 1.0),
                DemographicEvent::size_change(8.0, 0, 20.0),
            ],
            ..Default::default()
        };
        let contig = Contig::new("test".into(), 500.0, 0.0, 1e-3, 2);
        let sets = vec![
            SampleSet {
                population: 0,
                num_samples: 2,
                ploidy: 2,
                time: 0.0,
            },
            SampleSet {
                population: 1,
                num_samples: 3,
                ploidy: 2,
                time: 0.0,
            },
        ];
        let ts = WrightFisherEngine::new(params())
            .simulate(&m, &contig, &sets, Some(3), false)
            .unwrap()
            .unwrap();
        assert_eq!(ts.num_samples().as_usize(), 10);
        let tables = ts.dump_tables().unwrap();
        assert_eq!(tables.populations().num_rows().as_usize(), 2);
        assert_eq!(tables.sites().num_rows().as_usize(), 0);
    }

    #[test]
    fn haploid_contig_and_ancient_samples() {
        let m = PiecewiseConstantSize(10.0, &[]);
        let contig = Contig::new("mt".into(), 200.0, 0.0, 0.0, 1);
        let sets = vec![
            SampleSet {
                population: 0,
                num_samples: 3,
                ploidy: 1,
                time: 0.0,
            },
            SampleSet {
                population: 0,
                num_samples: 2,
                ploidy: 1,
                time: 4.0,
            },
        ];
        let ts = WrightFisherEngine::new(params())
            .simulate(&m, &contig, &sets, Some(9), false)
            .unwrap()
            .unwrap();
        assert_eq!(ts.num_samples().as_usize(), 5);
    }

    #[test]
    fn too_many_samples_is_an_error() {
        let m = PiecewiseConstantSize(3.0, &[]);
        let contig = Contig::new("test".into(), 100.0, 0.0, 0.0, 2);
        let err = WrightFisherEngine::new(params())
            .simulate(&m, &contig, &samples(0, 4, 2), Some(1), false)
            .unwrap_err();
        assert!(err.to_string().contains("cannot draw 4 samples"));
    }

    #[test]
    fn dry_run_returns_nothing() {
        let m = PiecewiseConstantSize(10.0, &[]);
        let contig = Contig::new("test".into(), 100.0, 0.0, 0.0, 2);
        let out = WrightFisherEngine::new(params())
            .simulate(&m, &contig, &samples(0, 2, 2), Some(1), true)
            .unwrap();
        assert!(out.is_none());
    }
}
