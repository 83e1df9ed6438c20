use crate::citations::Citation;
use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use std::path::Path;

// ── Static genome description ─────────────────────────────────────────────────

/// Assembly-level description of a genome as shipped with a catalog entry.
/// Chromosomes are `(id, length, synonyms)`.
#[derive(Clone, Copy, Debug)]
pub struct GenomeData {
    pub assembly_name: &'static str,
    pub assembly_accession: &'static str,
    pub assembly_source: &'static str,
    pub assembly_build_version: &'static str,
    pub chromosomes: &'static [(&'static str, u64, &'static [&'static str])],
}

/// Per-chromosome rates supplied alongside [`GenomeData`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromosomeRates {
    pub mutation_rate: f64,
    pub recombination_rate: f64,
    pub ploidy: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chromosome {
    pub id: String,
    pub length: u64,
    pub mutation_rate: f64,
    pub recombination_rate: f64,
    pub ploidy: usize,
    pub synonyms: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Genome {
    pub assembly_name: String,
    pub assembly_accession: String,
    pub assembly_source: String,
    pub assembly_build_version: String,
    pub chromosomes: Vec<Chromosome>,
    pub citations: Vec<Citation>,
}

impl Genome {
    pub fn from_data(
        data: &GenomeData,
        rates: impl Fn(&str) -> ChromosomeRates,
        citations: Vec<Citation>,
    ) -> Self {
        let chromosomes = data
            .chromosomes
            .iter()
            .map(|&(id, length, synonyms)| {
                let r = rates(id);
                Chromosome {
                    id: id.to_string(),
                    length,
                    mutation_rate: r.mutation_rate,
                    recombination_rate: r.recombination_rate,
                    ploidy: r.ploidy,
                    synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
                }
            })
            .collect();
        Self {
            assembly_name: data.assembly_name.to_string(),
            assembly_accession: data.assembly_accession.to_string(),
            assembly_source: data.assembly_source.to_string(),
            assembly_build_version: data.assembly_build_version.to_string(),
            chromosomes,
            citations,
        }
    }

    /// Look up a chromosome by id or synonym.
    pub fn get_chromosome(&self, id: &str) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .find(|c| c.id == id || c.synonyms.iter().any(|s| s == id))
    }

    pub fn length(&self) -> u64 {
        self.chromosomes.iter().map(|c| c.length).sum()
    }

    /// Length-weighted mean `(mutation, recombination)` rates over the
    /// chromosomes with the given ploidy.
    pub fn mean_rates(&self, ploidy: usize) -> (f64, f64) {
        let mut total = 0.0;
        let mut mu = 0.0;
        let mut rho = 0.0;
        for c in self.chromosomes.iter().filter(|c| c.ploidy == ploidy) {
            let l = c.length as f64;
            total += l;
            mu += c.mutation_rate * l;
            rho += c.recombination_rate * l;
        }
        if total == 0.0 {
            return (0.0, 0.0);
        }
        (mu / total, rho / total)
    }
}

// ── Recombination map ─────────────────────────────────────────────────────────

/// Piecewise-constant per-bp rate along a sequence. `positions` has one more
/// entry than `rates`, starts at 0 and ends at the sequence length.
#[derive(Clone, Debug, PartialEq)]
pub struct RateMap {
    pub positions: Vec<f64>,
    pub rates: Vec<f64>,
}

impl RateMap {
    pub fn new(positions: Vec<f64>, rates: Vec<f64>) -> Result<Self> {
        if positions.len() != rates.len() + 1 {
            bail!("rate map needs one more position than rates");
        }
        if positions.first() != Some(&0.0) {
            bail!("rate map must start at position 0");
        }
        if positions.windows(2).any(|w| w[1] <= w[0]) {
            bail!("rate map positions must be strictly increasing");
        }
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            bail!("rate map rates must be finite and non-negative");
        }
        Ok(Self { positions, rates })
    }

    pub fn uniform(length: f64, rate: f64) -> Self {
        Self {
            positions: vec![0.0, length],
            rates: vec![rate],
        }
    }

    pub fn sequence_length(&self) -> f64 {
        *self.positions.last().unwrap_or(&0.0)
    }

    /// Expected number of events over the whole map.
    pub fn total_mass(&self) -> f64 {
        self.rates
            .iter()
            .zip(self.positions.windows(2))
            .map(|(r, w)| r * (w[1] - w[0]))
            .sum()
    }

    pub fn mean_rate(&self) -> f64 {
        let l = self.sequence_length();
        if l > 0.0 { self.total_mass() / l } else { 0.0 }
    }

    /// Position at which the cumulative mass reaches `mass`.
    pub fn position_of_mass(&self, mass: f64) -> f64 {
        let mut acc = 0.0;
        for (r, w) in self.rates.iter().zip(self.positions.windows(2)) {
            let seg = r * (w[1] - w[0]);
            if seg > 0.0 && acc + seg >= mass {
                return w[0] + (mass - acc) / r;
            }
            acc += seg;
        }
        self.sequence_length()
    }

    /// The part of the map in `[left, right)`, shifted to start at zero.
    pub fn slice(&self, left: f64, right: f64) -> Result<Self> {
        if !(0.0 <= left && left < right && right <= self.sequence_length()) {
            bail!(
                "cannot slice [{left}, {right}) from a map of length {}",
                self.sequence_length()
            );
        }
        let mut positions = vec![0.0];
        let mut rates = Vec::new();
        for (r, w) in self.rates.iter().zip(self.positions.windows(2)) {
            let a = w[0].max(left);
            let b = w[1].min(right);
            if b > a {
                rates.push(*r);
                positions.push(b - left);
            }
        }
        Self::new(positions, rates)
    }

    /// Multiply every rate by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            positions: self.positions.clone(),
            rates: self.rates.iter().map(|r| r * factor).collect(),
        }
    }

    /// Place `num_bp` crossovers according to the map as sorted, distinct
    /// integer positions in `[1, L)`; duplicates collapse.
    pub fn draw_breakpoints<R: Rng>(&self, num_bp: usize, rng: &mut R) -> Result<Vec<f64>> {
        let mass = self.total_mass();
        let seq_len = self.sequence_length();
        if num_bp == 0 || mass <= 0.0 || seq_len < 2.0 {
            return Ok(vec![]);
        }
        let mass_dist = Uniform::new(0.0f64, mass)?;
        let mut bps: Vec<u64> = (0..num_bp)
            .map(|_| self.position_of_mass(mass_dist.sample(rng)).floor() as u64)
            .filter(|&x| x >= 1 && (x as f64) < seq_len)
            .collect();
        bps.sort_unstable();
        bps.dedup();
        Ok(bps.into_iter().map(|x| x as f64).collect())
    }

    /// Read a HapMap-formatted genetic map: a header line, then whitespace
    /// separated columns `chrom position rate(cM/Mb) map(cM)`. The rate on a
    /// row holds up to the next row's position; the region before the first
    /// row has rate zero.
    pub fn read_hapmap(path: &Path, sequence_length: Option<f64>) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading genetic map {}", path.display()))?;
        let mut rows: Vec<(f64, f64)> = Vec::new();
        for (lineno, line) in text.lines().enumerate().skip(1) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < 3 {
                bail!("{}:{}: expected at least 3 columns", path.display(), lineno + 1);
            }
            let pos: f64 = fields[1]
                .parse()
                .with_context(|| format!("{}:{}: bad position", path.display(), lineno + 1))?;
            let rate: f64 = fields[2]
                .parse()
                .with_context(|| format!("{}:{}: bad rate", path.display(), lineno + 1))?;
            rows.push((pos, rate * 1e-8));
        }
        if rows.is_empty() {
            bail!("{}: genetic map has no entries", path.display());
        }

        let mut positions = vec![0.0];
        let mut rates = Vec::with_capacity(rows.len());
        if rows[0].0 > 0.0 {
            positions.push(rows[0].0);
            rates.push(0.0);
        }
        for w in rows.windows(2) {
            positions.push(w[1].0);
            rates.push(w[0].1);
        }
        if let Some(l) = sequence_length {
            let last = *positions.last().unwrap_or(&0.0);
            if l > last {
                positions.push(l);
                rates.push(0.0);
            }
        }
        Self::new(positions, rates)
    }
}

// ── Contig ────────────────────────────────────────────────────────────────────

/// The stretch of genome handed to an engine.
#[derive(Clone, Debug)]
pub struct Contig {
    /// `species:chromosome:left-right`, or `species:generic` for a contig
    /// built from genome-wide mean rates.
    pub origin: String,
    pub mutation_rate: f64,
    pub recombination_map: RateMap,
    pub ploidy: usize,
    pub genetic_map: Option<String>,
}

impl Contig {
    pub fn new(origin: String, length: f64, mutation_rate: f64, recombination_rate: f64, ploidy: usize) -> Self {
        Self {
            origin,
            mutation_rate,
            recombination_map: RateMap::uniform(length, recombination_rate),
            ploidy,
            genetic_map: None,
        }
    }

    pub fn length(&self) -> f64 {
        self.recombination_map.sequence_length()
    }

    pub fn recombination_rate(&self) -> f64 {
        self.recombination_map.mean_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::io::Write;

    const DATA: GenomeData = GenomeData {
        assembly_name: "Test1.0",
        assembly_accession: "GCA_TEST",
        assembly_source: "test",
        assembly_build_version: "1",
        chromosomes: &[("1", 1000, &["chr1"]), ("2", 3000, &[]), ("mt", 100, &[])],
    };

    fn genome() -> Genome {
        Genome::from_data(
            &DATA,
            |id| match id {
                "mt" => ChromosomeRates {
                    mutation_rate: 1e-7,
                    recombination_rate: 0.0,
                    ploidy: 1,
                },
                "1" => ChromosomeRates {
                    mutation_rate: 1e-8,
                    recombination_rate: 2e-8,
                    ploidy: 2,
                },
                _ => ChromosomeRates {
                    mutation_rate: 2e-8,
                    recombination_rate: 2e-8,
                    ploidy: 2,
                },
            },
            vec![],
        )
    }

    #[test]
    fn chromosome_lookup_by_synonym() {
        let g = genome();
        assert_eq!(g.get_chromosome("chr1").map(|c| c.id.as_str()), Some("1"));
        assert!(g.get_chromosome("chrX").is_none());
        assert_eq!(g.length(), 4100);
    }

    #[test]
    fn mean_rates_skip_other_ploidy() {
        let (mu, rho) = genome().mean_rates(2);
        assert!((mu - 1.75e-8).abs() < 1e-20);
        assert!((rho - 2e-8).abs() < 1e-20);
    }

    #[test]
    fn slice_shifts_to_zero() {
        let m = RateMap::new(vec![0.0, 10.0, 20.0, 30.0], vec![1.0, 2.0, 3.0]).unwrap();
        let s = m.slice(5.0, 25.0).unwrap();
        assert_eq!(s.positions, vec![0.0, 5.0, 15.0, 20.0]);
        assert_eq!(s.rates, vec![1.0, 2.0, 3.0]);
        assert!((s.total_mass() - 40.0).abs() < 1e-12);
        assert!(m.slice(25.0, 5.0).is_err());
        assert!(m.slice(0.0, 31.0).is_err());
    }

    #[test]
    fn mass_inverts_to_position() {
        let m = RateMap::new(vec![0.0, 10.0, 20.0], vec![1.0, 0.0]).unwrap();
        assert!((m.position_of_mass(5.0) - 5.0).abs() < 1e-12);
        let m = RateMap::new(vec![0.0, 10.0, 20.0], vec![0.0, 2.0]).unwrap();
        assert!((m.position_of_mass(10.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn breakpoints_are_sorted_distinct_and_inside() {
        let m = RateMap::uniform(1000.0, 0.01);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let bps = m.draw_breakpoints(10, &mut rng).unwrap();
            assert!(!bps.is_empty() && bps.len() <= 10);
            assert!(bps.windows(2).all(|w| w[0] < w[1]));
            assert!(bps.iter().all(|&x| x >= 1.0 && x < 1000.0));
        }
        assert!(m.draw_breakpoints(0, &mut rng).unwrap().is_empty());
        let flat = RateMap::uniform(1000.0, 0.0);
        assert!(flat.draw_breakpoints(5, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn hapmap_rows_become_segments() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "Chromosome Position(bp) Rate(cM/Mb) Map(cM)").unwrap();
        writeln!(f, "chr1 100 1.0 0.0").unwrap();
        writeln!(f, "chr1 200 2.0 0.0001").unwrap();
        writeln!(f, "chr1 300 0.0 0.0003").unwrap();
        let m = RateMap::read_hapmap(f.path(), Some(400.0)).unwrap();
        assert_eq!(m.positions, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(m.rates, vec![0.0, 1e-8, 2e-8, 0.0]);
    }

    #[test]
    fn invalid_maps_are_rejected() {
        assert!(RateMap::new(vec![0.0, 10.0], vec![]).is_err());
        assert!(RateMap::new(vec![1.0, 10.0], vec![1.0]).is_err());
        assert!(RateMap::new(vec![0.0, 10.0, 5.0], vec![1.0, 1.0]).is_err());
        assert!(RateMap::new(vec![0.0, 10.0], vec![-1.0]).is_err());
    }
}
