use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

/// Why a reference is being cited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CiteReason {
    Software,
    Engine,
    DemModel,
    GenTime,
    PopSize,
    Assembly,
    MutRate,
    RecRate,
    GeneticMap,
    Annotation,
    Dfe,
}

impl fmt::Display for CiteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Software => "stdgrimmsim",
            Self::Engine => "simulation engine",
            Self::DemModel => "demographic model",
            Self::GenTime => "generation time",
            Self::PopSize => "population size",
            Self::Assembly => "genome assembly",
            Self::MutRate => "mutation rate",
            Self::RecRate => "recombination rate",
            Self::GeneticMap => "genetic map",
            Self::Annotation => "genome annotation",
            Self::Dfe => "distribution of fitness effects",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    pub author: String,
    pub year: u32,
    pub doi: String,
    pub reasons: BTreeSet<CiteReason>,
}

impl Citation {
    pub fn new(author: &str, year: u32, doi: &str, reasons: &[CiteReason]) -> Self {
        Self {
            author: author.to_string(),
            year,
            doi: doi.to_string(),
            reasons: reasons.iter().copied().collect(),
        }
    }

    /// Copy of this citation with `reason` added.
    pub fn because(&self, reason: CiteReason) -> Self {
        let mut c = self.clone();
        c.reasons.insert(reason);
        c
    }

    /// Collapse citations sharing a DOI into one record carrying the union
    /// of their reasons. Output order is the order of first appearance.
    pub fn merge<'a>(citations: impl IntoIterator<Item = &'a Citation>) -> Vec<Citation> {
        let mut merged: Vec<Citation> = Vec::new();
        for c in citations {
            match merged.iter_mut().find(|m| m.doi == c.doi) {
                Some(m) => m.reasons.extend(c.reasons.iter().copied()),
                None => merged.push(c.clone()),
            }
        }
        merged
    }

    pub fn fetch_bibtex(&self) -> Result<String> {
        let url = if self.doi.starts_with("http") {
            self.doi.clone()
        } else {
            format!("https://doi.org/{}", self.doi)
        };
        let body = ureq::get(&url)
            .set("Accept", "application/x-bibtex; charset=utf-8")
            .call()
            .with_context(|| format!("fetching bibtex for {}", self.doi))?
            .into_string()?;
        Ok(body)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons = self
            .reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]\n    {}, {}: {}", reasons, self.author, self.year, self.doi)
    }
}

/// Write one BibTeX entry per citation. `fetch` resolves an entry; failures
/// are logged and skipped so a single unreachable DOI does not lose the rest.
pub fn write_bibtex<W, F>(out: &mut W, citations: &[Citation], mut fetch: F) -> Result<()>
where
    W: Write,
    F: FnMut(&Citation) -> Result<String>,
{
    for c in citations {
        match fetch(c) {
            Ok(entry) => {
                writeln!(out, "{}", entry.trim_end())?;
                writeln!(out)?;
            }
            Err(e) => log::warn!("Could not retrieve bibtex for {}: {e:#}", c.doi),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_unions_reasons_by_doi() {
        let a = Citation::new("A", 2000, "doi/a", &[CiteReason::GenTime]);
        let b = Citation::new("B", 2001, "doi/b", &[CiteReason::DemModel]);
        let a2 = Citation::new("A", 2000, "doi/a", &[CiteReason::PopSize]);
        let merged = Citation::merge([&a, &b, &a2]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].doi, "doi/a");
        assert!(merged[0].reasons.contains(&CiteReason::GenTime));
        assert!(merged[0].reasons.contains(&CiteReason::PopSize));
        assert_eq!(merged[1].doi, "doi/b");
    }

    #[test]
    fn because_adds_reason() {
        let a = Citation::new("A", 2000, "doi/a", &[]);
        let b = a.because(CiteReason::Engine);
        assert!(a.reasons.is_empty());
        assert_eq!(b.reasons.len(), 1);
    }

    #[test]
    fn display_lists_reasons_then_reference() {
        let c = Citation::new(
            "Grimm",
            1812,
            "https://example.org",
            &[CiteReason::MutRate, CiteReason::RecRate],
        );
        assert_eq!(
            c.to_string(),
            "[mutation rate, recombination rate]\n    Grimm, 1812: https://example.org"
        );
    }

    #[test]
    fn bibtex_skips_failed_fetches() {
        let a = Citation::new("A", 2000, "doi/a", &[]);
        let b = Citation::new("B", 2001, "doi/b", &[]);
        let mut out = Vec::new();
        write_bibtex(&mut out, &[a, b], |c| {
            if c.doi == "doi/a" {
                Ok("@article{a}\n".to_string())
            } else {
                anyhow::bail!("offline")
            }
        })
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "@article{a}\n\n");
    }
}
