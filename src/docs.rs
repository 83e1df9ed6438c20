use crate::citations::Citation;
use crate::models::DemographicModel;
use crate::species::Species;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

fn heading(out: &mut String, title: &str, underline: char) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}\n", underline.to_string().repeat(title.chars().count()));
}

/// A list-table; the first row is the header when `header` is set.
fn list_table(out: &mut String, rows: &[Vec<String>], header: bool) {
    let _ = writeln!(out, ".. list-table::");
    if header {
        let _ = writeln!(out, "   :header-rows: 1");
    }
    let _ = writeln!(out);
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let bullet = if i == 0 { "   * - " } else { "     - " };
            let _ = writeln!(out, "{bullet}{cell}");
        }
    }
    let _ = writeln!(out);
}

fn citation_list(out: &mut String, citations: &[Citation]) {
    for c in citations {
        let reasons = c.reasons.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "- {}, {}: {} ({reasons})", c.author, c.year, c.doi);
    }
    let _ = writeln!(out);
}

fn model_section(out: &mut String, model: &DemographicModel) {
    heading(out, &model.id, '~');
    let _ = writeln!(out, "{}\n", model.description);
    if !model.long_description.is_empty() {
        let _ = writeln!(out, "{}\n", model.long_description);
    }
    let mut rows = vec![vec![
        "Index".to_string(),
        "ID".to_string(),
        "Sampling time".to_string(),
        "Description".to_string(),
    ]];
    for (i, pop) in model.populations.iter().enumerate() {
        rows.push(vec![
            i.to_string(),
            pop.id.clone(),
            pop.sampling_time.map_or("not sampled".to_string(), |t| t.to_string()),
            pop.description.clone(),
        ]);
    }
    list_table(out, &rows, true);
    if let Some(mu) = model.mutation_rate {
        let _ = writeln!(out, "Mutation rate: {mu:e}\n");
    }
    if !model.citations.is_empty() {
        citation_list(out, &model.citations);
    }
}

/// reStructuredText page for one species.
pub fn species_page(species: &Species) -> String {
    let mut out = String::new();
    let _ = writeln!(out, ".. _sec_catalog_{}:\n", species.id.to_lowercase());
    heading(&mut out, &species.id, '=');
    let _ = writeln!(out, "*{}* ({})\n", species.name, species.common_name);

    heading(&mut out, "Genome", '-');
    let g = &species.genome;
    let summary = [
        ("Assembly name", g.assembly_name.clone()),
        ("Assembly accession", g.assembly_accession.clone()),
        ("Assembly source", g.assembly_source.clone()),
        ("Assembly build version", g.assembly_build_version.clone()),
        ("Genome length", g.length().to_string()),
        ("Generation time", format!("{} years", species.generation_time)),
        ("Population size", species.population_size.to_string()),
        ("Ploidy", species.ploidy.to_string()),
        ("Separate sexes", species.separate_sexes.to_string()),
    ];
    let rows: Vec<Vec<String>> = summary
        .into_iter()
        .map(|(k, v)| vec![k.to_string(), v])
        .collect();
    list_table(&mut out, &rows, false);

    heading(&mut out, "Chromosomes", '-');
    let mut rows = vec![vec![
        "ID".to_string(),
        "Length".to_string(),
        "Recombination rate".to_string(),
        "Mutation rate".to_string(),
        "Ploidy".to_string(),
    ]];
    for c in &g.chromosomes {
        rows.push(vec![
            c.id.clone(),
            c.length.to_string(),
            format!("{:e}", c.recombination_rate),
            format!("{:e}", c.mutation_rate),
            c.ploidy.to_string(),
        ]);
    }
    list_table(&mut out, &rows, true);

    let citations = Citation::merge(g.citations.iter().chain(&species.citations));
    if !citations.is_empty() {
        heading(&mut out, "Citations", '-');
        citation_list(&mut out, &citations);
    }

    heading(&mut out, "Demographic models", '-');
    if species.demographic_models.is_empty() {
        let _ = writeln!(out, "None.\n");
    }
    for model in &species.demographic_models {
        model_section(&mut out, model);
    }

    if !species.genetic_maps.is_empty() {
        heading(&mut out, "Genetic maps", '-');
        for gm in &species.genetic_maps {
            let _ = writeln!(out, "- ``{}``: {}", gm.id, gm.description);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn index_page(species: &[&Species]) -> String {
    let mut out = String::new();
    heading(&mut out, "Catalog", '=');
    let _ = writeln!(out, ".. toctree::\n   :maxdepth: 1\n");
    for sp in species {
        let _ = writeln!(out, "   {}", sp.id.to_lowercase());
    }
    out
}

/// Write one page per species plus an index into `dir`.
pub fn write_pages(species: &[&Species], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut written = Vec::with_capacity(species.len() + 1);
    for sp in species {
        let path = dir.join(format!("{}.rst", sp.id.to_lowercase()));
        std::fs::write(&path, species_page(sp)).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    let index = dir.join("index.rst");
    std::fs::write(&index, index_page(species))?;
    written.push(index);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::get_species;

    #[test]
    fn page_covers_genome_and_models() {
        let sp = get_species("ZweBerg").unwrap();
        let page = species_page(sp);
        assert!(page.starts_with(".. _sec_catalog_zweberg:\n\nZweBerg\n=======\n"));
        assert!(page.contains("   * - Assembly name\n     - Schneewittchen1.0\n"));
        assert!(page.contains("   * - mountain_mitogenome\n     - 17000\n"));
        assert!(page.contains("BlackForest_1D12\n~~~~~~~~~~~~~~~~\n"));
        assert!(page.contains("     - BlackForest\n"));
    }

    #[test]
    fn pages_and_index_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let sp = get_species("ZweBerg").unwrap();
        let written = write_pages(&[sp], dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        let index = std::fs::read_to_string(dir.path().join("index.rst")).unwrap();
        assert!(index.contains("   zweberg\n"));
        assert!(dir.path().join("zweberg.rst").is_file());
    }
}
