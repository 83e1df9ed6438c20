/// Lookup and validation failures raised by the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Species '{id}' not in catalog ({available})")]
    SpeciesNotFound { id: String, available: String },

    #[error("DemographicModel '{species}/{id}' not in catalog ({available})")]
    ModelNotFound {
        species: String,
        id: String,
        available: String,
    },

    #[error("GeneticMap '{species}/{id}' not in catalog ({available})")]
    GeneticMapNotFound {
        species: String,
        id: String,
        available: String,
    },

    #[error("DFE '{species}/{id}' not in catalog ({available})")]
    DfeNotFound {
        species: String,
        id: String,
        available: String,
    },

    #[error("Annotations '{species}/{id}' not in catalog ({available})")]
    AnnotationNotFound {
        species: String,
        id: String,
        available: String,
    },

    #[error("Chromosome '{id}' not in genome of {species} ({available})")]
    ChromosomeNotFound {
        species: String,
        id: String,
        available: String,
    },

    #[error("DemographicModel '{species}/{id}' already in catalog")]
    DuplicateModel { species: String, id: String },

    #[error("Invalid demographic model '{model}': {reason}")]
    InvalidModel { model: String, reason: String },

    #[error("Invalid contig: {0}")]
    InvalidContig(String),
}

/// Comma-separated listing used in the "not in catalog" messages.
pub(crate) fn listing<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter().collect::<Vec<_>>().join(", ")
}
