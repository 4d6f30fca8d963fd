//! Project records and the in-memory catalog built from the data document.
//!
//! The page reads a single JSON document of the form
//! `{ "projects": [ { "id": 1, "name": "...", ... } ] }` once at startup.
//! [`ProjectCatalog`] keeps the records in display order (ascending `order`,
//! stable for ties) plus an id lookup used when a card opens the modal.
//!
//! ERROR HANDLING
//! ==============
//! [`ProjectCatalog::load`] never fails: fetch and parse errors are logged and
//! an empty catalog is returned, so the page renders with zero projects rather
//! than not at all. Callers that need the error use
//! [`ProjectCatalog::try_load`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::Deserialize;

/// Unique identifier of a project in the data document.
pub type ProjectId = u32;

/// One portfolio project as it appears in the data document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Card overlay text; empty when the document omits it.
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// External link; may be empty.
    #[serde(default)]
    pub link: String,
    /// Modal gallery images in display order.
    #[serde(default)]
    pub images: Vec<String>,
    pub thumbnail: String,
    /// Sort key for the works carousel.
    pub order: i64,
}

/// Top-level shape of the data document.
#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    projects: Vec<Project>,
}

/// Why a catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid project document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the raw project document comes from.
///
/// The browser implementation performs an HTTP GET; tests supply canned text
/// or errors.
pub trait CatalogSource {
    /// Produce the raw JSON text of the project document.
    fn fetch(&self) -> impl Future<Output = Result<String, CatalogError>>;
}

/// Projects in display order with an id lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    by_id: HashMap<ProjectId, usize>,
}

impl ProjectCatalog {
    /// Build a catalog from records in document order.
    ///
    /// Records are sorted by `order` (stable). When two records share an id
    /// the one later in the document wins the lookup; both stay listed.
    #[must_use]
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let mut entries: Vec<(usize, Project)> = projects.into_iter().enumerate().collect();
        entries.sort_by_key(|(_, project)| project.order);

        let mut winners: HashMap<ProjectId, (usize, usize)> = HashMap::new();
        for (position, (document_index, project)) in entries.iter().enumerate() {
            let replace = winners
                .get(&project.id)
                .map_or(true, |&(seen_at, _)| *document_index > seen_at);
            if replace {
                winners.insert(project.id, (*document_index, position));
            }
        }

        Self {
            projects: entries.into_iter().map(|(_, project)| project).collect(),
            by_id: winners
                .into_iter()
                .map(|(id, (_, position))| (id, position))
                .collect(),
        }
    }

    /// Parse the JSON data document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a valid project
    /// document.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::from_projects(document.projects))
    }

    /// Fetch and parse the document from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch error or a parse error.
    pub async fn try_load<S: CatalogSource>(source: &S) -> Result<Self, CatalogError> {
        let text = source.fetch().await?;
        Self::from_json(&text)
    }

    /// Fetch and parse the document, degrading to an empty catalog on failure.
    pub async fn load<S: CatalogSource>(source: &S) -> Self {
        match Self::try_load(source).await {
            Ok(catalog) => {
                log::debug!("loaded {} projects", catalog.len());
                catalog
            }
            Err(err) => {
                log::error!("error loading projects: {err}");
                Self::default()
            }
        }
    }

    /// Look up a project by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.by_id.get(&id).and_then(|&position| self.projects.get(position))
    }

    /// Projects in display order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
