#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;

#[test]
fn source_remembers_its_url() {
    assert_eq!(HttpCatalogSource::new("projects.json").url(), "projects.json");
}

#[test]
fn fetch_outside_browser_reports_fetch_error() {
    let err = block_on(HttpCatalogSource::new("projects.json").fetch()).unwrap_err();
    assert!(matches!(err, CatalogError::Fetch(_)));
    assert!(err.to_string().contains("projects.json"));
}

#[test]
fn load_projects_degrades_to_empty_catalog() {
    let catalog = block_on(load_projects("projects.json"));
    assert!(catalog.is_empty());
}
