//! The bundled sample document drives the page end to end.

use gallery::carousel::{CarouselModel, Direction};
use gallery::catalog::ProjectCatalog;
use gallery::modal::{ModalKey, ProjectModalController};
use gallery::viewport::slides_per_view;

const SAMPLE: &str = include_str!("../public/projects.json");

#[test]
fn sample_document_parses_in_display_order() {
    let catalog = ProjectCatalog::from_json(SAMPLE).unwrap();
    let ids: Vec<u32> = catalog.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn every_sample_project_has_modal_images() {
    let catalog = ProjectCatalog::from_json(SAMPLE).unwrap();
    assert!(catalog.projects().iter().all(|p| !p.images.is_empty()));
}

#[test]
fn works_carousel_over_sample_on_desktop() {
    let catalog = ProjectCatalog::from_json(SAMPLE).unwrap();
    let model = CarouselModel::new(catalog.len(), slides_per_view(1440.0));
    assert_eq!(model.dot_count(), 1);
    assert_eq!(model.max_index(), 0);
}

#[test]
fn works_carousel_over_sample_on_phone() {
    let catalog = ProjectCatalog::from_json(SAMPLE).unwrap();
    let mut model = CarouselModel::new(catalog.len(), slides_per_view(390.0));
    model.step(Direction::Prev);
    assert_eq!(model.current_index(), 2);
    assert_eq!(model.active_dot_index(), 2);
}

#[test]
fn modal_over_sample_wraps_backwards() {
    let catalog = ProjectCatalog::from_json(SAMPLE).unwrap();
    let mut modal = ProjectModalController::new();
    assert!(modal.open(&catalog, 3));
    assert!(modal.handle_key(ModalKey::Previous));
    assert_eq!(modal.current_index(), Some(5));
    assert!(modal.handle_key(ModalKey::Close));
    assert!(!modal.is_open());
}
