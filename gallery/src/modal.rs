//! Project detail modal: open/close lifecycle and its image carousel.
//!
//! The modal is either closed or open on one project. Opening binds a fresh
//! single-image [`CarouselModel`] over that project's images; closing drops
//! it. Every navigation entry point is a no-op while closed, so stray key
//! presses or indicator clicks after close cannot resurrect stale state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::carousel::{CarouselModel, Direction};
use crate::catalog::{ProjectCatalog, ProjectId};

/// Keys the open modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Previous,
    Next,
}

impl ModalKey {
    /// Map a DOM `KeyboardEvent.key` name to a modal action.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// The project currently shown and the position in its image gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSession {
    pub project_id: ProjectId,
    pub carousel: CarouselModel,
}

/// Modal lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

/// Drives the modal from card clicks, indicator clicks, and keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectModalController {
    state: ModalState,
}

impl ProjectModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Project shown by the open modal.
    #[must_use]
    pub fn active_project_id(&self) -> Option<ProjectId> {
        self.session().map(|session| session.project_id)
    }

    /// Index of the visible image while open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session().map(|session| session.carousel.current_index())
    }

    #[must_use]
    pub fn session(&self) -> Option<&ModalSession> {
        match &self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    /// Open on `project_id`, starting at its first image.
    ///
    /// Returns `false` and leaves the state untouched when the catalog has no
    /// such project.
    pub fn open(&mut self, catalog: &ProjectCatalog, project_id: ProjectId) -> bool {
        let Some(project) = catalog.get(project_id) else {
            log::debug!("project {project_id} not found; modal stays as it was");
            return false;
        };
        self.state = ModalState::Open(ModalSession {
            project_id,
            carousel: CarouselModel::new(project.images.len(), 1),
        });
        true
    }

    /// Close the modal and discard its carousel.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Step one image, wrapping. Returns whether the modal was open.
    pub fn change_slide(&mut self, direction: Direction) -> bool {
        match &mut self.state {
            ModalState::Open(session) => {
                session.carousel.step(direction);
                true
            }
            ModalState::Closed => false,
        }
    }

    /// Jump to image `index` (indicator click). Returns whether the modal was open.
    pub fn select_slide(&mut self, index: usize) -> bool {
        match &mut self.state {
            ModalState::Open(session) => {
                session.carousel.go_to_index(index);
                true
            }
            ModalState::Closed => false,
        }
    }

    /// Apply a keyboard action. Returns whether it was handled, which is only
    /// ever the case while open.
    pub fn handle_key(&mut self, key: ModalKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            ModalKey::Close => {
                self.close();
                true
            }
            ModalKey::Previous => self.change_slide(Direction::Prev),
            ModalKey::Next => self.change_slide(Direction::Next),
        }
    }
}
