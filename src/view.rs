//! Sub-view selection on the execution screen.
//!
//! The screen shows either the plan, the extractor source or the
//! validation notebook. Every file the user opens stays in a tab strip for
//! the rest of the session.

use crate::plan::{DATA_VALIDATION, X_EXTRACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubView {
    #[default]
    Pipeline,
    Code,
    Notebook,
}

/// A file that can be opened from the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFile {
    ExtractorCode,
    ValidationNotebook,
}

impl OpenFile {
    pub fn label(self) -> &'static str {
        match self {
            OpenFile::ExtractorCode => "twitter_extractor.py",
            OpenFile::ValidationNotebook => "data_validation.ipynb",
        }
    }

    pub fn sub_view(self) -> SubView {
        match self {
            OpenFile::ExtractorCode => SubView::Code,
            OpenFile::ValidationNotebook => SubView::Notebook,
        }
    }

    /// File opened by clicking a plan step, if any.
    pub fn for_step(step_id: &str) -> Option<Self> {
        match step_id {
            X_EXTRACTOR => Some(OpenFile::ExtractorCode),
            DATA_VALIDATION => Some(OpenFile::ValidationNotebook),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    sub_view: SubView,
    open_files: Vec<OpenFile>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sub_view(&self) -> SubView {
        self.sub_view
    }

    pub fn open_files(&self) -> &[OpenFile] {
        &self.open_files
    }

    /// Show `file`, adding it to the tab strip the first time.
    pub fn open(&mut self, file: OpenFile) {
        if !self.open_files.contains(&file) {
            log::debug!("view: opened {}", file.label());
            self.open_files.push(file);
        }
        self.sub_view = file.sub_view();
    }

    /// Handle a click on a plan step row. Returns whether the view changed.
    pub fn click_step(&mut self, step_id: &str) -> bool {
        let Some(file) = OpenFile::for_step(step_id) else {
            return false;
        };
        let before = (self.sub_view, self.open_files.len());
        self.open(file);
        before != (self.sub_view, self.open_files.len())
    }

    /// Re-select an already open file. Tabs never add entries.
    pub fn select_tab(&mut self, file: OpenFile) {
        if self.open_files.contains(&file) {
            self.sub_view = file.sub_view();
        }
    }

    pub fn back(&mut self) {
        self.sub_view = SubView::Pipeline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.sub_view(), SubView::Pipeline);
        assert!(view.open_files().is_empty());
    }

    #[test]
    fn test_repeated_extractor_click_opens_once() {
        let mut view = ViewState::new();
        assert!(view.click_step(X_EXTRACTOR));
        assert!(!view.click_step(X_EXTRACTOR));
        assert!(!view.click_step(X_EXTRACTOR));
        assert_eq!(view.sub_view(), SubView::Code);
        assert_eq!(view.open_files(), &[OpenFile::ExtractorCode]);
        assert_eq!(view.open_files()[0].label(), "twitter_extractor.py");
    }

    #[test]
    fn test_click_after_back_reports_change() {
        let mut view = ViewState::new();
        view.click_step(X_EXTRACTOR);
        view.back();
        assert!(view.click_step(X_EXTRACTOR));
        assert_eq!(view.open_files().len(), 1);
    }

    #[test]
    fn test_validation_click_opens_notebook() {
        let mut view = ViewState::new();
        view.click_step(X_EXTRACTOR);
        view.back();
        view.click_step(DATA_VALIDATION);
        assert_eq!(view.sub_view(), SubView::Notebook);
        assert_eq!(
            view.open_files(),
            &[OpenFile::ExtractorCode, OpenFile::ValidationNotebook]
        );
    }

    #[test]
    fn test_other_steps_do_nothing() {
        let mut view = ViewState::new();
        assert!(!view.click_step("sync-reddit"));
        assert_eq!(view, ViewState::new());
    }

    #[test]
    fn test_back_keeps_open_files() {
        let mut view = ViewState::new();
        view.click_step(DATA_VALIDATION);
        view.back();
        assert_eq!(view.sub_view(), SubView::Pipeline);
        assert_eq!(view.open_files().len(), 1);
    }

    #[test]
    fn test_select_tab_does_not_append() {
        let mut view = ViewState::new();
        view.click_step(X_EXTRACTOR);
        view.click_step(DATA_VALIDATION);
        view.select_tab(OpenFile::ExtractorCode);
        assert_eq!(view.sub_view(), SubView::Code);
        assert_eq!(view.open_files().len(), 2);
    }

    #[test]
    fn test_select_unopened_tab_is_ignored() {
        let mut view = ViewState::new();
        view.select_tab(OpenFile::ValidationNotebook);
        assert_eq!(view.sub_view(), SubView::Pipeline);
        assert!(view.open_files().is_empty());
    }
}
