//! # denali-demo
//!
//! Core logic behind the Denali "data engineer" product demo.
//!
//! The demo walks a user from a free-text question, through picking
//! social-media data sources, to a scripted run of an ETL execution plan.
//! Nothing is actually executed: plan progress is driven by fixed timer
//! offsets and every document on screen is an embedded constant.
//!
//! ## Overview
//!
//! - **Plan**: nine fixed, named steps
//! - **Sequencer**: reveals the steps one per tick, then completes a subset
//!   at fixed offsets and flags the validation step for manual action
//! - **Notebook**: nbformat cells rendered to display fragments
//! - **View**: execution sub-view selection and the open-file tab strip
//!
//! ## Example
//!
//! ```
//! use denali_demo::{StepStatus, Timeline};
//!
//! let mut timeline = Timeline::default();
//! timeline.advance_to(1_800);
//! timeline.confirm();
//! timeline.advance_to(1_800 + 6_000);
//!
//! let run = timeline.run();
//! assert_eq!(run.status(0), StepStatus::Completed);
//! assert_eq!(run.status(5), StepStatus::Blocked);
//! assert_eq!(run.status(8), StepStatus::Running);
//! ```

pub mod content;
pub mod error;
pub mod notebook;
pub mod plan;
pub mod prompt;
pub mod render;
pub mod sequencer;
pub mod view;

pub use content::{DataSource, SchemaField};
pub use error::NotebookError;
pub use notebook::{Cell, MimeBundle, Notebook, Output};
pub use plan::{PLAN_STEPS, PlanStep};
pub use render::{NotebookView, RenderedCell, RenderedOutput, Trust, render_notebook};
pub use sequencer::{
    PipelineRun, ScheduledEvent, SequencerConfig, SequencerEvent, StepStatus, Timeline,
};
pub use view::{OpenFile, SubView, ViewState};
