//! Reducer state owned by the execution screen.
//!
//! Created when the screen mounts and dropped with it; timers and clicks
//! only reach it through dispatched actions.

use std::rc::Rc;

use denali_demo::{OpenFile, PipelineRun, SequencerEvent, ViewState};
use yew::prelude::*;

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ExecutionState {
    pub run: PipelineRun,
    pub view: ViewState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionAction {
    /// Timer or button event for the plan run.
    Sequencer(SequencerEvent),
    /// Click on a plan step row, by step id.
    ClickStep(&'static str),
    /// Click on an open-file tab.
    SelectTab(OpenFile),
    /// Back to the plan from a file view.
    Back,
}

impl Reducible for ExecutionState {
    type Action = ExecutionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ExecutionAction::Sequencer(event) => {
                next.run.apply(event);
            }
            ExecutionAction::ClickStep(step_id) => {
                next.view.click_step(step_id);
            }
            ExecutionAction::SelectTab(file) => next.view.select_tab(file),
            ExecutionAction::Back => next.view.back(),
        }

        if next == *self { self } else { Rc::new(next) }
    }
}
