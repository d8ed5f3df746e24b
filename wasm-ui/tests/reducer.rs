//! Execution screen reducer tests.

use std::rc::Rc;

use denali_demo::plan::{DATA_VALIDATION, X_EXTRACTOR};
use denali_demo::{OpenFile, SequencerEvent, StepStatus, SubView};
use wasm_bindgen_test::*;
use wasm_ui::state::{ExecutionAction, ExecutionState};
use yew::functional::Reducible;

fn reduce_all(actions: impl IntoIterator<Item = ExecutionAction>) -> Rc<ExecutionState> {
    actions
        .into_iter()
        .fold(Rc::new(ExecutionState::default()), |state, action| state.reduce(action))
}

fn reveal_all() -> Vec<ExecutionAction> {
    vec![ExecutionAction::Sequencer(SequencerEvent::Reveal); 9]
}

#[wasm_bindgen_test]
fn test_repeated_step_click_opens_file_once() {
    let state = reduce_all(vec![ExecutionAction::ClickStep(X_EXTRACTOR); 4]);
    assert_eq!(state.view.sub_view(), SubView::Code);
    assert_eq!(state.view.open_files(), &[OpenFile::ExtractorCode]);
}

#[wasm_bindgen_test]
fn test_tab_and_back() {
    let state = reduce_all([
        ExecutionAction::ClickStep(X_EXTRACTOR),
        ExecutionAction::ClickStep(DATA_VALIDATION),
        ExecutionAction::SelectTab(OpenFile::ExtractorCode),
    ]);
    assert_eq!(state.view.sub_view(), SubView::Code);
    assert_eq!(state.view.open_files().len(), 2);

    let state = state.reduce(ExecutionAction::Back);
    assert_eq!(state.view.sub_view(), SubView::Pipeline);
    assert_eq!(state.view.open_files().len(), 2);
}

#[wasm_bindgen_test]
fn test_noop_action_keeps_state() {
    let state = Rc::new(ExecutionState::default());
    let next = state.clone().reduce(ExecutionAction::Back);
    assert!(Rc::ptr_eq(&state, &next));

    let next = state.clone().reduce(ExecutionAction::Sequencer(SequencerEvent::Confirm));
    assert!(Rc::ptr_eq(&state, &next));
}

#[wasm_bindgen_test]
fn test_confirm_then_resolve() {
    let mut actions = reveal_all();
    actions.push(ExecutionAction::Sequencer(SequencerEvent::Confirm));
    actions.extend((0..5).map(|i| ExecutionAction::Sequencer(SequencerEvent::Complete(i))));
    actions.push(ExecutionAction::Sequencer(SequencerEvent::RequireAction));
    let state = reduce_all(actions);

    assert_eq!(state.run.status(4), StepStatus::Completed);
    assert_eq!(state.run.status(5), StepStatus::Blocked);
    assert!(state.run.can_resolve());

    let resolved = state.reduce(ExecutionAction::Sequencer(SequencerEvent::Resolve));
    assert_eq!(resolved.run.resolve_label(), "Resolved");
    assert_eq!(resolved.run.completed().len(), 5);
    assert_eq!(resolved.run.active_spinners().len(), 4);

    let again = resolved.clone().reduce(ExecutionAction::Sequencer(SequencerEvent::Resolve));
    assert!(Rc::ptr_eq(&resolved, &again));
}
