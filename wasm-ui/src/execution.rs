//! Execution screen: the plan, its scripted run and the file viewers.
//!
//! Timers:
//! - Reveal: one `Timeout` at a time, re-armed whenever the visible count
//!   changes, until the whole plan is shown.
//! - Execution: all completion and action timers are armed together when
//!   the plan is confirmed.
//!
//! Every handle is owned by the effect that armed it and cancelled in its
//! cleanup, so nothing fires after the screen unmounts.

use denali_demo::content::{ACTION_REQUIRED_REPLY, PLAN_REPLY};
use denali_demo::{SequencerEvent, SubView, prompt};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::app::use_carried_prompt;
use crate::components::{ChatSide, FileTabs, StepList};
use crate::notebook_view::{CodeFileView, NotebookFileView};
use crate::state::{ExecutionAction, ExecutionState};

#[function_component(ExecutionPage)]
pub fn execution_page() -> Html {
    let carried = use_carried_prompt();
    let state = use_reducer(ExecutionState::default);

    // Reveal ticker
    {
        let dispatcher = state.dispatcher();
        let visible = state.run.visible_count();
        let pending = state.run.reveal_pending();
        let interval = state.run.config().reveal_interval_ms;

        use_effect_with((visible, pending), move |&(_, pending)| {
            let handle = pending.then(|| {
                Timeout::new(interval, move || {
                    dispatcher.dispatch(ExecutionAction::Sequencer(SequencerEvent::Reveal));
                })
            });

            move || {
                if let Some(handle) = handle {
                    handle.cancel();
                }
            }
        });
    }

    // Execution timers
    {
        let dispatcher = state.dispatcher();
        let schedule = state.run.execution_schedule();

        use_effect_with(state.run.confirmed(), move |&confirmed| {
            let handles: Vec<Timeout> = if confirmed {
                log::info!("execution: arming {} timers", schedule.len());
                schedule
                    .into_iter()
                    .map(|scheduled| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(scheduled.at_ms, move || {
                            dispatcher.dispatch(ExecutionAction::Sequencer(scheduled.event));
                        })
                    })
                    .collect()
            } else {
                Vec::new()
            };

            move || {
                for handle in handles {
                    handle.cancel();
                }
            }
        });
    }

    let on_confirm = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ExecutionAction::Sequencer(SequencerEvent::Confirm));
        })
    };

    let on_resolve = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ExecutionAction::Sequencer(SequencerEvent::Resolve));
        })
    };

    let on_step_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(ExecutionAction::ClickStep(id)))
    };

    let on_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |file| dispatcher.dispatch(ExecutionAction::SelectTab(file)))
    };

    let on_back = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(ExecutionAction::Back))
    };

    let run = &state.run;
    let view = &state.view;

    html! {
        <div class="chat-page">
            <ChatSide prompt={prompt::carried(carried.as_deref()).to_string()}>
                <div class="ai-message">
                    <div class="message-content">{ PLAN_REPLY }</div>
                    <button
                        class="confirm-button"
                        disabled={!run.can_confirm()}
                        onclick={on_confirm}
                    >
                        { run.confirm_label() }
                    </button>
                </div>
                if run.action_required() {
                    <div class="ai-message">
                        <div class="message-content">{ ACTION_REQUIRED_REPLY }</div>
                        <button
                            class="confirm-button"
                            disabled={!run.can_resolve()}
                            onclick={on_resolve}
                        >
                            { run.resolve_label() }
                        </button>
                    </div>
                }
            </ChatSide>
            <div class="visualization-side">
                <FileTabs
                    files={view.open_files().to_vec()}
                    active={view.sub_view()}
                    on_select={on_tab}
                />
                <div class="execution-plan">
                    { match view.sub_view() {
                        SubView::Pipeline => html! {
                            <div class="etl-panel">
                                <div class="panel-title">{ "ETL Pipeline" }</div>
                                <StepList statuses={run.statuses()} on_click={on_step_click} />
                            </div>
                        },
                        SubView::Code => html! { <CodeFileView {on_back} /> },
                        SubView::Notebook => html! { <NotebookFileView {on_back} /> },
                    }}
                </div>
            </div>
        </div>
    }
}
