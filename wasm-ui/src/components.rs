//! UI components shared by the screens.

use denali_demo::content::CONVERSATION_TITLE;
use denali_demo::{OpenFile, PLAN_STEPS, StepStatus, SubView};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Stacked-layers mark used in the header and chat title.
fn logo(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 32 32" fill="none" class="logo-mark">
            <path d="M16 2L2 10L16 18L30 10L16 2Z" fill="#4CAF50" />
            <path d="M16 20L2 12V26L16 30V20Z" fill="#4CAF50" />
            <path d="M16 20L30 12V26L16 30V20Z" fill="#4CAF50" />
        </svg>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <Link<Route> to={Route::Landing} classes={classes!("logo-container")}>
                { logo(32) }
                <span class="company-name">{ "Denali" }</span>
            </Link<Route>>
            <nav class="nav-links">
                <a href="/pricing">{ "Pricing" }</a>
                <a href="/docs">{ "Docs" }</a>
                <a href="/signin">{ "Sign In" }</a>
                <a href="/get-started">{ "Get Started" }</a>
            </nav>
        </header>
    }
}

/// Conversation column: the user's question, then the assistant's turns.
#[derive(Properties, PartialEq)]
pub struct ChatSideProps {
    pub prompt: String,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ChatSide)]
pub fn chat_side(props: &ChatSideProps) -> Html {
    html! {
        <div class="chat-side">
            <div class="chat-header">
                { logo(20) }
                { CONVERSATION_TITLE }
            </div>
            <div class="chat-history">
                <div class="user-message">
                    <div class="message-content">{ &props.prompt }</div>
                </div>
                { props.children.clone() }
            </div>
            <div class="chat-input-container">
                <input type="text" class="chat-input" placeholder="Continue the conversation..." />
                <button class="send-button">{ "Send" }</button>
            </div>
        </div>
    }
}

/// Execution plan step list. Only revealed steps are shown.
#[derive(Properties, PartialEq)]
pub struct StepListProps {
    pub statuses: Vec<StepStatus>,
    pub on_click: Callback<&'static str>,
}

#[function_component(StepList)]
pub fn step_list(props: &StepListProps) -> Html {
    html! {
        <div class="etl-status">
            <div class="status-header">{ "Execution Plan" }</div>
            { for PLAN_STEPS.iter().zip(props.statuses.iter()).filter(|(_, status)| **status != StepStatus::Pending).map(|(step, status)| {
                let (class, icon) = match status {
                    StepStatus::Queued => ("queued", "○"),
                    StepStatus::Running => ("in-progress", "⟳"),
                    StepStatus::Completed => ("success", "✓"),
                    StepStatus::Blocked => ("blocked", "⚠"),
                    StepStatus::Pending => ("pending", ""),
                };
                let clickable = OpenFile::for_step(step.id).is_some();
                let id = step.id;
                html! {
                    <div
                        key={id}
                        class={classes!("status-item", class, clickable.then_some("clickable"))}
                        onclick={props.on_click.reform(move |_: MouseEvent| id)}
                    >
                        <span class={classes!("status-icon", (*status == StepStatus::Running).then_some("spinner"))}>
                            { icon }
                        </span>
                        <span class="step-label">{ step.label }</span>
                        if *status == StepStatus::Blocked {
                            <span class="action-required">{ "Action Required" }</span>
                        }
                    </div>
                }
            })}
        </div>
    }
}

/// Strip of files opened during the session.
#[derive(Properties, PartialEq)]
pub struct FileTabsProps {
    pub files: Vec<OpenFile>,
    pub active: SubView,
    pub on_select: Callback<OpenFile>,
}

#[function_component(FileTabs)]
pub fn file_tabs(props: &FileTabsProps) -> Html {
    if props.files.is_empty() {
        return html! {};
    }

    html! {
        <div class="tabs-container">
            { for props.files.iter().map(|&file| {
                let active = file.sub_view() == props.active;
                html! {
                    <button
                        key={file.label()}
                        class={classes!("tab", active.then_some("active"))}
                        onclick={props.on_select.reform(move |_: MouseEvent| file)}
                    >
                        { file.label() }
                    </button>
                }
            })}
        </div>
    }
}
