//! Data-source selection screen.
//!
//! The checkboxes are purely local: confirming always moves on to the
//! execution screen, whatever is ticked.

use std::collections::BTreeSet;

use denali_demo::content::{DATA_SOURCES, DataSource, SOURCES_REPLY, data_source};
use denali_demo::prompt;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_carried_prompt};
use crate::components::ChatSide;

#[derive(Properties, PartialEq)]
struct SchemaPanelProps {
    source: &'static DataSource,
}

#[function_component(SchemaPanel)]
fn schema_panel(props: &SchemaPanelProps) -> Html {
    html! {
        <div class="schema-section">
            <div class="schema-header">
                <h3>{ props.source.schema_title() }</h3>
            </div>
            <div class="schema-card">
                <div class="schema-content">
                    { for props.source.schema.iter().map(|field| html! {
                        <div class={classes!("schema-field", field.nested.then_some("nested"))}>
                            <span class="field-name">{ field.name }</span>
                            <span class="field-type">{ field.ty }</span>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

#[function_component(SourcesPage)]
pub fn sources_page() -> Html {
    let carried = use_carried_prompt();
    let navigator = use_navigator();
    let ticked = use_state(BTreeSet::<&'static str>::new);
    let shown_schema = use_state(|| None::<&'static str>);

    let on_confirm = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            log::info!("sources: plan confirmed");
            navigator.push(&Route::Execution);
        }
    });

    let on_toggle = {
        let ticked = ticked.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*ticked).clone();
            if !next.remove(id) {
                next.insert(id);
            }
            ticked.set(next);
        })
    };

    let on_schema = {
        let shown_schema = shown_schema.clone();
        Callback::from(move |id: &'static str| shown_schema.set(Some(id)))
    };

    html! {
        <div class="chat-page">
            <ChatSide prompt={prompt::carried(carried.as_deref()).to_string()}>
                <div class="ai-message">
                    <div class="message-content">{ SOURCES_REPLY }</div>
                    <button class="confirm-button" onclick={on_confirm}>{ "Confirm" }</button>
                </div>
            </ChatSide>
            <div class="visualization-side">
                <div class="search-panel">
                    <div class="browser-mockup">
                        <div class="browser-header">
                            <div class="browser-controls">
                                <span class="browser-dot"></span>
                                <span class="browser-dot"></span>
                                <span class="browser-dot"></span>
                            </div>
                            <div class="browser-address-bar">{ "denali/search/" }</div>
                        </div>
                        <div class="browser-content">
                            <div class="panel-title">{ "External Data Sources" }</div>
                            { for DATA_SOURCES.iter().map(|source| {
                                let id = source.id;
                                html! {
                                    <div class="api-card" key={id}>
                                        <div class="api-card-label">
                                            <label class="api-card-left">
                                                <input
                                                    type="checkbox"
                                                    checked={ticked.contains(id)}
                                                    onclick={on_toggle.reform(move |_: MouseEvent| id)}
                                                />
                                                <span class="api-card-title">{ source.name }</span>
                                            </label>
                                            <div class="api-card-actions">
                                                if source.via_airbyte {
                                                    <span class="airbyte-badge">{ "Airbyte" }</span>
                                                }
                                                <button class="send-button" onclick={on_schema.reform(move |_: MouseEvent| id)}>
                                                    { "Schema" }
                                                </button>
                                            </div>
                                        </div>
                                        <div class="api-meta">{ source.meta }</div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                    if let Some(source) = shown_schema.and_then(data_source) {
                        <SchemaPanel {source} />
                    }
                </div>
            </div>
        </div>
    }
}
