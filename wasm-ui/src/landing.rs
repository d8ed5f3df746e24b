//! Landing screen: the question box.

use denali_demo::prompt;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{PromptState, Route};
use crate::components::Header;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let input_text = use_state(String::new);
    let navigator = use_navigator();

    let on_input = {
        let input_text = input_text.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input_text.set(target.value());
        })
    };

    let on_send = {
        let input_text = input_text.clone();
        Callback::from(move |()| match prompt::submit(&input_text) {
            Some(text) => {
                if let Some(navigator) = &navigator {
                    log::info!("landing: asking {:?}", text);
                    navigator.push_with_state(&Route::Sources, PromptState(text));
                }
            }
            None => log::debug!("landing: blank question ignored"),
        })
    };

    let on_keydown = {
        let on_send = on_send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_send.emit(());
            }
        })
    };

    html! {
        <div class="landing">
            <Header />
            <main class="main-content">
                <h1 class="hero-text">
                    { "I'm Your Data Engineer. What Would You Like To Analyze Today?" }
                </h1>
                <div class="chat-container">
                    <div class="chat-input-container">
                        <input
                            type="text"
                            class="chat-input"
                            placeholder="Ask me about your data..."
                            value={(*input_text).clone()}
                            oninput={on_input}
                            onkeydown={on_keydown}
                        />
                        <button class="send-button" onclick={on_send.reform(|_: MouseEvent| ())}>
                            { "Send" }
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
