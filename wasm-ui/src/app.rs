//! Main application component and routes.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::execution::ExecutionPage;
use crate::landing::LandingPage;
use crate::sources::SourcesPage;

/// Top-level screens. Only explicit user actions navigate between them.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/chat")]
    Sources,
    #[at("/pipeline-steps")]
    Execution,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Question carried from the landing screen as history state.
#[derive(Clone, PartialEq, Debug)]
pub struct PromptState(pub String);

fn switch(route: Route) -> Html {
    log::debug!("route: {:?}", route);
    match route {
        Route::Landing | Route::NotFound => html! { <LandingPage /> },
        Route::Sources => html! { <SourcesPage /> },
        Route::Execution => html! { <ExecutionPage /> },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <Switch<Route> render={switch} />
                <footer class="footer">
                    <span class="footer-left">{ "Denali | Demo build, no data leaves your browser" }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </footer>
            </div>
        </BrowserRouter>
    }
}

/// The question carried to the current screen, if any.
#[hook]
pub fn use_carried_prompt() -> Option<String> {
    use_location()
        .and_then(|location| location.state::<PromptState>())
        .map(|state| state.0.clone())
}
