//! File viewers: the extractor source and the validation notebook.

use denali_demo::content::{DATA_VALIDATION_NOTEBOOK, TWITTER_EXTRACTOR_CODE};
use denali_demo::render::{LOAD_ERROR_MESSAGE, render_embedded};
use denali_demo::{NotebookView, OpenFile, RenderedCell, RenderedOutput};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileViewProps {
    pub on_back: Callback<()>,
}

fn file_header(file: OpenFile, on_back: &Callback<()>) -> Html {
    html! {
        <div class="file-header">
            <button class="back-button" onclick={on_back.reform(|_: MouseEvent| ())}>
                { "← Back to pipeline" }
            </button>
            <span class="file-name">{ file.label() }</span>
        </div>
    }
}

/// Read-only listing of the generated extractor.
#[function_component(CodeFileView)]
pub fn code_file_view(props: &FileViewProps) -> Html {
    html! {
        <div class="file-view code-view">
            { file_header(OpenFile::ExtractorCode, &props.on_back) }
            <div class="code-block">
                <pre>
                    <code class="language-python">{ TWITTER_EXTRACTOR_CODE }</code>
                </pre>
            </div>
        </div>
    }
}

fn output_html(output: &RenderedOutput) -> Html {
    match output {
        RenderedOutput::Text(text) => html! { <pre class="output-text">{ text }</pre> },
        RenderedOutput::Html(markup) => html! {
            <div class="output-html">{ Html::from_html_unchecked(AttrValue::from(markup.clone())) }</div>
        },
    }
}

fn cell_html(cell: &RenderedCell) -> Html {
    match cell {
        RenderedCell::Markdown { html } => html! {
            <div class="cell markdown-cell">
                { Html::from_html_unchecked(AttrValue::from(html.clone())) }
            </div>
        },
        RenderedCell::Code {
            prompt,
            source,
            outputs,
        } => html! {
            <div class="cell code-cell">
                <div class="cell-input">
                    <span class="prompt">{ prompt }</span>
                    <pre class="cell-source"><code class="language-python">{ source }</code></pre>
                </div>
                if !outputs.is_empty() {
                    <div class="cell-outputs">
                        { for outputs.iter().map(output_html) }
                    </div>
                }
            </div>
        },
        RenderedCell::Raw { text } => html! {
            <div class="cell raw-cell"><pre>{ text }</pre></div>
        },
    }
}

/// The validation notebook, rendered once per mount.
#[function_component(NotebookFileView)]
pub fn notebook_file_view(props: &FileViewProps) -> Html {
    let view = use_memo((), |_| render_embedded(DATA_VALIDATION_NOTEBOOK));

    html! {
        <div class="file-view notebook-view">
            { file_header(OpenFile::ValidationNotebook, &props.on_back) }
            <div class="notebook">
                { match &*view {
                    NotebookView::Rendered(cells) => cells.iter().map(cell_html).collect::<Html>(),
                    NotebookView::Failed => html! {
                        <div class="error">{ LOAD_ERROR_MESSAGE }</div>
                    },
                }}
            </div>
        </div>
    }
}
