//! Notebook renderer.
//!
//! Maps each notebook cell to a display fragment, preserving document
//! order. Markdown is converted to HTML, code and stream output are kept as
//! literal text, rich results prefer their HTML representation.
//!
//! HTML produced for [`Trust::Embedded`] documents is passed through as-is.
//! That is only sound for content compiled into the binary. Anything read
//! at runtime must be rendered with [`Trust::Untrusted`], which escapes raw
//! HTML in markdown, neutralizes link and image targets outside
//! http/https/mailto/relative, and shows rich results as plain text.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use pulldown_cmark_escape::escape_html_body_text;

use crate::notebook::{Cell, MimeBundle, Notebook, Output, join_lines};

/// Shown in place of a notebook that failed to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading notebook";

/// Where a notebook came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
    /// Compiled-in constant; embedded HTML is displayed verbatim.
    Embedded,
    /// Read at runtime; embedded HTML is escaped.
    Untrusted,
}

/// Display fragment for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    Markdown {
        html: String,
    },
    Code {
        /// `In [n]`, or `In [ ]` for a cell that never ran.
        prompt: String,
        source: String,
        outputs: Vec<RenderedOutput>,
    },
    Raw {
        text: String,
    },
}

/// Display fragment for one code-cell output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    /// Preformatted literal text.
    Text(String),
    /// Markup to insert as-is.
    Html(String),
}

/// What the notebook viewer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookView {
    Rendered(Vec<RenderedCell>),
    Failed,
}

/// Render every cell of `notebook`, in order.
pub fn render_notebook(notebook: &Notebook, trust: Trust) -> Vec<RenderedCell> {
    notebook
        .cells
        .iter()
        .map(|cell| render_cell(cell, trust))
        .collect()
}

pub fn render_cell(cell: &Cell, trust: Trust) -> RenderedCell {
    match cell {
        Cell::Markdown { source } => RenderedCell::Markdown {
            html: markdown_to_html(&join_lines(source), trust),
        },
        Cell::Code {
            execution_count,
            source,
            outputs,
        } => RenderedCell::Code {
            prompt: prompt(*execution_count),
            source: join_lines(source),
            outputs: outputs
                .iter()
                .filter_map(|output| render_output(output, trust))
                .collect(),
        },
        Cell::Raw { source } => RenderedCell::Raw {
            text: join_lines(source),
        },
    }
}

/// Render a single output record. `None` means the output has nothing
/// displayable.
pub fn render_output(output: &Output, trust: Trust) -> Option<RenderedOutput> {
    match output {
        Output::Stream { text, .. } => Some(RenderedOutput::Text(stream_text(text))),
        Output::ExecuteResult { data, .. } | Output::DisplayData { data } => {
            render_mime_bundle(data, trust)
        }
        Output::Error { ename, evalue, .. } => {
            Some(RenderedOutput::Text(format!("{}: {}", ename, evalue)))
        }
        Output::Unknown => None,
    }
}

fn render_mime_bundle(data: &MimeBundle, trust: Trust) -> Option<RenderedOutput> {
    let html = data.html.as_deref().map(join_lines);
    let plain = data.plain.as_deref().map(join_lines);
    match trust {
        Trust::Embedded => html
            .map(RenderedOutput::Html)
            .or_else(|| plain.map(RenderedOutput::Text)),
        Trust::Untrusted => plain.or(html).map(RenderedOutput::Text),
    }
}

/// Stream chunks concatenated, without the final line ending.
fn stream_text(lines: &[String]) -> String {
    let text = join_lines(lines);
    match text.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

pub fn prompt(execution_count: Option<u32>) -> String {
    match execution_count {
        Some(n) => format!("In [{}]", n),
        None => "In [ ]".to_string(),
    }
}

/// Convert markdown to HTML.
pub fn markdown_to_html(source: &str, trust: Trust) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(move |event| match (trust, event) {
        (Trust::Untrusted, Event::Html(raw) | Event::InlineHtml(raw)) => Event::Text(raw),
        (Trust::Untrusted, Event::Start(Tag::Link { link_type, dest_url, title, id })) => {
            Event::Start(Tag::Link {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })
        }
        (Trust::Untrusted, Event::Start(Tag::Image { link_type, dest_url, title, id })) => {
            Event::Start(Tag::Image {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })
        }
        (_, event) => event,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Keep relative URLs and http, https and mailto targets; anything else
/// (`javascript:`, `data:`, `vbscript:`, ...) becomes an inert `#`.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(idx) if url[idx..].starts_with(':') => {
            let scheme = url[..idx].to_ascii_lowercase();
            if matches!(scheme.as_str(), "http" | "https" | "mailto") {
                url
            } else {
                log::warn!("render: dropped link target with scheme {:?}", scheme);
                CowStr::Borrowed("#")
            }
        }
        _ => url,
    }
}

/// Parse and render a compiled-in notebook for the viewer.
///
/// A document that fails to parse yields [`NotebookView::Failed`]; the
/// failure is logged, not propagated.
pub fn render_embedded(json: &str) -> NotebookView {
    match Notebook::from_json(json) {
        Ok(notebook) => NotebookView::Rendered(render_notebook(&notebook, Trust::Embedded)),
        Err(e) => {
            log::error!("notebook: {}", e);
            NotebookView::Failed
        }
    }
}

/// Wrap rendered cells into a standalone HTML page.
pub fn to_html_document(title: &str, cells: &[RenderedCell]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    push_escaped(&mut out, title);
    out.push_str("</title>\n</head>\n<body>\n<div class=\"notebook\">\n");

    for cell in cells {
        match cell {
            RenderedCell::Markdown { html } => {
                out.push_str("<div class=\"cell markdown-cell\">\n");
                out.push_str(html);
                out.push_str("</div>\n");
            }
            RenderedCell::Code {
                prompt,
                source,
                outputs,
            } => {
                out.push_str("<div class=\"cell code-cell\">\n<div class=\"prompt\">");
                push_escaped(&mut out, prompt);
                out.push_str("</div>\n<pre class=\"source\"><code>");
                push_escaped(&mut out, source);
                out.push_str("</code></pre>\n");
                if !outputs.is_empty() {
                    out.push_str("<div class=\"outputs\">\n");
                    for output in outputs {
                        match output {
                            RenderedOutput::Text(text) => {
                                out.push_str("<pre>");
                                push_escaped(&mut out, text);
                                out.push_str("</pre>\n");
                            }
                            RenderedOutput::Html(html) => {
                                out.push_str(html);
                                out.push('\n');
                            }
                        }
                    }
                    out.push_str("</div>\n");
                }
                out.push_str("</div>\n");
            }
            RenderedCell::Raw { text } => {
                out.push_str("<div class=\"cell raw-cell\"><pre>");
                push_escaped(&mut out, text);
                out.push_str("</pre></div>\n");
            }
        }
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Append element body text, escaped.
fn push_escaped(out: &mut String, text: &str) {
    // Writing into a String is infallible.
    let _ = escape_html_body_text(&mut *out, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn code(outputs: Vec<Output>) -> Cell {
        Cell::Code {
            execution_count: Some(2),
            source: lines(&["x = 1\n", "print(x)"]),
            outputs,
        }
    }

    fn result(html: Option<&str>, plain: Option<&str>) -> Output {
        Output::ExecuteResult {
            execution_count: Some(2),
            data: MimeBundle {
                html: html.map(|h| lines(&[h])),
                plain: plain.map(|p| lines(&[p])),
            },
        }
    }

    #[test]
    fn test_render_preserves_order() {
        let notebook = Notebook {
            cells: vec![
                Cell::Markdown {
                    source: lines(&["# One"]),
                },
                code(vec![]),
                Cell::Markdown {
                    source: lines(&["## Two"]),
                },
            ],
        };

        let rendered = render_notebook(&notebook, Trust::Embedded);

        assert_eq!(rendered.len(), 3);
        assert!(matches!(&rendered[0], RenderedCell::Markdown { html } if html.contains("<h1>One</h1>")));
        assert!(matches!(&rendered[1], RenderedCell::Code { .. }));
        assert!(matches!(&rendered[2], RenderedCell::Markdown { html } if html.contains("<h2>Two</h2>")));
    }

    #[test]
    fn test_code_cell_without_outputs() {
        let rendered = render_cell(&code(vec![]), Trust::Embedded);
        assert_eq!(
            rendered,
            RenderedCell::Code {
                prompt: "In [2]".to_string(),
                source: "x = 1\nprint(x)".to_string(),
                outputs: vec![],
            }
        );
    }

    #[test]
    fn test_stream_output_is_concatenated() {
        let stream = Output::Stream {
            name: "stdout".to_string(),
            text: lines(&["a\n", "b\n"]),
        };
        let RenderedCell::Code { outputs, .. } = render_cell(&code(vec![stream]), Trust::Embedded)
        else {
            panic!("Expected Code");
        };
        assert_eq!(outputs, vec![RenderedOutput::Text("a\nb".to_string())]);
    }

    #[test]
    fn test_blank_prompt() {
        assert_eq!(prompt(None), "In [ ]");
        assert_eq!(prompt(Some(12)), "In [12]");
    }

    #[test]
    fn test_result_prefers_html() {
        let out = render_output(&result(Some("<table></table>"), Some("df")), Trust::Embedded);
        assert_eq!(out, Some(RenderedOutput::Html("<table></table>".to_string())));
    }

    #[test]
    fn test_result_falls_back_to_plain() {
        let out = render_output(&result(None, Some("42")), Trust::Embedded);
        assert_eq!(out, Some(RenderedOutput::Text("42".to_string())));

        let out = render_output(&result(None, None), Trust::Embedded);
        assert_eq!(out, None);
    }

    #[test]
    fn test_unknown_output_is_skipped() {
        let RenderedCell::Code { outputs, .. } =
            render_cell(&code(vec![Output::Unknown, result(None, Some("1"))]), Trust::Embedded)
        else {
            panic!("Expected Code");
        };
        assert_eq!(outputs, vec![RenderedOutput::Text("1".to_string())]);
    }

    #[test]
    fn test_error_output() {
        let err = Output::Error {
            ename: "KeyError".to_string(),
            evalue: "'ticker'".to_string(),
            traceback: vec![],
        };
        assert_eq!(
            render_output(&err, Trust::Embedded),
            Some(RenderedOutput::Text("KeyError: 'ticker'".to_string()))
        );
    }

    #[test]
    fn test_markdown_inline_code_and_lists() {
        let html = markdown_to_html("- `social_posts`: posts\n- two", Trust::Embedded);
        assert!(html.contains("<ul>"));
        assert!(html.contains("<code>social_posts</code>"));
    }

    #[test]
    fn test_untrusted_markdown_escapes_html() {
        let src = "hello <script>alert(1)</script>\n";
        let trusted = markdown_to_html(src, Trust::Embedded);
        let untrusted = markdown_to_html(src, Trust::Untrusted);
        assert!(trusted.contains("<script>"));
        assert!(!untrusted.contains("<script>"));
        assert!(untrusted.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_untrusted_markdown_neutralizes_script_links() {
        let src = "[click](javascript:alert(1)) ![img](JavaScript:x) [data](data:text/html,hi)";
        let html = markdown_to_html(src, Trust::Untrusted);
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains("data:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("src=\"#\""));
    }

    #[test]
    fn test_untrusted_markdown_keeps_safe_links() {
        let src = "[a](https://example.com/x?y=1) [b](mailto:me@example.com) [c](docs/page.md) [d](#top)";
        let html = markdown_to_html(src, Trust::Untrusted);
        assert!(html.contains("href=\"https://example.com/x?y=1\""));
        assert!(html.contains("href=\"mailto:me@example.com\""));
        assert!(html.contains("href=\"docs/page.md\""));
        assert!(html.contains("href=\"#top\""));
    }

    #[test]
    fn test_embedded_markdown_links_untouched() {
        let html = markdown_to_html("[x](javascript:void(0))", Trust::Embedded);
        assert!(html.contains("javascript:void(0)"));
    }

    #[test]
    fn test_untrusted_result_prefers_plain() {
        let out = render_output(&result(Some("<b>x</b>"), Some("x")), Trust::Untrusted);
        assert_eq!(out, Some(RenderedOutput::Text("x".to_string())));

        let out = render_output(&result(Some("<b>x</b>"), None), Trust::Untrusted);
        assert_eq!(out, Some(RenderedOutput::Text("<b>x</b>".to_string())));
    }

    #[test]
    fn test_render_embedded_failure() {
        assert_eq!(render_embedded("{\"cells\": 7}"), NotebookView::Failed);
    }

    #[test]
    fn test_html_document_escapes_code() {
        let cells = vec![RenderedCell::Code {
            prompt: "In [1]".to_string(),
            source: "a < b".to_string(),
            outputs: vec![],
        }];
        let page = to_html_document("<nb>", &cells);
        assert!(page.contains("a &lt; b"));
        assert!(page.contains("<title>&lt;nb&gt;</title>"));
        assert!(!page.contains("class=\"outputs\""));
    }
}
