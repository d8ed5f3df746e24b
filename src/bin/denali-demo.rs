//! CLI companion to the web demo.
//!
//! Usage:
//!   denali-demo render <notebook.ipynb> [-o output.html]
//!   denali-demo render --embedded
//!   denali-demo timeline [--confirm-at MS] [--until MS]
//!
//! `render` writes a notebook as a standalone HTML page (stdout unless `-o`
//! is given). `timeline` prints the scripted plan run as it would unfold in
//! the browser.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use denali_demo::content;
use denali_demo::plan::step_at;
use denali_demo::render::{render_notebook, to_html_document};
use denali_demo::{Notebook, SequencerEvent, Timeline, Trust};

#[derive(Parser)]
#[command(name = "denali-demo", about = "Denali demo notebook renderer and plan simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a notebook to HTML.
    Render {
        /// Notebook file (.ipynb).
        #[arg(required_unless_present = "embedded")]
        notebook: Option<PathBuf>,
        /// Render the built-in validation notebook instead of a file.
        #[arg(long, conflicts_with = "notebook")]
        embedded: bool,
        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the simulated plan run.
    Timeline {
        /// When the user confirms the plan, in ms after the screen opens.
        #[arg(long, default_value_t = 2_000)]
        confirm_at: u32,
        /// How far to run the clock, in ms.
        #[arg(long, default_value_t = 10_000)]
        until: u32,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render {
            notebook,
            embedded,
            output,
        } => render(notebook.as_deref(), embedded, output.as_deref()),
        Command::Timeline { confirm_at, until } => timeline(confirm_at, until),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn render(
    notebook: Option<&Path>,
    embedded: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (doc, trust, title) = match notebook {
        Some(path) if !embedded => (
            Notebook::load(path)?,
            Trust::Untrusted,
            path.display().to_string(),
        ),
        _ => (
            content::validation_notebook()?,
            Trust::Embedded,
            "data_validation.ipynb".to_string(),
        ),
    };
    log::info!("rendering {} ({} cells)", title, doc.cells.len());

    let page = to_html_document(&title, &render_notebook(&doc, trust));

    match output {
        Some(out_path) => {
            if let Some(parent) = out_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(out_path, &page)?;
            eprintln!("Rendered {} cells -> {}", doc.cells.len(), out_path.display());
        }
        None => io::stdout().write_all(page.as_bytes())?,
    }
    Ok(())
}

fn timeline(confirm_at: u32, until: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut timeline = Timeline::default();
    let mut out = io::stdout().lock();

    let mut events = timeline.advance_to(confirm_at.min(until));
    if confirm_at <= until && timeline.confirm() {
        events.extend(timeline.fired().last().copied());
    } else {
        log::warn!("plan not confirmed at {}ms", confirm_at);
    }
    events.extend(timeline.advance_to(until));

    let mut revealed = 0;
    for scheduled in events {
        let what = match scheduled.event {
            SequencerEvent::Reveal => {
                revealed += 1;
                format!("reveal    {}", step_at(revealed - 1).map_or("", |s| s.label))
            }
            SequencerEvent::Confirm => "confirm   plan".to_string(),
            SequencerEvent::Complete(idx) => {
                format!("complete  {}", step_at(idx).map_or("", |s| s.label))
            }
            SequencerEvent::RequireAction => "action    required".to_string(),
            SequencerEvent::Resolve => "resolve".to_string(),
        };
        writeln!(out, "{:>6}ms  {}", scheduled.at_ms, what)?;
    }

    let run = timeline.run();
    writeln!(
        out,
        "visible={} running={} completed={} action_required={}",
        run.visible_count(),
        run.active_spinners().len(),
        run.completed().len(),
        run.action_required()
    )?;
    Ok(())
}

