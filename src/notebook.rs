//! Jupyter notebook (nbformat 4) document model.
//!
//! Only the parts the renderer displays are modelled; cell metadata,
//! attachments and notebook-level metadata are ignored on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::NotebookError;

/// An ordered list of cells.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

/// One notebook cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        #[serde(deserialize_with = "lines")]
        source: Vec<String>,
    },
    Code {
        #[serde(default)]
        execution_count: Option<u32>,
        #[serde(deserialize_with = "lines")]
        source: Vec<String>,
        #[serde(default)]
        outputs: Vec<Output>,
    },
    Raw {
        #[serde(deserialize_with = "lines")]
        source: Vec<String>,
    },
}

/// One output record of a code cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    Stream {
        #[serde(default)]
        name: String,
        #[serde(deserialize_with = "lines")]
        text: Vec<String>,
    },
    ExecuteResult {
        #[serde(default)]
        execution_count: Option<u32>,
        #[serde(default)]
        data: MimeBundle,
    },
    DisplayData {
        #[serde(default)]
        data: MimeBundle,
    },
    Error {
        ename: String,
        evalue: String,
        #[serde(default)]
        traceback: Vec<String>,
    },
    /// Any `output_type` this model does not know.
    #[serde(other)]
    Unknown,
}

/// The representations of a rich output that can be displayed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MimeBundle {
    #[serde(rename = "text/html", default, deserialize_with = "optional_lines")]
    pub html: Option<Vec<String>>,
    #[serde(rename = "text/plain", default, deserialize_with = "optional_lines")]
    pub plain: Option<Vec<String>>,
}

impl Notebook {
    /// Parse an nbformat JSON document.
    pub fn from_json(json: &str) -> Result<Self, NotebookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a `.ipynb` file.
    pub fn load(path: &Path) -> Result<Self, NotebookError> {
        let json = fs::read_to_string(path).map_err(|source| NotebookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Join multi-line text the way nbformat stores it: each element already
/// carries its own line ending.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// nbformat allows multi-line text as a single string or a list of lines.
#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineText {
    One(String),
    Many(Vec<String>),
}

impl From<MultilineText> for Vec<String> {
    fn from(text: MultilineText) -> Self {
        match text {
            MultilineText::One(s) => vec![s],
            MultilineText::Many(lines) => lines,
        }
    }
}

fn lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    MultilineText::deserialize(deserializer).map(Into::into)
}

fn optional_lines<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    lines(deserializer).map(Some)
}
