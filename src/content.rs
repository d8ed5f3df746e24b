//! Mock content shown by the demo.
//!
//! Everything here is display data. None of the referenced services are
//! ever contacted.

use crate::error::NotebookError;
use crate::notebook::Notebook;

/// Python source shown for the X extractor step.
pub const TWITTER_EXTRACTOR_CODE: &str = include_str!("../content/twitter_extractor.py");

/// nbformat document shown for the validation step.
pub const DATA_VALIDATION_NOTEBOOK: &str = include_str!("../content/data_validation.ipynb");

/// Title of the conversation on the chat screens.
pub const CONVERSATION_TITLE: &str = "Stock Trend Analysis Based On Social Media Sentiment Analysis";

pub const SOURCES_REPLY: &str = "I have identified multiple social media platforms with a public API \
     to pull data from. Please select which APIs you would like to use and confirm.";

pub const PLAN_REPLY: &str = "Here is the execution plan for your pipeline. Raw posts land in the \
     S3 data lake, get loaded into Snowflake and are modelled with dbt before validation and \
     sentiment analysis. Confirm to start running it.";

pub const ACTION_REQUIRED_REPLY: &str = "Validation found duplicate post/ticker rows and extreme \
     sentiment scores. Review the data_validation notebook and mark the step as resolved.";

/// One field of a source's response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub ty: &'static str,
    /// Member of the preceding object field.
    pub nested: bool,
}

const fn field(name: &'static str, ty: &'static str) -> SchemaField {
    SchemaField {
        name,
        ty,
        nested: false,
    }
}

const fn nested(name: &'static str, ty: &'static str) -> SchemaField {
    SchemaField {
        name,
        ty,
        nested: true,
    }
}

/// A social-media API offered on the source selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub id: &'static str,
    pub name: &'static str,
    pub meta: &'static str,
    /// Synced through an Airbyte connector rather than a custom extractor.
    pub via_airbyte: bool,
    pub schema: &'static [SchemaField],
}

impl DataSource {
    pub fn schema_title(&self) -> String {
        format!("{} Schema", self.name)
    }
}

pub const DATA_SOURCES: [DataSource; 3] = [
    DataSource {
        id: "bluesky",
        name: "BlueSky API",
        meta: "Format: JSON | Rate Limit: 10 requests per minute | Cost: Free",
        via_airbyte: false,
        schema: &[
            field("post_id", "string"),
            field("author", "object"),
            nested("did", "string"),
            nested("handle", "string"),
            field("content", "object"),
            nested("text", "string"),
            nested("facets", "array"),
            field("indexedAt", "string (ISO date)"),
            field("likeCount", "integer"),
            field("repostCount", "integer"),
        ],
    },
    DataSource {
        id: "reddit",
        name: "Reddit API",
        meta: "Format: JSON | Rate Limit: 100 requests per minute | Cost: Premium",
        via_airbyte: true,
        schema: &[
            field("id", "string"),
            field("subreddit", "string"),
            field("title", "string"),
            field("author", "string"),
            field("selftext", "string"),
            field("created_utc", "integer (unix timestamp)"),
            field("ups", "integer"),
            field("downs", "integer"),
            field("num_comments", "integer"),
            field("post_hint", "string"),
        ],
    },
    DataSource {
        id: "xapi",
        name: "X API",
        meta: "Format: JSON | Rate Limit: 100 requests per minute | Cost: Premium",
        via_airbyte: false,
        schema: &[
            field("id", "string"),
            field("text", "string"),
            field("user", "object"),
            nested("id", "string"),
            nested("name", "string"),
            nested("username", "string"),
            nested("verified", "boolean"),
            field("created_at", "string (ISO date)"),
            field("public_metrics", "object"),
            nested("retweet_count", "integer"),
            nested("reply_count", "integer"),
            nested("like_count", "integer"),
            nested("quote_count", "integer"),
        ],
    },
];

pub fn data_source(id: &str) -> Option<&'static DataSource> {
    DATA_SOURCES.iter().find(|s| s.id == id)
}

/// The embedded validation notebook.
pub fn validation_notebook() -> Result<Notebook, NotebookError> {
    Notebook::from_json(DATA_VALIDATION_NOTEBOOK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::{Cell, Output};
    use crate::render::{NotebookView, RenderedCell, render_embedded};

    #[test]
    fn test_embedded_notebook_parses() {
        let nb = validation_notebook().unwrap();
        assert_eq!(nb.cells.len(), 16);
        assert!(matches!(nb.cells[0], Cell::Markdown { .. }));
        assert!(matches!(
            nb.cells[1],
            Cell::Code {
                execution_count: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn test_embedded_notebook_has_no_unknown_outputs() {
        let nb = validation_notebook().unwrap();
        for cell in &nb.cells {
            if let Cell::Code { outputs, .. } = cell {
                assert!(outputs.iter().all(|o| *o != Output::Unknown));
            }
        }
    }

    #[test]
    fn test_embedded_notebook_renders() {
        let NotebookView::Rendered(cells) = render_embedded(DATA_VALIDATION_NOTEBOOK) else {
            panic!("Expected rendered notebook");
        };
        assert_eq!(cells.len(), 16);
        match &cells[0] {
            RenderedCell::Markdown { html } => {
                assert!(html.contains("<h1>Social Media Stock Mentions Data Validation and Analysis</h1>"));
                assert!(html.contains("<code>social_posts</code>"));
            }
            other => panic!("Expected Markdown, got {:?}", other),
        }
    }

    #[test]
    fn test_extractor_code_is_python() {
        assert!(TWITTER_EXTRACTOR_CODE.starts_with("import tweepy"));
        assert!(TWITTER_EXTRACTOR_CODE.contains("def upload_to_s3"));
    }

    #[test]
    fn test_sources() {
        assert_eq!(DATA_SOURCES.len(), 3);
        let reddit = data_source("reddit").unwrap();
        assert!(reddit.via_airbyte);
        assert_eq!(reddit.schema_title(), "Reddit API Schema");
        assert_eq!(data_source("xapi").unwrap().schema.len(), 13);
        assert!(data_source("mastodon").is_none());
    }
}
