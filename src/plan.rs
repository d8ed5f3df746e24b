//! The fixed ETL execution plan shown on the pipeline screen.

/// One named step of the execution plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    /// Stable identifier, unique within the plan.
    pub id: &'static str,
    /// Text shown in the step list.
    pub label: &'static str,
}

/// Step id of the X extractor, which opens the extractor source when clicked.
pub const X_EXTRACTOR: &str = "x-extractor";

/// Step id of the validation step, which opens the notebook and later
/// requires manual action.
pub const DATA_VALIDATION: &str = "data-validation";

pub const PLAN_STEPS: [PlanStep; 9] = [
    PlanStep {
        id: "sync-reddit",
        label: "Sync Reddit Data to S3 Data Lake with Airbyte",
    },
    PlanStep {
        id: X_EXTRACTOR,
        label: "Build Data Extractor for X API",
    },
    PlanStep {
        id: "bluesky-extractor",
        label: "Build Data Extractor for BlueSky API",
    },
    PlanStep {
        id: "load-snowflake",
        label: "Load Raw Data from S3 into Snowflake",
    },
    PlanStep {
        id: "dbt-staging",
        label: "Transform Raw Posts into Staging Models with dbt",
    },
    PlanStep {
        id: DATA_VALIDATION,
        label: "Data Exploration and Validation",
    },
    PlanStep {
        id: "sentiment",
        label: "Run Sentiment Analysis on Stock Mentions",
    },
    PlanStep {
        id: "trending",
        label: "Aggregate Weekly Trending Stocks",
    },
    PlanStep {
        id: "dashboard",
        label: "Publish Stock Trend Dashboard",
    },
];

/// Look up a step by its id.
pub fn step_by_id(id: &str) -> Option<(usize, &'static PlanStep)> {
    PLAN_STEPS.iter().enumerate().find(|(_, step)| step.id == id)
}

/// Look up a step by its position in the plan.
pub fn step_at(index: usize) -> Option<&'static PlanStep> {
    PLAN_STEPS.get(index)
}
