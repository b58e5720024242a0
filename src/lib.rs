//! Selection aggregation for the permission console, plus the structural
//! helpers it leans on: deep equality and query-string flattening over
//! `serde_json::Value`.

pub mod aggregation;
pub mod cli;
pub mod locale;
pub mod query;
pub mod structural;
pub mod telemetry;
pub mod text;

pub use aggregation::{
    aggregate::SelectionAggregate, error::AggregateError, model::AggregationPayload,
};
pub use query::serializer::{QueryError, to_query};
pub use structural::equality::deep_equals;
