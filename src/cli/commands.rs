use serde_json::Value;
use tracing::info;

use crate::aggregation::{aggregate::SelectionAggregate, model::AggregationPayload};
use crate::cli::config::AppConfig;
use crate::locale::{catalog::Language, localizer::Locale};
use crate::query::serializer::to_query;
use crate::structural::equality::deep_equals;
use crate::text::strings::{display_width, pad_display};

// ============================================================================
// summarize subcommand
// ============================================================================

pub fn cmd_summarize(
    payload_path: &str,
    lang: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload: AggregationPayload = serde_json::from_value(read_json(payload_path)?)?;
    let aggregate = SelectionAggregate::new(payload)?
        .with_custom_template_id(config.custom_template_id.clone());

    let language = lang
        .map(|l| l.parse::<Language>())
        .transpose()?
        .unwrap_or(config.language);
    let locale = Locale::new(language).with_overrides(&config.translations);

    info!(key = %aggregate.key(), %language, "summarizing aggregate");
    print!("{}", format_summary(&aggregate, &locale));
    Ok(())
}

/// Render the summary as aligned `label  value` lines.
pub fn format_summary(aggregate: &SelectionAggregate, locale: &Locale) -> String {
    let rows = [
        ("system", format!("{} ({})", aggregate.system_name, aggregate.system_id)),
        ("name", aggregate.name()),
        ("key", aggregate.key()),
        ("value", aggregate.value(locale)),
        ("template", aggregate.is_template().to_string()),
        ("instances", aggregate.instances.len().to_string()),
    ];

    let width = rows.iter().map(|(label, _)| display_width(label)).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in &rows {
        out.push_str(&pad_display(label, width + 2));
        out.push_str(value);
        out.push('\n');
    }
    out
}

// ============================================================================
// query subcommand
// ============================================================================

pub fn cmd_query(input_path: &str, prefix: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let value = read_json(input_path)?;
    println!("{}", to_query(&value, prefix)?);
    Ok(())
}

// ============================================================================
// compare subcommand
// ============================================================================

/// Compare two documents; returns whether they are equal.
pub fn cmd_compare(left: &str, right: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let equal = deep_equals(&read_json(left)?, &read_json(right)?);
    println!("{}", if equal { "equal" } else { "different" });
    Ok(equal)
}

// ============================================================================
// Helpers
// ============================================================================

pub fn read_json(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
