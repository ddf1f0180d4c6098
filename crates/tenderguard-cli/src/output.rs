//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tenderguard_domain::Person;
use tenderguard_gatekeeper::{ScreeningResult, ScreeningStatus};
use tenderguard_interception::InterceptionRoute;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single person.
    pub fn format_person(&self, person: &Person) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&person_json(person))?),
            OutputFormat::Table => {
                let join = |ids: &[tenderguard_domain::PersonId]| {
                    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
                };

                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["PINFL", &person.id.to_string()]);
                builder.push_record(["Name", &person.full_name()]);
                builder.push_record(["Gender", person.gender.as_str()]);
                builder.push_record(["Relation", person.relation.as_str()]);
                builder.push_record(["Descendants", &join(&person.descendants)]);
                builder.push_record(["Ancestors", &join(&person.ancestors)]);

                Ok(self.render(builder))
            }
        }
    }

    /// Format an interception route.
    pub fn format_route(&self, route: &InterceptionRoute<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let persons: Vec<serde_json::Value> =
                    route.persons().iter().map(|p| person_json(p)).collect();
                let value = serde_json::json!({
                    "connected": !route.is_empty(),
                    "hops": route.hops(),
                    "route": persons,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if route.is_empty() {
                    return Ok(self.colorize("No interception route found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "PINFL", "Name", "Relation"]);
                for (step, person) in route.persons().iter().enumerate() {
                    builder.push_record([
                        step.to_string().as_str(),
                        &person.id.to_string(),
                        &person.full_name(),
                        person.relation.as_str(),
                    ]);
                }

                Ok(self.render(builder))
            }
        }
    }

    /// Format a screening verdict.
    pub fn format_screening(&self, result: &ScreeningResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let reasons: Vec<serde_json::Value> = result
                    .reasons
                    .iter()
                    .map(|r| serde_json::json!({ "code": r.code(), "message": r.to_string() }))
                    .collect();
                let route: Vec<u64> = result.route.iter().map(|id| id.value()).collect();
                let value = serde_json::json!({
                    "status": result.status.as_str(),
                    "reasons": reasons,
                    "route": route,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if result.status == ScreeningStatus::Accepted {
                    return Ok(self.success("Bid accepted"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Code", "Reason"]);
                for reason in &result.reasons {
                    builder.push_record([reason.code(), &reason.to_string()]);
                }

                Ok(format!("{}\n{}", self.error("Bid rejected"), self.render(builder)))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn person_json(person: &Person) -> serde_json::Value {
    serde_json::json!({
        "pinfl": person.id.value(),
        "firstname": person.first_name,
        "lastname": person.last_name,
        "gender": person.gender.as_str(),
        "type": person.relation.as_str(),
        "children": person.descendants.iter().map(|id| id.value()).collect::<Vec<_>>(),
        "parents": person.ancestors.iter().map(|id| id.value()).collect::<Vec<_>>(),
    })
}
