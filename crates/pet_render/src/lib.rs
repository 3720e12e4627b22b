//! Text and JSON report rendering for the pet tuning tools. Keeping both
//! output styles here leaves the binaries as flag parsing plus one core call.

use std::fmt::Write as _;

use pet_core::sim::SimReport;
use pet_core::stage::Stage;
use serde_json::{Map as JsonMap, Value as JsonValue};

const WARNING_PREFIX: &str = "! ";

// ---------------------------------------------------------------------------
// EXP preview
// ---------------------------------------------------------------------------

/// `estimated_exp=<n>`, plus a `stage=<Stage>` line when requested.
pub fn exp_text(estimated_exp: u64, stage: Option<Stage>) -> String {
    let mut out = format!("estimated_exp={estimated_exp}\n");
    if let Some(stage) = stage {
        let _ = writeln!(out, "stage={stage}");
    }
    out
}

pub fn exp_json(
    active_minutes: u64,
    input_events: u64,
    daily_cap: u64,
    estimated_exp: u64,
    stage: Option<Stage>,
) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("active_minutes".to_string(), JsonValue::from(active_minutes));
    out.insert("input_events".to_string(), JsonValue::from(input_events));
    out.insert("daily_cap".to_string(), JsonValue::from(daily_cap));
    out.insert("estimated_exp".to_string(), JsonValue::from(estimated_exp));
    if let Some(stage) = stage {
        out.insert(
            "stage".to_string(),
            JsonValue::String(stage.as_str().to_string()),
        );
    }
    JsonValue::Object(out)
}

// ---------------------------------------------------------------------------
// Stat simulation
// ---------------------------------------------------------------------------

/// The run header followed by the four end-state stats, one decimal each.
pub fn simulation_text(report: &SimReport, warnings: Option<&[&str]>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "minutes={}, tick={}", report.minutes, report.tick);
    let _ = writeln!(out, "hunger={:.1}", report.stats.hunger);
    let _ = writeln!(out, "happiness={:.1}", report.stats.happiness);
    let _ = writeln!(out, "cleanliness={:.1}", report.stats.cleanliness);
    let _ = writeln!(out, "health={:.1}", report.stats.health);
    if let Some(warnings) = warnings {
        for warning in warnings {
            let _ = writeln!(out, "{WARNING_PREFIX}{warning}");
        }
    }
    out
}

pub fn simulation_json(report: &SimReport, warnings: Option<&[&str]>) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("minutes".to_string(), JsonValue::from(report.minutes));
    out.insert("tick".to_string(), JsonValue::from(report.tick));
    out.insert("steps".to_string(), JsonValue::from(report.steps));
    out.insert("hunger".to_string(), stat_to_json(report.stats.hunger));
    out.insert(
        "happiness".to_string(),
        stat_to_json(report.stats.happiness),
    );
    out.insert(
        "cleanliness".to_string(),
        stat_to_json(report.stats.cleanliness),
    );
    out.insert("health".to_string(), stat_to_json(report.stats.health));
    if let Some(warnings) = warnings {
        out.insert(
            "warnings".to_string(),
            JsonValue::Array(
                warnings
                    .iter()
                    .map(|w| JsonValue::String((*w).to_string()))
                    .collect(),
            ),
        );
    }
    JsonValue::Object(out)
}

// Stats are tuned and reported at one-decimal precision.
fn stat_to_json(value: f64) -> JsonValue {
    JsonValue::from((value * 10.0).round() / 10.0)
}

// ---------------------------------------------------------------------------
// Save validation
// ---------------------------------------------------------------------------

/// The success line, or the missing-field report with one `- <path>` line
/// per missing path.
pub fn validation_text(missing: &[&str]) -> String {
    if missing.is_empty() {
        return "Save schema validation passed.\n".to_string();
    }

    let mut out = String::from("Missing required fields:\n");
    for path in missing {
        let _ = writeln!(out, "- {path}");
    }
    out
}

pub fn validation_json(missing: &[&str]) -> JsonValue {
    let mut out = JsonMap::new();
    if missing.is_empty() {
        out.insert("status".to_string(), JsonValue::String("ok".to_string()));
    } else {
        out.insert("status".to_string(), JsonValue::String("error".to_string()));
        out.insert(
            "missing".to_string(),
            JsonValue::Array(
                missing
                    .iter()
                    .map(|path| JsonValue::String((*path).to_string()))
                    .collect(),
            ),
        );
    }
    JsonValue::Object(out)
}
