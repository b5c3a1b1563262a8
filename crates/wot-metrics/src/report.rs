//! Simulated-vs-reference comparison table.
//!
//! Reference figures come from published instrumented testing of the
//! modeled vehicle. The baseline has known internal inconsistencies (the
//! 5-60 mph interval was timed on a different run than 0-60); they are
//! reported as published, not reconciled.

use crate::metrics::PerformanceReport;

pub const REF_ROLLOUT_S: f64 = 0.25;
pub const REF_ZERO_TO_SIXTY_S: f64 = 2.7;
pub const REF_ZERO_TO_HUNDRED_S: f64 = 6.3;
pub const REF_ZERO_TO_ONE_FIFTY_S: f64 = 14.3;
pub const REF_FIVE_TO_SIXTY_S: f64 = 2.4;
pub const REF_THIRTY_TO_FIFTY_S: f64 = 0.9;
pub const REF_FIFTY_TO_SEVENTY_S: f64 = 1.2;
pub const REF_QUARTER_MILE_S: f64 = 10.8;
pub const REF_TRAP_SPEED_MPH: f64 = 131.0;

/// One comparison line: simulated value against the published figure.
#[derive(Debug, Clone, Copy)]
pub struct MetricRow {
    pub label: &'static str,
    pub unit: &'static str,
    pub simulated: f64,
    pub reference: f64,
}

impl MetricRow {
    pub fn deviation(&self) -> f64 {
        self.simulated - self.reference
    }
}

/// Pair every report field with its reference figure, in display order.
pub fn comparison_rows(report: &PerformanceReport) -> Vec<MetricRow> {
    vec![
        MetricRow {
            label: "Rollout (1 ft)",
            unit: "s",
            simulated: report.rollout_s,
            reference: REF_ROLLOUT_S,
        },
        MetricRow {
            label: "0-60 mph",
            unit: "s",
            simulated: report.zero_to_sixty_s,
            reference: REF_ZERO_TO_SIXTY_S,
        },
        MetricRow {
            label: "0-100 mph",
            unit: "s",
            simulated: report.zero_to_hundred_s,
            reference: REF_ZERO_TO_HUNDRED_S,
        },
        MetricRow {
            label: "0-150 mph",
            unit: "s",
            simulated: report.zero_to_one_fifty_s,
            reference: REF_ZERO_TO_ONE_FIFTY_S,
        },
        MetricRow {
            label: "5-60 mph (rolling)",
            unit: "s",
            simulated: report.five_to_sixty_s,
            reference: REF_FIVE_TO_SIXTY_S,
        },
        MetricRow {
            label: "30-50 mph",
            unit: "s",
            simulated: report.thirty_to_fifty_s,
            reference: REF_THIRTY_TO_FIFTY_S,
        },
        MetricRow {
            label: "50-70 mph",
            unit: "s",
            simulated: report.fifty_to_seventy_s,
            reference: REF_FIFTY_TO_SEVENTY_S,
        },
        MetricRow {
            label: "1/4 mile",
            unit: "s",
            simulated: report.quarter_mile_s,
            reference: REF_QUARTER_MILE_S,
        },
        MetricRow {
            label: "1/4 mile trap",
            unit: "mph",
            simulated: report.trap_speed_mph,
            reference: REF_TRAP_SPEED_MPH,
        },
    ]
}

/// Render the comparison as a fixed-width text table.
pub fn render_table(rows: &[MetricRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>10} {:>10} {:>8}  {}\n",
        "Metric", "Simulated", "Reference", "Delta", "Unit"
    ));
    out.push_str(&format!("{}\n", "-".repeat(58)));
    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>10.3} {:>10.3} {:>+8.3}  {}\n",
            row.label,
            row.simulated,
            row.reference,
            row.deviation(),
            row.unit
        ));
    }
    out
}
