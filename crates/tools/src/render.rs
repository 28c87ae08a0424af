//! Text and JSON rendering of command results

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use sigrate_core::{complex::Complex, math::RateFactors, signal::Signal};

/// Result of one subcommand
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    Sequence(Vec<f64>),
    Signal(Signal),
    Factors(RateFactors),
}

/// Render `report`; `precision` only affects text output
pub fn render(report: &Report, format: OutputFormat, precision: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize result")?;
            Ok(json + "\n")
        }
        OutputFormat::Text => Ok(render_text(report, precision)),
    }
}

fn render_text(report: &Report, precision: Option<usize>) -> String {
    match report {
        Report::Sequence(values) => values
            .iter()
            .map(|v| format!("{}\n", format_complex(&Complex::from_real(*v), precision)))
            .collect(),
        Report::Signal(signal) => match precision {
            Some(p) => format!("{:.*}\n", p, signal),
            None => format!("{}\n", signal),
        },
        Report::Factors(factors) => format!("F1 = {}, F2 = {}\n", factors.up, factors.down),
    }
}

fn format_complex(value: &Complex, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}
