//! CSV batch conversion. Saved preferences are not touched.

use crate::core::calculator::FormInput;
use crate::core::converter;
use crate::core::report;
use crate::domain::model::{Locale, SizeCategory};
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub name: String,
    pub birth_date: String,
    pub size: String,
    pub chronological_years: Option<f64>,
    pub human_years: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert a single row; validation problems end up in `error`.
pub fn convert_row<Tz: TimeZone>(row: &BatchRow, now: &DateTime<Tz>, locale: Locale) -> BatchResult {
    let outcome = row
        .size
        .parse::<SizeCategory>()
        .and_then(|size| FormInput::new(Some(row.birth_date.as_str()), size).validate(now))
        .and_then(|record| converter::convert(&record, now));

    let (chronological_years, human_years, error) = match outcome {
        Ok(report) => (
            Some(report.chronological_years),
            Some(report.human_years),
            None,
        ),
        Err(e) => {
            tracing::warn!("Row '{}' skipped: {}", row.name, e);
            (None, None, Some(report::error_message(&e, locale)))
        }
    };

    BatchResult {
        name: row.name.clone(),
        birth_date: row.birth_date.clone(),
        size: row.size.clone(),
        chronological_years,
        human_years,
        error,
    }
}

/// 讀取 `name,birth_date,size` CSV，寫出含年齡欄位的 CSV
pub fn convert_csv<R: Read, W: Write, Tz: TimeZone>(
    input: R,
    output: W,
    now: &DateTime<Tz>,
    locale: Locale,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for row in reader.deserialize::<BatchRow>() {
        let result = convert_row(&row?, now, locale);
        if result.error.is_some() {
            summary.failed += 1;
        } else {
            summary.converted += 1;
        }
        writer.serialize(&result)?;
    }

    writer.flush()?;
    tracing::info!(
        "Batch finished: {} converted, {} failed",
        summary.converted,
        summary.failed
    );
    Ok(summary)
}
