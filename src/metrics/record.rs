//! Flat metric rows and CSV export.

use super::Metrics;
use crate::error::CoverError;
use std::io::Write;

/// One exported row: a scenario name plus its solve metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRecord {
    pub scenario: String,
    pub time_ms: f64,
    pub memory_kb: Option<u64>,
    pub quality: f64,
    pub solution_size: Option<usize>,
    pub nodes_visited: Option<u64>,
}

impl MetricsRecord {
    pub fn new(scenario: impl Into<String>, metrics: &Metrics) -> Self {
        Self {
            scenario: scenario.into(),
            time_ms: metrics.time_ms(),
            memory_kb: metrics.peak_memory_kb,
            quality: metrics.quality,
            solution_size: metrics.solution_size,
            nodes_visited: metrics.nodes_visited,
        }
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes `records` as CSV with a header row.
///
/// Columns are `scenario,time_ms,memory_kb,quality,solution_size`, plus
/// `nodes_visited` when any record carries a node count. Floats use four
/// decimals; missing values are left empty.
///
/// ```
/// use interval_cover::metrics::{write_csv, MetricsRecord};
///
/// let row = MetricsRecord {
///     scenario: "small".into(),
///     time_ms: 0.5,
///     memory_kb: Some(1024),
///     quality: 0.7,
///     solution_size: Some(3),
///     nodes_visited: None,
/// };
/// let mut out = Vec::new();
/// write_csv(&mut out, &[row]).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "scenario,time_ms,memory_kb,quality,solution_size\nsmall,0.5000,1024,0.7000,3\n"
/// );
/// ```
pub fn write_csv<W: Write>(mut writer: W, records: &[MetricsRecord]) -> Result<(), CoverError> {
    let with_nodes = records.iter().any(|r| r.nodes_visited.is_some());

    write!(writer, "scenario,time_ms,memory_kb,quality,solution_size")?;
    if with_nodes {
        write!(writer, ",nodes_visited")?;
    }
    writeln!(writer)?;

    for r in records {
        write!(
            writer,
            "{},{:.4},{},{:.4},{}",
            r.scenario,
            r.time_ms,
            opt(r.memory_kb),
            r.quality,
            opt(r.solution_size),
        )?;
        if with_nodes {
            write!(writer, ",{}", opt(r.nodes_visited))?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
