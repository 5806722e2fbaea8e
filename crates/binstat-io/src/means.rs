//! Mean-record files
//!
//! One row per variable with the columns `name,means,sems,normalized-means`.
//! Each list column holds one value per sample, joined by a separator.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use binstat_histogram::{MeanRecord, MeanSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_SEPARATOR: &str = ":";

#[derive(Debug, Serialize, Deserialize)]
struct MeanRow {
    name: String,
    means: String,
    sems: String,
    #[serde(rename = "normalized-means")]
    normalized_means: String,
}

fn join(values: &[f64], separator: &str) -> String {
    values.iter().map(f64::to_string).collect::<Vec<_>>().join(separator)
}

fn split(field: &str, separator: &str, origin: &Path) -> Result<Vec<f64>> {
    if field.trim().is_empty() {
        return Ok(Vec::new());
    }
    field
        .split(separator)
        .map(|v| {
            v.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
                path: origin.to_path_buf(),
                value: v.to_string(),
            })
        })
        .collect()
}

/// Write mean records to `path`
pub fn write_means(path: impl AsRef<Path>, records: &[MeanRecord], separator: &str) -> Result<()> {
    let path = path.as_ref();
    write_means_to(std::fs::File::create(path)?, records, separator)?;
    debug!("wrote {} mean records to {}", records.len(), path.display());
    Ok(())
}

/// Write mean records to any sink
pub fn write_means_to<W: Write>(sink: W, records: &[MeanRecord], separator: &str) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for record in records {
        writer.serialize(MeanRow {
            name: record.name.clone(),
            means: join(&record.means, separator),
            sems: join(&record.sems, separator),
            normalized_means: join(&record.normalized_means, separator),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Read mean records from `path`
pub fn read_means(path: impl AsRef<Path>, separator: &str) -> Result<Vec<MeanRecord>> {
    let path = path.as_ref();
    read_means_from(std::fs::File::open(path)?, separator, path)
}

/// Read mean records from any source; `origin` is only used in error messages
pub fn read_means_from<R: Read>(source: R, separator: &str, origin: impl AsRef<Path>) -> Result<Vec<MeanRecord>> {
    let origin = origin.as_ref();
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();
    for row in reader.deserialize::<MeanRow>() {
        let row = row?;
        let record = MeanRecord {
            means: split(&row.means, separator, origin)?,
            sems: split(&row.sems, separator, origin)?,
            normalized_means: split(&row.normalized_means, separator, origin)?,
            name: row.name,
        };
        for len in [record.sems.len(), record.normalized_means.len()] {
            if len != record.means.len() {
                let context = format!("mean record '{}'", record.name);
                return Err(binstat_core::Error::size_mismatch(record.means.len(), len, &context).into());
            }
        }
        records.push(record);
    }
    Ok(records)
}

#[derive(Debug, Serialize)]
struct MeanVarianceRow {
    mean: f64,
    variance: f64,
}

/// Write the per-variable mean and variance of a summary, one row each
pub fn write_mean_variance(path: impl AsRef<Path>, summary: &MeanSummary) -> Result<()> {
    let path = path.as_ref();
    write_mean_variance_to(std::fs::File::create(path)?, summary)?;
    debug!("wrote {} mean/variance rows to {}", summary.means.len(), path.display());
    Ok(())
}

/// Write the per-variable mean and variance of a summary to any sink
pub fn write_mean_variance_to<W: Write>(sink: W, summary: &MeanSummary) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for (&mean, &variance) in summary.means.iter().zip(&summary.variances) {
        writer.serialize(MeanVarianceRow { mean, variance })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MeanRecord {
        MeanRecord {
            name: "cdr3_length".to_string(),
            means: vec![42.5, 44.0],
            sems: vec![0.25, 0.5],
            normalized_means: vec![-1.0, 2.0],
        }
    }

    #[test]
    fn test_write_format() {
        let mut buffer = Vec::new();
        write_means_to(&mut buffer, &[record()], DEFAULT_SEPARATOR).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "name,means,sems,normalized-means\ncdr3_length,42.5:44,0.25:0.5,-1:2\n"
        );
    }

    #[test]
    fn test_read_back() {
        let mut buffer = Vec::new();
        write_means_to(&mut buffer, &[record()], DEFAULT_SEPARATOR).unwrap();
        let records = read_means_from(buffer.as_slice(), DEFAULT_SEPARATOR, "means.csv").unwrap();
        assert_eq!(records, vec![record()]);
    }

    #[test]
    fn test_custom_separator() {
        let data = "name,means,sems,normalized-means\nmut_freq,0.1;0.2,0.01;0.02,0;1\n";
        let records = read_means_from(data.as_bytes(), ";", "means.csv").unwrap();
        assert_eq!(records[0].means, vec![0.1, 0.2]);
        assert_eq!(records[0].normalized_means, vec![0.0, 1.0]);
    }

    #[test]
    fn test_mean_variance_rows() {
        let summary = MeanSummary {
            means: vec![2.0, 0.5],
            variances: vec![1.0, 0.25],
            normalized_means: vec![],
        };
        let mut buffer = Vec::new();
        write_mean_variance_to(&mut buffer, &summary).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "mean,variance\n2.0,1.0\n0.5,0.25\n");
    }

    #[test]
    fn test_ragged_record_rejected() {
        let data = "name,means,sems,normalized-means\nmut_freq,0.1:0.2,0.01,0:1\n";
        let err = read_means_from(data.as_bytes(), ":", "means.csv").unwrap_err();
        assert!(matches!(err, Error::Core(binstat_core::Error::InvalidInput(_))));
    }

    #[test]
    fn test_bad_value() {
        let data = "name,means,sems,normalized-means\nmut_freq,0.1:x,0:0,0:0\n";
        let err = read_means_from(data.as_bytes(), ":", "means.csv").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "x"));
    }
}
