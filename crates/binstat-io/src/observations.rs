//! Histograms filled from per-observation CSV files

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use binstat_histogram::{histogram_from_values, AxisScale, Histogram};

/// Read every value of a numeric `column`
pub fn read_column<R: Read>(source: R, column: &str, origin: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_reader(source);
    let index = reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| Error::MissingColumn {
            path: origin.to_path_buf(),
            column: column.to_string(),
        })?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record.get(index).unwrap_or_default();
        let value = field.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
            path: origin.to_path_buf(),
            value: field.to_string(),
        })?;
        if !value.is_finite() {
            let context = format!("column '{column}' of {}", origin.display());
            return Err(binstat_core::Error::non_finite(&context).into());
        }
        values.push(value);
    }
    Ok(values)
}

/// Histogram `column` of the observation file at `path`
///
/// Bin edges are derived from the observed values with `n_bins` bins on the
/// given scale.
pub fn histogram_from_observation_file(
    path: impl AsRef<Path>,
    column: &str,
    n_bins: usize,
    scale: AxisScale,
) -> Result<Histogram> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let values = read_column(file, column, path)?;
    Ok(histogram_from_values(&values, n_bins, scale).with_xtitle(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_column() {
        let data = "unique_id,cdr3_length\na,42\nb,45\nc, 39\n";
        let values = read_column(data.as_bytes(), "cdr3_length", Path::new("obs.csv")).unwrap();
        assert_eq!(values, vec![42.0, 45.0, 39.0]);
    }

    #[test]
    fn test_missing_column() {
        let data = "unique_id,cdr3_length\na,42\n";
        let err = read_column(data.as_bytes(), "v_gene", Path::new("obs.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "v_gene"));
    }

    #[test]
    fn test_infinite_value_rejected() {
        let data = "cdr3_length\n42\ninf\n";
        let err = read_column(data.as_bytes(), "cdr3_length", Path::new("obs.csv")).unwrap_err();
        assert!(matches!(err, Error::Core(binstat_core::Error::Computation(_))));
    }

    #[test]
    fn test_non_numeric_value() {
        let data = "cdr3_length\n42\nlong\n";
        let err = read_column(data.as_bytes(), "cdr3_length", Path::new("obs.csv")).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "long"));
    }
}
