//! Bin-entry CSV files
//!
//! One row per histogram slot, underflow first and overflow last, with the
//! columns `bin_low_edge,contents,binerror,xtitle,binlabel`. Readers also
//! accept an `error` column in place of `binerror`, or a
//! `sum-weights-squared` column from which the error is derived.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use binstat_histogram::Histogram;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BinEntryRow {
    bin_low_edge: f64,
    contents: f64,
    #[serde(default)]
    binerror: Option<f64>,
    #[serde(default)]
    error: Option<f64>,
    #[serde(default, rename = "sum-weights-squared")]
    sum_weights_squared: Option<f64>,
    #[serde(default)]
    xtitle: Option<String>,
    #[serde(default)]
    binlabel: Option<String>,
}

impl BinEntryRow {
    fn bin_error(&self) -> f64 {
        if let Some(sumw2) = self.sum_weights_squared {
            sumw2.sqrt()
        } else if let Some(err) = self.binerror.or(self.error) {
            err
        } else {
            self.contents.sqrt()
        }
    }
}

#[derive(Debug, Serialize)]
struct BinEntryRecord<'a> {
    bin_low_edge: f64,
    contents: f64,
    binerror: f64,
    xtitle: &'a str,
    binlabel: &'a str,
}

/// Read a histogram from a bin-entry CSV file
pub fn read_histogram(path: impl AsRef<Path>) -> Result<Histogram> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    parse_rows(reader, path)
}

/// Read a histogram from any bin-entry CSV source
///
/// `origin` is only used in error messages.
pub fn read_histogram_from<R: Read>(source: R, origin: impl AsRef<Path>) -> Result<Histogram> {
    parse_rows(csv::Reader::from_reader(source), origin.as_ref())
}

fn parse_rows<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Histogram> {
    let mut rows = reader
        .deserialize::<BinEntryRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if rows.len() < 3 {
        return Err(Error::InvalidHistogram {
            path: path.to_path_buf(),
            reason: format!(
                "need an underflow, an overflow and at least one bin row, found {} rows",
                rows.len()
            ),
        });
    }
    rows.sort_by(|a, b| a.bin_low_edge.total_cmp(&b.bin_low_edge));

    let n_bins = rows.len() - 2;
    // Row 1 is the first addressable bin; row n_bins + 1 is the overflow,
    // whose low edge closes the last bin
    let edges: Vec<f64> = rows[1..].iter().map(|row| row.bin_low_edge).collect();
    if !edges.windows(2).all(|w| w[0] < w[1]) {
        return Err(Error::InvalidHistogram {
            path: path.to_path_buf(),
            reason: "bin low edges are not strictly increasing".to_string(),
        });
    }

    let xtitle = rows
        .iter()
        .rev()
        .find_map(|row| row.xtitle.clone())
        .unwrap_or_default();
    let mut hist = Histogram::new(edges).with_xtitle(xtitle);
    for (ibin, row) in rows.iter().enumerate() {
        hist.set_bin(ibin, row.contents, row.bin_error());
        if let Some(label) = row.binlabel.as_deref().filter(|l| !l.is_empty()) {
            hist.set_label(ibin, label);
        }
    }

    debug!("read {} bins from {}", n_bins, path.display());
    Ok(hist)
}

/// Write a histogram as a bin-entry CSV file
pub fn write_histogram(path: impl AsRef<Path>, hist: &Histogram) -> Result<()> {
    let path = path.as_ref();
    let writer = csv::Writer::from_path(path)?;
    write_rows(writer, hist)?;
    debug!("wrote {} bins to {}", hist.n_bins(), path.display());
    Ok(())
}

/// Write a histogram as bin-entry CSV to any sink
pub fn write_histogram_to<W: Write>(sink: W, hist: &Histogram) -> Result<()> {
    write_rows(csv::Writer::from_writer(sink), hist)
}

fn write_rows<W: Write>(mut writer: csv::Writer<W>, hist: &Histogram) -> Result<()> {
    for ibin in 0..hist.n_slots() {
        writer.serialize(BinEntryRecord {
            bin_low_edge: hist.low_edge(ibin),
            contents: hist.contents(ibin),
            binerror: hist.error(ibin),
            xtitle: hist.xtitle(),
            binlabel: hist.label(ibin),
        })?;
    }
    writer.flush()?;
    Ok(())
}
