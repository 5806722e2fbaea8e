//! Filesystem round trips through temporary directories

use anyhow::Result;
use approx::assert_relative_eq;
use binstat_histogram::{AxisScale, Histogram, MeanRecord};
use binstat_io::{
    hists_from_dir, histogram_from_observation_file, read_histogram, read_means, write_histogram,
    write_means, CompareConfig, Error,
};
use std::fs;

fn sample_hist(offset: f64) -> Histogram {
    let mut hist = Histogram::uniform(4, 0.0, 4.0).with_xtitle("length");
    for v in [0.5, 1.5, 1.5, 2.5] {
        hist.fill(v + offset);
    }
    hist
}

#[test]
fn directory_scan_names_and_skips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_histogram(dir.path().join("cdr3_length-sample.csv"), &sample_hist(0.0))?;
    write_histogram(dir.path().join("v_3p_del-sample.csv"), &sample_hist(1.0))?;
    // Not a bin-entry file
    fs::write(dir.path().join("means.csv"), "name,means,sems,normalized-means\nx,1,1,0\n")?;
    fs::write(dir.path().join("notes.txt"), "ignored")?;

    let hists = hists_from_dir(dir.path(), "run1", Some("-sample"))?;
    assert_eq!(hists.keys().collect::<Vec<_>>(), vec!["cdr3_length", "v_3p_del"]);
    assert_eq!(hists["cdr3_length"].name(), "run1-csv-cdr3_length");
    assert_eq!(hists["v_3p_del"].contents(3), 2.0);
    Ok(())
}

#[test]
fn directory_name_with_glob_metacharacters() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("run[1]*?");
    fs::create_dir_all(&dir)?;
    write_histogram(dir.join("cdr3_length.csv"), &sample_hist(0.0))?;

    let hists = hists_from_dir(&dir, "run1", None)?;
    assert_eq!(hists.keys().collect::<Vec<_>>(), vec!["cdr3_length"]);
    Ok(())
}

#[test]
fn empty_directory_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = hists_from_dir(dir.path(), "run1", None).unwrap_err();
    assert!(matches!(err, Error::NoHistograms(_)));
    Ok(())
}

#[test]
fn histogram_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hist.csv");
    let hist = sample_hist(0.0);
    write_histogram(&path, &hist)?;
    let back = read_histogram(&path)?;
    assert_eq!(back.edges(), hist.edges());
    for ib in 0..hist.n_slots() {
        assert_eq!(back.contents(ib), hist.contents(ib));
        assert_relative_eq!(back.error(ib), hist.error(ib));
    }
    assert_eq!(back.xtitle(), "length");
    Ok(())
}

#[test]
fn means_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("means.csv");
    let records = vec![
        MeanRecord {
            name: "cdr3_length".to_string(),
            means: vec![40.0, 41.5],
            sems: vec![0.5, 0.5],
            normalized_means: vec![-1.5, 1.5],
        },
        MeanRecord {
            name: "mut_freq".to_string(),
            means: vec![0.125, 0.25],
            sems: vec![0.0, 0.0625],
            normalized_means: vec![0.0, 1.0],
        },
    ];
    write_means(&path, &records, ":")?;
    assert_eq!(read_means(&path, ":")?, records);
    Ok(())
}

#[test]
fn observation_column_histogram() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("annotations.csv");
    fs::write(&path, "unique_id,cdr3_length\na,30\nb,33\nc,36\nd,39\n")?;
    let hist = histogram_from_observation_file(&path, "cdr3_length", 3, AxisScale::Linear)?;
    assert_eq!(hist.n_bins(), 3);
    assert_eq!(hist.integral(), 4.0);
    assert!(!hist.has_overflows());
    assert_eq!(hist.xtitle(), "cdr3_length");

    let err = histogram_from_observation_file(&path, "v_gene", 3, AxisScale::Linear).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
    Ok(())
}

#[test]
fn config_file_overrides() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"plots_subdir": "hists", "summary_bins": 10}"#)?;
    let config = CompareConfig::load(&path)?;
    assert_eq!(config.plots_subdir, "hists");
    assert_eq!(config.summary_bins, 10);
    assert_eq!(config.mean_bins_suffix, "-mean-bins");
    Ok(())
}
