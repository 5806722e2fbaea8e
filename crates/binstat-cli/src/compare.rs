use anyhow::{bail, Context, Result};
use binstat_histogram::{align_labels, mean_info, Histogram, MeanRecord};
use binstat_io::{hists_from_dir, write_histogram, write_means, CompareConfig};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct CompareArgs {
    /// Result directories, each holding a plots subdirectory of histogram CSVs
    #[arg(long, num_args = 1.., required = true)]
    pub plotdirs: Vec<PathBuf>,

    /// One title per plot directory
    #[arg(long, num_args = 1.., required = true)]
    pub names: Vec<String>,

    /// Output directory
    #[arg(long)]
    pub outdir: PathBuf,

    /// Per-directory substring removed from file stems to get variable names
    #[arg(long, num_args = 1..)]
    pub strings_to_ignore: Vec<String>,

    /// Only check that the directories can be compared; write nothing
    #[arg(long)]
    pub no_mean_info: bool,
}

pub fn run(args: &CompareArgs, config: &CompareConfig) -> Result<()> {
    if args.names.len() != args.plotdirs.len() {
        bail!(
            "got {} names for {} plot directories",
            args.names.len(),
            args.plotdirs.len()
        );
    }
    if !args.strings_to_ignore.is_empty() && args.strings_to_ignore.len() != args.plotdirs.len() {
        bail!(
            "got {} strings to ignore for {} plot directories",
            args.strings_to_ignore.len(),
            args.plotdirs.len()
        );
    }

    let mut per_dir: Vec<BTreeMap<String, Histogram>> = Vec::with_capacity(args.plotdirs.len());
    for (idir, (dir, name)) in args.plotdirs.iter().zip(&args.names).enumerate() {
        let strip = args.strings_to_ignore.get(idir).map(String::as_str);
        let plots = dir.join(&config.plots_subdir);
        let hists = hists_from_dir(&plots, name, strip)
            .with_context(|| format!("failed to read histograms from {}", plots.display()))?;
        per_dir.push(hists);
    }

    let outplots = args.outdir.join(&config.plots_subdir);
    if !args.no_mean_info {
        std::fs::create_dir_all(&outplots)
            .with_context(|| format!("failed to create {}", outplots.display()))?;
    }

    let mut records: Vec<MeanRecord> = Vec::new();
    for (varname, first) in &per_dir[0] {
        let mut hists = vec![first.clone()];
        let mut missing = Vec::new();
        for (idir, dir_hists) in per_dir.iter().enumerate().skip(1) {
            match dir_hists.get(varname) {
                Some(hist) => hists.push(hist.clone()),
                None => missing.push(args.names[idir].as_str()),
            }
        }
        if !missing.is_empty() {
            warn!("skipping {}: missing from {}", varname, missing.join(", "));
            continue;
        }

        if config.needs_label_alignment(varname) {
            hists = align_labels(&hists);
        }

        if args.no_mean_info {
            info!("{}: {} histograms comparable", varname, hists.len());
            continue;
        }

        let info = mean_info(&hists);
        let path = outplots.join(format!("{}{}.csv", varname, config.mean_bins_suffix));
        write_histogram(&path, &info.mean_bin_hist)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("{}: global mean {}", varname, info.global_mean);
        records.push(info.record(varname.as_str()));
    }

    if !args.no_mean_info {
        let path = outplots.join(&config.means_file);
        write_means(&path, &records, &config.separator)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {} mean records to {}", records.len(), path.display());
    }
    Ok(())
}
