use anyhow::{Context, Result};
use binstat_histogram::{histogram_from_values, summarize_records, AxisScale};
use binstat_io::{read_means, write_histogram, write_mean_variance, CompareConfig};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct SummarizeArgs {
    /// Parent of the comparison output directories
    #[arg(long)]
    pub plotdir: PathBuf,

    /// Comparison output directories under the plot directory
    #[arg(long, num_args = 1.., required = true)]
    pub subdirs: Vec<String>,

    /// Output directory
    #[arg(long)]
    pub outdir: PathBuf,
}

pub fn run(args: &SummarizeArgs, config: &CompareConfig) -> Result<()> {
    let mut records = Vec::new();
    for subdir in &args.subdirs {
        let path = args
            .plotdir
            .join(subdir)
            .join(&config.plots_subdir)
            .join(&config.means_file);
        let mut read = read_means(&path, &config.separator)
            .with_context(|| format!("failed to read {}", path.display()))?;
        records.append(&mut read);
    }

    let summary = summarize_records(&records);
    let outplots = args.outdir.join(&config.plots_subdir);
    std::fs::create_dir_all(&outplots)
        .with_context(|| format!("failed to create {}", outplots.display()))?;

    let path = outplots.join("mean-variance.csv");
    write_mean_variance(&path, &summary).with_context(|| format!("failed to write {}", path.display()))?;

    let hist = histogram_from_values(&summary.normalized_means, config.summary_bins, AxisScale::Linear)
        .with_name("normalized-means")
        .with_xtitle("(x_i - mu) / sigma_i");
    let path = outplots.join("normalized-means.csv");
    write_histogram(&path, &hist).with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        "summarized {} variables, normalized mean sigma = {}",
        records.len(),
        summary.normalized_std_dev()
    );
    Ok(())
}
