//! Demonstrates bin unification and mean info across three samples

use binstat_histogram::{histogram_from_values, mean_info, AxisScale, Histogram};

fn shifted_sample(shift: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64 * 6.0 - 3.0;
            // Triangular-ish spread around the shift
            shift + x * x.abs() / 3.0
        })
        .collect()
}

fn main() {
    // Same binning for every sample so the unified width is meaningful
    let reference = histogram_from_values(&shifted_sample(10.0, 500), 20, AxisScale::Linear);
    let hists: Vec<Histogram> = [10.0, 10.5, 12.0]
        .iter()
        .enumerate()
        .map(|(i, &shift)| {
            let mut hist = Histogram::new(
                reference
                    .edges()
                    .iter()
                    .map(|edge| edge + (shift - 10.0))
                    .collect(),
            )
            .with_name(format!("sample-{i}"));
            for value in shifted_sample(shift, 500) {
                hist.fill(value);
            }
            hist
        })
        .collect();

    let info = mean_info(&hists);

    println!("=== Per-sample means ===");
    for (hist, ((mean, sem), normalized)) in hists
        .iter()
        .zip(info.means.iter().zip(&info.sems).zip(&info.normalized_means))
    {
        println!("{}: mean={mean:.3} sem={sem:.4} normalized={normalized:+.2}", hist.name());
    }
    println!("global mean: {:.3}", info.global_mean);

    println!("\n=== Unified layout ===");
    let unified = &info.mean_bin_hist;
    println!("{unified}");
    for ibin in unified.addressable() {
        println!(
            "  [{:.2}, {:.2}): {:.1} +- {:.1}",
            unified.low_edge(ibin),
            unified.up_edge(ibin),
            unified.contents(ibin),
            unified.error(ibin)
        );
    }
}
