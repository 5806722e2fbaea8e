//! Loading every histogram stored in a directory

use std::collections::BTreeMap;
use std::path::Path;

use crate::bin_entry::read_histogram;
use crate::error::{Error, Result};
use binstat_histogram::Histogram;
use tracing::{debug, info};

/// Read every bin-entry CSV in `dir`, keyed by variable name
///
/// The variable name is the file stem with `strip` (if any) removed. Each
/// histogram is named `<title>-csv-<variable>`. CSVs that are not bin-entry
/// files are skipped.
pub fn hists_from_dir(dir: impl AsRef<Path>, title: &str, strip: Option<&str>) -> Result<BTreeMap<String, Histogram>> {
    let dir = dir.as_ref();
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.csv");
    let mut hists = BTreeMap::new();

    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let varname = match strip {
            Some(s) => stem.replace(s, ""),
            None => stem,
        };

        match read_histogram(&path) {
            Ok(hist) => {
                hists.insert(varname.clone(), hist.with_name(format!("{title}-csv-{varname}")));
            }
            Err(e) if e.is_not_histogram() => {
                debug!("skipping {}: {}", path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }

    if hists.is_empty() {
        return Err(Error::NoHistograms(dir.to_path_buf()));
    }
    info!("loaded {} histograms from {}", hists.len(), dir.display());
    Ok(hists)
}
