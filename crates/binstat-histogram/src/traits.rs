//! Core traits for bin-edge generation

/// Trait for deriving bin edges from observed values
pub trait EdgeBuilder {
    /// Produce `n_bins() + 1` edges for already-sorted values
    ///
    /// # Panics
    ///
    /// Implementations panic when `sorted_values` is empty.
    fn edges(&self, sorted_values: &[f64]) -> Vec<f64>;

    /// Produce edges from unsorted values
    ///
    /// Default implementation sorts a copy and calls `edges()`.
    fn edges_unsorted(&self, values: &[f64]) -> Vec<f64> {
        self.edges(&binstat_core::utils::sorted(values))
    }

    /// Get the number of bins the edges describe
    fn n_bins(&self) -> usize;
}
