//! Canonical class-label coding.

/// Class labels recoded to the canonical `0..n_classes` range.
///
/// Callers may label classes with arbitrary integers (`-1`/`+1`, `3`/`7`,
/// ...). Fitting collects the distinct values in ascending order and maps
/// each to its rank, so downstream code can index by class. Caller-visible
/// row order is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabels {
    /// Distinct original labels, ascending; index = canonical code.
    classes: Vec<i32>,
    /// Recoded labels, one per input row, each in `0..n_classes`.
    codes: Vec<i32>,
}

impl ClassLabels {
    /// Fit the canonical coding to a label vector.
    pub fn fit(y: &[i32]) -> Self {
        let mut classes: Vec<i32> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let codes = y
            .iter()
            .map(|label| {
                // fit() just built `classes` from these exact values
                classes.binary_search(label).unwrap_or(0) as i32
            })
            .collect();

        Self { classes, codes }
    }

    /// Number of distinct classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Original label for a canonical code.
    #[inline]
    pub fn class(&self, code: usize) -> i32 {
        self.classes[code]
    }

    /// Recoded labels, index-aligned with the input rows.
    #[inline]
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }
}
