//! Support and resistance levels from local extrema.

/// Kind of local extremum to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Local minimum (support).
    Min,
    /// Local maximum (resistance).
    Max,
}

/// Find distinct local extrema, sorted ascending.
///
/// A sample qualifies when it is strictly below (or above) both neighbours,
/// so the first and last samples never qualify. Non-finite samples never
/// qualify and never make a neighbour qualify.
pub fn local_extrema(prices: &[f64], kind: Extremum) -> Vec<f64> {
    let mut levels: Vec<f64> = prices
        .windows(3)
        .filter(|w| w.iter().all(|p| p.is_finite()))
        .filter(|w| match kind {
            Extremum::Min => w[1] < w[0] && w[1] < w[2],
            Extremum::Max => w[1] > w[0] && w[1] > w[2],
        })
        .map(|w| w[1])
        .collect();

    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup();
    levels
}

/// Support levels: distinct local minima, ascending.
pub fn support_levels(prices: &[f64]) -> Vec<f64> {
    local_extrema(prices, Extremum::Min)
}

/// Resistance levels: distinct local maxima, ascending.
pub fn resistance_levels(prices: &[f64]) -> Vec<f64> {
    local_extrema(prices, Extremum::Max)
}
