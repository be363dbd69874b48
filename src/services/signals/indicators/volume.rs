//! Volume statistics.

/// Number of trailing samples in the short volume average.
pub const SHORT_VOLUME_WINDOW: usize = 5;

/// Mean of the last `window` volumes.
///
/// With fewer samples than the window the mean covers whatever exists;
/// an empty series averages to 0.
pub fn trailing_average(volumes: &[f64], window: usize) -> f64 {
    let take = window.min(volumes.len());
    if take == 0 {
        return 0.0;
    }

    volumes[volumes.len() - take..].iter().sum::<f64>() / take as f64
}
