//! Autocorrelation pitch estimation.
//!
//! Estimates the fundamental frequency of a single analysis frame by
//! correlating the frame with time-shifted copies of itself. Candidate
//! periods are restricted to the speech pitch band (80-400 Hz) and to
//! at most half the frame length.

/// Lowest pitch considered voiced, in Hz.
pub const MIN_PITCH_HZ: f64 = 80.0;

/// Highest pitch considered voiced, in Hz.
pub const MAX_PITCH_HZ: f64 = 400.0;

/// Sentinel for "no pitch found" (silence or unvoiced frame).
pub const UNVOICED: f64 = 0.0;

/// Estimates the fundamental frequency of one frame.
///
/// For each candidate period `p` the mean-normalized autocorrelation
/// `corr(p) = (1/(N-p)) * sum(frame[j] * frame[j+p])` is evaluated and
/// the period with the highest positive correlation wins, ties going
/// to the smallest period.
///
/// # Returns
/// The pitch in Hz, or [`UNVOICED`] when no candidate period has a
/// positive correlation or the frame is too short to search at all.
pub fn estimate_f0(frame: &[f64], sample_rate: u32) -> f64 {
    let sr = sample_rate as f64;
    let min_period = ((sr / MAX_PITCH_HZ) as usize).max(1);
    let max_period = (sr / MIN_PITCH_HZ) as usize;

    let mut best: Option<(usize, f64)> = None;

    for period in min_period..max_period {
        // Candidate periods never exceed half the frame
        if period * 2 >= frame.len() {
            break;
        }

        let n = frame.len() - period;
        let mut corr = 0.0;
        for j in 0..n {
            corr += frame[j] * frame[j + period];
        }
        corr /= n as f64;

        // Strict comparison keeps the smallest period on ties
        if corr > 0.0 && best.map_or(true, |(_, c)| corr > c) {
            best = Some((period, corr));
        }
    }

    match best {
        Some((period, _)) => sr / period as f64,
        None => UNVOICED,
    }
}
