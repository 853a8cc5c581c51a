/// Boundaries closer than this to a track edge are considered coincident
/// with it (seconds). Absorbs frame-quantization jitter at the edges.
pub const EDGE_TOLERANCE: f64 = 0.01;

/// Normalize raw onset times (ascending, seconds) into a boundary list that
/// partitions `[0, duration]`.
///
/// Steps, in order:
/// 1. Prepend `0.0` when the sequence is empty or starts later than
///    [`EDGE_TOLERANCE`].
/// 2. Drop every time at or past `duration`.
/// 3. Append `duration` when the track is non-empty and the last boundary
///    is more than [`EDGE_TOLERANCE`] short of it.
///
/// Returns `None` when fewer than two boundaries survive; a single boundary
/// cannot define a segment.
pub fn normalize_boundaries(raw: &[f64], duration: f64) -> Option<Vec<f64>> {
    let mut times: Vec<f64> = Vec::with_capacity(raw.len() + 2);

    if raw.first().is_none_or(|&first| first > EDGE_TOLERANCE) {
        times.push(0.0);
    }
    times.extend_from_slice(raw);

    times.retain(|&t| t < duration);

    if duration > 0.0 && times.last().is_none_or(|&last| duration - last > EDGE_TOLERANCE) {
        times.push(duration);
    }

    (times.len() >= 2).then_some(times)
}
