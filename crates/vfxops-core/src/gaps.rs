/// Gaps wider than this are still enumerated, but logged as suspicious: they
/// usually come from a stray file with a bogus frame number.
pub const LARGE_GAP_WARN: u64 = 1_000_000;

fn sorted_unique(frames: &[u64]) -> Vec<u64> {
    let mut sorted = frames.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Number of integers `missing_frames` would return, without allocating them.
pub fn missing_frame_count(frames: &[u64]) -> u64 {
    if frames.len() < 2 {
        return 0;
    }
    sorted_unique(frames)
        .windows(2)
        .map(|pair| pair[1] - pair[0] - 1)
        .sum()
}

/// Integers in `[min, max]` of `frames` that are not in `frames`, ascending.
///
/// Fewer than two frames define no range, so the result is empty.
pub fn missing_frames(frames: &[u64]) -> Vec<u64> {
    if frames.len() < 2 {
        return vec![];
    }
    let sorted = sorted_unique(frames);
    let count = missing_frame_count(&sorted);
    if count > LARGE_GAP_WARN {
        tracing::warn!(
            missing = count,
            first = sorted[0],
            last = sorted[sorted.len() - 1],
            "very large frame gap, check for stray frame numbers"
        );
    }

    let mut missing = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for pair in sorted.windows(2) {
        missing.extend(pair[0] + 1..pair[1]);
    }
    missing
}
