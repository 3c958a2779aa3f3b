/// Goal progress as a whole percentage, capped at 100.
///
/// A zero (unset) goal yields 0 rather than dividing by zero.
pub fn progress_percent(studied_secs: i64, goal_secs: i64) -> u8 {
    if goal_secs <= 0 {
        return 0;
    }
    let pct = (studied_secs.max(0) as f64 / goal_secs as f64) * 100.0;
    pct.min(100.0) as u8
}

/// Text progress bar, e.g. `[████████░░░░░░░░░░░░]`.
pub fn progress_bar(pct: u8, width: usize) -> String {
    let filled = (pct as usize * width) / 100;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}
