//! String formatting utilities.

/// Format a delay in milliseconds as seconds, e.g. `500` → `"0.5s"`,
/// `2000` → `"2s"`, `1250` → `"1.25s"`.
pub fn convert_delay_to_seconds(delay_ms: u64) -> String {
    let whole = delay_ms / 1000;
    let frac = delay_ms % 1000;

    if frac == 0 {
        return format!("{whole}s");
    }

    let digits = format!("{frac:03}");
    format!("{whole}.{}s", digits.trim_end_matches('0'))
}
