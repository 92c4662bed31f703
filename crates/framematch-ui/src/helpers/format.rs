// crates/framematch-ui/src/helpers/format.rs
//
// Display-only string helpers for file names and sizes.

/// Shortens `name` to at most `max_chars` characters by cutting the middle,
/// so both the start and the extension stay visible: `holiday_…_final.mp4`.
pub fn fit_file_name(name: &str, max_chars: usize) -> String {
    const ELLIPSIS: char = '…';
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }
    if max_chars < 3 {
        return name.chars().take(max_chars).collect();
    }
    let keep = max_chars - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let mut out: String = name.chars().take(head).collect();
    out.push(ELLIPSIS);
    out.extend(name.chars().skip(count - tail));
    out
}

/// Human-readable byte count with binary units.
///
/// | Input          | Output    |
/// |----------------|-----------|
/// | 512            | `512 B`   |
/// | 1536           | `1.5 KB`  |
/// | 734_003_200    | `700.0 MB`|
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_unchanged() {
        assert_eq!(fit_file_name("clip.mp4", 20), "clip.mp4");
    }

    #[test]
    fn long_names_keep_both_ends() {
        let out = fit_file_name("a_very_long_holiday_recording.mp4", 12);
        assert_eq!(out.chars().count(), 12);
        assert!(out.starts_with("a_ve"));
        assert!(out.ends_with(".mp4"));
        assert!(out.contains('…'));
    }

    #[test]
    fn multibyte_names_are_cut_on_char_boundaries() {
        let out = fit_file_name("ééééééééééé.png", 6);
        assert_eq!(out.chars().count(), 6);
    }

    #[test]
    fn byte_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(734_003_200), "700.0 MB");
    }
}
