/// Format a number of seconds as zero-padded `HH:MM:SS`.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a number of seconds as zero-padded `MM:SS`.
pub fn format_ms(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}", minutes, seconds)
}

/// Clamp a signed adjustment of `value` into `[min, max]`.
pub fn clamp_add(value: u64, delta: i64, min: u64, max: u64) -> u64 {
    let adjusted = value as i64 + delta;

    adjusted.clamp(min as i64, max as i64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(1500), "00:25:00");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(21600), "06:00:00");
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0), "00:00");
        assert_eq!(format_ms(300), "05:00");
        assert_eq!(format_ms(3599), "59:59");
    }

    #[test]
    fn test_clamp_add_within_bounds() {
        assert_eq!(clamp_add(1500, 60, 1, 21600), 1560);
        assert_eq!(clamp_add(1500, -60, 1, 21600), 1440);
    }

    #[test]
    fn test_clamp_add_hits_floor() {
        assert_eq!(clamp_add(30, -3600, 1, 21600), 1);
        assert_eq!(clamp_add(1, -1, 1, 3600), 1);
    }

    #[test]
    fn test_clamp_add_hits_ceiling() {
        assert_eq!(clamp_add(21000, 3600, 1, 21600), 21600);
        assert_eq!(clamp_add(3600, 60, 1, 3600), 3600);
    }
}
