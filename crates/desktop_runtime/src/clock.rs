use platform_host::LocalClockTime;

/// Formats a taskbar clock label such as `9:05 PM`.
pub fn format_clock(time: LocalClockTime) -> String {
    let suffix = if time.hour >= 12 { "PM" } else { "AM" };
    let hour = match time.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour}:{:02} {suffix}", time.minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> String {
        format_clock(LocalClockTime { hour, minute })
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        assert_eq!(at(0, 0), "12:00 AM");
        assert_eq!(at(12, 30), "12:30 PM");
    }

    #[test]
    fn hours_are_unpadded_and_minutes_padded() {
        assert_eq!(at(9, 5), "9:05 AM");
        assert_eq!(at(21, 59), "9:59 PM");
    }
}
