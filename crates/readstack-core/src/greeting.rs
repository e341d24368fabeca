use chrono::{Local, Timelike};

/// Greeting for an hour of day (0..=23).
///
/// The noon overlap resolves to morning; first match wins.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if (6..=12).contains(&hour) {
        return "Good morning!";
    }
    if (12..=17).contains(&hour) {
        return "Good afternoon!";
    }
    "Good evening!"
}

/// Greeting for the current local time
pub fn greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning() {
        assert_eq!(greeting_for_hour(6), "Good morning!");
        assert_eq!(greeting_for_hour(9), "Good morning!");
        assert_eq!(greeting_for_hour(12), "Good morning!");
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(greeting_for_hour(13), "Good afternoon!");
        assert_eq!(greeting_for_hour(17), "Good afternoon!");
    }

    #[test]
    fn test_evening() {
        assert_eq!(greeting_for_hour(18), "Good evening!");
        assert_eq!(greeting_for_hour(23), "Good evening!");
        assert_eq!(greeting_for_hour(0), "Good evening!");
        assert_eq!(greeting_for_hour(5), "Good evening!");
    }
}
