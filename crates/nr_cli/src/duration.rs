use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A duration written the short way: `30m`, `1h15m`, `45s`, `2d`. A bare
/// number is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl HumanDuration {
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

fn too_large() -> String {
    "Duration too large".to_string()
}

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_millis = 0u64;
        let mut number = String::new();
        let mut seen_number = false;
        let mut chars = s.trim().chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_ascii_digit() {
                number.push(c);
                continue;
            }
            if c.is_whitespace() {
                continue;
            }
            let value: u64 = number
                .parse()
                .map_err(|_| format!("Expected a number before '{}'", c))?;
            let scale = match c {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                's' => 1_000,
                'm' => 60_000,
                'h' => 3_600_000,
                'd' => 86_400_000,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            total_millis = value
                .checked_mul(scale)
                .and_then(|millis| total_millis.checked_add(millis))
                .ok_or_else(too_large)?;
            number.clear();
            seen_number = true;
        }

        if !number.is_empty() {
            let value: u64 = number
                .parse()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_millis = value
                .checked_mul(1_000)
                .and_then(|millis| total_millis.checked_add(millis))
                .ok_or_else(too_large)?;
            seen_number = true;
        }

        if !seen_number {
            return Err("Duration must include a number".to_string());
        }
        if total_millis == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_millis(total_millis)))
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.0.as_millis();
        if millis % 1_000 != 0 {
            return write!(f, "{}ms", millis);
        }
        let mut secs = self.0.as_secs();
        for (unit, size) in [("d", 86_400), ("h", 3_600), ("m", 60)] {
            if secs >= size {
                write!(f, "{}{}", secs / size, unit)?;
                secs %= size;
            }
        }
        if secs > 0 || self.0.as_secs() == 0 {
            write!(f, "{}s", secs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Duration {
        s.parse::<HumanDuration>().unwrap().as_duration()
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse("30m"), Duration::from_secs(30 * 60));
        assert_eq!(parse("45s"), Duration::from_secs(45));
        assert_eq!(parse("2h"), Duration::from_secs(2 * 3600));
        assert_eq!(parse("1d"), Duration::from_secs(86_400));
        assert_eq!(parse("250ms"), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_compound_and_bare() {
        assert_eq!(parse("1h15m30s"), Duration::from_secs(4530));
        assert_eq!(parse("1h 30m"), Duration::from_secs(5400));
        assert_eq!(parse("90"), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<HumanDuration>().is_err());
        assert!("m".parse::<HumanDuration>().is_err());
        assert!("10x".parse::<HumanDuration>().is_err());
        assert!("0s".parse::<HumanDuration>().is_err());
        assert!("-5m".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(
            "999999999999999d".parse::<HumanDuration>(),
            Err("Duration too large".to_string())
        );
        assert_eq!(
            "18446744073709552s".parse::<HumanDuration>(),
            Err("Duration too large".to_string())
        );
        assert_eq!(
            "18446744073709551615ms 1ms".parse::<HumanDuration>(),
            Err("Duration too large".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(HumanDuration(Duration::from_secs(1800)).to_string(), "30m");
        assert_eq!(HumanDuration(Duration::from_secs(4530)).to_string(), "1h15m30s");
        assert_eq!(HumanDuration(Duration::from_millis(1500)).to_string(), "1500ms");
    }
}
