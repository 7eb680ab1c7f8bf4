use std::str::FromStr;
use std::time::Duration;

/// Collection deadline in seconds, e.g. `30` or `0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeoutArg(pub Duration);

impl FromStr for TimeoutArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let secs = s
            .strip_suffix('s')
            .unwrap_or(s)
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid number of seconds: {s}"))?;

        if !secs.is_finite() || secs <= 0.0 {
            return Err(format!("Timeout must be a positive number of seconds: {s}"));
        }
        Duration::try_from_secs_f64(secs)
            .map(Self)
            .map_err(|e| format!("Timeout out of range: {e}"))
    }
}
