use std::time::Instant;

/// Render a millisecond count as a fixed-width, right-aligned duration.
///
/// The output is always exactly 7 characters. The unit escalates while the
/// value stays strictly above the next threshold: milliseconds above 1000
/// become seconds, seconds above 60 become minutes, minutes above 60 become
/// hours. Each escalation re-rounds to one decimal, and whole values drop
/// the decimal entirely, so `90000` is `" 1.5min"` while `120000` is
/// `"   2min"`.
pub fn format_duration(ms: u64) -> String {
    let mut weight = ms as f64;
    let mut unit = " ms";
    if weight > 1000.0 {
        weight = round1(weight / 1000.0);
        unit = "  s";
        if weight > 60.0 {
            weight = round1(weight / 60.0);
            unit = "min";
            if weight > 60.0 {
                weight = round1(weight / 60.0);
                unit = " hr";
            }
        }
    }
    let value = if weight.fract() == 0.0 {
        format!("{}", weight as u64)
    } else {
        format!("{weight:.1}")
    };
    let padded = format!("   {value}{unit}");
    padded[padded.len().saturating_sub(7)..].to_string()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Millisecond lap timer: every read returns the time since the previous
/// read and restarts the count from now.
#[derive(Debug)]
pub struct Stopwatch {
    last: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Restart the count from now without reading it.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Milliseconds since the previous read (or start), never negative.
    pub fn lap_ms(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_millis() as u64
    }

    /// The current lap, rendered through [`format_duration`].
    pub fn lap(&mut self) -> String {
        format_duration(self.lap_ms())
    }
}
