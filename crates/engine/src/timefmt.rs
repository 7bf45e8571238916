//! Duration formatting for time-to-empty / time-to-full estimates.

/// A duration rendered two ways: a compact clock form for the panel label
/// and a spelled-out form for accessible descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    /// `H:MM`, with the hour forced to `0` under an hour.
    pub short: String,
    /// `"N minutes"`, `"H hours"`, or `"H hours M minutes"`.
    pub detailed: String,
}

/// Formats a duration in seconds, rounding to the nearest minute.
///
/// Zero minutes renders as "Unknown time" in both forms; estimates that
/// round below half a minute are indistinguishable from no estimate.
pub fn format_duration(secs: u64) -> FormattedTime {
    let minutes = (secs + 30) / 60;

    if minutes == 0 {
        return FormattedTime {
            short: "Unknown time".to_string(),
            detailed: "Unknown time".to_string(),
        };
    }

    if minutes < 60 {
        return FormattedTime {
            short: format!("0:{:02}", minutes),
            detailed: format!("{} {}", minutes, plural(minutes, "minute")),
        };
    }

    let hours = minutes / 60;
    let minutes = minutes % 60;

    let detailed = if minutes == 0 {
        format!("{} {}", hours, plural(hours, "hour"))
    } else {
        format!(
            "{} {} {} {}",
            hours,
            plural(hours, "hour"),
            minutes,
            plural(minutes, "minute")
        )
    };

    FormattedTime {
        short: format!("{}:{:02}", hours, minutes),
        detailed,
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
