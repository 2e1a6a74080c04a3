//! Record severity and native log priority scales

/// Record-side severity scale
///
/// The numeric values match the conventional logging levels, so threshold
/// comparisons read the same as the host logging configuration they replace.
/// `Critical` has no tracing counterpart; it is reserved for panics and other
/// unrecoverable conditions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace = 5,
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    /// Interpret a numeric level as a severity.
    ///
    /// Values between the discrete steps round down to the highest severity
    /// they reach, matching numeric-threshold semantics.
    pub fn from_u8(value: u8) -> Self {
        if value >= Severity::Critical as u8 {
            Severity::Critical
        } else if value >= Severity::Error as u8 {
            Severity::Error
        } else if value >= Severity::Warning as u8 {
            Severity::Warning
        } else if value >= Severity::Info as u8 {
            Severity::Info
        } else if value >= Severity::Debug as u8 {
            Severity::Debug
        } else {
            Severity::Trace
        }
    }

    /// Directive string accepted by the tracing filter.
    ///
    /// `Critical` collapses to `error`; tracing has no higher level.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error | Severity::Critical => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Trace => write!(f, "TRACE"),
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Android log priority scale
///
/// The numeric values match `android/log.h`, so the discriminant can be
/// handed to the native writer unchanged.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogPriority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl LogPriority {
    /// Map a record severity to the native priority.
    ///
    /// Thresholds are evaluated from most to least severe; the first matching
    /// rule wins. Anything below `Debug` lands on `Verbose`.
    pub fn from_severity(severity: Severity) -> Self {
        if severity >= Severity::Critical {
            LogPriority::Assert
        } else if severity >= Severity::Error {
            LogPriority::Error
        } else if severity >= Severity::Warning {
            LogPriority::Warn
        } else if severity >= Severity::Info {
            LogPriority::Info
        } else if severity >= Severity::Debug {
            LogPriority::Debug
        } else {
            LogPriority::Verbose
        }
    }

    /// Native numeric value.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for LogPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogPriority::Verbose => write!(f, "V"),
            LogPriority::Debug => write!(f, "D"),
            LogPriority::Info => write!(f, "I"),
            LogPriority::Warn => write!(f, "W"),
            LogPriority::Error => write!(f, "E"),
            LogPriority::Assert => write!(f, "A"),
        }
    }
}
