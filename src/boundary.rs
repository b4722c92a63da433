use std::fmt;

/// Warnings raised while reducing a tag name to a version.
/// These are non-fatal: the raw tag name is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The pattern did not match at the start of the tag name
    PatternMismatch { tag: String, pattern: String },
    /// The pattern matched but its first group is missing or empty
    EmptyCapture { tag: String, pattern: String },
}

impl BoundaryWarning {
    /// The tag name the warning is about
    pub fn tag(&self) -> &str {
        match self {
            BoundaryWarning::PatternMismatch { tag, .. } => tag,
            BoundaryWarning::EmptyCapture { tag, .. } => tag,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PatternMismatch { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
            BoundaryWarning::EmptyCapture { tag, pattern } => {
                write!(
                    f,
                    "Pattern '{}' captured no version from tag '{}'",
                    pattern, tag
                )
            }
        }
    }
}

impl std::error::Error for BoundaryWarning {}

/// Receiver for non-fatal extraction warnings
pub trait DiagnosticSink {
    fn report(&self, warning: &BoundaryWarning);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&BoundaryWarning),
{
    fn report(&self, warning: &BoundaryWarning) {
        self(warning)
    }
}

/// Sink that forwards warnings to `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, warning: &BoundaryWarning) {
        tracing::warn!(tag = warning.tag(), "{}; using the tag name as-is", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_pattern_mismatch_display() {
        let warning = BoundaryWarning::PatternMismatch {
            tag: "latest".to_string(),
            pattern: "v(\\d+)".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Tag 'latest' does not match pattern 'v(\\d+)'"
        );
        assert_eq!(warning.tag(), "latest");
    }

    #[test]
    fn test_empty_capture_display() {
        let warning = BoundaryWarning::EmptyCapture {
            tag: "v1".to_string(),
            pattern: "v\\d".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("captured no version"));
        assert!(msg.contains("'v1'"));
    }

    #[test]
    fn test_closure_sink_receives_warning() {
        let seen = RefCell::new(Vec::new());
        let sink = |w: &BoundaryWarning| seen.borrow_mut().push(w.tag().to_string());

        sink.report(&BoundaryWarning::PatternMismatch {
            tag: "nightly".to_string(),
            pattern: "x".to_string(),
        });

        assert_eq!(seen.into_inner(), vec!["nightly".to_string()]);
    }
}
