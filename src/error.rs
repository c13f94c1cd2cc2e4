use thiserror::Error;

/// Failure of a single percentage cell
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,

    #[error("\"{input}\" is not a number")]
    NotNumeric { input: String },

    #[error("{value} is negative (percentages start at 0)")]
    OutOfDomain { value: f64 },
}

/// Failure of one sub-activity token
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("missing ':' between name and value")]
    MissingSeparator,

    #[error("sub-activity name is empty")]
    EmptyName,

    #[error("expected <actual>|<planned>")]
    UnmatchedPipe,

    #[error("{field}: {source}")]
    Value {
        field: &'static str,
        #[source]
        source: ValueError,
    },
}

impl TokenError {
    pub(crate) fn value(field: &'static str) -> impl FnOnce(ValueError) -> TokenError {
        move |source| TokenError::Value { field, source }
    }
}

/// The tabular source itself could not be read
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{location} not found")]
    NotFound { location: String },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {location} failed: {reason}")]
    Http { location: String, reason: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid delimiter \"{input}\" (expected a single character such as ',' or ';')")]
    InvalidDelimiter { input: String },

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let e = ValueError::NotNumeric {
            input: "abc".to_string(),
        };
        assert_eq!(e.to_string(), r#""abc" is not a number"#);
        assert_eq!(
            ValueError::OutOfDomain { value: -5.0 }.to_string(),
            "-5 is negative (percentages start at 0)"
        );
    }

    #[test]
    fn token_error_wraps_value_error() {
        let e = TokenError::value("actual")(ValueError::Empty);
        assert_eq!(e.to_string(), "actual: value is empty");
    }

    #[test]
    fn source_error_display() {
        let e = SourceError::NotFound {
            location: "missing.csv".to_string(),
        };
        assert_eq!(e.to_string(), "missing.csv not found");
    }

    #[test]
    fn app_error_display_delimiter() {
        let e = AppError::InvalidDelimiter {
            input: "ab".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid delimiter "ab" (expected a single character such as ',' or ';')"#
        );
    }

    #[test]
    fn jq_error_not_found() {
        assert_eq!(
            JqError::NotFound.to_string(),
            "jq not found. Please install jq to use --jq option."
        );
    }

    #[test]
    fn app_error_from_jq_error() {
        let jq = JqError::Filter("bad filter".to_string());
        let app: AppError = jq.into();
        assert_eq!(app.to_string(), "jq error: bad filter");
    }
}
