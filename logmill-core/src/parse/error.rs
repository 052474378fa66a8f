use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match the access log format")]
    MalformedLine,

    #[error("failed to parse timestamp \"{value}\": {source}")]
    BadTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to parse byte count \"{value}\": {source}")]
    BadByteCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("failed to parse time taken \"{value}\": {source}")]
    BadDuration {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl ParseError {
    pub fn bad_timestamp(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::BadTimestamp {
            value: value.into(),
            source,
        }
    }

    pub fn bad_byte_count(value: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::BadByteCount {
            value: value.into(),
            source,
        }
    }

    pub fn bad_duration(value: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::BadDuration {
            value: value.into(),
            source,
        }
    }
}
