use crate::parse::error::ParseError;
use crate::parse::types::{RequestRecord, StatusClass};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Combined log format `%a %l %u %t "%r" %>s %b %D`:
/// address, logname and user are matched but discarded; the timestamp,
/// status code, byte count and time taken are captured.
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+ \S+ \S+ \[(\S+ \S+)\] .* (\d{3}) (\d+|-) (\d+)$").unwrap());

/// e.g. `30/Mar/2015:05:04:20 +0100`
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub fn parse_line(line: &str) -> Result<RequestRecord, ParseError> {
    let captures = LINE_RE.captures(line).ok_or(ParseError::MalformedLine)?;

    let timestamp_str = &captures[1];
    let timestamp = DateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
        .map_err(|e| ParseError::bad_timestamp(timestamp_str, e))?;

    let status = StatusClass::from_status_code(&captures[2]);

    let bytes_str = &captures[3];
    let bytes_transferred = if bytes_str == "-" {
        // A bodyless response logs "-" for its byte count.
        0
    } else {
        bytes_str
            .parse()
            .map_err(|e| ParseError::bad_byte_count(bytes_str, e))?
    };

    let time_str = &captures[4];
    let time_taken_micros = time_str
        .parse()
        .map_err(|e| ParseError::bad_duration(time_str, e))?;

    Ok(RequestRecord {
        timestamp,
        status,
        bytes_transferred,
        time_taken_micros,
    })
}
