use serde::Serializer;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Unix time in milliseconds, the unit every `created_at` column is stored in.
pub fn unix_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

/// Serializes a stored unix timestamp (milliseconds) as an RFC 3339 string.
pub fn serialize_timestamp<S: Serializer>(
    timestamp: &i64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let value = OffsetDateTime::from_unix_timestamp_nanos(i128::from(*timestamp) * 1_000_000)
        .map_err(serde::ser::Error::custom)?
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Row {
        #[serde(serialize_with = "serialize_timestamp")]
        created_at: i64,
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let json = serde_json::to_string(&Row {
            created_at: 1_700_000_000_000,
        })
        .unwrap();

        assert_eq!(json, r#"{"created_at":"2023-11-14T22:13:20Z"}"#);
    }

    #[test]
    fn test_timestamp_keeps_milliseconds() {
        let json = serde_json::to_string(&Row {
            created_at: 1_700_000_000_250,
        })
        .unwrap();

        assert_eq!(json, r#"{"created_at":"2023-11-14T22:13:20.25Z"}"#);
    }

    #[test]
    fn test_unix_millis_truncates_below_a_millisecond() {
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
            + time::Duration::microseconds(100_999);

        assert_eq!(unix_millis(at), 1_700_000_000_100);
    }
}
