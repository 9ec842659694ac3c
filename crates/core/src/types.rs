use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path segment into a [`DbId`].
///
/// Only positive base-10 integers are well-formed identifiers. Anything else
/// is rejected with [`CoreError::InvalidIdentifier`] before the store is
/// consulted.
pub fn parse_db_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    let invalid = || CoreError::InvalidIdentifier {
        entity,
        raw: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_db_id("Person", "42").unwrap(), 42);
        assert_eq!(parse_db_id("Person", "9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "abc", "-1", "0", "+7", "1.5", " 3", "64b7f0c2e4b0a1a2b3c4d5e6"] {
            assert_matches!(
                parse_db_id("Person", raw),
                Err(CoreError::InvalidIdentifier { entity: "Person", .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert_matches!(
            parse_db_id("Project", "99999999999999999999"),
            Err(CoreError::InvalidIdentifier { .. })
        );
    }
}
