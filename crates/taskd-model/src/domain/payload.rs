use serde::Deserialize;
use thiserror::Error;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 1;
/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters (got {len})"
    )]
    InvalidTitle { len: usize },
}

/// Payload for creating a task. `title` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
}

/// Payload for partially updating a task.
///
/// Each field is explicitly absent-vs-present: an absent field leaves the
/// stored value untouched, which is distinct from resetting it. A payload
/// with no fields at all is valid (the update still refreshes
/// `last_updated_at`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub is_done: Option<bool>,
}

impl CreateTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

impl UpdateTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

/// Check the title length constraint. Length is counted in Unicode scalar
/// values, not bytes, so multi-byte titles are not penalized.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTitle { len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_with_normal_title_is_valid() {
        let payload = CreateTask {
            title: "Buy milk".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_with_empty_title_is_rejected() {
        let payload = CreateTask {
            title: String::new(),
        };
        assert_eq!(
            payload.validate(),
            Err(ValidationError::InvalidTitle { len: 0 })
        );
    }

    #[test]
    fn create_title_boundaries() {
        let at_max = CreateTask {
            title: "a".repeat(TITLE_MAX_CHARS),
        };
        assert!(at_max.validate().is_ok());

        let over_max = CreateTask {
            title: "a".repeat(TITLE_MAX_CHARS + 1),
        };
        assert_eq!(
            over_max.validate(),
            Err(ValidationError::InvalidTitle {
                len: TITLE_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn title_length_is_counted_in_chars_not_bytes() {
        // 200 multi-byte characters exceed 200 bytes but are still valid.
        let payload = CreateTask {
            title: "й".repeat(TITLE_MAX_CHARS),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        assert!(UpdateTask::default().validate().is_ok());
    }

    #[test]
    fn update_with_invalid_title_is_rejected() {
        let payload = UpdateTask {
            title: Some(String::new()),
            is_done: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_absent_fields_deserialize_as_none() {
        let payload: UpdateTask = serde_json::from_str(r#"{"is_done":true}"#).unwrap();
        assert!(payload.title.is_none());
        assert_eq!(payload.is_done, Some(true));
    }
}
