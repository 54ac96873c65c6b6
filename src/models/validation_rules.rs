use std::borrow::Cow;
use std::collections::HashMap;

use validator::ValidationError;

pub fn validate_non_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError {
            code: Cow::from("blank"),
            message: Some(Cow::from("Value must not be empty.")),
            params: HashMap::new(),
        })
    } else {
        Ok(())
    }
}
