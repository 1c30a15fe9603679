use thiserror::Error;

pub const SENT_NOTICE: &str = "Message sent successfully!";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Contents of the contact form. Submitting only validates and resets the
/// form; nothing is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }

    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        self.validate()?;
        *self = Self::default();
        Ok(SENT_NOTICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(SENT_NOTICE));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_field_keeps_input() {
        let mut form = filled();
        form.email.clear();
        assert_eq!(form.submit(), Err(ContactError::MissingFields));
        assert_eq!(form.name, "Sam");
        assert_eq!(form.message, "Hello there");
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.message = "  \n ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all fields"
        );
    }
}
