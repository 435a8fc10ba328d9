//! Email feedback form.
//!
//! The page has no backend endpoint for feedback: a valid form is turned into
//! a `mailto:` link and handed to the visitor's mail client.

use crate::shared::language::Language;
use thiserror::Error;

pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("message longer than {} characters", MAX_MESSAGE_CHARS)]
    MessageTooLong,
    #[error("invalid email address")]
    InvalidEmail,
}

impl FeedbackError {
    /// Text shown next to the form.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (FeedbackError::EmptyMessage, Language::Arabic) => "يرجى كتابة رسالتك.",
            (FeedbackError::EmptyMessage, Language::English) => "Please write your message.",
            (FeedbackError::MessageTooLong, Language::Arabic) => {
                "الرسالة طويلة جداً (الحد الأقصى 2000 حرف)."
            }
            (FeedbackError::MessageTooLong, Language::English) => {
                "Message is too long (2000 characters max)."
            }
            (FeedbackError::InvalidEmail, Language::Arabic) => "البريد الإلكتروني غير صحيح.",
            (FeedbackError::InvalidEmail, Language::English) => {
                "Please enter a valid email address."
            }
        }
    }
}

/// Loose `local@domain.tld` shape check; the mail client does the rest.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(FeedbackError::MessageTooLong);
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            return Err(FeedbackError::InvalidEmail);
        }
        Ok(())
    }

    fn subject(language: Language) -> &'static str {
        match language {
            Language::Arabic => "ملاحظات حول صفحة إبرة الظهر",
            Language::English => "Feedback on the epidural analgesia page",
        }
    }

    fn body(&self, language: Language) -> String {
        let (name_label, email_label) = match language {
            Language::Arabic => ("الاسم", "البريد الإلكتروني"),
            Language::English => ("Name", "Email"),
        };
        let mut body = String::new();
        let name = self.name.trim();
        if !name.is_empty() {
            body.push_str(&format!("{}: {}\n", name_label, name));
        }
        let email = self.email.trim();
        if !email.is_empty() {
            body.push_str(&format!("{}: {}\n", email_label, email));
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(self.message.trim());
        body
    }

    /// Validate and build the `mailto:` link for `recipient`.
    pub fn mailto_url(&self, recipient: &str, language: Language) -> Result<String, FeedbackError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(Self::subject(language)),
            urlencoding::encode(&self.body(language)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FeedbackForm {
        FeedbackForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_message_required() {
        assert_eq!(
            form("", "", "   \n").validate(),
            Err(FeedbackError::EmptyMessage)
        );
        assert!(form("", "", "thanks").validate().is_ok());
    }

    #[test]
    fn test_message_length_cap() {
        let long = "x".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            form("", "", &long).validate(),
            Err(FeedbackError::MessageTooLong)
        );
        // Arabic letters count as one character each
        let arabic = "ب".repeat(MAX_MESSAGE_CHARS);
        assert!(form("", "", &arabic).validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@b@c.de"));
        assert_eq!(
            form("", "nope", "hi").validate(),
            Err(FeedbackError::InvalidEmail)
        );
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let url = form("Sara", "sara@example.com", "Very clear & useful")
            .mailto_url("team@example.org", Language::English)
            .unwrap();
        assert!(url.starts_with("mailto:team@example.org?subject=Feedback%20on%20the"));
        assert!(url.contains("Name%3A%20Sara%0A"));
        assert!(url.contains("Very%20clear%20%26%20useful"));
    }

    #[test]
    fn test_mailto_rejects_invalid_form() {
        assert_eq!(
            form("", "", "").mailto_url("team@example.org", Language::Arabic),
            Err(FeedbackError::EmptyMessage)
        );
    }

    #[test]
    fn test_error_messages_are_localized() {
        let en = FeedbackError::InvalidEmail.message(Language::English);
        let ar = FeedbackError::InvalidEmail.message(Language::Arabic);
        assert_ne!(en, ar);
        assert!(en.is_ascii());
    }
}
