use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

pub const CONFIRMATION: &str = "Your message has been sent!";

/// Which input of the contact form is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl std::str::FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(format!("unknown contact field '{}'", other)),
        }
    }
}

/// A submitted inquiry
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Contact form inputs; cleared after each submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.to_string();
    }

    /// Send whatever was typed and reset the form
    pub fn submit(&mut self) -> ContactMessage {
        let form = std::mem::take(self);
        let sent = ContactMessage {
            name: form.name,
            email: form.email,
            message: form.message,
            sent_at: Utc::now(),
        };
        info!(
            name = %sent.name,
            email = %sent.email,
            sent_at = %sent.sent_at.to_rfc3339(),
            "📨 Contact message submitted"
        );
        info!("Message: {}", sent.message);
        sent
    }

    pub fn render(&self) -> String {
        let show = |value: &str, placeholder: &'static str| -> String {
            if value.is_empty() {
                format!("<{}>", placeholder)
            } else {
                value.to_string()
            }
        };
        format!(
            "--- Contact Us ---\nName:    {}\nEmail:   {}\nMessage: {}\n\nUse 'set name|email|message <text>' then 'submit'.\n",
            show(&self.name, "Enter your name"),
            show(&self.email, "Enter your email"),
            show(&self.message, "Enter your message"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_returns_message_and_resets() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "Is the loft still available?");

        let before = Utc::now();
        let sent = form.submit();
        assert!(sent.sent_at >= before && sent.sent_at <= Utc::now());
        assert_eq!(sent.name, "Ada");
        assert_eq!(sent.message, "Is the loft still available?");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn empty_form_still_submits() {
        let mut form = ContactForm::default();
        let sent = form.submit();
        assert!(sent.email.is_empty());
    }

    #[test]
    fn render_shows_placeholders() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "a@b.c");
        let text = form.render();
        assert!(text.contains("<Enter your name>"));
        assert!(text.contains("Email:   a@b.c"));
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("EMAIL".parse::<ContactField>(), Ok(ContactField::Email));
        assert!("phone".parse::<ContactField>().is_err());
    }
}
