//! Contact form validation.

use crate::content::ContentTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Sent(String),
    Rejected { invalid: Vec<ContactField>, notice: String },
}

const REQUIRED: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Required fields left blank.
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Validate and produce the notice to show, worded from `tree` with
    /// `default` covering untranslated messages.
    pub fn submit(&self, tree: &ContentTree, default: &ContentTree) -> Submission {
        let message = |key: &str| {
            tree.get(key)
                .or_else(|| default.get(key))
                .unwrap_or_default()
                .to_string()
        };
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            Submission::Sent(message("messages-message-sent"))
        } else {
            Submission::Rejected {
                invalid,
                notice: message("messages-fill-required"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn blank_required_fields_are_flagged() {
        let form = ContactForm {
            name: "Asha".into(),
            email: "  ".into(),
            ..ContactForm::default()
        };
        let english = ContentTree::english();
        match form.submit(&english, &english) {
            Submission::Rejected { invalid, notice } => {
                assert_eq!(invalid, vec![ContactField::Email, ContactField::Message]);
                assert_eq!(notice, "Please fill all required fields.");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn subject_is_optional_and_messages_fall_back() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ravi".into());
        form.set(ContactField::Email, "ravi@example.org".into());
        form.set(ContactField::Message, "Jai Bhim".into());
        let tamil = ContentTree::from_pairs(Language::Tamil, [("nav-home", "முகப்பு")]);
        assert_eq!(
            form.submit(&tamil, &ContentTree::english()),
            Submission::Sent("Thank you for your message! We will get back to you soon.".into())
        );
    }
}
