//! Contact form fields and the submission lifecycle.
//!
//! The submit button is disabled while a send is in flight and re-enabled
//! whatever the outcome. Success clears the fields; failure keeps them so the
//! visitor can retry by hand.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";
pub const INCOMPLETE_NOTICE: &str = "Please fill in your name, email and message.";

/// Current contents of the form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Every field has non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Copy with surrounding whitespace removed from each field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Where the form is in its send cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Rejected locally before sending.
    Incomplete,
    Sending,
    Sent,
    /// Transport failure; the string is for the developer log.
    Failed(String),
}

/// Contact form state: fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
}

impl FormSubmission {
    /// Start sending the current draft.
    ///
    /// Returns the trimmed draft to send, or `None` when a send is already in
    /// flight or a field is blank.
    pub fn begin(&mut self) -> Option<ContactDraft> {
        if self.is_busy() {
            return None;
        }
        if !self.draft.is_complete() {
            self.status = SubmissionStatus::Incomplete;
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(self.draft.trimmed())
    }

    /// Record the transport outcome. Ignored unless a send is in flight.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_busy() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                self.draft = ContactDraft::default();
            }
            Err(err) => self.status = SubmissionStatus::Failed(err),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() { SENDING_LABEL } else { SEND_LABEL }
    }

    /// User-facing message for the current status, if any.
    #[must_use]
    pub fn notice(&self, contact_email: &str) -> Option<String> {
        match &self.status {
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
            SubmissionStatus::Incomplete => Some(INCOMPLETE_NOTICE.to_owned()),
            SubmissionStatus::Sent => Some(SENT_NOTICE.to_owned()),
            SubmissionStatus::Failed(_) => Some(failure_notice(contact_email)),
        }
    }
}

/// Failure message pointing at the fallback address.
#[must_use]
pub fn failure_notice(contact_email: &str) -> String {
    format!("Failed to send message. Please try again or contact me directly at {contact_email}")
}
