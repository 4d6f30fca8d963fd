use super::*;

fn filled() -> FormSubmission {
    FormSubmission {
        draft: ContactDraft {
            name: " Ada ".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Hello there\n".to_owned(),
        },
        status: SubmissionStatus::Idle,
    }
}

// =============================================================
// ContactDraft
// =============================================================

#[test]
fn empty_draft_is_incomplete() {
    assert!(!ContactDraft::default().is_complete());
}

#[test]
fn whitespace_only_field_is_incomplete() {
    let mut form = filled();
    form.draft.message = "   ".to_owned();
    assert!(!form.draft.is_complete());
}

#[test]
fn trimmed_strips_each_field() {
    let draft = filled().draft.trimmed();
    assert_eq!(draft.name, "Ada");
    assert_eq!(draft.message, "Hello there");
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn idle_form_shows_send_label_and_no_notice() {
    let form = FormSubmission::default();
    assert_eq!(form.submit_label(), "Send Message");
    assert!(!form.is_busy());
    assert_eq!(form.notice("x@y.z"), None);
}

#[test]
fn begin_marks_sending_and_returns_trimmed_draft() {
    let mut form = filled();
    let draft = form.begin().unwrap();
    assert_eq!(draft.name, "Ada");
    assert!(form.is_busy());
    assert_eq!(form.submit_label(), "Sending...");
}

#[test]
fn begin_while_sending_is_ignored() {
    let mut form = filled();
    assert!(form.begin().is_some());
    assert!(form.begin().is_none());
    assert!(form.is_busy());
}

#[test]
fn begin_with_blank_field_is_rejected_locally() {
    let mut form = FormSubmission::default();
    assert!(form.begin().is_none());
    assert_eq!(form.status, SubmissionStatus::Incomplete);
    assert_eq!(form.notice("x@y.z").as_deref(), Some(INCOMPLETE_NOTICE));
}

#[test]
fn success_resets_fields_and_reenables() {
    let mut form = filled();
    form.begin();
    form.finish(Ok(()));
    assert_eq!(form.status, SubmissionStatus::Sent);
    assert_eq!(form.draft, ContactDraft::default());
    assert!(!form.is_busy());
    assert_eq!(
        form.notice("x@y.z").as_deref(),
        Some("Message sent successfully! I'll get back to you soon.")
    );
}

#[test]
fn failure_keeps_fields_and_names_fallback_address() {
    let mut form = filled();
    form.begin();
    form.finish(Err("503".to_owned()));
    assert!(!form.is_busy());
    assert_eq!(form.draft.email, "ada@example.com");
    assert_eq!(
        form.notice("karimessac@gmail.com").as_deref(),
        Some("Failed to send message. Please try again or contact me directly at karimessac@gmail.com")
    );
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut form = filled();
    form.finish(Ok(()));
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert_eq!(form.draft.name, " Ada ");
}

#[test]
fn retry_after_failure_is_allowed() {
    let mut form = filled();
    form.begin();
    form.finish(Err("offline".to_owned()));
    assert!(form.begin().is_some());
}
