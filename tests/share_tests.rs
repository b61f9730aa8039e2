//! Integration tests for share links, share text, and the share fallback chain

use gangnam_apt::core::share::{
    salary_from_link, share_link, share_text, share_with_fallback, ShareError, ShareOutcome,
    SharePayload, ShareTarget, COPIED_MESSAGE, SHARE_TITLE,
};
use gangnam_apt::core::{compute, find_region};
use std::cell::RefCell;

const ORIGIN: &str = "https://gangnam-apt.vercel.app";

/// Records every payload it receives and succeeds or fails as configured.
struct RecordingTarget {
    succeed: bool,
    received: RefCell<Vec<String>>,
}

impl RecordingTarget {
    fn new(succeed: bool) -> Self {
        Self {
            succeed,
            received: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.received.borrow().len()
    }
}

impl ShareTarget for RecordingTarget {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn deliver(&self, payload: &SharePayload) -> Result<(), ShareError> {
        self.received.borrow_mut().push(payload.text.clone());
        if self.succeed {
            Ok(())
        } else {
            Err(ShareError::Rejected {
                target: "recording",
                reason: "dismissed".to_string(),
            })
        }
    }
}

fn gangnam_payload() -> SharePayload {
    let result = compute(300, 100, find_region("gangnam").unwrap()).unwrap();
    SharePayload::for_result(&result, ORIGIN).unwrap()
}

#[test]
fn link_carries_the_income() {
    assert_eq!(
        share_link(ORIGIN, 300).unwrap(),
        "https://gangnam-apt.vercel.app/?s=300"
    );
    assert_eq!(
        share_link("https://example.com/calc?s=1#result", 42).unwrap(),
        "https://example.com/calc?s=42"
    );
    assert!(share_link("not a url", 300).is_err());
}

#[test]
fn link_round_trips_through_salary_parsing() {
    let link = share_link(ORIGIN, 12_345).unwrap();
    assert_eq!(salary_from_link(&link), Some(12_345));
}

#[test]
fn salary_parameter_bounds() {
    assert_eq!(salary_from_link("https://x.test/?s=1"), Some(1));
    assert_eq!(salary_from_link("https://x.test/?s=100000"), Some(100_000));
    assert_eq!(salary_from_link("https://x.test/?s=0"), None);
    assert_eq!(salary_from_link("https://x.test/?s=100001"), None);
    assert_eq!(salary_from_link("https://x.test/?s=-5"), None);
    assert_eq!(salary_from_link("https://x.test/?s=three"), None);
    assert_eq!(salary_from_link("https://x.test/"), None);
}

#[test]
fn salary_parameter_from_bare_query() {
    assert_eq!(salary_from_link("s=300"), Some(300));
    assert_eq!(salary_from_link("?lang=ko&s=450"), Some(450));
}

#[test]
fn share_text_mentions_duration_and_level() {
    let result = compute(300, 100, find_region("gangnam").unwrap()).unwrap();
    let text = share_text(&result, "https://gangnam-apt.vercel.app/?s=300");
    assert_eq!(
        text,
        "월급 300만원으로 강남 아파트 사려면 83년 4개월 걸린다고?! 💀\n\
         👉 내 월급도 계산해보기: https://gangnam-apt.vercel.app/?s=300"
    );
}

#[test]
fn payload_has_title_and_link() {
    let payload = gangnam_payload();
    assert_eq!(payload.title, SHARE_TITLE);
    assert_eq!(payload.url, "https://gangnam-apt.vercel.app/?s=300");
    assert!(payload.text.ends_with(&payload.url));
}

#[test]
fn native_share_wins_when_present() {
    let native = RecordingTarget::new(true);
    let clipboard = RecordingTarget::new(true);
    let outcome = share_with_fallback(Some(&native), Some(&clipboard), &gangnam_payload());

    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(outcome.notice(), None);
    assert_eq!(native.calls(), 1);
    assert_eq!(clipboard.calls(), 0);
}

#[test]
fn dismissed_native_share_does_not_fall_back() {
    let native = RecordingTarget::new(false);
    let clipboard = RecordingTarget::new(true);
    let outcome = share_with_fallback(Some(&native), Some(&clipboard), &gangnam_payload());

    assert_eq!(outcome, ShareOutcome::Cancelled);
    assert_eq!(clipboard.calls(), 0);
}

#[test]
fn clipboard_used_without_native_share() {
    let clipboard = RecordingTarget::new(true);
    let payload = gangnam_payload();
    let outcome = share_with_fallback(None, Some(&clipboard), &payload);

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(outcome.notice().as_deref(), Some(COPIED_MESSAGE));
    assert_eq!(clipboard.received.borrow().as_slice(), [payload.text]);
}

#[test]
fn manual_copy_when_nothing_works() {
    let clipboard = RecordingTarget::new(false);
    let payload = gangnam_payload();

    for outcome in [
        share_with_fallback(None, Some(&clipboard), &payload),
        share_with_fallback(None, None, &payload),
    ] {
        assert_eq!(
            outcome,
            ShareOutcome::ManualCopy {
                url: payload.url.clone()
            }
        );
        assert!(outcome.notice().unwrap().contains(&payload.url));
    }
}
