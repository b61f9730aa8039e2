//! Share links, share text and the share fallback chain
//!
//! A result is shared through whichever capability is available when the user
//! asks: a native share target first, then the clipboard, and finally a
//! message asking the user to copy the link by hand.

use crate::core::calculator::CalculationResult;
use crate::core::format::{format_duration, group_digits};
use crate::core::level::classify_level;
use thiserror::Error;
use url::Url;

/// Query parameter carrying the monthly income.
pub const SALARY_PARAM: &str = "s";

/// Largest income accepted from a link, in 만원.
pub const MAX_LINK_SALARY: u64 = 100_000;

/// Title passed to native share targets.
pub const SHARE_TITLE: &str = "내 월급으로 아파트 사려면?";

/// Confirmation shown after copying to the clipboard.
pub const COPIED_MESSAGE: &str = "클립보드에 복사됐어요! 카톡이나 인스타에 공유해보세요 😄";

/// Errors raised while building links or sharing.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The configured origin is not an absolute http(s) URL.
    #[error("invalid share origin '{origin}': {reason}")]
    InvalidOrigin {
        /// Offending origin
        origin: String,
        /// Why it was rejected
        reason: String,
    },
    /// A share or clipboard target rejected the payload.
    #[error("{target} rejected the share: {reason}")]
    Rejected {
        /// Capability that failed
        target: &'static str,
        /// Failure detail
        reason: String,
    },
}

/// Parse and check a share origin.
///
/// # Errors
/// Returns [`ShareError::InvalidOrigin`] for unparsable or non-http(s) origins.
pub fn parse_origin(origin: &str) -> Result<Url, ShareError> {
    let url = Url::parse(origin).map_err(|e| ShareError::InvalidOrigin {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ShareError::InvalidOrigin {
            origin: origin.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        }),
    }
}

/// Build the link that reopens the calculator with `monthly_income` filled in.
///
/// # Errors
/// Returns [`ShareError::InvalidOrigin`] when `origin` is not an http(s) URL.
pub fn share_link(origin: &str, monthly_income: u64) -> Result<String, ShareError> {
    let mut url = parse_origin(origin)?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(SALARY_PARAM, &monthly_income.to_string());
    Ok(url.into())
}

/// Host shown as the card watermark, falling back to the raw origin.
#[must_use]
pub fn watermark(origin: &str) -> String {
    parse_origin(origin)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| origin.to_string())
}

/// Read the income from a share link.
///
/// Accepts a full URL or a bare query string (`s=300`, `?s=300`). Yields the
/// value only if it is a whole number with `0 < s <= 100,000`; anything else
/// is ignored.
#[must_use]
pub fn salary_from_link(link: &str) -> Option<u64> {
    let link = link.trim();
    let query = Url::parse(link).map_or_else(
        |_| link.trim_start_matches('?').to_string(),
        |url| url.query().unwrap_or_default().to_string(),
    );
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SALARY_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
        .filter(|salary| (1..=MAX_LINK_SALARY).contains(salary))
}

/// What gets handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Share sheet title
    pub title: String,
    /// Message body, including the link
    pub text: String,
    /// Link back to the calculator
    pub url: String,
}

impl SharePayload {
    /// Build the payload for a result.
    ///
    /// # Errors
    /// Returns [`ShareError::InvalidOrigin`] when `origin` is not an http(s) URL.
    pub fn for_result(result: &CalculationResult, origin: &str) -> Result<Self, ShareError> {
        let url = share_link(origin, result.monthly_income)?;
        let text = share_text(result, &url);
        Ok(Self {
            title: SHARE_TITLE.to_string(),
            text,
            url,
        })
    }
}

/// Message body for a result.
#[must_use]
pub fn share_text(result: &CalculationResult, url: &str) -> String {
    format!(
        "월급 {}만원으로 {} 아파트 사려면 {} 걸린다고?! {}\n👉 내 월급도 계산해보기: {url}",
        group_digits(result.monthly_income),
        result.region.label,
        format_duration(result.months),
        classify_level(result.months).emoji,
    )
}

/// Something that can take a share payload: a native share sheet or a clipboard.
pub trait ShareTarget {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Hand the payload over.
    ///
    /// # Errors
    /// Returns [`ShareError::Rejected`] when the target fails or is dismissed.
    fn deliver(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Which path a share attempt ended on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share target accepted the payload.
    Shared,
    /// The native share target was dismissed or failed. Nothing else is tried.
    Cancelled,
    /// The text was copied to the clipboard.
    Copied,
    /// Nothing worked; the user must copy the link themselves.
    ManualCopy {
        /// Link to show the user
        url: String,
    },
}

impl ShareOutcome {
    /// User-facing notice for this outcome, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Shared | Self::Cancelled => None,
            Self::Copied => Some(COPIED_MESSAGE.to_string()),
            Self::ManualCopy { url } => Some(format!("복사 실패. 직접 URL을 복사해주세요: {url}")),
        }
    }
}

/// Share through the best available capability.
///
/// A present native target is final: its failure counts as the user cancelling.
/// Without one, the clipboard is tried; a missing or failing clipboard falls
/// back to manual copying.
pub fn share_with_fallback(
    native: Option<&dyn ShareTarget>,
    clipboard: Option<&dyn ShareTarget>,
    payload: &SharePayload,
) -> ShareOutcome {
    if let Some(target) = native {
        return match target.deliver(payload) {
            Ok(()) => {
                logger::info!("Shared via {}", target.name());
                ShareOutcome::Shared
            }
            Err(e) => {
                logger::info!("Share via {} cancelled: {e}", target.name());
                ShareOutcome::Cancelled
            }
        };
    }

    let Some(target) = clipboard else {
        logger::warn!("No clipboard target configured");
        return ShareOutcome::ManualCopy {
            url: payload.url.clone(),
        };
    };

    match target.deliver(payload) {
        Ok(()) => {
            logger::info!("Copied share text via {}", target.name());
            ShareOutcome::Copied
        }
        Err(e) => {
            logger::warn!("Clipboard copy failed: {e}");
            ShareOutcome::ManualCopy {
                url: payload.url.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute;
    use crate::core::catalog::find_region;
    use std::cell::Cell;

    struct FakeTarget {
        succeed: bool,
        calls: Cell<usize>,
    }

    impl FakeTarget {
        const fn new(succeed: bool) -> Self {
            Self {
                succeed,
                calls: Cell::new(0),
            }
        }
    }

    impl ShareTarget for FakeTarget {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn deliver(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            self.calls.set(self.calls.get() + 1);
            if self.succeed {
                Ok(())
            } else {
                Err(ShareError::Rejected {
                    target: "fake",
                    reason: "dismissed".to_string(),
                })
            }
        }
    }

    fn payload() -> SharePayload {
        let result = compute(300, 100, find_region("gangnam").unwrap()).unwrap();
        SharePayload::for_result(&result, "https://gangnam-apt.vercel.app").unwrap()
    }

    #[test]
    fn test_native_share_wins() {
        let native = FakeTarget::new(true);
        let clipboard = FakeTarget::new(true);
        let outcome = share_with_fallback(Some(&native), Some(&clipboard), &payload());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(clipboard.calls.get(), 0);
    }

    #[test]
    fn test_native_failure_is_cancel_without_fallback() {
        let native = FakeTarget::new(false);
        let clipboard = FakeTarget::new(true);
        let outcome = share_with_fallback(Some(&native), Some(&clipboard), &payload());
        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert_eq!(outcome.notice(), None);
        assert_eq!(clipboard.calls.get(), 0);
    }

    #[test]
    fn test_clipboard_when_native_missing() {
        let clipboard = FakeTarget::new(true);
        let outcome = share_with_fallback(None, Some(&clipboard), &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(outcome.notice().as_deref(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn test_manual_copy_when_clipboard_fails_or_missing() {
        let clipboard = FakeTarget::new(false);
        let expected = ShareOutcome::ManualCopy {
            url: "https://gangnam-apt.vercel.app/?s=300".to_string(),
        };
        assert_eq!(
            share_with_fallback(None, Some(&clipboard), &payload()),
            expected
        );
        assert_eq!(share_with_fallback(None, None, &payload()), expected);
        assert_eq!(
            expected.notice().as_deref(),
            Some("복사 실패. 직접 URL을 복사해주세요: https://gangnam-apt.vercel.app/?s=300")
        );
    }

    #[test]
    fn test_origin_must_be_http() {
        assert!(parse_origin("https://example.com").is_ok());
        assert!(parse_origin("ftp://example.com").is_err());
        assert!(parse_origin("not a url").is_err());
    }
}
