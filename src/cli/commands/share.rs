//! Share command handler
//!
//! External commands stand in for the platform share sheet and clipboard:
//! each receives the share text on stdin, with the title and link in the
//! environment.

use crate::args::CalcArgs;
use gangnam_apt::config::Config;
use gangnam_apt::core::share::{share_with_fallback, ShareError, SharePayload, ShareTarget};
use logger::{debug, error};
use std::io::Write;
use std::process::{Command, Stdio};

/// Environment variable carrying the share title
const TITLE_ENV: &str = "GANGNAM_APT_SHARE_TITLE";

/// Environment variable carrying the share link
const URL_ENV: &str = "GANGNAM_APT_SHARE_URL";

/// A share target backed by an external command line.
#[derive(Debug, Clone)]
pub struct CommandTarget {
    name: &'static str,
    program: String,
    args: Vec<String>,
}

impl CommandTarget {
    /// Build a target from a whitespace-separated command line; `None` when empty.
    #[must_use]
    pub fn parse(name: &'static str, command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            name,
            program,
            args: parts.collect(),
        })
    }

    fn rejected(&self, reason: impl ToString) -> ShareError {
        ShareError::Rejected {
            target: self.name,
            reason: reason.to_string(),
        }
    }
}

impl ShareTarget for CommandTarget {
    fn name(&self) -> &'static str {
        self.name
    }

    fn deliver(&self, payload: &SharePayload) -> Result<(), ShareError> {
        debug!("Running {} command: {} {:?}", self.name, self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(TITLE_ENV, &payload.title)
            .env(URL_ENV, &payload.url)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| self.rejected(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(payload.text.as_bytes())
                .map_err(|e| self.rejected(e))?;
        }

        let status = child.wait().map_err(|e| self.rejected(e))?;
        if status.success() {
            Ok(())
        } else {
            Err(self.rejected(format!("exited with {status}")))
        }
    }
}

/// Run the share command.
pub fn run(input: &CalcArgs, config: &Config) {
    let Some(result) = super::calculate(input, config) else {
        return;
    };

    let payload = match SharePayload::for_result(&result, &config.share.origin) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Cannot build share link: {e}");
            eprintln!("✗ {e}");
            return;
        }
    };

    println!("{}", payload.text);

    let native = CommandTarget::parse("share", &config.share.command);
    let clipboard = CommandTarget::parse("clipboard", &config.share.clipboard_command);
    let outcome = share_with_fallback(
        native.as_ref().map(|t| t as &dyn ShareTarget),
        clipboard.as_ref().map(|t| t as &dyn ShareTarget),
        &payload,
    );

    if let Some(notice) = outcome.notice() {
        println!("{notice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangnam_apt::core::share::ShareOutcome;

    fn payload() -> SharePayload {
        SharePayload {
            title: "내 월급으로 아파트 사려면?".to_string(),
            text: "월급 300만원으로 강남 아파트 사려면 83년 4개월 걸린다고?! 💀".to_string(),
            url: "https://gangnam-apt.vercel.app/?s=300".to_string(),
        }
    }

    #[test]
    fn test_parse_command_line() {
        let target = CommandTarget::parse("clipboard", "xclip -selection clipboard").unwrap();
        assert_eq!(target.program, "xclip");
        assert_eq!(target.args, vec!["-selection", "clipboard"]);
        assert!(CommandTarget::parse("clipboard", "   ").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command_copies() {
        let clipboard = CommandTarget::parse("clipboard", "cat").unwrap();
        let outcome = share_with_fallback(None, Some(&clipboard), &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_falls_back_to_manual_copy() {
        let clipboard = CommandTarget::parse("clipboard", "false").unwrap();
        let outcome = share_with_fallback(None, Some(&clipboard), &payload());
        assert_eq!(
            outcome,
            ShareOutcome::ManualCopy {
                url: "https://gangnam-apt.vercel.app/?s=300".to_string()
            }
        );
    }

    #[test]
    fn test_missing_program_is_rejected() {
        let target = CommandTarget::parse("share", "gangnamapt-no-such-program-xyz").unwrap();
        assert!(matches!(
            target.deliver(&payload()),
            Err(ShareError::Rejected { target: "share", .. })
        ));
    }
}
