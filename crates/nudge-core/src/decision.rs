use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::version::compare;

/// The newest published release, as reported by the remote versions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    pub message: String,
    pub is_critical: bool,
    pub store_url: String,
}

/// Whether to show the update prompt, and whether the user may postpone it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateDecision {
    pub should_prompt: bool,
    pub dismissible: bool,
}

/// Derive the update decision from the latest published release and the
/// running version. Prompts only when the published version is strictly
/// newer; critical releases may not be dismissed.
#[must_use]
pub fn decide(remote: &UpdateInfo, local_version: &str) -> UpdateDecision {
    UpdateDecision {
        should_prompt: compare(&remote.version, local_version) == Ordering::Greater,
        dismissible: !remote.is_critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(version: &str, is_critical: bool) -> UpdateInfo {
        UpdateInfo {
            version: version.to_string(),
            message: "Bug fixes and improvements".to_string(),
            is_critical,
            store_url: "https://store.example.com/app".to_string(),
        }
    }

    #[test]
    fn critical_newer_release_prompts_without_dismiss() {
        let decision = decide(&release("2.0.0", true), "1.0.0");
        assert!(decision.should_prompt);
        assert!(!decision.dismissible);
    }

    #[test]
    fn newer_release_prompts_with_dismiss() {
        let decision = decide(&release("1.1.0", false), "1.0.0");
        assert!(decision.should_prompt);
        assert!(decision.dismissible);
    }

    #[test]
    fn same_version_does_not_prompt() {
        let decision = decide(&release("1.0.0", false), "1.0.0");
        assert!(!decision.should_prompt);
        assert!(decision.dismissible);
    }

    #[test]
    fn older_release_does_not_prompt() {
        let decision = decide(&release("0.9.0", true), "1.0.0");
        assert!(!decision.should_prompt);
        assert!(!decision.dismissible);
    }

    #[test]
    fn zero_padded_equal_release_does_not_prompt() {
        let decision = decide(&release("1.2.0", false), "1.2");
        assert!(!decision.should_prompt);
    }
}
