//! Ledger and ownership-challenge configuration.

use std::time::Duration;

use star_ledger_core::GENESIS_BODY;

/// How long an ownership challenge stays redeemable.
pub const DEFAULT_CHALLENGE_WINDOW: Duration = Duration::from_secs(300);

/// The trailing tag of every issued challenge.
pub const DEFAULT_CHALLENGE_TAG: &str = "starRegistry";

/// Configuration for the Ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Whether to re-validate the whole chain after every append.
    pub validate_on_append: bool,
    /// Body of the genesis block seeded into an empty store.
    pub genesis_body: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            validate_on_append: true,
            genesis_body: GENESIS_BODY.to_string(),
        }
    }
}

/// Configuration for the ownership-challenge protocol.
#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    /// Maximum age of a challenge at redemption time.
    pub window: Duration,
    /// Tag placed in the third field of issued challenges.
    pub tag: String,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_CHALLENGE_WINDOW,
            tag: DEFAULT_CHALLENGE_TAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ledger = LedgerConfig::default();
        assert!(ledger.validate_on_append);
        assert_eq!(ledger.genesis_body, "Genesis Block");

        let challenge = ChallengeConfig::default();
        assert_eq!(challenge.window.as_secs(), 300);
        assert_eq!(challenge.tag, "starRegistry");
    }
}
