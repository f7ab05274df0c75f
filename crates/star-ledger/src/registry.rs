//! The star registry: ownership-verified star submission.
//!
//! A wallet asks for a challenge, signs it out-of-band and submits the
//! signature with its star. Challenges are stateless: everything needed to
//! judge freshness is embedded in the challenge string itself, so the
//! registry keeps no record of what it issued.

use std::fmt;
use std::sync::Arc;

use star_ledger_core::{Block, SignatureVerifier, Star, StarClaim, WalletAddress};
use star_ledger_store::BlockStore;

use crate::config::ChallengeConfig;
use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;

/// A parsed ownership challenge: `address:issued_at:tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub address: WalletAddress,
    /// Issue time (Unix seconds).
    pub issued_at: i64,
    pub tag: String,
}

impl Challenge {
    /// Parse a challenge message.
    ///
    /// Only the timestamp field is required to be well formed; the tag is
    /// whatever follows it.
    pub fn parse(message: &str) -> Result<Self> {
        let mut fields = message.splitn(3, ':');
        let address = fields.next().unwrap_or_default();
        let issued_at = fields
            .next()
            .ok_or_else(|| LedgerError::MalformedChallenge("missing timestamp field".into()))?;
        let issued_at = issued_at.parse::<i64>().map_err(|e| {
            LedgerError::MalformedChallenge(format!("bad timestamp {:?}: {}", issued_at, e))
        })?;
        let tag = fields.next().unwrap_or_default();

        Ok(Self {
            address: WalletAddress::new(address),
            issued_at,
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.issued_at, self.tag)
    }
}

/// A signed request to register a star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarSubmission {
    pub address: WalletAddress,
    /// The challenge string previously issued to `address`.
    pub message: String,
    /// Signature over `message` by `address`.
    pub signature: String,
    pub star: Star,
}

/// Gates star submission behind signed, time-windowed challenges.
pub struct StarRegistry<S: BlockStore, V: SignatureVerifier> {
    ledger: Arc<Ledger<S>>,
    verifier: V,
    config: ChallengeConfig,
}

impl<S: BlockStore, V: SignatureVerifier> StarRegistry<S, V> {
    /// Create a registry writing into `ledger`.
    pub fn new(ledger: Arc<Ledger<S>>, verifier: V, config: ChallengeConfig) -> Self {
        Self {
            ledger,
            verifier,
            config,
        }
    }

    /// The ledger stars are written to.
    pub fn ledger(&self) -> &Arc<Ledger<S>> {
        &self.ledger
    }

    /// Issue a challenge for `address` to sign.
    pub fn issue_challenge(&self, address: &WalletAddress) -> String {
        let challenge = Challenge {
            address: address.clone(),
            issued_at: self.ledger.now_secs(),
            tag: self.config.tag.clone(),
        };
        tracing::debug!(%address, issued_at = challenge.issued_at, "ownership challenge issued");
        challenge.to_string()
    }

    /// Redeem a signed challenge and register the star.
    ///
    /// Checks, in order: the challenge timestamp parses, the challenge is
    /// within the window, the signature verifies. Only then is the claim
    /// appended. Append failures propagate unchanged.
    pub async fn redeem(&self, submission: StarSubmission) -> Result<Block> {
        let challenge = Challenge::parse(&submission.message).map_err(|e| {
            tracing::debug!(address = %submission.address, error = %e, "redemption rejected");
            e
        })?;

        // The timestamp is caller-supplied; saturate so an extreme value can
        // only read as very stale or far in the future.
        let elapsed_secs = self.ledger.now_secs().saturating_sub(challenge.issued_at);
        let elapsed_minutes = elapsed_secs as f64 / 60.0;
        let window_minutes = self.config.window.as_secs_f64() / 60.0;
        if elapsed_minutes > window_minutes {
            tracing::debug!(address = %submission.address, elapsed_secs, "challenge expired");
            return Err(LedgerError::Expired { elapsed_secs });
        }

        if !self
            .verifier
            .verify(&submission.message, &submission.address, &submission.signature)
        {
            tracing::debug!(address = %submission.address, "signature rejected");
            return Err(LedgerError::BadSignature);
        }

        let claim = StarClaim {
            owner: submission.address,
            signature: submission.signature,
            message: submission.message,
            star: submission.star,
        };
        self.ledger.append_claim(&claim).await
    }
}
