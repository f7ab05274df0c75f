//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use star_ledger::{
    ChallengeConfig, Ledger, LedgerConfig, ManualClock, StarRegistry, StarSubmission,
};
use star_ledger_core::{Block, Ed25519Verifier, Keypair, Star, WalletAddress};
use star_ledger_store::MemoryStore;

/// Clock reading every fixture registry starts at (2025-01-14T16:00:00Z).
pub const FIXTURE_EPOCH: i64 = 1736870400;

/// A test wallet with an Ed25519 keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The wallet address.
    pub fn address(&self) -> WalletAddress {
        self.keypair.address()
    }

    /// Sign a challenge message.
    pub fn sign(&self, message: &str) -> String {
        self.keypair.sign_message(message)
    }

    /// Build a signed submission for `message`.
    pub fn submission(&self, message: &str, star: Star) -> StarSubmission {
        StarSubmission {
            address: self.address(),
            message: message.to_string(),
            signature: self.sign(message),
            star,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry over a fresh in-memory ledger, driven by a manual clock.
pub struct RegistryFixture {
    pub clock: Arc<ManualClock>,
    pub registry: StarRegistry<MemoryStore, Ed25519Verifier>,
}

impl RegistryFixture {
    /// Open with default configuration at [`FIXTURE_EPOCH`].
    pub async fn new() -> star_ledger::Result<Self> {
        Self::with_config(LedgerConfig::default(), ChallengeConfig::default()).await
    }

    pub async fn with_config(
        ledger_config: LedgerConfig,
        challenge_config: ChallengeConfig,
    ) -> star_ledger::Result<Self> {
        let clock = Arc::new(ManualClock::new(FIXTURE_EPOCH));
        let ledger = Ledger::open_with_clock(MemoryStore::new(), ledger_config, clock.clone()).await?;
        let registry = StarRegistry::new(Arc::new(ledger), Ed25519Verifier, challenge_config);
        Ok(Self { clock, registry })
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &Arc<Ledger<MemoryStore>> {
        self.registry.ledger()
    }

    /// Run the whole protocol for `wallet`: issue, sign, redeem.
    pub async fn register(&self, wallet: &TestFixture, star: Star) -> star_ledger::Result<Block> {
        let message = self.registry.issue_challenge(&wallet.address());
        self.registry.redeem(wallet.submission(&message, star)).await
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// A distinct, fully populated star for index `n`.
pub fn sample_star(n: usize) -> Star {
    Star::new(
        format!("{}h {}m {}.0s", n % 24, n % 60, n % 60),
        format!("-26° {}' 24.9", n % 60),
        format!("Star #{} found using https://www.google.com/sky/", n),
    )
    .magnitude("4.2")
    .constellation("Scorpius")
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_ledger_core::SignatureVerifier;

    #[test]
    fn test_fixture_signs_verifiably() {
        let fixture = TestFixture::with_seed([0x42; 32]);
        let message = format!("{}:{}:starRegistry", fixture.address(), FIXTURE_EPOCH);
        let submission = fixture.submission(&message, sample_star(1));

        assert!(Ed25519Verifier.verify(&submission.message, &submission.address, &submission.signature));
    }

    #[tokio::test]
    async fn test_registry_fixture_register() {
        let env = RegistryFixture::new().await.unwrap();
        let wallet = TestFixture::with_seed([7; 32]);

        let block = env.register(&wallet, sample_star(0)).await.unwrap();
        assert_eq!(block.height, 1);
        assert_eq!(block.time, FIXTURE_EPOCH);
        assert_eq!(block.claim().unwrap().owner, wallet.address());
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(300);

        // Each party has unique keys
        let mut addresses: Vec<_> = parties.iter().map(|p| p.address()).collect();
        addresses.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        addresses.dedup();
        assert_eq!(addresses.len(), 300);
    }
}
