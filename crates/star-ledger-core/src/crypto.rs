//! Cryptographic primitives for the star ledger.
//!
//! Wraps Blake3 block hashing and Ed25519 message signatures with strong types.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::types::WalletAddress;

/// A 32-byte Blake3 block hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// Compute the Blake3 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The zero hash (sentinel value).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Checks that `signature` over `message` was produced by the holder of `address`.
///
/// Implementations are pure predicates: a malformed address or signature is
/// simply `false`.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &str, address: &WalletAddress, signature: &str) -> bool;
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for std::sync::Arc<V> {
    fn verify(&self, message: &str, address: &WalletAddress, signature: &str) -> bool {
        (**self).verify(message, address, signature)
    }
}

/// Ed25519 message verification.
///
/// The address is the hex-encoded 32-byte public key; the signature is the
/// hex-encoded 64-byte signature over the UTF-8 bytes of the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl Ed25519Verifier {
    /// Verify, reporting why verification failed.
    pub fn check(
        &self,
        message: &str,
        address: &WalletAddress,
        signature: &str,
    ) -> Result<(), CoreError> {
        let verifying_key = parse_verifying_key(address)?;
        let sig_bytes: [u8; 64] = hex::decode(signature)
            .ok()
            .and_then(|b| b.try_into().ok())
            .ok_or(CoreError::InvalidSignature)?;
        let sig = Signature::from_bytes(&sig_bytes);

        verifying_key
            .verify(message.as_bytes(), &sig)
            .map_err(|_| CoreError::InvalidSignature)
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, message: &str, address: &WalletAddress, signature: &str) -> bool {
        self.check(message, address, signature).is_ok()
    }
}

fn parse_verifying_key(address: &WalletAddress) -> Result<VerifyingKey, CoreError> {
    let bytes: [u8; 32] = hex::decode(address.as_str())
        .ok()
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| CoreError::InvalidAddress(address.to_string()))?;
    VerifyingKey::from_bytes(&bytes).map_err(|_| CoreError::InvalidAddress(address.to_string()))
}

/// A wallet keypair for signing ownership challenges.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The wallet address for this keypair (hex public key).
    pub fn address(&self) -> WalletAddress {
        WalletAddress::new(hex::encode(self.signing_key.verifying_key().to_bytes()))
    }

    /// Sign a message, returning the hex-encoded signature.
    pub fn sign_message(&self, message: &str) -> String {
        hex::encode(self.signing_key.sign(message.as_bytes()).to_bytes())
    }

    /// Get the raw seed bytes (secret key material).
    pub fn seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", &self.address().as_str()[..16])
    }
}
