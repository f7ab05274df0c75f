//! Star claims: the payload a wallet commits into the ledger.

use serde::{Deserialize, Serialize};

use crate::types::WalletAddress;

/// A caller-defined star descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Right ascension.
    pub ra: String,
    /// Declination.
    pub dec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    /// Free-form story told by the owner.
    pub story: String,
}

impl Star {
    pub fn new(ra: impl Into<String>, dec: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            ra: ra.into(),
            dec: dec.into(),
            magnitude: None,
            constellation: None,
            story: story.into(),
        }
    }

    pub fn magnitude(mut self, magnitude: impl Into<String>) -> Self {
        self.magnitude = Some(magnitude.into());
        self
    }

    pub fn constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }
}

/// A verified ownership claim over a star, as stored in a block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarClaim {
    pub owner: WalletAddress,
    pub signature: String,
    pub message: String,
    pub star: Star,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_builder() {
        let star = Star::new("16h 29m 1.0s", "68° 52' 56.9", "my star")
            .magnitude("4.2")
            .constellation("Draco");
        assert_eq!(star.magnitude.as_deref(), Some("4.2"));
        assert_eq!(star.constellation.as_deref(), Some("Draco"));
    }

    #[test]
    fn test_optional_fields_omitted_in_json() {
        let star = Star::new("ra", "dec", "story");
        let json = serde_json::to_value(&star).unwrap();
        assert!(json.get("magnitude").is_none());
        assert_eq!(json["story"], "story");
    }
}
