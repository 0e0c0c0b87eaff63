//! Shared secret gating the analytics export.

use sha2::{Digest, Sha256};

/// SHA-256 digest of the configured admin secret.
///
/// Only the digest is retained; presented secrets are hashed and compared
/// digest to digest.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret {
    digest: [u8; 32],
}

impl AdminSecret {
    /// Hash the raw secret bytes.
    #[must_use]
    pub fn from_bytes(secret: &[u8]) -> Self {
        Self {
            digest: Sha256::digest(secret).into(),
        }
    }

    /// Whether `presented` hashes to the configured digest.
    ///
    /// # Examples
    /// ```
    /// use sleepease::domain::AdminSecret;
    ///
    /// let secret = AdminSecret::from_bytes(b"correct horse");
    /// assert!(secret.matches("correct horse"));
    /// assert!(!secret.matches("wrong"));
    /// ```
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        presented == self.digest
    }

    /// Short hex prefix of the digest, safe to log.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(self.digest.get(..4).unwrap_or_default())
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSecret")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("s3cret", false)]
    #[case("s3cret-value ", false)]
    #[case("s3cret-value", true)]
    fn matches_only_exact_secret(#[case] presented: &str, #[case] expected: bool) {
        let secret = AdminSecret::from_bytes(b"s3cret-value");
        assert_eq!(secret.matches(presented), expected);
    }

    #[rstest]
    fn debug_output_hides_digest() {
        let secret = AdminSecret::from_bytes(b"s3cret-value");
        let rendered = format!("{secret:?}");
        assert!(rendered.contains(&secret.fingerprint()));
        assert_eq!(secret.fingerprint().len(), 8);
        assert!(!rendered.contains("s3cret"));
    }
}
