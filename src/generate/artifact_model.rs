// ============================================================================
// Generated output artifacts
// ============================================================================

/// The three generated outputs for one form: a self-contained HTML document,
/// the stylesheet it embeds, and the behavior script it embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormArtifacts {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Content fingerprint of one artifact, for revision comparison and
/// determinism checks.
pub fn fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
