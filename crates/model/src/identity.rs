use serde::{Deserialize, Serialize};

/// Record identity. A record is either known to the hub (`Remote`) or held
/// only in the local working set (`Local`).
///
/// Local keys are minted at normalization time and for fallback sample
/// rows. A record trades its Local key for a Remote id exactly once, when
/// the hub first persists it — mutation paths branch on the variant, so
/// the local/remote distinction is checked at compile time rather than by
/// probing for a server id at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum LeadId {
    Local(String),
    Remote(String),
}

impl LeadId {
    /// Mint a fresh local key (UUID v4).
    pub fn fresh_local() -> Self {
        LeadId::Local(uuid::Uuid::new_v4().to_string())
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, LeadId::Remote(_))
    }

    /// The underlying key, without the local/remote tag.
    pub fn key(&self) -> &str {
        match self {
            LeadId::Local(k) | LeadId::Remote(k) => k,
        }
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadId::Local(k) => write!(f, "local:{k}"),
            LeadId::Remote(k) => write!(f, "{k}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_local_keys_are_unique() {
        let a = LeadId::fresh_local();
        let b = LeadId::fresh_local();
        assert_ne!(a, b);
        assert!(!a.is_remote());
    }

    #[test]
    fn display_tags_local_only() {
        assert_eq!(LeadId::Local("abc".into()).to_string(), "local:abc");
        assert_eq!(LeadId::Remote("42".into()).to_string(), "42");
    }
}
