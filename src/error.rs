use crate::unit::Width;

/// Errors raised while building tier tables and registries.
///
/// Every variant except [`TierError::Config`] is a programming error: the
/// tier-set and its registry or threshold table disagree. Infallible entry
/// points such as [`TierConfigRegistry::config_for`](crate::registry::TierConfigRegistry::config_for)
/// panic with the same message instead of returning it.
#[derive(Debug, thiserror::Error)]
pub enum TierError {
    #[error("no config record registered for tier `{tier}`")]
    MissingTierConfig { tier: &'static str },

    #[error("threshold bounds must strictly increase, got {previous} then {next}")]
    UnsortedThresholds { previous: Width, next: Width },

    #[error("tiers must appear in ascending order, got `{previous}` then `{next}`")]
    UnorderedTiers {
        previous: &'static str,
        next: &'static str,
    },

    #[error("tier `{tier}` has an upper bound of 0px and can never be selected")]
    UnreachableTier { tier: &'static str },

    #[error("tier-sets support at most 8 tiers, this one declares {count}")]
    TooManyTiers { count: usize },

    #[error("unknown tier name `{0}`")]
    UnknownTier(String),

    #[cfg(feature = "serde")]
    #[error("invalid shell configuration: {0}")]
    Config(#[from] serde_json::Error),
}
