use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the entire portfolio-balancer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Calculation ─────────────────────────────────────────────────
    #[error("No valid positions to calculate")]
    NoPositions,

    // ── Portfolio ───────────────────────────────────────────────────
    #[error("Position not found: {0}")]
    PositionNotFound(Uuid),

    // ── Snapshots (JSON) ────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Stable key for frontends that map errors to localized messages.
    /// E.g. the web UI renders `t(error.translation_key())` instead of
    /// the English `Display` text.
    #[must_use]
    pub fn translation_key(&self) -> &'static str {
        match self {
            CoreError::NoPositions => "noPositions",
            CoreError::PositionNotFound(_) => "positionNotFound",
            CoreError::Serialization(_) => "saveFailed",
            CoreError::Deserialization(_) => "loadFailed",
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
