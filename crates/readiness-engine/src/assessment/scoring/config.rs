use serde::{Deserialize, Serialize};

/// Engine switches that change how ledgers are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Reject unknown question ids and undeclared option labels in `evaluate`.
    pub strict_answers: bool,
}
