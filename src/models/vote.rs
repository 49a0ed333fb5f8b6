use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VoteRecord {
    pub id: i64,
    pub nome_pais: String,
    pub avaliacao_positiva: i64,
    pub avaliacao_negativa: i64,
}

impl VoteRecord {
    pub fn total_votes(&self) -> i64 {
        self.avaliacao_positiva + self.avaliacao_negativa
    }

    pub fn count_for(&self, kind: VoteKind) -> i64 {
        match kind {
            VoteKind::Positive => self.avaliacao_positiva,
            VoteKind::Negative => self.avaliacao_negativa,
        }
    }
}

/// Row shape exposed by `/paises/avaliacoes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VoteTally {
    pub nome_pais: String,
    pub avaliacao_positiva: i64,
    pub avaliacao_negativa: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Positive,
    Negative,
}

impl VoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteKind::Positive => "positiva",
            VoteKind::Negative => "negativa",
        }
    }

    /// Counter column incremented by this kind of vote.
    pub fn column(&self) -> &'static str {
        match self {
            VoteKind::Positive => "avaliacao_positiva",
            VoteKind::Negative => "avaliacao_negativa",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown vote kind: {0}")]
pub struct UnknownVoteKind(pub String);

impl FromStr for VoteKind {
    type Err = UnknownVoteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positiva" => Ok(VoteKind::Positive),
            "negativa" => Ok(VoteKind::Negative),
            _ => Err(UnknownVoteKind(s.to_string())),
        }
    }
}

/// Body of `POST /paises/avaliar`. Fields stay optional so a missing field is
/// reported with the service's own message instead of a deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VotePayload {
    pub nome_pais: Option<String>,
    pub tipo_avaliacao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Created(VoteRecord),
    Incremented { count: i64 },
}
