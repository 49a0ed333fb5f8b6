use crate::models::vote::VoteRecord;
use serde::{Deserialize, Serialize};

/// Answer to a vote on a country that already had a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRegistered {
    pub mensagem: String,
    pub contagem_atualizada: i64,
}

/// Answer to the first vote ever recorded for a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstVoteRegistered {
    pub mensagem: String,
    pub novo_registro: VoteRecord,
}
