use serde::{Deserialize, Serialize};

/// A stored question with its answer and alternate phrasings. Seeded once,
/// read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub variations: Vec<String>,
}
