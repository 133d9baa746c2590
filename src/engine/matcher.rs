use std::collections::HashSet;

use crate::faq::record::Record;
use crate::preprocessing::normalizer::Normalizer;

/// Picks the stored answer whose question (or best variation) shares the most
/// normalized tokens with the query. A linear scan is fine at FAQ scale.
pub struct Matcher {
    normalizer: Normalizer,
    threshold: usize,
}

impl Matcher {
    pub fn new(normalizer: Normalizer, threshold: usize) -> Self {
        Matcher {
            normalizer,
            threshold,
        }
    }

    fn token_set(&self, text: &str) -> HashSet<String> {
        self.normalizer.normalize(text).unwrap_or_else(|e| {
            eprintln!("Warning: {}. Treating input as empty.", e);
            HashSet::new()
        })
    }

    fn overlap(query_tokens: &HashSet<String>, candidate_tokens: &HashSet<String>) -> usize {
        query_tokens.intersection(candidate_tokens).count()
    }

    pub fn find_best_answer(&self, query: &str, records: &[Record]) -> Option<String> {
        let query_tokens = self.token_set(query);

        let mut best_match: Option<&Record> = None;
        let mut max_score = 0;

        for record in records {
            let mut score = Self::overlap(&query_tokens, &self.token_set(&record.question));

            // The best-scoring phrasing wins; variation scores never add up.
            for variation in &record.variations {
                let variation_score =
                    Self::overlap(&query_tokens, &self.token_set(variation));
                if variation_score > score {
                    score = variation_score;
                }
            }

            // Strictly greater, so the first record keeps a tied score.
            if score > max_score {
                max_score = score;
                best_match = Some(record);
            }
        }

        if max_score >= self.threshold {
            best_match.map(|record| record.answer.clone())
        } else {
            None
        }
    }
}
