pub mod normalizer;
pub mod tokenizer;
