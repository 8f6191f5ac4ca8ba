//! Interview-response analysis: normalization, tokenization, lemmatization,
//! stopword filtering, keyword extraction, entity recognition, sentiment,
//! and rubric evaluation, assembled into one immutable record per call.

pub mod config;
pub mod entities;
pub mod handlers;
pub mod keywords;
pub mod lemma;
pub mod normalize;
pub mod pipeline;
pub mod result;
pub mod rubric;
pub mod sentiment;
pub mod stopwords;
pub mod tokenize;

pub use config::AnalysisConfig;
pub use pipeline::Pipeline;
pub use result::AnalysisResult;
