//! The end-to-end analysis pipeline.
//!
//! A `Pipeline` is built once at process startup from configuration plus the
//! four shared model artifacts, then shared read-only across requests. Each
//! `process` call is a pure, synchronous transform of its two input strings;
//! concurrent calls share nothing mutable.

use std::sync::Arc;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::entities::{EntityTagger, RuleEntityTagger};
use crate::analysis::keywords::{
    derive_topic_set, extract_keywords, ContentTagger, HeuristicContentTagger,
};
use crate::analysis::lemma::{Lemmatizer, RuleLemmatizer};
use crate::analysis::normalize::{normalize, removed_word_count, FillerPattern};
use crate::analysis::result::{assemble, AnalysisResult};
use crate::analysis::rubric::{evaluate, ClaritySignals};
use crate::analysis::sentiment::{LexiconSentimentModel, SentimentModel};
use crate::analysis::stopwords::filter_stopwords;
use crate::analysis::tokenize::tokenize;
use crate::errors::AppError;

/// Configured pipeline with injected model backends.
pub struct Pipeline {
    config: AnalysisConfig,
    filler_pattern: FillerPattern,
    lemmatizer: Arc<dyn Lemmatizer>,
    content_tagger: Arc<dyn ContentTagger>,
    entity_tagger: Arc<dyn EntityTagger>,
    sentiment_model: Arc<dyn SentimentModel>,
}

impl Pipeline {
    /// Builds a pipeline from explicit model backends. Fails with
    /// `ModelUnavailable` if the filler list cannot be compiled.
    pub fn new(
        config: AnalysisConfig,
        lemmatizer: Arc<dyn Lemmatizer>,
        content_tagger: Arc<dyn ContentTagger>,
        entity_tagger: Arc<dyn EntityTagger>,
        sentiment_model: Arc<dyn SentimentModel>,
    ) -> Result<Self, AppError> {
        let filler_pattern = FillerPattern::compile(&config.filler_words)
            .map_err(|e| AppError::ModelUnavailable(format!("filler pattern: {e}")))?;
        Ok(Self {
            config,
            filler_pattern,
            lemmatizer,
            content_tagger,
            entity_tagger,
            sentiment_model,
        })
    }

    /// Builds the default rule-based backends for every model seam.
    pub fn with_default_models(config: AnalysisConfig) -> Result<Self, AppError> {
        let entity_tagger = RuleEntityTagger::new()
            .map_err(|e| AppError::ModelUnavailable(format!("entity tagger: {e}")))?;
        Self::new(
            config,
            Arc::new(RuleLemmatizer::new()),
            Arc::new(HeuristicContentTagger::new()),
            Arc::new(entity_tagger),
            Arc::new(LexiconSentimentModel::new()),
        )
    }

    /// Analyzes one interview response against one question.
    ///
    /// Returns a complete `AnalysisResult` or an error; never a partially
    /// filled record.
    pub fn process(
        &self,
        response_text: &str,
        question_text: &str,
    ) -> Result<AnalysisResult, AppError> {
        if response_text.trim().is_empty() {
            return Err(AppError::Input(
                "response_text cannot be empty".to_string(),
            ));
        }
        if question_text.trim().is_empty() {
            return Err(AppError::Input(
                "question_text cannot be empty".to_string(),
            ));
        }

        let stages = normalize(response_text, &self.filler_pattern);
        let original_word_count = stages.lowercase.split_whitespace().count();
        let fillers_removed = removed_word_count(&stages.lowercase, &stages.no_fillers);

        let tokens = tokenize(&stages.no_punctuation);
        let lemmas = self.lemmatizer.lemmatize(&tokens);
        if lemmas.len() != tokens.len() {
            return Err(AppError::processing(
                "lemmatize",
                response_text,
                format!("{} lemmas for {} tokens", lemmas.len(), tokens.len()),
            ));
        }

        let cleaned_tokens = filter_stopwords(&lemmas, &self.config.stopwords);
        let topic_set = derive_topic_set(
            question_text,
            &self.config,
            &self.filler_pattern,
            self.lemmatizer.as_ref(),
            self.content_tagger.as_ref(),
        );
        let keywords = extract_keywords(&cleaned_tokens, &topic_set, self.content_tagger.as_ref());

        let named_entities = self.entity_tagger.recognize(response_text);
        let sentiment = self.sentiment_model.classify(response_text);
        if !(0.0..=1.0).contains(&sentiment.confidence) {
            return Err(AppError::processing(
                "sentiment",
                response_text,
                format!("confidence {} out of [0,1]", sentiment.confidence),
            ));
        }

        let rubric = evaluate(
            &keywords,
            ClaritySignals {
                cleaned_token_count: cleaned_tokens.len(),
                fillers_removed,
                original_word_count,
            },
            &sentiment,
            &topic_set,
            &self.config,
        );

        tracing::debug!(
            tokens = tokens.len(),
            cleaned = cleaned_tokens.len(),
            keywords = keywords.len(),
            entities = named_entities.len(),
            score = rubric.overall_score(),
            "analysis complete"
        );

        Ok(assemble(
            response_text.to_string(),
            stages,
            tokens,
            lemmas,
            cleaned_tokens,
            keywords,
            named_entities,
            sentiment,
            rubric,
        ))
    }
}
