//! Integration tests for the analysis pipeline

use redliner_analyzer::{Analyzer, AnalyzerConfig, AnalyzerError};
use redliner_domain::traits::{Embedder, SentenceSegmenter};
use redliner_domain::AnalysisResult;
use redliner_index::HashingEmbedder;
use redliner_llm::{LlmError, MockProvider};
use std::sync::Arc;

const PLAYBOOK: &str = "All vendors must sign a non-disclosure agreement before onboarding. \
    Invoices are paid within thirty days of receipt. \
    Travel expenses require written manager approval.";

const DOCUMENT: &str = "This vendor agreement covers software delivery and invoices paid within sixty days.";

const NDA_REPLY: &str = "- Conflicts: none\n- Gaps: missing NDA clause\n- Irrelevant: none";

fn small_chunks() -> AnalyzerConfig {
    AnalyzerConfig {
        max_tokens: 10,
        ..AnalyzerConfig::default()
    }
}

fn analyzer(provider: MockProvider) -> Analyzer<HashingEmbedder, MockProvider> {
    Analyzer::new(HashingEmbedder::new(384), provider, small_chunks()).unwrap()
}

/// Embedder that always fails
struct OfflineEmbedder;

impl Embedder for OfflineEmbedder {
    type Error = String;

    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, String> {
        Err("connection refused".to_string())
    }
}

/// Segmenter that never finds a sentence
struct SilentSegmenter;

impl SentenceSegmenter for SilentSegmenter {
    fn segment(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

#[tokio::test]
async fn test_nda_scenario() {
    let analyzer = analyzer(MockProvider::new(NDA_REPLY));

    let result = analyzer
        .analyze("All vendors must sign NDAs.", "Vendor agreement without confidentiality terms.")
        .await
        .unwrap();

    assert_eq!(result, AnalysisResult::new("none", "missing NDA clause", "none"));
}

#[tokio::test]
async fn test_empty_playbook_is_invalid_input() {
    let provider = MockProvider::new(NDA_REPLY);
    let analyzer = analyzer(provider.clone());

    let result = analyzer.analyze("", "doc").await;
    assert!(matches!(result, Err(AnalyzerError::InvalidInput(_))));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_whitespace_document_is_invalid_input() {
    let analyzer = analyzer(MockProvider::new(NDA_REPLY));

    let result = analyzer.analyze(PLAYBOOK, " \n\t ").await;
    let err = result.unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidInput(_)));
    assert!(err.is_caller_error());
}

#[tokio::test]
async fn test_oversized_document_is_invalid_input() {
    let config = AnalyzerConfig {
        max_document_length: 20,
        ..AnalyzerConfig::default()
    };
    let analyzer =
        Analyzer::new(HashingEmbedder::new(384), MockProvider::new(NDA_REPLY), config).unwrap();

    let result = analyzer.analyze(PLAYBOOK, DOCUMENT).await;
    match result {
        Err(AnalyzerError::InvalidInput(msg)) => assert!(msg.contains("limit is 20")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_error_is_wrapped() {
    let provider = MockProvider::failing(LlmError::Communication("connection reset".to_string()));
    let analyzer = analyzer(provider);

    let err = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap_err();
    match &err {
        AnalyzerError::AnalysisFailed { source } => {
            assert!(matches!(**source, AnalyzerError::AnalysisService(_)));
        }
        other => panic!("Expected AnalysisFailed, got {:?}", other),
    }
    assert!(!err.is_caller_error());
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn test_embedding_failure_is_wrapped() {
    let analyzer = Analyzer::new(OfflineEmbedder, MockProvider::new(NDA_REPLY), small_chunks()).unwrap();

    let err = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::AnalysisFailed { .. }));
    assert!(matches!(err.root_cause(), AnalyzerError::EmbeddingFailure(_)));
}

#[tokio::test]
async fn test_no_sentences_is_empty_index() {
    let analyzer = Analyzer::with_segmenter(
        HashingEmbedder::new(384),
        MockProvider::new(NDA_REPLY),
        SilentSegmenter,
        AnalyzerConfig::default(),
    )
    .unwrap();

    let err = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap_err();
    assert!(matches!(err.root_cause(), AnalyzerError::EmptyIndex));
}

#[tokio::test]
async fn test_unstructured_reply_yields_sentinels() {
    let analyzer = analyzer(MockProvider::new("I am unable to review this document."));

    let result = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.conflicts, "No conflicts found");
    assert_eq!(result.gaps, "No gaps found");
    assert_eq!(result.irrelevant, "No irrelevant content found");
}

#[tokio::test]
async fn test_identical_inputs_give_identical_results() {
    let analyzer = analyzer(MockProvider::new(NDA_REPLY));

    let first = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap();
    let second = analyzer.analyze(PLAYBOOK, DOCUMENT).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_context_is_joined_in_retrieval_order() {
    let provider = MockProvider::new(NDA_REPLY);
    let config = AnalyzerConfig {
        top_k: 2,
        ..small_chunks()
    };
    let analyzer = Analyzer::new(HashingEmbedder::new(384), provider.clone(), config).unwrap();

    let report = analyzer.analyze_detailed(PLAYBOOK, DOCUMENT).await.unwrap();
    assert_eq!(report.retrieved.len(), 2);
    assert!(report.retrieved[0].distance <= report.retrieved[1].distance);

    let expected_context = format!(
        "{}\n\n{}",
        report.retrieved[0].chunk.text, report.retrieved[1].chunk.text
    );
    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(&expected_context));
    assert!(prompts[0].contains(DOCUMENT));
}

#[tokio::test]
async fn test_detailed_metadata() {
    let analyzer = analyzer(MockProvider::new(NDA_REPLY));

    let report = analyzer.analyze_detailed(PLAYBOOK, DOCUMENT).await.unwrap();
    assert_eq!(report.metadata.playbook_chunks, 3);
    assert_eq!(report.metadata.retrieved_chunks, 3);
    assert_eq!(report.metadata.model_name, "mock");
    assert!(report.metadata.timestamp > 0);
    assert_eq!(report.result.gaps, "missing NDA clause");
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config = AnalyzerConfig {
        top_k: 0,
        ..AnalyzerConfig::default()
    };
    let result = Analyzer::new(HashingEmbedder::new(384), MockProvider::new(NDA_REPLY), config);
    assert!(matches!(result, Err(AnalyzerError::Config(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_analyses() {
    let analyzer = Arc::new(analyzer(MockProvider::new(NDA_REPLY)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            tokio::spawn(async move { analyzer.analyze(PLAYBOOK, DOCUMENT).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.gaps, "missing NDA clause");
    }
}
