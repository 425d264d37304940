use color_eyre::Result;

use crate::ai::CompletionClient;
use crate::analysis::{self, QuizAnalysis};
use crate::db::Db;
use crate::models::{QuizDefinition, QuizResponse};

// ---------------------------------------------------------------------------
// ResultStore trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait ResultStore: Send + Sync {
    fn record_result(
        &self,
        slug: &str,
        score: i32,
        band: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn results_count(&self, slug: &str) -> impl std::future::Future<Output = Result<i64>> + Send;
}

// ---------------------------------------------------------------------------
// InsightGenerator trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait InsightGenerator: Send + Sync {
    /// Whether an AI completion backend is configured.
    fn is_enabled(&self) -> bool;

    fn personalize(
        &self,
        slug: &str,
        analysis: &QuizAnalysis,
        responses: &[QuizResponse],
    ) -> impl std::future::Future<Output = Result<QuizAnalysis>> + Send;
}

// ---------------------------------------------------------------------------
// AssessmentService
// ---------------------------------------------------------------------------

pub struct AssessmentService<R: ResultStore = Db, G: InsightGenerator = CompletionClient> {
    results: R,
    insights: G,
}

impl<R: ResultStore + Clone, G: InsightGenerator + Clone> Clone for AssessmentService<R, G> {
    fn clone(&self) -> Self {
        Self {
            results: self.results.clone(),
            insights: self.insights.clone(),
        }
    }
}

impl<R: ResultStore, G: InsightGenerator> AssessmentService<R, G> {
    pub fn new(results: R, insights: G) -> Self {
        Self { results, insights }
    }

    /// Interpret a submission and record the headline numbers.
    ///
    /// This cannot fail: the deterministic analysis always produces a
    /// result, AI enrichment is strictly optional, and a recording
    /// failure is logged rather than surfaced. The respondent sees a
    /// result page no matter which dependency had a bad day.
    pub async fn submit(
        &self,
        slug: &str,
        responses: &[QuizResponse],
        definition: Option<&QuizDefinition>,
    ) -> QuizAnalysis {
        let analysis = analysis::analyze(slug, responses, definition);

        let analysis = if self.insights.is_enabled() {
            match self.insights.personalize(slug, &analysis, responses).await {
                Ok(enriched) => enriched,
                Err(e) => {
                    tracing::warn!(
                        "insight generation failed for '{slug}', serving deterministic analysis: {e}"
                    );
                    analysis
                }
            }
        } else {
            analysis
        };

        if let Err(e) = self
            .results
            .record_result(slug, analysis.score, &analysis.band)
            .await
        {
            tracing::warn!("failed to record result for '{slug}': {e}");
        }

        analysis
    }

    /// How many results a quiz has on record. The counter is page
    /// decoration, so a store failure degrades to zero instead of
    /// surfacing.
    pub async fn times_taken(&self, slug: &str) -> i64 {
        match self.results.results_count(slug).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("failed to count results for '{slug}': {e}");
                0
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{AnswerValue, QuestionType};

    fn scale_responses(values: &[f64]) -> Vec<QuizResponse> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| QuizResponse {
                question_id: format!("q{}", i + 1),
                question_text: String::new(),
                answer: AnswerValue::Number(*value),
                question_type: QuestionType::Scale,
            })
            .collect()
    }

    fn mock_insights_disabled() -> MockInsightGenerator {
        let mut mock = MockInsightGenerator::new();
        mock.expect_is_enabled().returning(|| false);
        mock
    }

    fn mock_results_ok() -> MockResultStore {
        let mut mock = MockResultStore::new();
        mock.expect_record_result()
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        mock
    }

    #[tokio::test]
    async fn submit_serves_deterministic_analysis_when_ai_disabled() {
        let svc = AssessmentService::new(mock_results_ok(), mock_insights_disabled());

        let responses = scale_responses(&[4.0, 4.0, 4.0]);
        let analysis = svc.submit("some-new-quiz", &responses, None).await;

        assert_eq!(analysis.score, 80);
        assert_eq!(analysis.band, "Assessment Complete");
    }

    #[tokio::test]
    async fn submit_serves_the_enriched_analysis_when_ai_succeeds() {
        let mut insights = MockInsightGenerator::new();
        insights.expect_is_enabled().returning(|| true);
        insights.expect_personalize().returning(|_, analysis, _| {
            let mut enriched = analysis.clone();
            enriched.personalized_message = "A warmer spin on the same numbers.".to_string();
            Box::pin(async move { Ok(enriched) })
        });

        let svc = AssessmentService::new(mock_results_ok(), insights);
        let analysis = svc
            .submit("some-new-quiz", &scale_responses(&[2.0, 2.0]), None)
            .await;

        assert_eq!(
            analysis.personalized_message,
            "A warmer spin on the same numbers."
        );
    }

    #[tokio::test]
    async fn submit_falls_back_to_deterministic_when_ai_fails() {
        let mut insights = MockInsightGenerator::new();
        insights.expect_is_enabled().returning(|| true);
        insights
            .expect_personalize()
            .returning(|_, _, _| Box::pin(async { Err(color_eyre::eyre::eyre!("model timeout")) }));

        let svc = AssessmentService::new(mock_results_ok(), insights);
        let responses = scale_responses(&[4.0, 4.0, 4.0]);

        let with_ai_down = svc.submit("some-new-quiz", &responses, None).await;
        let deterministic = analysis::analyze("some-new-quiz", &responses, None);

        assert_eq!(with_ai_down, deterministic);
    }

    #[tokio::test]
    async fn submit_records_the_served_score_and_band() {
        let mut results = MockResultStore::new();
        results
            .expect_record_result()
            .withf(|slug, score, band| {
                slug == "some-new-quiz" && *score == 80 && band == "Assessment Complete"
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let svc = AssessmentService::new(results, mock_insights_disabled());
        svc.submit("some-new-quiz", &scale_responses(&[4.0, 4.0, 4.0]), None)
            .await;
    }

    #[tokio::test]
    async fn submit_still_serves_analysis_when_recording_fails() {
        let mut results = MockResultStore::new();
        results
            .expect_record_result()
            .returning(|_, _, _| Box::pin(async { Err(color_eyre::eyre::eyre!("db down")) }));

        let svc = AssessmentService::new(results, mock_insights_disabled());
        let analysis = svc
            .submit("some-new-quiz", &scale_responses(&[4.0, 4.0, 4.0]), None)
            .await;

        assert_eq!(analysis.score, 80);
    }

    #[tokio::test]
    async fn times_taken_passes_the_count_through() {
        let mut results = MockResultStore::new();
        results
            .expect_results_count()
            .withf(|slug| slug == "some-new-quiz")
            .returning(|_| Box::pin(async { Ok(12) }));

        let svc = AssessmentService::new(results, mock_insights_disabled());

        assert_eq!(svc.times_taken("some-new-quiz").await, 12);
    }

    #[tokio::test]
    async fn times_taken_degrades_to_zero_when_the_store_fails() {
        let mut results = MockResultStore::new();
        results
            .expect_results_count()
            .returning(|_| Box::pin(async { Err(color_eyre::eyre::eyre!("db down")) }));

        let svc = AssessmentService::new(results, mock_insights_disabled());

        assert_eq!(svc.times_taken("some-new-quiz").await, 0);
    }
}
