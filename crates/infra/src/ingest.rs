//! Upload → parse → metrics → store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, instrument};

use xerlens_ai::{SummaryGenerator, summarize_or_blank};
use xerlens_core::{DomainError, ProjectKey, SessionId};
use xerlens_xer::ParseError;

use crate::config::IngestConfig;
use crate::read_model::ProjectStore;
use crate::report::AnalysisReport;
use crate::upload::{Upload, UploadPolicy, UploadRejection};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("could not parse file")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Ingest pipeline bound to one project store.
///
/// The store is injected and may be shared; nothing here is process-global,
/// so several ingestors (or several sessions on one ingestor) never see each
/// other's projects unless they share a store.
pub struct Ingestor<S: ?Sized> {
    config: IngestConfig,
    policy: UploadPolicy,
    store: Arc<S>,
    summarizer: Option<Arc<dyn SummaryGenerator>>,
}

impl<S: ?Sized> core::fmt::Debug for Ingestor<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ingestor")
            .field("config", &self.config)
            .field("summarizer", &self.summarizer.as_ref().map(|g| g.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl<S> Ingestor<S>
where
    S: ProjectStore<Arc<AnalysisReport>> + ?Sized,
{
    pub fn new(config: IngestConfig, store: Arc<S>) -> Self {
        Self {
            policy: UploadPolicy::from_config(&config),
            config,
            store,
            summarizer: None,
        }
    }

    pub fn with_summarizer(mut self, generator: Arc<dyn SummaryGenerator>) -> Self {
        self.summarizer = Some(generator);
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Analyze an upload and store the result under `session`.
    pub fn ingest(&self, session: SessionId, upload: &Upload) -> Result<Arc<AnalysisReport>, IngestError> {
        self.ingest_at(session, upload, Utc::now())
    }

    /// [`Ingestor::ingest`] with an explicit clock reading.
    #[instrument(
        level = "info",
        skip(self, session, upload, now),
        fields(session = %session, file = %upload.file_name, bytes = upload.bytes.len())
    )]
    pub fn ingest_at(
        &self,
        session: SessionId,
        upload: &Upload,
        now: DateTime<Utc>,
    ) -> Result<Arc<AnalysisReport>, IngestError> {
        self.policy.check(upload)?;
        let model = xerlens_xer::parse_bytes(&upload.bytes)?;

        let key = match model.project.id.as_deref() {
            Some(id) => ProjectKey::new(id).unwrap_or_else(|_| ProjectKey::minted(now.timestamp_millis())),
            None => ProjectKey::minted(now.timestamp_millis()),
        };

        let mut report = AnalysisReport::analyze(key.clone(), model, now);

        if self.config.summary_enabled {
            if let Some(generator) = &self.summarizer {
                let summary = summarize_or_blank(generator.as_ref(), &report.model, &report.kpis);
                report = report.with_executive_summary(summary);
            }
        }

        info!(
            project = %key,
            activities = report.activity_count,
            resources = report.resource_count,
            health = %report.kpis.health,
            "project analyzed"
        );

        let report = Arc::new(report);
        if let Some(previous) = self.store.upsert(session, key, Arc::clone(&report)) {
            debug!(ingested_at = %previous.ingested_at, "replaced earlier analysis of this project");
        }
        Ok(report)
    }

    /// A previously analyzed project of `session`.
    pub fn project(&self, session: SessionId, key: &ProjectKey) -> Result<Arc<AnalysisReport>, IngestError> {
        self.store
            .get(session, key)
            .ok_or_else(|| DomainError::not_found().into())
    }

    /// Every analyzed project of `session`, ordered by key.
    pub fn projects(&self, session: SessionId) -> Vec<Arc<AnalysisReport>> {
        self.store.list(session)
    }

    /// Drop everything stored for an ended session.
    pub fn end_session(&self, session: SessionId) -> usize {
        let dropped = self.store.clear_session(session);
        debug!(%session, dropped, "session ended");
        dropped
    }
}
