use std::pin::Pin;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::task::{Context, Poll};
use futures::Future;
use tower::Service;
use uuid::Uuid;

use crate::analysis::{AnalysisResult, FaceAnalyzer};
use crate::error::AnalysisError;

/// Image payload accepted at the service boundary
#[derive(Debug, Clone)]
pub enum ImagePayload {
    Bytes(Vec<u8>),
    DataUrl(String),
}

/// One analysis request as handed over by the serving layer
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub payload: ImagePayload,
}

impl AnalysisRequest {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            payload: ImagePayload::Bytes(bytes),
        }
    }

    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            payload: ImagePayload::DataUrl(data_url.into()),
        }
    }
}

/// Tower boundary the external serving layer mounts. HTTP framing, status
/// codes, and CORS stay on the serving side; this service only owns the
/// analysis itself.
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<FaceAnalyzer>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<FaceAnalyzer>) -> Self {
        Self { analyzer }
    }
}

impl Service<AnalysisRequest> for AnalysisService {
    type Response = AnalysisResult;
    type Error = AnalysisError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: AnalysisRequest) -> Self::Future {
        let analyzer = self.analyzer.clone();

        Box::pin(async move {
            tracing::debug!("Analyzing request {}", request.id);
            match request.payload {
                ImagePayload::Bytes(bytes) => analyzer.analyze(&bytes),
                ImagePayload::DataUrl(data_url) => analyzer.analyze_data_url(&data_url),
            }
        })
    }
}
