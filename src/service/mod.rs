pub mod features;

use crate::consts::MALICIOUS_LABEL;
use crate::model::DecisionModel;
use crate::pb::flow_classifier_server::FlowClassifier;
use crate::pb::{FlowRecord, FlowRecordBatch, Verdict, VerdictBatch};

use features::feature_vector;
use log::{error, warn};
use std::pin::Pin;
use std::sync::Arc;
use tokio_stream::Stream;
use tonic::{Request, Response, Status, Streaming};

/// Implements the FlowClassifier contract against one shared, read-only
/// model instance.
pub struct FlowClassifierService {
    model: Arc<DecisionModel>,
}

impl FlowClassifierService {
    pub fn new(model: Arc<DecisionModel>) -> Self {
        Self { model }
    }
}

fn classify_record(model: &DecisionModel, record: &FlowRecord) -> Result<Verdict, Status> {
    let features = feature_vector(record).map_err(|e| {
        warn!("rejected flow record: {}", e);
        Status::invalid_argument(e.to_string())
    })?;

    let label = model.predict(&features).map_err(|e| {
        error!("classification failed: {}", e);
        Status::internal(e.to_string())
    })?;

    Ok(Verdict {
        malicious: label == MALICIOUS_LABEL,
    })
}

#[tonic::async_trait]
impl FlowClassifier for FlowClassifierService {
    async fn classify(
        &self,
        request: Request<FlowRecord>,
    ) -> Result<Response<Verdict>, Status> {
        let record = request.into_inner();
        let verdict = classify_record(&self.model, &record)?;

        Ok(Response::new(verdict))
    }

    async fn classify_batch(
        &self,
        request: Request<FlowRecordBatch>,
    ) -> Result<Response<VerdictBatch>, Status> {
        let batch = request.into_inner();

        // all or nothing: the first bad record rejects the whole batch
        let mut verdicts = Vec::with_capacity(batch.records.len());
        for record in &batch.records {
            verdicts.push(classify_record(&self.model, record)?);
        }

        Ok(Response::new(VerdictBatch { verdicts }))
    }

    type ClassifyStreamingStream = Pin<Box<dyn Stream<Item = Result<Verdict, Status>> + Send>>;

    async fn classify_streaming(
        &self,
        request: Request<Streaming<FlowRecord>>,
    ) -> Result<Response<Self::ClassifyStreamingStream>, Status> {
        let mut in_stream = request.into_inner();
        let model = self.model.clone();

        // one verdict per record, emitted in arrival order; the first
        // failure terminates the stream with its status, and a clean end
        // of input closes the output stream cleanly
        let out_stream = async_stream::try_stream! {
            while let Some(record) = in_stream.message().await? {
                let verdict = classify_record(&model, &record)?;
                yield verdict;
            }
        };

        Ok(Response::new(
            Box::pin(out_stream) as Self::ClassifyStreamingStream
        ))
    }
}
