//! Stage trait and the pipeline driver.
//!
//! Scheduling is single-threaded cooperative: each record passes through
//! every stage to completion (the lint await included) before the next
//! record is accepted, so output order is always input order. The first
//! stage error aborts the run; `finish` only runs on a normal end of
//! stream, which is what keeps the aggregator from flushing partial
//! results after an abort.

use futures_util::future::BoxFuture;
use futures_util::{Stream, StreamExt};

use crate::error::PipelineError;
use crate::record::FileRecord;

/// One processing stage in the pipeline.
pub trait Stage: Send {
    /// Processes one record, forwarding it downstream on success.
    fn process<'a>(
        &'a mut self,
        record: FileRecord,
    ) -> BoxFuture<'a, Result<FileRecord, PipelineError>>;

    /// Called once after the upstream end-of-stream signal.
    fn finish(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

/// An ordered chain of stages.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the chain.
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Runs the pipeline over an in-memory sequence of records.
    pub async fn run(
        self,
        records: impl IntoIterator<Item = FileRecord>,
    ) -> Result<Vec<FileRecord>, PipelineError> {
        self.run_stream(futures_util::stream::iter(records)).await
    }

    /// Runs the pipeline over a stream of records.
    pub async fn run_stream(
        mut self,
        mut records: impl Stream<Item = FileRecord> + Unpin,
    ) -> Result<Vec<FileRecord>, PipelineError> {
        let mut forwarded = Vec::new();

        while let Some(mut record) = records.next().await {
            for stage in &mut self.stages {
                record = stage.process(record).await?;
            }
            forwarded.push(record);
        }

        for stage in &mut self.stages {
            stage.finish()?;
        }

        Ok(forwarded)
    }
}
