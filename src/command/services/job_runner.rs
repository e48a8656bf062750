//! Background image generation job runner.

use crate::command::{
    config::CommandConfig,
    domain::{
        EncodedImage, GenerationJob, JobFailure, JobProgress, JobReport, JobState, NewPost, PostId,
    },
    ports::{ImageGenerator, Publisher},
};
use mockable::Clock;
use std::sync::Arc;

/// Runs generation jobs: generate, encode as PNG, upload, then post.
///
/// Steps run strictly in order and stop at the first failure. Failures are
/// logged and reported in the returned [`JobReport`]; nothing is retried and
/// no user is notified.
#[derive(Clone)]
pub struct GenerationJobRunner<G, P, C>
where
    G: ImageGenerator,
    P: Publisher,
    C: Clock + Send + Sync,
{
    generator: Arc<G>,
    publisher: Arc<P>,
    clock: Arc<C>,
    config: Arc<CommandConfig>,
}

impl<G, P, C> GenerationJobRunner<G, P, C>
where
    G: ImageGenerator,
    P: Publisher,
    C: Clock + Send + Sync,
{
    /// Creates a job runner.
    #[must_use]
    pub const fn new(
        generator: Arc<G>,
        publisher: Arc<P>,
        clock: Arc<C>,
        config: Arc<CommandConfig>,
    ) -> Self {
        Self {
            generator,
            publisher,
            clock,
            config,
        }
    }

    /// Runs `job` to completion or failure.
    ///
    /// Emits one INFO event when the result is posted, or one ERROR event
    /// naming the failed stage.
    pub async fn run(&self, job: GenerationJob) -> JobReport {
        let mut progress = JobProgress::start(job.id(), &*self.clock);
        match self.execute(&job, &mut progress).await {
            Ok(post_id) => tracing::info!(
                job_id = %job.id(),
                channel_id = %job.channel_id(),
                post_id = %post_id,
                "Generated image posted"
            ),
            Err(failure) => {
                tracing::error!(
                    job_id = %job.id(),
                    channel_id = %job.channel_id(),
                    stage = failure.stage().as_str(),
                    error = %failure,
                    "Image generation job failed"
                );
                if let Err(err) = progress.fail(failure, &*self.clock) {
                    tracing::warn!(error = %err, "Failed job could not be marked failed");
                }
            }
        }
        progress.into_report()
    }

    async fn execute(
        &self,
        job: &GenerationJob,
        progress: &mut JobProgress,
    ) -> Result<PostId, JobFailure> {
        progress.advance(JobState::Generating, &*self.clock)?;
        let image = self.generator.generate(job.prompt()).await?;

        progress.advance(JobState::Encoding, &*self.clock)?;
        let encoded = EncodedImage::png(&image)?;

        progress.advance(JobState::Uploading, &*self.clock)?;
        let file_id = self
            .publisher
            .upload_file(
                encoded.into_bytes(),
                job.channel_id(),
                &self.config.image_filename,
            )
            .await
            .map_err(|err| JobFailure::upload(&err))?;

        progress.advance(JobState::Posting, &*self.clock)?;
        let message = self
            .config
            .render_post_message(job.prompt())
            .map_err(JobFailure::post)?;
        let post = NewPost::new(job.channel_id().clone(), job.user_id().clone(), message)
            .with_file(file_id);
        let post_id = self
            .publisher
            .create_post(post)
            .await
            .map_err(JobFailure::post)?;

        progress.complete(post_id.clone(), &*self.clock)?;
        Ok(post_id)
    }
}
