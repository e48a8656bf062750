//! In-memory integration tests for detached image generation.

use crate::in_memory::helpers::{GatedGenerator, Platform, channel_id, invocation, runtime, user};
use atelier::command::{
    adapters::memory::{
        InMemoryImageGenerator, InMemoryPublisher, InMemoryUsagePolicy, PublisherCall,
    },
    domain::{CommandError, CommandOutcome},
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

const GENERATING: &str = "Generating image, please wait.";

#[rstest]
fn imagine_answers_before_the_job_runs(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let generator = GatedGenerator::new(InMemoryImageGenerator::new());
    let platform = Platform::new(rt.handle().clone(), generator);

    rt.block_on(async {
        let outcome = platform
            .router
            .route(&invocation("/imagine a red fox", "alice"))
            .await
            .expect("imagine should be accepted");

        assert_eq!(outcome, CommandOutcome::ephemeral(GENERATING));
        assert_eq!(platform.dispatcher.in_flight(), 1);
        assert_eq!(platform.generator.entered(), 0);
        assert!(platform.publisher.calls().expect("calls readable").is_empty());

        platform.generator.release(1);
        platform.dispatcher.wait_idle().await;
    });

    assert_eq!(platform.dispatcher.in_flight(), 0);
    assert_eq!(platform.generator.entered(), 1);
    let posts = platform.publisher.posts().expect("posts readable");
    let stored = posts.first().expect("result post published");
    assert_eq!(
        stored.post.message,
        "Image generated by the AI from the text: a red fox"
    );
    assert_eq!(stored.post.user_id, user("alice"));
    assert_eq!(stored.post.channel_id, channel_id());

    let files = platform.publisher.files().expect("files readable");
    let file = files.first().expect("image uploaded");
    assert_eq!(file.filename, "generated-image.png");
    assert_eq!(stored.post.file_ids, vec![file.file_id.clone()]);
}

#[rstest]
fn concurrent_jobs_each_post_once(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let generator = GatedGenerator::new(InMemoryImageGenerator::new());
    let platform = Platform::new(rt.handle().clone(), generator);
    let prompts = ["a red fox", "a blue whale", "a green owl"];

    rt.block_on(async {
        for prompt in prompts {
            let raw = format!("/imagine {prompt}");
            let outcome = platform
                .router
                .route(&invocation(&raw, "alice"))
                .await
                .expect("imagine should be accepted");
            assert_eq!(outcome, CommandOutcome::ephemeral(GENERATING));
        }
        assert_eq!(platform.dispatcher.in_flight(), prompts.len());
        assert_eq!(platform.generator.entered(), 0);

        platform.generator.release(prompts.len());
        platform.dispatcher.wait_idle().await;
    });

    let mut messages: Vec<_> = platform
        .publisher
        .posts()
        .expect("posts readable")
        .into_iter()
        .map(|stored| stored.post.message)
        .collect();
    messages.sort();
    assert_eq!(
        messages,
        vec![
            "Image generated by the AI from the text: a blue whale".to_owned(),
            "Image generated by the AI from the text: a green owl".to_owned(),
            "Image generated by the AI from the text: a red fox".to_owned(),
        ]
    );
    assert_eq!(platform.publisher.files().expect("files readable").len(), 3);
}

#[rstest]
fn failed_generation_still_answers_and_posts_nothing(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let platform = Platform::new(
        rt.handle().clone(),
        InMemoryImageGenerator::failing("model unavailable"),
    );

    let outcome = rt.block_on(async {
        let outcome = platform
            .router
            .route(&invocation("/imagine a castle", "alice"))
            .await;
        platform.dispatcher.wait_idle().await;
        outcome
    });

    assert_eq!(
        outcome.expect("dispatch does not surface job failures"),
        CommandOutcome::ephemeral(GENERATING)
    );
    assert_eq!(
        platform.generator.prompts().expect("prompts readable"),
        vec!["a castle".to_owned()]
    );
    assert!(platform.publisher.calls().expect("calls readable").is_empty());
}

#[rstest]
fn empty_prompt_is_dispatched_and_fails_in_the_job(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let platform = Platform::new(rt.handle().clone(), InMemoryImageGenerator::new());

    let outcome = rt.block_on(async {
        let outcome = platform
            .router
            .route(&invocation("/imagine", "alice"))
            .await;
        platform.dispatcher.wait_idle().await;
        outcome
    });

    assert_eq!(
        outcome.expect("empty prompt is still dispatched"),
        CommandOutcome::ephemeral(GENERATING)
    );
    assert_eq!(
        platform.generator.prompts().expect("prompts readable"),
        vec![String::new()]
    );
    assert!(platform.publisher.posts().expect("posts readable").is_empty());
}

#[rstest]
fn denied_user_dispatches_nothing(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let platform = Platform::with_policy(
        rt.handle().clone(),
        InMemoryImageGenerator::new(),
        InMemoryUsagePolicy::allow_all().with_denied_user(user("mallory")),
    );

    let result = rt.block_on(
        platform
            .router
            .route(&invocation("/imagine a red fox", "mallory")),
    );

    let err = result.expect_err("denied user must be rejected");
    assert!(matches!(err, CommandError::Unauthorized { .. }));
    assert_eq!(err.status_code(), 401);
    assert_eq!(platform.dispatcher.in_flight(), 0);
    assert_eq!(platform.policy.check_count(), 1);
    assert!(platform.generator.prompts().expect("prompts readable").is_empty());
}

#[rstest]
fn inner_prompt_whitespace_reaches_the_post(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let platform = Platform::new(rt.handle().clone(), InMemoryImageGenerator::new());

    rt.block_on(async {
        let response = platform
            .router
            .respond(&invocation("/imagine  a  spaced   prompt ", "alice"))
            .await
            .expect("imagine should be accepted");
        assert_eq!(response.text.as_deref(), Some(GENERATING));
        assert_eq!(response.channel_id, Some(channel_id()));
        platform.dispatcher.wait_idle().await;
    });

    let posts = platform.publisher.posts().expect("posts readable");
    assert!(matches!(posts.first(), Some(stored)
        if stored.post.message == "Image generated by the AI from the text: a  spaced   prompt"));
}

#[rstest]
fn failed_upload_leaves_no_post(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("failed to create runtime");
    let platform = Platform::with_parts(
        rt.handle().clone(),
        InMemoryImageGenerator::new(),
        InMemoryUsagePolicy::allow_all(),
        InMemoryPublisher::rejecting_uploads("quota exceeded"),
    );

    rt.block_on(async {
        let outcome = platform
            .router
            .route(&invocation("/imagine a red fox", "alice"))
            .await
            .expect("imagine should be accepted");
        assert_eq!(outcome, CommandOutcome::ephemeral(GENERATING));
        platform.dispatcher.wait_idle().await;
    });

    let calls = platform.publisher.calls().expect("calls readable");
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls.first(), Some(PublisherCall::Upload { .. })));
    assert!(platform.publisher.posts().expect("posts readable").is_empty());
}
