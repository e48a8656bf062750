//! Then steps for command dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use atelier::command::domain::{CommandResponse, ResponseType};
use eyre::{Result, eyre};
use rstest_bdd_macros::then;

#[then(r#"the reply is the ephemeral message "{text}""#)]
fn reply_is_ephemeral(world: &DispatchWorld, text: String) -> Result<()> {
    let response = world
        .reply()?
        .as_ref()
        .map_err(|err| eyre!("command failed: {err}"))?;
    if response.response_type != Some(ResponseType::Ephemeral) {
        return Err(eyre!("expected an ephemeral reply, got {response:?}"));
    }
    if response.text.as_deref() != Some(text.as_str()) {
        return Err(eyre!("expected reply text '{text}', got {:?}", response.text));
    }
    Ok(())
}

#[then(r#"the reply redirects to "{location}""#)]
fn reply_redirects(world: &DispatchWorld, location: String) -> Result<()> {
    let response = world
        .reply()?
        .as_ref()
        .map_err(|err| eyre!("command failed: {err}"))?;
    if response.goto_location.as_deref() != Some(location.as_str()) {
        return Err(eyre!(
            "expected redirect to '{location}', got {:?}",
            response.goto_location
        ));
    }
    Ok(())
}

#[then("the reply is empty")]
fn reply_is_empty(world: &DispatchWorld) -> Result<()> {
    let response = world
        .reply()?
        .as_ref()
        .map_err(|err| eyre!("command failed: {err}"))?;
    if *response != CommandResponse::default() {
        return Err(eyre!("expected an empty reply, got {response:?}"));
    }
    Ok(())
}

#[then("the usage policy was not consulted")]
fn policy_not_consulted(world: &DispatchWorld) -> Result<()> {
    let checks = world.platform()?.policy.check_count();
    if checks != 0 {
        return Err(eyre!("expected no policy checks, found {checks}"));
    }
    Ok(())
}

#[then("the command fails with status {status:u16}")]
fn command_fails_with_status(world: &DispatchWorld, status: u16) -> Result<()> {
    let Err(err) = world.reply()? else {
        return Err(eyre!("expected the command to fail"));
    };
    if err.status_code() != status {
        return Err(eyre!(
            "expected status {status}, got {} ({err})",
            err.status_code()
        ));
    }
    Ok(())
}

#[then(r#"after background jobs finish the channel has a post reading "{message}""#)]
fn channel_has_post(world: &DispatchWorld, message: String) -> Result<()> {
    let platform = world.platform()?;
    run_async(platform.dispatcher.wait_idle());
    let posts = platform
        .publisher
        .posts()
        .map_err(|err| eyre!("publisher state unreadable: {err}"))?;
    if !posts.iter().any(|stored| stored.post.message == message) {
        return Err(eyre!("no post reading '{message}' among {posts:?}"));
    }
    Ok(())
}

#[then("after background jobs finish the channel has no posts")]
fn channel_has_no_posts(world: &DispatchWorld) -> Result<()> {
    let platform = world.platform()?;
    run_async(platform.dispatcher.wait_idle());
    let posts = platform
        .publisher
        .posts()
        .map_err(|err| eyre!("publisher state unreadable: {err}"))?;
    if !posts.is_empty() {
        return Err(eyre!("expected no posts, found {}", posts.len()));
    }
    Ok(())
}
