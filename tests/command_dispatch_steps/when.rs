//! When steps for command dispatch BDD scenarios.

use super::world::{CHANNEL, DispatchWorld, run_async};
use atelier::command::domain::{ChannelId, CommandInvocation, PostId, UserId};
use rstest_bdd_macros::when;

#[when(r#""{user}" sends "{raw}""#)]
fn user_sends(world: &mut DispatchWorld, user: String, raw: String) -> Result<(), eyre::Report> {
    let invocation = CommandInvocation::new(raw, UserId::new(user)?, ChannelId::new(CHANNEL)?);
    let reply = run_async(world.platform()?.router.respond(&invocation));
    world.reply = Some(reply);
    Ok(())
}

#[when(r#""{user}" replies in thread "{root}" with "{raw}""#)]
fn user_replies_in_thread(
    world: &mut DispatchWorld,
    user: String,
    root: String,
    raw: String,
) -> Result<(), eyre::Report> {
    let invocation = CommandInvocation::new(raw, UserId::new(user)?, ChannelId::new(CHANNEL)?)
        .with_thread_root(PostId::new(root)?);
    let reply = run_async(world.platform()?.router.respond(&invocation));
    world.reply = Some(reply);
    Ok(())
}
