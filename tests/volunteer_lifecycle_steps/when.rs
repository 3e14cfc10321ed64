//! When steps for volunteer lifecycle BDD scenarios.

use super::world::{VolunteerWorld, run_async};
use helpboard::task::services::{ClaimTaskRequest, CreateTaskRequest};
use rstest_bdd_macros::when;

#[when(r#"volunteer "{name}" claims the request with note "{note}""#)]
fn volunteer_claims(
    world: &mut VolunteerWorld,
    name: String,
    note: String,
) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    world.last_result = Some(run_async(
        world.service.claim(id, ClaimTaskRequest::new(name, note)),
    ));
    Ok(())
}

#[when("the request is completed")]
fn request_completed(world: &mut VolunteerWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    world.last_result = Some(run_async(world.service.complete(id)));
    Ok(())
}

#[when("an empty request is posted")]
fn empty_request_posted(world: &mut VolunteerWorld) {
    world.last_result = Some(run_async(
        world.service.create(CreateTaskRequest::default()),
    ));
}
