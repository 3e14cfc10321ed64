//! Given steps for volunteer lifecycle BDD scenarios.

use super::world::{VolunteerWorld, run_async};
use eyre::WrapErr;
use helpboard::task::{
    adapters::memory::InMemorySnapshotRepository,
    services::{ClaimTaskRequest, CreateTaskRequest},
};
use rstest_bdd_macros::given;

#[given("an empty help board")]
fn empty_help_board(world: &mut VolunteerWorld) {
    world.reset_to_empty_board();
}

#[given("a help board with no saved data")]
fn help_board_without_saved_data(world: &mut VolunteerWorld) {
    *world = VolunteerWorld::with_repository(InMemorySnapshotRepository::new());
}

#[given(
    r#"a posted request titled "{title}" in category "{category}" with urgency "{urgency}""#
)]
fn posted_request(
    world: &mut VolunteerWorld,
    title: String,
    category: String,
    urgency: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(
        title,
        "Details agreed with the requester",
        category,
        urgency,
        "Riverside",
        "Pat",
    );
    let task = run_async(world.service.create(request)).wrap_err("post request")?;
    world.current_task = Some(task.id());
    Ok(())
}

#[given(r#"volunteer "{name}" has claimed the request"#)]
fn volunteer_has_claimed(world: &mut VolunteerWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    run_async(world.service.claim(id, ClaimTaskRequest::new(name, "On my way")))
        .wrap_err("claim request")?;
    Ok(())
}
