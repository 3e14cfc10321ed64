//! Then steps for volunteer lifecycle BDD scenarios.

use super::world::{VolunteerWorld, run_async};
use helpboard::{http::ApiError, task::domain::Task};
use rstest_bdd_macros::then;

/// Looks up the scenario's task in the current listing.
fn current_task(world: &VolunteerWorld) -> Result<Task, eyre::Report> {
    let id = world.current_task()?;
    run_async(world.service.list())
        .into_iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre::eyre!("task {id} missing from listing"))
}

#[then(r#"the request status is "{status}""#)]
fn request_status(world: &VolunteerWorld, status: String) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the request keeps volunteer "{name}""#)]
fn request_keeps_volunteer(world: &VolunteerWorld, name: String) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    let volunteer = task
        .volunteer()
        .ok_or_else(|| eyre::eyre!("task has no volunteer"))?;
    if volunteer.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected volunteer {name}, found {}",
            volunteer.name().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the last action fails with "{message}""#)]
fn last_action_fails(world: &mut VolunteerWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .take()
        .ok_or_else(|| eyre::eyre!("missing action result in scenario world"))?;
    let err = match result {
        Ok(task) => return Err(eyre::eyre!("expected failure, got task {}", task.id())),
        Err(err) => ApiError::from(err),
    };
    if err.message() != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            err.message()
        ));
    }
    Ok(())
}

#[then("the impact summary reports {completed:u64} completed and {open:usize} open")]
fn impact_summary_reports(
    world: &VolunteerWorld,
    completed: u64,
    open: usize,
) -> Result<(), eyre::Report> {
    let summary = run_async(world.service.impact_summary());
    if summary.completed_today != completed || summary.open_tasks != open {
        return Err(eyre::eyre!(
            "expected {completed} completed and {open} open, found {} and {}",
            summary.completed_today,
            summary.open_tasks
        ));
    }
    Ok(())
}

#[then("the board lists {count:usize} requests")]
fn board_lists(world: &VolunteerWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list()).len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} requests, found {listed}"));
    }
    Ok(())
}
