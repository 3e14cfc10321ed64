//! Unit tests for the task lifecycle module.


use crate::task::domain::{Category, NewTask, RequiredText, Urgency, Volunteer};

/// Builds valid task fields with the given title.
fn new_task(title: &str) -> NewTask {
    NewTask {
        title: RequiredText::new("title", title).expect("title is non-empty"),
        description: RequiredText::new("description", "Carry shopping upstairs")
            .expect("description is non-empty"),
        category: Category::Errands,
        urgency: Urgency::Medium,
        location: RequiredText::new("location", "Cedar Street").expect("location is non-empty"),
        requester_name: RequiredText::new("requesterName", "Grace")
            .expect("requester is non-empty"),
    }
}

/// Builds volunteer details with the given name and note.
fn volunteer(name: &str, note: &str) -> Volunteer {
    Volunteer::new(
        RequiredText::new("volunteerName", name).expect("volunteer name is non-empty"),
        note,
    )
}
