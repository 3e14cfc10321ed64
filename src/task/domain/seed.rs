//! Demo tasks used to populate a board when no snapshot exists.

use super::{Category, NewTask, RequiredText, TaskBoard, TaskDomainError, Urgency, Volunteer};
use mockable::Clock;

/// Volunteer assigned to pre-claimed demo tasks.
pub const DEMO_VOLUNTEER: &str = "Demo Volunteer";

/// Note left on pre-claimed demo tasks.
pub const DEMO_VOLUNTEER_NOTE: &str = "Happy to help!";

struct DemoTask {
    title: &'static str,
    description: &'static str,
    category: Category,
    urgency: Urgency,
    location: &'static str,
    requester_name: &'static str,
    pre_claimed: bool,
}

const DEMO_TASKS: [DemoTask; 9] = [
    DemoTask {
        title: "Grocery pickup for Mrs. Lee",
        description: "Pick up basic groceries from Oak Market and drop at 12 Pine St.",
        category: Category::Food,
        urgency: Urgency::Medium,
        location: "Downtown",
        requester_name: "Mrs. Lee",
        pre_claimed: false,
    },
    DemoTask {
        title: "Algebra tutoring for 9th grader",
        description: "One-hour tutoring session focusing on linear equations.",
        category: Category::Tutoring,
        urgency: Urgency::High,
        location: "Library Room B",
        requester_name: "Carlos",
        pre_claimed: true,
    },
    DemoTask {
        title: "Pharmacy pickup",
        description: "Help picking up medication from Green Pharmacy.",
        category: Category::ElderlyCare,
        urgency: Urgency::Low,
        location: "Riverside",
        requester_name: "Ahmed",
        pre_claimed: false,
    },
    DemoTask {
        title: "Dog walking assistance",
        description: "Walk Bella for 30 minutes in the afternoon.",
        category: Category::Errands,
        urgency: Urgency::Medium,
        location: "Maple Ave",
        requester_name: "Nina",
        pre_claimed: false,
    },
    DemoTask {
        title: "Resume review session",
        description: "Help review and edit resume for entry-level IT role.",
        category: Category::Tutoring,
        urgency: Urgency::Low,
        location: "Community Center",
        requester_name: "Sam",
        pre_claimed: false,
    },
    DemoTask {
        title: "Meal prep for new parents",
        description: "Cook/portion three simple meals for the week.",
        category: Category::Food,
        urgency: Urgency::High,
        location: "Eastwood",
        requester_name: "Priya",
        pre_claimed: true,
    },
    DemoTask {
        title: "Ride to clinic",
        description: "Provide a ride to 10am appointment and back.",
        category: Category::ElderlyCare,
        urgency: Urgency::High,
        location: "Westside",
        requester_name: "George",
        pre_claimed: false,
    },
    DemoTask {
        title: "Park cleanup volunteers",
        description: "Join a 1-hour litter pickup at Willow Park.",
        category: Category::Other,
        urgency: Urgency::Medium,
        location: "Willow Park",
        requester_name: "City Youth Club",
        pre_claimed: false,
    },
    DemoTask {
        title: "Tech help setting up phone",
        description: "Assist with transferring contacts and apps to new phone.",
        category: Category::Other,
        urgency: Urgency::Medium,
        location: "North End",
        requester_name: "Lara",
        pre_claimed: false,
    },
];

impl DemoTask {
    fn fields(&self) -> Result<NewTask, TaskDomainError> {
        Ok(NewTask {
            title: RequiredText::new("title", self.title)?,
            description: RequiredText::new("description", self.description)?,
            category: self.category,
            urgency: self.urgency,
            location: RequiredText::new("location", self.location)?,
            requester_name: RequiredText::new("requesterName", self.requester_name)?,
        })
    }
}

/// Builds a board holding the demo tasks, two of them already claimed.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a demo entry violates a task invariant.
pub fn seed_board(clock: &impl Clock) -> Result<TaskBoard, TaskDomainError> {
    let mut board = TaskBoard::new();
    for demo in &DEMO_TASKS {
        let task = board.create(demo.fields()?, clock)?;
        if demo.pre_claimed {
            let volunteer = Volunteer::new(
                RequiredText::new("volunteerName", DEMO_VOLUNTEER)?,
                DEMO_VOLUNTEER_NOTE,
            );
            board.claim(task.id(), volunteer)?;
        }
    }
    Ok(board)
}
