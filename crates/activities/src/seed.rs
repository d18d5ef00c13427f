//! Built-in seed list loaded into every fresh registry.

use crate::types::Activity;

pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball",
            "Practice drills and compete in inter-school basketball games",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(["james@mergington.edu"]),
        Activity::new(
            "Tennis",
            "Improve your serve and play singles and doubles matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            10,
        )
        .with_participants(["lucas@mergington.edu"]),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing and sculpture in the art studio",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(["grace@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Rehearse and perform in school plays and productions",
            "Thursdays, 4:00 PM - 6:00 PM",
            25,
        )
        .with_participants(["ava@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Build argumentation skills and compete in debate tournaments",
            "Wednesdays, 4:00 PM - 5:30 PM",
            16,
        )
        .with_participants(["liam@mergington.edu", "chloe@mergington.edu"]),
        Activity::new(
            "Science Club",
            "Run hands-on experiments and prepare for science fairs",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
        )
        .with_participants(["noah@mergington.edu"]),
    ]
}
