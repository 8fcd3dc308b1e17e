use crate::models::Activity;

type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    // Sports
    (
        "Basketball Team",
        "Competitive basketball training and inter-school tournaments",
        "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        15,
        &["alex@mergington.edu", "sarah@mergington.edu"],
    ),
    (
        "Swimming Club",
        "Learn swimming techniques and participate in swim meets",
        "Tuesdays and Thursdays, 3:00 PM - 4:30 PM",
        18,
        &["lucas@mergington.edu"],
    ),
    // Arts
    (
        "Art Club",
        "Explore various art mediums including painting, drawing, and sculpture",
        "Thursdays, 3:30 PM - 5:30 PM",
        16,
        &["maya@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Theater Group",
        "Acting, stage design, and drama productions",
        "Fridays, 4:00 PM - 6:00 PM",
        25,
        &[
            "isabella@mergington.edu",
            "noah@mergington.edu",
            "ava@mergington.edu",
        ],
    ),
    // Intellectual
    (
        "Debate Club",
        "Develop critical thinking and public speaking skills through structured debates",
        "Wednesdays, 3:30 PM - 5:00 PM",
        14,
        &["liam@mergington.edu", "zoe@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Competitive science team focusing on biology, chemistry, and physics challenges",
        "Saturdays, 9:00 AM - 12:00 PM",
        12,
        &["grace@mergington.edu", "jackson@mergington.edu"],
    ),
];

/// The fixed activity list every process starts with, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max, participants),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_nine_uniquely_named_activities() {
        let rows = seed_activities();
        assert_eq!(rows.len(), 9);

        let mut names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn seeded_rosters_have_no_duplicates() {
        for (name, activity) in seed_activities() {
            let mut roster = activity.participants.clone();
            roster.sort();
            roster.dedup();
            assert_eq!(roster.len(), activity.participants.len(), "{name}");
        }
    }
}
