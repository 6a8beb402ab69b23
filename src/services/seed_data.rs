// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed seed data: team rosters and the workout catalog.

use uuid::Uuid;

use crate::models::{Exercise, Team, User, Workout};

/// A team and the users that start on it.
pub struct Roster {
    pub team: &'static str,
    pub description: &'static str,
    /// (email, name) pairs
    pub members: &'static [(&'static str, &'static str)],
}

pub static ROSTERS: [Roster; 2] = [
    Roster {
        team: "Team Marvel",
        description: "Avengers assemble! The mightiest heroes united for fitness.",
        members: &[
            ("tony.stark@marvel.com", "Tony Stark"),
            ("steve.rogers@marvel.com", "Steve Rogers"),
            ("natasha.romanoff@marvel.com", "Natasha Romanoff"),
            ("bruce.banner@marvel.com", "Bruce Banner"),
            ("thor.odinson@marvel.com", "Thor Odinson"),
            ("peter.parker@marvel.com", "Peter Parker"),
        ],
    },
    Roster {
        team: "Team DC",
        description: "Justice League united! Heroes committed to staying in peak condition.",
        members: &[
            ("bruce.wayne@dc.com", "Bruce Wayne"),
            ("clark.kent@dc.com", "Clark Kent"),
            ("diana.prince@dc.com", "Diana Prince"),
            ("barry.allen@dc.com", "Barry Allen"),
            ("arthur.curry@dc.com", "Arthur Curry"),
            ("hal.jordan@dc.com", "Hal Jordan"),
        ],
    },
];

impl Roster {
    pub fn team(&self, created_at: &str) -> Team {
        Team::new(self.team, self.description, created_at)
    }

    pub fn users(&self, created_at: &str) -> Vec<User> {
        self.members
            .iter()
            .map(|(email, name)| User::new(email, name, Some(self.team), created_at))
            .collect()
    }
}

fn workout(
    name: &str,
    category: &str,
    difficulty: &str,
    duration: u32,
    description: &str,
    exercises: Vec<Exercise>,
    created_at: &str,
) -> Workout {
    Workout {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        duration,
        description: description.to_string(),
        exercises,
        created_at: created_at.to_string(),
    }
}

/// The six catalog workouts.
pub fn workout_catalog(created_at: &str) -> Vec<Workout> {
    vec![
        workout(
            "Super Soldier Training",
            "Strength",
            "Advanced",
            60,
            "Inspired by Captain America's training regimen. Build strength and endurance.",
            vec![
                Exercise::named("Push-ups").sets(4).reps(20),
                Exercise::named("Pull-ups").sets(4).reps(10),
                Exercise::named("Squats").sets(4).reps(25),
                Exercise::named("Burpees").sets(3).reps(15),
            ],
            created_at,
        ),
        workout(
            "Speedster Sprint",
            "Cardio",
            "Intermediate",
            30,
            "Channel your inner Flash with high-intensity interval training.",
            vec![
                Exercise::named("Sprint")
                    .duration("30 seconds")
                    .rest("30 seconds")
                    .rounds(10),
                Exercise::named("Cool-down jog").duration("5 minutes"),
            ],
            created_at,
        ),
        workout(
            "Warrior Balance",
            "Flexibility",
            "Beginner",
            45,
            "Wonder Woman-inspired flexibility and balance training.",
            vec![
                Exercise::named("Warrior Pose").duration("60 seconds").each_side(),
                Exercise::named("Tree Pose").duration("45 seconds").each_side(),
                Exercise::named("Downward Dog").duration("90 seconds"),
                Exercise::named("Pigeon Pose").duration("60 seconds").each_side(),
            ],
            created_at,
        ),
        workout(
            "Hulk Smash Circuit",
            "Strength",
            "Advanced",
            45,
            "High-intensity strength circuit for maximum power.",
            vec![
                Exercise::named("Deadlifts").sets(4).reps(8),
                Exercise::named("Box Jumps").sets(3).reps(12),
                Exercise::named("Kettlebell Swings").sets(4).reps(15),
                Exercise::named("Battle Ropes").sets(3).duration("30 seconds"),
            ],
            created_at,
        ),
        workout(
            "Bat-Training Basics",
            "Mixed",
            "Intermediate",
            50,
            "Batman-style training combining agility, strength, and cardio.",
            vec![
                Exercise::named("Jump Rope").duration("5 minutes"),
                Exercise::named("Shadow Boxing").sets(3).duration("3 minutes"),
                Exercise::named("Core Circuit").sets(3).circuit(&[
                    "Plank",
                    "Mountain Climbers",
                    "Russian Twists",
                ]),
                Exercise::named("Stretching").duration("10 minutes"),
            ],
            created_at,
        ),
        workout(
            "Aquaman Swim",
            "Cardio",
            "Beginner",
            35,
            "Swimming workout for full-body conditioning.",
            vec![
                Exercise::named("Freestyle").distance("400m"),
                Exercise::named("Backstroke").distance("200m"),
                Exercise::named("Breaststroke").distance("200m"),
                Exercise::named("Cool-down").distance("200m"),
            ],
            created_at,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NOW: &str = "2024-01-15T12:00:00Z";

    #[test]
    fn test_rosters_have_six_unique_members_each() {
        let mut emails = HashSet::new();
        for roster in &ROSTERS {
            let users = roster.users(NOW);
            assert_eq!(users.len(), 6);
            for user in users {
                assert_eq!(user.team.as_deref(), Some(roster.team));
                assert_eq!(user.points, 0);
                assert!(emails.insert(user.email));
            }
        }
        assert_eq!(emails.len(), 12);
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = workout_catalog(NOW);
        assert_eq!(catalog.len(), 6);

        let bat = catalog
            .iter()
            .find(|w| w.name == "Bat-Training Basics")
            .unwrap();
        let core = &bat.exercises[2];
        assert_eq!(core.name, "Core Circuit");
        assert_eq!(core.sets, Some(3));
        assert_eq!(
            core.exercises,
            vec!["Plank", "Mountain Climbers", "Russian Twists"]
        );

        let swim = catalog.iter().find(|w| w.name == "Aquaman Swim").unwrap();
        assert_eq!(swim.duration, 35);
        assert!(swim.exercises.iter().all(|e| e.distance.is_some()));
    }
}
