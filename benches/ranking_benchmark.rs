use criterion::{criterion_group, criterion_main, Criterion};
use octofit_tracker::models::{Activity, Team, User};
use octofit_tracker::services::{compute_totals, rank_users, ActivityGenerator};
use std::hint::black_box;

const NOW: &str = "2024-01-15T12:00:00Z";

fn fixture(team_count: usize, users_per_team: usize) -> (Vec<User>, Vec<Team>, Vec<Activity>) {
    let teams: Vec<Team> = (0..team_count)
        .map(|t| Team::new(&format!("Team {}", t), "Benchmark team", NOW))
        .collect();

    let users: Vec<User> = teams
        .iter()
        .flat_map(|team| {
            (0..users_per_team).map(move |u| {
                let email = format!("user{}@{}.example.com", u, team.name.replace(' ', ""));
                User::new(&email, &email, Some(&team.name), NOW)
            })
        })
        .collect();

    let mut generator = ActivityGenerator::seeded(17);
    let activities = users
        .iter()
        .flat_map(|user| generator.generate_for(user, NOW).expect("generate activities"))
        .collect();

    (users, teams, activities)
}

fn benchmark_leaderboard(c: &mut Criterion) {
    let (mut users, teams, activities) = fixture(20, 500);

    let totals = compute_totals(&users, &teams, &activities);
    for user in &mut users {
        user.points = totals.user_points[&user.email];
    }

    let mut group = c.benchmark_group("leaderboard");

    group.bench_function("compute_totals_10k_users", |b| {
        b.iter(|| compute_totals(black_box(&users), black_box(&teams), black_box(&activities)))
    });

    group.bench_function("rank_10k_users", |b| {
        b.iter(|| rank_users(black_box(&users), NOW))
    });

    group.finish();
}

criterion_group!(benches, benchmark_leaderboard);
criterion_main!(benches);
