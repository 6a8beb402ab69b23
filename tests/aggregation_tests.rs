// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregation and ranking against a store, including the incremental path.

use octofit_tracker::db::{EntityStore, Filter, MemoryStore};
use octofit_tracker::error::{AppError, ReferentialError, ValidationError};
use octofit_tracker::models::{Activity, ActivityType, LeaderboardEntry, Team, User};
use octofit_tracker::services::{
    aggregation, ranking, ActivityLog, NewActivity,
};

mod common;
use common::{seed_team, NOW};

fn yoga(id: &str, email: &str, points: u32) -> Activity {
    Activity {
        id: id.to_string(),
        user_email: email.to_string(),
        user_name: email.to_string(),
        activity_type: ActivityType::Yoga,
        duration: points,
        distance: 0.0,
        calories_burned: points * 6,
        points_earned: points,
        date: NOW.to_string(),
    }
}

fn new_activity(email: &str, activity_type: &str, duration: i64, distance: f64) -> NewActivity {
    NewActivity {
        user_email: email.to_string(),
        activity_type: activity_type.to_string(),
        duration,
        distance,
        calories_burned: 0,
    }
}

async fn totals(store: &MemoryStore) -> (Vec<(String, u64)>, Vec<(String, u64)>) {
    let mut users: Vec<_> = store
        .find::<User>(Filter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|u| (u.email, u.points))
        .collect();
    users.sort();
    let mut teams: Vec<_> = store
        .find::<Team>(Filter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|t| (t.name, t.total_points))
        .collect();
    teams.sort();
    (users, teams)
}

#[tokio::test]
async fn test_two_users_same_team_scenario() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["fifty@x.com", "eighty@x.com"]).await;
    store.create(&yoga("1", "fifty@x.com", 50)).await.unwrap();
    store.create(&yoga("2", "eighty@x.com", 80)).await.unwrap();

    aggregation::recompute(&store).await.unwrap();
    let entries = ranking::rebuild_leaderboard(&store).await.unwrap();

    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].total_points, 80);
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].total_points, 50);

    let team = store.get::<Team>("Red").await.unwrap().unwrap();
    assert_eq!(team.total_points, 130);
    assert_eq!(team.member_count, 2);
}

#[tokio::test]
async fn test_user_without_activities_still_ranked() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["busy@x.com", "idle@x.com"]).await;
    store.create(&yoga("1", "busy@x.com", 30)).await.unwrap();

    aggregation::recompute(&store).await.unwrap();
    ranking::rebuild_leaderboard(&store).await.unwrap();

    let idle = store.get::<User>("idle@x.com").await.unwrap().unwrap();
    assert_eq!(idle.points, 0);
    let entry = store
        .get::<LeaderboardEntry>("idle@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.rank, 2);
    assert_eq!(entry.total_points, 0);
}

#[tokio::test]
async fn test_recompute_is_idempotent() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com", "b@x.com"]).await;
    seed_team(&store, "Blue", &["c@x.com"]).await;
    store.create(&yoga("1", "a@x.com", 12)).await.unwrap();
    store.create(&yoga("2", "c@x.com", 40)).await.unwrap();
    store.create(&yoga("3", "c@x.com", 5)).await.unwrap();

    aggregation::recompute(&store).await.unwrap();
    let first = totals(&store).await;
    aggregation::recompute(&store).await.unwrap();
    let second = totals(&store).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_recompute_skips_orphans_without_failing() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com"]).await;
    store.create(&yoga("1", "a@x.com", 10)).await.unwrap();
    store.create(&yoga("2", "ghost@x.com", 99)).await.unwrap();

    let report = aggregation::recompute(&store).await.unwrap();

    assert_eq!(report.activities_counted, 1);
    assert_eq!(report.anomalies.len(), 1);
    let team = store.get::<Team>("Red").await.unwrap().unwrap();
    assert_eq!(team.total_points, 10);
}

#[tokio::test]
async fn test_incremental_updates_match_full_recompute() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com", "b@x.com"]).await;
    seed_team(&store, "Blue", &["c@x.com"]).await;
    aggregation::recompute(&store).await.unwrap();

    let log = ActivityLog::new(store.clone());
    let run = log
        .log_activity(new_activity("a@x.com", "Running", 30, 5.5))
        .await
        .unwrap();
    assert_eq!(run.points_earned, 85);
    log.log_activity(new_activity("b@x.com", "Yoga", 45, 0.0))
        .await
        .unwrap();
    let swim = log
        .log_activity(new_activity("c@x.com", "Swimming", 60, 3.0))
        .await
        .unwrap();
    assert_eq!(swim.distance, 0.0);
    assert_eq!(swim.points_earned, 60);
    log.remove_activity(&run.id).await.unwrap();
    log.log_activity(new_activity("a@x.com", "Cycling", 20, 10.0))
        .await
        .unwrap();

    let incremental = totals(&store).await;
    aggregation::recompute(&store).await.unwrap();
    let recomputed = totals(&store).await;

    assert_eq!(incremental, recomputed);
    let red = store.get::<Team>("Red").await.unwrap().unwrap();
    assert_eq!(red.total_points, 45 + 120);
}

#[tokio::test]
async fn test_incremental_log_rebuilds_leaderboard() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com", "b@x.com"]).await;
    let log = ActivityLog::new(store.clone());

    log.log_activity(new_activity("b@x.com", "Yoga", 30, 0.0))
        .await
        .unwrap();

    let entries = ranking::leaderboard(&store).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].user_email, "b@x.com");
    assert_eq!(entries[0].total_points, 30);
}

#[tokio::test]
async fn test_log_for_unknown_user_is_referential_error() {
    let store = MemoryStore::new();
    let log = ActivityLog::new(store.clone());

    let err = log
        .log_activity(new_activity("ghost@x.com", "Yoga", 30, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Referential(ReferentialError::UnknownUser(_))
    ));
    assert_eq!(store.count::<Activity>(), 0);
}

#[tokio::test]
async fn test_log_with_unknown_type_is_validation_error() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com"]).await;
    let log = ActivityLog::new(store.clone());

    let err = log
        .log_activity(new_activity("a@x.com", "Jousting", 30, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::UnknownActivityType(_))
    ));
}

#[tokio::test]
async fn test_remove_unknown_activity_not_found() {
    let log = ActivityLog::new(MemoryStore::new());

    let err = log.remove_activity("missing").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_recompute_racing_log_activity_keeps_totals_exact() {
    let store = MemoryStore::new();
    seed_team(&store, "Red", &["a@x.com", "b@x.com"]).await;
    let log = ActivityLog::new(store.clone());

    let mut tasks = Vec::new();
    for i in 0..20 {
        let writer = log.clone();
        let email = if i % 2 == 0 { "a@x.com" } else { "b@x.com" };
        tasks.push(tokio::spawn(async move {
            writer
                .log_activity(new_activity(email, "Running", 10 + i, 1.5))
                .await
                .map(|_| ())
        }));

        let recomputer = log.clone();
        tasks.push(tokio::spawn(async move {
            recomputer.recompute().await.map(|_| ())
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let activities = store.find::<Activity>(Filter::All).await.unwrap();
    assert_eq!(activities.len(), 20);
    for user in store.find::<User>(Filter::All).await.unwrap() {
        let expected: u64 = activities
            .iter()
            .filter(|a| a.user_email == user.email)
            .map(|a| u64::from(a.points_earned))
            .sum();
        assert_eq!(user.points, expected, "points for {}", user.email);
    }
    let red = store.get::<Team>("Red").await.unwrap().unwrap();
    let all: u64 = activities.iter().map(|a| u64::from(a.points_earned)).sum();
    assert_eq!(red.total_points, all);
    assert_eq!(ranking::leaderboard(&store).await.unwrap().len(), 2);
}
