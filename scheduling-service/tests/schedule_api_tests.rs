#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use common::{monday, plain_agent, test_state};
use scheduling_service::api::create_router;
use serde_json::json;

fn test_server(agents: Vec<scheduling_service::domain::normalizer::RawAgent>) -> TestServer {
    let state = test_state(agents);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

/// E1: three agents, a 7-day horizon, no unavailability or preferences --
/// expect a feasible roster with exactly one Day agent and one Night agent
/// covering every day.
#[tokio::test]
async fn generates_a_feasible_roster_for_a_minimal_week() {
    let server = test_server(vec![plain_agent("A"), plain_agent("B"), plain_agent("C")]);
    let start = monday();
    let end = start + chrono::Duration::days(6);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "roster generated");

    let assignments = body["data"]["assignments"].as_object().unwrap();
    assert_eq!(assignments.len(), 3);

    let mut day_counts = std::collections::HashMap::new();
    let mut night_counts = std::collections::HashMap::new();
    for shifts in assignments.values() {
        for entry in shifts.as_array().unwrap() {
            let date = entry["date"].as_str().unwrap().to_string();
            match entry["shift"].as_str().unwrap() {
                "Day" => *day_counts.entry(date).or_insert(0) += 1,
                "Night" => *night_counts.entry(date).or_insert(0) += 1,
                "ControlDesk" => {}
                other => panic!("unexpected shift {other}"),
            }
        }
    }
    assert_eq!(day_counts.len(), 7);
    assert_eq!(night_counts.len(), 7);
    assert!(day_counts.values().all(|&c| c == 1));
    assert!(night_counts.values().all(|&c| c == 1));
}

/// `start_date` after `end_date` fails pre-model validation (`InvalidRange`)
/// before any solver model is built.
#[tokio::test]
async fn rejects_an_inverted_date_range() {
    let server = test_server(vec![plain_agent("A")]);
    let start = monday();
    let end = start - chrono::Duration::days(1);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// E5: two agents with mutually exclusive restrictions over a 7-day
/// horizon -- the combined hard constraints admit no assignment, so the
/// solver's verdict surfaces as a distinct 422, not a 400.
#[tokio::test]
async fn over_constrained_restrictions_surface_as_no_solution() {
    let mut a = plain_agent("A");
    a.restrictions.push("Night".to_string());
    let mut b = plain_agent("B");
    b.restrictions.push("Day".to_string());

    let server = test_server(vec![a, b]);
    let start = monday();
    let end = start + chrono::Duration::days(6);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

/// E6: a seed shift pinned on the previous Sunday night is accepted, and the
/// resulting roster carries no previous-week days.
#[tokio::test]
async fn accepts_seed_shifts_and_excludes_previous_week_from_the_response() {
    let server = test_server(vec![plain_agent("A"), plain_agent("B"), plain_agent("C")]);
    let start = monday();
    let end = start + chrono::Duration::days(6);
    let previous_sunday = start - chrono::Duration::days(1);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
            "seed_shifts": {
                "A": [{ "date": previous_sunday.to_string(), "shift": "Night" }]
            }
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let assignments = body["data"]["assignments"].as_object().unwrap();
    for shifts in assignments.values() {
        for entry in shifts.as_array().unwrap() {
            let date = entry["date"].as_str().unwrap();
            assert!(date >= &start.to_string(), "response leaked a previous-week day: {date}");
        }
    }
}

/// A seed shift naming an agent not in the roster is rejected (`InvalidSeed`)
/// before any solve is attempted.
#[tokio::test]
async fn rejects_seed_shifts_for_unknown_agents() {
    let server = test_server(vec![plain_agent("A")]);
    let start = monday();
    let end = start + chrono::Duration::days(6);
    let previous_sunday = start - chrono::Duration::days(1);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
            "seed_shifts": {
                "ghost": [{ "date": previous_sunday.to_string(), "shift": "Night" }]
            }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// E2: a mid-week training day restricts the surrounding days -- the day
/// before may only carry ControlDesk, the day after only ControlDesk or
/// Night. Checked against whichever shift the solver actually assigned on
/// those days, if any.
#[tokio::test]
async fn training_day_restricts_the_shifts_on_either_side() {
    let mut a = plain_agent("A");
    let start = monday();
    let wednesday = start + chrono::Duration::days(2);
    a.training.push(wednesday);

    let server = test_server(vec![a, plain_agent("B"), plain_agent("C"), plain_agent("D")]);
    let end = start + chrono::Duration::days(6);

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let a_shifts = body["data"]["assignments"]["A"].as_array().unwrap();

    let tuesday = (start + chrono::Duration::days(1)).to_string();
    let thursday = (start + chrono::Duration::days(3)).to_string();

    for entry in a_shifts {
        let date = entry["date"].as_str().unwrap();
        let shift = entry["shift"].as_str().unwrap();
        if date == tuesday {
            assert_eq!(shift, "ControlDesk", "day before training must be ControlDesk-only");
        }
        if date == thursday {
            assert!(
                shift == "ControlDesk" || shift == "Night",
                "day after training must be ControlDesk or Night, got {shift}"
            );
        }
    }
}

/// E3: an agent on leave for a full work week still accrues `5 * dur_Conge`
/// toward their workload total, and the workload-balance hard cap is
/// checked against that credited total, not just hours actually worked.
#[tokio::test]
async fn leave_spanning_a_work_week_credits_workload_balance() {
    let start = monday(); // Feb 9 2026
    let mut a = plain_agent("A");
    a.leave = Some((start, start + chrono::Duration::days(4))); // Mon-Fri, week 1

    let server = test_server(vec![a, plain_agent("B"), plain_agent("C"), plain_agent("D")]);
    let end = start + chrono::Duration::days(13); // two full ISO weeks

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let assignments = body["data"]["assignments"].as_object().unwrap();

    let duration_tenths = |shift: &str| -> f64 {
        match shift {
            "Day" => 80.0,
            "Night" => 100.0,
            "ControlDesk" => 70.0,
            other => panic!("unexpected shift {other}"),
        }
    };
    const CONGE_TENTHS: f64 = 80.0;
    const LEAVE_WEEKDAYS: f64 = 5.0;
    const DELTA_TENTHS: f64 = 240.0;

    let real_hours_tenths = |agent: &str| -> f64 {
        assignments[agent]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| duration_tenths(entry["shift"].as_str().unwrap()))
            .sum()
    };

    let totals: Vec<f64> = vec![
        real_hours_tenths("A") + LEAVE_WEEKDAYS * CONGE_TENTHS,
        real_hours_tenths("B"),
        real_hours_tenths("C"),
        real_hours_tenths("D"),
    ];

    let max = totals.iter().cloned().fold(f64::MIN, f64::max);
    let min = totals.iter().cloned().fold(f64::MAX, f64::min);
    assert!(
        max - min <= DELTA_TENTHS + 1e-6,
        "credited workload spread {} exceeds the balance cap {DELTA_TENTHS}: {totals:?}",
        max - min
    );
}

/// E4: over a 4-agent, 4-week horizon, full-weekend assignments spread
/// evenly across the team -- `max_a W_a - min_a W_a <= 1`.
#[tokio::test]
async fn weekend_assignments_stay_balanced_over_four_weeks() {
    let server = test_server(vec![
        plain_agent("A"),
        plain_agent("B"),
        plain_agent("C"),
        plain_agent("D"),
    ]);
    let start = monday();
    let end = start + chrono::Duration::days(27); // four full ISO weeks

    let response: TestResponse = server
        .post("/api/v1/schedules")
        .json(&json!({
            "start_date": start.to_string(),
            "end_date": end.to_string(),
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let assignments = body["data"]["assignments"].as_object().unwrap();

    let worked_on = |agent: &str, date: &str| -> bool {
        assignments[agent]
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry["date"].as_str().unwrap() == date)
    };

    let mut full_weekends = std::collections::HashMap::new();
    for week in 0..4 {
        let saturday = (start + chrono::Duration::days(5 + 7 * week)).to_string();
        let sunday = (start + chrono::Duration::days(6 + 7 * week)).to_string();
        for agent in ["A", "B", "C", "D"] {
            if worked_on(agent, &saturday) && worked_on(agent, &sunday) {
                *full_weekends.entry(agent).or_insert(0) += 1;
            }
        }
    }

    for agent in ["A", "B", "C", "D"] {
        full_weekends.entry(agent).or_insert(0);
    }
    let max = *full_weekends.values().max().unwrap();
    let min = *full_weekends.values().min().unwrap();
    assert!(max - min <= 1, "weekend assignments not balanced: {full_weekends:?}");
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let server = test_server(vec![plain_agent("A")]);
    let response: TestResponse = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
