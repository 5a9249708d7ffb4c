use super::common::*;
use crate::workflows::recommendations::domain::{Badge, VehicleId};
use crate::workflows::recommendations::preferences::PreferencesError;
use crate::workflows::recommendations::questionnaire::{QuestionnaireEvent, QuestionnaireStep};
use crate::workflows::recommendations::service::{
    ComparisonRequest, QuestionnaireRequest, RecommendationServiceError,
};

#[test]
fn recommend_validates_and_reports() {
    let service = build_service();

    let report = service
        .recommend(request(85_000, 130_000))
        .expect("valid request");

    assert_eq!(report.count, 3);
    assert_eq!(report.badges[0].badge, Badge::BestOverall);
    assert_eq!(report.badges[0].vehicle_name, "Porsche 911 Carrera S");
    assert_eq!(report.preferences.usage, "city");
}

#[test]
fn recommend_rejects_inverted_budget() {
    let service = build_service();

    let error = service
        .recommend(request(150_000, 50_000))
        .expect_err("inverted budget rejected");

    assert!(matches!(
        error,
        RecommendationServiceError::Preferences(PreferencesError::InvertedBudget { .. })
    ));
}

#[test]
fn vehicle_lookup_reports_unknown_ids() {
    let service = build_service();

    assert_eq!(
        service.vehicle(&VehicleId::from("4")).expect("known").name,
        "S-Class S580"
    );
    assert!(matches!(
        service.vehicle(&VehicleId::from("404")),
        Err(RecommendationServiceError::UnknownVehicle(_))
    ));
}

#[test]
fn compare_defaults_to_first_four_recommendations() {
    let service = build_service();

    let table = service
        .compare(ComparisonRequest {
            preferences: request(20_000, 250_000),
            selected: Vec::new(),
        })
        .expect("comparison builds");

    assert_eq!(table.columns.len(), 4);
    assert_eq!(table.columns[0].title, "Porsche 911 Carrera S");
    assert_eq!(table.columns[0].badge, Some("Best Overall"));
    let price_row = table
        .rows
        .iter()
        .find(|row| row.label == "Price")
        .expect("price row present");
    assert_eq!(price_row.values[0], "$124,200");
}

#[test]
fn compare_restricts_to_pinned_vehicles_in_rank_order() {
    let service = build_service();

    let table = service
        .compare(ComparisonRequest {
            preferences: request(20_000, 250_000),
            selected: vec![VehicleId::from("5"), VehicleId::from("1")],
        })
        .expect("comparison builds");

    let ids: Vec<_> = table.columns.iter().map(|column| column.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
    let maintenance = table
        .rows
        .iter()
        .find(|row| row.label == "Maintenance")
        .expect("maintenance row");
    assert_eq!(maintenance.values, vec!["Very Low", "Very Low"]);
}

#[test]
fn compare_rejects_vehicles_outside_the_results() {
    let service = build_service();

    let error = service
        .compare(ComparisonRequest {
            preferences: request(85_000, 130_000),
            selected: vec![VehicleId::from("5")],
        })
        .expect_err("Model Y is outside this budget");
    assert!(matches!(error, RecommendationServiceError::NotRecommended(_)));

    let error = service
        .compare(ComparisonRequest {
            preferences: request(20_000, 250_000),
            selected: ["1", "2", "3", "4"].into_iter().map(VehicleId::from).collect(),
        })
        .expect_err("four pins exceed the cap");
    assert!(matches!(
        error,
        RecommendationServiceError::TooManySelected { max: 3 }
    ));
}

#[test]
fn questionnaire_reports_progress_until_submission() {
    let service = build_service();

    let midway = service
        .questionnaire(QuestionnaireRequest {
            events: vec![QuestionnaireEvent::Continue],
        })
        .expect("replays");
    assert_eq!(midway.step, QuestionnaireStep::CollectingUsage);
    assert_eq!(midway.step_number, Some(2));
    assert_eq!(midway.total_steps, 3);
    assert!(midway.report.is_none());
    assert!(midway.summary.is_some());

    let done = service
        .questionnaire(QuestionnaireRequest {
            events: vec![
                QuestionnaireEvent::Continue,
                QuestionnaireEvent::Continue,
                QuestionnaireEvent::Submit,
            ],
        })
        .expect("replays");
    assert_eq!(done.step, QuestionnaireStep::Submitted);
    let report = done.report.expect("submitted questionnaire carries a report");
    // Default window is $30k-$150k, which covers the whole catalog.
    assert_eq!(report.count, 5);
}
