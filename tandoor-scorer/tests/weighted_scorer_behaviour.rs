#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for weighted candidate scoring.

use std::cell::RefCell;

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tandoor_core::{Candidate, RecommendationQuery, Restaurant, Scorer};
use tandoor_scorer::WeightedScorer;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    scorer: WeightedScorer,
    candidate: RefCell<Option<Candidate>>,
    scored_value: RefCell<Option<f64>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        scorer: WeightedScorer::default(),
        candidate: RefCell::new(None),
        scored_value: RefCell::new(None),
    }
}

#[given("a restaurant 1.2 km away rated 4.8 with 3000 reviews")]
fn close_busy_restaurant(context: &TestContext) {
    record_candidate(context, 1.2, 4.8, 3000);
}

#[given("a restaurant 0.5 km away rated 4.0 with 100 reviews")]
fn very_close_restaurant(context: &TestContext) {
    record_candidate(context, 0.5, 4.0, 100);
}

#[given("a restaurant 5 km away rated 5.0 with 1000 reviews")]
fn edge_of_radius_restaurant(context: &TestContext) {
    record_candidate(context, 5.0, 5.0, 1000);
}

#[when("I score it for a 5 km search with a 4.0 rating floor")]
fn score_standard_query(context: &TestContext) {
    let query = RecommendationQuery::at(30.7333, 76.7794)
        .with_min_rating(4.0)
        .with_max_distance_km(5.0);
    let recorded = context.candidate.borrow();
    let candidate = recorded.as_ref().expect("candidate must be initialised");
    *context.scored_value.borrow_mut() = Some(context.scorer.score(candidate, &query));
}

#[then("the score is 0.82")]
fn assert_high_score(context: &TestContext) {
    assert_score_near(context, 0.82);
}

#[then("the score is 0.47")]
fn assert_low_score(context: &TestContext) {
    assert_score_near(context, 0.47);
}

#[then("the score is 0.5")]
fn assert_edge_score(context: &TestContext) {
    assert_score_near(context, 0.5);
}

fn record_candidate(context: &TestContext, distance_km: f64, rating: f64, reviews: u32) {
    let restaurant = Restaurant::new(
        "r1",
        Coord {
            x: 76.7794,
            y: 30.7333,
        },
        rating,
        reviews,
        "Chandigarh",
    )
    .expect("valid restaurant");
    *context.candidate.borrow_mut() = Some(Candidate::new(restaurant, distance_km, 0));
}

#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn assert_score_near(context: &TestContext, expected: f64) {
    let score = context
        .scored_value
        .borrow()
        .expect("score should be recorded");
    assert!(
        (score - expected).abs() < 1e-9,
        "expected {expected}, got {score}"
    );
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 0)]
fn close_busy_restaurant_scores_highly(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 1)]
fn floor_rated_restaurant_scores_lower(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/weighted_scorer.feature", index = 2)]
fn edge_of_radius_relies_on_quality(context: TestContext) {
    let _ = context;
}
