#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for categorisation and match scoring.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use trailhead_core::test_support::dictionary;
use trailhead_core::{
    CategoryDictionary, CategorySet, PreferenceDimension, ScoredTrail, Scorer, Trail,
    UserPreferences, WeightTable,
};
use trailhead_scorer::{MatchScorer, PreferenceMapper, ScoringSession};

/// World state for match scoring scenarios.
#[derive(Default)]
pub struct ScoreWorld {
    dictionary: RefCell<Option<CategoryDictionary>>,
    weights: RefCell<Option<WeightTable>>,
    prefs: RefCell<Option<UserPreferences>>,
    scored: RefCell<Option<ScoredTrail>>,
}

#[fixture]
/// Build an empty world for each scenario.
pub fn world() -> ScoreWorld {
    ScoreWorld::default()
}

fn set_preferences(world: &ScoreWorld, prefs: UserPreferences) {
    world
        .weights
        .replace(Some(PreferenceMapper::build_weights(&prefs)));
    world.prefs.replace(Some(prefs));
}

#[given("a dictionary where Forest matches forest or bush and Alpine matches mountain")]
fn sample_dictionary(world: &ScoreWorld) {
    world.dictionary.replace(Some(dictionary(&[
        ("Forest", &["forest", "bush"]),
        ("Alpine", &["mountain"]),
    ])));
}

#[given("a visitor who rates bush and mountain at 4")]
fn outdoorsy_visitor(world: &ScoreWorld) {
    set_preferences(
        world,
        UserPreferences::new()
            .with_level(PreferenceDimension::Bush, 4)
            .with_level(PreferenceDimension::Mountain, 4),
    );
}

#[given("a visitor with no preferences")]
fn indifferent_visitor(world: &ScoreWorld) {
    set_preferences(world, UserPreferences::new());
}

#[when("I score a trail categorised as Alpine only")]
fn score_alpine_only(world: &ScoreWorld) {
    let borrowed = world.weights.borrow();
    let weights = borrowed.as_ref().expect("weights should be built");
    let categories = CategorySet::from(["Alpine".to_owned()]);
    let score = MatchScorer.score(&categories, weights);
    world.scored.replace(Some(ScoredTrail::new(
        Trail::new(1, "A beautiful alpine trail"),
        categories,
        score,
    )));
}

#[when("I score the trail {name}")]
fn score_named_trail(world: &ScoreWorld, name: String) {
    let trail_name = name.trim_matches('"');
    let borrowed = world.dictionary.borrow();
    let dictionary = borrowed.as_ref().expect("dictionary should be loaded");
    let prefs = world.prefs.borrow().expect("preferences should be set");
    let session = ScoringSession::new(dictionary, &prefs).expect("compile dictionary");
    world
        .scored
        .replace(Some(session.annotate_one(Trail::new(2, trail_name))));
}

#[then("the maximum score is {expected}")]
fn maximum_score(world: &ScoreWorld, expected: u16) {
    let borrowed = world.weights.borrow();
    let weights = borrowed.as_ref().expect("weights should be built");
    assert_eq!(weights.max_score(), expected);
}

#[then("the trail has {count} categories")]
fn category_count(world: &ScoreWorld, count: usize) {
    let borrowed = world.scored.borrow();
    let scored = borrowed.as_ref().expect("trail should be scored");
    assert_eq!(scored.categories().len(), count);
}

#[then("the match score is {expected}")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn match_score(world: &ScoreWorld, expected: f32) {
    let borrowed = world.scored.borrow();
    let scored = borrowed.as_ref().expect("trail should be scored");
    assert!(
        (scored.match_score() - expected).abs() < 1e-6,
        "expected {expected}, got {}",
        scored.match_score()
    );
}

#[scenario(path = "tests/features/match_score.feature", index = 0)]
fn partial_match(world: ScoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_score.feature", index = 1)]
fn full_match(world: ScoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_score.feature", index = 2)]
fn no_preferences(world: ScoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_score.feature", index = 3)]
fn no_matches(world: ScoreWorld) {
    let _ = world;
}
