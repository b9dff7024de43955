use forage_core::{AgentSnapshot, Candidate, SimulatedState, Vec2};
use forage_strategies::{find_best_path, score_of, DpConfig, VisitedSet};

fn roomy_agent() -> AgentSnapshot {
    AgentSnapshot::new(Vec2::ZERO, 100.0, 100)
}

fn score_single(agent: &AgentSnapshot, candidate: Candidate, depth: u32) -> f32 {
    let live = [candidate];
    let mut visited = VisitedSet::new();
    visited.reset(live.len());
    score_of(
        &DpConfig::default(),
        0,
        &live,
        &SimulatedState::from(agent),
        depth,
        &mut visited,
    )
}

#[test]
fn out_of_time_branch_scores_zero() {
    // 10 units at speed 5 takes 2s; only 1s left.
    let agent = AgentSnapshot::new(Vec2::ZERO, 1.0, 100);
    let far = Candidate::new(1, Vec2::new(10.0, 0.0)).with_value(50);

    assert_eq!(score_single(&agent, far, 1), 0.0);
}

#[test]
fn overweight_branch_scores_minus_one_hundred() {
    let agent = roomy_agent().with_weight(95);
    let heavy = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(50)
        .with_weight(10);

    assert_eq!(score_single(&agent, heavy, 1), -100.0);
}

#[test]
fn overstressed_branch_scores_minus_five_hundred() {
    let agent = roomy_agent().with_stress(90);
    let stressful = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(50)
        .with_stress_cost(11);

    assert_eq!(score_single(&agent, stressful, 1), -500.0);
}

#[test]
fn stress_exactly_at_ceiling_is_allowed() {
    let agent = roomy_agent().with_stress(90);
    let borderline = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(50)
        .with_stress_cost(10);

    assert_eq!(score_single(&agent, borderline, 1), 50.0);
}

#[test]
fn weight_exactly_at_capacity_is_allowed() {
    let agent = roomy_agent().with_weight(90);
    let fits = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(7)
        .with_weight(10);

    assert_eq!(score_single(&agent, fits, 1), 7.0);
}

#[test]
fn time_prune_is_checked_before_weight_and_stress() {
    let agent = AgentSnapshot::new(Vec2::ZERO, 0.5, 10)
        .with_weight(10)
        .with_stress(100);
    let everything_wrong = Candidate::new(1, Vec2::new(10.0, 0.0))
        .with_value(5)
        .with_weight(5)
        .with_stress_cost(5);

    assert_eq!(score_single(&agent, everything_wrong, 1), 0.0);
}

#[test]
fn weight_prune_is_checked_before_stress() {
    let agent = roomy_agent().with_weight(100).with_stress(100);
    let candidate = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_weight(1)
        .with_stress_cost(1);

    assert_eq!(score_single(&agent, candidate, 1), -100.0);
}

#[test]
fn leaf_depth_returns_only_the_immediate_gain() {
    let live = [
        Candidate::new(1, Vec2::new(1.0, 0.0)).with_value(3),
        Candidate::new(2, Vec2::new(2.0, 0.0)).with_value(1000),
    ];
    let mut visited = VisitedSet::new();
    visited.reset(live.len());
    let state = SimulatedState::from(&roomy_agent());

    let leaf = score_of(&DpConfig::default(), 0, &live, &state, 3, &mut visited);
    let inner = score_of(&DpConfig::default(), 0, &live, &state, 2, &mut visited);

    assert_eq!(leaf, 3.0);
    assert_eq!(inner, 1003.0);
}

#[test]
fn depth_bound_hides_a_fourth_pick() {
    // With three picks, starting on a high-value item collects 30 while starting on the low
    // one collects 21. With unbounded depth both starts would total 31 and the tie would go to
    // the first (low) item.
    let live = [
        Candidate::new(1, Vec2::new(1.0, 0.0)).with_value(1),
        Candidate::new(2, Vec2::new(0.0, 1.0)).with_value(10),
        Candidate::new(3, Vec2::new(-1.0, 0.0)).with_value(10),
        Candidate::new(4, Vec2::new(0.0, -1.0)).with_value(10),
    ];
    let mut visited = VisitedSet::new();

    let best = find_best_path(&DpConfig::default(), &roomy_agent(), &live, &mut visited);
    assert_eq!(best, Some(1));

    let unbounded = DpConfig {
        max_depth: 4,
        ..DpConfig::default()
    };
    let best = find_best_path(&unbounded, &roomy_agent(), &live, &mut visited);
    assert_eq!(best, Some(0));
}

#[test]
fn negative_futures_are_floored_at_zero() {
    // Picking A first makes B overweight (-100); the floor keeps A's score at its own value.
    let agent = AgentSnapshot::new(Vec2::ZERO, 100.0, 10);
    let live = [
        Candidate::new(1, Vec2::new(1.0, 0.0))
            .with_value(4)
            .with_weight(6),
        Candidate::new(2, Vec2::new(2.0, 0.0))
            .with_value(4)
            .with_weight(6),
    ];
    let mut visited = VisitedSet::new();
    visited.reset(live.len());

    let score = score_of(
        &DpConfig::default(),
        0,
        &live,
        &SimulatedState::from(&agent),
        1,
        &mut visited,
    );

    assert_eq!(score, 4.0);
}

#[test]
fn empty_live_list_has_no_best_path() {
    let mut visited = VisitedSet::new();
    assert_eq!(
        find_best_path(&DpConfig::default(), &roomy_agent(), &[], &mut visited),
        None
    );
}

#[test]
fn search_prefers_reachable_value_over_a_bigger_prize_out_of_time() {
    // The big prize is 20 units away (4s); only 3s remain.
    let agent = AgentSnapshot::new(Vec2::ZERO, 3.0, 100);
    let live = [
        Candidate::new(1, Vec2::new(20.0, 0.0)).with_value(100),
        Candidate::new(2, Vec2::new(-2.0, 0.0)).with_value(5),
    ];
    let mut visited = VisitedSet::new();

    let best = find_best_path(&DpConfig::default(), &agent, &live, &mut visited);

    assert_eq!(best, Some(1));
}

#[test]
fn search_still_returns_a_move_when_every_option_is_penalized() {
    let agent = roomy_agent().with_stress(100);
    let live = [
        Candidate::new(1, Vec2::new(1.0, 0.0)).with_stress_cost(3),
        Candidate::new(2, Vec2::new(2.0, 0.0)).with_stress_cost(1),
    ];
    let mut visited = VisitedSet::new();

    let best = find_best_path(&DpConfig::default(), &agent, &live, &mut visited);

    assert_eq!(best, Some(0));
}

#[test]
fn extreme_weight_prunes_instead_of_overflowing() {
    let agent = AgentSnapshot::new(Vec2::ZERO, 100.0, i32::MAX).with_weight(10);
    let anvil = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(5)
        .with_weight(i32::MAX);

    assert_eq!(score_single(&agent, anvil, 1), -100.0);
}

#[test]
fn extreme_stress_prunes_instead_of_overflowing() {
    let agent = roomy_agent().with_stress(50);
    let crisis = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(5)
        .with_stress_cost(i32::MAX);

    assert_eq!(score_single(&agent, crisis, 1), -500.0);
}

#[test]
fn extreme_stress_relief_does_not_underflow() {
    let agent = roomy_agent().with_stress(-50);
    let calm = Candidate::new(1, Vec2::new(1.0, 0.0))
        .with_value(5)
        .with_stress_cost(i32::MIN);

    assert_eq!(score_single(&agent, calm, 1), 5.0);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "visited set sized for")]
fn scoring_requires_a_sized_visited_set() {
    let live = [Candidate::new(1, Vec2::new(1.0, 0.0)).with_value(1)];
    let mut visited = VisitedSet::new();

    score_of(
        &DpConfig::default(),
        0,
        &live,
        &SimulatedState::from(&roomy_agent()),
        1,
        &mut visited,
    );
}
