use forage_core::Vec2;
use forage_sim::{
    ClockEvent, DecadeOutcome, GameOverReason, ItemTemplate, Session, SimConfig, SimError,
};
use forage_strategies::StrategyKind;
use forage_tools::SharedTraceLog;

const DT: f32 = 1.0 / 30.0;

fn calm_config() -> SimConfig {
    SimConfig {
        seed: 7,
        items: vec![ItemTemplate::new("coin", 5, 1, 0)],
        ..SimConfig::default()
    }
}

#[test]
fn greedy_decade_collects_items() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();

    let summary = session.run_decade(DT).unwrap();

    assert_eq!(summary.strategy, "Greedy");
    assert_eq!((summary.age_from, summary.age_to), (0, 10));
    assert_eq!(summary.outcome, DecadeOutcome::Completed);
    assert!(summary.gained.items > 0);
    assert_eq!(summary.gained.value, 5 * summary.gained.items as i32);
    assert_eq!(summary.gained, summary.totals);
    assert_eq!(
        session.world().field.live_count() as u32,
        64 - summary.gained.items
    );
}

#[test]
fn manual_without_input_stands_still() {
    let mut session = Session::new(calm_config(), StrategyKind::Manual).unwrap();

    let summary = session.run_decade(DT).unwrap();

    assert_eq!(summary.gained.items, 0);
    assert_eq!(session.world().forager.position, Vec2::ZERO);
}

#[test]
fn manual_input_moves_the_agent() {
    let mut session = Session::new(calm_config(), StrategyKind::Manual).unwrap();
    session.world_mut().input = Vec2::new(1.0, 0.0);

    session.advance(0.1);

    let position = session.world().forager.position;
    assert!(position.x > 0.0);
    assert_eq!(position.y, 0.0);
}

#[test]
fn paused_between_decades() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();
    session.run_decade(DT).unwrap();

    let position = session.world().forager.position;
    assert_eq!(session.advance(DT), ClockEvent::Idle);
    assert_eq!(session.world().forager.position, position);
    assert_eq!(session.world().forager.control, Vec2::ZERO);
    assert_eq!(session.controller().last_direction(), Vec2::ZERO);
}

#[test]
fn next_decade_keeps_the_backpack() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();
    let first = session.run_decade(DT).unwrap();

    session.start_next_decade().unwrap();
    assert_eq!(session.world().forager.position, Vec2::ZERO);
    assert_eq!(session.world().field.live_count(), 64);
    assert_eq!(session.world().clock.remaining(), 60.0);

    let second = session.run_decade(DT).unwrap();
    assert_eq!((second.age_from, second.age_to), (10, 20));
    assert_eq!(second.totals.items, first.totals.items + second.gained.items);
}

#[test]
fn stress_ends_the_round() {
    let config = SimConfig {
        items: vec![ItemTemplate::new("panic", 1, 0, 60)],
        ..calm_config()
    };
    let mut session = Session::new(config, StrategyKind::Greedy).unwrap();

    let summary = session.run_decade(DT).unwrap();

    assert_eq!(
        summary.outcome,
        DecadeOutcome::GameOver {
            reason: GameOverReason::Stress
        }
    );
    assert!(summary.totals.stress > 100);
    assert!(session.is_over());
    assert!(matches!(
        session.start_next_decade(),
        Err(SimError::GameOver(GameOverReason::Stress))
    ));
}

#[test]
fn full_round_ends_at_final_age() {
    let config = SimConfig {
        time_limit: 1.0,
        ..calm_config()
    };
    let mut session = Session::new(config, StrategyKind::Dp).unwrap();

    let summaries = session.run(0.1, 10).unwrap();

    assert_eq!(summaries.len(), 6);
    assert_eq!(summaries[5].age_to, 60);
    assert_eq!(
        summaries[5].outcome,
        DecadeOutcome::GameOver {
            reason: GameOverReason::Age
        }
    );
    assert!(summaries[..5]
        .iter()
        .all(|s| s.outcome == DecadeOutcome::Completed));
}

#[test]
fn selecting_a_strategy_starts_the_next_decade() {
    let trace = SharedTraceLog::new();
    let mut session = Session::new(calm_config(), StrategyKind::Manual)
        .unwrap()
        .with_trace_sink(trace.clone());
    session.run_decade(DT).unwrap();

    session.select_strategy("DP").unwrap();
    assert_eq!(session.controller().strategy_name(), "DP");
    assert!(!session.world().clock.is_paused());

    session.run_decade(DT).unwrap();
    session.select_strategy("Teleport").unwrap();
    assert_eq!(session.controller().strategy_name(), "DP");
    assert_eq!(
        trace.snapshot().count("controller.unknown_strategy"),
        1
    );
}

#[test]
fn same_seed_same_round() {
    let run = || {
        let mut session = Session::new(calm_config(), StrategyKind::Dp).unwrap();
        session.run(DT, 2).unwrap().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn rejects_non_positive_tick() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();
    assert!(matches!(
        session.run_decade(0.0),
        Err(SimError::InvalidTick(_))
    ));
}

#[test]
fn summary_serializes_for_reports() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();
    let summary = session.run_decade(DT).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["strategy"], "Greedy");
    assert_eq!(json["outcome"]["kind"], "completed");
    assert_eq!(json["age_to"], 10);
}

#[test]
fn run_decade_returns_the_decade_it_closed() {
    let mut session = Session::new(calm_config(), StrategyKind::Greedy).unwrap();

    let first = session.run_decade(DT).unwrap();
    let second = session.run_decade(DT).unwrap();

    assert_eq!(session.summaries(), &[first.clone(), second.clone()]);
    assert_eq!((first.age_from, first.age_to), (0, 10));
    assert_eq!((second.age_from, second.age_to), (10, 20));
}
