#![cfg(feature = "serde")]

use forage::core::{Candidate, Vec2};
use forage::strategies::{DpConfig, StrategyKind};
use forage::tools::TraceEvent;

#[test]
fn reexported_types_roundtrip() {
    let candidate = Candidate::new(3, Vec2::new(1.5, -2.0))
        .with_value(12)
        .with_weight(4)
        .with_stress_cost(6);
    let json = serde_json::to_string(&candidate).unwrap();
    assert_eq!(serde_json::from_str::<Candidate>(&json).unwrap(), candidate);

    let config = DpConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<DpConfig>(&json).unwrap(), config);

    assert_eq!(serde_json::to_string(&StrategyKind::Dp).unwrap(), "\"DP\"");

    let event = TraceEvent::Suspended { tick: 9 };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(serde_json::from_str::<TraceEvent>(&json).unwrap(), event);
}
