use super::*;

#[test]
fn settings_round_trip_through_json() {
    let settings = Settings {
        white_player: PlayerKind::Computer,
        black_player: PlayerKind::Human,
        search_depth: 4,
        flipped: true,
    };
    let json = serde_json::to_string(&settings).unwrap();
    let restored: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.white_player, PlayerKind::Computer);
    assert_eq!(restored.black_player, PlayerKind::Human);
    assert_eq!(restored.search_depth, 4);
    assert!(restored.flipped);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(restored.white_player, PlayerKind::Human);
    assert_eq!(restored.black_player, PlayerKind::Computer);
    assert_eq!(restored.search_depth, 3);
    assert!(!restored.flipped);
}
