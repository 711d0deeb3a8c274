#![cfg(feature = "serde")]

use serde_json::json;

use paco_sako::board::{Action, ActionPolicy, Color, Hand, LiftPolicy, PieceType, Position, Tile};

#[test]
fn piece_shape() {
    let position = Position::initial();
    let value = serde_json::to_value(&position).unwrap();

    assert_eq!(value["currentPlayer"], json!("White"));
    assert_eq!(value["liftedPieces"], json!([]));
    assert_eq!(
        value["pieces"][0],
        json!({
            "pieceType": "Rook",
            "color": "White",
            "position": { "x": 0, "y": 0 },
            "identity": "p0"
        })
    );
}

#[test]
fn action_shape() {
    assert_eq!(
        serde_json::to_value(Action::Lift(Tile::new(3, 1))).unwrap(),
        json!({ "Lift": 11 })
    );
    assert_eq!(
        serde_json::to_value(Action::Place(Tile::new(7, 7))).unwrap(),
        json!({ "Place": 63 })
    );
    assert_eq!(
        serde_json::to_value(Action::Promote(PieceType::Knight)).unwrap(),
        json!({ "Promote": "Knight" })
    );

    let decoded: Action = serde_json::from_str(r#"{"Place": 36}"#).unwrap();
    assert_eq!(decoded, Action::Place(Tile::new(4, 4)));
}

#[test]
fn off_board_action_fails_to_serialize() {
    assert!(serde_json::to_string(&Action::Place(Tile::new(0, 32))).is_err());
}

#[test]
fn returning_a_piece_leaves_json_unchanged() {
    let position = Position::initial();
    let back = position
        .do_action(Action::Lift(Tile::new(1, 0)))
        .and_then(|p| p.do_action(Action::Place(Tile::new(1, 0))))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&back).unwrap(),
        serde_json::to_value(&position).unwrap()
    );
}

#[test]
fn action_rejects_bad_payloads() {
    assert!(serde_json::from_str::<Action>(r#"{"Lift": 64}"#).is_err());
    assert!(serde_json::from_str::<Action>(r#"{"Promote": "Archbishop"}"#).is_err());
    assert!(serde_json::from_str::<Action>(r#"{"Promote": "queen"}"#).is_err());
    assert!(serde_json::from_str::<Action>(r#"{"Drop": 3}"#).is_err());
}

#[test]
fn position_round_trip_with_hand() {
    let lifted = Position::initial()
        .do_action(Action::Lift(Tile::new(1, 0)))
        .unwrap();
    let text = serde_json::to_string(&lifted).unwrap();
    let decoded: Position = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, lifted);
    assert!(matches!(decoded.hand(), Hand::Single(_)));
}

#[test]
fn position_rejects_broken_invariants() {
    let stacked = json!({
        "pieces": [
            { "pieceType": "Pawn", "color": "White", "position": { "x": 0, "y": 0 }, "identity": "a" },
            { "pieceType": "Rook", "color": "White", "position": { "x": 0, "y": 0 }, "identity": "b" }
        ],
        "liftedPieces": [],
        "currentPlayer": "White"
    });
    assert!(serde_json::from_value::<Position>(stacked).is_err());

    let same_color_hand = json!({
        "pieces": [],
        "liftedPieces": [
            { "pieceType": "Pawn", "color": "Black", "position": { "x": 0, "y": 0 }, "identity": "a" },
            { "pieceType": "Rook", "color": "Black", "position": { "x": 0, "y": 0 }, "identity": "b" }
        ],
        "currentPlayer": "Black"
    });
    assert!(serde_json::from_value::<Position>(same_color_hand).is_err());

    let duplicate = json!({
        "pieces": [
            { "pieceType": "Pawn", "color": "White", "position": { "x": 0, "y": 0 }, "identity": "a" },
            { "pieceType": "Rook", "color": "Black", "position": { "x": 5, "y": 0 }, "identity": "a" }
        ],
        "liftedPieces": [],
        "currentPlayer": "White"
    });
    assert!(serde_json::from_value::<Position>(duplicate).is_err());
}

#[test]
fn position_from_external_payload() {
    let payload = json!({
        "pieces": [
            { "pieceType": "King", "color": "White", "position": { "x": 4, "y": 0 }, "identity": "wk" },
            { "pieceType": "Queen", "color": "Black", "position": { "x": 4, "y": 0 }, "identity": "bq" }
        ],
        "liftedPieces": [],
        "currentPlayer": "Black"
    });
    let position: Position = serde_json::from_value(payload).unwrap();
    assert_eq!(position.current_player(), Color::Black);
    assert_eq!(position.pieces().len(), 2);
}

#[test]
fn policy_from_config() {
    let policy: ActionPolicy = serde_json::from_str(r#"{"lift": "CurrentPlayerOnly"}"#).unwrap();
    assert_eq!(policy.lift, LiftPolicy::CurrentPlayerOnly);
    let default: ActionPolicy = serde_json::from_str("{}").unwrap();
    assert_eq!(default, ActionPolicy::default());
}

#[test]
fn action_history_replays() {
    let history = r#"[{"Lift": 12}, {"Place": 28}, {"Lift": 51}, {"Place": 35}, {"Lift": 28}, {"Place": 35}]"#;
    let actions: Vec<Action> = serde_json::from_str(history).unwrap();
    let position =
        paco_sako::board::replay(&Position::initial(), actions, &ActionPolicy::default()).unwrap();
    assert_eq!(position.pieces().len(), 32);
    assert!(position.hand().is_empty());
}
