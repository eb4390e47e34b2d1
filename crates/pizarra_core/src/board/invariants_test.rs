// Property-based checks for the board invariants.

#[cfg(test)]
mod properties {
    use crate::board::{BoardState, SelectionProtocol};
    use crate::models::{Player, Position, Roster};
    use crate::tactics::{FormationKey, FormationTemplate, TOKEN_COUNT};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const ROSTER_SIZE: usize = 12;

    fn roster() -> Roster {
        let players = (0..ROSTER_SIZE)
            .map(|i| {
                Player::new(format!("p{}", i), format!("Player {}", i), (i + 1) as u8, Position::MID)
            })
            .collect();
        Roster::new(players).unwrap()
    }

    fn token_id_strategy() -> impl Strategy<Value = String> {
        // Mostly valid slots, occasionally an unknown id to exercise
        // the defensive no-op path.
        prop_oneof![
            8 => (0..TOKEN_COUNT).prop_map(|i| format!("t{}", i)),
            1 => Just("t99".to_string()),
        ]
    }

    fn player_id_strategy() -> impl Strategy<Value = String> {
        (0..ROSTER_SIZE).prop_map(|i| format!("p{}", i))
    }

    fn formation_strategy() -> impl Strategy<Value = FormationKey> {
        prop_oneof![
            Just(FormationKey::F331),
            Just(FormationKey::F232),
            Just(FormationKey::F241),
            Just(FormationKey::F322),
        ]
    }

    #[derive(Debug, Clone)]
    enum Op {
        Assign { token_id: String, player_id: String },
        Swap { token_a: String, token_b: String },
        Clear { token_id: String },
        Move { token_id: String, x: f32, y: f32 },
        ChangeFormation(FormationKey),
        AutoFill,
        ClearAll,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (token_id_strategy(), player_id_strategy())
                .prop_map(|(token_id, player_id)| Op::Assign { token_id, player_id }),
            (token_id_strategy(), token_id_strategy())
                .prop_map(|(token_a, token_b)| Op::Swap { token_a, token_b }),
            token_id_strategy().prop_map(|token_id| Op::Clear { token_id }),
            (token_id_strategy(), -50.0f32..150.0, -50.0f32..150.0)
                .prop_map(|(token_id, x, y)| Op::Move { token_id, x, y }),
            formation_strategy().prop_map(Op::ChangeFormation),
            Just(Op::AutoFill),
            Just(Op::ClearAll),
        ]
    }

    fn apply(board: &mut BoardState, roster: &Roster, op: &Op) {
        match op {
            Op::Assign { token_id, player_id } => board.assign_occupant(token_id, player_id),
            Op::Swap { token_a, token_b } => board.swap_occupants(token_a, token_b),
            Op::Clear { token_id } => board.clear_occupant(token_id),
            Op::Move { token_id, x, y } => board.move_token(token_id, *x, *y),
            Op::ChangeFormation(key) => board.change_formation(*key),
            Op::AutoFill => board.auto_fill(roster),
            Op::ClearAll => board.clear_all(),
        }
    }

    proptest! {
        /// No sequence of operations can leave one player on two
        /// tokens, and coordinates never escape the field.
        #[test]
        fn uniqueness_and_bounds_hold_under_any_op_sequence(
            ops in prop::collection::vec(op_strategy(), 0..40)
        ) {
            let roster = roster();
            let mut board = BoardState::default();
            for op in &ops {
                apply(&mut board, &roster, op);

                let mut seen = HashSet::new();
                for token in board.tokens() {
                    if let Some(id) = &token.occupant {
                        prop_assert!(seen.insert(id.clone()),
                            "player {} occupies two tokens after {:?}", id, op);
                    }
                    prop_assert!((0.0..=100.0).contains(&token.x));
                    prop_assert!((0.0..=100.0).contains(&token.y));
                }
                prop_assert_eq!(board.tokens().len(), TOKEN_COUNT);
            }
        }

        /// Remapping through any formation and back preserves the
        /// slot-index to occupant mapping exactly.
        #[test]
        fn formation_round_trip_preserves_occupants(
            ops in prop::collection::vec(op_strategy(), 0..20),
            via in formation_strategy(),
        ) {
            let roster = roster();
            let mut board = BoardState::default();
            for op in &ops {
                apply(&mut board, &roster, op);
            }
            let home = board.formation();
            let occupants: Vec<_> =
                board.tokens().iter().map(|t| t.occupant.clone()).collect();

            board.change_formation(via);
            board.change_formation(home);

            let after: Vec<_> = board.tokens().iter().map(|t| t.occupant.clone()).collect();
            prop_assert_eq!(occupants, after);

            let template = FormationTemplate::for_key(home);
            for (i, token) in board.tokens().iter().enumerate() {
                let slot = template.slot(i).unwrap();
                prop_assert_eq!((token.x, token.y), (slot.x, slot.y));
            }
        }

        /// Swapping the same pair twice restores the board.
        #[test]
        fn swap_is_an_involution(
            ops in prop::collection::vec(op_strategy(), 0..20),
            a in token_id_strategy(),
            b in token_id_strategy(),
        ) {
            let roster = roster();
            let mut board = BoardState::default();
            for op in &ops {
                apply(&mut board, &roster, op);
            }
            let before = board.clone();
            board.swap_occupants(&a, &b);
            board.swap_occupants(&a, &b);
            prop_assert_eq!(board, before);
        }

        /// Moving with out-of-range coordinates stores the same result
        /// as moving with the clamped values.
        #[test]
        fn move_clamps_like_preclamped_input(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            token_id in token_id_strategy(),
        ) {
            let mut raw = BoardState::default();
            let mut clamped = BoardState::default();
            raw.move_token(&token_id, x, y);
            clamped.move_token(&token_id, x.clamp(0.0, 100.0), y.clamp(0.0, 100.0));
            prop_assert_eq!(raw, clamped);
        }

        /// Auto-fill over the same board and roster always produces
        /// the same assignment, and filled slots follow ascending slot
        /// order against roster order.
        #[test]
        fn auto_fill_is_deterministic(
            ops in prop::collection::vec(op_strategy(), 0..20)
        ) {
            let roster = roster();
            let mut board = BoardState::default();
            for op in &ops {
                apply(&mut board, &roster, op);
            }

            let mut first = board.clone();
            let mut second = board.clone();
            first.auto_fill(&roster);
            second.auto_fill(&roster);
            prop_assert_eq!(&first, &second);

            // Bench order maps onto empty slots in ascending order.
            let empty_slots: Vec<usize> = board
                .tokens()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.occupant.is_none())
                .map(|(i, _)| i)
                .collect();
            let bench: Vec<String> =
                board.bench_players(&roster).iter().map(|p| p.id.clone()).collect();
            for (slot_idx, player_id) in empty_slots.iter().zip(bench.iter()) {
                prop_assert_eq!(
                    first.tokens()[*slot_idx].occupant.as_ref(),
                    Some(player_id)
                );
            }
        }

        /// The selection machine is a single tagged state (mutual
        /// exclusion by construction) and every completed action lands
        /// back in Idle.
        #[test]
        fn completed_selection_actions_return_to_idle(
            clicks in prop::collection::vec(
                prop_oneof![
                    token_id_strategy().prop_map(|t| (true, t)),
                    player_id_strategy().prop_map(|p| (false, p)),
                ],
                0..30,
            )
        ) {
            let mut protocol = SelectionProtocol::new();
            for (is_token, id) in &clicks {
                let command = if *is_token {
                    protocol.click_token(id)
                } else {
                    protocol.click_bench(id)
                };
                if let Some(cmd) = command {
                    prop_assert!(protocol.is_idle(),
                        "completed {:?} must reset selection", cmd);
                }
            }
        }
    }
}
