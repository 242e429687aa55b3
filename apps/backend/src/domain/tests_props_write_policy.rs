//! Property tests for patch validation and merge (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::player::{Player, PlayerPatch, PlayerStatus};
use crate::domain::write_policy::{AdminWritePolicy, NormalWritePolicy, WritePolicy};

fn player() -> Player {
    Player {
        game_id: 1,
        player_id: 1,
        symbol: "boot".to_string(),
        position: 0,
        cash: 1500,
        properties: vec![],
        status: PlayerStatus::Active,
        in_jail: false,
        jail_turns: 0,
        lock_version: 1,
    }
}

fn arb_patch() -> impl Strategy<Value = PlayerPatch> {
    (
        proptest::option::of("[a-z]{0,40}"),
        proptest::option::of(-5i32..45),
        proptest::option::of(-1_000i64..5_000),
        proptest::option::of(proptest::collection::vec(-2i32..42, 0..6)),
        proptest::option::of(prop_oneof![
            Just(PlayerStatus::Active),
            Just(PlayerStatus::Eliminated)
        ]),
        proptest::option::of(any::<bool>()),
        proptest::option::of(-1i32..5),
    )
        .prop_map(
            |(symbol, position, cash, properties, status, in_jail, jail_turns)| PlayerPatch {
                symbol,
                position,
                cash,
                properties,
                status,
                in_jail,
                jail_turns,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Anything a normal caller may write, an admin may write too.
    #[test]
    fn prop_admin_accepts_whatever_normal_accepts(patch in arb_patch()) {
        if NormalWritePolicy.validate(&patch).is_ok() {
            prop_assert!(AdminWritePolicy.validate(&patch).is_ok());
        }
    }

    /// A violation always names a field the patch actually carries.
    #[test]
    fn prop_violation_names_a_patched_field(patch in arb_patch()) {
        for policy in [&NormalWritePolicy as &dyn WritePolicy, &AdminWritePolicy] {
            if let Err(v) = policy.validate(&patch) {
                prop_assert!(patch.has(v.field));
            }
        }
    }

    #[test]
    fn prop_merge_is_idempotent(patch in arb_patch()) {
        let once = patch.apply_to(&player());
        let twice = patch.apply_to(&once);
        prop_assert_eq!(once, twice);
    }
}
