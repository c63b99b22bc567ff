//! Token-economy invariant tests.
//!
//! These lock the capacity behavior of `ResourcePool` under arbitrary
//! operation sequences: counts never go negative, never exceed their
//! per-color cap, and the regular colors never exceed the aggregate cap.

use proptest::prelude::*;

use ankhor::tokens::{PoolCaps, PoolError, ResourcePool, TokenColor, TokenCounts};

const PLAYER_CAPS: PoolCaps = PoolCaps {
    per_regular: 5,
    special: 2,
    regular_total: 5,
};

/// Spec scenario: per-color cap 5, aggregate cap 5, starting from zero.
/// Five fills of one color succeed, the sixth is rejected.
#[test]
fn test_five_fills_then_capacity_exceeded() {
    let mut pool = ResourcePool::new(0, 0, PLAYER_CAPS);

    for _ in 0..5 {
        pool.fill(TokenColor::Red).unwrap();
    }
    assert_eq!(
        pool.fill(TokenColor::Red),
        Err(PoolError::ColorCapExceeded {
            color: TokenColor::Red
        })
    );
    assert_eq!(pool.count(TokenColor::Red), 5);
}

#[test]
fn test_aggregate_cap_binds_across_colors() {
    let mut pool = ResourcePool::new(0, 0, PLAYER_CAPS);

    // Spread five regular tokens over two colors, then any regular color
    // is rejected by the aggregate cap while Ankh still fits.
    for _ in 0..3 {
        pool.fill(TokenColor::Blue).unwrap();
    }
    for _ in 0..2 {
        pool.fill(TokenColor::Green).unwrap();
    }
    assert_eq!(pool.fill(TokenColor::Black), Err(PoolError::RegularCapExceeded));
    assert!(pool.fill(TokenColor::Ankh).is_ok());
}

#[test]
fn test_draw_from_empty_color_is_depleted() {
    let mut pool = ResourcePool::new(0, 0, PLAYER_CAPS);

    assert_eq!(
        pool.draw(TokenColor::White),
        Err(PoolError::Depleted {
            color: TokenColor::White
        })
    );
}

fn color_strategy() -> impl Strategy<Value = TokenColor> {
    prop::sample::select(TokenColor::ALL.to_vec())
}

fn assert_invariants(pool: &ResourcePool) {
    for color in TokenColor::ALL {
        assert!(pool.count(color) <= pool.caps().for_color(color));
    }
    assert!(pool.regular_total() <= pool.caps().regular_total);
}

proptest! {
    /// For all colors and all fill/draw sequences, counts stay within
    /// their caps and the aggregate regular cap; failures leave the pool
    /// untouched.
    #[test]
    fn pool_invariants_hold_under_any_sequence(
        ops in prop::collection::vec((color_strategy(), any::<bool>()), 0..200)
    ) {
        let mut pool = ResourcePool::new(0, 0, PLAYER_CAPS);

        for (color, is_fill) in ops {
            let before = pool.state();
            let result = if is_fill {
                pool.fill(color)
            } else {
                pool.draw(color)
            };
            if result.is_err() {
                prop_assert_eq!(pool.state(), before);
            }
            assert_invariants(&pool);
        }
    }

    /// Transfers conserve tokens per color and are all-or-nothing.
    #[test]
    fn transfer_conserves_and_is_atomic(
        red in 0u8..4,
        green in 0u8..4,
        ankh in 0u8..3,
    ) {
        let mut shop = ResourcePool::new(
            5,
            5,
            PoolCaps { per_regular: 5, special: 5, regular_total: 25 },
        );
        let mut player = ResourcePool::new(0, 0, PLAYER_CAPS);

        let mut demand = TokenCounts::new();
        demand.add(TokenColor::Red, red);
        demand.add(TokenColor::Green, green);
        demand.add(TokenColor::Ankh, ankh);

        let total_before: Vec<u8> = TokenColor::ALL
            .iter()
            .map(|&c| shop.count(c) + player.count(c))
            .collect();

        let result = ResourcePool::transfer(&mut shop, &mut player, &demand);

        let total_after: Vec<u8> = TokenColor::ALL
            .iter()
            .map(|&c| shop.count(c) + player.count(c))
            .collect();
        prop_assert_eq!(total_before, total_after);

        match result {
            Ok(()) => {
                prop_assert_eq!(player.count(TokenColor::Red), red);
                prop_assert_eq!(player.count(TokenColor::Green), green);
                prop_assert_eq!(player.count(TokenColor::Ankh), ankh);
            }
            Err(_) => {
                // All-or-nothing: the player received nothing.
                prop_assert_eq!(player.state().total(), 0);
            }
        }
        assert_invariants(&shop);
        assert_invariants(&player);
    }
}
