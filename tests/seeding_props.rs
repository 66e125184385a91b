use proptest::prelude::*;
use knockout::seeding::{bracket_order, canonical_positions, first_round_pairs, fold_blocks};
use knockout::{Bracket, Competitor};

fn field_size() -> impl Strategy<Value = usize> {
    (1u32..=10).prop_map(|exp| 1usize << exp)
}

proptest! {
    #[test]
    fn order_is_a_permutation(n in field_size()) {
        let mut order = bracket_order((1..=n).collect::<Vec<_>>());
        prop_assert_eq!(order.len(), n);
        order.sort_unstable();
        prop_assert_eq!(order, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn top_seeds_split_across_sub_brackets(n in field_size()) {
        let order = canonical_positions(n);
        let mut top = 2;
        while top <= n {
            // Each block feeding a round of `top` holds exactly one of the top `top` seeds.
            for block in order.chunks(n / top) {
                let favourites = block.iter().filter(|&&seed| seed <= top).count();
                prop_assert_eq!(favourites, 1, "n = {}, top = {}", n, top);
            }
            top *= 2;
        }
    }

    #[test]
    fn block_fold_agrees_with_recursion(n in field_size()) {
        prop_assert_eq!(fold_blocks((1..=n).collect::<Vec<_>>()), canonical_positions(n));
    }

    #[test]
    fn first_round_pairs_sum_to_n_plus_one(n in field_size()) {
        for (a, b) in first_round_pairs(n) {
            prop_assert_eq!(a + b, n + 1);
            prop_assert!(a < b);
        }
    }

    #[test]
    fn input_order_does_not_matter(
        shuffled in Just((1u32..=32).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let field: Vec<Competitor> = shuffled
            .iter()
            .map(|&seed| Competitor::new(format!("Team {seed}"), 0, 0, 0, seed))
            .collect();
        let bracket = Bracket::seeded(field).expect("valid field");

        let expected: Vec<(u32, u32)> = first_round_pairs(32)
            .into_iter()
            .map(|(a, b)| (a as u32, b as u32))
            .collect();
        prop_assert_eq!(bracket.first_round(), expected);
    }
}

#[test]
fn canonical_reference_sequences() {
    assert_eq!(canonical_positions(4), vec![1, 4, 2, 3]);
    assert_eq!(canonical_positions(8), vec![1, 8, 4, 5, 2, 7, 3, 6]);
    assert_eq!(
        canonical_positions(16),
        vec![1, 16, 8, 9, 4, 13, 5, 12, 2, 15, 7, 10, 3, 14, 6, 11]
    );
}
