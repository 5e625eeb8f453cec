//! Exact 0/1 knapsack solver.
//!
//! Classic dynamic programming over `dp[i][w]`, the best value using
//! only the first `i` items with weight budget `w`. Both entry points
//! are pure functions of their inputs; `O(n * capacity)` time and
//! space.

use crate::catalog::Item;

/// Maximum total value achievable with a subset of `items` whose total
/// weight does not exceed `capacity`.
pub fn optimal_value(capacity: u32, items: &[Item]) -> u64 {
    let dp = build_table(capacity, items);
    dp[items.len()][capacity as usize]
}

/// One subset of item indices achieving [`optimal_value`], in ascending
/// index order.
///
/// When several subsets tie for the optimum, which one comes back is an
/// artifact of the backward table walk; callers should only rely on the
/// set being feasible and its values summing to the optimum.
pub fn optimal_item_set(capacity: u32, items: &[Item]) -> Vec<usize> {
    let dp = build_table(capacity, items);

    // Walk the table back down: a row change at budget w means the
    // item on that row was taken.
    let mut chosen = Vec::new();
    let mut w = capacity as usize;
    for i in (1..=items.len()).rev() {
        if dp[i][w] != dp[i - 1][w] {
            chosen.push(i - 1);
            w -= items[i - 1].weight as usize;
        }
    }
    chosen.reverse();
    chosen
}

fn build_table(capacity: u32, items: &[Item]) -> Vec<Vec<u64>> {
    let n = items.len();
    let capacity = capacity as usize;
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];

    for i in 1..=n {
        let wt = items[i - 1].weight as usize;
        let val = items[i - 1].value;
        for w in 0..=capacity {
            dp[i][w] = if wt <= w {
                dp[i - 1][w].max(dp[i - 1][w - wt] + val)
            } else {
                dp[i - 1][w]
            };
        }
    }
    dp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn items(pairs: &[(u32, u64)]) -> Vec<Item> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(w, v))| Item::new(&format!("item-{}", i), w, v))
            .collect()
    }

    fn total_weight(items: &[Item], indices: &[usize]) -> u32 {
        indices.iter().map(|&i| items[i].weight).sum()
    }

    fn total_value(items: &[Item], indices: &[usize]) -> u64 {
        indices.iter().map(|&i| items[i].value).sum()
    }

    #[test]
    fn zero_capacity_packs_nothing() {
        let items = items(&[(3, 60), (2, 40)]);
        assert_eq!(optimal_value(0, &items), 0);
        assert!(optimal_item_set(0, &items).is_empty());
    }

    #[test]
    fn no_items_packs_nothing() {
        assert_eq!(optimal_value(10, &[]), 0);
        assert!(optimal_item_set(10, &[]).is_empty());
    }

    #[test]
    fn single_item_too_heavy() {
        let items = items(&[(8, 500)]);
        assert_eq!(optimal_value(7, &items), 0);
        assert!(optimal_item_set(7, &items).is_empty());
    }

    #[test]
    fn level_one_fixture() {
        // The built-in level 1 at its starting capacity. Best combo is
        // worth 160, e.g. Gold Coin + Magic Potion (weights 3+4).
        let catalog = Catalog::builtin();
        let items = catalog.items(1).unwrap();
        assert_eq!(optimal_value(7, items), 160);

        let set = optimal_item_set(7, items);
        assert_eq!(total_value(items, &set), 160);
        assert!(total_weight(items, &set) <= 7);
    }

    #[test]
    fn classic_dp_example() {
        let items = items(&[(5, 10), (4, 40), (6, 30), (4, 50)]);
        assert_eq!(optimal_value(10, &items), 90);
        let set = optimal_item_set(10, &items);
        assert_eq!(set, vec![1, 3]);
    }

    #[test]
    fn set_is_consistent_with_value_on_all_builtin_levels() {
        let catalog = Catalog::builtin();
        for level in 1..=catalog.max_level() {
            let items = catalog.items(level).unwrap();
            let capacity = catalog.capacity_for(level);
            let best = optimal_value(capacity, items);
            let set = optimal_item_set(capacity, items);
            assert_eq!(total_value(items, &set), best, "level {}", level);
            assert!(total_weight(items, &set) <= capacity, "level {}", level);
        }
    }

    #[test]
    fn value_is_monotone_in_capacity() {
        let catalog = Catalog::builtin();
        let items = catalog.items(1).unwrap();
        let mut previous = 0;
        for capacity in 0..=20 {
            let best = optimal_value(capacity, items);
            assert!(best >= previous, "capacity {} regressed", capacity);
            previous = best;
        }
    }

    #[test]
    fn zero_weight_item_is_always_taken_when_valuable() {
        let items = items(&[(0, 5), (3, 60)]);
        // A weightless item never fails the weight check.
        assert_eq!(optimal_value(0, &items), 5);
        assert_eq!(optimal_item_set(0, &items), vec![0]);
    }

    #[test]
    fn deterministic_across_calls() {
        let catalog = Catalog::builtin();
        let items = catalog.items(2).unwrap();
        let first = optimal_item_set(10, items);
        for _ in 0..5 {
            assert_eq!(optimal_item_set(10, items), first);
        }
    }

    #[test]
    fn indices_come_back_ascending() {
        let catalog = Catalog::builtin();
        let items = catalog.items(3).unwrap();
        let set = optimal_item_set(13, items);
        assert!(set.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
