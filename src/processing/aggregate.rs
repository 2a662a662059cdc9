//! CIDR aggregation.
//!
//! Reduces a list of network blocks to the smallest list covering the same
//! addresses, merging duplicates and sibling halves until nothing changes.
//! Only exact siblings merge: a block is never absorbed by an unrelated
//! larger block that happens to contain it.

use super::merge::merge;
use super::sort::sort;
use crate::models::NetBlock;
use serde::{Deserialize, Serialize};

/// How the merge loop walks the sorted list.
///
/// Both strategies always merge the leftmost mergeable pair first, so they
/// return the same blocks in the same order.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Rescan from the start after every merge. Quadratic worst case.
    Rescan,
    /// Single forward pass with a stack of pending blocks.
    #[default]
    Stack,
}

/// Aggregate `blocks` with the default [`Strategy`].
///
/// The input is not modified. The result is sorted by address.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::NetBlock;
/// use cidr_aggregate::processing::aggregate;
///
/// let blocks: Vec<NetBlock> = ["192.0.2.64/26", "192.0.2.0/26"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let merged = aggregate(&blocks);
/// assert_eq!(merged, vec!["192.0.2.0/25".parse::<NetBlock>().unwrap()]);
/// ```
pub fn aggregate(blocks: &[NetBlock]) -> Vec<NetBlock> {
    aggregate_with(blocks, Strategy::default())
}

/// Aggregate `blocks` using the given strategy.
pub fn aggregate_with(blocks: &[NetBlock], strategy: Strategy) -> Vec<NetBlock> {
    let mut working = blocks.to_vec();
    sort(&mut working);

    let result = match strategy {
        Strategy::Rescan => aggregate_rescan(working),
        Strategy::Stack => aggregate_stack(working),
    };
    log::debug!(
        "aggregate({:?}): {} blocks -> {}",
        strategy,
        blocks.len(),
        result.len()
    );
    result
}

/// Merge the first mergeable adjacent pair, then start over.
fn aggregate_rescan(mut blocks: Vec<NetBlock>) -> Vec<NetBlock> {
    'rescan: loop {
        for i in 1..blocks.len() {
            if let Some(merged) = merge(&blocks[i - 1], &blocks[i]) {
                log::trace!("merge {} + {} -> {}", blocks[i - 1], blocks[i], merged);
                blocks[i - 1] = merged;
                blocks.remove(i);
                continue 'rescan;
            }
        }
        return blocks;
    }
}

/// Push blocks one by one, folding the top of the stack while it merges.
fn aggregate_stack(blocks: Vec<NetBlock>) -> Vec<NetBlock> {
    let mut stack: Vec<NetBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut top = block;
        while let Some(prev) = stack.last() {
            match merge(prev, &top) {
                Some(merged) => {
                    log::trace!("merge {} + {} -> {}", prev, top, merged);
                    top = merged;
                    stack.pop();
                }
                None => break,
            }
        }
        stack.push(top);
    }
    stack
}

/// Whether `blocks` is sorted and no adjacent pair would merge.
pub fn is_aggregated(blocks: &[NetBlock]) -> bool {
    blocks.windows(2).all(|pair| {
        super::sort::compare(&pair[0], &pair[1]).is_le() && merge(&pair[0], &pair[1]).is_none()
    })
}
