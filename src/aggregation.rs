use std::{collections::HashSet, fmt::Debug, future::Future, hash::Hash, sync::Arc};

use futures::{StreamExt, stream};
use parking_lot::Mutex;
use rand::seq::SliceRandom;

use crate::{
    common::{Result, Shared},
    configs::DiscoveryConfig,
    filters::FilterSet,
    models::Item,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Order in which seed results were recorded.
    #[default]
    Recorded,
    Shuffled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Sub-queries in flight at once.
    pub concurrency: usize,
    pub order: Order,
    pub filters: FilterSet,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            concurrency: 5,
            order: Order::Recorded,
            filters: FilterSet::default(),
        }
    }
}

impl AggregateOptions {
    pub fn from_config(config: &DiscoveryConfig, filters: FilterSet) -> Self {
        Self {
            concurrency: config.concurrency.max(1),
            order: if config.shuffle {
                Order::Shuffled
            } else {
                Order::Recorded
            },
            filters,
        }
    }
}

/// Keeps the first item seen for every key.
pub fn dedupe_by<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|i| seen.insert(key(i))).collect()
}

/// Runs `per_seed` for every seed and merges the results.
///
/// A failing seed is logged and contributes nothing; the rest still count.
/// The merged list is deduplicated by `key`, optionally shuffled, then
/// filtered.
pub async fn aggregate<S, F, Fut, K, KF>(
    seeds: Vec<S>,
    per_seed: F,
    key: KF,
    options: AggregateOptions,
) -> Vec<Item>
where
    S: Debug + Clone,
    F: Fn(S) -> Fut,
    Fut: Future<Output = Result<Vec<Item>>>,
    K: Eq + Hash,
    KF: FnMut(&Item) -> K,
{
    let recorded: Shared<Vec<Item>> = Arc::new(Mutex::new(Vec::new()));
    let total = seeds.len();

    stream::iter(seeds)
        .map(|seed| {
            let recorded = recorded.clone();
            let query = per_seed(seed.clone());
            async move {
                match query.await {
                    Ok(items) => recorded.lock().extend(items),
                    Err(e) => tracing::warn!("Aggregation branch for {:?} failed: {}", seed, e),
                }
            }
        })
        .buffer_unordered(options.concurrency.max(1))
        .for_each(|_| async {})
        .await;

    let items = std::mem::take(&mut *recorded.lock());
    let mut items = dedupe_by(items, key);
    tracing::debug!("Aggregated {} items from {} seeds", items.len(), total);

    if options.order == Order::Shuffled {
        items.shuffle(&mut rand::thread_rng());
    }

    options.filters.apply(items)
}
