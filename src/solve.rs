use log::debug;

use crate::Configuration;

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

const ROOT: usize = !0usize;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<C> {
    /// Initial to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<C>>,
    /// Every generated neighbor, duplicates included, plus the initial configuration.
    pub total_configs: usize,
    /// Distinct configurations that entered the visited set.
    pub unique_configs: usize,
}

impl<C> SearchResult<C> {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&[C]> {
        self.path.as_deref()
    }

    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

pub fn solve<C: Configuration>(init: C) -> SearchResult<C> {
    bfs(init, || {})
}

/// Breadth-first search from `init` to the first configuration that is a solution.
///
/// `on_step` is invoked once per generated neighbor.
pub fn bfs<C: Configuration>(init: C, mut on_step: impl FnMut()) -> SearchResult<C> {
    if init.is_solution() {
        debug!("Initial configuration is already solved");
        return SearchResult {
            path: Some(vec![init]),
            total_configs: 1,
            unique_configs: 1,
        };
    }

    // Insertion order is the queue, keys the visited set, values the parent index.
    let mut config_parent = IndexMap::default();
    config_parent.insert(init, ROOT);
    let mut total_configs = 1;

    let mut cursor = 0;
    let goal = 'bfs: loop {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        let Some(neighbors) = config_parent
            .get_index(cursor)
            .map(|(config, _)| config.neighbors())
        else {
            debug!(
                "Search exhausted: {total_configs} total, {} unique",
                config_parent.len(),
            );
            return SearchResult {
                path: None,
                total_configs,
                unique_configs: config_parent.len(),
            };
        };

        for next in neighbors {
            on_step();

            #[cfg(feature = "coz")]
            coz::progress!("Neighbor");

            total_configs += 1;
            if config_parent.contains_key(&next) {
                continue;
            }
            let is_goal = next.is_solution();
            let (idx, _) = config_parent.insert_full(next, cursor);
            if is_goal {
                break 'bfs idx;
            }
        }
        cursor += 1;
    };

    let unique_configs = config_parent.len();
    debug!("Solved: {total_configs} total, {unique_configs} unique");

    let mut path = std::iter::successors(Some(goal), |&i| {
        let parent = config_parent[i];
        (parent != ROOT).then_some(parent)
    })
    .filter_map(|i| config_parent.get_index(i))
    .map(|(config, _)| config.clone())
    .collect::<Vec<_>>();
    path.reverse();

    SearchResult {
        path: Some(path),
        total_configs,
        unique_configs,
    }
}
