//! Benchmark parameter types.
//!
//! Used as Criterion benchmark identifiers, so each implements `Display`.

use std::fmt;

use smallring_core::ExecutionStrategy;

/// Parameters for a single-graph distance benchmark.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of ring nodes.
    pub node_count: usize,
    /// Number of sampled shortcuts added to the ring.
    pub shortcut_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.node_count, self.shortcut_count)
    }
}

/// Parameters for a full sweep benchmark.
#[derive(Clone, Debug)]
pub struct SweepBenchParams {
    /// Number of ring nodes.
    pub node_count: usize,
    /// Trials run per shortcut count.
    pub trials_per_count: usize,
    /// Scheduling strategy under test.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},trials={},{:?}",
            self.node_count, self.trials_per_count, self.strategy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn graph_params_render_compactly() {
        let params = GraphBenchParams {
            node_count: 500,
            shortcut_count: 25,
        };
        assert_eq!(params.to_string(), "n=500,k=25");
    }

    #[rstest]
    #[case(ExecutionStrategy::Sequential, "n=200,trials=4,Sequential")]
    #[case(ExecutionStrategy::Parallel, "n=200,trials=4,Parallel")]
    fn sweep_params_name_the_strategy(
        #[case] strategy: ExecutionStrategy,
        #[case] expected: &str,
    ) {
        let params = SweepBenchParams {
            node_count: 200,
            trials_per_count: 4,
            strategy,
        };
        assert_eq!(params.to_string(), expected);
    }
}
