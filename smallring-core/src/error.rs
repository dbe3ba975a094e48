//! Error types for the smallring core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::sweep::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building rings, sampling shortcuts, measuring
/// distances, or running a sweep.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SweepError {
    /// A ring needs at least three nodes to be a simple cycle.
    #[error("ring size must be at least 3 (got {got})")]
    InvalidSize {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// A requested shortcut count cannot be satisfied by the ring.
    #[error("cannot place {requested} shortcuts on a ring with only {available} eligible pairs")]
    InvalidShortcutCount {
        /// Number of shortcuts requested.
        requested: usize,
        /// Number of non-ring node pairs, `n * (n - 3) / 2`.
        available: usize,
    },
    /// Every shortcut count needs at least one trial.
    #[error("trials_per_count must be at least 1 (got {got})")]
    InvalidTrialCount {
        /// The invalid trial count supplied by the caller.
        got: usize,
    },
    /// The sampler could not collect the requested number of shortcuts.
    #[error(
        "sampling exhausted after {attempts} attempts: accepted {accepted} of {requested} shortcuts"
    )]
    SamplingExhausted {
        /// Number of shortcuts requested.
        requested: usize,
        /// Number of shortcuts accepted before giving up.
        accepted: usize,
        /// Number of candidate pairs drawn.
        attempts: usize,
    },
    /// No pair of distinct nodes is connected, so there is no diameter.
    #[error("graph with {node_count} nodes has no reachable pair of distinct nodes")]
    EmptyGraph {
        /// Number of nodes in the measured graph.
        node_count: usize,
    },
    /// An edge endpoint fell outside `[0, node_count)`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node identifier.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("self-loop on node {node} is not a valid edge")]
    SelfLoop {
        /// The node on both ends of the edge.
        node: usize,
    },
    /// A star layout was given targets but none survived filtering.
    #[error("no valid shortcut targets remain for center {center}")]
    NoValidTargets {
        /// The hub node of the star layout.
        center: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`SweepError`] variants.
    enum SweepErrorCode for SweepError {
        /// A ring needs at least three nodes.
        InvalidSize => InvalidSize { .. } => "SMALLRING_INVALID_SIZE",
        /// A requested shortcut count cannot be satisfied by the ring.
        InvalidShortcutCount => InvalidShortcutCount { .. } => "SMALLRING_INVALID_SHORTCUT_COUNT",
        /// Every shortcut count needs at least one trial.
        InvalidTrialCount => InvalidTrialCount { .. } => "SMALLRING_INVALID_TRIAL_COUNT",
        /// The sampler could not collect the requested number of shortcuts.
        SamplingExhausted => SamplingExhausted { .. } => "SMALLRING_SAMPLING_EXHAUSTED",
        /// No pair of distinct nodes is connected.
        EmptyGraph => EmptyGraph { .. } => "SMALLRING_EMPTY_GRAPH",
        /// An edge endpoint fell outside the node range.
        NodeOutOfRange => NodeOutOfRange { .. } => "SMALLRING_NODE_OUT_OF_RANGE",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "SMALLRING_SELF_LOOP",
        /// A star layout was given targets but none survived filtering.
        NoValidTargets => NoValidTargets { .. } => "SMALLRING_NO_VALID_TARGETS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "SMALLRING_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SweepError>;
