use crate::alias::TagAliasTable;

/// Whether bookkeeping nodes are removed from the starting candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetaPolicy {
    /// Drop definitions, named-view, metadata and style nodes before the first step. (Default)
    #[default]
    StripTopLevel,
    /// Query the candidates exactly as given.
    Keep,
}

/// How the document root is treated when it is one of the candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// Replace the root by its children, so `/l` on the root selects top-level layers. (Default)
    #[default]
    ExpandChildren,
    /// Treat the root like any other candidate.
    AsCandidate,
}

/// Settings shared by every query an engine runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub aliases: TagAliasTable,
    pub meta_policy: MetaPolicy,
    pub root_policy: RootPolicy,
}
