mod dependency_graph_builder;
mod reachability_expander;

pub use dependency_graph_builder::DependencyGraphBuilder;
pub use reachability_expander::ReachabilityExpander;
