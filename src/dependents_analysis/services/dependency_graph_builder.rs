use crate::dependents_analysis::domain::{
    ConfigurationTag, DependencyGraph, ModuleDeclaration, ModuleId, ProjectDependents,
};
use std::collections::{BTreeMap, BTreeSet};

/// Collected reverse edges: dependency -> tag -> dependents
type DependentsAccumulator = BTreeMap<ModuleId, BTreeMap<ConfigurationTag, BTreeSet<ModuleId>>>;

/// DependencyGraphBuilder service turning forward declarations into the dependents graph
///
/// Construction runs in two phases: every reverse edge is first collected into
/// an accumulator, and only then frozen into immutable graph nodes. The result
/// does not depend on declaration order.
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    /// Builds the reverse dependency graph
    ///
    /// # Arguments
    /// * `declarations` - Every known module with its per-configuration targets
    ///
    /// # Returns
    /// A DependencyGraph with one node per declared module. Targets that are not
    /// declared modules (external libraries, typos) are silently dropped.
    pub fn build(declarations: &[ModuleDeclaration]) -> DependencyGraph {
        let known_modules: BTreeMap<&str, &ModuleId> = declarations
            .iter()
            .map(|d| (d.id.as_str(), &d.id))
            .collect();
        let accumulator = Self::collect_reverse_edges(declarations, &known_modules);
        Self::freeze(known_modules, accumulator)
    }

    fn collect_reverse_edges(
        declarations: &[ModuleDeclaration],
        known_modules: &BTreeMap<&str, &ModuleId>,
    ) -> DependentsAccumulator {
        let mut accumulator = DependentsAccumulator::new();

        for declaration in declarations {
            for configuration in &declaration.configurations {
                for target in &configuration.dependencies {
                    let Some(dependency) = known_modules.get(target.as_str()) else {
                        continue;
                    };

                    accumulator
                        .entry((*dependency).clone())
                        .or_default()
                        .entry(configuration.tag.clone())
                        .or_default()
                        .insert(declaration.id.clone());
                }
            }
        }

        accumulator
    }

    fn freeze(
        known_modules: BTreeMap<&str, &ModuleId>,
        mut accumulator: DependentsAccumulator,
    ) -> DependencyGraph {
        let nodes = known_modules
            .into_values()
            .map(|id| {
                let dependents = accumulator
                    .remove(id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(tag, dependents)| (tag, dependents.into_iter().collect()))
                    .collect();
                (id.clone(), ProjectDependents::new(id.clone(), dependents))
            })
            .collect();

        DependencyGraph::new(nodes)
    }
}
