//! Shortest-path search between two persons

use crate::{InterceptionError, InterceptionRoute, RouteScope};
use std::collections::{HashSet, VecDeque};
use tenderguard_domain::{Person, PersonDirectory, PersonId};
use tracing::debug;

/// Finds interception routes over a person directory
///
/// The router borrows the directory and keeps no state between calls, so
/// one router (or many) can serve concurrent queries over the same graph.
pub struct InterceptionRouter<'g, D: PersonDirectory> {
    directory: &'g D,
    scope: RouteScope,
}

impl<'g, D: PersonDirectory> InterceptionRouter<'g, D> {
    /// Create a router that follows descendant edges only
    pub fn new(directory: &'g D) -> Self {
        Self {
            directory,
            scope: RouteScope::default(),
        }
    }

    /// Use a different edge scope
    pub fn with_scope(mut self, scope: RouteScope) -> Self {
        self.scope = scope;
        self
    }

    /// The edge scope in use
    pub fn scope(&self) -> RouteScope {
        self.scope
    }

    /// Resolve an identifier through the directory
    ///
    /// # Errors
    ///
    /// Returns [`InterceptionError::PersonNotFound`] if `id` is unknown.
    pub fn resolve(&self, id: PersonId) -> Result<&'g Person, InterceptionError> {
        let directory: &'g D = self.directory;
        directory.find(id).ok_or(InterceptionError::PersonNotFound(id))
    }

    /// Find the shortest route from `source` to `target`
    ///
    /// Both endpoints are resolved first; an unknown endpoint is reported
    /// before any traversal starts, source first. The search is breadth-first
    /// and carries whole paths in its queue, so the first path reaching the
    /// target has the fewest edges. A person is marked visited when a path
    /// ending at them is dequeued.
    ///
    /// # Returns
    ///
    /// The route, source first. `[source]` when both identifiers are the same
    /// person; empty when the target is not reachable within the scope.
    ///
    /// # Errors
    ///
    /// Returns [`InterceptionError::PersonNotFound`] naming the unresolved identifier.
    pub fn find_interception_route(
        &self,
        source: PersonId,
        target: PersonId,
    ) -> Result<InterceptionRoute<'g>, InterceptionError> {
        let start = self.resolve(source)?;
        let end = self.resolve(target)?;

        let directory: &'g D = self.directory;
        let mut queue: VecDeque<Vec<&'g Person>> = VecDeque::new();
        let mut visited: HashSet<PersonId> = HashSet::new();
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let Some(node) = path.last().copied() else {
                continue;
            };

            if node.id == end.id {
                debug!(%source, %target, hops = path.len() - 1, "Interception route found");
                return Ok(InterceptionRoute::new(path));
            }

            if !visited.insert(node.id) {
                continue;
            }

            for next in self.neighbours(node) {
                if visited.contains(next) {
                    continue;
                }
                if let Some(person) = directory.person(*next) {
                    let mut extended = path.clone();
                    extended.push(person);
                    queue.push_back(extended);
                }
            }
        }

        debug!(%source, %target, expanded = visited.len(), scope = self.scope.as_str(), "No interception route");
        Ok(InterceptionRoute::empty())
    }

    fn neighbours<'p>(&self, person: &'p Person) -> impl Iterator<Item = &'p PersonId> {
        let ancestors: &'p [PersonId] = if self.scope.follows_ancestors() {
            &person.ancestors
        } else {
            &[]
        };
        person.descendants.iter().chain(ancestors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenderguard_domain::{Gender, RelationLabel};
    use tenderguard_graph::RelationshipGraph;

    fn id(value: u64) -> PersonId {
        PersonId::from_value(value)
    }

    fn person(value: u64, name: &str) -> Person {
        Person::new(id(value), RelationLabel::Unspecified, Gender::Female, name, "")
    }

    /// A(111) -> B(222), C(333)
    fn family() -> RelationshipGraph {
        let mut builder = RelationshipGraph::builder();
        builder.add_root(person(111, "A")).unwrap();
        builder.add_descendant(id(111), person(222, "B")).unwrap();
        builder.add_descendant(id(111), person(333, "C")).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_parent_to_child() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);

        let route = router.find_interception_route(id(111), id(333)).unwrap();
        assert_eq!(route.ids(), vec![id(111), id(333)]);
        let names: Vec<&str> = route.persons().iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_siblings_not_connected() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);

        let route = router.find_interception_route(id(222), id(333)).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn test_child_to_parent_not_connected() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);
        assert!(router.find_interception_route(id(333), id(111)).unwrap().is_empty());
    }

    #[test]
    fn test_self_route() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);

        let route = router.find_interception_route(id(222), id(222)).unwrap();
        assert_eq!(route.ids(), vec![id(222)]);
    }

    #[test]
    fn test_unknown_source_reported_first() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);

        assert_eq!(
            router.find_interception_route(id(999), id(111)),
            Err(InterceptionError::PersonNotFound(id(999)))
        );
        assert_eq!(
            router.find_interception_route(id(998), id(999)),
            Err(InterceptionError::PersonNotFound(id(998)))
        );
    }

    #[test]
    fn test_unknown_target() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);

        assert_eq!(
            router.find_interception_route(id(111), id(999)),
            Err(InterceptionError::PersonNotFound(id(999)))
        );
    }

    #[test]
    fn test_kinship_scope_connects_siblings() {
        // Siblings need an ancestor edge back to the shared parent.
        let mut builder = RelationshipGraph::builder();
        builder.add_root(person(111, "A")).unwrap();
        builder.add_descendant(id(111), person(222, "B")).unwrap();
        builder.add_descendant(id(111), person(333, "C")).unwrap();
        builder.link_ancestor(id(222), id(111)).unwrap();
        let graph = builder.build().unwrap();

        let narrow = InterceptionRouter::new(&graph);
        assert!(narrow.find_interception_route(id(222), id(333)).unwrap().is_empty());

        let wide = InterceptionRouter::new(&graph).with_scope(RouteScope::Kinship);
        assert_eq!(wide.scope(), RouteScope::Kinship);
        let route = wide.find_interception_route(id(222), id(333)).unwrap();
        assert_eq!(route.ids(), vec![id(222), id(111), id(333)]);
    }

    #[test]
    fn test_resolve_through_router() {
        let graph = family();
        let router = InterceptionRouter::new(&graph);
        assert_eq!(router.resolve(id(333)).unwrap().first_name, "C");
        assert!(router.resolve(id(444)).is_err());
    }
}
