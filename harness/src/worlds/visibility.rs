//! Visibility graphs over polygonal obstacles, and the shortest-path problem
//! defined on them.
//!
//! Vertices are named and kept in insertion order. Each vertex records its
//! neighbors in the order they were first connected; that order is the
//! action order seen by the search engine, so it decides which of several
//! equal-depth paths BFS and DFS report.

use indexmap::{IndexMap, IndexSet};
use statespace_search::Problem;

use super::geometry::{line_clear, Point};
use crate::contract::{World, WorldError};

/// Handle to a vertex of one [`VisibilityGraph`].
///
/// Ids are insertion indices. An id minted by one graph means nothing to
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A closed polygon, by vertex, with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub label: Option<String>,
    pub vertices: Vec<VertexId>,
}

/// A drawn segment between two vertex locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Settings for [`VisibilityGraph::build_automated_connections`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoConnectConfig {
    /// Interior points sampled per candidate segment.
    pub samples: usize,
    /// Candidate segments longer than this are skipped.
    pub max_len: f64,
}

impl Default for AutoConnectConfig {
    fn default() -> Self {
        Self {
            samples: 5,
            max_len: 6.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Vertex {
    location: Point,
    neighbors: IndexSet<VertexId>,
}

/// Named vertices, polygon obstacles, and symmetric reachability.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    vertices: IndexMap<String, Vertex>,
    polygons: Vec<Polygon>,
    polygon_edges: Vec<Segment>,
    auto_edges: Vec<Segment>,
    start: Option<VertexId>,
    goal: Option<VertexId>,
}

impl VisibilityGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named vertex.
    ///
    /// # Errors
    ///
    /// [`WorldError::DuplicateVertex`] if the name is taken.
    pub fn add_vertex(&mut self, name: &str, location: Point) -> Result<VertexId, WorldError> {
        if self.vertices.contains_key(name) {
            return Err(WorldError::DuplicateVertex { name: name.into() });
        }
        let (index, _) = self.vertices.insert_full(
            name.to_owned(),
            Vertex {
                location,
                neighbors: IndexSet::new(),
            },
        );
        Ok(VertexId(index))
    }

    /// Add a vertex and make it the start.
    ///
    /// # Errors
    ///
    /// [`WorldError::DuplicateVertex`] if the name is taken.
    pub fn set_start(&mut self, name: &str, location: Point) -> Result<VertexId, WorldError> {
        let id = self.add_vertex(name, location)?;
        self.start = Some(id);
        Ok(id)
    }

    /// Add a vertex and make it the goal.
    ///
    /// # Errors
    ///
    /// [`WorldError::DuplicateVertex`] if the name is taken.
    pub fn set_goal(&mut self, name: &str, location: Point) -> Result<VertexId, WorldError> {
        let id = self.add_vertex(name, location)?;
        self.goal = Some(id);
        Ok(id)
    }

    /// Look up a vertex by name.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownVertex`] if no vertex has that name.
    pub fn id(&self, name: &str) -> Result<VertexId, WorldError> {
        self.vertices
            .get_index_of(name)
            .map(VertexId)
            .ok_or_else(|| WorldError::UnknownVertex { name: name.into() })
    }

    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertices.get_index(id.0).map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn location(&self, id: VertexId) -> Option<Point> {
        self.vertices.get_index(id.0).map(|(_, v)| v.location)
    }

    /// Neighbors of `id` in first-connected order. Empty for a foreign id.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get_index(id.0)
            .into_iter()
            .flat_map(|(_, v)| v.neighbors.iter().copied())
    }

    /// Whether `a` and `b` are mutually reachable.
    #[must_use]
    pub fn is_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get_index(a.0)
            .is_some_and(|(_, v)| v.neighbors.contains(&b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    #[must_use]
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Option<VertexId> {
        self.goal
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn polygon_edges(&self) -> &[Segment] {
        &self.polygon_edges
    }

    #[must_use]
    pub fn auto_edges(&self) -> &[Segment] {
        &self.auto_edges
    }

    /// Connect `a` and `b` as a polygon side: drawn as a polygon edge and
    /// made mutually reachable.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownVertex`] if either name is missing.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), WorldError> {
        let a = self.id(a)?;
        let b = self.id(b)?;
        self.add_edge_ids(a, b);
        Ok(())
    }

    /// Close `names` into a polygon: consecutive sides in order, then the
    /// closing side from the first vertex to the last.
    ///
    /// # Errors
    ///
    /// - [`WorldError::EmptyPolygon`] if `names` is empty.
    /// - [`WorldError::UnknownVertex`] if any name is missing. Nothing is
    ///   connected in that case.
    pub fn connect_polygon(&mut self, names: &[&str], label: Option<&str>) -> Result<(), WorldError> {
        let ids = names
            .iter()
            .map(|name| self.id(name))
            .collect::<Result<Vec<_>, _>>()?;
        let (Some(&first), Some(&last)) = (ids.first(), ids.last()) else {
            return Err(WorldError::EmptyPolygon);
        };
        for pair in ids.windows(2) {
            self.add_edge_ids(pair[0], pair[1]);
        }
        self.add_edge_ids(first, last);
        self.polygons.push(Polygon {
            label: label.map(str::to_owned),
            vertices: ids,
        });
        Ok(())
    }

    /// Declare `a` mutually reachable with every vertex in `others`.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownVertex`] if any name is missing. Nothing is
    /// connected in that case.
    pub fn assert_reachable(&mut self, a: &str, others: &[&str]) -> Result<(), WorldError> {
        let a = self.id(a)?;
        let others = others
            .iter()
            .map(|name| self.id(name))
            .collect::<Result<Vec<_>, _>>()?;
        for b in others {
            self.link(a, b);
        }
        Ok(())
    }

    /// Connect every not-yet-connected pair within `config.max_len` whose
    /// segment clears all polygons. Pairs are visited in insertion order.
    ///
    /// Returns the number of edges added.
    pub fn build_automated_connections(&mut self, config: AutoConnectConfig) -> usize {
        let obstacles: Vec<Vec<Point>> = self
            .polygons
            .iter()
            .map(|polygon| {
                polygon
                    .vertices
                    .iter()
                    .filter_map(|&id| self.location(id))
                    .collect()
            })
            .collect();

        let mut added = 0;
        let n = self.vertices.len();
        for i in 0..n {
            for j in i + 1..n {
                let (a, b) = (VertexId(i), VertexId(j));
                if self.is_connected(a, b) {
                    continue;
                }
                let (Some(pa), Some(pb)) = (self.location(a), self.location(b)) else {
                    continue;
                };
                if pa.distance(pb) > config.max_len {
                    continue;
                }
                if line_clear(pa, pb, &obstacles, config.samples) {
                    self.auto_edges.push(Segment { from: pa, to: pb });
                    self.link(a, b);
                    added += 1;
                }
            }
        }
        log::debug!("visibility: added {added} automated edges across {n} vertices");
        added
    }

    fn add_edge_ids(&mut self, a: VertexId, b: VertexId) {
        if let (Some(from), Some(to)) = (self.location(a), self.location(b)) {
            self.polygon_edges.push(Segment { from, to });
        }
        self.link(a, b);
    }

    /// Symmetric reachability. Self-loops are dropped.
    fn link(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        if let Some((_, v)) = self.vertices.get_index_mut(a.0) {
            v.neighbors.insert(b);
        }
        if let Some((_, v)) = self.vertices.get_index_mut(b.0) {
            v.neighbors.insert(a);
        }
    }
}

/// Shortest path between the start and goal of a [`VisibilityGraph`].
///
/// States and actions are vertex ids; taking action `v` moves to `v`. Step
/// cost is the Euclidean length of the hop and the heuristic is the
/// straight-line distance to the goal.
#[derive(Debug, Clone)]
pub struct PolygonPathProblem {
    world_id: String,
    graph: VisibilityGraph,
    start: VertexId,
    goal: VertexId,
    goal_location: Point,
}

impl PolygonPathProblem {
    /// Wrap a graph with both endpoints set.
    ///
    /// # Errors
    ///
    /// [`WorldError::MissingEndpoint`] if the start or goal is unset.
    pub fn new(graph: VisibilityGraph) -> Result<Self, WorldError> {
        let start = graph
            .start()
            .ok_or(WorldError::MissingEndpoint { endpoint: "start" })?;
        let goal = graph
            .goal()
            .ok_or(WorldError::MissingEndpoint { endpoint: "goal" })?;
        let goal_location = graph
            .location(goal)
            .ok_or(WorldError::MissingEndpoint { endpoint: "goal" })?;
        Ok(Self {
            world_id: "visibility_graph".into(),
            graph,
            start,
            goal,
            goal_location,
        })
    }

    /// Rename the world for reports.
    #[must_use]
    pub fn with_world_id(mut self, world_id: impl Into<String>) -> Self {
        self.world_id = world_id.into();
        self
    }

    #[must_use]
    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    /// Vertex names along a path of ids.
    #[must_use]
    pub fn names(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|id| self.describe_state(id)).collect()
    }
}

impl Problem for PolygonPathProblem {
    type State = VertexId;
    type Action = VertexId;

    fn initial_state(&self) -> VertexId {
        self.start
    }

    fn actions(&self, state: &VertexId) -> Vec<VertexId> {
        self.graph.neighbors(*state).collect()
    }

    fn result(&self, _state: &VertexId, action: &VertexId) -> VertexId {
        *action
    }

    fn goal_test(&self, state: &VertexId) -> bool {
        *state == self.goal
    }

    /// Ids foreign to this graph have no location; the NaN cost they produce
    /// is rejected by the engine.
    fn path_cost(&self, accumulated: f64, from: &VertexId, _action: &VertexId, to: &VertexId) -> f64 {
        match (self.graph.location(*from), self.graph.location(*to)) {
            (Some(a), Some(b)) => accumulated + a.distance(b),
            _ => f64::NAN,
        }
    }

    fn heuristic(&self, state: &VertexId) -> f64 {
        self.graph
            .location(*state)
            .map_or(f64::NAN, |p| p.distance(self.goal_location))
    }
}

impl World for PolygonPathProblem {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn describe_state(&self, state: &VertexId) -> String {
        self.graph
            .name(*state)
            .map_or_else(|| format!("#{}", state.0), str::to_owned)
    }

    fn describe_action(&self, action: &VertexId) -> String {
        self.describe_state(action)
    }
}
