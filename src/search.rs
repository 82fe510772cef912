//! Best-first search over [SearchState]s. The frontier ordering follows the usual
//! [pathfinding astar](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! approach of a [BinaryHeap] of cost holders, but every entry carries its full state because
//! states own their move history.
use crate::components::Components;
use crate::error::SearchError;
use crate::geometry::Point;
use crate::maze::{MazeSnapshot, StateKey};
use crate::robot::Move;
use crate::state::{self, SearchState};
use crate::FxIndexSet;
use core::fmt;
use itertools::Itertools;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How states that were already expanded are kept from being expanded again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Successors whose key is already visited are not pushed at all. A state popped after its
    /// key was visited through another entry is dropped.
    #[default]
    SkipVisitedSuccessors,
    /// Every successor is pushed and stale entries are dropped when popped.
    LazyDeletion,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Weight on the heuristic in the frontier key. Values above 1.0 expand fewer states but
    /// give up the guarantee of a shortest path.
    pub heuristic_factor: f64,
    /// Check connected components of a bounded field before searching, so an unreachable goal
    /// fails without flood-filling the field.
    pub prune_unreachable: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            duplicate_policy: DuplicatePolicy::default(),
            heuristic_factor: 1.0,
            prune_unreachable: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Succeeded,
    Failed,
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded.
    pub expanded: usize,
    /// Successors pushed onto the frontier.
    pub generated: usize,
    /// Successors skipped or popped entries dropped because their key was already visited.
    pub discarded: usize,
    pub max_frontier: usize,
}

struct FrontierEntry {
    estimated_cost: f64,
    cost: u32,
    sequence: u64,
    state: SearchState,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the deepest node, then the oldest entry.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Finds a shortest sequence of moves from the robot's cell to the goal cell.
///
/// The engine owns its frontier and visited set for one search. [run](Self::run) searches until
/// the goal is reached or the frontier is exhausted and records the outcome; calling it again
/// returns the recorded outcome.
pub struct SearchEngine {
    config: SearchConfig,
    start: SearchState,
    frontier: BinaryHeap<FrontierEntry>,
    visited: FxIndexSet<StateKey>,
    sequence: u64,
    status: SearchStatus,
    solution: Option<SearchState>,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(start: MazeSnapshot) -> SearchEngine {
        SearchEngine::with_config(start, SearchConfig::default())
    }

    /// Prepares a search. The robot is moved onto the centre of the cell it is in.
    pub fn with_config(start: MazeSnapshot, config: SearchConfig) -> SearchEngine {
        let start = SearchState::initial(start.recentered());
        let mut engine = SearchEngine {
            config,
            start: start.clone(),
            frontier: BinaryHeap::new(),
            visited: FxIndexSet::default(),
            sequence: 0,
            status: SearchStatus::Running,
            solution: None,
            stats: SearchStats::default(),
        };
        engine.push(start);
        engine
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The root state, after recentering.
    pub fn start(&self) -> &SearchState {
        &self.start
    }

    /// The goal state, once the search has succeeded.
    pub fn solution(&self) -> Option<&SearchState> {
        self.solution.as_ref()
    }

    /// Direction labels of the solution, once the search has succeeded.
    pub fn directions(&self) -> Option<Vec<Move>> {
        self.solution
            .as_ref()
            .and_then(|s| state::directions(self.start.maze().robot_position(), s.moves()))
    }

    /// Runs the search to completion. On success, returns the target coordinate of every move
    /// in order; this is empty when the start is already the goal.
    pub fn run(&mut self) -> Result<Vec<Point>, SearchError> {
        match self.status {
            SearchStatus::Succeeded => return Ok(self.solution_moves()),
            SearchStatus::Failed => return Err(SearchError::NotFound),
            SearchStatus::Running => {}
        }
        let start = self.start.maze();
        info!(
            "Searching from {} to {}",
            start.robot_position(),
            start.goal()
        );
        let reachable = self.check_components();
        if reachable == Some(false) {
            info!("{} is not reachable from {}", start.goal(), start.robot_position());
            return self.fail();
        }

        while let Some(FrontierEntry { state, .. }) = self.frontier.pop() {
            if state.at_goal() {
                info!(
                    "Found a path of {} moves after expanding {} states",
                    state.path_cost(),
                    self.stats.expanded
                );
                let moves = state.moves().to_vec();
                self.status = SearchStatus::Succeeded;
                self.solution = Some(state);
                return Ok(moves);
            }
            let key = state.key();
            // The first expansion of a key is optimal under a consistent heuristic, later
            // entries for the same key are stale.
            if self.visited.contains(&key) {
                self.stats.discarded += 1;
                continue;
            }
            self.stats.expanded += 1;
            for successor in state.successors() {
                if self.config.duplicate_policy == DuplicatePolicy::SkipVisitedSuccessors
                    && self.visited.contains(&successor.key())
                {
                    self.stats.discarded += 1;
                    continue;
                }
                self.push(successor);
            }
            self.visited.insert(key);
        }
        if reachable == Some(true) {
            warn!("Reachable goal could not be pathed to, is the component check correct?");
        }
        self.fail()
    }

    fn push(&mut self, state: SearchState) {
        let estimated_cost =
            state.path_cost() as f64 + self.config.heuristic_factor * state.heuristic();
        self.frontier.push(FrontierEntry {
            estimated_cost,
            cost: state.path_cost(),
            sequence: self.sequence,
            state,
        });
        self.sequence += 1;
        self.stats.generated += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    /// Whether the goal is on the start's component, when that can be decided from the field.
    /// Two cells outside the field are left to the search, as the walls there are unknown. The
    /// boundary separates the field from the rest of the plane, so a single outside cell cannot
    /// reach an inside one.
    fn check_components(&self) -> Option<bool> {
        let maze = self.start.maze();
        if !self.config.prune_unreachable || maze.at_goal() {
            return None;
        }
        let components = Components::from_walls(maze.walls())?;
        let inside = |p: Point| p.cell().filter(|cell| components.contains(cell));
        match (inside(maze.robot_position()), inside(maze.goal())) {
            (Some(start), Some(goal)) => Some(components.reachable(&start, &goal)),
            (None, None) => None,
            _ => Some(false),
        }
    }

    fn fail(&mut self) -> Result<Vec<Point>, SearchError> {
        debug!("Search failed: {:?}", self.stats);
        self.status = SearchStatus::Failed;
        self.frontier.clear();
        Err(SearchError::NotFound)
    }

    fn solution_moves(&self) -> Vec<Point> {
        self.solution
            .as_ref()
            .map(|s| s.moves().to_vec())
            .unwrap_or_default()
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.solution {
            None => write!(f, "An end state was either not found or evaluated"),
            Some(state) => write!(
                f,
                "{}",
                state.moves().iter().map(|p| format!("{p} ")).join("")
            ),
        }
    }
}
