//! Cycle detection over the task dependency graph.

use crate::job::domain::{Cycle, CycleReport, Task, TaskKey};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Traversal marks for the three-colour depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// A pending node on the explicit traversal stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_edge: usize,
}

impl Frame {
    const fn new(node: usize) -> Self {
        Self { node, next_edge: 0 }
    }
}

/// Index-addressed adjacency lists, edges pointing from a task to the tasks
/// it depends on.
#[derive(Debug)]
struct DependencyGraph<'a> {
    keys: Vec<&'a TaskKey>,
    edges: Vec<Vec<usize>>,
}

impl<'a> DependencyGraph<'a> {
    fn build(tasks: &'a [Task]) -> Self {
        let mut index: HashMap<&'a TaskKey, usize> = HashMap::with_capacity(tasks.len());
        let mut keys = Vec::with_capacity(tasks.len());
        for task in tasks {
            if let Entry::Vacant(slot) = index.entry(task.id()) {
                slot.insert(keys.len());
                keys.push(task.id());
            }
        }

        let mut edges = vec![Vec::new(); keys.len()];
        for task in tasks {
            let Some(targets) = index.get(task.id()).and_then(|node| edges.get_mut(*node)) else {
                continue;
            };
            for dependency in task.dependencies() {
                // Unknown keys are skipped rather than treated as nodes.
                if let Some(&target) = index.get(dependency)
                    && !targets.contains(&target)
                {
                    targets.push(target);
                }
            }
        }

        Self { keys, edges }
    }

    const fn len(&self) -> usize {
        self.keys.len()
    }

    fn edge(&self, node: usize, position: usize) -> Option<usize> {
        self.edges
            .get(node)
            .and_then(|targets| targets.get(position))
            .copied()
    }

    fn cycle_through(&self, path: &[Frame], start: usize) -> Cycle {
        let members = path
            .iter()
            .skip_while(|frame| frame.node != start)
            .filter_map(|frame| self.keys.get(frame.node).map(|key| (*key).clone()))
            .collect();
        Cycle::new(members)
    }

    /// Walks everything reachable from `root`, recording each back edge as a
    /// cycle.
    fn visit(&self, root: usize, marks: &mut [Mark], cycles: &mut Vec<Cycle>) {
        let mut path = vec![Frame::new(root)];
        set_mark(marks, root, Mark::InProgress);

        while let Some(frame) = path.last_mut() {
            let node = frame.node;
            let next = self.edge(node, frame.next_edge);
            frame.next_edge += 1;

            let Some(target) = next else {
                set_mark(marks, node, Mark::Done);
                path.pop();
                continue;
            };

            match mark_of(marks, target) {
                Mark::Unvisited => {
                    set_mark(marks, target, Mark::InProgress);
                    path.push(Frame::new(target));
                }
                Mark::InProgress => cycles.push(self.cycle_through(&path, target)),
                Mark::Done => {}
            }
        }
    }
}

fn mark_of(marks: &[Mark], node: usize) -> Mark {
    marks.get(node).copied().unwrap_or(Mark::Done)
}

fn set_mark(marks: &mut [Mark], node: usize, mark: Mark) {
    if let Some(slot) = marks.get_mut(node) {
        *slot = mark;
    }
}

/// Reports every dependency cycle in `tasks`.
///
/// Traversal starts from each still-unvisited task in list order and
/// follows dependencies in their listed order, so cycles are reported in a
/// stable discovery order. A node already finished is never walked again,
/// which bounds the work to one pass over every edge. Dependencies naming
/// keys outside the list are ignored.
#[must_use]
pub fn detect_cycles(tasks: &[Task]) -> CycleReport {
    let graph = DependencyGraph::build(tasks);
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut cycles = Vec::new();

    for root in 0..graph.len() {
        if mark_of(&marks, root) == Mark::Unvisited {
            graph.visit(root, &mut marks, &mut cycles);
        }
    }

    CycleReport::new(cycles)
}
