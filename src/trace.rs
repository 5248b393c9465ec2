/*!
# Visualization Steps & Traces

A [`Trace`] is the ordered log one algorithm call leaves behind: a sequence
of atomic [`Step`]s, each optionally **chained** to its successor. Chained
steps belong to the same visible frame — the playback scheduler applies them
back-to-back without a timed delay, so a maximal run of steps ending in a
non-chained step forms one *visible unit* (what [`Trace::operations_count`]
counts).

The trace is produced append-only during the call and consumed destructively
front-to-back during playback; editing the graph, switching algorithms or
restarting discards it wholesale.
*/

use std::collections::VecDeque;

use crate::edge::Weight;
use crate::vertex::VertexId;

/// What the renderer should do with a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAction {
    Select,
    Unselect,
    Enter,
    Exit,
    Color1,
    Color2,
}

/// What the renderer should do with a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAction {
    Walk,
    Highlight,
    Unselect,
    Shadow,
    Flip,
}

/// What the renderer should do with a vertex's hint label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintAction {
    Remove,
    Set(String),
    Highlight(String),
}

/// One atomic visualization event.
///
/// `ClearVertexSelections` / `ClearEdgeSelections` reset every vertex (resp.
/// edge) decoration at once; all other variants target one element.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Vertex {
        vertex: VertexId,
        action: VertexAction,
    },
    Edge {
        from: VertexId,
        to: VertexId,
        oriented: bool,
        weight: Option<Weight>,
        action: EdgeAction,
    },
    Hint {
        vertex: VertexId,
        action: HintAction,
    },
    ClearVertexSelections,
    ClearEdgeSelections,
}

impl Step {
    pub fn vertex(vertex: VertexId, action: VertexAction) -> Self {
        Step::Vertex { vertex, action }
    }

    pub fn edge(
        from: VertexId,
        to: VertexId,
        oriented: bool,
        weight: Option<Weight>,
        action: EdgeAction,
    ) -> Self {
        Step::Edge {
            from,
            to,
            oriented,
            weight,
            action,
        }
    }

    pub fn hint_set(vertex: VertexId, hint: impl ToString) -> Self {
        Step::Hint {
            vertex,
            action: HintAction::Set(hint.to_string()),
        }
    }

    pub fn hint_highlight(vertex: VertexId, hint: impl ToString) -> Self {
        Step::Hint {
            vertex,
            action: HintAction::Highlight(hint.to_string()),
        }
    }

    pub fn hint_remove(vertex: VertexId) -> Self {
        Step::Hint {
            vertex,
            action: HintAction::Remove,
        }
    }
}

/// A step plus its chaining flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub step: Step,
    pub chained: bool,
}

/// Ordered, append-only log of steps from one algorithm invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    steps: VecDeque<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step that ends its visible unit (no chaining).
    pub fn push(&mut self, step: Step) {
        self.steps.push_back(TraceStep {
            step,
            chained: false,
        });
    }

    /// Appends a step rendered in the same visible frame as its successor.
    pub fn chained(&mut self, step: Step) {
        self.steps.push_back(TraceStep {
            step,
            chained: true,
        });
    }

    /// Rewrites the chaining flag of the most recent step.
    pub fn set_last_chained(&mut self, chained: bool) {
        if let Some(last) = self.steps.back_mut() {
            last.chained = chained;
        }
    }

    /// Removes and returns the head step.
    pub fn pop(&mut self) -> Option<TraceStep> {
        self.steps.pop_front()
    }

    pub fn peek(&self) -> Option<&TraceStep> {
        self.steps.front()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter()
    }

    /// Number of visible units: maximal runs of chained steps terminated by
    /// a non-chained step (a trailing all-chained run counts as one unit).
    /// Always `<= len()`, with equality iff no step is chained.
    pub fn operations_count(&self) -> usize {
        let breaks = self.steps.iter().filter(|s| !s.chained).count();
        let trailing_chained = self.steps.back().is_some_and(|s| s.chained);
        breaks + usize::from(trailing_chained)
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::collections::vec_deque::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
