//! Depth-tagged diagnostics for each recursive evaluation call.
use std::fmt;

/// What happened to the matches of a step at one evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The last step matched; these nodes are results.
    Final,
    /// An intermediate step matched; containers among them are searched with the next step.
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// Emitted on entry to every evaluation call, before matching.
    Visit {
        depth: usize,
        /// Containers leading to this call, outermost first.
        chain: Vec<String>,
        /// Candidates in document order, before type filtering.
        candidates: Vec<String>,
        step: String,
    },
    Matched {
        depth: usize,
        outcome: MatchOutcome,
        nodes: Vec<String>,
    },
    /// A descendant step is about to search inside these containers.
    Descend {
        depth: usize,
        containers: Vec<String>,
    },
}

impl TraceEvent {
    pub fn depth(&self) -> usize {
        match self {
            TraceEvent::Visit { depth, .. }
            | TraceEvent::Matched { depth, .. }
            | TraceEvent::Descend { depth, .. } => *depth,
        }
    }

    /// The event text prefixed with four spaces per recursion level.
    pub fn indented(&self) -> String {
        format!("{}{}", "    ".repeat(self.depth()), self)
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Visit {
                chain,
                candidates,
                step,
                ..
            } => write!(
                f,
                "Chain: {} | Received: [{}] to match {}",
                chain.join("->"),
                candidates.join(", "),
                step
            ),
            TraceEvent::Matched {
                outcome: MatchOutcome::Final,
                nodes,
                ..
            } => write!(f, "Last step reached: [{}]", nodes.join(", ")),
            TraceEvent::Matched {
                outcome: MatchOutcome::Partial,
                nodes,
                ..
            } => write!(f, "Partial match, will recurse: [{}]", nodes.join(", ")),
            TraceEvent::Descend { containers, .. } => {
                write!(f, "Searching descendants of: [{}]", containers.join(", "))
            }
        }
    }
}

/// A receiver for evaluation diagnostics, passed explicitly through the recursion.
pub trait TraceSink {
    /// When false, the engine skips building events altogether.
    fn enabled(&self) -> bool {
        true
    }

    fn record(&mut self, event: TraceEvent);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _event: TraceEvent) {}
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl TraceSink for LogTracer {
    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::Debug)
    }

    fn record(&mut self, event: TraceEvent) {
        log::debug!("{}", event.indented());
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTracer {
    pub events: Vec<TraceEvent>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(TraceEvent::indented).collect()
    }
}

impl TraceSink for RecordingTracer {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
