//! Synchronous widget-to-handler dispatch.
//!
//! A `Dispatcher` holds subscriptions, each declaring a set of input widgets,
//! one output widget and a handler. When the UI reports that an input widget
//! changed, the next `dispatch` call reruns every handler listening on it and
//! hands back the recomputed outputs. Everything happens on the calling
//! thread; handlers are expected to be pure functions of their arguments.

use std::collections::HashSet;

use log::debug;

/// Identifier of a declared input or output widget.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WidgetId(pub &'static str);

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Subscription<Ctx, In, Out> {
    inputs: Vec<WidgetId>,
    output: WidgetId,
    handler: Box<dyn Fn(&Ctx, &In) -> Out>,
    // A fresh subscription has not produced its output yet; it fires on the
    // first dispatch regardless of the changed set.
    pending: bool,
}

pub struct Dispatcher<Ctx, In, Out> {
    subscriptions: Vec<Subscription<Ctx, In, Out>>,
    changed: HashSet<WidgetId>,
}

impl<Ctx, In, Out> Dispatcher<Ctx, In, Out> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            changed: HashSet::new(),
        }
    }

    /// Registers a handler that recomputes `output` whenever one of `inputs`
    /// changes.
    pub fn subscribe(
        &mut self,
        inputs: &[WidgetId],
        output: WidgetId,
        handler: impl Fn(&Ctx, &In) -> Out + 'static,
    ) {
        self.subscriptions.push(Subscription {
            inputs: inputs.to_vec(),
            output,
            handler: Box::new(handler),
            pending: true,
        });
    }

    /// Records that an input widget changed since the last dispatch.
    pub fn mark_changed(&mut self, id: WidgetId) {
        self.changed.insert(id);
    }

    pub fn has_work(&self) -> bool {
        !self.changed.is_empty() || self.subscriptions.iter().any(|sub| sub.pending)
    }

    /// Runs, in subscription order, every handler with at least one changed
    /// input (plus the ones that never ran), then clears the changed set.
    pub fn dispatch(&mut self, ctx: &Ctx, input: &In) -> Vec<(WidgetId, Out)> {
        let changed = &self.changed;
        let mut updates = Vec::new();
        for sub in self.subscriptions.iter_mut() {
            let triggered = sub.pending || sub.inputs.iter().any(|id| changed.contains(id));
            if !triggered {
                continue;
            }
            debug!("recomputing output '{}'", sub.output);
            updates.push((sub.output, (sub.handler)(ctx, input)));
            sub.pending = false;
        }
        self.changed.clear();
        updates
    }
}

impl<Ctx, In, Out> Default for Dispatcher<Ctx, In, Out> {
    fn default() -> Self {
        Self::new()
    }
}
