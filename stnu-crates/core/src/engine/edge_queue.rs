use std::collections::VecDeque;

use super::labeled_graph::LinkId;
use crate::basic_types::TimePoint;
use crate::containers::HashSet;
use crate::stnu_assert_moderate;

/// An edge of the labeled graph which was tightened (or added) and whose consequences still have
/// to be derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Change {
    Ordinary { from: TimePoint, to: TimePoint },
    UpperCase { source: TimePoint, link: LinkId },
    /// The lower-case edge of a newly added link.
    LowerCase(LinkId),
}

/// First-in first-out queue of [`Change`]s in which every change is present at most once.
///
/// A change is looked up in the graph when it is popped, so tightening an edge which is already
/// enqueued does not enqueue it again.
#[derive(Debug, Default)]
pub(crate) struct EdgeQueue {
    queue: VecDeque<Change>,
    present_changes: HashSet<Change>,
}

impl EdgeQueue {
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.present_changes.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn enqueue(&mut self, change: Change) {
        if self.present_changes.insert(change) {
            self.queue.push_back(change);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Change> {
        let change = self.queue.pop_front()?;
        let was_present = self.present_changes.remove(&change);
        stnu_assert_moderate!(was_present);

        Some(change)
    }
}
