use std::collections::HashSet;

use crate::model::session::Session;

/// One row of the flattened session forest: the session plus its depth in
/// the tree (0 = root).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub session: Session,
    pub depth: usize,
}

/// Rebuild the parent/child forest from `spawned_by` references and
/// flatten it depth-first, children directly under their parent in batch
/// order.
///
/// A session is a child only when its `spawned_by` names a key present in
/// the same batch; a dangling reference demotes it to a root rather than
/// dropping it. Every session appears exactly once even if the references
/// form a cycle.
pub fn session_forest(sessions: &[Session]) -> Vec<SessionRow> {
    let keys: HashSet<&str> = sessions.iter().map(|s| s.key.as_str()).collect();

    let mut roots: Vec<&Session> = Vec::new();
    for session in sessions {
        let has_parent = session
            .spawned_by
            .as_deref()
            .is_some_and(|parent| !parent.is_empty() && keys.contains(parent));
        if !has_parent {
            roots.push(session);
        }
    }

    let mut rows = Vec::with_capacity(sessions.len());
    let mut seen: HashSet<&str> = HashSet::new();
    for root in roots {
        push_subtree(root, 0, sessions, &mut seen, &mut rows);
    }

    // Cycles among non-roots (a spawned b, b spawned a) are unreachable
    // from any root; emit them at depth 0 so nothing disappears.
    for session in sessions {
        if seen.insert(session.key.as_str()) {
            rows.push(SessionRow {
                session: session.clone(),
                depth: 0,
            });
        }
    }
    rows
}

fn push_subtree<'a>(
    node: &'a Session,
    depth: usize,
    all: &'a [Session],
    seen: &mut HashSet<&'a str>,
    rows: &mut Vec<SessionRow>,
) {
    if !seen.insert(node.key.as_str()) {
        return;
    }
    rows.push(SessionRow {
        session: node.clone(),
        depth,
    });
    for child in all {
        if child.spawned_by.as_deref() == Some(node.key.as_str()) {
            push_subtree(child, depth + 1, all, seen, rows);
        }
    }
}
