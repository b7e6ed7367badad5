use crate::{ComponentId, IntervalTable};

/// Final answer of a crossing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Verdict::Yes } else { Verdict::No }
    }
}

impl From<Verdict> for bool {
    fn from(value: Verdict) -> Self {
        value == Verdict::Yes
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
        }
    }
}

/// Decides the crossing from a finished DFS.
///
/// - `should_try == false` is always a no.
/// - If `south` was never reached from `north`, the answer is yes.
/// - Otherwise it is yes only when the interval of `south` lies strictly
///   inside the interval of `north`.
pub fn evaluate(
    table: &IntervalTable,
    north: ComponentId,
    south: ComponentId,
    should_try: bool,
) -> bool {
    if !should_try {
        return false;
    }
    if !table.is_visited(south) {
        return true;
    }
    table.discovery(north) < table.discovery(south) && table.finish(north) > table.finish(south)
}
