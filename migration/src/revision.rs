use std::collections::HashSet;

/// Identity of one migration in the revision chain.
///
/// Revisions are authored once and never change. `down_revision` names the
/// revision this one is applied on top of; `None` marks the root of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revision {
    pub id: &'static str,
    pub down_revision: Option<&'static str>,
    pub branch_labels: &'static [&'static str],
    pub depends_on: &'static [&'static str],
}

impl Revision {
    pub const fn root(id: &'static str) -> Self {
        Revision {
            id,
            down_revision: None,
            branch_labels: &[],
            depends_on: &[],
        }
    }

    pub const fn revises(id: &'static str, down_revision: &'static str) -> Self {
        Revision {
            id,
            down_revision: Some(down_revision),
            branch_labels: &[],
            depends_on: &[],
        }
    }

    pub fn is_root(&self) -> bool {
        self.down_revision.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionError {
    DuplicateId(&'static str),
    NoRoot,
    MultipleRoots(&'static str, &'static str),
    UnknownPredecessor {
        id: &'static str,
        down_revision: &'static str,
    },
    UnknownDependency {
        id: &'static str,
        depends_on: &'static str,
    },
    OutOfOrder {
        id: &'static str,
        expected: &'static str,
    },
}

impl std::error::Error for RevisionError {}

impl std::fmt::Display for RevisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RevisionError::DuplicateId(id) => write!(f, "revision {} is defined twice", id),
            RevisionError::NoRoot => write!(f, "no root revision"),
            RevisionError::MultipleRoots(a, b) => {
                write!(f, "revisions {} and {} are both roots", a, b)
            }
            RevisionError::UnknownPredecessor { id, down_revision } => write!(
                f,
                "revision {} revises unknown revision {}",
                id, down_revision
            ),
            RevisionError::UnknownDependency { id, depends_on } => write!(
                f,
                "revision {} depends on unknown revision {}",
                id, depends_on
            ),
            RevisionError::OutOfOrder { id, expected } => write!(
                f,
                "revision {} must directly revise {}",
                id, expected
            ),
        }
    }
}

/// Checks that `revisions`, listed in application order, form a single linear
/// chain starting at one root.
pub fn validate_chain(revisions: &[Revision]) -> Result<(), RevisionError> {
    if revisions.is_empty() {
        return Ok(());
    }

    let mut known = HashSet::with_capacity(revisions.len());
    for rev in revisions {
        if !known.insert(rev.id) {
            return Err(RevisionError::DuplicateId(rev.id));
        }
    }

    let mut roots = revisions.iter().filter(|rev| rev.is_root());
    match (roots.next(), roots.next()) {
        (None, _) => return Err(RevisionError::NoRoot),
        (Some(a), Some(b)) => return Err(RevisionError::MultipleRoots(a.id, b.id)),
        (Some(_), None) => {}
    }

    for rev in revisions {
        if let Some(down_revision) = rev.down_revision {
            if !known.contains(down_revision) {
                return Err(RevisionError::UnknownPredecessor {
                    id: rev.id,
                    down_revision,
                });
            }
        }
        if let Some(depends_on) = rev.depends_on.iter().copied().find(|dep| !known.contains(dep)) {
            return Err(RevisionError::UnknownDependency {
                id: rev.id,
                depends_on,
            });
        }
    }

    for pair in revisions.windows(2) {
        if pair[1].down_revision != Some(pair[0].id) {
            return Err(RevisionError::OutOfOrder {
                id: pair[1].id,
                expected: pair[0].id,
            });
        }
    }

    Ok(())
}
