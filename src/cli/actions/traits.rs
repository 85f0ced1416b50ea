//! Action trait definition.

use std::collections::HashSet;

use anyhow::Result;

use super::operation::Operation;

/// What executing a batch of operations did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    pub operations: usize,
    /// Distinct files written.
    pub files_modified: usize,
}

/// Turns command output into file operations, then runs or previews them.
///
/// Implementors only provide [`Action::to_operations`]; `sync` and `import`
/// call `run` with `--apply` and `preview` otherwise.
pub trait Action<I> {
    fn to_operations(items: &[I]) -> Vec<Operation>;

    fn run(items: &[I]) -> Result<ActionStats> {
        execute_operations(&Self::to_operations(items))
    }

    fn preview(items: &[I]) {
        Self::to_operations(items).iter().for_each(Operation::preview);
    }
}

/// Execute `ops` in order, stopping at the first failure.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut written: HashSet<&str> = HashSet::new();
    for op in ops {
        op.execute()?;
        written.insert(op.path());
    }
    tracing::debug!(operations = ops.len(), files = written.len(), "Operations executed");

    Ok(ActionStats {
        operations: ops.len(),
        files_modified: written.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_counts_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i18n.ts").to_string_lossy().into_owned();
        let write = |content: &str| Operation::WriteFile {
            path: path.clone(),
            content: content.to_string(),
            created: false,
            details: None,
        };

        let stats = execute_operations(&[write("a"), write("b")]).unwrap();
        assert_eq!(
            stats,
            ActionStats {
                operations: 2,
                files_modified: 1,
            }
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "b");
    }
}
