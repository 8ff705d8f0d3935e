use eyre::{ensure, Result};

fn _normalize(requested: usize, tasks: usize) -> usize {
    requested.min(tasks).max(1)
}

/// Number of workers to spawn for the given number of independent tasks. There is no point in
/// running more workers than there are tasks.
pub fn workers(requested: usize, tasks: usize) -> Result<usize> {
    ensure!(
        requested >= 1,
        "Number of workers must be at least 1, got {requested}"
    );
    Ok(_normalize(requested, tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_normalization() {
        for (requested, tasks, expected) in [
            (1, 4, 1),
            (2, 4, 2),
            (4, 4, 4),
            (5, 4, 4),
            (1231, 3, 3),
            (3, 0, 1),
            (1, 0, 1),
        ] {
            assert_eq!(_normalize(requested, tasks), expected);
        }
    }

    #[test]
    fn test_zero_workers() {
        assert!(workers(0, 10).is_err());
        assert_eq!(workers(3, 10).unwrap(), 3);
    }
}
