use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use crate::num::Float;

/// Column-major numeric table with named columns.
///
/// All columns always have the same number of rows. Column names are not required to be unique,
/// they are reported back as is.
#[derive(Clone, PartialEq, Debug, Default, Dissolve, Getters)]
pub struct Table<F: Float> {
    names: Vec<String>,
    columns: Vec<Vec<F>>,
}

impl<F: Float> Table<F> {
    pub fn new(names: Vec<String>, columns: Vec<Vec<F>>) -> Result<Self> {
        ensure!(!names.is_empty(), "Table must have at least one column");
        ensure!(
            names.len() == columns.len(),
            "Number of column names ({}) doesn't match the number of columns ({})",
            names.len(),
            columns.len()
        );
        let nrows = columns[0].len();
        ensure!(
            columns.iter().all(|x| x.len() == nrows),
            "All table columns must have the same length"
        );
        Ok(Self { names, columns })
    }

    /// Create a table without rows.
    pub fn empty(names: Vec<String>) -> Result<Self> {
        let columns = vec![Vec::new(); names.len()];
        Self::new(names, columns)
    }

    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn ncols(&self) -> usize {
        self.names.len()
    }

    pub fn push_row(&mut self, row: &[F]) -> Result<()> {
        ensure!(
            row.len() == self.ncols(),
            "Row has {} values, but the table has {} columns",
            row.len(),
            self.ncols()
        );
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(*value);
        }
        Ok(())
    }

    /// Values of the given row, in column order. Panics if the row is out of bounds.
    pub fn row(&self, ind: usize) -> impl Iterator<Item = F> + '_ {
        assert!(ind < self.nrows(), "Row index {ind} is out of bounds");
        self.columns.iter().map(move |column| column[ind])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_table_construction() -> Result<()> {
        let table = Table::new(names(&["a", "b"]), vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.row(1).collect::<Vec<f64>>(), vec![2.0, 4.0]);
        assert_eq!(table.columns()[1], vec![3.0, 4.0]);

        let table = Table::<f64>::empty(names(&["x"]))?;
        assert_eq!(table.nrows(), 0);
        assert_eq!(table.ncols(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_tables() {
        assert!(Table::<f64>::new(vec![], vec![]).is_err());
        assert!(Table::new(names(&["a"]), vec![vec![1.0], vec![2.0]]).is_err());
        assert!(Table::new(names(&["a", "b"]), vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    }

    #[test]
    fn test_push_row() -> Result<()> {
        let mut table = Table::<f32>::empty(names(&["a", "b", "c"]))?;
        table.push_row(&[1.0, 2.0, 3.0])?;
        table.push_row(&[4.0, 5.0, 6.0])?;
        assert!(table.push_row(&[7.0, 8.0]).is_err());

        assert_eq!(table.nrows(), 2);
        assert_eq!(table.columns()[2], vec![3.0, 6.0]);
        Ok(())
    }
}
