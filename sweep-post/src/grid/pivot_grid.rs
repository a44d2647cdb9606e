use super::DuplicateCellPolicy;
use crate::model::{PostProcessError, TableRow};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

/// a long table pivoted into a 2D grid. row and column coordinates are the
/// distinct values of the row and column keys, sorted ascending. cells with no
/// matching table row are empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PivotGrid {
    pub row_key: String,
    pub col_key: String,
    pub value_key: String,
    rows: Vec<f64>,
    cols: Vec<f64>,
    /// row-major, rows.len() * cols.len()
    values: Vec<Option<f64>>,
}

impl PivotGrid {
    /// pivots `table` so that distinct `row_key` values index rows, distinct
    /// `col_key` values index columns and `value_key` fills the cells.
    ///
    /// # Arguments
    ///
    /// * `table` - long-format rows
    /// * `row_key` - column providing grid row coordinates
    /// * `col_key` - column providing grid column coordinates
    /// * `value_key` - column providing cell values
    /// * `policy` - what to do when two rows land on the same cell
    pub fn from_rows<R: TableRow>(
        table: &[R],
        row_key: &str,
        col_key: &str,
        value_key: &str,
        policy: DuplicateCellPolicy,
    ) -> Result<PivotGrid, PostProcessError> {
        let mut cells: BTreeMap<(OrderedFloat<f64>, OrderedFloat<f64>), f64> = BTreeMap::new();
        for row in table.iter() {
            let r = lookup(row, row_key)?;
            let c = lookup(row, col_key)?;
            let v = lookup(row, value_key)?;
            match cells.entry((OrderedFloat(r), OrderedFloat(c))) {
                Entry::Vacant(entry) => {
                    entry.insert(v);
                }
                Entry::Occupied(mut entry) => match policy {
                    DuplicateCellPolicy::LastWins => {
                        log::debug!("pivot cell ({r}, {c}) overwritten: {} -> {v}", entry.get());
                        entry.insert(v);
                    }
                    DuplicateCellPolicy::Reject if *entry.get() == v => {
                        log::debug!("pivot cell ({r}, {c}) repeated with the same value {v}");
                    }
                    DuplicateCellPolicy::Reject => {
                        return Err(PostProcessError::DuplicateCell {
                            row: r,
                            col: c,
                            previous: *entry.get(),
                            next: v,
                        })
                    }
                },
            }
        }

        let rows = cells
            .keys()
            .map(|(r, _)| *r)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(OrderedFloat::into_inner)
            .collect_vec();
        let cols = cells
            .keys()
            .map(|(_, c)| *c)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(OrderedFloat::into_inner)
            .collect_vec();
        let mut values = vec![None; rows.len() * cols.len()];
        for ((r, c), v) in cells.into_iter() {
            let row_idx = rows.partition_point(|x| *x < r.into_inner());
            let col_idx = cols.partition_point(|x| *x < c.into_inner());
            values[row_idx * cols.len() + col_idx] = Some(v);
        }

        Ok(PivotGrid {
            row_key: row_key.to_string(),
            col_key: col_key.to_string(),
            value_key: value_key.to_string(),
            rows,
            cols,
            values,
        })
    }

    /// ascending row coordinates
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// ascending column coordinates
    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row_idx: usize, col_idx: usize) -> Option<f64> {
        if row_idx >= self.rows.len() || col_idx >= self.cols.len() {
            return None;
        }
        self.values[row_idx * self.cols.len() + col_idx]
    }

    /// every non-empty cell as (row_idx, col_idx, value)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n_cols = self.cols.len();
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(idx, v)| v.map(|v| (idx / n_cols, idx % n_cols, v)))
    }

    /// (min, max) over the finite cell values
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells()
            .map(|(_, _, v)| v)
            .filter(|v| v.is_finite())
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }
}

fn lookup<R: TableRow>(row: &R, key: &str) -> Result<f64, PostProcessError> {
    row.column(key)
        .ok_or_else(|| PostProcessError::UnknownColumn(key.to_string()))
}

#[cfg(test)]
mod test {
    use super::PivotGrid;
    use crate::grid::DuplicateCellPolicy;
    use crate::model::{
        AverageCell, CellKey, PostProcessError, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO,
        RELATIVE_COST,
    };

    fn cell(ratio: f64, strength: f64, cost: f64) -> AverageCell {
        AverageCell::new(&CellKey::new(ratio, strength), cost, 1)
    }

    fn pivot(table: &[AverageCell], policy: DuplicateCellPolicy) -> Result<PivotGrid, PostProcessError> {
        PivotGrid::from_rows(
            table,
            COST_CONSTRAINT_RATIO,
            CHAIN_STRENGTH,
            RELATIVE_COST,
            policy,
        )
    }

    #[test]
    fn test_rows_and_cols_sorted_ascending() {
        let table = vec![
            cell(1.0, 3.0, 4.0),
            cell(0.5, 3.0, 2.0),
            cell(1.0, 1.0, 3.0),
            cell(0.5, 1.0, 1.0),
        ];
        let grid = pivot(&table, DuplicateCellPolicy::LastWins).expect("should pivot");
        assert_eq!(grid.rows(), &[0.5, 1.0]);
        assert_eq!(grid.cols(), &[1.0, 3.0]);
        assert_eq!(grid.get(0, 0), Some(1.0));
        assert_eq!(grid.get(0, 1), Some(2.0));
        assert_eq!(grid.get(1, 0), Some(3.0));
        assert_eq!(grid.get(1, 1), Some(4.0));
        assert_eq!(grid.value_range(), Some((1.0, 4.0)));
    }

    #[test]
    fn test_missing_combination_is_empty() {
        let table = vec![cell(0.5, 1.0, 1.0), cell(1.0, 3.0, 4.0)];
        let grid = pivot(&table, DuplicateCellPolicy::LastWins).expect("should pivot");
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.cells().count(), 2);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let table = vec![cell(0.5, 1.0, 1.0), cell(0.5, 1.0, 7.0)];
        let grid = pivot(&table, DuplicateCellPolicy::LastWins).expect("should pivot");
        assert_eq!(grid.n_rows(), 1);
        assert_eq!(grid.n_cols(), 1);
        assert_eq!(grid.get(0, 0), Some(7.0));
    }

    #[test]
    fn test_duplicate_rejected() {
        let table = vec![cell(0.5, 1.0, 1.0), cell(0.5, 1.0, 7.0)];
        let result = pivot(&table, DuplicateCellPolicy::Reject);
        assert!(matches!(
            result,
            Err(PostProcessError::DuplicateCell { .. })
        ));
    }

    #[test]
    fn test_repeated_equal_value_not_rejected() {
        let table = vec![cell(0.5, 1.0, 7.0), cell(0.5, 1.0, 7.0), cell(1.0, 1.0, 2.0)];
        let grid = pivot(&table, DuplicateCellPolicy::Reject).expect("same value is unambiguous");
        assert_eq!(grid.get(0, 0), Some(7.0));
        assert_eq!(grid.get(1, 0), Some(2.0));
    }

    #[test]
    fn test_unknown_column() {
        let table = vec![cell(0.5, 1.0, 1.0)];
        let result = PivotGrid::from_rows(
            &table,
            COST_CONSTRAINT_RATIO,
            CHAIN_STRENGTH,
            "failed_routes_count",
            DuplicateCellPolicy::LastWins,
        );
        assert!(matches!(result, Err(PostProcessError::UnknownColumn(_))));
    }

    #[test]
    fn test_empty_table() {
        let grid = pivot(&[], DuplicateCellPolicy::LastWins).expect("should pivot");
        assert!(grid.is_empty());
        assert_eq!(grid.value_range(), None);
    }
}
