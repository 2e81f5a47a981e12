//! Row-wise table concatenation with column-union alignment.

use std::collections::HashMap;

use crate::table::Table;

/// Concatenate tables in input order.
///
/// The merged column set is the union of the inputs' columns in first-seen
/// order. A column absent from a row's source table becomes an empty string
/// in the merged row. Row order is preserved; nothing is deduplicated,
/// sorted, or reconciled beyond that alignment.
pub fn concat(tables: &[Table]) -> Table {
    let mut columns: Vec<String> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    for table in tables {
        for column in &table.columns {
            if !position.contains_key(column) {
                position.insert(column.clone(), columns.len());
                columns.push(column.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(tables.iter().map(Table::row_count).sum());
    for table in tables {
        for row in &table.rows {
            let mut aligned = vec![String::new(); columns.len()];
            for (source_idx, column) in table.columns.iter().enumerate() {
                if let Some(value) = row.get(source_idx) {
                    aligned[position[column]] = value.clone();
                }
            }
            rows.push(aligned);
        }
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|v| v.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn test_concat_row_count_is_sum_of_inputs() {
        let a = table(&["x", "y"], &[&["1", "2"], &["3", "4"]]);
        let b = table(&["x", "y"], &[&["5", "6"]]);

        let merged = concat(&[a, b]);
        assert_eq!(merged.row_count(), 3);
        assert_eq!(merged.rows[2], vec!["5", "6"]);
    }

    #[test]
    fn test_concat_single_table_is_identity() {
        let a = table(&["x", "y"], &[&["1", "2"]]);
        let merged = concat(std::slice::from_ref(&a));
        assert_eq!(merged, a);
    }

    #[test]
    fn test_concat_column_union_fills_missing_with_empty() {
        let ab = table(&["A", "B"], &[&["1", "2"]]);
        let ac = table(&["A", "C"], &[&["3", "4"]]);

        let merged = concat(&[ab, ac]);
        assert_eq!(merged.columns, vec!["A", "B", "C"]);
        assert_eq!(merged.rows[0], vec!["1", "2", ""]);
        assert_eq!(merged.rows[1], vec!["3", "", "4"]);
    }

    #[test]
    fn test_concat_preserves_input_order() {
        let first = table(&["v"], &[&["a"], &["b"]]);
        let second = table(&["v"], &[&["c"]]);

        let merged = concat(&[first, second]);
        let values: Vec<&str> = merged.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concat_empty_input() {
        let merged = concat(&[]);
        assert_eq!(merged.row_count(), 0);
        assert_eq!(merged.column_count(), 0);
    }
}
