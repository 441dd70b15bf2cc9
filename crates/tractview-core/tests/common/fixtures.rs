//! Test dataset builders

use tractview_core::{CategoryGroup, Dataset, Variant};

/// Region codes `25025000100`, `25025000200`, ...
#[allow(dead_code)]
pub fn tract_ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("25025{:04}00", i)).collect()
}

/// Four per-row fractions that sum to exactly 1.0
///
/// Every fraction is a multiple of 1/8, so the sum is exact in binary.
#[allow(dead_code)]
pub fn fractions(row: usize) -> [f64; 4] {
    let a = ((row % 3) + 1) as f64 / 8.0;
    let b = ((row % 2) + 1) as f64 / 8.0;
    let c = (row % 4) as f64 / 8.0;
    [a, b, c, 1.0 - a - b - c]
}

/// A small dashboard dataset carrying all four built-in groups
#[allow(dead_code)]
pub fn tract_dataset(rows: usize) -> Dataset {
    let mut dataset = Dataset::new("GEOID", tract_ids(rows));

    let population: Vec<f64> = (0..rows).map(|i| 500.0 + 125.0 * (i % 7) as f64).collect();
    dataset
        .add_column("total_population_CT", population.clone())
        .unwrap();
    dataset.add_column("total_population", population).unwrap();

    for group in CategoryGroup::builtin() {
        add_group(&mut dataset, &group, fractions);
    }

    let median_income = (0..rows)
        .map(|i| if i % 6 == 5 { f64::NAN } else { 40_000.0 + 2_500.0 * i as f64 })
        .collect();
    dataset.add_column("median_income", median_income).unwrap();

    dataset
}

/// Add one column per category, filled from `f(row)[position]`
#[allow(dead_code)]
pub fn add_group(dataset: &mut Dataset, group: &CategoryGroup, f: impl Fn(usize) -> [f64; 4]) {
    let rows = dataset.row_count();
    for (pos, key) in group.keys().enumerate() {
        let values = (0..rows).map(|row| f(row)[pos]).collect();
        dataset.add_column(key, values).unwrap();
    }
}

/// The income group of the resident population
#[allow(dead_code)]
pub fn income() -> CategoryGroup {
    CategoryGroup::income(Variant::Base)
}
