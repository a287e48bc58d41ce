//! Category breakdown report
//!
//! Turns per-category sums into chart slices with percentage shares.
//! Only positive totals become slices; zero and negative totals are listed
//! separately so the pie never has to draw a negative wedge.

use std::collections::BTreeMap;

/// One chartable category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Category label
    pub category: String,
    /// Summed amount, always positive
    pub total: f64,
    /// Share of the positive total, 0-100
    pub percentage: f64,
}

/// Aggregate view of all expenses, ready for charting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    /// Slices in category order
    pub slices: Vec<CategorySlice>,
    /// Categories with a zero or negative total
    pub excluded: Vec<(String, f64)>,
    /// Sum of the positive totals
    pub total: f64,
}

impl CategoryBreakdown {
    /// Build a breakdown from per-category sums
    pub fn from_totals(totals: &BTreeMap<String, f64>) -> Self {
        let total: f64 = totals.values().filter(|t| **t > 0.0).sum();

        let mut slices = Vec::new();
        let mut excluded = Vec::new();

        for (category, amount) in totals {
            if *amount > 0.0 {
                slices.push(CategorySlice {
                    category: category.clone(),
                    total: *amount,
                    percentage: amount / total * 100.0,
                });
            } else {
                excluded.push((category.clone(), *amount));
            }
        }

        Self {
            slices,
            excluded,
            total,
        }
    }

    /// True when at least one slice can be drawn
    pub fn is_chartable(&self) -> bool {
        !self.slices.is_empty()
    }

    /// Number of categories, charted or not
    pub fn category_count(&self) -> usize {
        self.slices.len() + self.excluded.len()
    }

    /// Legend label for a slice, e.g. `Food 42.9%`
    pub fn slice_label(slice: &CategorySlice) -> String {
        format!("{} {:.1}%", slice.category, slice.percentage)
    }

    /// Format the breakdown for terminal output
    pub fn format_terminal(&self, decimals: usize) -> String {
        let mut output = String::new();

        output.push_str("Expense Breakdown by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("{:<35} {:>14} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<35} {:>14.*} {:>7.1}%\n",
                slice.category, decimals, slice.total, slice.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<35} {:>14.*}\n", "Total", decimals, self.total));

        if !self.excluded.is_empty() {
            output.push_str("\nExcluded (zero or negative total):\n");
            for (category, amount) in &self.excluded {
                output.push_str(&format!("  {:<33} {:>14.*}\n", category, decimals, amount));
            }
        }

        if !self.is_chartable() {
            output.push_str("\nNothing to chart: no category has a positive total.\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(c, a)| (c.to_string(), *a)).collect()
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let breakdown =
            CategoryBreakdown::from_totals(&totals(&[("Food", 15.0), ("Rent", 70.0), ("Transport", 20.0)]));

        let sum: f64 = breakdown.slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 105.0);
    }

    #[test]
    fn test_proportional_slices() {
        let breakdown = CategoryBreakdown::from_totals(&totals(&[("Food", 15.0), ("Transport", 45.0)]));

        assert_eq!(breakdown.slices.len(), 2);
        assert_eq!(breakdown.slices[0].category, "Food");
        assert!((breakdown.slices[0].percentage - 25.0).abs() < 1e-9);
        assert!((breakdown.slices[1].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_totals_are_excluded() {
        let breakdown =
            CategoryBreakdown::from_totals(&totals(&[("Food", 10.0), ("Refund", -5.0), ("Zero", 0.0)]));

        assert_eq!(breakdown.slices.len(), 1);
        assert_eq!(breakdown.slices[0].percentage, 100.0);
        assert_eq!(breakdown.excluded.len(), 2);
        assert_eq!(breakdown.category_count(), 3);
        assert!(breakdown.is_chartable());
    }

    #[test]
    fn test_nothing_chartable() {
        let breakdown = CategoryBreakdown::from_totals(&totals(&[("Refund", -5.0)]));

        assert!(!breakdown.is_chartable());
        assert_eq!(breakdown.total, 0.0);
        assert!(breakdown.format_terminal(2).contains("Nothing to chart"));
    }

    #[test]
    fn test_slice_label_uses_one_decimal() {
        let breakdown = CategoryBreakdown::from_totals(&totals(&[("Food", 1.0), ("Rent", 2.0)]));
        assert_eq!(CategoryBreakdown::slice_label(&breakdown.slices[0]), "Food 33.3%");
        assert_eq!(CategoryBreakdown::slice_label(&breakdown.slices[1]), "Rent 66.7%");
    }

    #[test]
    fn test_format_terminal() {
        let breakdown =
            CategoryBreakdown::from_totals(&totals(&[("Food", 15.0), ("Refund", -3.0), ("Transport", 20.0)]));

        let output = breakdown.format_terminal(2);
        assert!(output.contains("Expense Breakdown by Category"));
        assert!(output.contains("Food"));
        assert!(output.contains("15.00"));
        assert!(output.contains("35.00"));
        assert!(output.contains("Excluded"));
        assert!(output.contains("-3.00"));
    }
}
