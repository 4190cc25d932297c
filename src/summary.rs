use crate::classifier::Category;
use crate::models::Transaction;

pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

pub struct SpendingSummary {
    /// In category declaration order; only categories present in the data.
    pub totals: Vec<CategoryTotal>,
    /// Sum of all category sums, sign preserved.
    pub total: f64,
}

/// Sum transaction amounts per category.
///
/// Output order follows the category declaration order rather than row
/// order, so the summary is stable under any permutation of the input.
pub fn summarize(rows: &[Transaction]) -> SpendingSummary {
    let mut totals = Vec::new();
    let mut total = 0.0f64;
    for category in Category::ALL {
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for row in rows {
            if row.category.unwrap_or(Category::Other) == category {
                sum += row.amount;
                count += 1;
            }
        }
        if count > 0 {
            total += sum;
            totals.push(CategoryTotal {
                category,
                total: sum,
                count,
            });
        }
    }
    SpendingSummary { totals, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(description: &str, amount: f64, category: Category) -> Transaction {
        Transaction {
            date: None,
            description: description.to_string(),
            amount,
            category: Some(category),
        }
    }

    #[test]
    fn test_groups_and_sums_by_category() {
        let rows = vec![
            txn("COFFEE", -6.45, Category::Food),
            txn("GROCERY", -43.55, Category::Food),
            txn("RENT", -450.0, Category::Bills),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.totals.len(), 2);
        assert_eq!(summary.totals[0].category, Category::Food);
        assert_eq!(summary.totals[0].total, -50.0);
        assert_eq!(summary.totals[0].count, 2);
        assert_eq!(summary.totals[1].category, Category::Bills);
        assert_eq!(summary.total, -500.0);
    }

    #[test]
    fn test_stable_under_row_permutation() {
        let rows = vec![
            txn("A", -10.0, Category::Shopping),
            txn("B", -20.0, Category::Food),
            txn("C", 5.0, Category::Other),
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        let a = summarize(&rows);
        let b = summarize(&reversed);
        assert_eq!(a.total, b.total);
        let pairs_a: Vec<_> = a.totals.iter().map(|t| (t.category, t.total)).collect();
        let pairs_b: Vec<_> = b.totals.iter().map(|t| (t.category, t.total)).collect();
        assert_eq!(pairs_a, pairs_b);
    }

    #[test]
    fn test_sign_is_preserved() {
        let rows = vec![
            txn("PAYCHECK", 2000.0, Category::Other),
            txn("RENT", -800.0, Category::Bills),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total, 1200.0);
        let bills = summary
            .totals
            .iter()
            .find(|t| t.category == Category::Bills)
            .unwrap();
        assert_eq!(bills.total, -800.0);
    }

    #[test]
    fn test_only_present_categories_appear() {
        let rows = vec![txn("COFFEE", -3.0, Category::Food)];
        let summary = summarize(&rows);
        assert_eq!(summary.totals.len(), 1);
        assert_eq!(summary.totals[0].category, Category::Food);
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);
        assert!(summary.totals.is_empty());
        assert_eq!(summary.total, 0.0);
    }
}
