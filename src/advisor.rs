use crate::classifier::Category;
use crate::fmt::money;
use crate::models::Profile;
use crate::summary::SpendingSummary;

// ---------------------------------------------------------------------------
// Spending suggestions
// ---------------------------------------------------------------------------

/// How large a share of total spending a category takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone)]
pub struct Suggestion {
    pub category: Category,
    pub pct: f64,
    pub level: SpendLevel,
    pub message: String,
}

/// Per-category share-of-total heuristics.
///
/// Strictly greater than 30% warns, strictly less than 10% praises,
/// everything else (boundaries included) is moderate. Percentages divide
/// signed sums by the signed total, so a uniformly-negative statement yields
/// ordinary positive shares. A zero total yields no suggestions; the caller
/// decides how to say so.
pub fn spending_suggestions(summary: &SpendingSummary) -> Vec<Suggestion> {
    if summary.total == 0.0 {
        return Vec::new();
    }
    summary
        .totals
        .iter()
        .map(|t| {
            let pct = t.total / summary.total * 100.0;
            let name = t.category.name();
            let (level, message) = if pct > 30.0 {
                (
                    SpendLevel::High,
                    format!("You're spending a lot on {name} ({pct:.1}% of the total). Consider cutting back."),
                )
            } else if pct < 10.0 {
                (
                    SpendLevel::Low,
                    format!("{name} looks well-managed at {pct:.1}% of the total."),
                )
            } else {
                (
                    SpendLevel::Moderate,
                    format!("{name} takes a moderate share of your spending ({pct:.1}% of the total)."),
                )
            };
            Suggestion {
                category: t.category,
                pct,
                level,
                message,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Savings plan advice
// ---------------------------------------------------------------------------

pub struct PlanAdvice {
    /// Savings goal as a percentage of income; `None` when income is not
    /// positive.
    pub savings_rate: Option<f64>,
    pub lines: Vec<String>,
}

/// Turn an interview profile into advice lines.
///
/// The savings rate is only computed for a positive income. A rate strictly
/// below 20% suggests saving more; 20% and up is affirmed. Debt above zero
/// adds a flat repayment reminder, and the stated goal is always echoed
/// verbatim as the last line.
pub fn plan_advice(profile: &Profile, currency: &str) -> PlanAdvice {
    let mut lines = Vec::new();

    let savings_rate = if profile.income > 0.0 {
        Some(profile.savings_goal / profile.income * 100.0)
    } else {
        None
    };

    match savings_rate {
        Some(rate) if rate < 20.0 => lines.push(format!(
            "You're aiming to save {rate:.1}% of your income. Try to work toward at least 20%."
        )),
        Some(rate) => lines.push(format!(
            "Great job! Saving {rate:.1}% of your income is a solid target."
        )),
        None => lines.push(
            "Without a positive income there's no savings rate to check.".to_string(),
        ),
    }

    if profile.debt > 0.0 {
        lines.push(format!(
            "You reported {} of outstanding debt. Put spare cash toward repayment before stretching your goals.",
            money(profile.debt, currency)
        ));
    }

    lines.push(format!("Stated goal: {}", profile.financial_goal));

    PlanAdvice {
        savings_rate,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::CategoryTotal;

    fn summary(entries: &[(Category, f64)]) -> SpendingSummary {
        let totals: Vec<CategoryTotal> = entries
            .iter()
            .map(|&(category, total)| CategoryTotal {
                category,
                total,
                count: 1,
            })
            .collect();
        let total = totals.iter().map(|t| t.total).sum();
        SpendingSummary { totals, total }
    }

    fn profile(income: f64, savings_goal: f64, debt: f64, goal: &str) -> Profile {
        Profile {
            income,
            savings_goal,
            debt,
            financial_goal: goal.to_string(),
        }
    }

    #[test]
    fn test_dominant_category_warns() {
        let s = summary(&[(Category::Food, -45.0), (Category::Bills, -455.0)]);
        let suggestions = spending_suggestions(&s);
        let bills = suggestions
            .iter()
            .find(|s| s.category == Category::Bills)
            .unwrap();
        assert_eq!(bills.level, SpendLevel::High);
        assert!(bills.pct > 90.0);
        let food = suggestions
            .iter()
            .find(|s| s.category == Category::Food)
            .unwrap();
        assert_eq!(food.level, SpendLevel::Low);
    }

    #[test]
    fn test_exact_boundaries_are_moderate() {
        // Food is exactly 10% and Shopping exactly 30%: strict comparisons
        // send both to the moderate branch.
        let s = summary(&[
            (Category::Food, -10.0),
            (Category::Shopping, -30.0),
            (Category::Bills, -60.0),
        ]);
        let suggestions = spending_suggestions(&s);
        assert_eq!(suggestions[0].level, SpendLevel::Moderate);
        assert_eq!(suggestions[1].level, SpendLevel::Moderate);
        assert_eq!(suggestions[2].level, SpendLevel::High);
    }

    #[test]
    fn test_zero_total_yields_no_suggestions() {
        assert!(spending_suggestions(&summary(&[])).is_empty());
        let balanced = summary(&[(Category::Food, -50.0), (Category::Other, 50.0)]);
        assert!(spending_suggestions(&balanced).is_empty());
    }

    #[test]
    fn test_negative_totals_produce_positive_shares() {
        let s = summary(&[(Category::Food, -25.0), (Category::Bills, -75.0)]);
        let suggestions = spending_suggestions(&s);
        assert!((suggestions[0].pct - 25.0).abs() < 1e-9);
        assert!((suggestions[1].pct - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_rate_affirmed_at_thirty_pct() {
        let advice = plan_advice(&profile(1000.0, 300.0, 0.0, "Travel"), "$");
        assert_eq!(advice.savings_rate, Some(30.0));
        assert!(advice.lines[0].contains("Great job"));
    }

    #[test]
    fn test_savings_rate_below_twenty_suggests_more() {
        let advice = plan_advice(&profile(1000.0, 100.0, 0.0, "Travel"), "$");
        assert_eq!(advice.savings_rate, Some(10.0));
        assert!(advice.lines[0].contains("at least 20%"));
    }

    #[test]
    fn test_exactly_twenty_pct_is_affirmed() {
        let advice = plan_advice(&profile(1000.0, 200.0, 0.0, "Travel"), "$");
        assert!(advice.lines[0].contains("Great job"));
    }

    #[test]
    fn test_zero_income_skips_rate() {
        let advice = plan_advice(&profile(0.0, 100.0, 0.0, "Travel"), "$");
        assert_eq!(advice.savings_rate, None);
        assert!(advice.lines[0].contains("positive income"));
    }

    #[test]
    fn test_debt_adds_reminder() {
        let advice = plan_advice(&profile(1000.0, 300.0, 2500.0, "Travel"), "$");
        assert!(advice.lines.iter().any(|l| l.contains("$2,500.00")));

        let no_debt = plan_advice(&profile(1000.0, 300.0, 0.0, "Travel"), "$");
        assert!(!no_debt.lines.iter().any(|l| l.contains("debt")));
    }

    #[test]
    fn test_goal_echoed_verbatim_last() {
        let advice = plan_advice(&profile(1000.0, 300.0, 0.0, "Buy a house"), "$");
        assert_eq!(advice.lines.last().unwrap(), "Stated goal: Buy a house");
    }
}
