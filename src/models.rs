use crate::classifier::Category;

/// One row of financial activity parsed from a statement CSV.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// ISO date when the source column was present and parseable.
    pub date: Option<String>,
    pub description: String,
    /// Signed: expenses are conventionally negative, deposits positive.
    pub amount: f64,
    /// `None` until the Normalizer has run; `Some` for every row afterwards.
    pub category: Option<Category>,
}

/// Answers collected by the interactive savings-plan interview.
#[derive(Debug, Clone)]
pub struct Profile {
    pub income: f64,
    pub savings_goal: f64,
    pub debt: f64,
    pub financial_goal: String,
}
