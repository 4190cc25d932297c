/// The closed set of spending categories, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Entertainment,
    Transportation,
    Bills,
    Shopping,
    Other,
}

impl Category {
    /// Declaration order. Matching scans these front to back, so an
    /// earlier category wins when a description matches keywords from two.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Entertainment,
        Category::Transportation,
        Category::Bills,
        Category::Shopping,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Transportation => "Transportation",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// Parse a category name from a CSV cell. Case-insensitive, trimmed.
    pub fn parse(raw: &str) -> Option<Category> {
        let raw = raw.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(raw))
    }

    // Keywords are lowercase; matching lowercases the description first.
    // Other is the exhaustion fallback and carries no keywords.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Food => &[
                "grocery", "restaurant", "coffee", "starbucks", "cafe", "pizza", "burger",
                "bakery", "deli",
            ],
            Category::Entertainment => &[
                "netflix", "spotify", "cinema", "movie", "hulu", "steam", "concert", "theater",
            ],
            Category::Transportation => &[
                "uber", "lyft", "gas", "fuel", "taxi", "bus", "train", "parking", "metro",
            ],
            Category::Bills => &[
                "electric", "water", "internet", "rent", "phone", "insurance", "utility",
            ],
            Category::Shopping => &[
                "amazon", "walmart", "target", "mall", "clothing", "store",
            ],
            Category::Other => &[],
        }
    }
}

/// Assign a category to a transaction description.
///
/// Case-insensitive substring containment, first category with any matching
/// keyword wins. Deliberately not word-boundary aware: "uberconfident"
/// matches Transportation, the known precision trade-off of keyword scans.
pub fn classify(description: &str) -> Category {
    let desc = description.to_lowercase();
    for category in Category::ALL {
        if category.keywords().iter().any(|kw| desc.contains(kw)) {
            return category;
        }
    }
    Category::Other
}
