//! Filter Query Builder for pet search.
//!
//! Criteria become an ordered list of typed clauses. Raw input never reaches
//! statement text: [`PetPredicate::statement`] renders numbered placeholders
//! and [`PetPredicate::parameters`] returns the bound values in the same
//! order. The Diesel adapter folds the same clauses into a boxed query.

/// Optional search criteria supplied by a client.
///
/// Empty or whitespace-only criteria are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetSearchFilter {
    /// Exact category name.
    pub category: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
}

impl PetSearchFilter {
    pub fn new(category: Option<&str>, location: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_owned),
            location: location.map(str::to_owned),
        }
    }

    /// Compose the predicate. Clauses appear in category, location order.
    ///
    /// # Examples
    /// ```
    /// use petfinder::domain::PetSearchFilter;
    ///
    /// let predicate = PetSearchFilter::new(None, Some("park")).build();
    /// assert_eq!(
    ///     predicate.statement(),
    ///     "SELECT * FROM pets WHERE location ILIKE $1 ORDER BY id"
    /// );
    /// assert_eq!(predicate.parameters(), vec!["%park%"]);
    /// ```
    #[must_use]
    pub fn build(&self) -> PetPredicate {
        let mut clauses = Vec::new();
        if let Some(category) = present(self.category.as_deref()) {
            clauses.push(PetClause::CategoryEquals(category.to_owned()));
        }
        if let Some(location) = present(self.location.as_deref()) {
            clauses.push(PetClause::LocationContains(substring_pattern(location)));
        }
        PetPredicate { clauses }
    }
}

/// Blank criteria count as absent; anything else is bound exactly as given.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Wrap `raw` for substring matching, escaping LIKE metacharacters.
///
/// Backslash is PostgreSQL's default LIKE escape character.
fn substring_pattern(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len() + 2);
    pattern.push('%');
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// One condition over the pets table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetClause {
    /// `category_name = $n`
    CategoryEquals(String),
    /// `location ILIKE $n`, value already wrapped in `%` and escaped.
    LocationContains(String),
}

impl PetClause {
    fn column_condition(&self, placeholder: usize) -> String {
        match self {
            Self::CategoryEquals(_) => format!("category_name = ${placeholder}"),
            Self::LocationContains(_) => format!("location ILIKE ${placeholder}"),
        }
    }

    /// Bound parameter value.
    pub fn value(&self) -> &str {
        match self {
            Self::CategoryEquals(value) | Self::LocationContains(value) => value,
        }
    }
}

/// A composed pet search: zero or more clauses joined with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetPredicate {
    clauses: Vec<PetClause>,
}

impl PetPredicate {
    /// Unconditional selection.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[PetClause] {
        &self.clauses
    }

    /// Statement template with numbered placeholders.
    pub fn statement(&self) -> String {
        let mut statement = String::from("SELECT * FROM pets");
        for (index, clause) in self.clauses.iter().enumerate() {
            statement.push_str(if index == 0 { " WHERE " } else { " AND " });
            statement.push_str(&clause.column_condition(index + 1));
        }
        statement.push_str(" ORDER BY id");
        statement
    }

    /// Bound values in placeholder order.
    pub fn parameters(&self) -> Vec<&str> {
        self.clauses.iter().map(PetClause::value).collect()
    }

    /// In-memory evaluation with the same semantics as the SQL rendering.
    pub fn matches(&self, category_name: &str, location: &str) -> bool {
        self.clauses.iter().all(|clause| match clause {
            PetClause::CategoryEquals(expected) => category_name == expected,
            PetClause::LocationContains(pattern) => {
                let needle = unescape_pattern(pattern).to_lowercase();
                location.to_lowercase().contains(&needle)
            }
        })
    }
}

fn unescape_pattern(pattern: &str) -> String {
    let inner = pattern
        .strip_prefix('%')
        .and_then(|p| p.strip_suffix('%'))
        .unwrap_or(pattern);
    let mut out = String::with_capacity(inner.len());
    let mut escaped = false;
    for ch in inner.chars() {
        if ch == '\\' && !escaped {
            escaped = true;
            continue;
        }
        escaped = false;
        out.push(ch);
    }
    out
}
