//! Composable pieces of a filtered `SELECT`.
//!
//! Every column name that reaches SQL text is a `&'static str` chosen by the
//! store or by a [`SortColumn`] enum. Values always travel as bind parameters.

use sqlx::{Postgres, QueryBuilder};

/// Maps a validated sort key onto the column it orders by.
pub trait SortColumn {
    fn column(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
}

impl FilterValue {
    fn is_blank(&self) -> bool {
        match self {
            FilterValue::Text(text) => text.is_empty(),
            FilterValue::Int(value) => *value == 0,
        }
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Empty,
    Equal {
        column: &'static str,
        value: FilterValue,
    },
    OrderBy(&'static str),
    Page {
        limit: Option<i64>,
        offset: Option<i64>,
    },
}

pub fn sort_fragment<S: SortColumn>(sort: Option<&S>) -> Fragment {
    match sort {
        Some(key) => Fragment::OrderBy(key.column()),
        None => Fragment::Empty,
    }
}

/// `""` and `0` mean "no predicate".
pub fn equality_fragment(column: &'static str, value: impl Into<FilterValue>) -> Fragment {
    let value = value.into();
    if value.is_blank() {
        Fragment::Empty
    } else {
        Fragment::Equal { column, value }
    }
}

/// Non-positive values are treated as absent.
pub fn pagination_fragment(limit: Option<i64>, offset: Option<i64>) -> Fragment {
    let limit = limit.filter(|v| *v > 0);
    let offset = offset.filter(|v| *v > 0);

    if limit.is_none() && offset.is_none() {
        Fragment::Empty
    } else {
        Fragment::Page { limit, offset }
    }
}

/// Collects fragments in any order and renders them in clause order:
/// predicates, then `ORDER BY`, then `LIMIT`/`OFFSET`.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    base: &'static str,
    predicates: Vec<(&'static str, FilterValue)>,
    order_by: Vec<&'static str>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectQuery {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            predicates: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn with(mut self, fragment: Fragment) -> Self {
        match fragment {
            Fragment::Empty => {}
            Fragment::Equal { column, value } => self.predicates.push((column, value)),
            Fragment::OrderBy(column) => self.order_by.push(column),
            Fragment::Page { limit, offset } => {
                self.limit = limit;
                self.offset = offset;
            }
        }
        self
    }

    pub fn into_builder(self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(self.base);
        builder.push(" WHERE 1=1");

        for (column, value) in self.predicates {
            builder.push(" AND ").push(column).push(" = ");
            match value {
                FilterValue::Text(text) => builder.push_bind(text),
                FilterValue::Int(int) => builder.push_bind(int),
            };
        }

        if !self.order_by.is_empty() {
            builder.push(" ORDER BY ").push(self.order_by.join(", "));
        }

        if let Some(limit) = self.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }
        if let Some(offset) = self.offset {
            builder.push(" OFFSET ").push_bind(offset);
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum TestSort {
        Name,
        Price,
    }

    impl SortColumn for TestSort {
        fn column(&self) -> &'static str {
            match self {
                TestSort::Name => "name",
                TestSort::Price => "price",
            }
        }
    }

    const BASE: &str = "SELECT * FROM products";

    fn render(query: SelectQuery) -> String {
        query.into_builder().sql().to_string()
    }

    #[test]
    fn empty_filter_selects_everything() {
        let query = SelectQuery::new(BASE)
            .with(sort_fragment::<TestSort>(None))
            .with(equality_fragment("id", 0))
            .with(equality_fragment("name", ""))
            .with(pagination_fragment(None, None));

        assert_eq!(render(query), "SELECT * FROM products WHERE 1=1");
    }

    #[test]
    fn sort_fragment_orders_ascending_by_column() {
        assert_eq!(
            sort_fragment(Some(&TestSort::Price)),
            Fragment::OrderBy("price")
        );
        assert_eq!(sort_fragment::<TestSort>(None), Fragment::Empty);
    }

    #[test]
    fn equality_fragment_skips_blank_values() {
        assert_eq!(equality_fragment("category_id", 0), Fragment::Empty);
        assert_eq!(equality_fragment("email", ""), Fragment::Empty);
        assert_eq!(
            equality_fragment("category_id", 4),
            Fragment::Equal {
                column: "category_id",
                value: FilterValue::Int(4)
            }
        );
    }

    #[test]
    fn pagination_covers_every_combination() {
        let cases = [
            (Some(10), Some(5), " LIMIT $1 OFFSET $2"),
            (Some(10), None, " LIMIT $1"),
            (None, Some(5), " OFFSET $1"),
            (None, None, ""),
            (Some(0), Some(-3), ""),
        ];

        for (limit, offset, suffix) in cases {
            let query = SelectQuery::new(BASE).with(pagination_fragment(limit, offset));
            assert_eq!(
                render(query),
                format!("SELECT * FROM products WHERE 1=1{suffix}")
            );
        }
    }

    #[test]
    fn clauses_render_in_order_regardless_of_composition_order() {
        let query = SelectQuery::new(BASE)
            .with(pagination_fragment(Some(20), Some(40)))
            .with(sort_fragment(Some(&TestSort::Name)))
            .with(equality_fragment("category_id", 3))
            .with(equality_fragment("name", "chair"));

        assert_eq!(
            render(query),
            "SELECT * FROM products WHERE 1=1 AND category_id = $1 AND name = $2 \
             ORDER BY name LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn values_never_appear_in_sql_text() {
        let query = SelectQuery::new(BASE).with(equality_fragment("name", "x' OR '1'='1"));
        let sql = render(query);

        assert!(!sql.contains("OR '1'='1"));
        assert!(sql.ends_with("AND name = $1"));
    }

    #[test]
    fn multiple_sort_keys_are_joined() {
        let query = SelectQuery::new(BASE)
            .with(sort_fragment(Some(&TestSort::Price)))
            .with(sort_fragment(Some(&TestSort::Name)));

        assert_eq!(
            render(query),
            "SELECT * FROM products WHERE 1=1 ORDER BY price, name"
        );
    }
}
