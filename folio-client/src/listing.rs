use std::{cmp::Reverse, fmt, str::FromStr, sync::Arc};

use crate::api::{Portfolio, PortfolioId, ALL_CATEGORIES};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    /// Keep the data source's order
    #[default]
    Recent,
    Popular,
    Reviews,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Recent,
        SortKey::Popular,
        SortKey::Reviews,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::Reviews => "reviews",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "Most Recent",
            SortKey::Popular => "Most Viewed",
            SortKey::Reviews => "Most Reviews",
            SortKey::Rating => "Highest Rated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<SortKey, String> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key {s:?}"))
    }
}

pub trait SortExt {
    fn sort(&self, portfolios: &mut [Arc<Portfolio>]);
}

impl SortExt for SortKey {
    /// Stable: portfolios comparing equal keep their relative order
    fn sort(&self, portfolios: &mut [Arc<Portfolio>]) {
        match self {
            SortKey::Recent => (),
            SortKey::Popular => portfolios.sort_by_key(|p| Reverse(p.view_count)),
            SortKey::Reviews => portfolios.sort_by_key(|p| Reverse(p.review_count)),
            SortKey::Rating => portfolios.sort_by(|a, b| {
                let (a, b) = (a.rating.unwrap_or(0.), b.rating.unwrap_or(0.));
                b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingQuery {
    pub query: String,
    pub category: String,
    pub sort: SortKey,
}

impl Default for ListingQuery {
    fn default() -> ListingQuery {
        ListingQuery {
            query: String::new(),
            category: String::from(ALL_CATEGORIES),
            sort: SortKey::Recent,
        }
    }
}

impl ListingQuery {
    pub fn matches(&self, p: &Portfolio) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = p.title.to_lowercase().contains(&query)
            || p.author.name.to_lowercase().contains(&query);
        let matches_category = self.category == ALL_CATEGORIES || p.category == self.category;
        matches_search && matches_category
    }
}

/// Returns the portfolios matching `q`, in the order `q.sort` asks for
pub fn search(portfolios: &[Arc<Portfolio>], q: &ListingQuery) -> Vec<Arc<Portfolio>> {
    let mut res = portfolios
        .iter()
        .filter(|p| q.matches(p))
        .cloned()
        .collect::<Vec<_>>();
    q.sort.sort(&mut res);
    res
}

pub fn featured(portfolios: &[Arc<Portfolio>], n: usize) -> Vec<Arc<Portfolio>> {
    portfolios
        .iter()
        .filter(|p| p.featured)
        .take(n)
        .cloned()
        .collect()
}

pub fn find_portfolio(portfolios: &[Arc<Portfolio>], id: &PortfolioId) -> Option<Arc<Portfolio>> {
    portfolios.iter().find(|p| p.id == *id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Author;

    fn portfolio(id: &str, title: &str, author: &str, category: &str) -> Portfolio {
        Portfolio {
            id: PortfolioId::from(id),
            title: String::from(title),
            author: Author {
                name: String::from(author),
                avatar: None,
                role: String::from("Designer"),
                is_expert: None,
            },
            description: String::new(),
            category: String::from(category),
            thumbnail: String::new(),
            view_count: 0,
            review_count: 0,
            rating: None,
            files: Vec::new(),
            featured: false,
        }
    }

    fn example_portfolios() -> Vec<Arc<Portfolio>> {
        let mut a = portfolio("1", "Brand Identity for Nova", "Emma Wilson", "Branding");
        a.view_count = 5;
        a.review_count = 7;
        a.rating = Some(4.5);
        a.featured = true;
        let mut b = portfolio("2", "Mobile Banking App", "James Park", "UI/UX Design");
        b.view_count = 20;
        b.review_count = 2;
        let mut c = portfolio("3", "Botanical Illustrations", "Nova Rivera", "Illustration");
        c.view_count = 1;
        c.review_count = 7;
        c.rating = Some(4.9);
        c.featured = true;
        vec![Arc::new(a), Arc::new(b), Arc::new(c)]
    }

    fn ids(ps: &[Arc<Portfolio>]) -> Vec<&str> {
        ps.iter().map(|p| &p.id.0 as &str).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let ps = example_portfolios();
        assert_eq!(search(&ps, &ListingQuery::default()), ps);
    }

    #[test]
    fn query_matches_title_or_author_case_insensitively() {
        let ps = example_portfolios();
        let q = |s: &str| ListingQuery {
            query: String::from(s),
            ..ListingQuery::default()
        };
        assert_eq!(ids(&search(&ps, &q("BANKING"))), vec!["2"]);
        assert_eq!(ids(&search(&ps, &q("nova"))), vec!["1", "3"]);
        assert_eq!(ids(&search(&ps, &q("park"))), vec!["2"]);
        assert!(search(&ps, &q("photography")).is_empty());
    }

    #[test]
    fn category_must_match_exactly() {
        let ps = example_portfolios();
        let mut q = ListingQuery {
            category: String::from("Branding"),
            ..ListingQuery::default()
        };
        assert_eq!(ids(&search(&ps, &q)), vec!["1"]);
        q.category = String::from("branding");
        assert!(search(&ps, &q).is_empty());
        q.query = String::from("nova");
        q.category = String::from("Illustration");
        assert_eq!(ids(&search(&ps, &q)), vec!["3"]);
    }

    #[test]
    fn sort_popular() {
        let ps = example_portfolios();
        let q = ListingQuery {
            sort: SortKey::Popular,
            ..ListingQuery::default()
        };
        let views = search(&ps, &q)
            .iter()
            .map(|p| p.view_count)
            .collect::<Vec<_>>();
        assert_eq!(views, vec![20, 5, 1]);
    }

    #[test]
    fn sort_reviews_is_stable() {
        let ps = example_portfolios();
        let q = ListingQuery {
            sort: SortKey::Reviews,
            ..ListingQuery::default()
        };
        assert_eq!(ids(&search(&ps, &q)), vec!["1", "3", "2"]);
    }

    #[test]
    fn sort_rating_treats_missing_as_zero() {
        let ps = example_portfolios();
        let q = ListingQuery {
            sort: SortKey::Rating,
            ..ListingQuery::default()
        };
        assert_eq!(ids(&search(&ps, &q)), vec!["3", "1", "2"]);
    }

    #[test]
    fn sort_key_strings() {
        for k in SortKey::ALL {
            assert_eq!(k.as_str().parse::<SortKey>(), Ok(k));
        }
        assert!("newest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Popular.label(), "Most Viewed");
    }

    #[test]
    fn featured_takes_first_n() {
        let ps = example_portfolios();
        assert_eq!(ids(&featured(&ps, 3)), vec!["1", "3"]);
        assert_eq!(ids(&featured(&ps, 1)), vec!["1"]);
    }

    #[test]
    fn find_by_id() {
        let ps = example_portfolios();
        assert_eq!(
            find_portfolio(&ps, &PortfolioId::from("2")).map(|p| p.title.clone()),
            Some(String::from("Mobile Banking App")),
        );
        assert_eq!(find_portfolio(&ps, &PortfolioId::from("42")), None);
    }
}
