use super::aggregate::Product;

/// Price ceiling applied when the slider has not been touched.
pub const DEFAULT_MAX_PRICE: f64 = 100.0;

/// Ordering applied to the filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Ascending display rank, the baseline order of the catalog.
    #[default]
    Popularity,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    /// Maps a sort-select value to a mode; anything unknown is popularity.
    pub fn from_key(key: &str) -> Self {
        match key {
            "prix-asc" => SortMode::PriceAsc,
            "prix-desc" => SortMode::PriceDesc,
            _ => SortMode::Popularity,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Popularity => "populaire",
            SortMode::PriceAsc => "prix-asc",
            SortMode::PriceDesc => "prix-desc",
        }
    }
}

/// Transient filter/sort parameters coming from the collection page controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Wood filter key; `None` or empty keeps every species.
    pub wood_key: Option<String>,
    pub max_price: f64,
    pub sort_mode: SortMode,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            wood_key: None,
            max_price: DEFAULT_MAX_PRICE,
            sort_mode: SortMode::Popularity,
        }
    }
}

/// Sorts the freshly loaded catalog once by ascending rank. This is the
/// baseline order before any user filtering.
pub fn sort_by_rank(products: &mut [Product]) {
    products.sort_by_key(Product::display_rank);
}

/// Derives the visible product list from the catalog snapshot.
///
/// Keeps a product iff its wood matches the requested key (or no key is
/// requested) and its price does not exceed the ceiling, then orders the
/// result. The input slice is never mutated, and the sort is stable, so two
/// products with equal keys keep their catalog order.
pub fn apply(catalog: &[Product], params: &FilterParams) -> Vec<Product> {
    let mut list: Vec<Product> = catalog
        .iter()
        .filter(|p| {
            let wood_ok = params
                .wood_key
                .as_deref()
                .map_or(true, |key| key.is_empty() || p.wood.key == key);
            wood_ok && p.price <= params.max_price
        })
        .cloned()
        .collect();

    match params.sort_mode {
        SortMode::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Popularity => list.sort_by_key(Product::display_rank),
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::Wood;

    fn product(id: &str, wood_key: &str, price: f64, rank: Option<u32>) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            rank,
            wood: Wood {
                key: wood_key.to_string(),
                label: wood_key.to_string(),
            },
            image: Default::default(),
            badges: Vec::new(),
            details: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("a", "chene", 10.0, Some(2)),
            product("b", "noyer", 50.0, Some(1)),
            product("c", "chene", 99.0, Some(3)),
        ]
    }

    fn ids(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn popularity_orders_by_rank() {
        let out = apply(&fixture(), &FilterParams::default());
        assert_eq!(ids(&out), ["b", "a", "c"]);
    }

    #[test]
    fn price_asc_and_desc() {
        let asc = apply(
            &fixture(),
            &FilterParams {
                sort_mode: SortMode::PriceAsc,
                ..Default::default()
            },
        );
        assert_eq!(ids(&asc), ["a", "b", "c"]);

        let desc = apply(
            &fixture(),
            &FilterParams {
                sort_mode: SortMode::PriceDesc,
                ..Default::default()
            },
        );
        assert_eq!(ids(&desc), ["c", "b", "a"]);
    }

    #[test]
    fn price_ceiling_filters() {
        for mode in [SortMode::Popularity, SortMode::PriceAsc, SortMode::PriceDesc] {
            let out = apply(
                &fixture(),
                &FilterParams {
                    max_price: 40.0,
                    sort_mode: mode,
                    ..Default::default()
                },
            );
            assert_eq!(ids(&out), ["a"]);
        }
    }

    #[test]
    fn wood_filter_keeps_matching_species_only() {
        let out = apply(
            &fixture(),
            &FilterParams {
                wood_key: Some("chene".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), ["a", "c"]);

        let all = apply(
            &fixture(),
            &FilterParams {
                wood_key: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn missing_rank_sorts_last() {
        let mut catalog = fixture();
        catalog.push(product("d", "olivier", 5.0, None));
        let out = apply(&catalog, &FilterParams::default());
        assert_eq!(ids(&out), ["b", "a", "c", "d"]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let catalog = vec![
            product("first", "chene", 25.0, Some(1)),
            product("second", "noyer", 25.0, Some(1)),
        ];
        let by_rank = apply(&catalog, &FilterParams::default());
        assert_eq!(ids(&by_rank), ["first", "second"]);

        let by_price = apply(
            &catalog,
            &FilterParams {
                sort_mode: SortMode::PriceAsc,
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_price), ["first", "second"]);
    }

    #[test]
    fn apply_is_idempotent_and_leaves_input_untouched() {
        let catalog = fixture();
        let params = FilterParams {
            wood_key: Some("chene".to_string()),
            max_price: 60.0,
            sort_mode: SortMode::PriceDesc,
        };
        let once = apply(&catalog, &params);
        let twice = apply(&catalog, &params);
        assert_eq!(once, twice);
        assert_eq!(ids(&catalog), ["a", "b", "c"]);
    }

    #[test]
    fn sort_mode_key_round_trip() {
        for mode in [SortMode::Popularity, SortMode::PriceAsc, SortMode::PriceDesc] {
            assert_eq!(SortMode::from_key(mode.key()), mode);
        }
        assert_eq!(SortMode::from_key("n'importe quoi"), SortMode::Popularity);
    }
}
