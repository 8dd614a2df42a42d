use contracts::domain::product::catalog::{FilterParams, SortMode, DEFAULT_MAX_PRICE};
use leptos::prelude::*;

/// Filter and sort controls of the collection page, as raw control values.
#[derive(Clone, Debug)]
pub struct CollectionFilterState {
    /// Selected wood key; empty keeps every species.
    pub wood_key: String,
    pub max_price: f64,
    /// Sort-select value ("populaire", "prix-asc", "prix-desc").
    pub sort_key: String,
}

impl Default for CollectionFilterState {
    fn default() -> Self {
        Self {
            wood_key: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            sort_key: SortMode::Popularity.key().to_string(),
        }
    }
}

impl CollectionFilterState {
    pub fn to_params(&self) -> FilterParams {
        FilterParams {
            wood_key: (!self.wood_key.is_empty()).then(|| self.wood_key.clone()),
            max_price: self.max_price,
            sort_mode: SortMode::from_key(&self.sort_key),
        }
    }
}

pub fn create_state() -> RwSignal<CollectionFilterState> {
    RwSignal::new(CollectionFilterState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_maps_to_default_params() {
        assert_eq!(
            CollectionFilterState::default().to_params(),
            FilterParams::default()
        );
    }

    #[test]
    fn empty_wood_key_means_no_filter() {
        let state = CollectionFilterState {
            wood_key: String::new(),
            ..Default::default()
        };
        assert_eq!(state.to_params().wood_key, None);

        let state = CollectionFilterState {
            wood_key: "noyer".to_string(),
            ..Default::default()
        };
        assert_eq!(state.to_params().wood_key.as_deref(), Some("noyer"));
    }
}
