pub mod state;

use contracts::domain::product::aggregate::Product;
use contracts::domain::product::catalog::{self, DEFAULT_MAX_PRICE};
use leptos::prelude::*;

use crate::domain::catalog::model::fetch_products;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::format::format_price_eur;
use crate::shared::icons::icon;
use self::state::{create_state, CollectionFilterState};

/// Lifecycle of the catalog snapshot for this page view.
#[derive(Clone, Debug)]
enum CatalogState {
    Loading,
    Unavailable,
    Ready(Vec<Product>),
}

#[component]
#[allow(non_snake_case)]
pub fn CollectionPage() -> impl IntoView {
    let (catalog_state, set_catalog_state) = signal(CatalogState::Loading);
    let filter_state = create_state();

    // One fetch per page view; the snapshot is read-only afterwards.
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_products().await {
            Ok(mut products) => {
                catalog::sort_by_rank(&mut products);
                set_catalog_state.set(CatalogState::Ready(products));
            }
            Err(e) => {
                log::error!("chargement du catalogue impossible : {e}");
                set_catalog_state.set(CatalogState::Unavailable);
            }
        }
    });

    // Wood filter options come from the loaded catalog, first-seen order.
    let wood_options = Memo::new(move |_| {
        let mut options = vec![(String::new(), "Toutes les essences".to_string())];
        if let CatalogState::Ready(products) = catalog_state.get() {
            for p in &products {
                if !options.iter().any(|(key, _)| *key == p.wood.key) {
                    options.push((p.wood.key.clone(), p.wood.label.clone()));
                }
            }
        }
        options
    });

    let sort_options = Signal::derive(|| {
        vec![
            ("populaire".to_string(), "Populaire".to_string()),
            ("prix-asc".to_string(), "Prix croissant".to_string()),
            ("prix-desc".to_string(), "Prix décroissant".to_string()),
        ]
    });

    // Derived view: recomputed on every filter/sort change, never mutates
    // the snapshot.
    let visible = Memo::new(move |_| match catalog_state.get() {
        CatalogState::Ready(products) => catalog::apply(&products, &filter_state.get().to_params()),
        _ => Vec::new(),
    });

    let on_wood_change = Callback::new(move |value: String| {
        filter_state.update(|s| s.wood_key = value);
    });

    let on_sort_change = Callback::new(move |value: String| {
        filter_state.update(|s| s.sort_key = value);
    });

    let on_reset = Callback::new(move |_: leptos::ev::MouseEvent| {
        filter_state.set(CollectionFilterState::default());
    });

    view! {
        <section class="collection">
            <h1>"La collection"</h1>
            <p class="collection__intro">
                "Planches, plateaux et accessoires façonnés dans des bois choisis."
            </p>

            <form
                id="filtersForm"
                class="filters"
                on:submit=move |ev| ev.prevent_default()
            >
                <Select
                    label="Essence"
                    id="bois"
                    value=Signal::derive(move || filter_state.get().wood_key.clone())
                    on_change=on_wood_change
                    options=wood_options
                />

                <div class="form__group">
                    <label class="form__label" for="prixMax">"Prix maximum"</label>
                    <input
                        id="prixMax"
                        class="form__range"
                        type="range"
                        min="0"
                        max="100"
                        step="1"
                        prop:value=move || format!("{:.0}", filter_state.get().max_price)
                        on:input=move |ev| {
                            let value = event_target_value(&ev)
                                .parse::<f64>()
                                .unwrap_or(DEFAULT_MAX_PRICE);
                            filter_state.update(|s| s.max_price = value);
                        }
                    />
                    <p class="filters__price-out">
                        <output id="prixMaxValeur" for="prixMax">
                            {move || format!("{:.0}", filter_state.get().max_price)}
                        </output>
                        " €"
                    </p>
                </div>

                <Select
                    label="Trier par"
                    id="tri"
                    value=Signal::derive(move || filter_state.get().sort_key.clone())
                    on_change=on_sort_change
                    options=sort_options
                />

                <div class="filters__actions">
                    <Button button_type="submit">"Filtrer"</Button>
                    <Button variant="ghost" on_click=on_reset>"Réinitialiser"</Button>
                </div>
            </form>

            {move || match catalog_state.get() {
                CatalogState::Loading => view! {
                    <div id="productsGrid" class="grid" role="list" aria-busy="true"></div>
                }
                .into_any(),
                CatalogState::Unavailable => view! {
                    <div class="card">
                        <p><strong>"Impossible de charger les produits."</strong></p>
                        <p>"Réessaie dans quelques instants."</p>
                    </div>
                }
                .into_any(),
                CatalogState::Ready(_) => view! {
                    <div
                        id="productsGrid"
                        class="grid"
                        role="list"
                        aria-label=move || format!("Liste de {} produit(s)", visible.get().len())
                    >
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect_view()
                        }}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

/// One display card of the collection grid.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let price = format_price_eur(product.price);
    let price_label = format!("Prix {}", price);
    let href = format!("/product?id={}", urlencoding::encode(&product.id));
    let cta_label = format!("Voir le produit {} {}", product.wood.label, product.name);
    let badge = product.first_badge().map(str::to_string);

    view! {
        <article class="product-card" role="listitem">
            <div class="product-media">
                <img
                    src=product.image.src.clone()
                    alt=product.image.alt.clone()
                    loading="lazy"
                    width=product.image.width
                    height=product.image.height
                />
            </div>

            <div class="product-body">
                <p class="product-eyebrow">{product.wood.label.clone()}</p>
                <h3 class="product-title">{product.name.clone()}</h3>
                <p class="product-desc">{product.description.clone()}</p>

                <div class="product-meta">
                    <span class="price" aria-label=price_label>{price}</span>
                    {badge.map(|b| view! { <Badge>{b}</Badge> })}
                </div>

                <a class="btn btn-outline product-cta" href=href aria-label=cta_label>
                    "Voir"
                    {icon("arrow-right")}
                </a>
            </div>
        </article>
    }
}
