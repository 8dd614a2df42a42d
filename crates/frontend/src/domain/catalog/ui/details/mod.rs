use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::domain::catalog::model::fetch_products;
use crate::shared::components::ui::Badge;
use crate::shared::dom::set_document_title;
use crate::shared::format::{format_dimensions, format_price_eur};

const FALLBACK_LONG_DESCRIPTION: &str = "Ce modèle met en valeur les caractéristiques naturelles du bois et une finition durable, pensée pour un usage quotidien.";
const FALLBACK_FEATURES: &str = "Bois sélectionné, finition soignée, conçu pour durer.";
const FALLBACK_CARE: &str = "Éviter l’eau et l’humidité, nettoyer au chiffon doux.";

/// Outcome of resolving the `id` query parameter against the catalog. Each
/// failure renders its own card instead of the product view.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    NoId,
    Unavailable,
    NotFound(String),
    Found(Box<Product>),
}

/// Classifies a detail-page request. Missing identifier, failed load and
/// unknown identifier are distinct terminal states.
pub fn resolve(id: Option<&str>, fetched: Result<Vec<Product>, String>) -> DetailState {
    let Some(id) = id.filter(|v| !v.is_empty()) else {
        return DetailState::NoId;
    };
    match fetched {
        Err(_) => DetailState::Unavailable,
        Ok(products) => products
            .into_iter()
            .find(|p| p.id == id)
            .map(|p| DetailState::Found(Box::new(p)))
            .unwrap_or_else(|| DetailState::NotFound(id.to_string())),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductPage() -> impl IntoView {
    let query = use_query_map();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let id = query
            .with(|q| q.get("id"))
            .filter(|id| !id.is_empty());
        match id {
            None => set_state.set(DetailState::NoId),
            Some(id) => {
                set_state.set(DetailState::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = fetch_products().await;
                    if let Err(e) = &fetched {
                        log::error!("chargement du catalogue impossible : {e}");
                    }
                    set_state.set(resolve(Some(&id), fetched));
                });
            }
        }
    });

    // Keep the tab title in sync with the resolved product.
    Effect::new(move |_| {
        if let DetailState::Found(product) = state.get() {
            set_document_title(&format!("{} — {} | AEQ", product.wood.label, product.name));
        }
    });

    view! {
        <section
            id="productRoot"
            aria-busy=move || matches!(state.get(), DetailState::Loading).then_some("true")
        >
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="card">
                        <p>"Chargement du produit…"</p>
                    </div>
                }
                .into_any(),
                DetailState::NoId => view! {
                    <div class="card">
                        <p><strong>"Produit introuvable."</strong></p>
                        <p>"Aucun identifiant n’a été fourni dans l’URL."</p>
                    </div>
                }
                .into_any(),
                DetailState::Unavailable => view! {
                    <div class="card">
                        <p><strong>"Impossible de charger les produits."</strong></p>
                        <p>"Réessaie dans quelques instants."</p>
                    </div>
                }
                .into_any(),
                DetailState::NotFound(id) => view! {
                    <div class="card">
                        <p><strong>"Produit introuvable."</strong></p>
                        <p>"L’identifiant " <code>{id}</code> " ne correspond à aucun produit."</p>
                    </div>
                }
                .into_any(),
                DetailState::Found(product) => {
                    view! { <ProductDetailView product=*product /> }.into_any()
                }
            }}
        </section>
    }
}

/// Full product view: media, pricing, long description, origin, dimensions,
/// feature and care lists. Optional sections fall back to a generic sentence
/// or disappear entirely.
#[component]
fn ProductDetailView(product: Product) -> impl IntoView {
    let price = format_price_eur(product.price);
    let details = product.details.clone().unwrap_or_default();
    let badge = product.first_badge().map(str::to_string);

    let long_description = {
        let text = details.long_description.trim();
        if text.is_empty() {
            FALLBACK_LONG_DESCRIPTION.to_string()
        } else {
            text.to_string()
        }
    };

    let origin = details.origin.trim().to_string();
    let origin_view = (!origin.is_empty()).then(|| {
        view! {
            <p class="product-detail__fact"><strong>"Origine : "</strong>{origin.clone()}</p>
        }
    });

    let dimensions_view = details
        .dimensions
        .as_ref()
        .and_then(|d| format_dimensions(d.width_mm, d.thickness_mm))
        .map(|text| {
            view! {
                <p class="product-detail__fact"><strong>"Dimensions : "</strong>{text}</p>
            }
        });

    let features_view = if details.features.is_empty() {
        view! { <p>{FALLBACK_FEATURES}</p> }.into_any()
    } else {
        view! {
            <ul>
                {details
                    .features
                    .iter()
                    .map(|f| view! { <li>{f.clone()}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let care_view = if details.care.is_empty() {
        view! { <p>{FALLBACK_CARE}</p> }.into_any()
    } else {
        view! {
            <ul>
                {details
                    .care
                    .iter()
                    .map(|c| view! { <li>{c.clone()}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <article class="card product-detail" aria-label="Détails du produit">
            <div class="product-detail__top">
                <div class="product-detail__media">
                    <img
                        src=product.image.src.clone()
                        alt=product.image.alt.clone()
                        width=product.image.width
                        height=product.image.height
                        loading="eager"
                    />
                </div>

                <div>
                    <p class="product-eyebrow">{product.wood.label.clone()}</p>
                    <h1 class="product-detail__title">{product.name.clone()}</h1>
                    <p>{product.description.clone()}</p>
                    <p class="price price--large">{price}</p>
                    {badge.map(|b| view! { <p><Badge>{b}</Badge></p> })}
                    <p>
                        <a class="btn btn-outline" href="/collection">"Retour à la collection"</a>
                    </p>
                </div>
            </div>

            <hr class="product-detail__divider" />

            <div class="product-detail__columns">
                <section aria-label="Description détaillée">
                    <h2>"Description détaillée"</h2>
                    <p>{long_description}</p>
                    {origin_view}
                    {dimensions_view}
                </section>

                <section aria-label="Caractéristiques et entretien">
                    <h2>"Caractéristiques"</h2>
                    {features_view}
                    <h2>"Entretien"</h2>
                    {care_view}
                </section>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::aggregate::Wood;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Planche classique".to_string(),
            description: String::new(),
            price: 39.9,
            rank: Some(1),
            wood: Wood {
                key: "chene".to_string(),
                label: "Chêne".to_string(),
            },
            image: Default::default(),
            badges: Vec::new(),
            details: None,
        }
    }

    #[test]
    fn missing_id_wins_over_everything() {
        assert_eq!(resolve(None, Ok(vec![product("a")])), DetailState::NoId);
        assert_eq!(resolve(Some(""), Err("HTTP 500".to_string())), DetailState::NoId);
    }

    #[test]
    fn failed_load_is_unavailable() {
        assert_eq!(
            resolve(Some("a"), Err("HTTP 404".to_string())),
            DetailState::Unavailable
        );
    }

    #[test]
    fn unknown_id_reports_the_requested_id() {
        assert_eq!(
            resolve(Some("xyz"), Ok(vec![product("a")])),
            DetailState::NotFound("xyz".to_string())
        );
    }

    #[test]
    fn exact_match_resolves_the_product() {
        let state = resolve(Some("a"), Ok(vec![product("a"), product("b")]));
        match state {
            DetailState::Found(p) => assert_eq!(p.id, "a"),
            other => panic!("unexpected state: {other:?}"),
        }
    }
}
