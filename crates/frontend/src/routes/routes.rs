use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::catalog::ui::details::ProductPage;
use crate::domain::catalog::ui::list::CollectionPage;
use crate::domain::contact::ui::form::ContactPage;
use crate::layout::{ConfirmModal, Shell, Toast};

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Des objets en bois, faits pour durer"</h1>
            <p>
                "Chaque pièce sort de l’atelier finie à la main, dans des essences
                choisies pour leur grain et leur tenue au quotidien."
            </p>
            <p class="hero__actions">
                <a class="btn btn-primary" href="/collection">"Découvrir la collection"</a>
                <a class="btn btn-outline" href="/contact">"Nous écrire"</a>
            </p>
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="card">
            <p><strong>"Page introuvable."</strong></p>
            <p><a href="/">"Retour à l’accueil"</a></p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/collection") view=CollectionPage />
                    <Route path=path!("/product") view=ProductPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
            <Toast />
            <ConfirmModal />
        </Router>
    }
}
