use crate::shared::dom::current_year;
use leptos::prelude::*;

/// Site chrome shared by every page: header with the main navigation,
/// page content, footer with the current year.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a href="/" class="site-logo">"AEQ — L’atelier du bois"</a>
                <nav class="site-nav" aria-label="Navigation principale">
                    <a href="/collection" class="site-nav__link">"Collection"</a>
                    <a href="/contact" class="site-nav__link">"Contact"</a>
                </nav>
            </div>
        </header>

        <main class="container site-main">
            {children()}
        </main>

        <footer class="site-footer">
            <div class="container">
                <p>"© " <span id="year">{current_year()}</span> " AEQ — pièces en bois façonnées à la main."</p>
            </div>
        </footer>
    }
}
