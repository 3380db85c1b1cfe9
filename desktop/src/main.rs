#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;

use ui::views::{Home, Ingredients, Routines, Shelf, Wishlist};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/routines")]
    Routines {},
    #[route("/shelf")]
    Shelf {},
    #[route("/wishlist")]
    Wishlist {},
    #[route("/ingredients")]
    Ingredients {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Sproutglow – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_routines(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Routines {}, "{label}" })
}
fn nav_shelf(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Shelf {}, "{label}" })
}
fn nav_wishlist(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Wishlist {}, "{label}" })
}
fn nav_ingredients(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Ingredients {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code. AppNavbar updates it via context on
    // language selection; the keyed wrapper below remounts the routed
    // subtree so every open view picks up the new language.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        routines: nav_routines,
        shelf: nav_shelf,
        wishlist: nav_wishlist,
        ingredients: nav_ingredients,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
