use dioxus::prelude::*;
use theme_switch::utils::ThemeState;
use theme_switch::views::Home;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(ThemeState::default);
    use_context_provider(|| theme);

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Home {}
        }
    }
}
