use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::{ActivityLog, AppStateProvider, NavTab};
use views::{AppLayout, Explore, Home, NotFound, Play, Settings, Translate, Vocabulary};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/explore")]
        Explore {},
        #[route("/translate")]
        Translate {},
        #[route("/play")]
        Play {},
        #[route("/vocabulary")]
        Vocabulary {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The navigation tab to highlight on this page.
    fn tab(&self) -> Option<NavTab> {
        match self {
            Route::Home {} | Route::Explore {} => Some(NavTab::Explore),
            Route::Translate {} => Some(NavTab::Translate),
            Route::Play {} | Route::Vocabulary {} => Some(NavTab::Play),
            Route::Settings {} => Some(NavTab::Settings),
            Route::NotFound { .. } => None,
        }
    }

    fn for_tab(tab: NavTab) -> Self {
        match tab {
            NavTab::Explore => Route::Home {},
            NavTab::Translate => Route::Translate {},
            NavTab::Play => Route::Play {},
            NavTab::Settings => Route::Settings {},
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AppStateProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_round_trips_through_its_route() {
        for tab in NavTab::ALL {
            assert_eq!(Route::for_tab(tab).tab(), Some(tab));
        }
    }

    #[test]
    fn test_vocabulary_highlights_play() {
        assert_eq!(Route::Vocabulary {}.tab(), Some(NavTab::Play));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/nowhere/at-all".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["nowhere".to_string(), "at-all".to_string()],
            }
        );
        assert_eq!(route.tab(), None);
    }

    #[test]
    fn test_explore_alias() {
        let route: Route = "/explore".parse().unwrap();
        assert_eq!(route, Route::Explore {});
        assert_eq!(route.tab(), Some(NavTab::Explore));
    }
}
