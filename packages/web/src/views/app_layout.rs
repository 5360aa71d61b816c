use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let navigate = move |tab| {
        nav.push(Route::for_tab(tab));
    };

    rsx! {
        ui::views::AppLayoutView {
            active: route.tab(),
            on_navigate: navigate,
            Outlet::<Route> {}
        }
    }
}
