use crate::app::hooks::use_sidebar;
use crate::app::layouts::Sidebar;
use crate::app::pages::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn DashboardLayout() -> Element {
    // Bundled by build.rs
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();
    let sidebar = use_sidebar();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Sidebar {
                active: route.section(),
                visibility: sidebar.visibility,
                on_event: move |event| sidebar.dispatch(event),
            }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
