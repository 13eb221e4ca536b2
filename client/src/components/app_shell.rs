//! Signed-in page chrome: sidebar, header, and the scrolling content area.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Header/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
