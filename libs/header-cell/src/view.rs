use leptos::*;

use shared_utils::render_html;

use crate::models::{Header, NavItem, NavKind, APP_TITLE};

#[component]
pub fn NavItemView(item: NavItem) -> impl IntoView {
    match (item.kind, item.id) {
        (NavKind::Button, Some(id)) => view! { <button class="adminBtn" id=id>{item.label}</button> }.into_view(),
        (NavKind::Button, None) => view! { <button class="adminBtn">{item.label}</button> }.into_view(),
        (NavKind::Link, _) => view! { <a href="#">{item.label}</a> }.into_view(),
    }
}

/// Page header: title plus the role's navigation.
#[component]
pub fn HeaderView(header: Header) -> impl IntoView {
    let items = header
        .items
        .into_iter()
        .map(|item| view! { <NavItemView item=item/> })
        .collect_view();

    view! {
        <header>
            <div class="logo">
                <h1>{APP_TITLE}</h1>
            </div>
            <nav>{items}</nav>
        </header>
    }
}

impl Header {
    pub fn to_html(&self) -> String {
        let header = self.clone();
        render_html(move || view! { <HeaderView header=header/> })
    }
}
