use leptos::IntoView;

/// Renders a view to static HTML.
pub fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
