use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` as if the browser were at `url`, so router hooks (params, query,
/// navigate) resolve inside the view.
pub fn render_at<F, N>(url: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let url = url.to_string();
    render_to_string(move || {
        provide_context(leptos_router::RouterIntegrationContext::new(
            leptos_router::ServerIntegration { path: url },
        ));
        view()
    })
}
