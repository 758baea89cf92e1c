use leptos::*;

/// Fixed-width list column beside a scrollable detail pane.
#[component]
pub fn MasterDetailLayout(list: View, detail: View) -> impl IntoView {
    view! {
        <div class="flex h-[calc(100vh-3.5rem)]">
            <div class="w-80 shrink-0 overflow-auto border-r border-border flex flex-col">{list}</div>
            <div class="flex-1 overflow-auto">{detail}</div>
        </div>
    }
}
