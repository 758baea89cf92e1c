use crate::state::auth::{self, use_auth};
use leptos::*;

pub const APP_NAME: &str = "ACME Admin";

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "ダッシュボード"),
    ("/users", "ユーザー"),
    ("/todos", "ToDo"),
    ("/audit-logs", "監査ログ"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name.clone())
            .unwrap_or_default()
    };
    let username = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.username.clone())
            .unwrap_or_default()
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6">
                <div class="flex justify-between items-center h-14">
                    <h1 class="text-lg font-semibold text-fg">{APP_NAME}</h1>
                    <div class="relative">
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-haspopup="menu"
                        >
                            <span class="inline-flex h-7 w-7 items-center justify-center rounded-full bg-surface-muted text-xs font-semibold">
                                {move || display_name().chars().next().map(String::from).unwrap_or_default()}
                            </span>
                            <span>{display_name}</span>
                        </button>
                        <Show when=move || menu_open.get()>
                            <div
                                class="absolute right-0 mt-2 w-48 rounded-md bg-surface-elevated border border-border shadow-lg py-1 z-50"
                                role="menu"
                            >
                                <p class="px-4 py-2 text-xs text-fg-muted">{username}</p>
                                <button
                                    type="button"
                                    role="menuitem"
                                    class="w-full text-left px-4 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                                    on:click=on_logout
                                    disabled=move || logout_pending.get()
                                >
                                    "ログアウト"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="w-52 shrink-0 border-r border-border bg-surface-elevated hidden md:block">
            <ul class="p-3 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=*href
                                    class="block rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Authenticated shell: header with user menu beside the navigation sidebar.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <Header/>
            <div class="flex flex-1 min-h-0">
                <Sidebar/>
                <main class="flex-1 min-w-0">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Placeholder rows shown before the first page of a list resolves.
#[component]
pub fn ListSkeleton(#[prop(default = 8)] rows: usize) -> impl IntoView {
    view! {
        <div class="flex-1" aria-busy="true">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="border-b border-border px-3 py-3 space-y-2 animate-pulse">
                            <div class="h-3 w-2/3 rounded bg-surface-muted"></div>
                            <div class="h-2 w-1/3 rounded bg-surface-muted"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_shell_and_children() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains(APP_NAME));
        assert!(html.contains("管理者"));
        assert!(html.contains("child"));
        for (href, label) in NAV_ITEMS {
            assert!(html.contains(href));
            assert!(html.contains(label));
        }
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <ListSkeleton rows=2 />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("aria-busy=\"true\""));
    }
}
