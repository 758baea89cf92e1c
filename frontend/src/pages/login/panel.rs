use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            username=vm.form.username
            password=vm.form.password
            error=vm.error.into()
            pending=pending.into()
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_at;
    use leptos_router::Router;

    #[test]
    fn login_panel_renders_prefilled_form() {
        let html = render_at("http://localhost/login", || {
            view! { <Router><LoginPanel /></Router> }
        });
        assert!(html.contains("ACME Admin"));
        assert!(html.contains("管理画面にログインしてください"));
        assert!(html.contains("ログイン"));
        assert!(html.contains("テスト用: admin / admin"));
    }
}
