use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::{auth, toast::use_toasts};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (auth_state, _) = auth::use_auth();

    let to_dashboard = navigate.clone();
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => to_dashboard("/dashboard", NavigateOptions::default()),
                Err(err) => {
                    log::info!("login rejected: {}", err);
                    toasts.error_with(
                        "ログインに失敗しました",
                        "ユーザー名またはパスワードが正しくありません",
                    );
                }
            }
        }
    });

    // A saved session that resolves while this page is open skips the form.
    create_effect(move |_| {
        let signed_in = auth_state.with(|state| state.is_authenticated);
        if signed_in && login_action.value().get_untracked().is_none() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_at;
    use leptos_router::Router;

    #[component]
    fn BlankPasswordProbe() -> impl IntoView {
        let vm = use_login_view_model();
        let prefilled = vm.form.password.get_untracked();
        vm.form.password.set(String::new());
        vm.submit();
        view! { <p>{prefilled}" / "{move || vm.error.get()}</p> }
    }

    #[test]
    fn submit_with_blank_password_sets_inline_error() {
        let html = render_at("http://localhost/login", || {
            view! { <Router><BlankPasswordProbe /></Router> }
        });
        assert!(html.contains("admin"));
        assert!(html.contains("パスワードを入力してください"));
    }
}
