use crate::api::LoginRequest;
use leptos::*;

/// Credentials of the seeded administrator, prefilled for local use.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(DEMO_USERNAME.to_string()),
            password: create_rw_signal(DEMO_PASSWORD.to_string()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&username, &password)?;
        Ok(LoginRequest {
            username: username.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("ユーザー名を入力してください".into());
    }
    if password.is_empty() {
        return Err("パスワードを入力してください".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            validate_credentials(" ", "admin"),
            Err("ユーザー名を入力してください".to_string())
        );
        assert_eq!(
            validate_credentials("admin", ""),
            Err("パスワードを入力してください".to_string())
        );
        assert!(validate_credentials("admin", "admin").is_ok());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_is_prefilled_and_trims_username() {
        with_runtime(|| {
            let form = LoginFormState::default();
            assert_eq!(form.username.get_untracked(), "admin");
            form.username.set(" admin ".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.username, "admin");
            assert_eq!(request.password, "admin");
        });
    }
}
