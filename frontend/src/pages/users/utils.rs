use validator::ValidateEmail;

use crate::api::{CreateUser, UpdateUser, User, UserRole};

const PASSWORD_MIN_CHARS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
}

impl UserFormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.display_name.is_none()
            && self.password.is_none()
    }
}

fn check_username(username: &str) -> Option<String> {
    username
        .is_empty()
        .then(|| "ユーザー名を入力してください".to_string())
}

fn check_email(email: &str) -> Option<String> {
    if email.to_string().validate_email() {
        None
    } else {
        Some("有効なメールアドレスを入力してください".into())
    }
}

fn check_display_name(display_name: &str) -> Option<String> {
    if display_name.trim().is_empty() {
        Some("表示名を入力してください".into())
    } else {
        None
    }
}

/// Edit form for an existing user. Username and password are fixed after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEditFormState {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

impl UserEditFormState {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
        }
    }

    pub fn validate(&self) -> Result<UpdateUser, UserFormErrors> {
        let errors = UserFormErrors {
            email: check_email(self.email.trim()),
            display_name: check_display_name(&self.display_name),
            ..UserFormErrors::default()
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdateUser {
            email: Some(self.email.trim().to_string()),
            role: Some(self.role),
            display_name: Some(self.display_name.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreateFormState {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub role: UserRole,
}

impl Default for UserCreateFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            display_name: String::new(),
            password: String::new(),
            role: UserRole::Member,
        }
    }
}

impl UserCreateFormState {
    pub fn validate(&self) -> Result<CreateUser, UserFormErrors> {
        let username = self.username.trim();
        let errors = UserFormErrors {
            username: check_username(username),
            email: check_email(self.email.trim()),
            display_name: check_display_name(&self.display_name),
            password: (self.password.chars().count() < PASSWORD_MIN_CHARS)
                .then(|| "パスワードは4文字以上で入力してください".to_string()),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateUser {
            username: username.to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            display_name: self.display_name.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Select options for the role field, in display order.
pub fn role_options() -> Vec<(String, String)> {
    UserRole::ALL
        .iter()
        .map(|role| (role.as_str().to_string(), role.label().to_string()))
        .collect()
}

pub fn delete_confirmation_message(user: &User) -> String {
    format!(
        "「{}」を削除してもよろしいですか？この操作は元に戻せません。",
        user.display_name
    )
}
