// ============================================================================
// REGISTER VIEWMODEL - Alta de usuario
// ============================================================================

use crate::error::ApiError;
use crate::models::RegisterRequest;
use crate::services::{AuthService, NotificationLevel, Platform};
use crate::utils::constants::{
    LOGIN_PATH, MSG_CPF_INVALID, MSG_CPF_TAKEN, MSG_EMAIL_TAKEN, MSG_REGISTER_FAILED,
    MSG_REGISTER_OK,
};

const CPF_DIGITS: usize = 11;

/// Solo los dígitos del CPF (lo que viaja al backend)
pub fn cpf_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Máscara progresiva `000.000.000-00` mientras el usuario escribe
pub fn format_cpf(raw: &str) -> String {
    let digits: String = cpf_digits(raw).chars().take(CPF_DIGITS).collect();
    let n = digits.len();

    match n {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Traduce el error del backend al aviso que ve el usuario
pub fn register_error_message(error: &ApiError) -> String {
    let Some(message) = error.server_message() else {
        return MSG_REGISTER_FAILED.to_string();
    };

    let lower = message.to_lowercase();
    if lower.contains("cpf já cadastrado") {
        MSG_CPF_TAKEN.to_string()
    } else if lower.contains("email") {
        MSG_EMAIL_TAKEN.to_string()
    } else if lower.contains("cpf inválido") {
        MSG_CPF_INVALID.to_string()
    } else {
        message.to_string()
    }
}

pub struct RegisterViewModel {
    auth: AuthService,
    platform: Platform,
}

impl RegisterViewModel {
    pub fn new(auth: AuthService, platform: Platform) -> Self {
        Self { auth, platform }
    }

    /// Registra y lleva al login. El resultado también se avisa por notificación.
    pub async fn register(
        &self,
        name: &str,
        cpf: &str,
        email: &str,
        password: &str,
    ) -> Result<(), String> {
        let request = RegisterRequest {
            name: name.trim().to_string(),
            cpf: cpf_digits(cpf),
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        match self.auth.register(&request).await {
            Ok(()) => {
                log::info!("✅ Usuario registrado");
                self.platform
                    .notifier
                    .notify(NotificationLevel::Success, MSG_REGISTER_OK);
                self.platform.navigator.redirect(LOGIN_PATH);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error en registro: {}", e);
                let message = register_error_message(&e);
                self.platform.notifier.notify(NotificationLevel::Error, &message);
                Err(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ApiClient, HttpMethod};
    use crate::testing::{FakeTransport, TestPlatform};
    use futures::executor::block_on;
    use serde_json::{json, Value};

    fn http(message: &str) -> ApiError {
        ApiError::Http { status: 400, message: Some(message.to_string()) }
    }

    #[test]
    fn cpf_mask_grows_with_input() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("123.456.789-0199"), "123.456.789-01");
        assert_eq!(cpf_digits("123.456.789-01"), "12345678901");
    }

    #[test]
    fn backend_messages_are_mapped() {
        assert_eq!(register_error_message(&http("CPF já cadastrado")), MSG_CPF_TAKEN);
        assert_eq!(register_error_message(&http("Email already in use")), MSG_EMAIL_TAKEN);
        assert_eq!(register_error_message(&http("CPF inválido!")), MSG_CPF_INVALID);
        assert_eq!(register_error_message(&http("Senha fraca")), "Senha fraca");
        assert_eq!(
            register_error_message(&ApiError::Network("offline".into())),
            MSG_REGISTER_FAILED
        );
    }

    #[test]
    fn register_sends_digits_and_goes_to_login() {
        let transport = FakeTransport::new();
        let platform = TestPlatform::at("/register");
        let vm = RegisterViewModel::new(
            AuthService::new(ApiClient::new(transport.clone())),
            platform.platform(),
        );
        transport.respond(HttpMethod::Post, "/users/register", 201, Value::Null);

        block_on(vm.register("Ana", "123.456.789-01", "ana@example.com", "segredo")).unwrap();

        let body = transport.requests_to("/users/register")[0].body.clone();
        assert_eq!(
            body,
            Some(json!({
                "name": "Ana",
                "cpf": "12345678901",
                "email": "ana@example.com",
                "password": "segredo"
            }))
        );
        assert_eq!(platform.redirects(), vec![LOGIN_PATH.to_string()]);
        assert_eq!(
            platform.notifications(),
            vec![(NotificationLevel::Success, MSG_REGISTER_OK.to_string())]
        );
    }

    #[test]
    fn failed_register_notifies_and_stays() {
        let transport = FakeTransport::new();
        let platform = TestPlatform::at("/register");
        let vm = RegisterViewModel::new(
            AuthService::new(ApiClient::new(transport.clone())),
            platform.platform(),
        );
        transport.respond(
            HttpMethod::Post,
            "/users/register",
            409,
            json!({"message": "Cpf já cadastrado"}),
        );

        let err = block_on(vm.register("Ana", "12345678901", "ana@example.com", "x")).unwrap_err();

        assert_eq!(err, MSG_CPF_TAKEN);
        assert!(platform.redirects().is_empty());
        assert_eq!(
            platform.notifications(),
            vec![(NotificationLevel::Error, MSG_CPF_TAKEN.to_string())]
        );
    }
}
