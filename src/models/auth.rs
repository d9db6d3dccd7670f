use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado (`GET /users/me`).
/// Siempre viene del servidor, nunca del input del cliente.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cpf: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /users/register`. El CPF viaja solo con dígitos.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
}
