/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8080 (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Clave de localStorage con el bearer token (string crudo)
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Tamaño de página fijo de las listas de reclamaciones
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Ruta de la pantalla de login
pub const LOGIN_PATH: &str = "/login";

/// Dashboard (lista de reclamaciones activas)
pub const HOME_PATH: &str = "/";

/// Espera antes de redirigir al login tras un logout forzado
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 100;

// Mensajes visibles para el usuario (el producto está en portugués)
pub const MSG_SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
pub const MSG_FETCH_COMPLAINTS_FAILED: &str = "Erro ao buscar reclamações.";
pub const MSG_FETCH_DELETED_FAILED: &str = "Erro ao carregar reclamações apagadas.";
pub const MSG_LOGIN_FAILED: &str = "Erro ao logar";
pub const MSG_REGISTER_FAILED: &str = "Erro ao registrar.";
pub const MSG_REGISTER_OK: &str = "Registro realizado com sucesso!";
pub const MSG_CPF_TAKEN: &str = "CPF já cadastrado!";
pub const MSG_EMAIL_TAKEN: &str = "Email já cadastrado!";
pub const MSG_CPF_INVALID: &str = "CPF Inválido!";
pub const MSG_CREATE_COMPLAINT_FAILED: &str = "Erro ao criar reclamação";
