//! User-facing copy (es-MX)
//!
//! Grouped by screen. View-models only read the `login` and `benevits`
//! groups; the rest is consumed by the egui views.

pub mod login {
    pub const TITLE: &str = "Bienvenido";
    pub const SUBTITLE: &str = "Inicia sesión para ver tus Benevits";
    pub const USERNAME_PLACEHOLDER: &str = "Número de seguridad social";
    pub const PASSWORD_PLACEHOLDER: &str = "Contraseña";
    pub const BUTTON: &str = "Iniciar sesión";

    pub const USERNAME_ERROR: &str = "El usuario debe tener 11 dígitos";
    pub const PASSWORD_ERROR: &str = "La contraseña debe tener al menos 8 caracteres";
    pub const LOGIN_FAILED: &str = "Usuario o contraseña incorrectos";
    pub const NO_INTERNET: &str = "No hay conexión a internet";
    pub const TIMEOUT: &str = "La solicitud tardó demasiado tiempo";
    pub const AUTH_TOKEN_ERROR: &str = "No se recibió el token de autenticación";
    pub const SESSION_SAVE_ERROR: &str = "No se pudo guardar la sesión";
    pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado";
}

pub mod benevits {
    pub const MY_BENEVITS_TITLE: &str = "Mis Benevits";
    pub const MY_BENEVITS_CLOSE: &str = "Cerrar";
    pub const MY_BENEVITS_EMPTY_TITLE: &str = "Aún no tienes Benevits";
    pub const MY_BENEVITS_EMPTY_SUBTITLE: &str = "Solicita un Benevit para verlo aquí";

    pub const SESSION_EXPIRED: &str = "Sesión expirada. Por favor inicia sesión nuevamente";
    pub const NO_INTERNET: &str = super::login::NO_INTERNET;
    pub const TIMEOUT: &str = super::login::TIMEOUT;

    pub const REQUEST_SUCCESS: &str = "Solicitud enviada";
}

pub mod home {
    pub const TITLE: &str = "Benevits";
    pub const WELCOME: &str = "Hola, socio";
    pub const SEARCH_PLACEHOLDER: &str = "Buscar Benevits";

    pub const LOGOUT_ALERT_TITLE: &str = "Cerrar sesión";
    pub const LOGOUT_ALERT_MESSAGE: &str = "¿Seguro que deseas cerrar sesión?";
    pub const LOGOUT_CANCEL: &str = "Cancelar";
    pub const LOGOUT_CONFIRM: &str = "Cerrar sesión";

    pub const ERROR_TITLE: &str = "Algo salió mal";
    pub const RETRY: &str = "Reintentar";
    pub const EMPTY_SEARCH_TITLE: &str = "Sin resultados";
    pub const EMPTY_SEARCH_MESSAGE: &str = "Intenta con otra búsqueda";
    pub const REQUEST: &str = "Lo quiero";
    pub const LOCKED: &str = "Bloqueado";

    pub const MENU_SECTION_MAIN: &str = "Principal";
    pub const MENU_SECTION_ACCOUNT: &str = "Cuenta";
    pub const MENU_HOME: &str = "Inicio";
    pub const MENU_MY_BENEVITS: &str = "Mis Benevits";
    pub const MENU_LOGOUT: &str = "Cerrar sesión";
    pub const MENU_FOOTER: &str = "Socio Infonavit";
}
