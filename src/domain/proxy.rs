// Static description of a proxied route: where it forwards and what it says on failure.

pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";
pub const MISSING_TOKEN_MESSAGE: &str = "Token de autenticação não fornecido";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRoute {
    pub name: &'static str,
    pub backend_path: &'static str,
    // Used when the backend gives no message of its own.
    pub fallback_message: &'static str,
}

pub const FORGOT_PASSWORD: ProxyRoute = ProxyRoute {
    name: "forgot_password",
    backend_path: "/api/auth/forgot-password",
    fallback_message: "Erro ao enviar email de recuperação",
};

pub const VERIFY_RESET_TOKEN: ProxyRoute = ProxyRoute {
    name: "verify_reset_token",
    backend_path: "/api/auth/verify-reset-token",
    fallback_message: "Token inválido ou expirado",
};

pub const RESET_PASSWORD: ProxyRoute = ProxyRoute {
    name: "reset_password",
    backend_path: "/api/auth/reset-password",
    fallback_message: "Erro ao redefinir senha",
};

pub const STAFF_NOTICES: ProxyRoute = ProxyRoute {
    name: "staff_notices",
    backend_path: "/api/home/staff/notices",
    fallback_message: "Erro ao buscar avisos",
};
