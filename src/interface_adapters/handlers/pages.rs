// Minimal HTML shells for the localized page paths. Rendering lives in the browser bundle.
use crate::interface_adapters::protocol::LoginPageQuery;
use axum::{
    extract::{Path, Query},
    response::Html,
};

pub async fn login(Query(query): Query<LoginPageQuery>) -> Html<String> {
    render("Entrar", "login", query.message.as_deref())
}

pub async fn register() -> Html<String> {
    render("Cadastro", "register", None)
}

// Sub-paths under /cadastro share the registration shell.
pub async fn register_step(Path(step): Path<String>) -> Html<String> {
    tracing::debug!(%step, "registration sub-page requested.");
    render("Cadastro", "register", None)
}

pub async fn forgot_password() -> Html<String> {
    render("Esqueci minha senha", "forgot-password", None)
}

pub async fn reset_password() -> Html<String> {
    render("Redefinir senha", "reset-password", None)
}

fn render(title: &str, page: &str, notice: Option<&str>) -> Html<String> {
    let notice = notice
        .filter(|text| !text.is_empty())
        .map(|text| format!(r#"<p class="notice" role="alert">{}</p>"#, escape_html(text)))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>{title} | AtalJudge</title></head>
<body data-page="{page}">{notice}<div id="root"></div></body>
</html>
"#
    ))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
