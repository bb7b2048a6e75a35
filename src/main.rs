use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    ataljudge_web::run().await
}
