mod cli;
mod logging;
mod response;

use clap::Parser;

use pyvm_backend::Request;
use pyvm_pyenv::{PyenvClient, resolve_root};

use crate::cli::Cli;
use crate::response::Response;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let request = cli.into_request();
    let response = run(&request).await;

    let encoded = serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"failed":true,"msg":"failed to encode response"}"#.to_string());
    println!("{encoded}");

    if response.failed {
        std::process::exit(1);
    }
}

async fn run(request: &Request) -> Response {
    let env_root = std::env::var("PYENV_ROOT").ok();
    let outcome = match resolve_root(
        request.pyenv_root.as_deref(),
        env_root.as_deref(),
        request.expanduser,
    ) {
        Ok(root) => {
            log::debug!("resolved pyenv root: {}", root.display());
            PyenvClient::new(root).dispatch(request).await
        }
        Err(error) => Err(error),
    };

    Response::from_result(outcome)
}
