use std::env::set_var;

use api::Entrypoint;
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Routes are registered without the deployment stage prefix.
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    api::serve(Entrypoint::CatchAll).await
}
