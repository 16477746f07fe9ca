use api::Entrypoint;
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    api::serve(Entrypoint::Index).await
}
