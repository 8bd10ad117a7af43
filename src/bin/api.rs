pub use article_tldr::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    article_tldr::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
