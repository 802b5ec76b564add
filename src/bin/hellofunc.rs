use hello_lambda::Config;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    simple_logger::init_with_level(Config::default().logging.level)?;
    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| async move {
        let (payload, context) = event.into_parts();
        hello_lambda::handler(payload, context).map_err(Error::from)
    }))
    .await
}
