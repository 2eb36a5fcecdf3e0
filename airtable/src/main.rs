use lambda_http::{run, service_fn, Error};
use relay::{Config, Handler, Profile};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::from_env(Profile::Airtable);
    log::info!("starting with {:?}", config);
    let handler = Handler::from_config(&config)?;
    run(service_fn(|request| handler.handle(request))).await
}
