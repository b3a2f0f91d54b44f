use std::sync::Arc;

use dn_votes::handlers::health;
use dn_votes::logging;
use dn_votes::store::RedisStore;
use vercel_runtime::{run, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logging::init();

    let store = Arc::new(RedisStore::from_env());

    run(move |req: Request| {
        let store = Arc::clone(&store);
        async move { health::handle(&req, store.as_ref()).await }
    })
    .await
}
