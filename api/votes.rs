use std::sync::Arc;

use dn_votes::handlers::votes;
use dn_votes::logging;
use dn_votes::store::RedisStore;
use vercel_runtime::{run, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logging::init();

    // One store per cold start, shared by every invocation on this instance.
    let store = Arc::new(RedisStore::from_env());
    store.warm_up().await;

    run(move |req: Request| {
        let store = Arc::clone(&store);
        async move { votes::handle(&req, store.as_ref()).await }
    })
    .await
}
