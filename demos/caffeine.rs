#![forbid(unsafe_code)]
#![warn(clippy::all)]

use nosleep::PowerRequest;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().init();

  let request = match PowerRequest::new(true) {
    Ok(request) => Some(request),
    Err(err) => {
      warn!("keep-awake unavailable, running without it: {}", err);
      None
    }
  };

  info!("chugging the caffeine. Ctrl-C to stop");
  tokio::signal::ctrl_c().await.unwrap();
  drop(request);
}
