#![forbid(unsafe_code)]
#![warn(clippy::all)]

use tracing::{error, info};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().init();

  if let Err(err) = nosleep::global::activate(false) {
    error!("failed to keep the system awake: {}", err);
    return;
  }

  info!("holding the system awake. Ctrl-C to stop");
  tokio::signal::ctrl_c().await.unwrap();

  info!("letting the system sleep again");
  nosleep::global::deactivate();
}
