//! Accept loop serving each connection on its own task

use crate::app::App;
use crate::error::{ResponseError, Result};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, warn};

/// Pause after a failed accept before trying again
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections from `listener` forever.
///
/// Accept failures (e.g., `EMFILE`) are logged and retried after [`ACCEPT_BACKOFF`];
/// a failed connection never stops the loop.
pub async fn serve(listener: TcpListener, app: Arc<App>) {
    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };

        debug!(%remote_addr, "accepted connection");
        let app = app.clone();
        tokio::spawn(async move {
            if let Err(e) = serve_connection(stream, app).await {
                warn!(%remote_addr, error = %e, "connection ended with error");
            }
        });
    }
}

/// Serve HTTP/1 requests on a single connection until the client closes it
pub async fn serve_connection(stream: TcpStream, app: Arc<App>) -> Result<()> {
    let io = TokioIo::new(stream);
    let service = service_fn(move |req| {
        let app = app.clone();
        async move { Ok::<_, Infallible>(app.handle(&req)) }
    });

    http1::Builder::new()
        .serve_connection(io, service)
        .await
        .map_err(ResponseError::Transport)
}
