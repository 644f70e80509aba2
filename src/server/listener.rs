//! `tiny_http` listener loop

use std::sync::Arc;

use log::{info, warn};
use tiny_http::{Request, Response, Server, StatusCode};
use tokio::runtime::Handle;

use super::{MAX_BODY_BYTES, Method, read_body, route};
use crate::core::services::Dispatcher;

/// Serve webhooks until the listener shuts down
///
/// Requests are read on the calling thread; each accepted event is spawned
/// onto `runtime` so slow gateways never hold up the next request.
pub fn serve(server: &Server, webhook_path: &str, dispatcher: &Arc<Dispatcher>, runtime: &Handle) {
    info!("Listening for webhooks on {webhook_path}");

    for mut request in server.incoming_requests() {
        let method = method_of(&request);
        let url = request.url().to_string();
        let reply = if method == Method::Post {
            match read_body(request.as_reader(), MAX_BODY_BYTES) {
                Ok(body) => route(method, &url, &body, webhook_path),
                Err(err) => {
                    warn!("Rejected webhook body: {err}");
                    err.reply()
                },
            }
        } else {
            route(method, &url, "", webhook_path)
        };

        if let Some(event) = reply.event {
            let dispatcher = Arc::clone(dispatcher);
            runtime.spawn(async move {
                dispatcher.dispatch(&event).await;
            });
        }

        let response = Response::from_string(reply.body).with_status_code(StatusCode(reply.status));
        if let Err(err) = request.respond(response) {
            warn!("Failed to send webhook response: {err}");
        }
    }
}

fn method_of(request: &Request) -> Method {
    match request.method() {
        tiny_http::Method::Head => Method::Head,
        tiny_http::Method::Get => Method::Get,
        tiny_http::Method::Post => Method::Post,
        _ => Method::Other,
    }
}
