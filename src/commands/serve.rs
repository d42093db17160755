//! Serve command
//!
//! Constructs the seeded list and runs the HTTP accept loop.

use log::info;
use serde_json::Value;
use tiny_http::Server;

use crate::server::tiny_http::{AppState, handle_request};
use listd::list::LinkedList;

/// Start the linked-list API server
///
/// The serving instance is seeded with 1, 2, 3 and lives until the process
/// exits.
pub fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let mut list = LinkedList::new();
    for seed in [1, 2, 3] {
        list.insert_at_end(Value::from(seed));
    }
    let state = AppState::new(list);

    let addr = format!("{host}:{port}");
    let server =
        Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    info!("listening on {addr}");
    println!("Serving linked list API on http://{addr}");
    println!();
    println!("Press Ctrl+C to stop");

    for mut request in server.incoming_requests() {
        let response = handle_request(&state, &mut request);
        let _ = request.respond(response);
    }

    Ok(())
}
