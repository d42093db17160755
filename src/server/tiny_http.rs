//! tiny_http server adapter
//!
//! Handles routing, body parsing, response conversion, and CORS for tiny_http.

use std::io::Cursor;
#[allow(unused_imports)]
use std::io::Read as _;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use listd::api::{self, ApiError, ApiResponse, DeleteRequest, InsertRequest};
use listd::list::LinkedList;
use serde_json::Value;

// =============================================================================
// SHARED STATE
// =============================================================================

/// Process-wide state shared across requests
///
/// The mutex serializes every list operation; the core itself defines no
/// locking discipline and expects exactly this kind of external
/// synchronization before concurrent use.
#[derive(Debug)]
pub struct AppState {
    list: Mutex<LinkedList<Value>>,
}

impl AppState {
    /// Wrap an already-seeded list for serving
    #[must_use]
    pub const fn new(list: LinkedList<Value>) -> Self {
        Self {
            list: Mutex::new(list),
        }
    }

    /// Lock the list for one operation
    ///
    /// A poisoned lock is recovered: core operations rewire at most one link
    /// before returning, so the chain is structurally valid even if a request
    /// thread panicked while holding the guard.
    fn lock(&self) -> MutexGuard<'_, LinkedList<Value>> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle a request and return a response
///
/// This is the main routing function that maps URL paths to API handlers.
/// Every response carries the allow-all CORS header, matching the API's
/// browser-frontend consumers.
pub fn handle_request(state: &AppState, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();
    debug!("{method} {path}");

    let response = match (&method, path.as_str()) {
        // Static pages
        (&Method::Get, "/") => serve_html(INDEX_HTML),
        (&Method::Get, "/style.css") => serve_css(STYLE_CSS),

        // GET /api/linkedlist - read the full list state
        (&Method::Get, "/api/linkedlist") => success_response(api::get_list(&state.lock())),

        // POST /api/linkedlist/insert - insert a value at start or end
        (&Method::Post, "/api/linkedlist/insert") => {
            match read_json_body::<InsertRequest>(request) {
                Ok(req) => {
                    let mut list = state.lock();
                    handle_result(api::insert_node(&mut list, req))
                },
                Err(e) => error_response(&e),
            }
        },

        // DELETE /api/linkedlist/delete - delete the first matching node
        (&Method::Delete, "/api/linkedlist/delete") => {
            match read_json_body::<DeleteRequest>(request) {
                Ok(req) => {
                    let mut list = state.lock();
                    handle_result(api::delete_node(&mut list, req))
                },
                Err(e) => error_response(&e),
            }
        },

        // CORS preflight for any path
        (&Method::Options, _) => preflight_response(),

        // 404 for unknown routes
        _ => not_found_response(&format!("Endpoint not found: {method} {path}")),
    };

    with_cors(response)
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(&e),
    }
}

/// Create a successful JSON response
fn success_response<T: Serialize>(data: T) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::success(data);
    json_response(&response, 200)
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(&error.message);
    json_response(&response, error.status_code())
}

/// Create a 404 not found response
fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(message);
    json_response(&response, 404)
}

/// Answer a CORS preflight with the methods and headers the API accepts
fn preflight_response() -> Response<Cursor<Vec<u8>>> {
    Response::from_data(Vec::new())
        .with_status_code(StatusCode(204))
        .with_header(
            Header::from_bytes("Access-Control-Allow-Methods", "GET, POST, DELETE, OPTIONS")
                .unwrap(),
        )
        .with_header(Header::from_bytes("Access-Control-Allow-Headers", "Content-Type").unwrap())
}

/// Add the allow-all origin header to a response
fn with_cors(response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    response.with_header(Header::from_bytes("Access-Control-Allow-Origin", "*").unwrap())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"status":"error"}"#.to_string());
    Response::from_data(json.into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(StatusCode(status))
}

/// Serve an embedded HTML page
fn serve_html(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap())
}

/// Serve an embedded stylesheet
fn serve_css(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/css; charset=utf-8").unwrap())
}

// =============================================================================
// Embedded static files
// =============================================================================

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>listd</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <header>
        <h1>listd</h1>
        <div id="error"></div>
    </header>

    <main>
        <section>
            <h2>Linked List</h2>
            <div id="chain">Loading...</div>
        </section>

        <section>
            <h2>Insert</h2>
            <form id="insert-form">
                <input id="value" type="text" placeholder="Value (JSON or text)" required>
                <button type="submit" data-position="start">Insert at Start</button>
                <button type="submit" data-position="end">Insert at End</button>
            </form>
        </section>
    </main>

    <script>
        const errorBox = document.getElementById('error');

        function parseValue(raw) {
            try { return JSON.parse(raw); } catch { return raw; }
        }

        function render(nodes) {
            const chain = document.getElementById('chain');
            if (nodes.length === 0) {
                chain.innerHTML = '<em>empty list</em>';
                return;
            }
            chain.innerHTML = nodes.map(node =>
                `<span class="node">
                    <code>${JSON.stringify(node.data)}</code>
                    <button class="delete" data-value='${JSON.stringify(node.data)}'>x</button>
                </span>`
            ).join('<span class="arrow">&rarr;</span>') +
                '<span class="arrow">&rarr;</span><span class="nil">&empty;</span>';
            for (const btn of chain.querySelectorAll('.delete')) {
                btn.addEventListener('click', () => remove(JSON.parse(btn.dataset.value)));
            }
        }

        async function call(path, options) {
            const response = await fetch(path, options);
            const body = await response.json();
            if (body.status === 'success') {
                errorBox.textContent = '';
                render(body.data);
            } else {
                errorBox.textContent = body.message;
            }
        }

        function refresh() {
            call('/api/linkedlist');
        }

        function insert(value, position) {
            call('/api/linkedlist/insert', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ value, position }),
            });
        }

        function remove(value) {
            call('/api/linkedlist/delete', {
                method: 'DELETE',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ value }),
            });
        }

        document.getElementById('insert-form').addEventListener('submit', e => {
            e.preventDefault();
            const input = document.getElementById('value');
            insert(parseValue(input.value), e.submitter.dataset.position);
            input.value = '';
        });

        refresh();
    </script>
</body>
</html>
"#;

const STYLE_CSS: &str = r"
body {
    font-family: system-ui, sans-serif;
    max-width: 720px;
    margin: 2rem auto;
    padding: 0 1rem;
    color: #1a1a2e;
}

header {
    display: flex;
    align-items: baseline;
    gap: 1rem;
    border-bottom: 1px solid #ddd;
    margin-bottom: 1.5rem;
}

#error {
    color: #c0392b;
}

#chain {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.4rem;
    min-height: 2.5rem;
}

.node {
    display: inline-flex;
    align-items: center;
    gap: 0.3rem;
    border: 1px solid #4a6fa5;
    border-radius: 4px;
    padding: 0.3rem 0.5rem;
    background: #eef3fa;
}

.node .delete {
    border: none;
    background: none;
    color: #c0392b;
    cursor: pointer;
}

.arrow {
    color: #888;
}

.nil {
    color: #888;
    font-style: italic;
}

#insert-form {
    display: flex;
    gap: 0.5rem;
}

#insert-form input {
    flex: 1;
    padding: 0.4rem;
}

#insert-form button {
    padding: 0.4rem 0.8rem;
    cursor: pointer;
}
";
