#![deny(missing_docs)]
//! A web server for the classical cipher library, exposing each cipher as a JSON endpoint.

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use cipher_core::format::{DEFAULT_GROUP_SIZE, group_letters};
use cipher_core::{CipherError, Digraph, caesar, playfair, vigenere};
use local_ip_address::local_ip;
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{Value, json};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::cors::CorsLayer;

const DEFAULT_PORT: u16 = 3000;

type ApiResponse = (StatusCode, Json<Value>);

/// Where the server listens, read from `CIPHER_WEB_HOST` and `CIPHER_WEB_PORT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServerConfig {
    host: IpAddr,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unparsable values fall back to the defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("CIPHER_WEB_HOST").map_or(defaults.host, |raw| {
            raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid CIPHER_WEB_HOST '{raw}'");
                defaults.host
            })
        });
        let port = lookup("CIPHER_WEB_PORT").map_or(defaults.port, |raw| {
            raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid CIPHER_WEB_PORT '{raw}'");
                defaults.port
            })
        });
        Self { host, port }
    }

    const fn addr(self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Deserialize)]
struct ShiftRequest {
    text: String,
    shift: i64,
}

#[derive(Deserialize)]
struct KeyedRequest {
    text: String,
    key: String,
}

#[derive(Deserialize)]
struct MatrixRequest {
    key: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = ServerConfig::from_env();
    let addr = config.addr();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    println!("listening on:");
    if let Ok(my_local_ip) = local_ip() {
        println!("  - http://{my_local_ip}:{}/api/health", config.port);
    }
    println!("  - http://127.0.0.1:{}/api/health", config.port);

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Builds the Axum router.
fn app() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/caesar/encrypt", post(caesar_encrypt_handler))
        .route("/api/caesar/decrypt", post(caesar_decrypt_handler))
        .route("/api/vigenere/encrypt", post(vigenere_encrypt_handler))
        .route("/api/vigenere/decrypt", post(vigenere_decrypt_handler))
        .route("/api/playfair/encrypt", post(playfair_encrypt_handler))
        .route("/api/playfair/decrypt", post(playfair_decrypt_handler))
        .route("/api/playfair/matrix", post(playfair_matrix_handler))
        .layer(CorsLayer::permissive())
}

async fn health_handler() -> ApiResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

fn bad_request(message: &str) -> ApiResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn cipher_failure(e: &CipherError) -> ApiResponse {
    if e.is_invalid_key() {
        bad_request(&e.to_string())
    } else {
        error!("Cipher invariant violated: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    }
}

fn success(output: &str) -> ApiResponse {
    (
        StatusCode::OK,
        Json(json!({
            "output": output,
            "formatted": group_letters(output, DEFAULT_GROUP_SIZE),
        })),
    )
}

/// Trims the text and key the way the form fields were trimmed, rejecting blanks.
fn keyed_input(payload: &KeyedRequest) -> Result<(&str, &str), ApiResponse> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(bad_request("Please enter text to process"));
    }
    let key = payload.key.trim();
    if key.is_empty() {
        return Err(bad_request("Please enter a key"));
    }
    Ok((text, key))
}

fn run_caesar(payload: &ShiftRequest, encrypt: bool) -> ApiResponse {
    let text = payload.text.trim();
    if text.is_empty() {
        return bad_request("Please enter text to process");
    }
    info!("Caesar request with shift {}", payload.shift);
    let output = if encrypt {
        caesar::encrypt(text, payload.shift)
    } else {
        caesar::decrypt(text, payload.shift)
    };
    success(&output)
}

fn run_vigenere(payload: &KeyedRequest, encrypt: bool) -> ApiResponse {
    let (text, key) = match keyed_input(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    info!("Vigenère request");
    let result = if encrypt {
        vigenere::encrypt(text, key)
    } else {
        vigenere::decrypt(text, key)
    };
    match result {
        Ok(output) => success(&output),
        Err(e) => cipher_failure(&e),
    }
}

async fn caesar_encrypt_handler(Json(payload): Json<ShiftRequest>) -> ApiResponse {
    run_caesar(&payload, true)
}

async fn caesar_decrypt_handler(Json(payload): Json<ShiftRequest>) -> ApiResponse {
    run_caesar(&payload, false)
}

async fn vigenere_encrypt_handler(Json(payload): Json<KeyedRequest>) -> ApiResponse {
    run_vigenere(&payload, true)
}

async fn vigenere_decrypt_handler(Json(payload): Json<KeyedRequest>) -> ApiResponse {
    run_vigenere(&payload, false)
}

async fn playfair_encrypt_handler(Json(payload): Json<KeyedRequest>) -> ApiResponse {
    let (text, key) = match keyed_input(&payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    info!("Playfair encrypt request");
    match playfair::encrypt(text, key) {
        Ok(output) => {
            let prepared: String = playfair::prepare_text(text)
                .iter()
                .map(Digraph::to_string)
                .collect();
            let (status, Json(mut body)) = success(&output);
            body["prepared"] = json!(prepared);
            (status, Json(body))
        }
        Err(e) => cipher_failure(&e),
    }
}

async fn playfair_decrypt_handler(Json(payload): Json<KeyedRequest>) -> ApiResponse {
    let (text, key) = match keyed_input(&payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    info!("Playfair decrypt request");
    match playfair::decrypt(text, key) {
        Ok(output) => success(&output),
        Err(e) => cipher_failure(&e),
    }
}

async fn playfair_matrix_handler(Json(payload): Json<MatrixRequest>) -> ApiResponse {
    let key = payload.key.trim();
    if key.is_empty() {
        return bad_request("Please enter a key");
    }
    match playfair::build_matrix(key) {
        Ok(matrix) => (StatusCode::OK, Json(json!({ "matrix": matrix }))),
        Err(e) => cipher_failure(&e),
    }
}
