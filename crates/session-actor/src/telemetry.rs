//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for a whole process. Call it
//! once, at the top of `main`.
//!
//! The subscriber uses a compact format without module targets; the actor already
//! tags every line with `session_type` and the session `id`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and applied events
//! RUST_LOG=debug cargo run     # full event payloads
//! RUST_LOG=session_actor=debug,kiosk=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a kiosk order reads like:
//!
//! ```text
//! INFO Session actor started session_type="OrderSession"
//! INFO Opened session_type="OrderSession" id=session_1 open=1
//! INFO Event applied session_type="OrderSession" id=session_1 outcome=Added { name: "불고기 버거", quantity: 1 }
//! WARN Event rejected session_type="OrderSession" id=session_1 error=Cart is empty
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
