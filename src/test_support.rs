use crate::config::Config;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use warp::http::StatusCode;
use warp::Filter;

/// Serves `reply` with `status` on `/api/plate-detection.php` and records
/// every request body it receives.
pub fn mock_server(status: u16, reply: Value) -> (SocketAddr, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let routes = warp::post()
        .and(warp::path!("api" / "plate-detection.php"))
        .and(warp::body::json())
        .map(move |body: Value| {
            recorder.lock().unwrap().push(body);
            warp::reply::with_status(
                warp::reply::json(&reply),
                StatusCode::from_u16(status).unwrap(),
            )
        });
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, seen)
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        api_base: Url::parse(&format!("http://{}/api/", addr)).unwrap(),
        ocr_command: vec!["tesseract".to_string()],
        timeout: Duration::from_secs(5),
    }
}
