use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

use crate::telemetry::{log_event, set_log_level, LogLevel, DEFAULT_LOG_LEVEL};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    static_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_max_age_seconds = parse_u64_with_bounds(
            lookup("STATIC_CACHE_MAX_AGE_SECONDS"),
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_cache_max_age_seconds,
            log_level,
        }
    }

    fn cache_control(&self) -> HeaderValue {
        let value = if self.static_cache_max_age_seconds == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.static_cache_max_age_seconds)
        };
        HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
    }
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Static site router: assets from `dist_dir`, anything unknown falls back
/// to `index.html`.
pub fn router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            config.cache_control(),
        ))
        .layer(middleware::from_fn(access_log))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    set_log_level(config.log_level);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        LogLevel::Info,
        "host_listening",
        json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let level = if status.is_server_error() {
        LogLevel::Error
    } else {
        LogLevel::Debug
    };
    log_event(
        level,
        "static_request",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    fn scratch_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("orbit-portfolio-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dist");
        fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        fs::write(dir.join("app.css"), "body{}").expect("write asset");
        dir
    }

    async fn spawn_host(config: HostConfig) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind host");
        let address = listener.local_addr().expect("host address");
        let app = router(&config);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{address}")
    }

    #[test]
    fn config_defaults_when_environment_is_empty() {
        let config = HostConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.static_cache_max_age_seconds, DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_ignores_invalid_and_out_of_range_values() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "99999"),
            ("DIST_DIR", "   "),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "999999999999"),
            ("LOG_LEVEL", "chatty"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.static_cache_max_age_seconds, DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn config_reads_valid_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("DIST_DIR", "public"),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "0"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.cache_control(), HeaderValue::from_static("no-cache"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn host_serves_assets_and_falls_back_to_index() {
        let dist_dir = scratch_dist("fallback");
        let base = spawn_host(HostConfig::from_lookup(lookup_from(&[(
            "DIST_DIR",
            dist_dir.to_str().expect("utf-8 temp path"),
        )])))
        .await;
        let client = reqwest::Client::new();

        let asset = client
            .get(format!("{base}/app.css"))
            .send()
            .await
            .expect("asset request");
        assert!(asset.status().is_success());
        assert_eq!(
            asset.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("public, max-age=3600")
        );
        assert!(asset.headers().contains_key(REQUEST_ID_HEADER));

        let deep_link = client
            .get(format!("{base}/projects"))
            .header(REQUEST_ID_HEADER, "trace-1")
            .send()
            .await
            .expect("fallback request");
        assert_eq!(
            deep_link.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("trace-1")
        );
        let body = deep_link.text().await.expect("fallback body");
        assert!(body.contains("id=\"app\""));
    }
}
