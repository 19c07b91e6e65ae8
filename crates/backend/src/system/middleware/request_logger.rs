use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет через tracing: метод, путь, статус, длительность (ms)
/// и размер ответа.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | {}ms | body error: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let duration = start.elapsed().as_millis();
    let size = format_size(bytes.len());

    if parts.status.is_success() {
        tracing::info!("{} {} -> {} | {}ms | {}", method, uri.path(), status, duration, size);
    } else {
        tracing::warn!("{} {} -> {} | {}ms | {}", method, uri.path(), status, duration, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}
