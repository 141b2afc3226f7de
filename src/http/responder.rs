use std::path::Path;
use tokio::fs::File;
use tracing::debug;

use crate::http::mime;
use crate::http::response::Response;

/// Serves the file at an already-sandboxed path.
///
/// A path that cannot be opened, or that names something other than a
/// regular file (directories open fine on most platforms), gets the fixed
/// 404 response. On success the open handle and its metadata length go
/// straight into the response; the writer streams the bytes out.
pub async fn respond(path: &Path) -> Response {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file not served");
            return Response::not_found();
        }
    };

    let metadata = match file.metadata().await {
        Ok(m) if m.is_file() => m,
        Ok(_) => {
            debug!(path = %path.display(), "not a regular file");
            return Response::not_found();
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "file not served");
            return Response::not_found();
        }
    };

    let content_type = mime::from_path(path);
    Response::ok_file(file, metadata.len(), content_type)
}
