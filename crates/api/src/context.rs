use uuid::Uuid;

/// Per-request context attached by the request-id middleware.
///
/// Immutable; present on every routed request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
}

impl RequestContext {
    pub fn new(request_id: Uuid) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}
