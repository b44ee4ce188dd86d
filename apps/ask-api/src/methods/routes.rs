// API routes, subject to the origin allow-list
pub const HEALTH_PATH: &str = "/api/health";
pub const ASK_PATH: &str = "/api/ask";

// Documentation routes
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";
