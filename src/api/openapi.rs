//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use crate::api::dto::analyze::{AnalyzeRequest, AnalyzeResponse};
use crate::api::dto::generate::GenerateRequest;
use crate::api::dto::health::{HealthResponse, RootResponse};
use crate::domain::entities::AnalysisStatus;
use crate::error::{ErrorBody, ErrorInfo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ClientView Backend API",
        description = "Analysis and regeneration of PowerPoint presentations"
    ),
    paths(
        crate::api::handlers::health::root_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::analyze::analyze_handler,
        crate::api::handlers::generate::generate_handler,
    ),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        AnalysisStatus,
        GenerateRequest,
        RootResponse,
        HealthResponse,
        ErrorBody,
        ErrorInfo,
    )),
    tags(
        (name = "presentations", description = "Presentation analysis and generation"),
        (name = "health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;
