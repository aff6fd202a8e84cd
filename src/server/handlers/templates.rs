//! Legal template catalogue endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::templates::{self, TemplateCatalog};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub templates: TemplateCatalog,
}

/// Body of a template generation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub template_id: String,
    #[serde(default)]
    pub customizations: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub template: String,
}

/// `GET /api/legal-templates`
pub async fn list_templates() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        templates: templates::catalog(),
    })
}

/// `POST /api/legal-templates`
pub async fn generate_template(Json(req): Json<TemplateRequest>) -> Json<TemplateResponse> {
    let customizations = if req.customizations.is_null() {
        serde_json::json!({})
    } else {
        req.customizations
    };
    Json(TemplateResponse {
        template: templates::generate(
            &req.template_id,
            &customizations,
            chrono::Local::now().date_naive(),
        ),
    })
}
