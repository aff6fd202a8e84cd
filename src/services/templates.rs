//! Legal document template catalogue.

use chrono::NaiveDate;
use serde::Serialize;

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// Catalogue grouped by category.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateCatalog {
    pub contracts: Vec<TemplateInfo>,
    pub policies: Vec<TemplateInfo>,
    pub letters: Vec<TemplateInfo>,
}

impl TemplateCatalog {
    /// Every template in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateInfo> {
        self.contracts
            .iter()
            .chain(self.policies.iter())
            .chain(self.letters.iter())
    }
}

/// The built-in catalogue.
pub fn catalog() -> TemplateCatalog {
    TemplateCatalog {
        contracts: vec![
            TemplateInfo {
                id: "nda",
                name: "Non-Disclosure Agreement",
                description: "Standard NDA template for confidential information protection",
                category: "Contracts",
            },
            TemplateInfo {
                id: "service-agreement",
                name: "Service Agreement",
                description: "Professional services contract template",
                category: "Contracts",
            },
        ],
        policies: vec![
            TemplateInfo {
                id: "privacy-policy",
                name: "Privacy Policy",
                description: "GDPR-compliant privacy policy template",
                category: "Policies",
            },
            TemplateInfo {
                id: "terms-of-service",
                name: "Terms of Service",
                description: "Website terms of service template",
                category: "Policies",
            },
        ],
        letters: vec![TemplateInfo {
            id: "demand-letter",
            name: "Demand Letter",
            description: "Professional demand letter template",
            category: "Letters",
        }],
    }
}

/// Render a placeholder template with the requested customizations.
pub fn generate(template_id: &str, customizations: &serde_json::Value, on: NaiveDate) -> String {
    let customizations = serde_json::to_string_pretty(customizations)
        .unwrap_or_else(|_| customizations.to_string());
    format!(
        r#"
LEGAL DOCUMENT TEMPLATE
======================

Template ID: {template_id}
Generated: {date}

[This would contain the actual template content based on the templateId and customizations]

Customizations Applied:
{customizations}

Note: This template should be reviewed and customized by legal professionals before use.
"#,
        template_id = template_id,
        date = on.format("%Y-%m-%d"),
        customizations = customizations,
    )
}
