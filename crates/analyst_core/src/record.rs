use serde::{Deserialize, Serialize};

/// One nonconformance report (RNC - Registro de Não Conformidade).
///
/// Wire field names are the uppercase Portuguese keys used by the quality
/// system that produces these records. Every field is free text; the only
/// normalization applied anywhere is whitespace trimming via [`Self::trimmed`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NonconformanceRecord {
    #[serde(rename = "RNC")]
    pub identifier: String,
    #[serde(rename = "ANO")]
    pub year: String,
    #[serde(rename = "PRIORIDADE")]
    pub priority: String,
    #[serde(rename = "COD_PRODUTO")]
    pub product_code: String,
    #[serde(rename = "CLASSIFICACAO")]
    pub classification: String,
    #[serde(rename = "DESCRICAO")]
    pub description: String,
    #[serde(rename = "ORIGEM")]
    pub origin: String,
    #[serde(rename = "CLIENTE")]
    pub customer: String,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "REGISTRO")]
    pub registration: String,
    #[serde(rename = "CONCLUSAO", default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    #[serde(rename = "DEPARTAMENTO_DESTINO")]
    pub destination_department: String,
}

impl NonconformanceRecord {
    /// Return a copy with every string field stripped of leading and
    /// trailing whitespace. Interior whitespace is left untouched.
    pub fn trimmed(&self) -> Self {
        Self {
            identifier: self.identifier.trim().to_string(),
            year: self.year.trim().to_string(),
            priority: self.priority.trim().to_string(),
            product_code: self.product_code.trim().to_string(),
            classification: self.classification.trim().to_string(),
            description: self.description.trim().to_string(),
            origin: self.origin.trim().to_string(),
            customer: self.customer.trim().to_string(),
            status: self.status.trim().to_string(),
            registration: self.registration.trim().to_string(),
            conclusion: self.conclusion.as_ref().map(|c| c.trim().to_string()),
            destination_department: self.destination_department.trim().to_string(),
        }
    }
}

/// Inbound request body: an ordered batch of records.
///
/// Order is preserved into the prompt; duplicates are allowed and not
/// deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "dados_rnc")]
    pub records: Vec<NonconformanceRecord>,
}

impl AnalysisRequest {
    /// Trim-normalize every record, preserving order.
    pub fn trimmed(&self) -> Vec<NonconformanceRecord> {
        self.records.iter().map(NonconformanceRecord::trimmed).collect()
    }
}
