use serde::{Deserialize, Serialize};

/// Risk classification produced by the analysis.
///
/// The wire values are the Portuguese literals the backend is instructed to
/// emit; anything outside this set fails deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Baixo,
    Medio,
    Alto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    #[serde(rename = "total_analisado")]
    pub total_analyzed: u64,
    #[serde(rename = "status_predominante")]
    pub predominant_status: String,
}

/// The analytical summary returned to the caller.
///
/// Produced by the completion backend; deserializing into this struct is
/// what enforces the response schema (required keys, closed risk set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(rename = "resumo_geral")]
    pub summary: String,
    #[serde(rename = "principais_causas")]
    pub main_causes: Vec<String>,
    #[serde(rename = "analise_de_risco")]
    pub risk: RiskLevel,
    #[serde(rename = "sugestao_plano_acao")]
    pub action_plan: String,
    #[serde(rename = "estatisticas")]
    pub statistics: Statistics,
}

impl AnalysisResult {
    /// The fixed result for an empty record batch. Returned without ever
    /// invoking the backend, so an empty context cannot be hallucinated over.
    pub fn stable_baseline() -> Self {
        Self {
            summary: "Não foram identificados registros de Não Conformidade (RNC) \
                      para os parâmetros selecionados. Os processos operam dentro \
                      da normalidade estatística."
                .to_string(),
            main_causes: vec!["Operação estável".to_string()],
            risk: RiskLevel::Baixo,
            action_plan: "Manter protocolos de monitoramento preventivo.".to_string(),
            statistics: Statistics {
                total_analyzed: 0,
                predominant_status: "N/A".to_string(),
            },
        }
    }
}
