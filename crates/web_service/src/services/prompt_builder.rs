//! Fixed prompt template for the nonconformance analysis.
//!
//! The record batch is embedded as pretty-printed JSON (field-labeled, one
//! record's fields per entry, order preserved) and the caller-computed record
//! count is substituted literally into the instruction text and into the
//! schema example, so the backend cannot misreport it.

use analyst_core::NonconformanceRecord;

/// Auditor persona and grounding rules. The anti-hallucination constraints
/// are part of the contract: every claim must be anchored in the supplied
/// data, and the output must be pure JSON.
pub const SYSTEM_PROMPT: &str = "\
Você é um Auditor ISO 9001 Sênior (perfil analítico e independente).
Seu objetivo é produzir um parecer técnico robusto, rastreável e baseado estritamente nos dados de RNC fornecidos.

Postura e regras:
- Extraia fatos objetivos e padrões; não aceite explicações vagas.
- Evite respostas genéricas: tudo deve estar ancorado em informações presentes nos dados.
- Diferencie falha pontual vs. falha sistêmica (processo/controle).
- Identifique tendências (recorrência por cliente, produto, etapa, motivo, setor, fornecedor, turno, operador, máquina, lote, data, ou qualquer marcador existente).
- Se algum campo crítico estiver ausente/ambíguo, registre explicitamente a limitação e o impacto disso na análise (sem inventar dados).
- Linguagem técnica e clara, sem jargões vazios.
- Saída obrigatória: JSON puro, sem texto fora do JSON.";

/// Render the user instruction for a non-empty, already-trimmed batch.
pub fn build_user_prompt(records: &[NonconformanceRecord]) -> serde_json::Result<String> {
    let data = serde_json::to_string_pretty(records)?;
    let total = records.len();

    Ok(format!(
        "\
Analise detalhadamente estes dados de RNC (texto bruto abaixo). Atenha-se estritamente ao conteúdo fornecido:
{data}

INSTRUÇÕES OBRIGATÓRIAS PARA O PARECER:
1) Em 'resumo_geral':
- Escreva no mínimo 2 parágrafos.
- Conecte fatos entre si (o que aconteceu, onde se repete, qual o padrão, qual o indício de falha de processo).
- Cite explicitamente os códigos de produto e os clientes mencionados nos dados (nomes/códigos conforme aparecerem).
- Aponte recorrências e padrões com base em evidências dos dados (ex.: \"ocorreu X vezes\", \"repetiu em datas/lotes/OPs diferentes\", \"concentrado em um cliente/produto\").
- Se os dados não permitirem afirmar recorrência, diga isso claramente e explique o que faltou.
- Ignore RNC com status \"Registrada\".

2) Em 'principais_causas':
- Liste somente causas que apareçam nos dados (causa informada, descrição de falha, etapa do processo, evidência repetida).
- Escreva causas como frases objetivas e auditáveis (ex.: \"Falta de inspeção final registrada\", \"Parâmetro de processo fora do padrão\", \"Matéria-prima fora de especificação\").
- Não invente causa raiz; se a causa estiver indefinida, registre como \"Causa não determinada nos registros\" e explique no resumo.

3) Em 'analise_de_risco':
- Classifique como \"baixo\", \"medio\" ou \"alto\" com base nos próprios dados.
- Justifique no texto (dentro do campo) considerando: recorrência, impacto no cliente, possibilidade de escape, severidade do defeito, status da RNC (aberta/fechada), e repetição por produto/cliente/lote/OP, quando houver.

4) Em 'sugestao_plano_acao':
- Proponha passos práticos e verificáveis, derivados das falhas relatadas e das lacunas de controle percebidas nos dados.
- Não cite requisitos da norma por número; descreva ações de forma operacional (ex.: \"revisar ponto de controle X\", \"reforçar critério de aceite\", \"criar verificação de registro\", \"bloquear lote até evidência\", etc.).
- Se não houver dados suficientes para um plano específico, proponha ações de coleta de evidência (ex.: \"levantar histórico por produto/cliente\", \"estratificar por causa/status\").

5) Em 'estatisticas':
- total_analisado: use exatamente {total}.
- status_predominante: indique o status mais frequente encontrado nos dados (ex.: \"ABERTA\", \"FECHADA\", \"EM_ANDAMENTO\"). Se não existir status nos dados, retorne \"NAO_INFORMADO\".

IMPORTANTE:
- Não use bullet points fora do JSON.
- Não retorne markdown.
- Não inclua comentários.
- Não inclua campos extras.

Retorne EXCLUSIVAMENTE em JSON, exatamente com este esquema e tipos:
{{
\"resumo_geral\": \"string\",
\"principais_causas\": [\"string\", \"string\"],
\"analise_de_risco\": \"baixo|medio|alto\",
\"sugestao_plano_acao\": \"string\",
\"estatisticas\": {{
    \"total_analisado\": {total},
    \"status_predominante\": \"string\"
}}
}}"
    ))
}
