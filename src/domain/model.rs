use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque JSON object, sent and received without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

// Typed views of the backend's JSON. Field names follow the wire format.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fornecedor {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FornecedorCreate {
    pub nome: String,
    pub cnpj: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: i64,
    pub nome: String,
    pub categoria: String,
    pub marca: String,
    pub qnt_disponivel: u64,
    pub qnt_total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoComercial {
    #[serde(flatten)]
    pub produto: Produto,
    pub preco_venda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub cpf: Option<String>,
    pub data_nascimento: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClienteCreate {
    pub nome: String,
    pub cpf: Option<String>,
    pub data_nascimento: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lote {
    pub id_lote: i64,
    pub id_fornecedor: i64,
    pub id_produto: i64,
    pub data_fornecimento: DateTime<Utc>,
    pub validade: Option<DateTime<Utc>>,
    pub preco_unitario: f64,
    pub estragados: Option<i64>,
    pub quantidade_inicial: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoteCreate {
    pub id_fornecedor: i64,
    pub id_produto: i64,
    pub data_fornecimento: DateTime<Utc>,
    pub validade: Option<DateTime<Utc>>,
    pub preco_unitario: f64,
    pub estragados: Option<i64>,
    pub quantidade_inicial: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venda {
    pub id: i64,
    pub id_cliente: i64,
    pub id_funcionario: i64,
    // The backend spells it this way.
    #[serde(rename = "data_hora_renda")]
    pub data_hora_venda: DateTime<Utc>,
    pub data_hora_pagamento: Option<DateTime<Utc>>,
    pub tipo_pagamento: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaCreate {
    pub id_cliente: i64,
    pub id_funcionario: i64,
    #[serde(rename = "data_hora_renda")]
    pub data_hora_venda: DateTime<Utc>,
    pub data_hora_pagamento: Option<DateTime<Utc>>,
    pub tipo_pagamento: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVenda {
    pub id_item_venda: i64,
    pub id_venda: i64,
    pub id_lote: i64,
    pub quantidade: i64,
    pub valor_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVendaCreate {
    pub id_venda: i64,
    pub id_lote: i64,
    pub quantidade: i64,
    pub valor_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOferta {
    pub quantidade: i64,
    pub id_produto: i64,
    pub id_oferta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AplicaOferta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_aplica_oferta: Option<i64>,
    pub id_oferta: i64,
    pub id_venda: i64,
    pub id_item_venda: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funcionario {
    pub id: i64,
    pub nome: String,
    #[serde(rename = "CPF")]
    pub cpf: String,
    pub tipo: String,
    pub expediente: String,
    pub salario: f64,
    pub data_contratacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncionarioCreate {
    pub nome: String,
    #[serde(rename = "CPF")]
    pub cpf: String,
    pub tipo: String,
    pub expediente: String,
    pub salario: f64,
    pub data_contratacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriePonto {
    pub date: String,
    pub receita: f64,
    pub despesa: f64,
    pub lucro: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totais {
    pub receita: f64,
    pub despesa: f64,
    pub lucro: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioFinanceiro {
    pub period_start: String,
    pub period_end: String,
    pub granularity: String,
    pub totals: Totais,
    pub series: Vec<SeriePonto>,
    #[serde(default)]
    pub projection: Vec<SeriePonto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncionarioFolhaPagamento {
    pub id_funcionario: i64,
    pub nome: String,
    pub cpf: String,
    pub tipo: String,
    pub expediente: String,
    pub salario_base: f64,
    pub bonificacao: f64,
    pub salario_total: f64,
    pub data_contratacao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolhaPagamentoMensal {
    pub mes: String,
    pub ano: i32,
    pub total_funcionarios: i64,
    pub total_salario_base: f64,
    pub total_bonificacoes: f64,
    pub total_folha: f64,
    pub funcionarios: Vec<FuncionarioFolhaPagamento>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioFolhaPagamento {
    pub period_start: String,
    pub period_end: String,
    #[serde(default)]
    pub tipo_filtro: Option<String>,
    pub total_periodos: i64,
    pub total_geral_folha: f64,
    pub folhas_por_mes: Vec<FolhaPagamentoMensal>,
}

/// Error body the backend sends with 4xx/5xx answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Granularity {
    Day,
    Week,
    Month,
}

/// Query of `GET /relatorios/financeiro`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_days: Option<u32>,
}

impl FinancialReportQuery {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            granularity: None,
            projection_days: None,
        }
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn projection_days(mut self, days: u32) -> Self {
        self.projection_days = Some(days);
        self
    }
}

/// Query of `GET /relatorios/folha-pagamento`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollReportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

impl PayrollReportQuery {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            tipo: None,
        }
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = Some(tipo.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_is_a_bare_object() {
        let record = Record::new().with("nome", "X");
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"nome": "X"}));
        assert_eq!(record.get("nome"), Some(&json!("X")));
    }

    #[test]
    fn test_venda_uses_backend_field_name() {
        let venda: Venda = serde_json::from_value(json!({
            "id": 1,
            "id_cliente": 2,
            "id_funcionario": 3,
            "data_hora_renda": "2024-05-01T12:00:00Z",
            "data_hora_pagamento": null,
            "tipo_pagamento": "pix"
        }))
        .unwrap();
        assert_eq!(venda.id_cliente, 2);
        assert!(venda.data_hora_pagamento.is_none());

        let back = serde_json::to_value(&venda).unwrap();
        assert!(back.get("data_hora_renda").is_some());
    }

    #[test]
    fn test_produto_comercial_flattens() {
        let produto: ProdutoComercial = serde_json::from_value(json!({
            "id": 5,
            "nome": "Cerveja",
            "categoria": "bebida",
            "marca": "X",
            "qnt_disponivel": 10,
            "qnt_total": 12,
            "preco_venda": 7.5
        }))
        .unwrap();
        assert_eq!(produto.produto.nome, "Cerveja");
        assert_eq!(produto.preco_venda, 7.5);
    }

    #[test]
    fn test_report_query_skips_unset_fields() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        let query = FinancialReportQuery::new(start, end);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"start": "2024-01-01", "end": "2024-03-31"})
        );

        let query = query.granularity(Granularity::Month).projection_days(2);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "start": "2024-01-01",
                "end": "2024-03-31",
                "granularity": "month",
                "projection_days": 2
            })
        );
    }
}
