use anyhow::Result;
use chrono::NaiveDate;
use edna_client::domain::model::{
    FinancialReportQuery, Granularity, PayrollReportQuery, RelatorioFinanceiro,
    RelatorioFolhaPagamento,
};
use edna_client::{ApiClient, ApiConfig};
use httpmock::prelude::*;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_financial_report_query() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/relatorios/financeiro")
                .query_param("start", "2024-01-01")
                .query_param("end", "2024-03-31")
                .query_param("granularity", "month")
                .query_param("projection_days", "2");
            then.status(200).json_body(json!({
                "period_start": "2024-01-01",
                "period_end": "2024-03-31",
                "granularity": "month",
                "totals": {"receita": 1500.0, "despesa": 900.0, "lucro": 600.0},
                "series": [
                    {"date": "2024-01", "receita": 500.0, "despesa": 300.0, "lucro": 200.0}
                ],
                "projection": [
                    {"date": "2024-04", "receita": 520.0, "despesa": 310.0, "lucro": 210.0}
                ]
            }));
        })
        .await;

    let api = ApiClient::new(&ApiConfig::with_base_url(server.url("/api/v1")))?;
    let query = FinancialReportQuery::new(date(2024, 1, 1), date(2024, 3, 31))
        .granularity(Granularity::Month)
        .projection_days(2);

    let response = api.get_relatorio_financeiro(&query).await?;
    let report: RelatorioFinanceiro = response.json().await?;

    assert_eq!(report.totals.lucro, 600.0);
    assert_eq!(report.series.len(), 1);
    assert_eq!(report.projection[0].date, "2024-04");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_financial_report_without_projection() -> Result<()> {
    let server = MockServer::start_async().await;
    let mut unset = Vec::new();
    for name in ["granularity", "projection_days"] {
        unset.push(
            server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/v1/relatorios/financeiro")
                        .query_param_exists(name);
                    then.status(400);
                })
                .await,
        );
    }
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/relatorios/financeiro")
                .query_param("start", "2024-01-01")
                .query_param("end", "2024-01-07");
            then.status(200).json_body(json!({
                "period_start": "2024-01-01",
                "period_end": "2024-01-07",
                "granularity": "day",
                "totals": {"receita": 0.0, "despesa": 0.0, "lucro": 0.0},
                "series": []
            }));
        })
        .await;

    let api = ApiClient::new(&ApiConfig::with_base_url(server.url("/api/v1")))?;
    let query = FinancialReportQuery::new(date(2024, 1, 1), date(2024, 1, 7));

    let response = api.get_relatorio_financeiro(&query).await?;
    assert_eq!(response.status(), 200);
    let report: RelatorioFinanceiro = response.json().await?;

    assert!(report.projection.is_empty());
    mock.assert_async().await;
    for mock in &unset {
        assert_eq!(mock.hits_async().await, 0);
    }
    Ok(())
}

#[tokio::test]
async fn test_payroll_report_query() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/relatorios/folha-pagamento")
                .query_param("start", "2024-01-01")
                .query_param("end", "2024-02-29")
                .query_param("tipo", "garcom");
            then.status(200).json_body(json!({
                "period_start": "2024-01-01",
                "period_end": "2024-02-29",
                "tipo_filtro": "garcom",
                "total_periodos": 1,
                "total_geral_folha": 2300.0,
                "folhas_por_mes": [{
                    "mes": "janeiro",
                    "ano": 2024,
                    "total_funcionarios": 1,
                    "total_salario_base": 2000.0,
                    "total_bonificacoes": 300.0,
                    "total_folha": 2300.0,
                    "funcionarios": [{
                        "id_funcionario": 3,
                        "nome": "Carlos",
                        "cpf": "12345678900",
                        "tipo": "garcom",
                        "expediente": "noite",
                        "salario_base": 2000.0,
                        "bonificacao": 300.0,
                        "salario_total": 2300.0,
                        "data_contratacao": "2023-06-01"
                    }]
                }]
            }));
        })
        .await;

    let api = ApiClient::new(&ApiConfig::with_base_url(server.url("/api/v1")))?;
    let query = PayrollReportQuery::new(date(2024, 1, 1), date(2024, 2, 29)).tipo("garcom");

    let report: RelatorioFolhaPagamento = api
        .get_relatorio_folha_pagamento(&query)
        .await?
        .json()
        .await?;

    assert_eq!(report.tipo_filtro.as_deref(), Some("garcom"));
    assert_eq!(report.folhas_por_mes[0].funcionarios[0].bonificacao, 300.0);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_payroll_report_without_tipo() -> Result<()> {
    let server = MockServer::start_async().await;
    let with_tipo = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/relatorios/folha-pagamento")
                .query_param_exists("tipo");
            then.status(400);
        })
        .await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/relatorios/folha-pagamento")
                .query_param("start", "2024-03-01")
                .query_param("end", "2024-03-31");
            then.status(200).json_body(json!({
                "period_start": "2024-03-01",
                "period_end": "2024-03-31",
                "tipo_filtro": null,
                "total_periodos": 0,
                "total_geral_folha": 0.0,
                "folhas_por_mes": []
            }));
        })
        .await;

    let api = ApiClient::new(&ApiConfig::with_base_url(server.url("/api/v1")))?;
    let query = PayrollReportQuery::new(date(2024, 3, 1), date(2024, 3, 31));

    let response = api.get_relatorio_folha_pagamento(&query).await?;
    assert_eq!(response.status(), 200);
    let report: RelatorioFolhaPagamento = response.json().await?;

    assert!(report.tipo_filtro.is_none());
    mock.assert_async().await;
    assert_eq!(with_tipo.hits_async().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_lotes_relatorio() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/lotes/relatorio");
            then.status(200).json_body(json!({"2024-01": {"total": 120.5}}));
        })
        .await;

    let api = ApiClient::new(&ApiConfig::with_base_url(server.url("/api/v1")))?;
    let response = api.get_lotes_relatorio().await?;

    assert!(response.status().is_success());
    mock.assert_async().await;
    Ok(())
}
