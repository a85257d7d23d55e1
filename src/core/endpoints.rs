//! One method per backend operation.
//!
//! Every method maps to a single (verb, path) pair and returns the raw
//! response future; payloads are anything `Serialize` and pass through
//! untouched.

use crate::core::client::ApiClient;
use crate::domain::filter::Filter;
use crate::domain::model::{FinancialReportQuery, PayrollReportQuery};
use crate::domain::resource::Resource;
use crate::utils::error::Result;
use reqwest::Response;
use serde::Serialize;
use std::fmt::Display;

const RELATORIO_FINANCEIRO: &str = "/relatorios/financeiro";
const RELATORIO_FOLHA_PAGAMENTO: &str = "/relatorios/folha-pagamento";
const LOTES_RELATORIO: &str = "/lotes/relatorio";
const HEALTH: &str = "/health";

impl ApiClient {
    // --- Fornecedores ---

    pub async fn get_fornecedores(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Fornecedores, filter).await
    }

    pub async fn get_fornecedor_by_id(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Fornecedores, id).await
    }

    pub async fn create_fornecedor<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Fornecedores, data).await
    }

    pub async fn update_fornecedor<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Fornecedores, id, data).await
    }

    pub async fn delete_fornecedor(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Fornecedores, id).await
    }

    // --- Produtos ---

    pub async fn get_produtos(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Produtos, filter).await
    }

    pub async fn get_produto(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Produtos, id).await
    }

    /// Creates either kind of product; the backend decides from the payload.
    pub async fn create_produto<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Produtos, data).await
    }

    pub async fn update_produto<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Produtos, id, data).await
    }

    pub async fn delete_produto(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Produtos, id).await
    }

    pub async fn get_produtos_comerciais(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::ProdutosComerciais, filter).await
    }

    pub async fn get_produto_comercial(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::ProdutosComerciais, id).await
    }

    pub async fn create_produto_comercial<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<Response> {
        self.create(Resource::ProdutosComerciais, data).await
    }

    pub async fn update_produto_comercial<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::ProdutosComerciais, id, data).await
    }

    pub async fn get_produtos_estruturais(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::ProdutosEstruturais, filter).await
    }

    /// `GET /produtos/quantidade/{id}`
    pub async fn get_produto_qtd(&self, id: impl Display) -> Result<Response> {
        self.get(&Resource::Produtos.sub_item_path("quantidade", id)).await
    }

    // --- Clientes ---

    pub async fn get_clientes(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Clientes, filter).await
    }

    pub async fn get_cliente(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Clientes, id).await
    }

    pub async fn create_cliente<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Clientes, data).await
    }

    pub async fn update_cliente<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Clientes, id, data).await
    }

    pub async fn delete_cliente(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Clientes, id).await
    }

    /// `GET /clientes/saldo/{id}`
    pub async fn get_cliente_saldo(&self, id: impl Display) -> Result<Response> {
        self.get(&Resource::Clientes.sub_item_path("saldo", id)).await
    }

    // --- Ofertas ---

    pub async fn get_ofertas(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Ofertas, filter).await
    }

    pub async fn get_oferta(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Ofertas, id).await
    }

    pub async fn create_oferta<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Ofertas, data).await
    }

    pub async fn delete_oferta(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Ofertas, id).await
    }

    pub async fn get_item_ofertas(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::ItemOfertas, filter).await
    }

    pub async fn create_item_oferta<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::ItemOfertas, data).await
    }

    // item_ofertas is keyed by (id_produto, id_oferta).
    fn item_oferta_path(id_produto: impl Display, id_oferta: impl Display) -> String {
        format!(
            "{}/{}/{}",
            Resource::ItemOfertas.path(),
            id_produto,
            id_oferta
        )
    }

    pub async fn get_item_oferta(
        &self,
        id_produto: impl Display,
        id_oferta: impl Display,
    ) -> Result<Response> {
        self.get(&Self::item_oferta_path(id_produto, id_oferta)).await
    }

    pub async fn update_item_oferta<B: Serialize + ?Sized>(
        &self,
        id_produto: impl Display,
        id_oferta: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.put(&Self::item_oferta_path(id_produto, id_oferta), data).await
    }

    pub async fn delete_item_oferta(
        &self,
        id_produto: impl Display,
        id_oferta: impl Display,
    ) -> Result<Response> {
        self.delete(&Self::item_oferta_path(id_produto, id_oferta)).await
    }

    /// `GET /item_ofertas/item/{id}`
    pub async fn get_item_ofertas_por_produto(&self, id_produto: impl Display) -> Result<Response> {
        self.get(&Resource::ItemOfertas.sub_item_path("item", id_produto)).await
    }

    /// `GET /item_ofertas/oferta/{id}`
    pub async fn get_item_ofertas_por_oferta(&self, id_oferta: impl Display) -> Result<Response> {
        self.get(&Resource::ItemOfertas.sub_item_path("oferta", id_oferta)).await
    }

    pub async fn get_aplica_ofertas(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::AplicaOferta, filter).await
    }

    pub async fn get_aplica_oferta(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::AplicaOferta, id).await
    }

    pub async fn create_aplica_oferta<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::AplicaOferta, data).await
    }

    pub async fn update_aplica_oferta<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::AplicaOferta, id, data).await
    }

    pub async fn delete_aplica_oferta(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::AplicaOferta, id).await
    }

    // --- Vendas ---

    pub async fn get_vendas(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Vendas, filter).await
    }

    pub async fn get_venda(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Vendas, id).await
    }

    pub async fn create_venda<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Vendas, data).await
    }

    pub async fn update_venda<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Vendas, id, data).await
    }

    pub async fn delete_venda(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Vendas, id).await
    }

    /// Items of sales, e.g. filtered with `filter-id_venda=eq.1`.
    pub async fn get_item_venda(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::ItemVenda, filter).await
    }

    pub async fn get_item_venda_by_id(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::ItemVenda, id).await
    }

    pub async fn create_item_venda<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::ItemVenda, data).await
    }

    pub async fn update_item_venda<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::ItemVenda, id, data).await
    }

    pub async fn delete_item_venda(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::ItemVenda, id).await
    }

    // --- Funcionarios ---

    pub async fn get_funcionarios(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Funcionarios, filter).await
    }

    pub async fn get_funcionario(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Funcionarios, id).await
    }

    pub async fn create_funcionario<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Funcionarios, data).await
    }

    pub async fn update_funcionario<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Funcionarios, id, data).await
    }

    pub async fn delete_funcionario(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Funcionarios, id).await
    }

    // --- Lotes ---

    pub async fn get_lotes(&self, filter: Option<&Filter>) -> Result<Response> {
        self.list(Resource::Lotes, filter).await
    }

    pub async fn get_lote(&self, id: impl Display) -> Result<Response> {
        self.fetch(Resource::Lotes, id).await
    }

    /// Lots of one product, used to pick the lot a sale item consumes.
    pub async fn get_lotes_por_produto(&self, id_produto: impl Display) -> Result<Response> {
        self.get(&Resource::Lotes.sub_item_path("produtos", id_produto)).await
    }

    pub async fn create_lote<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.create(Resource::Lotes, data).await
    }

    pub async fn update_lote<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Response> {
        self.update(Resource::Lotes, id, data).await
    }

    pub async fn delete_lote(&self, id: impl Display) -> Result<Response> {
        self.remove(Resource::Lotes, id).await
    }

    /// Monthly spending on lots.
    pub async fn get_lotes_relatorio(&self) -> Result<Response> {
        self.get(LOTES_RELATORIO).await
    }

    // --- Relatorios ---

    pub async fn get_relatorio_financeiro(&self, query: &FinancialReportQuery) -> Result<Response> {
        self.get_with_query(RELATORIO_FINANCEIRO, query).await
    }

    pub async fn get_relatorio_folha_pagamento(
        &self,
        query: &PayrollReportQuery,
    ) -> Result<Response> {
        self.get_with_query(RELATORIO_FOLHA_PAGAMENTO, query).await
    }

    // --- Misc ---

    /// `DELETE` on any endpoint, relative to the base URL or absolute.
    ///
    /// `delete_by_endpoint("/lotes/3")` sends the same request as
    /// `delete_lote(3)`.
    pub async fn delete_by_endpoint(&self, endpoint: &str) -> Result<Response> {
        self.delete(endpoint).await
    }

    pub async fn health(&self) -> Result<Response> {
        self.get(HEALTH).await
    }
}
