use std::fmt;

/// Backend collections, each addressed by a fixed path under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Resource {
    Fornecedores,
    Produtos,
    ProdutosComerciais,
    ProdutosEstruturais,
    Clientes,
    Ofertas,
    ItemOfertas,
    AplicaOferta,
    Vendas,
    ItemVenda,
    Funcionarios,
    Lotes,
}

impl Resource {
    pub const ALL: [Resource; 12] = [
        Resource::Fornecedores,
        Resource::Produtos,
        Resource::ProdutosComerciais,
        Resource::ProdutosEstruturais,
        Resource::Clientes,
        Resource::Ofertas,
        Resource::ItemOfertas,
        Resource::AplicaOferta,
        Resource::Vendas,
        Resource::ItemVenda,
        Resource::Funcionarios,
        Resource::Lotes,
    ];

    /// Collection path, always with a leading slash and no trailing one.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Fornecedores => "/fornecedores",
            Resource::Produtos => "/produtos",
            Resource::ProdutosComerciais => "/produtos/comercial",
            Resource::ProdutosEstruturais => "/produtos/estrutural",
            Resource::Clientes => "/clientes",
            Resource::Ofertas => "/ofertas",
            Resource::ItemOfertas => "/item_ofertas",
            Resource::AplicaOferta => "/aplica_oferta",
            Resource::Vendas => "/vendas",
            Resource::ItemVenda => "/item_venda",
            Resource::Funcionarios => "/funcionarios",
            Resource::Lotes => "/lotes",
        }
    }

    /// `{collection}/{id}`
    pub fn item_path(self, id: impl fmt::Display) -> String {
        format!("{}/{}", self.path(), id)
    }

    /// `{collection}/{sub}/{id}`, e.g. `/lotes/produtos/4`.
    pub fn sub_item_path(self, sub: &str, id: impl fmt::Display) -> String {
        format!("{}/{}/{}", self.path(), sub, id)
    }
}

/// Collection-level operations a backend route can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Fetch,
    Create,
    Update,
    Remove,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Fetch => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Remove => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Resource {
    /// Whether the backend routes `operation` on this collection through
    /// [`Resource::path`] or [`Resource::item_path`].
    ///
    /// `item_ofertas` items are keyed by product and offer, so single-id
    /// operations on it are not supported here.
    pub fn supports(self, operation: Operation) -> bool {
        match self {
            Resource::ProdutosEstruturais => operation == Operation::List,
            Resource::ProdutosComerciais => operation != Operation::Remove,
            Resource::Ofertas => operation != Operation::Update,
            Resource::ItemOfertas => matches!(operation, Operation::List | Operation::Create),
            _ => true,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}
