use std::fmt;

/// Screens of the management UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Financeiro,
    Produtos,
    Vendas,
    Fornecedores,
    Funcionarios,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Home => "HomeView",
            View::Financeiro => "FinanceiroView",
            View::Produtos => "ProdutosView",
            View::Vendas => "VendasView",
            View::Fornecedores => "FornecedoresView",
            View::Funcionarios => "FuncionariosView",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    Route {
        path: "/financeiro",
        name: "Financeiro",
        view: View::Financeiro,
    },
    Route {
        path: "/produtos",
        name: "Produtos",
        view: View::Produtos,
    },
    Route {
        path: "/vendas",
        name: "Vendas",
        view: View::Vendas,
    },
    Route {
        path: "/fornecedores",
        name: "Fornecedores",
        view: View::Fornecedores,
    },
    Route {
        path: "/funcionarios",
        name: "Funcionarios",
        view: View::Funcionarios,
    },
];

/// Static path to view table mounted under a history base (`/` by default).
///
/// Matching ignores case, query string, fragment and a single trailing
/// slash. There are no guards, redirects or path parameters.
#[derive(Debug, Clone)]
pub struct Router {
    base: String,
    routes: &'static [Route],
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            base,
            routes: ROUTES,
        }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn resolve(&self, location: &str) -> Option<&'static Route> {
        let path = location
            .split(&['?', '#'][..])
            .next()
            .unwrap_or_default();
        let path = self.strip_base(path)?;

        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        let path = if path.is_empty() { "/" } else { path };

        let route = self
            .routes
            .iter()
            .find(|route| route.path.eq_ignore_ascii_case(path));
        match route {
            Some(route) => tracing::debug!("{} -> {}", location, route.view),
            None => tracing::debug!("{} -> no route", location),
        }
        route
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Link to the route called `name`, including the history base.
    pub fn href(&self, name: &str) -> Option<String> {
        self.by_name(name).map(|route| {
            if route.path == "/" && !self.base.is_empty() {
                format!("{}/", self.base)
            } else {
                format!("{}{}", self.base, route.path)
            }
        })
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base.as_str())?;
        // "/app" must not match "/application".
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}
