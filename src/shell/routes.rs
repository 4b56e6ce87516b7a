//! Routing table and session gate

use serde::Serialize;
use std::fmt;
use tracing::debug;

use zanlu_templates::GeneratorId;

use super::identity::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Landing,
    Auth,
    Dashboard,
    CreateSaas,
    PromptGenerator,
    ContractGenerator,
    Prospecting,
    Messages,
    Academy,
    Affiliates,
    NotFound,
}

impl Route {
    /// Every routable page, in menu order
    pub fn all() -> &'static [Route] {
        &[
            Route::Landing,
            Route::Auth,
            Route::Dashboard,
            Route::CreateSaas,
            Route::PromptGenerator,
            Route::ContractGenerator,
            Route::Prospecting,
            Route::Messages,
            Route::Academy,
            Route::Affiliates,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::CreateSaas => "/criar-saas",
            Route::PromptGenerator => "/gerador-prompts",
            Route::ContractGenerator => "/gerador-contratos",
            Route::Prospecting => "/prospeccao-clientes",
            Route::Messages => "/mensagens-prontas",
            Route::Academy => "/academia",
            Route::Affiliates => "/afiliados",
            Route::NotFound => "*",
        }
    }

    /// Resolve a location; query, fragment and a trailing slash are ignored
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Tool pages need a signed-in session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Landing | Route::Auth | Route::NotFound)
    }

    /// Generator behind a tool page, if it is one
    pub fn generator(&self) -> Option<GeneratorId> {
        match self {
            Route::CreateSaas => Some(GeneratorId::SaasBrief),
            Route::PromptGenerator => Some(GeneratorId::Prompt),
            Route::ContractGenerator => Some(GeneratorId::Contract),
            Route::Messages => Some(GeneratorId::Message),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Page to show for `path`, redirecting gated pages to `/auth` without a
/// session
pub fn navigate(path: &str, session: Option<&Session>) -> Route {
    let route = Route::from_path(path);
    if route.requires_session() && session.is_none() {
        debug!(%route, "no session, redirecting to /auth");
        return Route::Auth;
    }
    route
}

/// One card on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardTile {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

pub const DASHBOARD_TILES: &[DashboardTile] = &[
    DashboardTile {
        title: "Criar Meu SaaS",
        description: "Gere projetos completos com questionário inteligente",
        route: Route::CreateSaas,
    },
    DashboardTile {
        title: "Gerador de Prompts",
        description: "Prompts otimizados para Lovable",
        route: Route::PromptGenerator,
    },
    DashboardTile {
        title: "Gerador de Contratos",
        description: "Contratos e propostas profissionais",
        route: Route::ContractGenerator,
    },
    DashboardTile {
        title: "Prospecção de Clientes",
        description: "Encontre clientes na sua cidade",
        route: Route::Prospecting,
    },
    DashboardTile {
        title: "Mensagens Prontas",
        description: "Copy otimizado para vendas",
        route: Route::Messages,
    },
    DashboardTile {
        title: "Academia",
        description: "Treinamentos e conteúdo exclusivo",
        route: Route::Academy,
    },
    DashboardTile {
        title: "Afiliados",
        description: "Sistema de comissões 50%",
        route: Route::Affiliates,
    },
];

/// One course in the academy catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub modules: u32,
    pub video_url: &'static str,
}

pub const ACADEMY_COURSES: &[Course] = &[
    Course {
        title: "Como Vender Sites em 2024",
        description: "Aprenda as melhores técnicas de prospecção e fechamento",
        duration: "2h 30min",
        modules: 8,
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    },
    Course {
        title: "Criando Projetos na Lovable",
        description: "Domine a ferramenta e crie projetos incríveis",
        duration: "3h 15min",
        modules: 12,
        video_url: "https://www.youtube.com/watch?v=9KHLTZaJcR8",
    },
    Course {
        title: "Copywriting para Desenvolvedores",
        description: "Escreva textos que convertem e vendem mais",
        duration: "1h 45min",
        modules: 6,
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    },
    Course {
        title: "Marketing Digital para Desenvolvedores",
        description: "Aprenda a divulgar seus serviços e atrair clientes",
        duration: "2h 00min",
        modules: 10,
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    },
    Course {
        title: "Precificação de Projetos Web",
        description: "Como cobrar o valor justo pelos seus serviços",
        duration: "1h 30min",
        modules: 5,
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    },
    Course {
        title: "Gestão de Clientes e Prazos",
        description: "Organize seus projetos e mantenha clientes satisfeitos",
        duration: "2h 15min",
        modules: 7,
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    },
];

/// Downloadable extra listed under the academy courses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportMaterial {
    pub name: &'static str,
    pub size: &'static str,
}

pub const SUPPORT_MATERIALS: &[SupportMaterial] = &[
    SupportMaterial {
        name: "📚 E-book: Guia Completo de Prospecção Digital",
        size: "2.5 MB",
    },
    SupportMaterial {
        name: "🎨 Templates Prontos de Propostas Comerciais",
        size: "1.2 MB",
    },
    SupportMaterial {
        name: "💼 Planilha de Gestão de Clientes",
        size: "850 KB",
    },
    SupportMaterial {
        name: "🎯 Checklist de Entrega de Projetos",
        size: "450 KB",
    },
    SupportMaterial {
        name: "📊 Dashboard de Métricas de Vendas",
        size: "3.1 MB",
    },
    SupportMaterial {
        name: "📝 Modelo de Contrato Completo",
        size: "620 KB",
    },
    SupportMaterial {
        name: "🎬 Scripts de Vendas Prontos",
        size: "780 KB",
    },
    SupportMaterial {
        name: "💡 Ideias de Projetos para Portfólio",
        size: "1.5 MB",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: "lucas@zanlu.net".into(),
            signed_in_at: Utc::now(),
        }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), *route);
        }
    }

    #[test]
    fn test_path_normalisation() {
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(
            Route::from_path("/gerador-contratos?x=1"),
            Route::ContractGenerator
        );
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/painel"), Route::NotFound);
    }

    #[test]
    fn test_gated_pages_redirect_without_session() {
        assert_eq!(navigate("/mensagens-prontas", None), Route::Auth);
        assert_eq!(navigate("/afiliados", None), Route::Auth);
        assert_eq!(navigate("/", None), Route::Landing);
        assert_eq!(navigate("/nada", None), Route::NotFound);

        let session = session();
        assert_eq!(
            navigate("/mensagens-prontas", Some(&session)),
            Route::Messages
        );
    }

    #[test]
    fn test_every_tile_is_gated_and_unique() {
        let mut routes: Vec<Route> = DASHBOARD_TILES.iter().map(|t| t.route).collect();
        assert!(routes.iter().all(Route::requires_session));
        routes.dedup();
        assert_eq!(routes.len(), 7);
    }

    #[test]
    fn test_academy_catalog() {
        assert_eq!(ACADEMY_COURSES.len(), 6);
        assert_eq!(ACADEMY_COURSES.iter().map(|c| c.modules).sum::<u32>(), 48);
        assert!(ACADEMY_COURSES
            .iter()
            .all(|c| c.video_url.starts_with("https://www.youtube.com/watch?v=")));
        assert_eq!(SUPPORT_MATERIALS.len(), 8);
        assert_eq!(SUPPORT_MATERIALS[5].name, "📝 Modelo de Contrato Completo");
    }

    #[test]
    fn test_generator_pages() {
        let generators: Vec<GeneratorId> =
            Route::all().iter().filter_map(Route::generator).collect();
        assert_eq!(generators.len(), GeneratorId::all().len());
    }
}
