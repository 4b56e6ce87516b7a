//! Built-in generator catalog
//!
//! Registry content for the studio's text generators. Everything here is
//! static configuration: adding a category means adding an option and a
//! table entry, never touching the composer.

pub mod contract;
pub mod message;
pub mod prompt;
pub mod saas;

use crate::definition::EnumOption;

/// Agency named in contracts and messages unless the request overrides it
pub const DEFAULT_AGENCY_NAME: &str = "ZanluNet - Soluções Digitais";

/// Client niches offered by the message generator
pub fn client_niches() -> Vec<EnumOption> {
    vec![
        EnumOption::new("Restaurante", "Restaurante"),
        EnumOption::new("Loja", "Loja/Comércio"),
        EnumOption::new("Clínica", "Clínica/Saúde"),
        EnumOption::new("Academia", "Academia"),
        EnumOption::new("Salão", "Salão de Beleza"),
        EnumOption::new("Construtora", "Construtora"),
    ]
}

/// Colour palettes offered by the prompt and SaaS brief generators
pub fn color_palettes() -> Vec<EnumOption> {
    vec![
        EnumOption::same("Azul/Ciano (moderno)"),
        EnumOption::same("Roxo/Magenta (criativo)"),
        EnumOption::same("Verde/Neon (tech)"),
        EnumOption::same("Laranja/Dourado (energia)"),
    ]
}

/// Product features offered as a multi-select, in display order
pub fn product_features() -> Vec<EnumOption> {
    vec![
        EnumOption::same("Autenticação de usuários"),
        EnumOption::same("Dashboard com gráficos"),
        EnumOption::same("Pagamentos online"),
        EnumOption::same("Área de membros"),
        EnumOption::same("Agendamento online"),
        EnumOption::same("Blog e conteúdo"),
        EnumOption::same("Formulário de contato"),
        EnumOption::same("Integração com WhatsApp"),
    ]
}
