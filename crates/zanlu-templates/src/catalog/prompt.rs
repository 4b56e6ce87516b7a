//! Prompt generator - site-builder prompts keyed by project type

use crate::definition::{EnumOption, FieldSpec, GeneratorDefinition, GeneratorId, Section};
use crate::registry::{CategoryPath, TemplateEntry, TemplateTable};

const LANDING_PAGE: &str = "\
Crie uma landing page moderna e conversiva com seções: hero com CTA, benefícios, depoimentos, preços e footer. Use animações suaves e design responsivo.

ESTILO VISUAL: {visualStyle}
NICHO: {niche}";

const DASHBOARD: &str = "\
Crie um dashboard administrativo completo com sidebar, gráficos interativos, tabelas de dados, sistema de notificações e perfil de usuário.

ESTILO VISUAL: {visualStyle}
NICHO: {niche}";

const ECOMMERCE: &str = "\
Crie uma loja online completa com catálogo de produtos, carrinho de compras, checkout, painel administrativo e integração com pagamento.

ESTILO VISUAL: {visualStyle}
NICHO: {niche}";

const SAAS: &str = "\
Crie uma aplicação SaaS completa com autenticação, dashboard do usuário, sistema de planos/assinaturas, área de configurações e documentação.

ESTILO VISUAL: {visualStyle}
NICHO: {niche}";

const GENERAL_REQUIREMENTS: &str = "\
Inclua:
- Design responsivo e moderno
- Animações e transições suaves
- Paleta de cores adequada ao nicho
- Componentes reutilizáveis
- Boas práticas de UX/UI";

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition {
        id: GeneratorId::Prompt,
        name: "Gerador de Prompts".into(),
        description: "Prompts otimizados para criar projetos na Lovable".into(),
        fields: vec![
            FieldSpec::select(
                "projectType",
                "Tipo de Projeto",
                vec![
                    EnumOption::new("landing-page", "Landing Page"),
                    EnumOption::new("dashboard", "Dashboard/Painel"),
                    EnumOption::new("ecommerce", "E-commerce"),
                    EnumOption::new("saas", "SaaS Completo"),
                ],
            )
            .required()
            .placeholder("Escolha o tipo"),
            FieldSpec::select(
                "visualStyle",
                "Estilo Visual",
                vec![
                    EnumOption::new("Dark Futurista com Neon", "Dark Futurista"),
                    EnumOption::new("Minimalista Clean", "Minimalista"),
                    EnumOption::new("Glassmorphism Moderno", "Glassmorphism"),
                    EnumOption::same("Colorido e Vibrante"),
                ],
            )
            .required()
            .placeholder("Escolha o estilo"),
            FieldSpec::select(
                "niche",
                "Nicho",
                vec![
                    EnumOption::same("Tecnologia/Software"),
                    EnumOption::same("Saúde/Fitness"),
                    EnumOption::same("Educação/Cursos"),
                    EnumOption::same("Marketing/Agência"),
                    EnumOption::same("Finanças/Contabilidade"),
                    EnumOption::same("E-commerce/Vendas"),
                ],
            )
            .required()
            .placeholder("Escolha o nicho"),
            FieldSpec::select("colorPalette", "Paleta de Cores", super::color_palettes())
                .placeholder("Escolha uma cor"),
            FieldSpec::multiline("objective", "Objetivo do Projeto")
                .placeholder("Ex: Captar leads para consultoria, vender cursos online..."),
            FieldSpec::multi_select(
                "features",
                "Funcionalidades Específicas",
                super::product_features(),
            ),
            FieldSpec::multiline("extraResources", "Recursos Extras")
                .placeholder("Imagens, integrações ou referências que devem ser usadas..."),
        ],
        axes: vec!["projectType"],
        sections: vec![
            Section::field("PALETA DE CORES:", "colorPalette"),
            Section::field("OBJETIVO:", "objective"),
            Section::field("FUNCIONALIDADES ESPECÍFICAS:", "features"),
            Section::field("RECURSOS EXTRAS:", "extraResources"),
            Section::fixed(GENERAL_REQUIREMENTS),
        ],
        not_found: "Template de prompt não encontrado",
    }
}

pub fn table() -> TemplateTable {
    TemplateTable::new(definition())
        .with(
            CategoryPath::single("landing-page"),
            TemplateEntry::Literal(LANDING_PAGE),
        )
        .with(
            CategoryPath::single("dashboard"),
            TemplateEntry::Literal(DASHBOARD),
        )
        .with(
            CategoryPath::single("ecommerce"),
            TemplateEntry::Literal(ECOMMERCE),
        )
        .with(CategoryPath::single("saas"), TemplateEntry::Literal(SAAS))
}

#[cfg(test)]
mod tests {
    use crate::composer::compose;
    use crate::definition::GeneratorId;
    use crate::registry::TemplateRegistry;
    use crate::request::CompositionRequest;
    use pretty_assertions::assert_eq;

    fn base_request() -> CompositionRequest {
        CompositionRequest::new(GeneratorId::Prompt)
            .with_text("projectType", "dashboard")
            .with_text("visualStyle", "Minimalista Clean")
            .with_text("niche", "Saúde/Fitness")
    }

    #[test]
    fn test_required_fields_only() {
        let doc = compose(&TemplateRegistry::new(), &base_request()).unwrap();

        assert!(doc.text.starts_with("Crie um dashboard administrativo"));
        assert!(doc.text.contains("ESTILO VISUAL: Minimalista Clean\nNICHO: Saúde/Fitness"));
        assert!(doc.text.ends_with("- Boas práticas de UX/UI"));
        assert!(!doc.text.contains("FUNCIONALIDADES ESPECÍFICAS"));
        assert!(!doc.text.contains("RECURSOS EXTRAS"));
        assert!(!doc.text.contains("PALETA DE CORES"));
        assert!(!doc.text.contains("\n\n\n"));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let request = base_request()
            .with_text("extraResources", "Usar fotos da equipe")
            .with_selection("features", ["Pagamentos online", "Autenticação de usuários"])
            .with_text("colorPalette", "Verde/Neon (tech)");
        let doc = compose(&TemplateRegistry::new(), &request).unwrap();

        let tail = doc.text.split_once("NICHO: Saúde/Fitness\n\n").unwrap().1;
        assert_eq!(
            tail,
            "PALETA DE CORES:\nVerde/Neon (tech)\n\n\
             FUNCIONALIDADES ESPECÍFICAS:\n- Autenticação de usuários\n- Pagamentos online\n\n\
             RECURSOS EXTRAS:\nUsar fotos da equipe\n\n\
             Inclua:\n- Design responsivo e moderno\n- Animações e transições suaves\n\
             - Paleta de cores adequada ao nicho\n- Componentes reutilizáveis\n- Boas práticas de UX/UI"
        );
    }

    #[test]
    fn test_missing_style_and_niche() {
        let request = CompositionRequest::new(GeneratorId::Prompt).with_text("projectType", "saas");
        let err = compose(&TemplateRegistry::new(), &request).unwrap_err();
        assert_eq!(err.missing_fields(), ["visualStyle", "niche"]);
    }
}
