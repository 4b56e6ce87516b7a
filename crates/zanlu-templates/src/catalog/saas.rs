//! SaaS brief - questionnaire answers turned into a complete project prompt

use crate::definition::{EnumOption, FieldSpec, GeneratorDefinition, GeneratorId, Section};
use crate::registry::{CategoryPath, TemplateEntry, TemplateTable};
use crate::request::ResolvedFields;

const BRIEF: &str = "Crie um projeto completo para: {siteName}";

const CLOSING: &str =
    "Por favor, crie uma aplicação moderna, responsiva e completa seguindo estas especificações.";

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition {
        id: GeneratorId::SaasBrief,
        name: "Criar Meu SaaS".into(),
        description: "Responda as perguntas para gerar seu projeto".into(),
        fields: vec![
            FieldSpec::text("siteName", "Nome do Site/SaaS")
                .required()
                .placeholder("Ex: MeuApp Incrível"),
            FieldSpec::select("primaryColor", "Cor Principal", super::color_palettes())
                .placeholder("Escolha uma cor"),
            FieldSpec::select(
                "visualStyle",
                "Estilo Visual",
                vec![
                    EnumOption::new("Dark Futurista (estilo cyberpunk)", "Dark Futurista"),
                    EnumOption::same("Minimalista Claro"),
                    EnumOption::new("Glassmorphism Moderno", "Glassmorphism"),
                    EnumOption::same("Gradientes Vibrantes"),
                ],
            )
            .placeholder("Escolha um estilo"),
            FieldSpec::multiline("features", "Funcionalidades Principais").placeholder(
                "Ex: Dashboard, sistema de login, cadastro de produtos, área de membros...",
            ),
            FieldSpec::multiline("visualAssets", "Imagens/Recursos Visuais")
                .placeholder("Descreva as imagens ou elementos visuais que deseja incluir..."),
            FieldSpec::text("audience", "Público-Alvo")
                .placeholder("Ex: Empreendedores, empresas pequenas, desenvolvedores..."),
            FieldSpec::multiline("objective", "Objetivo do Projeto")
                .required()
                .placeholder("Ex: Facilitar a gestão de clientes, automatizar processos..."),
        ],
        axes: vec![],
        sections: vec![
            Section::render(visual_style),
            Section::field("FUNCIONALIDADES:", "features"),
            Section::field("IMAGENS/RECURSOS:", "visualAssets"),
            Section::field("PÚBLICO-ALVO:", "audience"),
            Section::field("OBJETIVO:", "objective"),
            Section::fixed(CLOSING),
        ],
        not_found: "Template de projeto não encontrado",
    }
}

/// "ESTILO VISUAL" block listing only the chosen colour and style
fn visual_style(fields: &ResolvedFields) -> Option<String> {
    let lines: Vec<String> = [
        ("Cor principal", fields.opt_text("primaryColor")),
        ("Estilo", fields.opt_text("visualStyle")),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("- {}: {}", label, v)))
    .collect();

    if lines.is_empty() {
        return None;
    }
    Some(format!("ESTILO VISUAL:\n{}", lines.join("\n")))
}

pub fn table() -> TemplateTable {
    TemplateTable::new(definition()).with(
        CategoryPath::single(CategoryPath::DEFAULT_KEY),
        TemplateEntry::Literal(BRIEF),
    )
}
