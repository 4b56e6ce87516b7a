//! Contract generator - contracts and proposals keyed by contract type
//!
//! Contracts are render functions rather than literals: clauses are numbered
//! at render time so that dropping the optional description clause keeps the
//! numbering contiguous.

use crate::definition::{EnumOption, FieldSpec, GeneratorDefinition, GeneratorId};
use crate::registry::{CategoryPath, TemplateEntry, TemplateTable};
use crate::request::ResolvedFields;

/// Jurisdiction placeholder kept when no city is given
const CITY_PLACEHOLDER: &str = "[CIDADE]";

const SIGNATURES: &str = "\
_______________________________
CONTRATANTE

_______________________________
CONTRATADA";

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition {
        id: GeneratorId::Contract,
        name: "Gerador de Contratos".into(),
        description: "Contratos e propostas profissionais".into(),
        fields: vec![
            FieldSpec::select(
                "contractType",
                "Tipo de Contrato",
                vec![
                    EnumOption::new("venda-site", "Venda de Website"),
                    EnumOption::new("prestacao-servico", "Prestação de Serviço"),
                    EnumOption::new("proposta-comercial", "Proposta Comercial"),
                    EnumOption::new("termo-manutencao", "Termo de Manutenção"),
                ],
            )
            .required()
            .placeholder("Escolha o tipo"),
            FieldSpec::text("clientName", "Nome do Cliente")
                .required()
                .placeholder("Nome completo ou razão social"),
            FieldSpec::text("taxId", "CPF/CNPJ")
                .required()
                .placeholder("000.000.000-00"),
            FieldSpec::text("value", "Valor do Serviço")
                .required()
                .placeholder("5000,00"),
            FieldSpec::multiline("description", "Descrição dos Serviços")
                .placeholder("Descreva os serviços que serão prestados..."),
            FieldSpec::text("city", "Cidade do Foro").placeholder("Ex: Curitiba"),
            FieldSpec::text("agencyName", "Contratada").default_value(super::DEFAULT_AGENCY_NAME),
        ],
        axes: vec!["contractType"],
        sections: vec![],
        not_found: "Modelo de contrato não encontrado",
    }
}

pub fn table() -> TemplateTable {
    TemplateTable::new(definition())
        .with(
            CategoryPath::single("venda-site"),
            TemplateEntry::Render(website_sale),
        )
        .with(
            CategoryPath::single("prestacao-servico"),
            TemplateEntry::Render(service_agreement),
        )
        .with(
            CategoryPath::single("proposta-comercial"),
            TemplateEntry::Render(commercial_proposal),
        )
        .with(
            CategoryPath::single("termo-manutencao"),
            TemplateEntry::Render(maintenance_terms),
        )
}

/// Blocks of a contract, joined by blank lines
struct Draft {
    blocks: Vec<String>,
    numbered: bool,
    clauses: usize,
}

impl Draft {
    fn numbered(title: &str) -> Self {
        Self {
            blocks: vec![title.to_string()],
            numbered: true,
            clauses: 0,
        }
    }

    fn headed(title: &str) -> Self {
        Self {
            numbered: false,
            ..Self::numbered(title)
        }
    }

    fn block(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(text.into());
        self
    }

    fn clause(mut self, title: &str, body: impl AsRef<str>) -> Self {
        let heading = if self.numbered {
            self.clauses += 1;
            format!("{}. {}", self.clauses, title)
        } else {
            title.to_string()
        };
        self.blocks.push(format!("{}\n{}", heading, body.as_ref()));
        self
    }

    /// Clause with a free-text body; trailing blank lines in the body are dropped
    fn optional_clause(self, title: &str, body: Option<&str>) -> Self {
        match body.map(str::trim_end).filter(|b| !b.is_empty()) {
            Some(body) => self.clause(title, body),
            None => self,
        }
    }

    fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

fn parties(fields: &ResolvedFields) -> String {
    format!(
        "CONTRATANTE: {}\nCPF/CNPJ: {}",
        fields.text("clientName"),
        fields.text("taxId")
    )
}

fn contractor(fields: &ResolvedFields) -> String {
    format!("CONTRATADA: {}", fields.text("agencyName"))
}

fn city(fields: &ResolvedFields) -> &str {
    fields.opt_text("city").unwrap_or(CITY_PLACEHOLDER)
}

/// Brand part of the agency name, before any " - " tagline
fn brand(agency: &str) -> &str {
    agency.split(" - ").next().unwrap_or(agency).trim()
}

fn dated(fields: &ResolvedFields) -> String {
    format!("Data: {}", fields.issued_on_display())
}

fn website_sale(fields: &ResolvedFields) -> String {
    Draft::numbered("CONTRATO DE PRESTAÇÃO DE SERVIÇOS - DESENVOLVIMENTO DE WEBSITE")
        .block(parties(fields))
        .block(contractor(fields))
        .clause(
            "OBJETO DO CONTRATO",
            "O presente contrato tem como objeto a criação e desenvolvimento de website conforme especificações acordadas.",
        )
        .optional_clause("DESCRIÇÃO DOS SERVIÇOS", fields.opt_text("description"))
        .clause(
            "VALOR E FORMA DE PAGAMENTO",
            format!(
                "Valor total: R$ {}\nForma de pagamento: 50% na assinatura do contrato e 50% na entrega.",
                fields.text("value")
            ),
        )
        .clause(
            "PRAZO DE ENTREGA",
            "O prazo de entrega será de até 30 dias corridos após a aprovação do projeto.",
        )
        .clause(
            "DIREITOS AUTORAIS",
            "Após o pagamento integral, todos os direitos sobre o website serão transferidos ao CONTRATANTE.",
        )
        .clause(
            "GARANTIA E SUPORTE",
            "A CONTRATADA oferece 30 dias de garantia e suporte técnico após a entrega.",
        )
        .clause(
            "RESPONSABILIDADES DO CONTRATANTE",
            "- Fornecer todo conteúdo (textos, imagens, logos) dentro do prazo acordado\n\
             - Realizar aprovações e feedbacks em até 5 dias úteis\n\
             - Efetuar os pagamentos nas datas acordadas",
        )
        .clause(
            "RESPONSABILIDADES DA CONTRATADA",
            "- Desenvolver o website conforme especificações acordadas\n\
             - Entregar o projeto no prazo estipulado\n\
             - Prestar suporte técnico durante o período de garantia",
        )
        .clause(
            "FORO",
            format!(
                "Fica eleito o foro da comarca de {} para dirimir quaisquer questões oriundas deste contrato.",
                city(fields)
            ),
        )
        .block(dated(fields))
        .block(SIGNATURES)
        .finish()
}

fn service_agreement(fields: &ResolvedFields) -> String {
    Draft::numbered("CONTRATO DE PRESTAÇÃO DE SERVIÇOS DIGITAIS")
        .block(parties(fields))
        .block(contractor(fields))
        .clause(
            "OBJETO",
            "Prestação de serviços digitais conforme descrito abaixo.",
        )
        .optional_clause("SERVIÇOS", fields.opt_text("description"))
        .clause(
            "VALOR",
            format!(
                "Valor mensal: R$ {}\nPrimeiro pagamento na assinatura do contrato e demais todo dia 05 de cada mês.",
                fields.text("value")
            ),
        )
        .clause(
            "VIGÊNCIA",
            "Este contrato tem vigência de 12 meses a partir da data de assinatura, renovável automaticamente.",
        )
        .clause(
            "RESCISÃO",
            "Qualquer das partes pode rescindir mediante aviso prévio de 30 dias.",
        )
        .clause(
            "MULTA RESCISÓRIA",
            "Em caso de rescisão antecipada sem justa causa pelo CONTRATANTE, será cobrada multa de 20% sobre o valor restante.",
        )
        .clause("FORO", format!("Comarca de {}.", city(fields)))
        .block(dated(fields))
        .block(SIGNATURES)
        .finish()
}

fn commercial_proposal(fields: &ResolvedFields) -> String {
    let agency = fields.text("agencyName");
    let description = fields.opt_text("description");

    Draft::headed("PROPOSTA COMERCIAL")
        .block(format!(
            "DE: {}\nPARA: {}\nCPF/CNPJ: {}\nDATA: {}",
            agency,
            fields.text("clientName"),
            fields.text("taxId"),
            fields.issued_on_display()
        ))
        .clause(
            "APRESENTAÇÃO",
            format!(
                "A {} é uma empresa especializada em soluções digitais, com foco em desenvolvimento de sites, sistemas e aplicações web.",
                brand(agency)
            ),
        )
        .optional_clause("OBJETIVO DO PROJETO", description)
        .optional_clause("ESCOPO DO PROJETO", description)
        .clause(
            "INVESTIMENTO",
            format!(
                "Valor Total: R$ {}\n\nForma de Pagamento:\n\
                 - 40% na aprovação da proposta\n\
                 - 30% na entrega do layout\n\
                 - 30% na entrega final",
                fields.text("value")
            ),
        )
        .clause(
            "PRAZO DE ENTREGA",
            "30 dias corridos após aprovação do projeto e recebimento do primeiro pagamento.",
        )
        .block(
            "O QUE ESTÁ INCLUSO:\n\
             ✅ Design responsivo (mobile, tablet, desktop)\n\
             ✅ Otimização de SEO básica\n\
             ✅ Integração com redes sociais\n\
             ✅ Formulário de contato\n\
             ✅ 30 dias de garantia e suporte\n\
             ✅ Treinamento de uso",
        )
        .block(
            "O QUE NÃO ESTÁ INCLUSO:\n\
             ❌ Hospedagem e domínio (indicamos fornecedores)\n\
             ❌ Produção de conteúdo (textos e imagens)\n\
             ❌ Marketing digital",
        )
        .clause(
            "VALIDADE DA PROPOSTA",
            "Esta proposta tem validade de 15 dias.",
        )
        .block("Estamos à disposição para esclarecimentos!")
        .block(format!("Atenciosamente,\n{}", agency))
        .finish()
}

fn maintenance_terms(fields: &ResolvedFields) -> String {
    let included = "Serviços mensais inclusos:\n\
                    - Atualização de conteúdo (até 5h/mês)\n\
                    - Backup semanal\n\
                    - Monitoramento de segurança\n\
                    - Suporte técnico via WhatsApp\n\
                    - Relatório mensal de desempenho";
    let services = match fields.opt_text("description").map(str::trim_end) {
        Some(description) => format!("{}\n\n{}", description, included),
        None => included.to_string(),
    };

    Draft::numbered("TERMO DE MANUTENÇÃO E SUPORTE")
        .block(parties(fields))
        .block(contractor(fields))
        .clause(
            "OBJETO",
            "Manutenção e suporte técnico conforme especificado.",
        )
        .clause("SERVIÇOS INCLUSOS", services)
        .clause(
            "VALOR",
            format!(
                "Valor mensal: R$ {}\nPagamento todo dia 05 de cada mês.",
                fields.text("value")
            ),
        )
        .clause("VIGÊNCIA", "Contrato mensal, renovável automaticamente.")
        .clause(
            "SLA - TEMPO DE RESPOSTA",
            "- Suporte: até 24h úteis\n\
             - Correção de bugs críticos: até 48h úteis\n\
             - Atualizações de conteúdo: até 5 dias úteis",
        )
        .clause(
            "RESCISÃO",
            "Cancelamento com 30 dias de antecedência, sem multa.",
        )
        .block(dated(fields))
        .block(SIGNATURES)
        .finish()
}
