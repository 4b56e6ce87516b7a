//! Ready-made outreach messages
//!
//! Bodies are keyed by message kind and client niche; the tone picks the
//! greeting and closing wrapped around the body. Not every kind has a body
//! for every niche.

use crate::definition::{EnumOption, FieldSpec, GeneratorDefinition, GeneratorId, Section};
use crate::registry::{CategoryPath, TemplateEntry, TemplateTable};
use crate::request::ResolvedFields;

const TONE_FORMAL: &str = "formal";
const TONE_CASUAL: &str = "casual";

const SHORT: &[(&str, &str)] = &[
    (
        "Restaurante",
        "Notei que seu restaurante ainda não tem um site profissional. Que tal ter um cardápio digital moderno e atrair mais clientes? Posso te mostrar como! 🍽️",
    ),
    (
        "Loja",
        "Vi que sua loja tem potencial para vender muito mais online. Já pensou em ter uma loja virtual profissional? Posso te ajudar! 💻",
    ),
    (
        "Clínica",
        "Sua clínica merece uma presença digital à altura. Que tal um site profissional com agendamento online? Vamos conversar! 📅",
    ),
    (
        "Academia",
        "Sua academia pode atrair muito mais alunos com presença digital. Que tal um site com agendamento de aulas e planos online? Vamos conversar! 🏋️",
    ),
    (
        "Salão",
        "Seu salão merece estar online! Que tal um site com agendamento automático e galeria de trabalhos? Posso te ajudar! 💇",
    ),
    (
        "Construtora",
        "Sua construtora precisa de uma presença digital profissional. Portfólio de obras + formulário de orçamento? Vamos conversar! 📐",
    ),
];

const LONG: &[(&str, &str)] = &[
    (
        "Restaurante",
        "Espero que esteja tudo bem! Eu sou da {agencyName} e somos especializados em criar sites profissionais para restaurantes.

Notei que seu negócio tem muito potencial, mas ainda não tem uma presença digital forte. Hoje em dia, 80% dos clientes pesquisam online antes de escolher onde comer.

Podemos criar para você:
✅ Site profissional e moderno
✅ Cardápio digital interativo
✅ Sistema de pedidos online
✅ Integração com WhatsApp
✅ Fotos profissionais dos pratos

Tudo por um preço justo e com pagamento facilitado.

Que tal conversarmos? Tenho certeza que posso ajudar seu restaurante a crescer! 🍽️

Aguardo seu retorno!",
    ),
    (
        "Loja",
        "Tudo bem? Sou da {agencyName}, especializada em criar lojas virtuais profissionais.

Reparei que sua loja tem produtos incríveis, mas ainda não está vendendo online. Você sabia que pode aumentar suas vendas em até 300% com uma loja virtual?

Oferecemos:
✅ Loja virtual completa
✅ Integração com pagamento
✅ Controle de estoque
✅ Painel administrativo
✅ Suporte técnico

Investimento acessível e resultados garantidos!

Posso te mostrar alguns cases de sucesso. Vamos conversar? 🛍️",
    ),
    (
        "Clínica",
        "Sou da {agencyName} e trabalho com transformação digital para clínicas e consultórios.

Seus pacientes estão buscando você online, mas será que te encontram facilmente? Um site profissional pode:

✅ Aumentar o número de agendamentos
✅ Passar mais credibilidade
✅ Facilitar o contato dos pacientes
✅ Mostrar seus diferenciais
✅ Integrar com WhatsApp

Temos planos especiais para profissionais da saúde!

Que tal marcarmos uma conversa rápida? 👨‍⚕️",
    ),
    (
        "Academia",
        "Sou da {agencyName} e ajudo academias a crescerem no digital!

Sua academia pode atrair muito mais alunos com uma presença online forte:

✅ Site profissional com seus diferenciais
✅ Agendamento de aulas online
✅ Galeria de fotos da estrutura
✅ Venda de planos online
✅ Integração com redes sociais

Academias com site profissional convertem 3x mais!

Vamos conversar sobre como podemos ajudar? 💪",
    ),
];

const FOLLOW_UP: &[(&str, &str)] = &[
    (
        "Restaurante",
        "Vi que você visualizou minha mensagem. Conseguiu dar uma olhada na proposta? Se tiver alguma dúvida, é só chamar! Tenho cases incríveis para te mostrar 🍽️",
    ),
    (
        "Loja",
        "Pensei em você e queria saber se gostaria de ver alguns exemplos de lojas virtuais que criamos. Tenho certeza que vai gostar! 🛍️",
    ),
    (
        "Clínica",
        "Conseguiu pensar na nossa conversa? Preparei uma proposta especial para sua clínica. Quando podemos conversar? 👨‍⚕️",
    ),
];

pub fn definition() -> GeneratorDefinition {
    GeneratorDefinition {
        id: GeneratorId::Message,
        name: "Mensagens Prontas".into(),
        description: "Copies otimizadas para vendas".into(),
        fields: vec![
            FieldSpec::select(
                "tone",
                "Tom",
                vec![
                    EnumOption::new(TONE_FORMAL, "Formal"),
                    EnumOption::new(TONE_CASUAL, "Descontraído"),
                ],
            )
            .required()
            .placeholder("Escolha o tom"),
            FieldSpec::select(
                "messageKind",
                "Tipo de Mensagem",
                vec![
                    EnumOption::new("curta", "Mensagem Curta (Primeira abordagem)"),
                    EnumOption::new("longa", "Mensagem Longa (Detalhada)"),
                    EnumOption::new("followup", "Follow-up (Segunda mensagem)"),
                ],
            )
            .required()
            .placeholder("Escolha o tipo"),
            FieldSpec::select("niche", "Nicho do Cliente", super::client_niches())
                .required()
                .placeholder("Escolha o nicho"),
            FieldSpec::text("senderName", "Seu Nome")
                .required()
                .placeholder("Quem assina a mensagem"),
            FieldSpec::text("recipientName", "Nome do Contato")
                .placeholder("Opcional: nome de quem vai receber"),
            FieldSpec::text("agencyName", "Agência").default_value(super::DEFAULT_AGENCY_NAME),
        ],
        axes: vec!["messageKind", "niche"],
        sections: vec![Section::render(greeting).before(), Section::render(closing)],
        not_found: "Mensagem não encontrada",
    }
}

fn greeting(fields: &ResolvedFields) -> Option<String> {
    let recipient = fields.opt_text("recipientName");
    let line = match (fields.text("tone"), recipient) {
        (TONE_CASUAL, Some(name)) => format!("Oi, {}! 👋", name),
        (TONE_CASUAL, None) => "Oi! 👋".to_string(),
        (_, Some(name)) => format!("Prezado(a) {},", name),
        (_, None) => "Prezado(a),".to_string(),
    };
    Some(line)
}

fn closing(fields: &ResolvedFields) -> Option<String> {
    let sender = fields.opt_text("senderName")?;
    let line = match fields.text("tone") {
        TONE_CASUAL => format!("Abraço! 😉\n{}", sender),
        _ => format!("Atenciosamente,\n{}", sender),
    };
    Some(line)
}

pub fn table() -> TemplateTable {
    let mut table = TemplateTable::new(definition());
    for (kind, bodies) in [("curta", SHORT), ("longa", LONG), ("followup", FOLLOW_UP)] {
        for &(niche, body) in bodies {
            let path = CategoryPath::pair(kind, niche);
            table = table.with(path, TemplateEntry::Literal(body));
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use crate::composer::compose;
    use crate::definition::GeneratorId;
    use crate::error::ComposeError;
    use crate::registry::{CategoryPath, TemplateRegistry};
    use crate::request::CompositionRequest;

    fn request(tone: &str, kind: &str, niche: &str) -> CompositionRequest {
        CompositionRequest::new(GeneratorId::Message)
            .with_text("tone", tone)
            .with_text("messageKind", kind)
            .with_text("niche", niche)
            .with_text("senderName", "Lucas Zanlu")
            .with_text("recipientName", "Marina")
    }

    #[test]
    fn test_formal_message_frame() {
        let text = compose(&TemplateRegistry::new(), &request("formal", "longa", "Clínica"))
            .unwrap()
            .text;

        assert_eq!(text.lines().next(), Some("Prezado(a) Marina,"));
        assert!(text.ends_with("Atenciosamente,\nLucas Zanlu"));
        assert!(text.contains("Sou da ZanluNet - Soluções Digitais e trabalho"));
    }

    #[test]
    fn test_casual_message_has_informal_markers() {
        let registry = TemplateRegistry::new();
        let casual = compose(&registry, &request("casual", "curta", "Salão")).unwrap().text;
        let formal = compose(&registry, &request("formal", "curta", "Salão")).unwrap().text;

        assert!(casual.starts_with("Oi, Marina! 👋\n\n"));
        assert!(casual.ends_with("Abraço! 😉\nLucas Zanlu"));
        assert!(!formal.contains('👋'));
        assert!(!formal.contains('😉'));
    }

    #[test]
    fn test_greeting_without_recipient() {
        let request = request("formal", "followup", "Loja").without("recipientName");
        let text = compose(&TemplateRegistry::new(), &request).unwrap().text;
        assert!(text.starts_with("Prezado(a),\n\nPensei em você"));
    }

    #[test]
    fn test_unconfigured_combination_yields_sentinel() {
        let err = compose(&TemplateRegistry::new(), &request("casual", "followup", "Construtora"))
            .unwrap_err();

        match err {
            ComposeError::NotFound(nf) => {
                assert_eq!(nf.sentinel, "Mensagem não encontrada");
                assert_eq!(nf.path, CategoryPath::pair("followup", "Construtora"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_sender_is_required() {
        let request = request("formal", "curta", "Loja").without("senderName");
        let err = compose(&TemplateRegistry::new(), &request).unwrap_err();
        assert_eq!(err.missing_fields(), ["senderName"]);
    }
}
