//! End-to-end flows through the page controllers

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::TempDir;

use zanlu_studio::prospecting::{ProspectGenerator, ProspectTables, SequenceDigits};
use zanlu_studio::shell::{
    AuthPage, GeneratorPage, InMemoryIdentity, LocalArtifacts, ProspectingPage, Route, Toast,
    ToastLog,
};
use zanlu_studio::templates::{GeneratorId, TemplateRegistry};
use zanlu_studio::{ConfigLoader, StudioError};

fn generator_page(
    generator: GeneratorId,
    downloads: &TempDir,
) -> GeneratorPage<ToastLog, LocalArtifacts> {
    GeneratorPage::new(
        Arc::new(TemplateRegistry::new()),
        generator,
        ToastLog::new(),
        LocalArtifacts::new(downloads.path()),
    )
}

#[test]
fn contract_generated_and_downloaded() {
    let downloads = TempDir::new().unwrap();
    let mut page = generator_page(GeneratorId::Contract, &downloads);
    page.set("contractType", "venda-site");
    page.set("clientName", "Ana Silva");
    page.set("taxId", "123.456.789-00");
    page.set("value", "5000");

    let text = page.generate().unwrap().to_string();
    assert!(text.contains("2. VALOR E FORMA DE PAGAMENTO\nValor total: R$ 5000"));
    assert!(!text.contains("DESCRIÇÃO DOS SERVIÇOS"));
    assert_eq!(
        page.notifier().last().unwrap(),
        Toast::new("Contrato gerado!", "Seu contrato foi gerado com sucesso")
    );

    assert_eq!(page.download().unwrap(), "contrato-ana-silva.txt");
    let saved = std::fs::read_to_string(downloads.path().join("contrato-ana-silva.txt")).unwrap();
    assert_eq!(saved, text);
    assert_eq!(
        page.notifier().last().unwrap(),
        Toast::new("Download iniciado", "Seu contrato está sendo baixado")
    );
}

#[test]
fn contract_signed_by_configured_agency() {
    let downloads = TempDir::new().unwrap();
    let mut page = generator_page(GeneratorId::Contract, &downloads).with_agency("Estúdio Norte");
    page.set("contractType", "termo-manutencao");
    page.set("clientName", "Padaria Central");
    page.set("taxId", "12.345.678/0001-90");
    page.set("value", "350");

    let text = page.generate().unwrap();
    assert!(text.contains("Estúdio Norte"));
    assert!(!text.contains("ZanluNet"));
}

#[test]
fn formal_and_casual_messages_differ_only_in_framing() {
    let downloads = TempDir::new().unwrap();
    let compose = |tone: &str| {
        let mut page = generator_page(GeneratorId::Message, &downloads);
        page.set("tone", tone);
        page.set("messageKind", "curta");
        page.set("niche", "Restaurante");
        page.set("senderName", "Lucas");
        page.generate().unwrap().to_string()
    };

    let formal = compose("formal");
    let casual = compose("casual");
    let body = "Notei que seu restaurante ainda não tem um site profissional.";

    assert!(formal.starts_with("Prezado(a),\n\n"));
    assert!(formal.ends_with("Atenciosamente,\nLucas"));
    assert!(casual.starts_with("Oi! 👋\n\n"));
    assert!(casual.ends_with("Abraço! 😉\nLucas"));
    assert!(formal.contains(body) && casual.contains(body));
}

#[test]
fn form_edits_replace_the_snapshot() {
    let downloads = TempDir::new().unwrap();
    let mut page = generator_page(GeneratorId::Prompt, &downloads);
    page.set("projectType", "saas");
    page.set("visualStyle", "Minimalista Clean");
    page.set("niche", "Educação/Cursos");
    page.toggle("features", "Blog e conteúdo");
    page.toggle("features", "Autenticação de usuários");
    page.toggle("features", "Área de membros");
    page.toggle("features", "Blog e conteúdo");

    let text = page.generate().unwrap();
    assert!(text.contains(
        "FUNCIONALIDADES ESPECÍFICAS:\n- Autenticação de usuários\n- Área de membros\n\n"
    ));
    assert!(!text.contains("Blog e conteúdo"));
}

#[test]
fn prospecting_batch_from_repository_config() {
    let loader = ConfigLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/config"));
    let config = loader.load_studio().unwrap();
    let tables = loader.load_prospect_tables(&config).unwrap();

    let generator = ProspectGenerator::with_digits(tables, SequenceDigits::new([321, 12, 3456]));
    let mut page = ProspectingPage::new(
        generator,
        config.prospecting.batch_size,
        ToastLog::new(),
        LocalArtifacts::new("unused"),
    );
    page.set_city("São Paulo");
    page.set_category("Restaurante");

    let prospects = page.search().unwrap().to_vec();
    assert_eq!(prospects.len(), 60);
    assert_eq!(prospects[0].name, "Restaurante e Pizzaria");
    assert_eq!(prospects[14].name, "Bistrô");
    assert_eq!(prospects[15].name, "Restaurante e Pizzaria 2");
    assert_eq!(prospects[59].name, "Bistrô 4");
    assert_eq!(prospects[0].phone_number, "(11) 90012-3456");
    assert_eq!(prospects[0].address, "Av. Paulista, 321 - São Paulo");
    assert!(prospects.iter().all(|p| p.category == "Restaurante"));
    assert_eq!(
        page.notifier().last().unwrap(),
        Toast::new("Clientes encontrados!", "60 potenciais clientes em São Paulo")
    );
}

#[test]
fn prospecting_unknown_locale_uses_fallbacks() {
    let generator = ProspectGenerator::with_digits(
        ProspectTables::builtin().unwrap(),
        SequenceDigits::new([100]),
    );
    let mut page = ProspectingPage::new(generator, 60, ToastLog::new(), LocalArtifacts::new("x"));
    page.set_city("Joinville");
    page.set_category("Padaria");

    let prospects = page.search().unwrap();
    assert_eq!(prospects[0].name, "Estabelecimento");
    assert_eq!(prospects[59].name, "Estabelecimento 60");
    assert!(prospects.iter().all(|p| p.phone_number.starts_with("(11) 9")));
    assert_eq!(prospects[0].address, "Rua Principal, 100 - Joinville");
}

#[tokio::test]
async fn session_gate_follows_identity() {
    let identity = Arc::new(InMemoryIdentity::new());
    let auth = AuthPage::new(identity.clone(), ToastLog::new());

    for tile_path in ["/dashboard", "/prospeccao-clientes", "/academia"] {
        assert_eq!(auth.open(tile_path).await, Route::Auth);
    }
    assert_eq!(auth.open("/").await, Route::Landing);

    let err = auth.sign_up("x@y.com", "curta").await.unwrap_err();
    assert!(matches!(err, StudioError::Identity(_)));
    assert_eq!(
        auth.notifier().last().unwrap(),
        Toast::destructive("Erro ao criar conta", "Password should be at least 6 characters")
    );

    auth.sign_up("x@y.com", "senha-forte").await.unwrap();
    assert_eq!(auth.sign_in("x@y.com", "senha-forte").await.unwrap(), Route::Dashboard);
    assert_eq!(auth.open("/prospeccao-clientes").await, Route::Prospecting);
    assert_eq!(auth.open("/inexistente").await, Route::NotFound);
}
