//! Page controllers
//!
//! Each controller owns the form snapshot of one page and turns library
//! results into output text, toasts and navigation. Failures never leave a
//! page unusable: they become a toast and the form keeps its values.

use chrono::Local;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use zanlu_templates::{
    compose, ComposeError, CompositionRequest, FieldValue, GeneratorDefinition, GeneratorId,
    TemplateRegistry, ValidationError,
};

use super::export::{contract_file_name, ArtifactSink};
use super::identity::{IdentityProvider, Session};
use super::notify::{Notifier, Toast};
use super::routes::{navigate, Route};
use crate::error::{ExportError, StudioError};
use crate::prospecting::{DigitSource, ProspectGenerator, ProspectRecord};

const MISSING_FIELDS: &str = "Campos obrigatórios";
const COPIED: &str = "Copiado!";
const AGENCY_FIELD: &str = "agencyName";
const REFERRAL_BASE: &str = "https://zanlunet.app/ref";

/// User-facing strings of one generator page
struct PageTexts {
    missing: &'static str,
    generated: Option<(&'static str, &'static str)>,
    copied: &'static str,
    downloaded: &'static str,
}

fn page_texts(generator: GeneratorId) -> PageTexts {
    match generator {
        GeneratorId::Prompt | GeneratorId::SaasBrief => PageTexts {
            missing: "Preencha todos os campos para gerar o prompt",
            generated: None,
            copied: "Prompt copiado para a área de transferência",
            downloaded: "Seu prompt está sendo baixado",
        },
        GeneratorId::Contract => PageTexts {
            missing: "Preencha todos os campos para gerar o contrato",
            generated: Some(("Contrato gerado!", "Seu contrato foi gerado com sucesso")),
            copied: "Contrato copiado para a área de transferência",
            downloaded: "Seu contrato está sendo baixado",
        },
        GeneratorId::Message => PageTexts {
            missing: "Escolha o tipo e nicho para gerar a mensagem",
            generated: None,
            copied: "Mensagem copiada para área de transferência",
            downloaded: "Sua mensagem está sendo baixada",
        },
    }
}

/// Controller for a text generator page (prompt, SaaS brief, contract,
/// message)
pub struct GeneratorPage<N, S> {
    registry: Arc<TemplateRegistry>,
    request: CompositionRequest,
    output: Option<String>,
    notifier: N,
    sink: S,
}

impl<N: Notifier, S: ArtifactSink> GeneratorPage<N, S> {
    pub fn new(
        registry: Arc<TemplateRegistry>,
        generator: GeneratorId,
        notifier: N,
        sink: S,
    ) -> Self {
        Self {
            registry,
            request: CompositionRequest::new(generator),
            output: None,
            notifier,
            sink,
        }
    }

    /// Sign documents as `agency` on generators that carry an agency field
    pub fn with_agency(mut self, agency: &str) -> Self {
        let has_field = self
            .definition()
            .is_some_and(|d| d.field(AGENCY_FIELD).is_some());
        if has_field {
            self.set(AGENCY_FIELD, agency);
        }
        self
    }

    pub fn generator(&self) -> GeneratorId {
        self.request.generator
    }

    pub fn definition(&self) -> Option<&GeneratorDefinition> {
        self.registry.definition(self.request.generator)
    }

    /// Current form snapshot
    pub fn request(&self) -> &CompositionRequest {
        &self.request
    }

    /// Last generated text (or the sentinel of a missing template)
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Set a text or single-select field
    pub fn set(&mut self, name: &str, value: &str) {
        self.request = self.request.clone().with_text(name, value);
    }

    /// Toggle one option of a multi-select field
    pub fn toggle(&mut self, name: &str, option: &str) {
        self.request = self.request.clone().toggled(name, option);
    }

    pub fn clear(&mut self, name: &str) {
        self.request = self.request.clone().without(name);
    }

    /// Compose the current snapshot, stamped with the local time
    ///
    /// Missing required fields raise a destructive toast and keep the
    /// previous output. A missing template shows its sentinel text.
    pub fn generate(&mut self) -> Result<&str, StudioError> {
        let texts = page_texts(self.request.generator);
        let request = self.request.clone().at(Local::now());

        let text = match compose(&self.registry, &request) {
            Ok(document) => {
                if let Some((title, description)) = texts.generated {
                    self.notifier.notify(Toast::new(title, description));
                }
                document.text
            }
            Err(ComposeError::NotFound(not_found)) => {
                debug!(%not_found, "showing sentinel");
                not_found.sentinel.to_string()
            }
            Err(ComposeError::Validation(err)) => {
                warn!(generator = %request.generator, %err, "generation rejected");
                self.notifier
                    .notify(Toast::destructive(MISSING_FIELDS, texts.missing));
                return Err(ComposeError::Validation(err).into());
            }
            Err(err) => {
                self.notifier
                    .notify(Toast::destructive("Erro ao gerar", err.to_string()));
                return Err(err.into());
            }
        };

        Ok(self.output.insert(text).as_str())
    }

    pub fn copy(&mut self) -> Result<(), StudioError> {
        let texts = page_texts(self.request.generator);
        let result = match self.output.as_deref() {
            Some(text) => self.sink.copy_to_clipboard(text),
            None => Err(ExportError::Empty),
        };
        self.report(result, (COPIED, texts.copied), "Erro ao copiar")
    }

    /// Save the output as a text file and return its name
    pub fn download(&mut self) -> Result<String, StudioError> {
        let texts = page_texts(self.request.generator);
        let filename = self.file_name();
        let result = match self.output.as_deref() {
            Some(text) => self.sink.download_as_text_file(&filename, text),
            None => Err(ExportError::Empty),
        };
        self.report(
            result,
            ("Download iniciado", texts.downloaded),
            "Erro ao baixar",
        )?;
        Ok(filename)
    }

    /// Contracts are named after the client, other generators after
    /// themselves
    pub fn file_name(&self) -> String {
        let client = self.request.get("clientName").and_then(FieldValue::as_text);
        match (self.request.generator, client) {
            (GeneratorId::Contract, Some(name)) if !name.trim().is_empty() => {
                contract_file_name(name.trim())
            }
            (generator, _) => format!("{}.txt", generator.name().replace('_', "-")),
        }
    }

    fn report(
        &self,
        result: Result<(), ExportError>,
        success: (&str, &str),
        failure_title: &str,
    ) -> Result<(), StudioError> {
        match result {
            Ok(()) => {
                self.notifier.notify(Toast::new(success.0, success.1));
                Ok(())
            }
            Err(err) => {
                let err = StudioError::from(err);
                self.notifier
                    .notify(Toast::destructive(failure_title, err.user_message()));
                Err(err)
            }
        }
    }
}

/// Controller for the prospecting page
pub struct ProspectingPage<N, S, D> {
    generator: ProspectGenerator<D>,
    batch_size: usize,
    city: String,
    category: String,
    prospects: Vec<ProspectRecord>,
    notifier: N,
    sink: S,
}

impl<N: Notifier, S: ArtifactSink, D: DigitSource> ProspectingPage<N, S, D> {
    pub fn new(generator: ProspectGenerator<D>, batch_size: usize, notifier: N, sink: S) -> Self {
        Self {
            generator,
            batch_size,
            city: String::new(),
            category: String::new(),
            prospects: Vec::new(),
            notifier,
            sink,
        }
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.trim().to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.trim().to_string();
    }

    pub fn prospects(&self) -> &[ProspectRecord] {
        &self.prospects
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fabricate one batch for the chosen city and niche
    pub fn search(&mut self) -> Result<&[ProspectRecord], StudioError> {
        let missing: Vec<String> = [("city", &self.city), ("category", &self.category)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            self.notifier.notify(Toast::destructive(
                MISSING_FIELDS,
                "Preencha cidade e nicho para prospectar",
            ));
            return Err(ComposeError::from(ValidationError { missing }).into());
        }

        self.prospects = self
            .generator
            .generate(&self.city, &self.category, self.batch_size);
        self.notifier.notify(Toast::new(
            "Clientes encontrados!",
            format!(
                "{} potenciais clientes em {}",
                self.prospects.len(),
                self.city
            ),
        ));
        Ok(&self.prospects)
    }

    /// Copy the phone number of the prospect at `index`
    pub fn copy_contact(&mut self, index: usize) -> Result<(), StudioError> {
        let result = match self.prospects.get(index) {
            Some(prospect) => self.sink.copy_to_clipboard(&prospect.phone_number),
            None => Err(ExportError::Empty),
        };
        match result {
            Ok(()) => {
                self.notifier.notify(Toast::new(
                    COPIED,
                    "Contato copiado para área de transferência",
                ));
                Ok(())
            }
            Err(err) => {
                let err = StudioError::from(err);
                self.notifier
                    .notify(Toast::destructive("Erro ao copiar", err.user_message()));
                Err(err)
            }
        }
    }
}

/// Referral link of a signed-in user: the first eight characters of the
/// user id under the referral base
pub fn affiliate_link(session: &Session) -> String {
    let user_id = session.user_id.to_string();
    let code: String = user_id.chars().take(8).collect();
    format!("{}/{}", REFERRAL_BASE, code)
}

/// Commission counters shown on the affiliates page
///
/// Sales tracking lives outside the studio, so every counter reads zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStats {
    pub total_sales: u32,
    pub total_commission: u32,
    pub sales_this_month: u32,
    pub next_payout: u32,
}

/// Controller for the affiliates page
pub struct AffiliatesPage<P, N, S> {
    identity: Arc<P>,
    link: Option<String>,
    notifier: N,
    sink: S,
}

impl<P: IdentityProvider, N: Notifier, S: ArtifactSink> AffiliatesPage<P, N, S> {
    pub fn new(identity: Arc<P>, notifier: N, sink: S) -> Self {
        Self {
            identity,
            link: None,
            notifier,
            sink,
        }
    }

    /// Load the referral link for the current session
    ///
    /// Without a session the page redirects to `/auth` and keeps no link.
    pub async fn open(&mut self) -> Route {
        match self.identity.current_session().await {
            Some(session) => {
                self.link = Some(affiliate_link(&session));
                Route::Affiliates
            }
            None => {
                debug!("no session, affiliates page redirects to /auth");
                self.link = None;
                Route::Auth
            }
        }
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn stats(&self) -> AffiliateStats {
        AffiliateStats::default()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn copy_link(&mut self) -> Result<(), StudioError> {
        let result = match self.link.as_deref() {
            Some(link) => self.sink.copy_to_clipboard(link),
            None => Err(ExportError::Empty),
        };
        match result {
            Ok(()) => {
                self.notifier
                    .notify(Toast::new("Link copiado!", "Compartilhe com seus contatos"));
                Ok(())
            }
            Err(err) => {
                let err = StudioError::from(err);
                self.notifier
                    .notify(Toast::destructive("Erro ao copiar", err.user_message()));
                Err(err)
            }
        }
    }
}

/// Controller for the auth page and the dashboard's sign-out button
pub struct AuthPage<P, N> {
    identity: Arc<P>,
    notifier: N,
}

impl<P: IdentityProvider, N: Notifier> AuthPage<P, N> {
    pub fn new(identity: Arc<P>, notifier: N) -> Self {
        Self { identity, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Create an account; the user stays on the auth page
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), StudioError> {
        match self.identity.sign_up(email, password).await {
            Ok(()) => {
                self.notifier.notify(Toast::new(
                    "Conta criada!",
                    "Verifique seu email para confirmar sua conta.",
                ));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .notify(Toast::destructive("Erro ao criar conta", err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Sign in and return the page to show next
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Route, StudioError> {
        match self.identity.sign_in(email, password).await {
            Ok(_) => {
                self.notifier
                    .notify(Toast::new("Login realizado!", "Redirecionando..."));
                Ok(Route::Dashboard)
            }
            Err(err) => {
                self.notifier
                    .notify(Toast::destructive("Erro ao fazer login", err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Sign out and return to the landing page
    pub async fn sign_out(&self) -> Result<Route, StudioError> {
        self.identity.sign_out().await?;
        self.notifier
            .notify(Toast::new("Logout realizado", "Até logo!"));
        Ok(Route::Landing)
    }

    /// Resolve `path` against the current session
    pub async fn open(&self, path: &str) -> Route {
        let session = self.identity.current_session().await;
        navigate(path, session.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospecting::{ProspectTables, SequenceDigits};
    use crate::shell::export::LocalArtifacts;
    use crate::shell::identity::InMemoryIdentity;
    use crate::shell::notify::ToastLog;

    fn page(generator: GeneratorId) -> GeneratorPage<ToastLog, LocalArtifacts> {
        GeneratorPage::new(
            Arc::new(TemplateRegistry::new()),
            generator,
            ToastLog::new(),
            LocalArtifacts::new("unused"),
        )
    }

    #[test]
    fn test_validation_failure_keeps_form_and_output() {
        let mut page = page(GeneratorId::Message);
        page.set("tone", "formal");
        page.set("messageKind", "curta");
        let before = page.request().clone();

        let err = page.generate().unwrap_err();
        assert!(matches!(
            err,
            StudioError::Compose(ComposeError::Validation(ref v))
                if v.missing == ["niche", "senderName"]
        ));

        let toast = page.notifier().last().unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Campos obrigatórios");
        assert_eq!(
            toast.description,
            "Escolha o tipo e nicho para gerar a mensagem"
        );
        assert_eq!(page.request(), &before);
        assert_eq!(page.output(), None);
    }

    #[test]
    fn test_missing_template_shows_sentinel_without_toast() {
        let mut page = page(GeneratorId::Message);
        for (name, value) in [
            ("tone", "casual"),
            ("messageKind", "followup"),
            ("niche", "Construtora"),
            ("senderName", "Lucas"),
        ] {
            page.set(name, value);
        }

        assert_eq!(page.generate().unwrap(), "Mensagem não encontrada");
        assert!(page.notifier().is_empty());
    }

    #[test]
    fn test_copy_before_generate_fails_softly() {
        let mut page = page(GeneratorId::Prompt);
        assert!(matches!(
            page.copy(),
            Err(StudioError::Export(ExportError::Empty))
        ));
        let toast = page.notifier().last().unwrap();
        assert_eq!(toast.title, "Erro ao copiar");
        assert_eq!(toast.description, "Nothing to export");
    }

    #[test]
    fn test_prompt_copy() {
        let mut page = page(GeneratorId::Prompt);
        page.set("projectType", "dashboard");
        page.set("visualStyle", "Dark Futurista com Neon");
        page.set("niche", "Saúde/Fitness");
        let text = page.generate().unwrap().to_string();

        page.copy().unwrap();
        assert_eq!(page.sink().clipboard(), Some(text.as_str()));
        assert_eq!(
            page.notifier().last().unwrap(),
            Toast::new("Copiado!", "Prompt copiado para a área de transferência")
        );
    }

    #[test]
    fn test_agency_applies_only_where_declared() {
        let contract = page(GeneratorId::Contract).with_agency("Estúdio Norte");
        assert_eq!(
            contract.request().get("agencyName").and_then(FieldValue::as_text),
            Some("Estúdio Norte")
        );

        let prompt = page(GeneratorId::Prompt).with_agency("Estúdio Norte");
        assert!(prompt.request().get("agencyName").is_none());
    }

    #[test]
    fn test_file_names() {
        let mut contract = page(GeneratorId::Contract);
        assert_eq!(contract.file_name(), "contract.txt");
        contract.set("clientName", "Ana Silva");
        assert_eq!(contract.file_name(), "contrato-ana-silva.txt");
        assert_eq!(page(GeneratorId::SaasBrief).file_name(), "saas-brief.txt");
    }

    #[test]
    fn test_prospecting_requires_city_and_niche() {
        let generator = ProspectGenerator::with_digits(
            ProspectTables::builtin().unwrap(),
            SequenceDigits::new([123]),
        );
        let mut page = ProspectingPage::new(
            generator,
            60,
            ToastLog::new(),
            LocalArtifacts::new("unused"),
        );
        page.set_city("Recife");

        let err = page.search().unwrap_err();
        assert!(matches!(
            err,
            StudioError::Compose(ComposeError::Validation(ref v)) if v.missing == ["category"]
        ));
        assert_eq!(
            page.notifier().last().unwrap().description,
            "Preencha cidade e nicho para prospectar"
        );

        page.set_category("Loja");
        assert_eq!(page.search().unwrap().len(), 60);
        assert_eq!(
            page.notifier().last().unwrap(),
            Toast::new("Clientes encontrados!", "60 potenciais clientes em Recife")
        );

        page.copy_contact(0).unwrap();
        assert_eq!(page.sink().clipboard(), Some("(81) 90123-0123"));
        assert!(page.copy_contact(60).is_err());
    }

    fn session_for(user_id: &str) -> Session {
        Session {
            user_id: uuid::Uuid::parse_str(user_id).unwrap(),
            email: "lucas@zanlu.net".into(),
            signed_in_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_affiliate_link_uses_user_id_prefix() {
        let session = session_for("3f2a9c1e-7b4d-4e21-9a0f-1c2d3e4f5a6b");
        let link = affiliate_link(&session);
        assert_eq!(link, "https://zanlunet.app/ref/3f2a9c1e");
    }

    #[tokio::test]
    async fn test_affiliates_page_copies_link_of_signed_in_user() {
        let identity = Arc::new(InMemoryIdentity::new());
        let mut page = AffiliatesPage::new(
            identity.clone(),
            ToastLog::new(),
            LocalArtifacts::new("unused"),
        );

        assert_eq!(page.open().await, Route::Auth);
        assert!(page.copy_link().is_err());
        assert_eq!(page.notifier().last().unwrap().title, "Erro ao copiar");

        identity.sign_up("a@b.com", "123456").await.unwrap();
        let session = identity.sign_in("a@b.com", "123456").await.unwrap();
        assert_eq!(page.open().await, Route::Affiliates);

        let expected = affiliate_link(&session);
        assert_eq!(page.link(), Some(expected.as_str()));
        page.copy_link().unwrap();
        assert_eq!(page.sink().clipboard(), Some(expected.as_str()));
        assert_eq!(
            page.notifier().last().unwrap(),
            Toast::new("Link copiado!", "Compartilhe com seus contatos")
        );
        assert_eq!(page.stats(), AffiliateStats::default());
    }

    #[tokio::test]
    async fn test_auth_flow_toasts_and_routes() {
        let identity = Arc::new(InMemoryIdentity::new());
        let page = AuthPage::new(identity, ToastLog::new());

        assert_eq!(page.open("/dashboard").await, Route::Auth);
        assert!(page.sign_in("a@b.com", "123456").await.is_err());
        assert_eq!(
            page.notifier().last().unwrap(),
            Toast::destructive("Erro ao fazer login", "Invalid login credentials")
        );

        page.sign_up("a@b.com", "123456").await.unwrap();
        assert_eq!(page.notifier().last().unwrap().title, "Conta criada!");

        assert_eq!(
            page.sign_in("a@b.com", "123456").await.unwrap(),
            Route::Dashboard
        );
        assert_eq!(page.open("/dashboard").await, Route::Dashboard);

        assert_eq!(page.sign_out().await.unwrap(), Route::Landing);
        assert_eq!(
            page.notifier().last().unwrap(),
            Toast::new("Logout realizado", "Até logo!")
        );
        assert_eq!(page.open("/gerador-prompts").await, Route::Auth);
    }
}
