//! Presentation shell
//!
//! The thin layer between the generators and the outside world: routes and
//! the session gate, the identity collaborator, toasts, clipboard and file
//! export, and one controller per page.

pub mod export;
pub mod identity;
pub mod notify;
pub mod pages;
pub mod routes;

pub use export::{contract_file_name, ArtifactSink, LocalArtifacts};
pub use identity::{
    IdentityProvider, InMemoryIdentity, Session, SessionCallback, SessionEvent, SubscriptionId,
};
pub use notify::{Notifier, Toast, ToastLog, ToastVariant, TracingNotifier};
pub use pages::{
    affiliate_link, AffiliateStats, AffiliatesPage, AuthPage, GeneratorPage, ProspectingPage,
};
pub use routes::{
    navigate, Course, DashboardTile, Route, SupportMaterial, ACADEMY_COURSES, DASHBOARD_TILES,
    SUPPORT_MATERIALS,
};
