//! Application assembly shared by the binary and the HTTP tests.
//!
//! Driven adapters are chosen once ([`Adapters::postgres`] or
//! [`Adapters::in_memory`]), wrapped by the domain services, and handed to the
//! handlers as `Arc<dyn Port>` trait objects inside [`HttpState`].

use std::sync::Arc;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::{Clock, DefaultClock};

use crate::Trace;
use crate::domain::ports::{
    GratitudeLogRepository, IdentityProvider, SentimentAnalyzer, SleepLogRepository,
    UserRepository,
};
use crate::domain::{
    AccountService, AdminSecret, DataExportService, GratitudeService, MoodAdvisor, SleepLogService,
};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;
use crate::inbound::http;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::persistence::{
    DbPool, DieselGratitudeLogRepository, DieselIdentityProvider, DieselSleepLogRepository,
    DieselUserRepository,
};
use crate::outbound::sentiment::LexiconSentimentAnalyzer;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "session";

const SESSION_TTL_HOURS: i64 = 12;

/// Driven-port implementations the services are built from.
#[derive(Clone)]
pub struct Adapters {
    pub identity: Arc<dyn IdentityProvider>,
    pub users: Arc<dyn UserRepository>,
    pub sleep_logs: Arc<dyn SleepLogRepository>,
    pub gratitude_logs: Arc<dyn GratitudeLogRepository>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub clock: Arc<dyn Clock>,
}

impl Adapters {
    /// Every port backed by one in-process store.
    pub fn in_memory(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity: store.clone(),
            users: store.clone(),
            sleep_logs: store.clone(),
            gratitude_logs: store,
            sentiment: Arc::new(LexiconSentimentAnalyzer::new()),
            clock,
        }
    }

    /// Every persistence port backed by PostgreSQL through `pool`.
    pub fn postgres(pool: &DbPool) -> Self {
        Self {
            identity: Arc::new(DieselIdentityProvider::new(pool.clone())),
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            sleep_logs: Arc::new(DieselSleepLogRepository::new(pool.clone())),
            gratitude_logs: Arc::new(DieselGratitudeLogRepository::new(pool.clone())),
            sentiment: Arc::new(LexiconSentimentAnalyzer::new()),
            clock: Arc::new(DefaultClock),
        }
    }
}

/// Wire the domain services over `adapters`.
///
/// With `admin_secret` unset every export request is rejected.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use sleepease::app::{Adapters, build_http_state};
/// use sleepease::outbound::memory::InMemoryStore;
///
/// let adapters = Adapters::in_memory(Arc::new(InMemoryStore::default()), Arc::new(DefaultClock));
/// let state = build_http_state(adapters, None);
/// let _accounts = state.accounts.clone();
/// ```
pub fn build_http_state(adapters: Adapters, admin_secret: Option<AdminSecret>) -> HttpState {
    let Adapters {
        identity,
        users,
        sleep_logs,
        gratitude_logs,
        sentiment,
        clock,
    } = adapters;

    let accounts = Arc::new(AccountService::new(identity, users.clone(), clock));
    let sleep = Arc::new(SleepLogService::new(sleep_logs.clone()));
    let gratitude = Arc::new(GratitudeService::new(gratitude_logs.clone()));
    let export = DataExportService::new(users, sleep_logs, gratitude_logs, admin_secret);

    HttpState {
        accounts: accounts.clone(),
        profiles: accounts,
        sleep_logs: sleep.clone(),
        sleep_history: sleep,
        gratitude: gratitude.clone(),
        gratitude_list: gratitude,
        mood: Arc::new(MoodAdvisor::new(sentiment)),
        export: Arc::new(export),
    }
}

/// Private (encrypted) cookie session configured from `settings`.
pub fn session_middleware(settings: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), settings.key.clone())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(settings.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(settings.same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

/// Build the Actix application with tracing, sessions, and every route.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(session)
        .wrap(Trace)
        .configure(http::configure)
}
