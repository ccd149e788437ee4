//! Application context shared across consumers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::services::{
    CartService, MessagesService, NewsService, OrdersService, PostsService, PremiumService,
};
use crate::session::Session;
use crate::storage::KeyValueStorage;
use crate::stores::{AuthStore, CartStore, ProductStore, ThemeStore, UserStore};
use crate::ui::UiHooks;

/// Everything a view layer needs, wired once per application session.
///
/// This struct is cheaply cloneable via `Arc`. Stores and services are
/// constructed here and injected into consumers - nothing in the SDK is a
/// process-global singleton.
#[derive(Clone)]
pub struct App {
    inner: Arc<AppInner>,
}

struct AppInner {
    config: ClientConfig,
    session: Arc<Session>,
    api: ApiClient,
    auth: AuthStore,
    products: ProductStore,
    cart: CartStore,
    users: UserStore,
    theme: ThemeStore,
    posts: PostsService,
    premium: PremiumService,
    messages: MessagesService,
    news: NewsService,
    orders: OrdersService,
}

impl App {
    /// Wire up the whole SDK.
    ///
    /// Any session persisted in `storage` is restored immediately; UI side
    /// effects from store actions go through `ui`.
    #[must_use]
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn KeyValueStorage>,
        ui: Arc<dyn UiHooks>,
    ) -> Self {
        let session = Arc::new(Session::new());
        let api = ApiClient::new(&config, Arc::clone(&session));

        let auth = AuthStore::new(
            api.clone(),
            Arc::clone(&session),
            Arc::clone(&storage),
            ui,
        );
        let products = ProductStore::new(api.clone(), Arc::clone(&storage));
        let cart = CartStore::new(CartService::new(api.clone()));
        let users = UserStore::new(api.clone());
        let theme = ThemeStore::new(storage);

        let posts = PostsService::new(api.clone());
        let premium = PremiumService::new(api.clone());
        let messages = MessagesService::new(api.clone());
        let news = NewsService::new(api.clone());
        let orders = OrdersService::new(api.clone());

        Self {
            inner: Arc::new(AppInner {
                config,
                session,
                api,
                auth,
                products,
                cart,
                users,
                theme,
                posts,
                premium,
                messages,
                news,
                orders,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }

    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }

    #[must_use]
    pub fn posts(&self) -> &PostsService {
        &self.inner.posts
    }

    #[must_use]
    pub fn premium(&self) -> &PremiumService {
        &self.inner.premium
    }

    #[must_use]
    pub fn messages(&self) -> &MessagesService {
        &self.inner.messages
    }

    #[must_use]
    pub fn news(&self) -> &NewsService {
        &self.inner.news
    }

    #[must_use]
    pub fn orders(&self) -> &OrdersService {
        &self.inner.orders
    }
}
