//! Console wiring and observability setup.

pub mod tracing;

use std::env;
use std::sync::Arc;

use ::tracing::info;

use crate::framework::{HttpTransport, Transport};
use crate::model::{Coffee, Customer};
use crate::nav::Navigator;
use crate::view::{DetailView, ListView, UpdateView};
use crate::{coffee, customer};
use crate::{coffee::CoffeeResolver, coffee::CoffeeService};
use crate::{customer::CustomerResolver, customer::CustomerService};

/// Where the backend lives.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub base_url: String,
}

impl ConsoleConfig {
    /// Reads `ADMIN_API_URL`, defaulting to the local development backend.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("ADMIN_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}

/// The admin console: one service and one resolver per record kind, all
/// sharing a single transport and the host application's navigator.
///
/// # Example
///
/// ```ignore
/// let console = AdminConsole::new(ConsoleConfig::from_env(), navigator);
///
/// let mut list = console.coffee_list();
/// list.load_all().await;
///
/// let record = console.coffee_resolver.resolve(Some(42)).await?;
/// ```
pub struct AdminConsole {
    pub coffee_service: CoffeeService,
    pub coffee_resolver: CoffeeResolver,
    pub customer_service: CustomerService,
    pub customer_resolver: CustomerResolver,
    navigator: Arc<dyn Navigator>,
}

impl AdminConsole {
    /// Wires the console against a live backend.
    pub fn new(config: ConsoleConfig, navigator: Arc<dyn Navigator>) -> Self {
        info!(base_url = %config.base_url, "Console starting");
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.base_url));
        Self::with_transport(transport, navigator)
    }

    /// Wires the console against an arbitrary transport. This is the test
    /// seam: integration tests hand in a scripted mock.
    pub fn with_transport(transport: Arc<dyn Transport>, navigator: Arc<dyn Navigator>) -> Self {
        let (coffee_service, coffee_resolver) =
            coffee::new(transport.clone(), navigator.clone());
        let (customer_service, customer_resolver) =
            customer::new(transport.clone(), navigator.clone());

        Self {
            coffee_service,
            coffee_resolver,
            customer_service,
            customer_resolver,
            navigator,
        }
    }

    // View factories. Each view owns a service handle and its own request
    // lifecycle; constructing one is cheap.

    pub fn coffee_list(&self) -> ListView<Coffee> {
        ListView::new(self.coffee_service.clone())
    }

    pub fn coffee_update(&self) -> UpdateView<Coffee> {
        UpdateView::new(self.coffee_service.clone(), self.navigator.clone())
    }

    pub fn coffee_detail(&self) -> DetailView<Coffee> {
        DetailView::new(self.navigator.clone())
    }

    pub fn customer_list(&self) -> ListView<Customer> {
        ListView::new(self.customer_service.clone())
    }

    pub fn customer_update(&self) -> UpdateView<Customer> {
        UpdateView::new(self.customer_service.clone(), self.navigator.clone())
    }

    pub fn customer_detail(&self) -> DetailView<Customer> {
        DetailView::new(self.navigator.clone())
    }
}
