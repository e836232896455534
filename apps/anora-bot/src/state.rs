use crate::messenger::Messenger;
use crate::services::entitlement_service::EntitlementService;
use std::sync::Arc;
use url::Url;

#[derive(Clone)]
pub struct AppState {
    pub messenger: Arc<dyn Messenger>,
    pub entitlements: EntitlementService,
    pub webapp_url: Url,
    pub invoice_photo_url: Url,
}

impl AppState {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        entitlements: EntitlementService,
        webapp_url: Url,
        invoice_photo_url: Url,
    ) -> Self {
        Self {
            messenger,
            entitlements,
            webapp_url,
            invoice_photo_url,
        }
    }
}
