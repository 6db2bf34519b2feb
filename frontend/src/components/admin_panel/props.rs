use std::rc::Rc;

use console_common::model::IndexCatalog;
use console_common::notify::BannerKind;
use yew::prelude::*;

use crate::api::RagApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminPanelProps {
    pub client: Rc<RagApiClient>,
    /// Index names as last listed by the service (or the fallback list).
    pub catalog: IndexCatalog,
    /// `true` while the parent is reloading the catalog.
    #[prop_or_default]
    pub refreshing: bool,
    /// Asks the parent to reload the catalog.
    pub on_refresh: Callback<()>,
    pub on_notify: Callback<(BannerKind, String)>,
    pub on_close: Callback<()>,
}
