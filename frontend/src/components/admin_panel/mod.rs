//! Admin panel: index management and CSV ingestion, shown as an overlay.
//!
//! Responsibilities
//! - Index Management tab: list (from the catalog owned by `RagInterface`), refresh, create
//!   and a two-step delete that needs an explicit confirm or cancel.
//! - Upload CSV tab: read a local file with `gloo-file`, run it through
//!   `console_common::csv::CsvDataset` for headers, column inference and the preview, then
//!   submit an `UploadRequest`.
//!
//! The catalog itself is not edited here. After a create, delete or upload the panel asks its
//! parent to reload the listing through `on_refresh`, and results are reported through
//! `on_notify` as banners.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdminPanelProps;
pub use state::AdminPanel;

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = AdminPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        AdminPanel::new(&ctx.props().catalog)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.reconcile_upload_index(&ctx.props().catalog);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
