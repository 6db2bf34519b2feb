//! Root view of the console.
//!
//! Owns everything shared between the query form, the result views and the admin panel: the
//! API client, the service status, the index catalog and the banner list.
//!
//! On first render it probes the service and loads the catalog. A failed probe is retried
//! on the schedule of `HealthMonitor`; the pending retry is a `gloo_timers` `Timeout` stored
//! in the component, so unmounting the view cancels it.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RagInterfaceProps;
pub use state::RagInterface;

impl Component for RagInterface {
    type Message = Msg;
    type Properties = RagInterfaceProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RagInterface::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link()
                .send_message_batch(vec![Msg::CheckHealth, Msg::LoadIndexes]);
        }
    }
}
