use std::rc::Rc;

use crate::api::RagApiClient;
use crate::components::rag_interface::RagInterface;
use yew::{html, Component, Context, Html};

pub struct App {
    client: Rc<RagApiClient>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: Rc::new(RagApiClient::from_build_env()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <RagInterface client={self.client.clone()} />
        }
    }
}
