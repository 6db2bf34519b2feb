//! Transient status banners stacked in the page corner.
//!
//! The banner list is owned by `RagInterface`; this component only renders it. Each banner
//! schedules its own dismissal when it is pushed (see `rag_interface::update`), and the close
//! button dismisses it early.

use console_common::notify::BannerKind;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BannerMessage {
    pub id: Uuid,
    pub kind: BannerKind,
    pub text: String,
}

impl BannerMessage {
    pub fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerStackProps {
    pub banners: Vec<BannerMessage>,
    pub on_dismiss: Callback<Uuid>,
}

pub struct BannerStack;

impl Component for BannerStack {
    type Message = ();
    type Properties = BannerStackProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BannerStack
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.banners.is_empty() {
            return html! {};
        }

        html! {
            <div class="banner-stack" role="status">
                { for props.banners.iter().map(|banner| {
                    let id = banner.id;
                    let on_dismiss = props.on_dismiss.clone();
                    html! {
                        <div key={id.to_string()} class={banner.kind.css_class()}>
                            <span class="banner-text">{ &banner.text }</span>
                            <button
                                class="banner-close"
                                title="Dismiss"
                                onclick={Callback::from(move |_| on_dismiss.emit(id))}
                            >
                                { "✕" }
                            </button>
                        </div>
                    }
                }) }
            </div>
        }
    }
}
