//! AI summary of the documents matching a query.

use console_common::model::SummaryResponse;
use yew::prelude::*;

use super::request_state::RequestState;

mod view;

#[derive(Properties, PartialEq)]
pub struct SummarizationProps {
    pub state: RequestState<SummaryResponse>,
    pub on_open_file: Callback<String>,
}

pub struct Summarization;

impl Component for Summarization {
    type Message = ();
    type Properties = SummarizationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Summarization
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(ctx.props())
    }
}
