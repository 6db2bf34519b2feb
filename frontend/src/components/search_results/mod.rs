//! Result list of a vector or hybrid search.
//!
//! Renders the four states of a search: loading, error, "no results" (a successful call with
//! zero hits) and the hit list. Each hit can be expanded past the content preview; expansion
//! state is local and reset whenever a new response arrives.

use std::collections::HashSet;

use console_common::model::SearchResponse;
use yew::prelude::*;

use super::request_state::RequestState;

mod view;

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub state: RequestState<SearchResponse>,
    /// Whether embeddings were requested, so the vector section is rendered.
    pub show_vectors: bool,
    pub on_open_file: Callback<String>,
}

pub enum Msg {
    ToggleExpanded(usize),
}

pub struct SearchResults {
    pub expanded: HashSet<usize>,
}

impl Component for SearchResults {
    type Message = Msg;
    type Properties = SearchResultsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleExpanded(idx) => {
                if !self.expanded.remove(&idx) {
                    self.expanded.insert(idx);
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().state != old_props.state {
            self.expanded.clear();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
