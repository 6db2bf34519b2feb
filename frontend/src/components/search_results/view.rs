use console_common::format::{
    embedding_preview, is_truncated, score_percent, truncate, ScoreBand, CONTENT_PREVIEW_CHARS,
};
use console_common::model::{ResultsState, SearchHit};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::helpers::format_count;
use crate::components::request_state::RequestState;

use super::{Msg, SearchResults};

pub fn view(component: &SearchResults, ctx: &Context<SearchResults>) -> Html {
    let props = ctx.props();
    match &props.state {
        RequestState::Idle => html! {},
        RequestState::Loading => html! {
            <div class="results-panel loading">{ "Searching..." }</div>
        },
        RequestState::Failed(message) => html! {
            <div class="results-panel error-box">
                <strong>{ "Search failed" }</strong>
                <p>{ message }</p>
            </div>
        },
        RequestState::Ready(response) => match response.state() {
            ResultsState::Empty => html! {
                <div class="results-panel empty">
                    <p>{ "No results found." }</p>
                    <p class="hint">{ "Try a different query or lower the minimum score." }</p>
                </div>
            },
            ResultsState::Hits(hits) => {
                let total = response.total_results.max(hits.len() as u64);
                html! {
                    <div class="results-panel">
                        <div class="results-header">
                            <h3>{ "Search Results" }</h3>
                            <span class="results-count">
                                { format!("{} results", format_count(total)) }
                            </span>
                        </div>
                        { for hits.iter().enumerate().map(|(idx, hit)| {
                            build_hit(component, ctx.link(), idx, hit, props.show_vectors, &props.on_open_file)
                        }) }
                    </div>
                }
            }
        },
    }
}

fn build_hit(
    component: &SearchResults,
    link: &Scope<SearchResults>,
    idx: usize,
    hit: &SearchHit,
    show_vectors: bool,
    on_open_file: &Callback<String>,
) -> Html {
    let document = &hit.document;
    let band = ScoreBand::of(hit.score);
    let expanded = component.expanded.contains(&idx);
    let content = if expanded {
        document.content.clone()
    } else {
        truncate(&document.content, CONTENT_PREVIEW_CHARS)
    };
    let title = document
        .title()
        .or_else(|| document.id.clone())
        .unwrap_or_else(|| format!("Result {}", idx + 1));

    html! {
        <div class="result-card" key={idx.to_string()}>
            <div class="result-header">
                <h4>{ title }</h4>
                <span class={classes!("score", band.css_class())}>{ score_percent(hit.score) }</span>
            </div>
            <div class="result-meta">
                if let Some(author) = document.author() {
                    <span>{ format!("Author: {author}") }</span>
                }
                if let Some(category) = document.category() {
                    <span>{ format!("Category: {category}") }</span>
                }
                if let Some(source) = document.source.as_deref() {
                    <span>{ format!("Source: {source}") }</span>
                }
                if let Some(date) = document.timestamp.as_ref().and_then(|t| t.date_label()) {
                    <span>{ date }</span>
                }
            </div>
            <p class="result-content">{ content }</p>
            if is_truncated(&document.content, CONTENT_PREVIEW_CHARS) {
                <button class="link-btn" onclick={link.callback(move |_| Msg::ToggleExpanded(idx))}>
                    { if expanded { "Show less" } else { "Show more" } }
                </button>
            }
            if let Some(path) = document.referenced_path() {
                { build_file_link(path, on_open_file) }
            }
            if show_vectors {
                { build_embedding(hit) }
            }
        </div>
    }
}

fn build_file_link(path: String, on_open_file: &Callback<String>) -> Html {
    let on_open_file = on_open_file.clone();
    let label = path.clone();
    html! {
        <button
            class="link-btn file-link"
            title="View source file"
            onclick={Callback::from(move |_| on_open_file.emit(path.clone()))}
        >
            { format!("View file: {label}") }
        </button>
    }
}

fn build_embedding(hit: &SearchHit) -> Html {
    match hit.document.embedding.as_deref() {
        Some(values) if !values.is_empty() => html! {
            <div class="embedding">
                <span class="embedding-dims">{ format!("Vector ({} dimensions)", values.len()) }</span>
                <code>{ embedding_preview(values) }</code>
            </div>
        },
        _ => html! {
            <div class="embedding empty">{ "No embedding returned" }</div>
        },
    }
}
