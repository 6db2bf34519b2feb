use console_common::format::{
    format_duration_ms, score_percent, truncate, ScoreBand, SUMMARY_SUPPORTING_DOCS,
};
use console_common::model::{SearchHit, SourceReference, SummaryResponse};
use yew::prelude::*;

use crate::components::helpers::{format_count, render_markdown};
use crate::components::request_state::RequestState;

use super::SummarizationProps;

/// Characters of a supporting document shown under the summary.
const SUPPORTING_EXCERPT_CHARS: usize = 200;

pub fn view(props: &SummarizationProps) -> Html {
    match &props.state {
        RequestState::Idle => html! {},
        RequestState::Loading => html! {
            <div class="summary-panel loading">{ "Generating summary..." }</div>
        },
        RequestState::Failed(message) => html! {
            <div class="summary-panel error-box">
                <strong>{ "Summarization failed" }</strong>
                <p>{ message }</p>
            </div>
        },
        RequestState::Ready(response) => match response.summary_text() {
            None => html! {
                <div class="summary-panel empty">
                    <p>{ "No summary available." }</p>
                    if let Some(error) = response.error.as_deref() {
                        <p class="hint">{ error }</p>
                    }
                </div>
            },
            Some(summary) => build_summary(response, summary, &props.on_open_file),
        },
    }
}

fn build_summary(response: &SummaryResponse, summary: &str, on_open_file: &Callback<String>) -> Html {
    let summary_html = AttrValue::from(render_markdown(summary));

    html! {
        <div class="summary-panel">
            <div class="summary-header">
                <h3>{ "AI Summary" }</h3>
                if let Some(total) = response.total_results {
                    <span class="results-count">
                        { format!("Based on {} documents", format_count(total)) }
                    </span>
                }
            </div>
            <div class="markdown-body">{ Html::from_html_unchecked(summary_html) }</div>
            { build_references(response.source_references()) }
            { build_supporting(response.search_results(), on_open_file) }
            { build_metrics(response) }
        </div>
    }
}

fn build_references(references: &[SourceReference]) -> Html {
    if references.is_empty() {
        return html! {};
    }
    html! {
        <div class="summary-section">
            <h4>{ "Sources" }</h4>
            <ul class="source-list">
                { for references.iter().enumerate().map(|(idx, reference)| html! {
                    <li>
                        { reference.label(idx + 1) }
                        if let Some(kind) = reference.kind() {
                            <span class="source-kind">{ format!(" ({kind})") }</span>
                        }
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn build_supporting(hits: &[SearchHit], on_open_file: &Callback<String>) -> Html {
    if hits.is_empty() {
        return html! {};
    }
    let hidden = hits.len().saturating_sub(SUMMARY_SUPPORTING_DOCS);

    html! {
        <div class="summary-section">
            <h4>{ "Supporting Documents" }</h4>
            { for hits.iter().take(SUMMARY_SUPPORTING_DOCS).enumerate().map(|(idx, hit)| {
                let band = ScoreBand::of(hit.score);
                let title = hit.document.title().unwrap_or_else(|| format!("Document {}", idx + 1));
                let file_link = hit.document.referenced_path().map(|path| {
                    let on_open_file = on_open_file.clone();
                    html! {
                        <button
                            class="link-btn file-link"
                            onclick={Callback::from(move |_| on_open_file.emit(path.clone()))}
                        >
                            { "View file" }
                        </button>
                    }
                });
                html! {
                    <div class="supporting-doc">
                        <div class="result-header">
                            <span class="supporting-title">{ title }</span>
                            <span class={classes!("score", band.css_class())}>{ score_percent(hit.score) }</span>
                        </div>
                        <p>{ truncate(&hit.document.content, SUPPORTING_EXCERPT_CHARS) }</p>
                        { for file_link }
                    </div>
                }
            }) }
            if hidden > 0 {
                <p class="hint">{ format!("And {hidden} more documents") }</p>
            }
        </div>
    }
}

fn build_metrics(response: &SummaryResponse) -> Html {
    let mut rows: Vec<(&str, String)> = Vec::new();
    if let Some(ms) = response.search_time_ms {
        rows.push(("Search", format_duration_ms(ms)));
    }
    if let Some(ms) = response.summarization_time_ms {
        rows.push(("Summarization", format_duration_ms(ms)));
    }
    if let Some(ms) = response.total_processing_time_ms.or(response.processing_time_ms) {
        rows.push(("Total", format_duration_ms(ms)));
    }
    if let Some(model) = response.model.as_deref() {
        rows.push(("Model", model.to_string()));
    }
    if let Some(search_type) = response.search_type.as_deref() {
        rows.push(("Search type", search_type.to_string()));
    }
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="summary-section metrics">
            <h4>{ "Performance" }</h4>
            <dl>
                { for rows.into_iter().map(|(label, value)| html! {
                    <>
                        <dt>{ label }</dt>
                        <dd>{ value }</dd>
                    </>
                }) }
            </dl>
        </div>
    }
}
