//! View rendering of the root view: header with service status, the query form, the active
//! result view and the overlays (admin panel, file viewer, banners).

use console_common::health::ServiceStatus;
use console_common::model::{SearchType, MAX_RESULT_SIZE};
use console_common::notify::BannerKind;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::banner::BannerStack;
use crate::components::file_viewer::FileViewer;
use crate::components::search_results::SearchResults;
use crate::components::summarization::Summarization;

use super::messages::Msg;
use super::state::{Mode, RagInterface};

pub fn view(component: &RagInterface, ctx: &Context<RagInterface>) -> Html {
    let link = ctx.link();

    html! {
        <div class="rag-console">
            { build_header(component, link) }
            { build_form(component, link) }
            {
                match component.mode {
                    Mode::Search => html! {
                        <SearchResults
                            state={component.search.clone()}
                            show_vectors={component.search_had_vectors}
                            on_open_file={link.callback(Msg::OpenFile)}
                        />
                    },
                    Mode::Summarize => html! {
                        <Summarization
                            state={component.summary.clone()}
                            on_open_file={link.callback(Msg::OpenFile)}
                        />
                    },
                }
            }

            <button
                class="admin-fab"
                title="Admin panel"
                onclick={link.callback(|_| Msg::ToggleAdmin)}
            >
                { "⚙" }
            </button>
            if component.admin_open {
                <AdminPanel
                    client={ctx.props().client.clone()}
                    catalog={component.catalog.clone()}
                    refreshing={component.catalog_loading}
                    on_refresh={link.callback(|_: ()| Msg::LoadIndexes)}
                    on_notify={link.callback(|(kind, text): (BannerKind, String)| Msg::Notify(kind, text))}
                    on_close={link.callback(|_: ()| Msg::ToggleAdmin)}
                />
            }
            <FileViewer
                path={component.file_path.clone()}
                content={component.file.clone()}
                on_close={link.callback(|_: ()| Msg::CloseFile)}
            />
            <BannerStack
                banners={component.banners.clone()}
                on_dismiss={link.callback(Msg::DismissBanner)}
            />
        </div>
    }
}

fn build_header(component: &RagInterface, link: &Scope<RagInterface>) -> Html {
    let status = component.health.status();
    html! {
        <header class="console-header">
            <h1>{ "RAG Search Interface" }</h1>
            <p class="subtitle">{ "Search your knowledge base or get AI-powered summaries" }</p>
            <div class={classes!("status-badge", status.css_class())}>
                <span class="status-dot" />
                <span>{ format!("Service {}", status.label()) }</span>
                if status == ServiceStatus::Down {
                    <button
                        class="link-btn"
                        disabled={component.health_in_flight}
                        onclick={link.callback(|_| Msg::RetryHealth)}
                    >
                        { "Retry" }
                    </button>
                }
            </div>
        </header>
    }
}

fn build_form(component: &RagInterface, link: &Scope<RagInterface>) -> Html {
    let busy = component.busy();
    let selected = component.selected_index.clone().unwrap_or_default();
    let submit_label = match (component.mode, busy) {
        (Mode::Search, true) => "Searching...",
        (Mode::Search, false) => "Search",
        (Mode::Summarize, true) => "Summarizing...",
        (Mode::Summarize, false) => "Summarize",
    };

    html! {
        <form
            class="query-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <div class="form-row">
                <label>
                    { "Knowledge Base" }
                    <select
                        onchange={link.callback(|e: Event| {
                            Msg::SelectIndex(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { for component.catalog.names().iter().map(|name| html! {
                            <option value={name.clone()} selected={*name == selected}>{ name }</option>
                        }) }
                    </select>
                </label>
                { build_toggle(
                    "Result Type",
                    [("Search", Mode::Search), ("Summarize", Mode::Summarize)],
                    component.mode,
                    link,
                    Msg::SetMode,
                ) }
                { build_toggle(
                    "Search Type",
                    [(SearchType::Vector.label(), SearchType::Vector), (SearchType::Hybrid.label(), SearchType::Hybrid)],
                    component.search_type,
                    link,
                    Msg::SetSearchType,
                ) }
            </div>

            <div class="form-row query-row">
                <input
                    type="text"
                    class="query-input"
                    placeholder="Ask a question or enter search terms..."
                    value={component.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button type="submit" class="primary-btn" disabled={busy}>{ submit_label }</button>
            </div>

            <button type="button" class="link-btn" onclick={link.callback(|_| Msg::ToggleAdvanced)}>
                { if component.show_advanced { "Hide advanced settings" } else { "Advanced settings" } }
            </button>
            if component.show_advanced {
                { build_advanced(component, link) }
            }
        </form>
    }
}

fn build_toggle<T: Copy + PartialEq + 'static>(
    label: &'static str,
    options: [(&'static str, T); 2],
    current: T,
    link: &Scope<RagInterface>,
    to_msg: fn(T) -> Msg,
) -> Html {
    html! {
        <div class="toggle-group">
            <span class="toggle-label">{ label }</span>
            <div class="toggle-buttons">
                { for options.into_iter().map(|(text, value)| html! {
                    <button
                        type="button"
                        class={classes!("toggle-btn", (value == current).then_some("active"))}
                        onclick={link.callback(move |_| to_msg(value))}
                    >
                        { text }
                    </button>
                }) }
            </div>
        </div>
    }
}

fn build_advanced(component: &RagInterface, link: &Scope<RagInterface>) -> Html {
    html! {
        <div class="advanced">
            <label>
                { format!("Max results (1-{MAX_RESULT_SIZE})") }
                <input
                    type="number"
                    min="1"
                    max={MAX_RESULT_SIZE.to_string()}
                    value={component.max_results.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetMaxResults(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            <label>
                { "Min score (0.0-1.0)" }
                <input
                    type="number"
                    min="0"
                    max="1"
                    step="0.01"
                    value={component.min_score.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetMinScore(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>
            if component.mode == Mode::Summarize {
                <label class="wide">
                    { "Custom prompt (optional)" }
                    <textarea
                        rows="3"
                        placeholder="e.g. Summarize in three bullet points"
                        value={component.custom_prompt.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::UpdateCustomPrompt(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </label>
            }
            if component.mode == Mode::Search {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={component.show_vectors}
                        onchange={link.callback(|_| Msg::ToggleVectors)}
                    />
                    { "Show vectors" }
                </label>
            }
        </div>
    }
}
