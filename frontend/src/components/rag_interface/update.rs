//! Update function of the root view.

use console_common::health::ServiceStatus;
use console_common::model::{
    SearchAndSummarizeRequest, SearchRequest, SearchType, SemanticSummarizeRequest,
    SummarizeQueryRequest,
};
use console_common::notify::BannerKind;
use gloo_console::{error, log, warn};
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::banner::BannerMessage;
use crate::components::request_state::RequestState;

use super::messages::Msg;
use super::state::{Mode, RagInterface};

pub fn update(component: &mut RagInterface, ctx: &Context<RagInterface>, msg: Msg) -> bool {
    match msg {
        Msg::CheckHealth => {
            component.health_retry = None;
            if component.health_in_flight {
                return false;
            }
            component.health_in_flight = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.check_health().await;
                link.send_message(Msg::HealthChecked(result));
            });
            false
        }
        Msg::HealthChecked(result) => {
            component.health_in_flight = false;
            let was_down = component.health.status() == ServiceStatus::Down;
            let failure = match result {
                Ok(report) if report.service_status() == ServiceStatus::Up => None,
                Ok(report) => Some(format!(
                    "service reported status {}",
                    report.status.unwrap_or_default()
                )),
                Err(err) => Some(err.to_string()),
            };

            match failure {
                None => {
                    component.health.record_success();
                    log!("RAG service is up");
                    if was_down && component.catalog.is_fallback() {
                        ctx.link().send_message(Msg::LoadIndexes);
                    }
                }
                Some(reason) => {
                    let next = component.health.record_failure();
                    error!(format!("Service health check failed: {reason}"));
                    match next {
                        Some(delay) => {
                            let link = ctx.link().clone();
                            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                            component.health_retry = Some(Timeout::new(millis, move || {
                                link.send_message(Msg::CheckHealth)
                            }));
                        }
                        None => {
                            warn!(format!(
                                "giving up health checks after {} attempts",
                                component.health.failures()
                            ));
                            push_banner(
                                component,
                                ctx,
                                BannerKind::Error,
                                "RAG service is unreachable. Use Retry to check again.".to_string(),
                            );
                        }
                    }
                }
            }
            true
        }
        Msg::RetryHealth => {
            component.health.reset();
            ctx.link().send_message(Msg::CheckHealth);
            true
        }

        Msg::LoadIndexes => {
            if component.catalog_loading {
                return false;
            }
            component.catalog_loading = true;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.list_indexes().await;
                link.send_message(Msg::IndexesLoaded(result));
            });
            true
        }
        Msg::IndexesLoaded(result) => {
            component.catalog_loading = false;
            if let Some(err) = component.catalog.apply_listing(result) {
                warn!(format!("Failed to load indexes, using defaults: {err}"));
            }
            component.selected_index = component
                .catalog
                .reconcile_selection(component.selected_index.as_deref());
            true
        }
        Msg::SelectIndex(name) => {
            component.selected_index = (!name.is_empty()).then_some(name);
            true
        }

        Msg::SetMode(mode) => {
            if component.mode != mode {
                component.mode = mode;
                component.clear_results();
            }
            true
        }
        Msg::SetSearchType(search_type) => {
            component.search_type = search_type;
            true
        }
        Msg::UpdateQuery(query) => {
            component.query = query;
            true
        }
        Msg::SetMaxResults(raw) => match raw.trim().parse::<u32>() {
            Ok(value) => {
                component.max_results = value.clamp(1, console_common::model::MAX_RESULT_SIZE);
                true
            }
            Err(_) => false,
        },
        Msg::SetMinScore(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                component.min_score = value.clamp(0.0, 1.0);
                true
            }
            _ => false,
        },
        Msg::UpdateCustomPrompt(prompt) => {
            component.custom_prompt = prompt;
            true
        }
        Msg::ToggleVectors => {
            component.show_vectors = !component.show_vectors;
            true
        }
        Msg::ToggleAdvanced => {
            component.show_advanced = !component.show_advanced;
            true
        }

        Msg::Submit => {
            if component.busy() {
                return false;
            }
            let index = component.selected_index.clone().unwrap_or_default();
            match component.mode {
                Mode::Search => submit_search(component, ctx, &index),
                Mode::Summarize => submit_summary(component, ctx, &index),
            }
            true
        }
        Msg::SearchFinished(result) => {
            component.search = match result {
                Ok(response) => RequestState::Ready(response),
                Err(err) => RequestState::Failed(err.display_message()),
            };
            true
        }
        Msg::SummaryFinished(result) => {
            component.summary = match result {
                Ok(response) => RequestState::Ready(response),
                Err(err) => RequestState::Failed(err.display_message()),
            };
            true
        }

        Msg::Notify(kind, text) => {
            push_banner(component, ctx, kind, text);
            true
        }
        Msg::DismissBanner(id) => {
            let before = component.banners.len();
            component.banners.retain(|b| b.id != id);
            component.banners.len() != before
        }

        Msg::ToggleAdmin => {
            component.admin_open = !component.admin_open;
            true
        }

        Msg::OpenFile(path) => {
            component.file_path = Some(path.clone());
            component.file = RequestState::Loading;
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.file_content(&path).await;
                link.send_message(Msg::FileLoaded { path, result });
            });
            true
        }
        Msg::FileLoaded { path, result } => {
            // The viewer may have been closed or pointed elsewhere meanwhile.
            if component.file_path.as_deref() != Some(path.as_str()) {
                return false;
            }
            component.file = match result {
                Ok(file) => RequestState::Ready(file),
                Err(err) => RequestState::Failed(err.display_message()),
            };
            true
        }
        Msg::CloseFile => {
            component.file_path = None;
            component.file = RequestState::Idle;
            true
        }
    }
}

fn submit_search(component: &mut RagInterface, ctx: &Context<RagInterface>, index: &str) {
    let request = match SearchRequest::new(&component.query, index) {
        Ok(request) => request
            .size(component.max_results)
            .min_score(component.min_score)
            .include_embeddings(component.show_vectors),
        Err(err) => {
            component.search = RequestState::Failed(err.to_string());
            return;
        }
    };

    component.summary = RequestState::Idle;
    component.search = RequestState::Loading;
    component.search_had_vectors = request.include_embeddings;

    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    let search_type = component.search_type;
    spawn_local(async move {
        let result = match search_type {
            SearchType::Vector => client.search(&request).await,
            SearchType::Hybrid => client.search_hybrid(&request).await,
        };
        link.send_message(Msg::SearchFinished(result));
    });
}

fn submit_summary(component: &mut RagInterface, ctx: &Context<RagInterface>, index: &str) {
    let request = match SummarizeQueryRequest::new(&component.query, index) {
        Ok(request) => request
            .max_results(component.max_results)
            .min_score(component.min_score)
            .custom_prompt(&component.custom_prompt),
        Err(err) => {
            component.summary = RequestState::Failed(err.to_string());
            return;
        }
    };

    component.search = RequestState::Idle;
    component.summary = RequestState::Loading;

    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    let search_type = component.search_type;
    spawn_local(async move {
        let result = match search_type {
            SearchType::Vector => match client.summarize_query(&request).await {
                // Older service builds only expose the combined endpoint.
                Err(err) if err.status() == Some(404) => {
                    warn!("summarize-query not available, using search-and-summarize");
                    client
                        .search_and_summarize(&SearchAndSummarizeRequest::from(&request))
                        .await
                }
                other => other,
            },
            SearchType::Hybrid => {
                let request = SemanticSummarizeRequest::new(request).search_type(SearchType::Hybrid);
                client.semantic_summarize(&request).await
            }
        };
        link.send_message(Msg::SummaryFinished(result));
    });
}

/// Adds a banner and schedules its dismissal.
fn push_banner(component: &mut RagInterface, ctx: &Context<RagInterface>, kind: BannerKind, text: String) {
    let banner = BannerMessage::new(kind, text);
    let id = banner.id;
    component.banners.push(banner);

    let link = ctx.link().clone();
    let millis = u32::try_from(kind.dismiss_after().as_millis()).unwrap_or(u32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        link.send_message(Msg::DismissBanner(id));
    });
}
