//! View rendering for the admin panel: an overlay with two tabs.

use console_common::csv::CsvDataset;
use console_common::format::{truncate, PREVIEW_CELL_CHARS, PREVIEW_COLUMNS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{hidden_columns_hint, role_class};
use super::messages::Msg;
use super::state::{AdminPanel, AdminTab};

pub fn view(component: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();
    let on_close = ctx.props().on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="admin-overlay">
            <div class="admin-panel">
                <div class="admin-header">
                    <h2>{ "Admin Panel" }</h2>
                    <button class="icon-btn" title="Close" onclick={on_close}>{ "✕" }</button>
                </div>
                { build_tab_bar(component, link) }
                {
                    match component.active_tab {
                        AdminTab::Indexes => build_indexes_tab(component, ctx),
                        AdminTab::Upload => build_upload_tab(component, ctx),
                    }
                }
            </div>
        </div>
    }
}

fn build_tab_bar(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    let tab = |tab: AdminTab, label: &'static str| {
        html! {
            <button
                class={classes!("tab-btn", (component.active_tab == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(tab))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class="tab-bar">
            { tab(AdminTab::Indexes, "Index Management") }
            { tab(AdminTab::Upload, "Upload CSV") }
        </div>
    }
}

fn build_indexes_tab(component: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let on_refresh = props.on_refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="admin-tab">
            <form
                class="inline-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::CreateIndex
                })}
            >
                <input
                    type="text"
                    placeholder="new-index-name"
                    value={component.new_index_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateNewIndexName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button type="submit" class="primary-btn" disabled={component.index_busy}>
                    { if component.index_busy { "Working..." } else { "Create Index" } }
                </button>
            </form>
            <p class="hint">{ "Lowercase letters, numbers, hyphens and underscores only." }</p>

            <div class="list-header">
                <h3>{ "Indexes" }</h3>
                <button class="secondary-btn" onclick={on_refresh} disabled={props.refreshing}>
                    { if props.refreshing { "Refreshing..." } else { "Refresh" } }
                </button>
            </div>
            if props.catalog.is_fallback() {
                <p class="hint warning">{ "Could not load indexes from the service; showing defaults." }</p>
            }
            if props.catalog.is_empty() {
                <p class="hint">{ "No indexes yet." }</p>
            }
            <ul class="index-list">
                { for props.catalog.names().iter().map(|name| build_index_row(component, link, name)) }
            </ul>
        </div>
    }
}

fn build_index_row(component: &AdminPanel, link: &Scope<AdminPanel>, name: &str) -> Html {
    let confirming = component.pending_delete.as_deref() == Some(name);
    let owned = name.to_string();

    html! {
        <li class="index-row" key={name.to_string()}>
            <span class="index-name">{ name }</span>
            if confirming {
                <span class="confirm">
                    <span>{ "Delete this index and all its documents?" }</span>
                    <button
                        class="danger-btn"
                        disabled={component.index_busy}
                        onclick={link.callback(|_| Msg::ConfirmDelete)}
                    >
                        { "Confirm" }
                    </button>
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::CancelDelete)}>
                        { "Cancel" }
                    </button>
                </span>
            } else {
                <button
                    class="danger-btn"
                    disabled={component.index_busy}
                    onclick={link.callback(move |_| Msg::RequestDelete(owned.clone()))}
                >
                    { "Delete" }
                </button>
            }
        </li>
    }
}

fn build_upload_tab(component: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();
    let catalog = &ctx.props().catalog;
    let selected = component.upload_index.clone().unwrap_or_default();

    html! {
        <form
            class="admin-tab"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Upload
            })}
        >
            <label>
                { "Target index" }
                <select
                    onchange={link.callback(|e: Event| {
                        Msg::SelectUploadIndex(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    <option value="" selected={selected.is_empty()}>{ "Select an index" }</option>
                    { for catalog.names().iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == selected}>{ name }</option>
                    }) }
                </select>
            </label>

            <label>
                { "CSV file" }
                <input
                    type="file"
                    accept=".csv,text/csv"
                    ref={component.file_input_ref.clone()}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                    })}
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={component.quoted_fields}
                    onchange={link.callback(|_| Msg::ToggleQuotedFields)}
                />
                { "Fields may contain quoted commas" }
            </label>
            if component.reading {
                <p class="hint">{ "Reading file..." }</p>
            }
            if let Some(error) = component.file_error.as_deref() {
                <p class="error-box">{ error }</p>
            }
            if let Some(dataset) = component.dataset.as_ref() {
                { build_dataset_section(component, link, dataset) }
            }

            <label>
                { "Source tag" }
                <input
                    type="text"
                    value={component.source_tag.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateSource(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </label>

            <button type="submit" class="primary-btn" disabled={!component.can_upload()}>
                { if component.uploading { "Uploading..." } else { "Upload" } }
            </button>
        </form>
    }
}

fn build_dataset_section(component: &AdminPanel, link: &Scope<AdminPanel>, dataset: &CsvDataset) -> Html {
    let content = dataset.content_column().unwrap_or_default().to_string();
    let id = dataset.id_column().unwrap_or_default().to_string();

    html! {
        <div class="dataset">
            <div class="dataset-header">
                <span>{ format!("{} ({} columns)", dataset.file_name(), dataset.headers().len()) }</span>
                <button type="button" class="link-btn" onclick={link.callback(|_| Msg::ClearFile)}>
                    { "Remove" }
                </button>
            </div>
            if dataset.headers().is_empty() {
                <p class="error-box">{ "The selected CSV file has no header row." }</p>
            } else {
                <label>
                    { "Content column" }
                    <select
                        onchange={link.callback(|e: Event| {
                            Msg::SelectContentColumn(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { for dataset.headers().iter().map(|h| html! {
                            <option value={h.clone()} selected={*h == content}>{ h }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Document ID column" }
                    <select
                        onchange={link.callback(|e: Event| {
                            Msg::SelectIdColumn(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        <option value="" selected={id.is_empty()}>{ "Auto-generate" }</option>
                        { for dataset.headers().iter().map(|h| html! {
                            <option value={h.clone()} selected={*h == id}>{ h }</option>
                        }) }
                    </select>
                </label>
                <button type="button" class="link-btn" onclick={link.callback(|_| Msg::TogglePreview)}>
                    { if component.show_preview { "Hide preview" } else { "Show preview" } }
                </button>
                if component.show_preview {
                    { build_preview_table(dataset) }
                }
            }
        </div>
    }
}

fn build_preview_table(dataset: &CsvDataset) -> Html {
    let roles = dataset.column_roles();
    let shown = roles.len().min(PREVIEW_COLUMNS);
    let hidden_hint = hidden_columns_hint(&roles, shown);

    html! {
        <div class="csv-preview">
            <table>
                <thead>
                    <tr>
                        { for roles.iter().take(shown).map(|(header, role)| html! {
                            <th class={role_class(*role)}>
                                <div>{ truncate(header, PREVIEW_CELL_CHARS) }</div>
                                <small>{ role.label() }</small>
                            </th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for dataset.preview_rows().iter().map(|row| html! {
                        <tr>
                            { for row.iter().take(shown).map(|(_, value)| html! {
                                <td title={value.to_string()}>{ truncate(value, PREVIEW_CELL_CHARS) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
            if let Some(hint) = hidden_hint {
                <p class="hint">{ hint }</p>
            }
            if dataset.preview_rows().is_empty() {
                <p class="hint">{ "The file has a header row but no data rows." }</p>
            }
        </div>
    }
}
