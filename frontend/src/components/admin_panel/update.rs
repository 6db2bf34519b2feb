//! Update function of the admin panel.
//!
//! Network calls run in `spawn_local` futures and report back through messages. A busy flag
//! per form (`index_busy`, `uploading`) rejects resubmission while a call is outstanding.

use console_common::api::ValidationError;
use console_common::csv::{is_csv_file, CsvDataset};
use console_common::model::{IndexName, UploadRequest};
use console_common::notify::BannerKind;
use gloo_console::{log, warn};
use gloo_file::futures::read_as_text;
use gloo_file::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::upload_summary;
use super::messages::Msg;
use super::state::AdminPanel;

pub fn update(component: &mut AdminPanel, ctx: &Context<AdminPanel>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            component.pending_delete = None;
            true
        }

        Msg::UpdateNewIndexName(name) => {
            component.new_index_name = name;
            true
        }
        Msg::CreateIndex => {
            if component.index_busy {
                return false;
            }
            let name = match IndexName::parse(&component.new_index_name) {
                Ok(name) => name,
                Err(err) => {
                    props.on_notify.emit((BannerKind::Error, err.to_string()));
                    return false;
                }
            };
            component.index_busy = true;
            let client = props.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.create_index(&name).await;
                link.send_message(Msg::IndexCreated {
                    name: name.to_string(),
                    result,
                });
            });
            true
        }
        Msg::IndexCreated { name, result } => {
            component.index_busy = false;
            match result {
                Ok(ack) => {
                    component.new_index_name.clear();
                    let text = ack
                        .message
                        .unwrap_or_else(|| format!("Index '{name}' created successfully"));
                    props.on_notify.emit((BannerKind::Success, text));
                    props.on_refresh.emit(());
                }
                Err(err) => props.on_notify.emit((BannerKind::Error, err.display_message())),
            }
            true
        }
        Msg::RequestDelete(name) => {
            component.pending_delete = Some(name);
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            if component.index_busy {
                return false;
            }
            let Some(name) = component.pending_delete.take() else {
                return false;
            };
            component.index_busy = true;
            let client = props.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.delete_index(&name).await;
                link.send_message(Msg::IndexDeleted { name, result });
            });
            true
        }
        Msg::IndexDeleted { name, result } => {
            component.index_busy = false;
            match result {
                Ok(ack) => {
                    let text = ack
                        .message
                        .unwrap_or_else(|| format!("Index '{name}' deleted successfully"));
                    props.on_notify.emit((BannerKind::Success, text));
                    if component.upload_index.as_deref() == Some(name.as_str()) {
                        component.upload_index = None;
                    }
                    props.on_refresh.emit(());
                }
                Err(err) => props.on_notify.emit((BannerKind::Error, err.display_message())),
            }
            true
        }

        Msg::SelectUploadIndex(name) => {
            component.upload_index = (!name.is_empty()).then_some(name);
            true
        }
        Msg::FileChosen(file) => {
            let Some(file) = file else {
                component.clear_file();
                return true;
            };
            let file = File::from(file);
            let file_name = file.name();
            let mime_type = file.raw_mime_type();
            let mime = (!mime_type.is_empty()).then_some(mime_type.as_str());
            if !is_csv_file(&file_name, mime) {
                warn!(format!("rejected {file_name}: not a CSV file"));
                component.reject_file(ValidationError::NotCsv(file_name));
                return true;
            }
            let generation = component.reads.next();
            component.reading = true;
            component.file_error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = read_as_text(&file).await.map_err(|err| err.to_string());
                link.send_message(Msg::FileRead {
                    generation,
                    file_name,
                    mime_type,
                    result,
                });
            });
            true
        }
        Msg::FileRead {
            generation,
            file_name,
            mime_type,
            result,
        } => {
            if !component.reads.is_current(generation) {
                log!(format!("discarding stale read of {file_name}"));
                return false;
            }
            component.reading = false;

            let text = match result {
                Ok(text) => text,
                Err(err) => {
                    warn!(format!("could not read {file_name}: {err}"));
                    component.dataset = None;
                    component.file_error = Some(format!("Could not read {file_name}: {err}"));
                    return true;
                }
            };
            let mime = (!mime_type.is_empty()).then_some(mime_type.as_str());
            match CsvDataset::load(&file_name, mime, text, component.load_options()) {
                Ok(dataset) => {
                    if !dataset.warnings().is_empty() {
                        warn!(format!(
                            "{file_name}: {} preview rows have an unexpected field count",
                            dataset.warnings().len()
                        ));
                    }
                    component.dataset = Some(dataset);
                    component.show_preview = true;
                }
                Err(err) => {
                    component.dataset = None;
                    component.file_error = Some(err.to_string());
                }
            }
            true
        }
        Msg::SelectContentColumn(column) => match component.dataset.as_mut() {
            Some(dataset) => dataset.select_content_column(&column).is_ok(),
            None => false,
        },
        Msg::SelectIdColumn(column) => match component.dataset.as_mut() {
            Some(dataset) => dataset.select_id_column(Some(&column)).is_ok(),
            None => false,
        },
        Msg::UpdateSource(source) => {
            component.source_tag = source;
            true
        }
        Msg::TogglePreview => {
            component.show_preview = !component.show_preview;
            true
        }
        Msg::ToggleQuotedFields => {
            component.quoted_fields = !component.quoted_fields;
            let options = component.load_options();
            if let Some(dataset) = component.dataset.as_mut() {
                *dataset = dataset.reload(options);
            }
            true
        }
        Msg::Upload => {
            if component.uploading || component.reading {
                return false;
            }
            let Some(dataset) = component.dataset.as_ref() else {
                props.on_notify.emit((BannerKind::Error, "Please select a CSV file".to_string()));
                return false;
            };
            let index = component.upload_index.clone().unwrap_or_default();
            let request =
                match UploadRequest::from_dataset(&index, dataset, Some(&component.source_tag)) {
                    Ok(request) => request,
                    Err(err) => {
                        props.on_notify.emit((BannerKind::Error, err.to_string()));
                        return false;
                    }
                };

            component.uploading = true;
            let client = props.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.upload_csv(&request).await;
                link.send_message(Msg::Uploaded(result));
            });
            true
        }
        Msg::Uploaded(result) => {
            component.uploading = false;
            match result {
                Ok(response) => {
                    let file_name = component
                        .dataset
                        .as_ref()
                        .map(|d| d.file_name().to_string())
                        .unwrap_or_default();
                    let index = response
                        .index_name
                        .clone()
                        .or_else(|| component.upload_index.clone())
                        .unwrap_or_default();
                    let text = upload_summary(&file_name, &index, response.document_count());
                    props.on_notify.emit((BannerKind::Success, text));
                    component.clear_file();
                    props.on_refresh.emit(());
                }
                Err(err) => props.on_notify.emit((BannerKind::Error, err.display_message())),
            }
            true
        }
        Msg::ClearFile => {
            component.clear_file();
            true
        }
    }
}
