//! Modal showing the content of a file referenced from document metadata.

use console_common::model::FileContent;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::TopSheet;

use super::helpers::format_bytes;
use super::request_state::RequestState;

#[derive(Properties, PartialEq)]
pub struct FileViewerProps {
    /// Path being shown; `None` keeps the viewer closed.
    pub path: Option<String>,
    pub content: RequestState<FileContent>,
    pub on_close: Callback<()>,
}

pub struct FileViewer;

impl Component for FileViewer {
    type Message = ();
    type Properties = FileViewerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FileViewer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(path) = props.path.as_deref() else {
            return html! {};
        };

        let title = match props.content.ready() {
            Some(file) => file.display_name(),
            None => path.to_string(),
        };

        let body = match &props.content {
            RequestState::Idle | RequestState::Loading => html! {
                <div class="loading">{ "Loading file..." }</div>
            },
            RequestState::Failed(message) => html! {
                <div class="error-box">{ message }</div>
            },
            RequestState::Ready(file) => html! {
                <>
                    <div class="file-meta">
                        <span>{ file.file_path.as_deref().unwrap_or(path) }</span>
                        if let Some(mime) = file.mime_type.as_deref() {
                            <span>{ mime }</span>
                        }
                        if let Some(size) = file.file_size {
                            <span>{ format_bytes(size) }</span>
                        }
                    </div>
                    <pre class="file-content">{ &file.content }</pre>
                </>
            },
        };

        html! {
            <TopSheet open={true} title={title} on_close={props.on_close.clone()}>
                { body }
            </TopSheet>
        }
    }
}
