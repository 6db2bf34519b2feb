use std::rc::Rc;

use yew::prelude::*;

use crate::api::RagApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct RagInterfaceProps {
    /// Shared by every view that talks to the service.
    pub client: Rc<RagApiClient>,
}
