//! Page control

use epaphe_driver::{Clock, Panel, Transport};
use epaphe_protocol::Command;

use crate::capability::Object;
use crate::component::Component;

/// One page of the panel's user interface.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    component: Component,
}

impl Page {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Page {
            component: Component::new(page, id, name),
        }
    }

    /// Make this page the displayed one. A page that is already showing
    /// is not re-shown (that would reset its widget state).
    pub fn show(&self, panel: &mut Panel<impl Transport, impl Clock>) -> bool {
        match self.is_shown(panel) {
            Some(true) => true,
            Some(false) => {
                panel.send(&Command::new("page").arg_name(self.component.name()))
                    && panel.check_command_complete()
            }
            None => false,
        }
    }

    /// Whether this page is the one currently displayed.
    pub fn is_shown(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<bool> {
        panel
            .current_page()
            .map(|id| id == self.component.page())
    }
}

impl Object for Page {
    fn component(&self) -> &Component {
        &self.component
    }
}
