// share/servers.rs - Server picker of the share extension

use std::rc::Rc;

use crate::localization::Localizer;
use crate::ui::View;
use crate::ui::theme_registry::ThemeRegistry;
use crate::ui::widgets::{Container, NavigationBar, TableCell, TableStyle, TableView};

/// Row address in a sectioned list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A server the user is logged in to, as held by the share store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCell {
    pub title: String,
    pub detail: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pop,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    MakeSceneTransition(Transition),
}

/// State container the share extension dispatches into
pub trait ShareStore {
    fn select_server(&mut self, index: usize);
    fn dispatch(&mut self, action: ShareAction);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServersViewModel {
    pub server_cells: Vec<ServerCell>,
}

impl ServersViewModel {
    pub fn empty_state() -> Self {
        Self::default()
    }

    pub fn from_servers(servers: &[Server], selected: Option<usize>) -> Self {
        let server_cells = servers
            .iter()
            .enumerate()
            .map(|(index, server)| ServerCell {
                title: server.name.clone(),
                detail: server.host.clone(),
                selected: selected == Some(index),
            })
            .collect();
        Self { server_cells }
    }

    pub fn title(&self, localizer: &dyn Localizer) -> String {
        localizer.localized("servers.title")
    }

    pub fn number_of_sections(&self) -> usize {
        1
    }

    pub fn number_of_rows_in_section(&self, section: usize) -> usize {
        match section {
            0 => self.server_cells.len(),
            _ => 0,
        }
    }

    pub fn cell_for_row_at(&self, index_path: IndexPath) -> Option<&ServerCell> {
        if index_path.section != 0 {
            return None;
        }
        self.server_cells.get(index_path.row)
    }

    /// Select the tapped server and leave the picker
    pub fn did_select_row_at(&self, index_path: IndexPath, store: &mut dyn ShareStore) {
        if self.cell_for_row_at(index_path).is_none() {
            log::warn!("Ignoring selection of missing row {:?}", index_path);
            return;
        }
        log::debug!("Selecting server at row {}", index_path.row);
        store.select_server(index_path.row);
        store.dispatch(ShareAction::MakeSceneTransition(Transition::Pop));
    }

    /// Themed screen: navigation bar over a grouped table of servers
    pub fn build_view(&self, registry: &Rc<ThemeRegistry>, localizer: &dyn Localizer) -> Rc<View> {
        let screen = View::new(registry, Container::new("servers"));
        screen.add_child(View::new(registry, NavigationBar::new(self.title(localizer))));

        let table = View::new(registry, TableView::new(TableStyle::Grouped));
        for cell in &self.server_cells {
            let mut row = TableCell::new(cell.title.clone(), Some(cell.detail.clone()));
            row.selected = cell.selected;
            table.add_child(View::new(registry, row));
        }
        screen.add_child(table);
        screen
    }
}
