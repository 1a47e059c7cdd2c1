// demo.rs - Sample chat screen used by the preview binary

use std::rc::Rc;

use crate::chat::ChatMessageImageView;
use crate::localization::Localizer;
use crate::share::{Server, ServersViewModel};
use crate::ui::theme::{Rgba, Theme};
use crate::ui::theme_registry::{ThemeChangeResult, ThemeRegistry};
use crate::ui::view::View;
use crate::ui::widgets::{
    ComposerTextView, Container, Label, NavigationBar, RefreshControl, SearchBar, TabBar,
    TextField, TextInputBar, TextView, Toolbar,
};

pub fn demo_servers() -> Vec<Server> {
    vec![
        Server {
            name: "Rocket.Chat Open".to_string(),
            host: "https://open.rocket.chat".to_string(),
        },
        Server {
            name: "Team".to_string(),
            host: "https://chat.example.com".to_string(),
        },
    ]
}

/// One observed root holding a sample of every widget kind
pub struct DemoScreen {
    root: Rc<View>,
    servers: Rc<View>,
    pub attachment: ChatMessageImageView,
    notes: usize,
}

impl DemoScreen {
    pub fn build(registry: &Rc<ThemeRegistry>, localizer: &dyn Localizer) -> Self {
        let root = View::new(registry, Container::new("chat"));
        root.set_background(Rgba::rgb(0, 0, 0));
        root.observe();

        root.add_child(View::new(registry, NavigationBar::new("#general")));

        let search = View::new(registry, SearchBar::new());
        search.add_child(View::new(registry, TextField::search_field(Some("Search messages"))));
        root.add_child(search);

        let servers = ServersViewModel::from_servers(&demo_servers(), Some(0))
            .build_view(registry, localizer);
        if let Some(table) = servers.children().last() {
            table.add_child(View::new(registry, RefreshControl::default()));
        }
        root.add_child(Rc::clone(&servers));

        root.add_child(View::new(registry, TextView::new("Welcome to #general")));

        let attachment = ChatMessageImageView::new(registry);
        root.add_child(Rc::clone(attachment.view()));

        root.add_child(View::new(registry, Toolbar::new()));

        let input_bar = View::new(registry, TextInputBar::default());
        input_bar.add_child(View::new(registry, ComposerTextView::default()));
        root.add_child(input_bar);

        root.add_child(View::new(registry, TabBar::new(&["Chats", "Directory", "Settings"])));

        Self {
            root,
            servers,
            attachment,
            notes: 0,
        }
    }

    pub fn root(&self) -> &Rc<View> {
        &self.root
    }

    pub fn servers(&self) -> &Rc<View> {
        &self.servers
    }

    /// Attach a new label at the end of the screen
    pub fn add_note(&mut self) -> Rc<View> {
        self.notes += 1;
        let registry = Rc::clone(self.root.registry());
        let note = View::new(&registry, Label::new(format!("note {}", self.notes)));
        self.root.add_child(Rc::clone(&note));
        note
    }

    /// Switch the registry theme by name, then restyle the servers section
    /// if it is pinned, since the broadcast pushes the new theme through it.
    pub fn switch_theme(&self, name: &str) -> ThemeChangeResult {
        let result = self.root.registry().switch_theme(name);
        self.restyle_pinned();
        result
    }

    /// Re-apply the servers override after a broadcast
    pub fn restyle_pinned(&self) {
        if let Some(theme) = self.servers.theme_override() {
            self.servers.set_theme_override(Some(theme));
        }
    }

    /// Pin the servers section to `theme`, or unpin it. Returns whether it
    /// is pinned afterwards.
    pub fn toggle_servers_override(&self, theme: Theme) -> bool {
        if self.servers.theme_override().is_some() {
            self.servers.set_theme_override(None);
            false
        } else {
            self.servers.set_theme_override(Some(theme));
            true
        }
    }
}
