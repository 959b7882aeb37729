//! The app shell: owns the session store and routes actions to screens.

use std::sync::Arc;

use stockpad_core::{DomainError, SessionId};
use stockpad_events::Subscription;
use stockpad_products::{InMemoryProductStore, ProductEvent, ProductForm, ProductRepository};

use crate::command::{Action, HELP};
use crate::error::AppError;
use crate::navigation::{Navigator, Route, Screen};
use crate::render;

type Store = Arc<InMemoryProductStore>;

/// Result of a successfully handled action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The screen to show after the action.
    Screen(String),
    /// A blocking message; the current screen is unchanged.
    Alert(String),
    /// JSON dump of the product list.
    Export(String),
    Help,
    Exit,
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Screen(text) | Outcome::Export(text) => f.write_str(text),
            Outcome::Alert(msg) => write!(f, "! {msg}"),
            Outcome::Help => f.write_str(HELP),
            Outcome::Exit => Ok(()),
        }
    }
}

/// One app session.
///
/// The store is created with the session and dropped with it. The list view
/// is cached and only re-rendered when the store reports a change.
pub struct App {
    session_id: SessionId,
    store: Store,
    changes: Subscription<ProductEvent>,
    nav: Navigator,
    form: Option<ProductForm<Store>>,
    list_view: String,
    list_renders: u64,
}

impl App {
    pub fn new() -> Self {
        let store: Store = Arc::new(InMemoryProductStore::new());
        let changes = store.subscribe();
        let list_view = render::product_list(&store.list());
        let session_id = SessionId::new();
        tracing::info!(%session_id, "session started");

        Self {
            session_id,
            store,
            changes,
            nav: Navigator::new(),
            form: None,
            list_view,
            list_renders: 1,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Shared handle to the session store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn form(&self) -> Option<&ProductForm<Store>> {
        self.form.as_ref()
    }

    /// How many times the list view has been rendered.
    pub fn list_render_count(&self) -> u64 {
        self.list_renders
    }

    /// Render whatever is currently on screen.
    pub fn render(&mut self) -> String {
        self.refresh_list();
        match (self.screen(), &self.form) {
            (Screen::Orders, _) => render::orders(),
            (Screen::ProductForm(_), Some(form)) => render::product_form(form),
            _ => self.list_view.clone(),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, AppError> {
        tracing::debug!(action = action.name(), screen = %self.screen(), "dispatch");

        match action {
            Action::Add => {
                self.require(Screen::ProductList, "add")?;
                self.store.add();
            }
            Action::Open(id) => {
                self.require(Screen::ProductList, "open")?;
                let form = ProductForm::open(self.store.clone(), id)?;
                self.form = Some(form);
                self.nav.push(Route::ProductForm(id));
            }
            Action::Remove(id) => {
                self.require(Screen::ProductList, "remove")?;
                self.store.remove(id)?;
            }
            Action::SetTitle(text) => self.form_mut("title")?.on_title_change(&text),
            Action::SetQuantity(text) => self.form_mut("qty")?.on_quantity_change(&text),
            Action::SetPrice(text) => self.form_mut("price")?.on_price_change(&text),
            Action::Save => {
                let form = self.form_mut("save")?;
                match form.save() {
                    Ok(_) => self.close_form(),
                    Err(DomainError::Validation(msg)) => return Ok(Outcome::Alert(msg)),
                    Err(e) => return Err(e.into()),
                }
            }
            Action::Back => {
                let form = self.form_mut("back")?;
                if form.is_dirty() {
                    tracing::info!(product_id = %form.product_id(), "discarded unsaved edits");
                }
                self.close_form();
            }
            Action::SwitchTab(tab) => self.nav.switch_tab(tab),
            Action::Export => {
                let json = serde_json::to_string_pretty(&self.store.list())?;
                return Ok(Outcome::Export(json));
            }
            Action::Show => {}
            Action::Help => return Ok(Outcome::Help),
            Action::Quit => {
                tracing::info!(session_id = %self.session_id, "session ended");
                return Ok(Outcome::Exit);
            }
        }

        Ok(Outcome::Screen(self.render()))
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), AppError> {
        let current = self.screen();
        if current == screen {
            Ok(())
        } else {
            Err(AppError::NotAvailable {
                action,
                screen: current,
            })
        }
    }

    fn form_mut(&mut self, action: &'static str) -> Result<&mut ProductForm<Store>, AppError> {
        let screen = self.screen();
        match (screen, self.form.as_mut()) {
            (Screen::ProductForm(_), Some(form)) => Ok(form),
            _ => Err(AppError::NotAvailable { action, screen }),
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.nav.pop();
    }

    fn refresh_list(&mut self) {
        let changes = self.changes.drain();
        if changes.is_empty() {
            return;
        }
        tracing::debug!(changes = changes.len(), "re-render product list");
        self.list_view = render::product_list(&self.store.list());
        self.list_renders += 1;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
