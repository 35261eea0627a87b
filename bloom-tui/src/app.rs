//! Interaction Controller
//!
//! Wires user intents to the order board, the view, and the store client.
//! Mutations are optimistic: local state changes first, then the matching
//! store call is spawned fire-and-forget. Only hydration is waited on (via
//! the app event channel) because the initial view depends on it.

use crate::board::OrderBoard;
use bloom_client::{ClientError, ClientResult, StoreClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shared::{Order, PaidUpdate, color};
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

pub const MSG_LOADING: &str = "กำลังโหลดข้อมูล...";
pub const MSG_LOAD_FAILED: &str = "โหลดไม่สำเร็จ T_T ลองกด r รีเฟรชใหม่นะ";
pub const MSG_NO_ORDERS: &str = "ยังไม่มีออเดอร์จ้า รอรับลูกค้าคนแรกอยู่น้า...";
pub const MSG_NAME_PRICE_REQUIRED: &str = "ใส่ชื่อกับราคาหน่อยน้า";

/// Events posted back to the event loop by background tasks
#[derive(Debug)]
pub enum AppEvent {
    Hydrated(Result<Vec<Order>, ClientError>),
}

/// Keyboard focus target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    CustomerName,
    QueueNumber,
    FlowerCount,
    OrderDate,
    Price,
    Notes,
    FlowerPicker,
    BouquetPicker,
}

impl Focus {
    /// Form tab order (wraps within the form)
    const FORM_CYCLE: [Focus; 8] = [
        Focus::CustomerName,
        Focus::QueueNumber,
        Focus::FlowerCount,
        Focus::OrderDate,
        Focus::Price,
        Focus::Notes,
        Focus::FlowerPicker,
        Focus::BouquetPicker,
    ];

    fn next_in_form(self) -> Focus {
        let idx = Self::FORM_CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::FORM_CYCLE[(idx + 1) % Self::FORM_CYCLE.len()]
    }

    fn prev_in_form(self) -> Focus {
        let idx = Self::FORM_CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::FORM_CYCLE[(idx + Self::FORM_CYCLE.len() - 1) % Self::FORM_CYCLE.len()]
    }

    pub fn is_picker(self) -> bool {
        matches!(self, Focus::FlowerPicker | Focus::BouquetPicker)
    }
}

/// Toggle-set of selected palette colors, in selection order
#[derive(Debug, Default, Clone)]
pub struct ColorSelection {
    picked: Vec<&'static str>,
}

impl ColorSelection {
    /// Select if absent, deselect if present
    pub fn toggle(&mut self, hex: &'static str) {
        if let Some(idx) = self.picked.iter().position(|h| *h == hex) {
            self.picked.remove(idx);
        } else {
            self.picked.push(hex);
        }
    }

    pub fn contains(&self, hex: &str) -> bool {
        self.picked.iter().any(|h| *h == hex)
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Stored form: comma-joined localized names in selection order
    pub fn encode(&self) -> String {
        color::encode_selection(self.picked.iter().copied())
    }
}

/// Ephemeral add-order form state
#[derive(Debug)]
pub struct FormState {
    pub customer_name: Input,
    pub queue_number: Input,
    pub flower_count: Input,
    pub order_date: Input,
    pub price: Input,
    pub notes: Input,
    pub flower_colors: ColorSelection,
    pub bouquet_colors: ColorSelection,
}

impl FormState {
    fn new() -> Self {
        Self {
            customer_name: Input::default(),
            queue_number: Input::default(),
            flower_count: Input::default(),
            order_date: Input::new(today()),
            price: Input::default(),
            notes: Input::default(),
            flower_colors: ColorSelection::default(),
            bouquet_colors: ColorSelection::default(),
        }
    }

    /// Clear everything back to a fresh form (date re-prefilled)
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn input_mut(&mut self, focus: Focus) -> Option<&mut Input> {
        match focus {
            Focus::CustomerName => Some(&mut self.customer_name),
            Focus::QueueNumber => Some(&mut self.queue_number),
            Focus::FlowerCount => Some(&mut self.flower_count),
            Focus::OrderDate => Some(&mut self.order_date),
            Focus::Price => Some(&mut self.price),
            Focus::Notes => Some(&mut self.notes),
            _ => None,
        }
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Application state: order board, form, and the per-action wiring
pub struct App {
    pub board: OrderBoard,
    pub form: FormState,
    pub focus: Focus,
    /// Selected row index into the queue-sorted snapshot
    pub selected: usize,
    /// Cursor within the focused color picker
    pub picker_cursor: usize,
    /// Order id awaiting delete confirmation, at most one
    pub pending_delete: Option<String>,
    pub loading: bool,
    /// Message shown in the empty-state panel
    pub empty_message: String,
    /// Inline validation warning on the add form
    pub warning: Option<String>,
    client: StoreClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(client: StoreClient) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let app = Self {
            board: OrderBoard::new(),
            form: FormState::new(),
            focus: Focus::Table,
            selected: 0,
            picker_cursor: 0,
            pending_delete: None,
            loading: false,
            empty_message: MSG_NO_ORDERS.to_string(),
            warning: None,
            client,
            events_tx,
            should_quit: false,
        };
        (app, events_rx)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start (or restart) hydration from the store
    pub fn hydrate(&mut self) {
        self.loading = true;
        self.empty_message = MSG_LOADING.to_string();
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.list().await;
            let _ = tx.send(AppEvent::Hydrated(result));
        });
    }

    /// Apply a background task result
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Hydrated(result) => {
                // Cleared exactly once, on both outcomes
                self.loading = false;
                match result {
                    Ok(orders) => {
                        tracing::info!(count = orders.len(), "hydrated from store");
                        self.board.replace_all(orders);
                        self.empty_message = MSG_NO_ORDERS.to_string();
                        self.clamp_selection();
                    }
                    Err(error) => {
                        // Prior orders stay untouched; only the message changes
                        tracing::error!(%error, "hydration failed");
                        self.empty_message = MSG_LOAD_FAILED.to_string();
                    }
                }
            }
        }
    }

    /// Route one key press according to current focus
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.pending_delete.is_some() {
            self.handle_modal_key(key);
            return;
        }
        match self.focus {
            Focus::Table => self.handle_table_key(key),
            _ => self.handle_form_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => self.cancel_delete(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.board.len().saturating_sub(1));
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_selected_paid(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('a') | KeyCode::Tab => self.focus = Focus::CustomerName,
            KeyCode::Char('r') => self.hydrate(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Table;
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next_in_form();
                self.picker_cursor = 0;
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev_in_form();
                self.picker_cursor = 0;
                return;
            }
            KeyCode::Enter => {
                self.submit_add();
                return;
            }
            _ => {}
        }
        if self.focus.is_picker() {
            self.handle_picker_key(key);
        } else if let Some(input) = self.form.input_mut(self.focus) {
            input.handle_event(&crossterm::event::Event::Key(key));
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let len = color::PALETTE.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.picker_cursor = (self.picker_cursor + len - 1) % len;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.picker_cursor = (self.picker_cursor + 1) % len;
            }
            KeyCode::Char(' ') => {
                let hex = color::PALETTE[self.picker_cursor].hex;
                match self.focus {
                    Focus::FlowerPicker => self.form.flower_colors.toggle(hex),
                    Focus::BouquetPicker => self.form.bouquet_colors.toggle(hex),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Validate and submit the add-order form
    ///
    /// Customer name and price are required; everything else falls back per
    /// the untrusted-parse rules in [`shared::models::order`] (the same path
    /// hydration uses), so a junk queue number becomes 0, a blank flower
    /// count becomes 1.
    pub fn submit_add(&mut self) {
        let name = self.form.customer_name.value().trim().to_string();
        let price = self.form.price.value().trim().to_string();
        if name.is_empty() || price.is_empty() {
            self.warning = Some(MSG_NAME_PRICE_REQUIRED.to_string());
            return;
        }

        let notes = self.form.notes.value().trim();
        let notes = if notes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::from(notes)
        };
        let raw = serde_json::json!({
            "id": Order::fresh_id(),
            "customer_name": name,
            "queue_number": self.form.queue_number.value().trim(),
            "flower_count": self.form.flower_count.value().trim(),
            "order_date": self.form.order_date.value(),
            "price": price,
            "notes": notes,
            "flower_colors": self.form.flower_colors.encode(),
            "bouquet_colors": self.form.bouquet_colors.encode(),
            "is_paid": false,
        });
        let order: Order = match serde_json::from_value(raw) {
            Ok(order) => order,
            Err(error) => {
                tracing::error!(%error, "form payload did not parse");
                return;
            }
        };

        self.board.insert(order.clone());
        self.form.reset();
        self.warning = None;
        self.focus = Focus::Table;

        let client = self.client.clone();
        dispatch("create", async move { client.create(&order).await });
    }

    /// Flip the paid flag on the selected row
    pub fn toggle_selected_paid(&mut self) {
        let Some(id) = self.selected_id() else { return };
        let is_paid = !self.board.get(&id).map(|o| o.is_paid).unwrap_or(false);
        if self.board.set_paid(&id, is_paid) {
            let client = self.client.clone();
            let update = PaidUpdate { id, is_paid };
            dispatch("update", async move { client.set_paid(&update).await });
        }
    }

    /// Mark the selected row for deletion and open the confirmation modal
    pub fn request_delete(&mut self) {
        self.pending_delete = self.selected_id();
    }

    /// Confirm the pending deletion
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else { return };
        if self.board.remove(&id) {
            self.clamp_selection();
            let client = self.client.clone();
            dispatch("delete", async move { client.delete(&id).await });
        }
    }

    /// Dismiss the confirmation modal without touching the board
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id of the row under the cursor, in display (queue) order
    pub fn selected_id(&self) -> Option<String> {
        self.board
            .sorted_by_queue()
            .get(self.selected)
            .map(|o| o.id.clone())
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.board.len().saturating_sub(1));
    }
}

/// Spawn a store call whose result is deliberately discarded after logging.
///
/// Fire-and-forget by contract: no retry, no rollback of local state.
fn dispatch<F>(action: &'static str, future: F)
where
    F: std::future::Future<Output = ClientResult<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = future.await {
            tracing::warn!(action, %error, "store dispatch failed");
        }
    });
}
