use leptos::prelude::*;

/// Open/closed flag plus the record the dialog works on.
///
/// - `open_modal(Some(item))` opens the dialog for editing `item`
/// - `open_modal(None)` opens it for creating a new record
/// - `close_modal()` closes it and drops the payload
///
/// There is no stacking: opening while already open replaces the payload.
pub struct ModalController<T: Send + Sync + 'static> {
    open: RwSignal<bool>,
    data: RwSignal<Option<T>>,
}

impl<T: Send + Sync + 'static> Clone for ModalController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ModalController<T> {}

impl<T: Clone + Send + Sync + 'static> ModalController<T> {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            data: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Payload of the open dialog, `None` for "create new"
    pub fn data(&self) -> Option<T> {
        self.data.get()
    }

    /// Open and not editing an existing record
    pub fn is_create(&self) -> bool {
        self.open.get() && self.data.with(Option::is_none)
    }

    pub fn open_modal(&self, data: Option<T>) {
        self.data.set(data);
        self.open.set(true);
    }

    pub fn close_modal(&self) {
        self.open.set(false);
        self.data.set(None);
    }

    /// Callback closing the dialog, for `on_close` props
    pub fn close_callback(&self) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.close_modal())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ModalController<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal<T: Clone + Send + Sync + 'static>() -> ModalController<T> {
    ModalController::new()
}
