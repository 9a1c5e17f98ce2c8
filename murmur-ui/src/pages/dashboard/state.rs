use shared_api::Message;

/// View state of the dashboard, kept apart from the component so the
/// fetch/toggle/delete rules can be exercised without a UI or a network.
///
/// Each region owns its loading flag; there is no screen-wide loading
/// state. The message list carries an epoch that local deletes bump, so a
/// slow fetch started before a delete cannot resurrect the deleted card.
#[derive(Debug, Default)]
pub struct DashboardState {
    messages: Vec<Message>,
    list_epoch: u64,
    accepting: Option<bool>,
    pending_toggle: Option<bool>,
    loading_messages: bool,
    loading_switch: bool,
    hydrated: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per signed-in session: the caller should dispatch
    /// the two initial reads when it fires. Signing out re-arms it, so the
    /// next sign-in loads fresh data; while signed out it never fires and
    /// the view issues no network calls at all.
    pub fn arm_initial_load(&mut self, signed_in: bool) -> bool {
        if !signed_in {
            self.hydrated = false;
            return false;
        }
        if self.hydrated {
            return false;
        }
        self.hydrated = true;
        true
    }

    // --- message list ---

    /// Marks the list region as loading and returns the epoch token the
    /// completion must present.
    pub fn begin_message_load(&mut self) -> u64 {
        self.loading_messages = true;
        self.list_epoch
    }

    /// Replaces the list wholesale, unless a local delete has bumped the
    /// epoch since the fetch began. A stale response only clears the
    /// loading flag.
    pub fn apply_messages(&mut self, epoch: u64, messages: Vec<Message>) {
        self.loading_messages = false;
        if epoch == self.list_epoch {
            self.messages = messages;
        }
    }

    /// Failed fetch: keep whatever list was already shown.
    pub fn message_load_failed(&mut self) {
        self.loading_messages = false;
    }

    /// Optimistic local removal. No network call happens here; if the
    /// server is meant to delete anything, the message card's own delete
    /// flow owns that contract.
    pub fn remove_message(&mut self, id: &str) {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);
        if self.messages.len() != before {
            self.list_epoch += 1;
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading_messages(&self) -> bool {
        self.loading_messages
    }

    // --- acceptance flag ---

    pub fn begin_flag_load(&mut self) {
        self.loading_switch = true;
    }

    pub fn apply_acceptance(&mut self, accepting: bool) {
        self.loading_switch = false;
        self.accepting = Some(accepting);
    }

    /// Failed read: the mirror keeps its prior value (unset renders off).
    pub fn flag_load_failed(&mut self) {
        self.loading_switch = false;
    }

    pub fn begin_toggle(&mut self, desired: bool) {
        self.loading_switch = true;
        self.pending_toggle = Some(desired);
    }

    /// Commits the pending value; the mirror only ever changes on a
    /// confirmed server response.
    pub fn confirm_toggle(&mut self) {
        self.loading_switch = false;
        if let Some(desired) = self.pending_toggle.take() {
            self.accepting = Some(desired);
        }
    }

    /// Failed write: drop the pending value, keep the last confirmed one.
    pub fn toggle_failed(&mut self) {
        self.loading_switch = false;
        self.pending_toggle = None;
    }

    /// What the switch control displays: the last confirmed value, off
    /// when nothing was ever confirmed. An in-flight write does not show
    /// through.
    pub fn switch_checked(&self) -> bool {
        self.accepting.unwrap_or(false)
    }

    /// The switch is locked while either acceptance call is in flight.
    pub fn switch_disabled(&self) -> bool {
        self.loading_switch
    }
}
