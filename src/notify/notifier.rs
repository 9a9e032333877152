use tokio::sync::watch;

/// Publisher half of a payload-free change signal.
/// Every publish bumps a version counter; subscribers wake and re-query
/// whatever state they care about.
#[derive(Debug)]
pub struct Notifier {
    tx: watch::Sender<u64>,
}

impl Default for Notifier {
    fn default() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }
}

impl Notifier {
    pub fn publish(&self) {
        self.tx.send_modify(|version| *version = version.wrapping_add(1));
    }
    pub fn subscribe(&self) -> Subscription {
        Subscription::from(self.tx.subscribe())
    }
    pub fn version(&self) -> u64 {
        *self.tx.borrow()
    }
    pub fn subscribers(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving half. Only changes published after subscribing are observed.
#[derive(Debug, Clone)]
pub struct Subscription {
    rx: watch::Receiver<u64>,
}

impl From<watch::Receiver<u64>> for Subscription {
    fn from(rx: watch::Receiver<u64>) -> Self {
        Self { rx }
    }
}

impl Subscription {
    /// Resolves once the publisher has changed since the last call.
    /// Returns false when the publisher is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
    /// Whether a change is waiting to be observed.
    pub fn pending(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}
