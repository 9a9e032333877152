use tokio::sync::watch;

/// The "automated turn in progress" flag.
///
/// Claiming is atomic, so two dispatchers racing for the next turn cannot
/// both start one. The claim is released when its guard drops, which
/// includes a panicking agent task unwinding.
#[derive(Debug, Clone)]
pub struct Gate {
    tx: std::sync::Arc<watch::Sender<bool>>,
}

impl Default for Gate {
    fn default() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            tx: std::sync::Arc::new(tx),
        }
    }
}

impl Gate {
    /// Close the gate if it is open.
    pub fn claim(&self) -> Option<GateGuard> {
        self.tx
            .send_if_modified(|busy| match *busy {
                true => false,
                false => {
                    *busy = true;
                    true
                }
            })
            .then(|| GateGuard { gate: self.clone() })
    }
    /// Wait until no automated turn is running.
    pub async fn cleared(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|busy| !busy).await;
    }
    pub fn is_busy(&self) -> bool {
        *self.tx.borrow()
    }
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
    fn release(&self) {
        self.tx.send_replace(false);
    }
}

/// Proof of a claimed gate. Dropping it opens the gate.
#[derive(Debug)]
pub struct GateGuard {
    gate: Gate,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.gate.release();
    }
}
