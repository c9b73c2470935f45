/// Reports the lifecycle of the clock to the service manager.
///
/// All notifications are no-ops unless `NOTIFY_SOCKET` is set.
#[derive(Debug, Clone)]
pub struct ProcessState {
    span: tracing::Span,
}

impl ProcessState {
    pub fn new(span: tracing::Span) -> Self {
        Self { span }
    }

    pub fn set_starting(&self) {
        self.report("starting", &[NotifyState::Status("starting")]);
    }

    pub fn set_running(&self) {
        self.report("ready", &[NotifyState::Ready, NotifyState::Status("rendering")]);
    }

    pub fn set_failed(&self) {
        self.report(
            "failed,stopping",
            &[NotifyState::Status("failed"), NotifyState::Stopping],
        );
    }

    pub fn set_finished(&self) {
        self.report("stopping", &[NotifyState::Stopping]);
    }

    /// Called once per presented frame. A hanging render loop trips `WatchdogSec=`.
    pub fn watchdog(&self) {
        if let Err(error) = notify(&[NotifyState::Watchdog]) {
            tracing::warn!(parent: &self.span, ?error, "Failed to ping systemd watchdog");
        }
    }

    fn report(&self, status: &str, states: &[NotifyState<'_>]) {
        tracing::debug!(parent: &self.span, status, "Setting service status");
        match notify(states) {
            Ok(()) => tracing::info!(
                parent: &self.span,
                status,
                "Successfully notified systemd of service status"
            ),
            Err(error) => tracing::error!(
                parent: &self.span,
                ?error,
                "Failed to notify systemd of state change"
            ),
        }
    }
}

#[derive(Clone, Debug)]
enum NotifyState<'a> {
    /// Service startup is finished.
    Ready,

    /// Service is stopping.
    Stopping,

    /// Free-form status message for the service manager.
    Status(&'a str),

    /// Tells the service manager to update the watchdog timestamp.
    Watchdog,
}

impl std::fmt::Display for NotifyState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyState::Ready => write!(f, "READY=1"),
            NotifyState::Stopping => write!(f, "STOPPING=1"),
            NotifyState::Status(msg) => write!(f, "STATUS={msg}"),
            NotifyState::Watchdog => write!(f, "WATCHDOG=1"),
        }
    }
}

fn message(states: &[NotifyState<'_>]) -> String {
    states.iter().map(|s| format!("{s}\n")).collect()
}

fn notify(states: &[NotifyState<'_>]) -> std::io::Result<()> {
    let Some(socket_path) = std::env::var_os("NOTIFY_SOCKET") else {
        return Ok(());
    };

    let sock = std::os::unix::net::UnixDatagram::unbound()?;
    sock.connect(socket_path)?;

    let msg = message(states);
    let len = sock.send(msg.as_bytes())?;

    if len != msg.len() {
        Err(std::io::Error::new(
            std::io::ErrorKind::WriteZero,
            "incomplete write",
        ))
    } else {
        Ok(())
    }
}
