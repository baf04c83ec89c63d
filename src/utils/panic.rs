use std::panic;

/// Sends panic messages through `tracing` instead of stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        match info.location() {
            Some(location) => error!(
                file = location.file(),
                line = location.line(),
                "panicked: {}",
                message
            ),
            None => error!("panicked: {}", message),
        }
    }));
}
