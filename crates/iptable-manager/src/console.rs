//! The console transport seam.

/// A synchronous console channel to a control processor.
///
/// Implementations send one command string and block until the processor's
/// complete response text is available. The console reports failure only
/// through the response content (an empty string or an error message), so
/// the call itself is infallible. No timeout or retry is layered on top: a
/// hung console call hangs the operation.
pub trait ConsoleTransport {
    /// Send `command` and return the processor's response text.
    fn send_command(&mut self, command: &str) -> String;
}

/// Any `FnMut(&str) -> String` closure can stand in as a console.
impl<F> ConsoleTransport for F
where
    F: FnMut(&str) -> String,
{
    fn send_command(&mut self, command: &str) -> String {
        self(command)
    }
}
