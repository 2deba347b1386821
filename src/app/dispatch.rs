//! Runs one multiplexer request against the selected adapter.
//!
//! Order per request: capability, then session existence, then the adapter
//! call, then a success line naming the backend.

use tracing::debug;

use txm::error::MuxError;
use txm::mux::{Multiplexer, MuxResult, Operation};
use txm::ui::RenderSink;

use crate::app::request::MuxRequest;
use crate::app::AppError;

pub(crate) fn dispatch(
    mux: &dyn Multiplexer,
    request: &MuxRequest,
    sink: &dyn RenderSink,
) -> Result<(), AppError> {
    let backend = mux.backend();
    let operation = request.operation();
    if !mux.supports(operation) {
        return Err(MuxError::Unsupported { backend, operation }.into());
    }
    for session in request.required_sessions() {
        if !mux.session_exists(session) {
            return Err(MuxError::SessionNotFound {
                backend,
                session: session.to_string(),
            }
            .into());
        }
    }

    debug!(%backend, %operation, "dispatching");
    match (invoke(mux, request), operation) {
        (Ok(()), _) => {
            if let Some(message) = success_message(mux, request) {
                sink.info(&message);
            }
            Ok(())
        }
        (Err(MuxError::NoSessions { .. }), Operation::NukeAll)
        | (Err(MuxError::Status { .. }), Operation::ListSessions) => {
            sink.warn(&format!("No {backend} sessions found"));
            Ok(())
        }
        (Err(e), _) => Err(e.into()),
    }
}

fn invoke(mux: &dyn Multiplexer, request: &MuxRequest) -> MuxResult {
    match request {
        MuxRequest::Create { name } => mux.create_session(name),
        MuxRequest::List => mux.list_sessions(),
        MuxRequest::Attach { name } => mux.attach_session(name),
        MuxRequest::Detach => mux.detach_session(),
        MuxRequest::Delete { name } => mux.kill_session(name),
        MuxRequest::Nuke => mux.nuke_all(),
        MuxRequest::RenameSession { old, new } => mux.rename_session(old, new),
        MuxRequest::NewWindow { session, name } => mux.new_window(session, name),
        MuxRequest::ListWindows { session } => mux.list_windows(session),
        MuxRequest::KillWindow { session, window } => mux.kill_window(session, window),
        MuxRequest::NextWindow { session } => mux.next_window(session),
        MuxRequest::PrevWindow { session } => mux.previous_window(session),
        MuxRequest::RenameWindow { session, old, new } => mux.rename_window(session, old, new),
        MuxRequest::MoveWindow { src, window, dst } => mux.move_window(src, window, dst),
        MuxRequest::SwapWindow {
            session,
            first,
            second,
        } => mux.swap_window(session, first, second),
        MuxRequest::SplitWindow {
            session,
            window,
            direction,
        } => mux.split_window(session, window, *direction),
        MuxRequest::ListPanes { session, window } => mux.list_panes(session, window),
        MuxRequest::KillPane {
            session,
            window,
            pane,
        } => mux.kill_pane(session, window, pane),
        MuxRequest::ResizePane {
            session,
            window,
            pane,
            direction,
            size,
        } => mux.resize_pane(session, window, pane, *direction, *size),
        MuxRequest::SendKeys {
            session,
            window,
            pane,
            keys,
        } => mux.send_keys(session, window, pane, keys),
    }
}

/// Confirmation line for verbs whose output is not already the result.
fn success_message(mux: &dyn Multiplexer, request: &MuxRequest) -> Option<String> {
    let b = mux.backend();
    let message = match request {
        MuxRequest::List
        | MuxRequest::Attach { .. }
        | MuxRequest::ListWindows { .. }
        | MuxRequest::ListPanes { .. } => return None,
        MuxRequest::Create { name } => format!("Session '{name}' created with {b}"),
        MuxRequest::Detach => format!("Detached from {b} session"),
        MuxRequest::Delete { name } => format!("Killed {b} session '{name}'"),
        MuxRequest::Nuke => format!("Killed all {b} sessions"),
        MuxRequest::RenameSession { old, new } => {
            format!("Renamed {b} session from '{old}' to '{new}'")
        }
        MuxRequest::NewWindow { session, name } => {
            format!("Window '{name}' created in {b} session '{session}'")
        }
        MuxRequest::KillWindow { session, window } => {
            format!("Killed window '{window}' in {b} session '{session}'")
        }
        MuxRequest::NextWindow { session } => {
            format!("Switched to next window in {b} session '{session}'")
        }
        MuxRequest::PrevWindow { session } => {
            format!("Switched to previous window in {b} session '{session}'")
        }
        MuxRequest::RenameWindow { session, old, new } => {
            format!("Renamed window '{old}' to '{new}' in {b} session '{session}'")
        }
        MuxRequest::MoveWindow { src, window, dst } => {
            format!("Moved window '{window}' from {b} session '{src}' to '{dst}'")
        }
        MuxRequest::SwapWindow {
            session,
            first,
            second,
        } => format!("Swapped windows '{first}' and '{second}' in {b} session '{session}'"),
        MuxRequest::SplitWindow {
            session,
            window,
            direction,
        } => format!(
            "Split window '{window}' {} in {b} session '{session}'",
            direction.describe()
        ),
        MuxRequest::KillPane {
            session,
            window,
            pane,
        } => format!("Killed pane {pane} in window '{window}' of {b} session '{session}'"),
        MuxRequest::ResizePane {
            session,
            window,
            pane,
            direction,
            size,
        } => format!(
            "Resized pane {pane} in window '{window}' of {b} session '{session}' {} by {size}",
            direction.as_word()
        ),
        MuxRequest::SendKeys {
            session,
            window,
            pane,
            ..
        } => format!("Sent keys to pane {pane} in window '{window}' of {b} session '{session}'"),
    };
    Some(message)
}
