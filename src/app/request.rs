//! Validation of parsed CLI commands into typed requests.

use txm::backend::Backend;
use txm::mux::{Operation, ResizeDirection, SplitDirection};

use crate::app::AppError;
use crate::cli::Command;

const DEFAULT_RESIZE_SIZE: u32 = 5;

/// One multiplexer verb with all required arguments present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MuxRequest {
    Create { name: String },
    List,
    Attach { name: String },
    Detach,
    Delete { name: String },
    Nuke,
    RenameSession { old: String, new: String },
    NewWindow { session: String, name: String },
    ListWindows { session: String },
    KillWindow { session: String, window: String },
    NextWindow { session: String },
    PrevWindow { session: String },
    RenameWindow {
        session: String,
        old: String,
        new: String,
    },
    MoveWindow {
        src: String,
        window: String,
        dst: String,
    },
    SwapWindow {
        session: String,
        first: String,
        second: String,
    },
    SplitWindow {
        session: String,
        window: String,
        direction: SplitDirection,
    },
    ListPanes { session: String, window: String },
    KillPane {
        session: String,
        window: String,
        pane: String,
    },
    ResizePane {
        session: String,
        window: String,
        pane: String,
        direction: ResizeDirection,
        size: u32,
    },
    SendKeys {
        session: String,
        window: String,
        pane: String,
        keys: String,
    },
}

impl MuxRequest {
    pub(crate) fn operation(&self) -> Operation {
        match self {
            Self::Create { .. } => Operation::CreateSession,
            Self::List => Operation::ListSessions,
            Self::Attach { .. } => Operation::AttachSession,
            Self::Detach => Operation::DetachSession,
            Self::Delete { .. } => Operation::KillSession,
            Self::Nuke => Operation::NukeAll,
            Self::RenameSession { .. } => Operation::RenameSession,
            Self::NewWindow { .. } => Operation::NewWindow,
            Self::ListWindows { .. } => Operation::ListWindows,
            Self::KillWindow { .. } => Operation::KillWindow,
            Self::NextWindow { .. } => Operation::NextWindow,
            Self::PrevWindow { .. } => Operation::PreviousWindow,
            Self::RenameWindow { .. } => Operation::RenameWindow,
            Self::MoveWindow { .. } => Operation::MoveWindow,
            Self::SwapWindow { .. } => Operation::SwapWindow,
            Self::SplitWindow { .. } => Operation::SplitWindow,
            Self::ListPanes { .. } => Operation::ListPanes,
            Self::KillPane { .. } => Operation::KillPane,
            Self::ResizePane { .. } => Operation::ResizePane,
            Self::SendKeys { .. } => Operation::SendKeys,
        }
    }

    /// Sessions that must already exist before the verb runs.
    pub(crate) fn required_sessions(&self) -> Vec<&str> {
        match self {
            Self::Create { .. } | Self::List | Self::Detach | Self::Nuke => Vec::new(),
            Self::Attach { name } | Self::Delete { name } => vec![name.as_str()],
            Self::RenameSession { old, .. } => vec![old.as_str()],
            Self::MoveWindow { src, dst, .. } => vec![src.as_str(), dst.as_str()],
            Self::NewWindow { session, .. }
            | Self::ListWindows { session }
            | Self::KillWindow { session, .. }
            | Self::NextWindow { session }
            | Self::PrevWindow { session }
            | Self::RenameWindow { session, .. }
            | Self::SwapWindow { session, .. }
            | Self::SplitWindow { session, .. }
            | Self::ListPanes { session, .. }
            | Self::KillPane { session, .. }
            | Self::ResizePane { session, .. }
            | Self::SendKeys { session, .. } => vec![session.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigRequest {
    SetBackend(Backend),
    GetBackend,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    Mux(MuxRequest),
    Config(ConfigRequest),
    Version { check_update: bool },
    Update,
    Uninstall,
    Help,
}

fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Usage(message.to_string()))
}

fn required_all<const N: usize>(
    values: [Option<String>; N],
    message: &str,
) -> Result<[String; N], AppError> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = required(value, message)?;
    }
    Ok(out)
}

const NEED_SESSION: &str = "Please specify a session name";
const NEED_SESSION_WINDOW: &str = "Please specify both session name and window name";
const NEED_PANE: &str = "Please specify session name, window name, and pane number";

/// Turn a parsed command into a validated request.
pub(crate) fn request_from_command(command: Command) -> Result<Request, AppError> {
    let mux = match command {
        Command::Create { name } => MuxRequest::Create {
            name: required(name, NEED_SESSION)?,
        },
        Command::List => MuxRequest::List,
        Command::Attach { name } => MuxRequest::Attach {
            name: required(name, NEED_SESSION)?,
        },
        Command::Detach => MuxRequest::Detach,
        Command::Delete { name } => MuxRequest::Delete {
            name: required(name, NEED_SESSION)?,
        },
        Command::Nuke => MuxRequest::Nuke,
        Command::NewWindow { session, name } => {
            let [session, name] = required_all([session, name], NEED_SESSION_WINDOW)?;
            MuxRequest::NewWindow { session, name }
        }
        Command::ListWindows { session } => MuxRequest::ListWindows {
            session: required(session, NEED_SESSION)?,
        },
        Command::KillWindow { session, window } => {
            let [session, window] = required_all([session, window], NEED_SESSION_WINDOW)?;
            MuxRequest::KillWindow { session, window }
        }
        Command::NextWindow { session } => MuxRequest::NextWindow {
            session: required(session, NEED_SESSION)?,
        },
        Command::PrevWindow { session } => MuxRequest::PrevWindow {
            session: required(session, NEED_SESSION)?,
        },
        Command::RenameSession { old, new } => {
            let [old, new] = required_all(
                [old, new],
                "Please specify both old session name and new session name",
            )?;
            MuxRequest::RenameSession { old, new }
        }
        Command::RenameWindow { session, old, new } => {
            let [session, old, new] = required_all(
                [session, old, new],
                "Please specify session name, old window name, and new window name",
            )?;
            MuxRequest::RenameWindow { session, old, new }
        }
        Command::MoveWindow {
            src_session,
            window,
            dst_session,
        } => {
            let [src, window, dst] = required_all(
                [src_session, window, dst_session],
                "Please specify source session, window name, and destination session",
            )?;
            MuxRequest::MoveWindow { src, window, dst }
        }
        Command::SwapWindow {
            session,
            first,
            second,
        } => {
            let [session, first, second] = required_all(
                [session, first, second],
                "Please specify session name, first window name, and second window name",
            )?;
            MuxRequest::SwapWindow {
                session,
                first,
                second,
            }
        }
        Command::SplitWindow {
            session,
            window,
            direction,
        } => {
            let [session, window] = required_all([session, window], NEED_SESSION_WINDOW)?;
            let direction = match direction {
                Some(raw) => raw.parse().map_err(|_| {
                    AppError::Usage(format!("Invalid split direction '{raw}'. Use v or h"))
                })?,
                None => SplitDirection::default(),
            };
            MuxRequest::SplitWindow {
                session,
                window,
                direction,
            }
        }
        Command::ListPanes { session, window } => {
            let [session, window] = required_all([session, window], NEED_SESSION_WINDOW)?;
            MuxRequest::ListPanes { session, window }
        }
        Command::KillPane {
            session,
            window,
            pane,
        } => {
            let [session, window, pane] = required_all([session, window, pane], NEED_PANE)?;
            MuxRequest::KillPane {
                session,
                window,
                pane,
            }
        }
        Command::ResizePane {
            session,
            window,
            pane,
            direction,
            size,
        } => {
            let size = match size {
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(|| AppError::Usage("Size must be a number".to_string()))?,
                None => DEFAULT_RESIZE_SIZE,
            };
            let [session, window, pane] = required_all(
                [session, window, pane],
                "Please specify session name, window name, pane number, and direction (U/D/L/R)",
            )?;
            let direction = match direction {
                Some(raw) => raw.parse().map_err(|_| {
                    AppError::Usage(format!(
                        "Invalid resize direction '{raw}'. Use U, D, L or R"
                    ))
                })?,
                None => ResizeDirection::default(),
            };
            MuxRequest::ResizePane {
                session,
                window,
                pane,
                direction,
                size,
            }
        }
        Command::SendKeys {
            session,
            window,
            pane,
            keys,
        } => {
            let [session, window, pane, keys] = required_all(
                [session, window, pane, keys],
                "Please specify session name, window name, pane number, and keys to send",
            )?;
            MuxRequest::SendKeys {
                session,
                window,
                pane,
                keys,
            }
        }
        Command::Config { action, key, value } => {
            return config_request(action, key, value).map(Request::Config)
        }
        Command::Version { check_update } => return Ok(Request::Version { check_update }),
        Command::Update { .. } => return Ok(Request::Update),
        Command::Uninstall => return Ok(Request::Uninstall),
        Command::Help => return Ok(Request::Help),
    };
    Ok(Request::Mux(mux))
}

const CONFIG_USAGE: &str =
    "Usage: txm config set backend <tmux|zellij|screen> | txm config get backend | txm config show";

fn config_request(
    action: Option<String>,
    key: Option<String>,
    value: Option<String>,
) -> Result<ConfigRequest, AppError> {
    let usage = || AppError::Usage(CONFIG_USAGE.to_string());
    match (action.as_deref(), key.as_deref()) {
        (Some("show"), None) => Ok(ConfigRequest::Show),
        (Some("get"), Some("backend")) => Ok(ConfigRequest::GetBackend),
        (Some("set"), Some("backend")) => {
            let raw = value.ok_or_else(usage)?;
            raw.parse::<Backend>()
                .map(ConfigRequest::SetBackend)
                .map_err(|e| AppError::Usage(e.to_string()))
        }
        _ => Err(usage()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn missing_session_name_is_usage_error() {
        let err = request_from_command(Command::Create { name: None }).unwrap_err();
        assert!(matches!(err, AppError::Usage(ref m) if m == NEED_SESSION));
    }

    #[test]
    fn split_defaults_to_vertical() {
        let req = request_from_command(Command::SplitWindow {
            session: s("dev"),
            window: s("0"),
            direction: None,
        })
        .unwrap();
        assert_eq!(
            req,
            Request::Mux(MuxRequest::SplitWindow {
                session: "dev".into(),
                window: "0".into(),
                direction: SplitDirection::Vertical,
            })
        );
    }

    #[test]
    fn resize_defaults_to_up_by_five() {
        let req = request_from_command(Command::ResizePane {
            session: s("dev"),
            window: s("0"),
            pane: s("1"),
            direction: None,
            size: None,
        })
        .unwrap();
        let Request::Mux(MuxRequest::ResizePane { direction, size, .. }) = req else {
            panic!("expected resize request");
        };
        assert_eq!(direction, ResizeDirection::Up);
        assert_eq!(size, 5);
    }

    #[test]
    fn resize_size_must_be_numeric() {
        let err = request_from_command(Command::ResizePane {
            session: s("dev"),
            window: s("0"),
            pane: s("1"),
            direction: s("R"),
            size: s("ten"),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Usage(ref m) if m == "Size must be a number"));
    }

    #[test]
    fn resize_size_must_be_positive() {
        for raw in ["0", "-3"] {
            let err = request_from_command(Command::ResizePane {
                session: s("dev"),
                window: s("0"),
                pane: s("1"),
                direction: s("R"),
                size: s(raw),
            })
            .unwrap_err();
            assert!(matches!(err, AppError::Usage(ref m) if m == "Size must be a number"));
        }
    }

    #[test]
    fn invalid_direction_is_usage_error() {
        let err = request_from_command(Command::SplitWindow {
            session: s("dev"),
            window: s("0"),
            direction: s("diagonal"),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }

    #[test]
    fn move_window_requires_both_sessions_to_exist() {
        let req = MuxRequest::MoveWindow {
            src: "a".into(),
            window: "logs".into(),
            dst: "b".into(),
        };
        assert_eq!(req.required_sessions(), vec!["a", "b"]);
        assert_eq!(req.operation(), Operation::MoveWindow);
        assert!(MuxRequest::Nuke.required_sessions().is_empty());
    }

    #[test]
    fn config_requests_parse() {
        let set = request_from_command(Command::Config {
            action: s("set"),
            key: s("backend"),
            value: s("Screen"),
        })
        .unwrap();
        assert_eq!(set, Request::Config(ConfigRequest::SetBackend(Backend::Screen)));
        let show = request_from_command(Command::Config {
            action: s("show"),
            key: None,
            value: None,
        })
        .unwrap();
        assert_eq!(show, Request::Config(ConfigRequest::Show));
    }

    #[test]
    fn config_rejects_unknown_backend_and_keys() {
        let bad_backend = request_from_command(Command::Config {
            action: s("set"),
            key: s("backend"),
            value: s("byobu"),
        })
        .unwrap_err();
        assert!(bad_backend.to_string().contains("byobu"));
        assert!(request_from_command(Command::Config {
            action: s("get"),
            key: s("theme"),
            value: None,
        })
        .is_err());
    }
}
