//! On-demand checks against a real tmux server.
//!
//! Ignored by default: they need `tmux` on PATH and start a detached
//! session on the user's default socket.

use std::time::{SystemTime, UNIX_EPOCH};

use txm::backend::Backend;
use txm::mux::{adapter_for, SplitDirection, SystemRunner};

fn unique_session(label: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("txm-it-{label}-{}-{nanos}", std::process::id())
}

#[test]
#[ignore = "requires tmux"]
fn tmux_session_lifecycle() {
    let runner = SystemRunner;
    let tmux = adapter_for(Backend::Tmux, &runner);
    let name = unique_session("lifecycle");

    assert!(!tmux.session_exists(&name));
    tmux.create_session(&name).expect("create");
    assert!(tmux.session_exists(&name));

    tmux.new_window(&name, "logs").expect("new-window");
    tmux.split_window(&name, "logs", SplitDirection::Vertical)
        .expect("split-window");
    tmux.send_keys(&name, "logs", "1", "echo hi").expect("send-keys");

    let renamed = format!("{name}-r");
    tmux.rename_session(&name, &renamed).expect("rename-session");
    assert!(tmux.session_exists(&renamed));

    tmux.kill_session(&renamed).expect("kill-session");
    assert!(!tmux.session_exists(&renamed));
}
