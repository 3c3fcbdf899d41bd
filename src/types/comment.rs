use serde::{Deserialize, Serialize};

/// Object a `CM_` comment is attached to.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CommentTarget {
    /// `CM_ "<text>";`
    #[default]
    Network,
    /// `CM_ BU_ <node> "<text>";`
    Node(String),
    /// `CM_ BO_ <id> "<text>";`
    Message(u32),
    /// `CM_ SG_ <id> <signal> "<text>";`
    Signal { message_id: u32, signal: String },
    /// `CM_ EV_ <name> "<text>";`
    EnvironmentVariable(String),
}

#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub target: CommentTarget,
    /// Comment body with the surrounding quotes removed. Line breaks are kept.
    pub text: String,
}
